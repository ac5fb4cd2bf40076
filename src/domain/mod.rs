//! Доменная модель: карты, колода, фишки, игроки, параметры стола.

pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;
pub mod player;
pub mod table;

pub type PlayerId = u64;
pub type HandId = u64;

pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
pub use table::*;
