//! Боты: эвристическое дерево решений с параметрами по сложности.
//!
//! Без памяти между раздачами: каждое решение – свежий бросок RNG.

pub mod policy;
pub mod profile;

pub use policy::{decide, legalize, Intent};
pub use profile::BotProfile;
