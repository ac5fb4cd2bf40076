use log::{info, warn};

use crate::api::{build_game_view, GameViewDto};
use crate::bot;
use crate::domain::player::PlayerStatus;
use crate::domain::table::Difficulty;
use crate::domain::PlayerId;
use crate::engine::actions::PlayerActionKind;
use crate::engine::errors::EngineError;
use crate::engine::{game_loop, RandomSource};
use crate::infra::config::GameConfig;
use crate::state::GameState;

/// Игровая сессия: конфиг + текущий снимок стола + RNG.
///
/// Единственный владелец состояния. Каждая операция заменяет снимок
/// целиком или (при ошибке) оставляет его как был.
pub struct PokerSession<R: RandomSource> {
    config: GameConfig,
    state: GameState,
    rng: R,
}

impl<R: RandomSource> PokerSession<R> {
    /// Новая сессия, раздача ещё не начата.
    pub fn new(config: GameConfig, rng: R) -> Self {
        let state = GameState::new(&config);
        Self { config, state, rng }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Снимок стола глазами `hero` (`None` – наблюдатель).
    pub fn view(&self, hero: Option<PlayerId>) -> GameViewDto {
        build_game_view(&self.state, hero)
    }

    /// Все стеки заново, кнопка на месте 0, сразу первая раздача.
    pub fn initialize_game(&mut self) -> Result<&GameState, EngineError> {
        let fresh = GameState::new(&self.config);
        self.state = game_loop::start_new_hand(&fresh, &mut self.rng)?;
        info!("new game: {} seats", self.state.players.len());
        Ok(&self.state)
    }

    /// Следующая раздача (кнопка сдвигается).
    pub fn start_new_hand(&mut self) -> Result<&GameState, EngineError> {
        self.state = game_loop::start_new_hand(&self.state, &mut self.rng)?;
        Ok(&self.state)
    }

    /// Действие игрока. Ошибка – состояние без изменений.
    pub fn submit_action(
        &mut self,
        player_id: PlayerId,
        action: PlayerActionKind,
    ) -> Result<&GameState, EngineError> {
        match game_loop::apply_action(&self.state, player_id, action) {
            Ok(next) => {
                self.state = next;
                Ok(&self.state)
            }
            Err(err) => {
                warn!("rejected {} from player {}: {}", action, player_id, err);
                Err(err)
            }
        }
    }

    /// Тик ранаута. Идемпотентен, если ходить есть кому или раздача окончена.
    pub fn proceed(&mut self) -> &GameState {
        self.state = game_loop::proceed(&self.state);
        &self.state
    }

    /// Действует со следующей раздачи.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!("difficulty: {} -> {}", self.state.difficulty, difficulty);
        self.state.difficulty = difficulty;
        self.config.difficulty = difficulty;
    }

    /// Пропускать раздачи. Только между раздачами.
    pub fn sit_out(&mut self, player_id: PlayerId) -> Result<(), EngineError> {
        if self.state.phase.is_live() {
            return Err(EngineError::HandAlreadyInProgress);
        }
        let seat = self
            .state
            .player_index(player_id)
            .ok_or(EngineError::UnknownPlayer(player_id))?;
        self.state.players[seat].status = PlayerStatus::SittingOut;
        Ok(())
    }

    /// Вернуться в игру со следующей раздачи.
    pub fn sit_in(&mut self, player_id: PlayerId) -> Result<(), EngineError> {
        if self.state.phase.is_live() {
            return Err(EngineError::HandAlreadyInProgress);
        }
        let seat = self
            .state
            .player_index(player_id)
            .ok_or(EngineError::UnknownPlayer(player_id))?;
        let player = &mut self.state.players[seat];
        if player.status == PlayerStatus::SittingOut {
            player.status = if player.chips.is_zero() {
                PlayerStatus::Busted
            } else {
                PlayerStatus::Active
            };
        }
        Ok(())
    }

    /// Решение бота, если сейчас ходит бот.
    pub fn next_bot_action(&mut self) -> Option<(PlayerId, PlayerActionKind)> {
        let seat = self.state.current_player_index?;
        let player = self.state.players.get(seat)?;
        if !player.is_bot {
            return None;
        }
        let id = player.id;
        let action = bot::decide(seat, &self.state, self.state.difficulty, &mut self.rng);
        Some((id, action))
    }

    /// Сыграть ход бота, если сейчас ходит бот. `None` – ход не бота.
    pub fn play_bot_turn(&mut self) -> Option<Result<&GameState, EngineError>> {
        let (id, action) = self.next_bot_action()?;
        Some(self.submit_action(id, action))
    }

    pub fn is_human_turn(&self) -> bool {
        self.state.current_player().is_some_and(|p| !p.is_bot)
    }
}
