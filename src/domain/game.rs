use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::{PlayerId, SessionId, Timestamp};

/// Вид игры.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum GameType {
    /// Простая игра на анте: победитель (или дележ) выбирается вручную.
    Ante,
    /// Teen Patti: раунд ставок с ходами, blind/seen, фолдом и шоу.
    TeenPatti,
}

impl GameType {
    pub fn label(self) -> &'static str {
        match self {
            GameType::Ante => "ante",
            GameType::TeenPatti => "teen-patti",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Допустимое количество игроков за столом (включительно).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerBounds {
    pub min: usize,
    pub max: usize,
}

impl PlayerBounds {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

/// Участник сессии: ссылка на игрока реестра + имя на момент старта.
///
/// Баланс не копируется – он живёт в `Ledger`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionPlayer {
    pub player_id: PlayerId,
    pub name: String,
}

/// Игровая сессия. Одновременно активна максимум одна.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSession {
    pub id: SessionId,
    pub game_type: GameType,
    /// Порядок участников = порядок в реестре на момент старта.
    pub players: Vec<SessionPlayer>,
    pub ante_amount: Chips,
    pub pot: Chips,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl GameSession {
    pub fn has_player(&self, player_id: PlayerId) -> bool {
        self.players.iter().any(|p| p.player_id == player_id)
    }

    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.player_id).collect()
    }
}
