use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::PlayerId;

/// Почему действие в раунде отклонено.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum IllegalActionReason {
    /// Рейз не выше текущей ставки стола.
    BetTooLow,
    /// Баланса не хватает на доплату.
    InsufficientBalance,
    /// Действует не тот игрок (или сейчас вообще ничей ход).
    WrongTurn,
    /// Шоу невозможно: не двое в игре, игрок blind или нет шоудауна.
    ShowNotAvailable,
}

impl IllegalActionReason {
    /// Машинный код причины.
    pub fn code(self) -> &'static str {
        match self {
            IllegalActionReason::BetTooLow => "bet-too-low",
            IllegalActionReason::InsufficientBalance => "insufficient-balance",
            IllegalActionReason::WrongTurn => "wrong-turn",
            IllegalActionReason::ShowNotAvailable => "show-not-available",
        }
    }
}

impl fmt::Display for IllegalActionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Отказ в действии. Состояние раунда при этом не меняется.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Error)]
#[error("Недопустимое действие ({reason})")]
pub struct IllegalActionError {
    pub reason: IllegalActionReason,
}

impl IllegalActionError {
    pub fn new(reason: IllegalActionReason) -> Self {
        Self { reason }
    }
}

impl From<IllegalActionReason> for IllegalActionError {
    fn from(reason: IllegalActionReason) -> Self {
        Self::new(reason)
    }
}

/// Почему не удалось начать сессию.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SessionStartReason {
    TooFewPlayers,
    TooManyPlayers,
    /// Игрок не найден в реестре или не тянет анте.
    IneligiblePlayer,
    SessionActive,
    /// Анте должно быть больше нуля.
    InvalidAnte,
}

impl SessionStartReason {
    pub fn code(self) -> &'static str {
        match self {
            SessionStartReason::TooFewPlayers => "too-few-players",
            SessionStartReason::TooManyPlayers => "too-many-players",
            SessionStartReason::IneligiblePlayer => "ineligible-player",
            SessionStartReason::SessionActive => "session-active",
            SessionStartReason::InvalidAnte => "invalid-ante",
        }
    }
}

impl fmt::Display for SessionStartReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Ошибка старта сессии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Error)]
#[error("Сессию начать нельзя ({reason})")]
pub struct SessionStartError {
    pub reason: SessionStartReason,
    /// Для `ineligible-player` – кто именно не прошёл проверку.
    pub player_id: Option<PlayerId>,
}

impl SessionStartError {
    pub fn new(reason: SessionStartReason) -> Self {
        Self {
            reason,
            player_id: None,
        }
    }

    pub fn ineligible(player_id: PlayerId) -> Self {
        Self {
            reason: SessionStartReason::IneligiblePlayer,
            player_id: Some(player_id),
        }
    }
}

/// Ошибки менеджера сессий.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    SessionStart(#[from] SessionStartError),

    #[error(transparent)]
    IllegalAction(#[from] IllegalActionError),

    #[error("Нет активной сессии")]
    NoActiveSession,

    #[error("В активной сессии нет раунда Teen Patti")]
    NoActiveRound,

    #[error("Игрок {0} участвует в активной сессии")]
    PlayerInSession(PlayerId),
}
