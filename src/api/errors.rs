use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::PlayerId;
use crate::engine::{
    EngineError, IllegalActionError, IllegalActionReason, SessionStartError, SessionStartReason,
};
use crate::ledger::LedgerError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Error)]
#[serde(tag = "error", content = "details", rename_all = "snake_case")]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    #[error("Некорректный запрос: {0}")]
    BadRequest(String),

    /// Отказ при старте сессии.
    #[error("Сессию начать нельзя ({reason})")]
    SessionStart {
        reason: SessionStartReason,
        player_id: Option<PlayerId>,
    },

    /// Недопустимое действие в раунде.
    #[error("Недопустимое действие ({reason})")]
    IllegalAction { reason: IllegalActionReason },

    #[error("Нет активной сессии")]
    NoActiveSession,

    #[error("В активной сессии нет раунда Teen Patti")]
    NoActiveRound,

    /// Игрока нельзя удалить, пока он в активной сессии.
    #[error("Игрок {0} участвует в активной сессии")]
    PlayerInSession(PlayerId),

    /// Ошибка реестра.
    #[error("Ошибка реестра: {0}")]
    Ledger(String),
}

impl From<SessionStartError> for ApiError {
    fn from(err: SessionStartError) -> Self {
        ApiError::SessionStart {
            reason: err.reason,
            player_id: err.player_id,
        }
    }
}

impl From<IllegalActionError> for ApiError {
    fn from(err: IllegalActionError) -> Self {
        ApiError::IllegalAction { reason: err.reason }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::SessionStart(e) => e.into(),
            EngineError::IllegalAction(e) => e.into(),
            EngineError::NoActiveSession => ApiError::NoActiveSession,
            EngineError::NoActiveRound => ApiError::NoActiveRound,
            EngineError::PlayerInSession(id) => ApiError::PlayerInSession(id),
        }
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        ApiError::Ledger(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
