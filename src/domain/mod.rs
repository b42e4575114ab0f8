//! Доменная модель: деньги, игроки, проводки, сессии, конфиг.

pub mod chips;
pub mod config;
pub mod game;
pub mod player;
pub mod transaction;

// Базовые идентификаторы.
pub type PlayerId = u64;
pub type TransactionId = u64;
pub type SessionId = u64;

/// Unix-время в миллисекундах.
pub type Timestamp = u64;

pub use chips::*;
pub use config::*;
pub use game::*;
pub use player::*;
pub use transaction::*;
