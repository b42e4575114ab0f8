//! Реестр балансов и менеджер игровых сессий для домашних карточных игр
//! (игра на анте и Teen Patti).
//!
//! Слои:
//! - `domain` – деньги, игроки, проводки, сессии, конфиг;
//! - `ledger` – реестр игроков и журнал проводок;
//! - `engine` – сессии и раунд ставок Teen Patti;
//! - `api` – команды / запросы / DTO для внешнего потребителя;
//! - `state` – `LedgerState`, который всё это связывает.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod ledger;
pub mod state;

pub use state::LedgerState;
