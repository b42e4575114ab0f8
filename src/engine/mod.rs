//! Игровой движок: сессии, раунд Teen Patti, передача хода, валидация.
//!
//! Высокоуровневый объект: `SessionManager`
//! Основные операции:
//!   - `start_session` / `end_session` / `split_pot` – жизненный цикл сессии
//!   - `apply_round_action` – see / call / raise / fold / show
//!   - `select_showdown_winner` – ручной выбор победителя на шоудауне

pub mod actions;
pub mod errors;
pub mod history;
pub mod positions;
pub mod pot;
pub mod round;
pub mod session;
pub mod validation;

pub use actions::{RoundAction, RoundActionKind};
pub use errors::{
    EngineError, IllegalActionError, IllegalActionReason, SessionStartError, SessionStartReason,
};
pub use history::{RoundEvent, RoundEventKind, RoundHistory};
pub use pot::Pot;
pub use round::{
    apply_action, select_showdown_winner, RoundPhase, RoundPlayer, RoundState, RoundStatus,
    RoundSummary,
};
pub use session::{SessionManager, SplitShare};
