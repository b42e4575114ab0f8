use crate::domain::chips::Chips;
use crate::engine::actions::{RoundAction, RoundActionKind};
use crate::engine::errors::{IllegalActionError, IllegalActionReason};
use crate::engine::positions::active_count;
use crate::engine::round::{RoundPhase, RoundState};

/// Проверка, может ли игрок выполнить это действие при текущем состоянии раунда.
///
/// `balance` – живой баланс действующего игрока из реестра.
pub fn validate_action(
    round: &RoundState,
    action: &RoundAction,
    balance: Chips,
) -> Result<(), IllegalActionError> {
    if round.phase != RoundPhase::Betting {
        return Err(IllegalActionReason::WrongTurn.into());
    }

    let player = round
        .acting_player()
        .ok_or(IllegalActionError::new(IllegalActionReason::WrongTurn))?;
    if player.player_id != action.player_id || player.has_folded {
        return Err(IllegalActionReason::WrongTurn.into());
    }

    match action.kind {
        RoundActionKind::See | RoundActionKind::Fold => Ok(()),

        RoundActionKind::Call => {
            let to_call = player.current_bet.shortfall_to(round.current_bet);
            if balance < to_call {
                return Err(IllegalActionReason::InsufficientBalance.into());
            }
            Ok(())
        }

        RoundActionKind::Raise(total_bet) => {
            if total_bet <= round.current_bet {
                return Err(IllegalActionReason::BetTooLow.into());
            }
            let diff = player.current_bet.shortfall_to(total_bet);
            if balance < diff {
                return Err(IllegalActionReason::InsufficientBalance.into());
            }
            Ok(())
        }

        RoundActionKind::Show => {
            if active_count(&round.players) != 2 || !player.is_seen {
                return Err(IllegalActionReason::ShowNotAvailable.into());
            }
            Ok(())
        }
    }
}
