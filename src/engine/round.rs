//! Раунд ставок Teen Patti.
//!
//! Фазы: Betting → Showdown → Finished. Ход принадлежит
//! `players[current_player_index]`; все деньги двигаются через `Ledger`.
//! Отклонённое действие состояние не меняет.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::chips::Chips;
use crate::domain::{PlayerId, SessionId, SessionPlayer, TransactionKind};
use crate::engine::actions::{RoundAction, RoundActionKind};
use crate::engine::errors::{IllegalActionError, IllegalActionReason};
use crate::engine::history::{RoundEventKind, RoundHistory};
use crate::engine::positions::{active_count, active_indices, next_active_index};
use crate::engine::pot::Pot;
use crate::engine::validation::validate_action;
use crate::ledger::Ledger;

/// Фаза раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    Betting,
    Showdown,
    Finished,
}

/// Игрок в контексте раунда. Баланс берётся из реестра, здесь не дублируется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundPlayer {
    pub player_id: PlayerId,
    pub name: String,
    pub has_folded: bool,
    /// `false` – играет вслепую (blind).
    pub is_seen: bool,
    /// Сколько игрок уже поставил в этом раунде (включая анте).
    pub current_bet: Chips,
    /// Часть состояния, логикой не используется.
    pub is_all_in: bool,
}

impl RoundPlayer {
    pub fn new(player_id: PlayerId, name: impl Into<String>, ante: Chips) -> Self {
        Self {
            player_id,
            name: name.into(),
            has_folded: false,
            is_seen: false,
            current_bet: ante,
            is_all_in: false,
        }
    }
}

/// Состояние раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundState {
    pub session_id: SessionId,
    pub current_player_index: usize,
    pub pot: Pot,
    /// Максимальная ставка за столом.
    pub current_bet: Chips,
    pub players: Vec<RoundPlayer>,
    pub phase: RoundPhase,
    pub winner_id: Option<PlayerId>,
    pub history: RoundHistory,
}

/// Итог завершённого раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSummary {
    pub winner_id: PlayerId,
    pub winner_name: String,
    /// Сколько выплачено победителю (весь банк).
    pub amount: Chips,
    /// `true` – победитель выбран на шоудауне, `false` – все остальные сфолдили.
    pub via_showdown: bool,
    pub final_state: RoundState,
}

/// Статус раунда для внешнего кода.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    Ongoing,
    /// Объявлено вскрытие: ждём внешнего выбора победителя из двух кандидатов.
    Showdown { candidates: Vec<PlayerId> },
    Finished(Box<RoundSummary>),
}

impl RoundState {
    /// Новый раунд: анте уже списаны, у каждого current_bet = ante.
    pub fn start(session_id: SessionId, participants: &[SessionPlayer], ante: Chips) -> Self {
        let players: Vec<RoundPlayer> = participants
            .iter()
            .map(|p| RoundPlayer::new(p.player_id, p.name.clone(), ante))
            .collect();
        let pot = Pot::with_total(ante.times(players.len()));

        let mut history = RoundHistory::new();
        history.push(RoundEventKind::RoundStarted {
            session_id,
            ante,
            players: players.iter().map(|p| p.player_id).collect(),
            pot: pot.total,
        });

        Self {
            session_id,
            current_player_index: 0,
            pot,
            current_bet: ante,
            players,
            phase: RoundPhase::Betting,
            winner_id: None,
            history,
        }
    }

    pub fn acting_player(&self) -> Option<&RoundPlayer> {
        self.players.get(self.current_player_index)
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&RoundPlayer> {
        self.players.iter().find(|p| p.player_id == player_id)
    }

    pub fn active_players(&self) -> impl Iterator<Item = &RoundPlayer> {
        self.players.iter().filter(|p| !p.has_folded)
    }

    /// Кандидаты на шоудаун – ровно те, кто ещё в игре.
    pub fn showdown_candidates(&self) -> Vec<PlayerId> {
        self.active_players().map(|p| p.player_id).collect()
    }

    pub fn is_finished(&self) -> bool {
        self.phase == RoundPhase::Finished
    }

    fn advance_turn(&mut self) {
        if let Some(next) = next_active_index(&self.players, self.current_player_index) {
            self.current_player_index = next;
        }
    }

    /// Доложить в банк `amount` от действующего игрока, подняв его ставку до `new_bet`.
    fn commit_bet(&mut self, ledger: &mut Ledger, amount: Chips, new_bet: Chips, label: &str) {
        let idx = self.current_player_index;
        let player_id = self.players[idx].player_id;
        if !amount.is_zero() {
            ledger.post(player_id, amount, TransactionKind::Subtract, label);
            self.pot.add(amount);
        }
        self.players[idx].current_bet = new_bet;
    }

    /// Выплатить весь банк победителю и закрыть раунд.
    fn award(
        &mut self,
        ledger: &mut Ledger,
        winner_id: PlayerId,
        via_showdown: bool,
    ) -> RoundSummary {
        let amount = self.pot.total;
        let description = if via_showdown {
            "Won Teen Patti showdown"
        } else {
            "Won Teen Patti game"
        };
        ledger.post(winner_id, amount, TransactionKind::Win, description);

        self.phase = RoundPhase::Finished;
        self.winner_id = Some(winner_id);
        self.history.push(RoundEventKind::PotAwarded {
            player_id: winner_id,
            amount,
        });
        self.history.push(RoundEventKind::RoundFinished {
            session_id: self.session_id,
        });

        let winner_name = self
            .player(winner_id)
            .map(|p| p.name.clone())
            .unwrap_or_default();
        info!(
            session_id = self.session_id,
            winner_id,
            amount = amount.0,
            via_showdown,
            "teen patti round finished"
        );

        RoundSummary {
            winner_id,
            winner_name,
            amount,
            via_showdown,
            final_state: self.clone(),
        }
    }
}

/// Применить действие игрока. Возвращает статус раунда (идёт / шоудаун / закончился).
pub fn apply_action(
    round: &mut RoundState,
    ledger: &mut Ledger,
    action: RoundAction,
) -> Result<RoundStatus, IllegalActionError> {
    let balance = ledger.balance_of(action.player_id);
    validate_action(round, &action, balance)?;

    let idx = round.current_player_index;
    let bet_before = round.players[idx].current_bet;
    let pot_before = round.pot.total;

    let status = match action.kind {
        RoundActionKind::See => {
            round.players[idx].is_seen = true;
            RoundStatus::Ongoing
        }

        RoundActionKind::Call => {
            let table_bet = round.current_bet;
            let to_call = bet_before.shortfall_to(table_bet);
            round.commit_bet(ledger, to_call, table_bet, "Teen Patti call");
            RoundStatus::Ongoing
        }

        RoundActionKind::Raise(total_bet) => {
            let diff = bet_before.shortfall_to(total_bet);
            round.commit_bet(ledger, diff, total_bet, "Teen Patti raise");
            round.current_bet = total_bet;
            RoundStatus::Ongoing
        }

        RoundActionKind::Fold => {
            round.players[idx].has_folded = true;
            RoundStatus::Ongoing
        }

        RoundActionKind::Show => {
            round.phase = RoundPhase::Showdown;
            RoundStatus::Showdown {
                candidates: round.showdown_candidates(),
            }
        }
    };

    round.history.push(RoundEventKind::PlayerActed {
        player_id: action.player_id,
        action: action.kind,
        paid: round.pot.total - pot_before,
        pot_after: round.pot.total,
    });
    debug!(
        session_id = round.session_id,
        player_id = action.player_id,
        action = ?action.kind,
        pot = round.pot.total.0,
        table_bet = round.current_bet.0,
        "round action applied"
    );

    if let RoundStatus::Showdown { candidates } = &status {
        round.history.push(RoundEventKind::ShowdownCalled {
            called_by: action.player_id,
            candidates: candidates.clone(),
        });
        return Ok(status);
    }

    // Остался один – он забирает банк без шоудауна.
    if active_count(&round.players) == 1 {
        let survivor = active_indices(&round.players)[0];
        let winner_id = round.players[survivor].player_id;
        let summary = round.award(ledger, winner_id, false);
        return Ok(RoundStatus::Finished(Box::new(summary)));
    }

    if action.kind.passes_turn() {
        round.advance_turn();
    }

    Ok(status)
}

/// Внешний выбор победителя на шоудауне.
pub fn select_showdown_winner(
    round: &mut RoundState,
    ledger: &mut Ledger,
    winner_id: PlayerId,
) -> Result<RoundSummary, IllegalActionError> {
    if round.phase != RoundPhase::Showdown {
        return Err(IllegalActionReason::ShowNotAvailable.into());
    }
    if !round.showdown_candidates().contains(&winner_id) {
        return Err(IllegalActionReason::ShowNotAvailable.into());
    }

    Ok(round.award(ledger, winner_id, true))
}
