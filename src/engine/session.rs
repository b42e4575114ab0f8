// src/engine/session.rs

use tracing::{info, warn};

use crate::domain::chips::Chips;
use crate::domain::config::LedgerConfig;
use crate::domain::{GameSession, GameType, PlayerId, SessionPlayer, TransactionKind};
use crate::engine::errors::{EngineError, SessionStartError, SessionStartReason};
use crate::engine::actions::RoundAction;
use crate::engine::round::{self, RoundState, RoundStatus, RoundSummary};
use crate::infra::IdGenerator;
use crate::ledger::Ledger;

/// Активная сессия + раунд Teen Patti (если это Teen Patti).
#[derive(Debug)]
struct ActiveSession {
    session: GameSession,
    round: Option<RoundState>,
}

impl ActiveSession {
    /// Банк сессии следует за банком раунда.
    fn sync_pot(&mut self) {
        if let Some(round) = &self.round {
            self.session.pot = round.pot.total;
        }
    }
}

/// Одна выплата при равном дележе банка.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitShare {
    pub player_id: PlayerId,
    pub amount: Chips,
}

/// Менеджер сессий:
/// - хранит максимум одну активную сессию (single-slot);
/// - собирает анте при старте и раздаёт банк при завершении;
/// - проксирует действия раунда в `round::apply_action` и закрывает сессию,
///   когда раунд закончился.
#[derive(Debug, Default)]
pub struct SessionManager {
    active: Option<ActiveSession>,
    ids: IdGenerator,
}

impl SessionManager {
    /// Создать пустой менеджер.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_active_session(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_session(&self) -> Option<&GameSession> {
        self.active.as_ref().map(|a| &a.session)
    }

    pub fn active_round(&self) -> Option<&RoundState> {
        self.active.as_ref().and_then(|a| a.round.as_ref())
    }

    /// Участвует ли игрок в активной сессии.
    pub fn is_seated(&self, player_id: PlayerId) -> bool {
        self.active_session()
            .map(|s| s.has_player(player_id))
            .unwrap_or(false)
    }

    /// Банк активной сессии (0, если сессии нет).
    pub fn pot(&self) -> Chips {
        self.active_session().map(|s| s.pot).unwrap_or(Chips::ZERO)
    }

    /// Старт сессии.
    ///
    /// Проверки по порядку: нет активной сессии, анте > 0, число игроков
    /// в пределах лимита игры, каждый выбранный игрок есть в реестре и тянет анте.
    /// Выбранные id дедуплицируются, порядок участников – порядок реестра.
    pub fn start_session(
        &mut self,
        ledger: &mut Ledger,
        config: &LedgerConfig,
        game_type: GameType,
        ante_amount: Chips,
        selected_player_ids: &[PlayerId],
    ) -> Result<&GameSession, SessionStartError> {
        if self.active.is_some() {
            return Err(SessionStartError::new(SessionStartReason::SessionActive));
        }
        if ante_amount.is_zero() {
            return Err(SessionStartError::new(SessionStartReason::InvalidAnte));
        }

        let mut selected: Vec<PlayerId> = Vec::with_capacity(selected_player_ids.len());
        for &id in selected_player_ids {
            if !selected.contains(&id) {
                selected.push(id);
            }
        }

        let bounds = config.bounds_for(game_type);
        if selected.len() < bounds.min {
            return Err(SessionStartError::new(SessionStartReason::TooFewPlayers));
        }
        if selected.len() > bounds.max {
            return Err(SessionStartError::new(SessionStartReason::TooManyPlayers));
        }

        for &id in &selected {
            match ledger.player(id) {
                Some(p) if p.can_afford(ante_amount) => {}
                _ => return Err(SessionStartError::ineligible(id)),
            }
        }

        let participants: Vec<SessionPlayer> = ledger
            .players()
            .iter()
            .filter(|p| selected.contains(&p.id))
            .map(|p| SessionPlayer {
                player_id: p.id,
                name: p.name.clone(),
            })
            .collect();

        let description = match game_type {
            GameType::Ante => "Ante for game",
            GameType::TeenPatti => "Teen Patti ante",
        };
        for p in &participants {
            ledger.post(p.player_id, ante_amount, TransactionKind::Ante, description);
        }

        let session_id = self.ids.next_session_id();
        let session = GameSession {
            id: session_id,
            game_type,
            players: participants,
            ante_amount,
            pot: ante_amount.times(selected.len()),
            is_active: true,
            created_at: ledger.now(),
        };

        let round = match game_type {
            GameType::Ante => None,
            GameType::TeenPatti => Some(RoundState::start(
                session_id,
                &session.players,
                ante_amount,
            )),
        };

        info!(
            session_id,
            game = %game_type,
            ante = ante_amount.0,
            players = session.players.len(),
            pot = session.pot.0,
            "session started"
        );

        let active = self.active.insert(ActiveSession { session, round });
        Ok(&active.session)
    }

    /// Завершить сессию. С победителем – весь банк ему (kind = win).
    ///
    /// Без победителя банк никому не зачисляется: раздать его должен вызывающий
    /// (см. `split_pot`). Без активной сессии – no-op.
    pub fn end_session(
        &mut self,
        ledger: &mut Ledger,
        winner_id: Option<PlayerId>,
    ) -> Option<GameSession> {
        let Some(mut active) = self.active.take() else {
            warn!("end_session: no active session, ignored");
            return None;
        };
        active.sync_pot();

        let mut session = active.session;
        match winner_id {
            Some(winner) => {
                let description = format!("Won {} game", session.game_type);
                ledger.post(winner, session.pot, TransactionKind::Win, &description);
                info!(
                    session_id = session.id,
                    winner,
                    pot = session.pot.0,
                    "session ended with winner"
                );
            }
            None if !session.pot.is_zero() => {
                warn!(
                    session_id = session.id,
                    pot = session.pot.0,
                    "session ended without winner, pot abandoned"
                );
            }
            None => {
                info!(session_id = session.id, "session ended");
            }
        }

        session.is_active = false;
        Some(session)
    }

    /// Разделить банк поровну и завершить сессию.
    ///
    /// В Teen Patti делится только между теми, кто не сфолдил.
    /// Остаток от деления раздаётся по одной единице первым по порядку.
    pub fn split_pot(&mut self, ledger: &mut Ledger) -> Result<Vec<SplitShare>, EngineError> {
        let active = self.active.as_mut().ok_or(EngineError::NoActiveSession)?;
        active.sync_pot();

        let recipients: Vec<PlayerId> = match &active.round {
            Some(round) => round.showdown_candidates(),
            None => active.session.player_ids(),
        };
        let (share, remainder) = active.session.pot.split(recipients.len());

        let shares: Vec<SplitShare> = recipients
            .iter()
            .enumerate()
            .map(|(i, &player_id)| {
                let bonus = if (i as u64) < remainder.0 { Chips(1) } else { Chips::ZERO };
                SplitShare {
                    player_id,
                    amount: share + bonus,
                }
            })
            .collect();

        for s in &shares {
            ledger.post(s.player_id, s.amount, TransactionKind::Add, "Pot distributed equally");
        }

        // Банк уже роздан – обнуляем, чтобы end_session не ругался на брошенный банк.
        active.session.pot = Chips::ZERO;
        if let Some(round) = active.round.as_mut() {
            round.pot.total = Chips::ZERO;
        }
        self.end_session(ledger, None);

        Ok(shares)
    }

    /// Действие игрока в раунде Teen Patti.
    ///
    /// Если раунд закончился (все, кроме одного, сфолдили) – сессия закрывается.
    pub fn apply_round_action(
        &mut self,
        ledger: &mut Ledger,
        action: RoundAction,
    ) -> Result<RoundStatus, EngineError> {
        let active = self.active.as_mut().ok_or(EngineError::NoActiveSession)?;
        let round_state = active.round.as_mut().ok_or(EngineError::NoActiveRound)?;

        let status = round::apply_action(round_state, ledger, action)?;
        active.sync_pot();

        if matches!(status, RoundStatus::Finished(_)) {
            self.close_finished();
        }
        Ok(status)
    }

    /// Выбор победителя на шоудауне: банк победителю, сессия закрывается.
    pub fn select_showdown_winner(
        &mut self,
        ledger: &mut Ledger,
        winner_id: PlayerId,
    ) -> Result<RoundSummary, EngineError> {
        let active = self.active.as_mut().ok_or(EngineError::NoActiveSession)?;
        let round_state = active.round.as_mut().ok_or(EngineError::NoActiveRound)?;

        let summary = round::select_showdown_winner(round_state, ledger, winner_id)?;
        self.close_finished();
        Ok(summary)
    }

    /// Раунд уже выплатил банк – просто освобождаем слот.
    fn close_finished(&mut self) {
        if let Some(active) = self.active.take() {
            info!(session_id = active.session.id, "session closed after round finished");
        }
    }
}
