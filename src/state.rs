//! Глобальное состояние приложения: конфиг + реестр + менеджер сессий.
//!
//! Все изменения идут через `&mut self`, поэтому действия не перемешиваются.
//! Если хост многопоточный – оборачивайте `LedgerState` в мьютекс целиком.

use tracing::warn;

use crate::api::{
    build_player_dto, build_round_view, build_session_view, ApiError, Command, CommandResponse,
    Query, QueryResponse, RoundResultDto, SessionViewDto,
};
use crate::domain::chips::Chips;
use crate::domain::{
    Direction, GameSession, GameType, LedgerConfig, Player, PlayerId, Transaction, TransactionId,
};
use crate::engine::{
    EngineError, RoundAction, RoundActionKind, RoundState, RoundStatus, RoundSummary,
    SessionManager, SessionStartError, SplitShare,
};
use crate::infra::Clock;
use crate::ledger::{Ledger, LedgerError};

#[derive(Debug, Default)]
pub struct LedgerState {
    config: LedgerConfig,
    ledger: Ledger,
    sessions: SessionManager,
}

impl LedgerState {
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            ledger: Ledger::new(),
            sessions: SessionManager::new(),
        }
    }

    /// То же, но со своими часами (для тестов и реплея).
    pub fn with_clock(config: LedgerConfig, clock: Box<dyn Clock + Send + Sync>) -> Self {
        Self {
            config,
            ledger: Ledger::with_clock(clock),
            sessions: SessionManager::new(),
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    // ---------- чтение ----------

    pub fn players(&self) -> &[Player] {
        self.ledger.players()
    }

    pub fn active_session(&self) -> Option<&GameSession> {
        self.sessions.active_session()
    }

    pub fn active_round(&self) -> Option<&RoundState> {
        self.sessions.active_round()
    }

    /// Журнал для показа: новые сверху.
    pub fn transactions(&self) -> Vec<&Transaction> {
        self.ledger.transactions_newest_first().collect()
    }

    /// Все деньги в игре: балансы + банк активной сессии.
    pub fn total_in_play(&self) -> Chips {
        self.ledger.total_balance() + self.sessions.pot()
    }

    // ---------- реестр ----------

    /// Без суммы – стартовый баланс из конфига.
    pub fn register_player(
        &mut self,
        name: &str,
        initial_balance: Option<Chips>,
    ) -> Result<PlayerId, LedgerError> {
        let balance = initial_balance.unwrap_or(self.config.default_initial_balance);
        self.ledger.register_player(name, balance)
    }

    /// Игрока из активной сессии не удаляем: его ставки уже в банке.
    pub fn remove_player(&mut self, player_id: PlayerId) -> Result<Option<Player>, EngineError> {
        if self.sessions.is_seated(player_id) {
            warn!(player_id, "remove_player: player is in the active session");
            return Err(EngineError::PlayerInSession(player_id));
        }
        Ok(self.ledger.remove_player(player_id))
    }

    pub fn adjust_balance(
        &mut self,
        player_id: PlayerId,
        amount: Chips,
        direction: Direction,
        description: &str,
    ) -> Option<TransactionId> {
        self.ledger
            .adjust_balance(player_id, amount, direction, description)
    }

    // ---------- сессии ----------

    pub fn start_session(
        &mut self,
        game_type: GameType,
        ante_amount: Chips,
        player_ids: &[PlayerId],
    ) -> Result<&GameSession, SessionStartError> {
        self.sessions.start_session(
            &mut self.ledger,
            &self.config,
            game_type,
            ante_amount,
            player_ids,
        )
    }

    pub fn end_session(&mut self, winner_id: Option<PlayerId>) -> Option<GameSession> {
        self.sessions.end_session(&mut self.ledger, winner_id)
    }

    pub fn split_pot(&mut self) -> Result<Vec<SplitShare>, EngineError> {
        self.sessions.split_pot(&mut self.ledger)
    }

    // ---------- раунд Teen Patti ----------

    pub fn apply_round_action(&mut self, action: RoundAction) -> Result<RoundStatus, EngineError> {
        self.sessions.apply_round_action(&mut self.ledger, action)
    }

    pub fn see(&mut self, player_id: PlayerId) -> Result<RoundStatus, EngineError> {
        self.apply_round_action(RoundAction::new(player_id, RoundActionKind::See))
    }

    pub fn call(&mut self, player_id: PlayerId) -> Result<RoundStatus, EngineError> {
        self.apply_round_action(RoundAction::new(player_id, RoundActionKind::Call))
    }

    /// `new_total` – итоговая ставка игрока, а не прибавка.
    pub fn raise(
        &mut self,
        player_id: PlayerId,
        new_total: Chips,
    ) -> Result<RoundStatus, EngineError> {
        self.apply_round_action(RoundAction::new(
            player_id,
            RoundActionKind::Raise(new_total),
        ))
    }

    pub fn fold(&mut self, player_id: PlayerId) -> Result<RoundStatus, EngineError> {
        self.apply_round_action(RoundAction::new(player_id, RoundActionKind::Fold))
    }

    pub fn show(&mut self, player_id: PlayerId) -> Result<RoundStatus, EngineError> {
        self.apply_round_action(RoundAction::new(player_id, RoundActionKind::Show))
    }

    pub fn select_showdown_winner(
        &mut self,
        winner_id: PlayerId,
    ) -> Result<RoundSummary, EngineError> {
        self.sessions
            .select_showdown_winner(&mut self.ledger, winner_id)
    }

    // ---------- API ----------

    /// Исполнить команду внешнего API.
    pub fn execute(&mut self, command: Command) -> Result<CommandResponse, ApiError> {
        match command {
            Command::RegisterPlayer {
                name,
                initial_balance,
            } => {
                let id = self.register_player(&name, initial_balance)?;
                let player = self
                    .ledger
                    .player(id)
                    .map(|p| build_player_dto(p, self.active_session()))
                    .ok_or_else(|| ApiError::Ledger(format!("player {id} vanished")))?;
                Ok(CommandResponse::PlayerRegistered { player })
            }

            Command::RemovePlayer { player_id } => {
                let removed = self.remove_player(player_id)?;
                Ok(CommandResponse::PlayerRemoved {
                    player: removed.as_ref().map(|p| build_player_dto(p, None)),
                })
            }

            Command::AdjustBalance {
                player_id,
                amount,
                direction,
                description,
            } => {
                let description = description.unwrap_or_else(|| default_adjust_label(direction));
                let transaction_id =
                    self.adjust_balance(player_id, amount, direction, &description);
                Ok(CommandResponse::BalanceAdjusted { transaction_id })
            }

            Command::StartSession {
                game_type,
                ante_amount,
                player_ids,
            } => {
                self.start_session(game_type, ante_amount, &player_ids)?;
                let session = self.session_view().ok_or(ApiError::NoActiveSession)?;
                Ok(CommandResponse::SessionStarted { session })
            }

            Command::EndSession { winner_id } => {
                let ended = self.end_session(winner_id);
                Ok(CommandResponse::SessionEnded {
                    session: ended.map(|s| build_session_view(&s, None, &self.ledger)),
                })
            }

            Command::SplitPot => {
                let shares = self.split_pot()?;
                Ok(CommandResponse::PotSplit {
                    shares: shares.into_iter().map(Into::into).collect(),
                })
            }

            Command::RoundAction { player_id, action } => {
                let status = self.apply_round_action(RoundAction::new(player_id, action))?;
                self.round_response(status)
            }

            Command::SelectShowdownWinner { player_id } => {
                let summary = self.select_showdown_winner(player_id)?;
                Ok(CommandResponse::RoundFinished {
                    result: RoundResultDto::from(&summary),
                })
            }
        }
    }

    /// Команда в JSON (формат – serde-представление `Command`).
    pub fn execute_json(&mut self, raw: &str) -> Result<CommandResponse, ApiError> {
        let command: Command = serde_json::from_str(raw)?;
        self.execute(command)
    }

    /// Запрос "только чтение".
    pub fn query(&self, query: Query) -> QueryResponse {
        let session = self.active_session();
        match query {
            Query::Players => QueryResponse::Players(
                self.players()
                    .iter()
                    .map(|p| build_player_dto(p, session))
                    .collect(),
            ),
            Query::ActiveSession => QueryResponse::Session(self.session_view()),
            Query::ActiveRound => QueryResponse::Round(
                self.active_round()
                    .map(|r| build_round_view(r, &self.ledger)),
            ),
            Query::Transactions { limit } => {
                let limit = limit.unwrap_or(usize::MAX);
                QueryResponse::Transactions(
                    self.ledger
                        .recent_transactions(limit)
                        .into_iter()
                        .cloned()
                        .collect(),
                )
            }
            Query::MoneySummary => QueryResponse::MoneySummary(self.ledger.money_summary()),
            Query::Standings => QueryResponse::Standings(self.ledger.standings()),
            Query::EligiblePlayers { ante } => QueryResponse::Players(
                self.ledger
                    .eligible_players(ante)
                    .into_iter()
                    .map(|p| build_player_dto(p, session))
                    .collect(),
            ),
        }
    }

    fn session_view(&self) -> Option<SessionViewDto> {
        self.active_session()
            .map(|s| build_session_view(s, self.active_round(), &self.ledger))
    }

    fn round_response(&self, status: RoundStatus) -> Result<CommandResponse, ApiError> {
        match status {
            RoundStatus::Ongoing => {
                let round = self.active_round().ok_or(ApiError::NoActiveRound)?;
                Ok(CommandResponse::RoundState {
                    round: build_round_view(round, &self.ledger),
                })
            }
            RoundStatus::Showdown { candidates } => {
                let round = self.active_round().ok_or(ApiError::NoActiveRound)?;
                Ok(CommandResponse::Showdown {
                    candidates,
                    round: build_round_view(round, &self.ledger),
                })
            }
            RoundStatus::Finished(summary) => Ok(CommandResponse::RoundFinished {
                result: RoundResultDto::from(summary.as_ref()),
            }),
        }
    }
}

fn default_adjust_label(direction: Direction) -> String {
    match direction {
        Direction::Credit => "Manual addition".to_string(),
        Direction::Debit => "Manual deduction".to_string(),
    }
}
