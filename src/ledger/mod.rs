//! Реестр игроков и журнал проводок.
//!
//! Политика по неизвестным id – мягкая: операция становится no-op,
//! а в лог уходит предупреждение. Паники и ошибки тут только на
//! некорректный ввод при регистрации.

pub mod summary;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::{
    Chips, Direction, Player, PlayerId, Transaction, TransactionId, TransactionKind,
};
use crate::infra::{Clock, IdGenerator, SystemClock};

pub use summary::{MoneySummary, PlayerStanding};

/// Ошибки реестра.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Имя игрока не может быть пустым")]
    EmptyName,
}

/// Реестр: игроки в порядке регистрации + журнал проводок (append-only).
#[derive(Debug)]
pub struct Ledger {
    players: Vec<Player>,
    transactions: Vec<Transaction>,
    ids: IdGenerator,
    clock: Box<dyn Clock + Send + Sync>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock + Send + Sync>) -> Self {
        Self {
            players: Vec::new(),
            transactions: Vec::new(),
            ids: IdGenerator::new(),
            clock,
        }
    }

    /// Текущее время по часам реестра.
    pub fn now(&self) -> u64 {
        self.clock.now_millis()
    }

    /// Зарегистрировать игрока с заданным стартовым балансом.
    pub fn register_player(
        &mut self,
        name: &str,
        initial_balance: Chips,
    ) -> Result<PlayerId, LedgerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::EmptyName);
        }

        let id = self.ids.next_player_id();
        self.players.push(Player::new(id, name, initial_balance));
        info!(player_id = id, name, balance = initial_balance.0, "player registered");
        Ok(id)
    }

    /// Удалить игрока из реестра. Проводки остаются в журнале.
    pub fn remove_player(&mut self, player_id: PlayerId) -> Option<Player> {
        match self.players.iter().position(|p| p.id == player_id) {
            Some(idx) => {
                let removed = self.players.remove(idx);
                info!(player_id, balance = removed.balance.0, "player removed");
                Some(removed)
            }
            None => {
                warn!(player_id, "remove_player: unknown player id, ignored");
                None
            }
        }
    }

    /// Ручная корректировка баланса (пишется как `add` / `subtract`).
    pub fn adjust_balance(
        &mut self,
        player_id: PlayerId,
        amount: Chips,
        direction: Direction,
        description: &str,
    ) -> Option<TransactionId> {
        self.post(player_id, amount, direction.manual_kind(), description)
    }

    /// Провести сумму по игроку с конкретным типом проводки.
    ///
    /// Кредит: balance += amount, total_winnings += amount.
    /// Дебет: balance = max(0, balance - amount), total_losses += amount.
    /// Неизвестный игрок или нулевая сумма – no-op, возвращает `None`.
    pub fn post(
        &mut self,
        player_id: PlayerId,
        amount: Chips,
        kind: TransactionKind,
        description: &str,
    ) -> Option<TransactionId> {
        if amount.is_zero() {
            debug!(player_id, ?kind, "zero amount posting skipped");
            return None;
        }

        let timestamp = self.clock.now_millis();
        let Some(player) = self.players.iter_mut().find(|p| p.id == player_id) else {
            warn!(player_id, ?kind, amount = amount.0, "posting to unknown player id, ignored");
            return None;
        };

        match kind.direction() {
            Direction::Credit => {
                player.balance += amount;
                player.total_winnings += amount;
            }
            Direction::Debit => {
                if amount > player.balance {
                    debug!(
                        player_id,
                        balance = player.balance.0,
                        amount = amount.0,
                        "debit exceeds balance, clamped to zero"
                    );
                }
                player.balance = player.balance.saturating_sub(amount);
                player.total_losses += amount;
            }
        }

        let id = self.ids.next_transaction_id();
        self.transactions.push(Transaction {
            id,
            player_id,
            player_name: player.name.clone(),
            kind,
            amount,
            description: description.to_string(),
            timestamp,
        });
        debug!(player_id, ?kind, amount = amount.0, balance = player.balance.0, "posted");

        Some(id)
    }

    /// Игроки в порядке регистрации.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.player(player_id).is_some()
    }

    /// Баланс игрока; для неизвестного id – ноль.
    pub fn balance_of(&self, player_id: PlayerId) -> Chips {
        self.player(player_id).map(|p| p.balance).unwrap_or(Chips::ZERO)
    }

    /// Журнал в порядке создания.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Журнал для показа: новые сверху.
    pub fn transactions_newest_first(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().rev()
    }

    pub fn recent_transactions(&self, limit: usize) -> Vec<&Transaction> {
        self.transactions_newest_first().take(limit).collect()
    }

    /// Сумма балансов всех игроков.
    pub fn total_balance(&self) -> Chips {
        self.players.iter().map(|p| p.balance).sum()
    }

    /// Игроки, которые могут внести анте такого размера.
    pub fn eligible_players(&self, ante: Chips) -> Vec<&Player> {
        self.players.iter().filter(|p| p.can_afford(ante)).collect()
    }
}
