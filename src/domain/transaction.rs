use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::{PlayerId, Timestamp, TransactionId};

/// Тип проводки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionKind {
    /// Анте при старте сессии.
    Ante,
    /// Выигрыш банка.
    Win,
    Loss,
    /// Ручное пополнение (и равный дележ банка).
    Add,
    /// Ручное списание, а также call/raise в Teen Patti.
    Subtract,
}

/// Направление изменения баланса.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Credit,
    Debit,
}

impl TransactionKind {
    pub fn direction(self) -> Direction {
        match self {
            TransactionKind::Win | TransactionKind::Add => Direction::Credit,
            TransactionKind::Ante | TransactionKind::Loss | TransactionKind::Subtract => {
                Direction::Debit
            }
        }
    }

    pub fn is_credit(self) -> bool {
        self.direction() == Direction::Credit
    }
}

impl Direction {
    /// Какой тип проводки пишется при ручной корректировке.
    pub fn manual_kind(self) -> TransactionKind {
        match self {
            Direction::Credit => TransactionKind::Add,
            Direction::Debit => TransactionKind::Subtract,
        }
    }
}

/// Неизменяемая запись журнала.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    pub player_id: PlayerId,
    /// Имя игрока на момент проводки.
    pub player_name: String,
    pub kind: TransactionKind,
    pub amount: Chips,
    pub description: String,
    /// Unix-время в миллисекундах.
    pub timestamp: Timestamp,
}
