use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Игрок в реестре: баланс и накопленные итоги.
///
/// Баланс меняется только через `Ledger` – напрямую поля не трогаем.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub balance: Chips,
    /// Сумма всех зачислений (add + win).
    pub total_winnings: Chips,
    /// Сумма всех списаний (ante / subtract / loss), без отсечки по нулю.
    pub total_losses: Chips,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, balance: Chips) -> Self {
        Self {
            id,
            name: name.into(),
            balance,
            total_winnings: Chips::ZERO,
            total_losses: Chips::ZERO,
        }
    }

    /// Может ли игрок внести анте такого размера.
    pub fn can_afford(&self, amount: Chips) -> bool {
        self.balance >= amount
    }
}
