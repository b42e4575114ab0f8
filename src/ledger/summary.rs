//! Производные "только чтение" представления поверх журнала:
//! общий приход/расход и таблица игроков по чистому результату.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, PlayerId, TransactionKind};

use super::Ledger;

/// Сводка по деньгам.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoneySummary {
    /// add + win
    pub total_in: Chips,
    /// subtract + loss + ante
    pub total_out: Chips,
    pub total_balance: Chips,
    pub transaction_count: usize,
}

/// Строка таблицы результатов.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerStanding {
    pub player_id: PlayerId,
    pub name: String,
    pub balance: Chips,
    pub winnings: Chips,
    pub losses: Chips,
    /// Может быть отрицательным.
    pub net_gain: i64,
}

impl Ledger {
    pub fn money_summary(&self) -> MoneySummary {
        let (total_in, total_out) =
            split_in_out(self.transactions().iter().map(|t| (t.kind, t.amount)));

        MoneySummary {
            total_in,
            total_out,
            total_balance: self.total_balance(),
            transaction_count: self.transactions().len(),
        }
    }

    /// Текущие игроки, отсортированные по net_gain (по убыванию).
    pub fn standings(&self) -> Vec<PlayerStanding> {
        let mut per_player: HashMap<PlayerId, Vec<(TransactionKind, Chips)>> = HashMap::new();
        for t in self.transactions() {
            per_player
                .entry(t.player_id)
                .or_default()
                .push((t.kind, t.amount));
        }

        let mut rows: Vec<PlayerStanding> = self
            .players()
            .iter()
            .map(|p| {
                let entries = per_player.remove(&p.id).unwrap_or_default();
                let (winnings, losses) = split_in_out(entries.into_iter());
                PlayerStanding {
                    player_id: p.id,
                    name: p.name.clone(),
                    balance: p.balance,
                    winnings,
                    losses,
                    net_gain: winnings.0 as i64 - losses.0 as i64,
                }
            })
            .collect();

        // sort_by стабильный: при равенстве остаётся порядок регистрации.
        rows.sort_by(|a, b| b.net_gain.cmp(&a.net_gain));
        rows
    }
}

fn split_in_out(entries: impl Iterator<Item = (TransactionKind, Chips)>) -> (Chips, Chips) {
    entries.fold((Chips::ZERO, Chips::ZERO), |(inc, out), (kind, amount)| {
        if kind.is_credit() {
            (inc + amount, out)
        } else {
            (inc, out + amount)
        }
    })
}
