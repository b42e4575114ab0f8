use serde::{Deserialize, Serialize};

use crate::domain::{Chips, PlayerId};

/// Тип действия игрока в раунде Teen Patti.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoundActionKind {
    /// Посмотреть свои карты (blind → seen).
    See,
    /// Уравнять текущую ставку стола.
    Call,
    /// Поднять ставку до указанной суммы (total, а не прибавка).
    Raise(Chips),
    Fold,
    /// Потребовать вскрытия, когда в игре осталось двое.
    Show,
}

impl RoundActionKind {
    /// Передаёт ли действие ход следующему игроку.
    pub fn passes_turn(self) -> bool {
        matches!(
            self,
            RoundActionKind::Call | RoundActionKind::Raise(_) | RoundActionKind::Fold
        )
    }
}

/// Конкретное действие игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundAction {
    /// Кто действует – должен совпадать с текущим игроком.
    pub player_id: PlayerId,
    pub kind: RoundActionKind,
}

impl RoundAction {
    pub fn new(player_id: PlayerId, kind: RoundActionKind) -> Self {
        Self { player_id, kind }
    }
}
