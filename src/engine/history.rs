use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::{PlayerId, SessionId};
use crate::engine::actions::RoundActionKind;

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundEventKind {
    /// Раунд начался: анте уже в банке.
    RoundStarted {
        session_id: SessionId,
        ante: Chips,
        players: Vec<PlayerId>,
        pot: Chips,
    },

    /// Действие игрока.
    PlayerActed {
        player_id: PlayerId,
        action: RoundActionKind,
        /// Сколько игрок доложил в банк этим действием.
        paid: Chips,
        pot_after: Chips,
    },

    /// Двое в игре, объявлено вскрытие.
    ShowdownCalled {
        called_by: PlayerId,
        candidates: Vec<PlayerId>,
    },

    /// Выплата банка.
    PotAwarded {
        player_id: PlayerId,
        amount: Chips,
    },

    /// Раунд завершён.
    RoundFinished { session_id: SessionId },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Полная история раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&RoundEventKind> {
        self.events.last().map(|e| &e.kind)
    }
}
