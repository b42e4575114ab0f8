use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::{GameType, PlayerId, SessionId, SessionPlayer, Timestamp, TransactionId};
use crate::engine::{RoundPhase, RoundSummary, SplitShare};

/// DTO игрока из реестра.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerDto {
    pub player_id: PlayerId,
    pub name: String,
    pub balance: Chips,
    pub total_winnings: Chips,
    pub total_losses: Chips,
    /// Сидит ли игрок в активной сессии.
    pub in_session: bool,
}

/// DTO игрока в раунде Teen Patti.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundPlayerDto {
    pub player_id: PlayerId,
    pub name: String,
    /// Живой баланс из реестра.
    pub balance: Chips,
    pub current_bet: Chips,
    pub is_seen: bool,
    pub has_folded: bool,
    /// Его ли сейчас ход.
    pub is_acting: bool,
}

/// DTO раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundViewDto {
    pub phase: RoundPhase,
    pub pot: Chips,
    pub table_bet: Chips,
    pub current_player_index: usize,
    pub current_player_id: Option<PlayerId>,
    pub players: Vec<RoundPlayerDto>,
    /// Заполнено только в фазе шоудауна.
    pub showdown_candidates: Vec<PlayerId>,
    pub winner_id: Option<PlayerId>,
}

/// DTO сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionViewDto {
    pub session_id: SessionId,
    pub game_type: GameType,
    pub ante_amount: Chips,
    pub pot: Chips,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub players: Vec<SessionPlayer>,
    pub round: Option<RoundViewDto>,
}

/// Итог раунда для фронта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundResultDto {
    pub winner_id: PlayerId,
    pub winner_name: String,
    pub amount: Chips,
    pub via_showdown: bool,
}

impl From<&RoundSummary> for RoundResultDto {
    fn from(summary: &RoundSummary) -> Self {
        Self {
            winner_id: summary.winner_id,
            winner_name: summary.winner_name.clone(),
            amount: summary.amount,
            via_showdown: summary.via_showdown,
        }
    }
}

/// Одна доля при дележе банка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SplitShareDto {
    pub player_id: PlayerId,
    pub amount: Chips,
}

impl From<SplitShare> for SplitShareDto {
    fn from(share: SplitShare) -> Self {
        Self {
            player_id: share.player_id,
            amount: share.amount,
        }
    }
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommandResponse {
    PlayerRegistered { player: PlayerDto },

    /// `None` – такого игрока не было.
    PlayerRemoved { player: Option<PlayerDto> },

    /// `None` – проводка не состоялась (неизвестный игрок или нулевая сумма).
    BalanceAdjusted {
        transaction_id: Option<TransactionId>,
    },

    SessionStarted { session: SessionViewDto },

    /// `None` – активной сессии не было.
    SessionEnded { session: Option<SessionViewDto> },

    PotSplit { shares: Vec<SplitShareDto> },

    /// Раунд продолжается – обновлённое состояние.
    RoundState { round: RoundViewDto },

    /// Объявлено вскрытие.
    Showdown {
        candidates: Vec<PlayerId>,
        round: RoundViewDto,
    },

    /// Раунд (и сессия) завершены.
    RoundFinished { result: RoundResultDto },
}
