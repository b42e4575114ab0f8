use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::{GameSession, Player, Transaction};
use crate::engine::{RoundPhase, RoundState};
use crate::ledger::{Ledger, MoneySummary, PlayerStanding};

use super::dto::{PlayerDto, RoundPlayerDto, RoundViewDto, SessionViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Query {
    /// Реестр игроков в порядке регистрации.
    Players,

    /// Активная сессия (с раундом, если это Teen Patti).
    ActiveSession,

    /// Только раунд Teen Patti.
    ActiveRound,

    /// Журнал, новые сверху. Без лимита – весь.
    Transactions {
        #[serde(default)]
        limit: Option<usize>,
    },

    /// Общий приход/расход.
    MoneySummary,

    /// Игроки по чистому результату.
    Standings,

    /// Кто может внести анте такого размера.
    EligiblePlayers { ante: Chips },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum QueryResponse {
    Players(Vec<PlayerDto>),
    Session(Option<SessionViewDto>),
    Round(Option<RoundViewDto>),
    Transactions(Vec<Transaction>),
    MoneySummary(MoneySummary),
    Standings(Vec<PlayerStanding>),
}

/// DTO игрока; `in_session` считаем по активной сессии.
pub fn build_player_dto(player: &Player, session: Option<&GameSession>) -> PlayerDto {
    PlayerDto {
        player_id: player.id,
        name: player.name.clone(),
        balance: player.balance,
        total_winnings: player.total_winnings,
        total_losses: player.total_losses,
        in_session: session.map(|s| s.has_player(player.id)).unwrap_or(false),
    }
}

/// Сформировать DTO раунда. Балансы берём из реестра.
pub fn build_round_view(round: &RoundState, ledger: &Ledger) -> RoundViewDto {
    let acting = round.phase == RoundPhase::Betting;

    let players = round
        .players
        .iter()
        .enumerate()
        .map(|(idx, p)| RoundPlayerDto {
            player_id: p.player_id,
            name: p.name.clone(),
            balance: ledger.balance_of(p.player_id),
            current_bet: p.current_bet,
            is_seen: p.is_seen,
            has_folded: p.has_folded,
            is_acting: acting && idx == round.current_player_index,
        })
        .collect();

    let showdown_candidates = if round.phase == RoundPhase::Showdown {
        round.showdown_candidates()
    } else {
        Vec::new()
    };

    RoundViewDto {
        phase: round.phase,
        pot: round.pot.total,
        table_bet: round.current_bet,
        current_player_index: round.current_player_index,
        current_player_id: round
            .acting_player()
            .filter(|_| acting)
            .map(|p| p.player_id),
        players,
        showdown_candidates,
        winner_id: round.winner_id,
    }
}

/// Сформировать DTO сессии на основе `GameSession` + опционального раунда.
pub fn build_session_view(
    session: &GameSession,
    round: Option<&RoundState>,
    ledger: &Ledger,
) -> SessionViewDto {
    SessionViewDto {
        session_id: session.id,
        game_type: session.game_type,
        ante_amount: session.ante_amount,
        pot: session.pot,
        is_active: session.is_active,
        created_at: session.created_at,
        players: session.players.clone(),
        round: round.map(|r| build_round_view(r, ledger)),
    }
}
