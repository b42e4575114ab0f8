use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::{Direction, GameType, PlayerId};
use crate::engine::actions::RoundActionKind;

/// Команда верхнего уровня – всё, что меняет состояние.
///
/// Приходит от внешнего потребителя (UI) как есть или в JSON
/// (`LedgerState::execute_json`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Зарегистрировать игрока. Без суммы – стартовый баланс из конфига.
    RegisterPlayer {
        name: String,
        #[serde(default)]
        initial_balance: Option<Chips>,
    },

    /// Удалить игрока из реестра.
    RemovePlayer { player_id: PlayerId },

    /// Ручное пополнение / списание.
    AdjustBalance {
        player_id: PlayerId,
        amount: Chips,
        direction: Direction,
        #[serde(default)]
        description: Option<String>,
    },

    /// Начать сессию: собрать анте с выбранных игроков.
    StartSession {
        game_type: GameType,
        ante_amount: Chips,
        player_ids: Vec<PlayerId>,
    },

    /// Завершить сессию (с победителем или без).
    EndSession {
        #[serde(default)]
        winner_id: Option<PlayerId>,
    },

    /// Разделить банк поровну и завершить сессию.
    SplitPot,

    /// Действие игрока в раунде Teen Patti.
    RoundAction {
        player_id: PlayerId,
        action: RoundActionKind,
    },

    /// Выбор победителя на шоудауне.
    SelectShowdownWinner { player_id: PlayerId },
}
