//! Настройки реестра и лимиты по видам игр.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::game::{GameType, PlayerBounds};

/// Стартовый баланс нового игрока по умолчанию.
pub const DEFAULT_INITIAL_BALANCE: Chips = Chips(5_000);

/// Лимиты игроков для игры на анте.
pub const ANTE_GAME_BOUNDS: PlayerBounds = PlayerBounds::new(2, 8);

/// Лимиты игроков для Teen Patti.
pub const TEEN_PATTI_BOUNDS: PlayerBounds = PlayerBounds::new(3, 6);

/// Ошибки загрузки/проверки конфига.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось разобрать конфиг: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Некорректные лимиты игроков для {game}: {min}..={max}")]
    InvalidBounds {
        game: GameType,
        min: usize,
        max: usize,
    },
}

/// Конфиг реестра.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LedgerConfig {
    /// Баланс, который получает игрок при регистрации без явной суммы.
    pub default_initial_balance: Chips,
    pub ante_game: PlayerBounds,
    pub teen_patti: PlayerBounds,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            default_initial_balance: DEFAULT_INITIAL_BALANCE,
            ante_game: ANTE_GAME_BOUNDS,
            teen_patti: TEEN_PATTI_BOUNDS,
        }
    }
}

impl LedgerConfig {
    /// Прочитать конфиг из JSON. Отсутствующие поля берутся из `Default`.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: LedgerConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn bounds_for(&self, game_type: GameType) -> PlayerBounds {
        match game_type {
            GameType::Ante => self.ante_game,
            GameType::TeenPatti => self.teen_patti,
        }
    }

    /// Меньше двух игроков – передача хода зациклится, такое не пускаем.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for game in [GameType::Ante, GameType::TeenPatti] {
            let b = self.bounds_for(game);
            if b.min < 2 || b.min > b.max {
                return Err(ConfigError::InvalidBounds {
                    game,
                    min: b.min,
                    max: b.max,
                });
            }
        }
        Ok(())
    }
}
