//! Game configuration and launch arguments

use clap::Parser;

use crate::board::DEFAULT_SIZE;
use crate::error::ConfigError;
use crate::rules::OverlinePolicy;

/// Default number of stones in a row needed to win
pub const DEFAULT_WIN_LENGTH: usize = 5;

/// Parameters fixed for the lifetime of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub win_length: usize,
    pub overline: OverlinePolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_SIZE,
            columns: DEFAULT_SIZE,
            win_length: DEFAULT_WIN_LENGTH,
            overline: OverlinePolicy::Wins,
        }
    }
}

impl GameConfig {
    pub fn new(rows: usize, columns: usize, win_length: usize) -> Self {
        Self {
            rows,
            columns,
            win_length,
            ..Self::default()
        }
    }

    pub fn with_overline(mut self, overline: OverlinePolicy) -> Self {
        self.overline = overline;
        self
    }

    /// Build a config from positional numbers.
    ///
    /// - `[]`: defaults
    /// - `[win]`: win length on the default board
    /// - `[rows, columns]`: board size, default win length
    /// - `[win, rows, columns]`: everything
    pub fn from_values(values: &[usize]) -> Result<Self, ConfigError> {
        let config = match *values {
            [] => Self::default(),
            [win_length] => Self {
                win_length,
                ..Self::default()
            },
            [rows, columns] => Self {
                rows,
                columns,
                ..Self::default()
            },
            [win_length, rows, columns] => Self::new(rows, columns, win_length),
            _ => return Err(ConfigError::InvalidArgCount(values.len())),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::ZeroDimension {
                rows: self.rows,
                columns: self.columns,
            });
        }
        // A `Vec` cannot hold more than `isize::MAX` cells
        let cells = self
            .rows
            .checked_mul(self.columns)
            .filter(|&cells| cells <= isize::MAX as usize);
        if cells.is_none() {
            return Err(ConfigError::BoardTooLarge {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.win_length == 0 {
            return Err(ConfigError::ZeroWinLength);
        }
        if self.win_length > self.rows.max(self.columns) {
            tracing::warn!(
                win_length = self.win_length,
                rows = self.rows,
                columns = self.columns,
                "win length exceeds both board dimensions; the game cannot be won"
            );
        }
        Ok(())
    }
}

/// Command line for the desktop game
#[derive(Debug, Parser)]
#[command(name = "gomoku")]
#[command(version, about = "Gomoku with three-three and four-four restrictions", long_about = None)]
pub struct LaunchArgs {
    /// Up to three numbers: [WIN], [ROWS COLUMNS] or [WIN ROWS COLUMNS]
    #[arg(value_name = "N")]
    pub values: Vec<usize>,

    /// Only a run of exactly the win length wins; longer runs do not
    #[arg(long)]
    pub exact_win: bool,
}

impl LaunchArgs {
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let overline = if self.exact_win {
            OverlinePolicy::Excluded
        } else {
            OverlinePolicy::Wins
        };
        Ok(GameConfig::from_values(&self.values)?.with_overline(overline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_values_is_default() {
        let config = GameConfig::from_values(&[]).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!((config.rows, config.columns, config.win_length), (19, 19, 5));
    }

    #[test]
    fn test_single_value_is_win_length() {
        let config = GameConfig::from_values(&[4]).unwrap();
        assert_eq!((config.rows, config.columns, config.win_length), (19, 19, 4));
    }

    #[test]
    fn test_two_values_are_dimensions() {
        let config = GameConfig::from_values(&[8, 12]).unwrap();
        assert_eq!((config.rows, config.columns, config.win_length), (8, 12, 5));
    }

    #[test]
    fn test_three_values_win_then_dimensions() {
        let config = GameConfig::from_values(&[6, 10, 15]).unwrap();
        assert_eq!((config.rows, config.columns, config.win_length), (10, 15, 6));
    }

    #[test]
    fn test_too_many_values() {
        assert_eq!(
            GameConfig::from_values(&[5, 19, 19, 1]),
            Err(ConfigError::InvalidArgCount(4))
        );
    }

    #[test]
    fn test_zero_values_rejected() {
        assert_eq!(
            GameConfig::from_values(&[0, 9]),
            Err(ConfigError::ZeroDimension { rows: 0, columns: 9 })
        );
        assert_eq!(GameConfig::from_values(&[0]), Err(ConfigError::ZeroWinLength));
    }

    #[test]
    fn test_oversized_board_rejected() {
        let too_large = ConfigError::BoardTooLarge {
            rows: usize::MAX,
            columns: 2,
        };
        assert_eq!(GameConfig::new(usize::MAX, 2, 5).validate(), Err(too_large.clone()));
        assert_eq!(GameConfig::from_values(&[5, usize::MAX, 2]), Err(too_large));

        // Fits in usize but not in a Vec
        let half = usize::MAX / 2;
        assert_eq!(
            GameConfig::new(half, 2, 5).validate(),
            Err(ConfigError::BoardTooLarge { rows: half, columns: 2 })
        );
    }

    #[test]
    fn test_unwinnable_config_is_still_valid() {
        assert!(GameConfig::new(3, 3, 5).validate().is_ok());
    }

    #[test]
    fn test_launch_args_parse() {
        let args = LaunchArgs::try_parse_from(["gomoku", "4", "8", "8", "--exact-win"]).unwrap();
        let config = args.game_config().unwrap();
        assert_eq!((config.rows, config.columns, config.win_length), (8, 8, 4));
        assert_eq!(config.overline, OverlinePolicy::Excluded);
    }

    #[test]
    fn test_launch_args_reject_non_numbers() {
        assert!(LaunchArgs::try_parse_from(["gomoku", "five"]).is_err());
        assert!(LaunchArgs::try_parse_from(["gomoku", "-3"]).is_err());
    }
}
