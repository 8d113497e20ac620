use std::str::FromStr;

use crate::error::ConfigError;

/// Smallest connect length a game can be configured with.
pub const MIN_CONNECT_LENGTH: usize = 4;

/// Largest connect length accepted; keeps the board allocation bounded.
pub const MAX_CONNECT_LENGTH: usize = 1000;

/// Win length and the board geometry derived from it.
///
/// The board grows with the win length: `rows = ceil(1.5 * n)` and
/// `columns = ceil(1.75 * n)`, so the classic `n = 4` gives a 6x7 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    connect_length: usize,
    rows: usize,
    columns: usize,
}

impl GameConfig {
    /// Validate a connect length and derive the board dimensions.
    pub fn new(connect_length: usize) -> Result<Self, ConfigError> {
        if !(MIN_CONNECT_LENGTH..=MAX_CONNECT_LENGTH).contains(&connect_length) {
            return Err(ConfigError::InvalidConnectLength(connect_length.to_string()));
        }

        // ceil(3n / 2) and ceil(7n / 4) in integer arithmetic
        let rows = (3 * connect_length).div_ceil(2);
        let columns = (7 * connect_length).div_ceil(4);

        Ok(GameConfig {
            connect_length,
            rows,
            columns,
        })
    }

    /// Number of pieces in a row needed to win
    pub fn connect_length(&self) -> usize {
        self.connect_length
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            connect_length: MIN_CONNECT_LENGTH,
            rows: 6,
            columns: 7,
        }
    }
}

impl FromStr for GameConfig {
    type Err = ConfigError;

    /// Parse a user-typed connect length. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let connect_length: usize = trimmed
            .parse()
            .map_err(|_| ConfigError::InvalidConnectLength(trimmed.to_string()))?;
        GameConfig::new(connect_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_dimensions() {
        let config = GameConfig::new(4).unwrap();
        assert_eq!(config.rows(), 6);
        assert_eq!(config.columns(), 7);
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_dimensions_round_up() {
        let config = GameConfig::new(5).unwrap();
        assert_eq!(config.rows(), 8); // 7.5
        assert_eq!(config.columns(), 9); // 8.75

        let config = GameConfig::new(6).unwrap();
        assert_eq!(config.rows(), 9);
        assert_eq!(config.columns(), 11); // 10.5

        let config = GameConfig::new(7).unwrap();
        assert_eq!(config.rows(), 11); // 10.5
        assert_eq!(config.columns(), 13); // 12.25
    }

    #[test]
    fn test_dimensions_match_float_formula() {
        for n in 4..200usize {
            let config = GameConfig::new(n).unwrap();
            assert_eq!(config.rows(), (1.5 * n as f64).ceil() as usize, "rows for {n}");
            assert_eq!(
                config.columns(),
                (1.75 * n as f64).ceil() as usize,
                "columns for {n}"
            );
        }
    }

    #[test]
    fn test_rejects_short_connect_length() {
        for n in 0..MIN_CONNECT_LENGTH {
            assert!(matches!(
                GameConfig::new(n),
                Err(ConfigError::InvalidConnectLength(_))
            ));
        }
    }

    #[test]
    fn test_rejects_huge_connect_length() {
        assert!(GameConfig::new(MAX_CONNECT_LENGTH).is_ok());
        assert!(GameConfig::new(MAX_CONNECT_LENGTH + 1).is_err());
        assert!(GameConfig::new(usize::MAX).is_err());
        assert!("99999999999999999999999".parse::<GameConfig>().is_err());
    }

    #[test]
    fn test_parse_from_text() {
        let config: GameConfig = " 5 \n".parse().unwrap();
        assert_eq!(config.connect_length(), 5);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for input in ["", "four", "4.5", "-4", "3"] {
            let err = input.parse::<GameConfig>().unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidConnectLength(_)),
                "input {input:?}"
            );
        }
    }
}
