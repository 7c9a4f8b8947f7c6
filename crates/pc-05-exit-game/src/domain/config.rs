//! Exit game configuration from environment variables.

use pc_01_merkle_proof::MAX_TREE_HEIGHT;
use serde::{Deserialize, Serialize};
use shared_types::{Address, TokenId};
use std::env;
use thiserror::Error;

/// Seven days.
pub const DEFAULT_EXIT_PERIOD_SECS: u64 = 7 * 24 * 60 * 60;

/// Height of the transaction trees the operator commits to.
pub const DEFAULT_MERKLE_HEIGHT: usize = 16;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Interval leaves no room for deposit blocks.
    #[error("Invalid child block interval: {0} (must be at least 2)")]
    InvalidInterval(u64),

    /// Merkle height outside `1..=max_merkle_height`.
    #[error("Invalid Merkle height {height} (max {max})")]
    InvalidMerkleHeight {
        /// Configured height
        height: usize,
        /// Configured ceiling
        max: usize,
    },

    /// Environment value does not parse.
    #[error("Invalid value for {key}: {value}")]
    InvalidValue {
        /// Variable or field name
        key: &'static str,
        /// Offending value
        value: String,
    },
}

/// Exit game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitGameConfig {
    /// Only address allowed to submit blocks and register tokens
    pub operator: Address,

    /// Address the custody collaborator holds deposits under
    pub custody_address: Address,

    /// Spacing between operator block numbers
    pub child_block_interval: u64,

    /// Wait between starting an exit and its earliest payout
    pub exit_period_secs: u64,

    /// Height of transaction-block Merkle trees
    pub merkle_height: usize,

    /// Largest height the verifier accepts
    pub max_merkle_height: usize,

    /// Tokens with a queue from the start
    pub registered_tokens: Vec<TokenId>,
}

impl Default for ExitGameConfig {
    fn default() -> Self {
        Self {
            operator: [0u8; 20],
            custody_address: [0u8; 20],
            child_block_interval: pc_04_block_submission::DEFAULT_CHILD_BLOCK_INTERVAL,
            exit_period_secs: DEFAULT_EXIT_PERIOD_SECS,
            merkle_height: DEFAULT_MERKLE_HEIGHT,
            max_merkle_height: 32,
            registered_tokens: vec![0],
        }
    }
}

impl ExitGameConfig {
    /// Default configuration with the given operator.
    pub fn with_operator(operator: Address) -> Self {
        Self {
            operator,
            ..Self::default()
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PLASMA_OPERATOR`: operator address, hex (default: zero address)
    /// - `PLASMA_CUSTODY_ADDRESS`: custody address, hex (default: zero address)
    /// - `PLASMA_CHILD_BLOCK_INTERVAL`: operator block spacing (default: 1000)
    /// - `PLASMA_EXIT_PERIOD_SECS`: exit period in seconds (default: 604800)
    /// - `PLASMA_MERKLE_HEIGHT`: transaction tree height (default: 16)
    /// - `PLASMA_REGISTERED_TOKENS`: comma-separated token ids (default: 0)
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            operator: env_address("PLASMA_OPERATOR")?.unwrap_or(defaults.operator),

            custody_address: env_address("PLASMA_CUSTODY_ADDRESS")?
                .unwrap_or(defaults.custody_address),

            child_block_interval: env_parsed("PLASMA_CHILD_BLOCK_INTERVAL")?
                .unwrap_or(defaults.child_block_interval),

            exit_period_secs: env_parsed("PLASMA_EXIT_PERIOD_SECS")?
                .unwrap_or(defaults.exit_period_secs),

            merkle_height: env_parsed("PLASMA_MERKLE_HEIGHT")?.unwrap_or(defaults.merkle_height),

            max_merkle_height: defaults.max_merkle_height,

            registered_tokens: match env::var("PLASMA_REGISTERED_TOKENS") {
                Ok(raw) => parse_token_list(&raw)?,
                Err(_) => defaults.registered_tokens,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.child_block_interval < 2 {
            return Err(ConfigError::InvalidInterval(self.child_block_interval));
        }
        let max = self.max_merkle_height.min(MAX_TREE_HEIGHT);
        if self.merkle_height == 0 || self.merkle_height > max {
            return Err(ConfigError::InvalidMerkleHeight {
                height: self.merkle_height,
                max,
            });
        }
        Ok(())
    }
}

fn env_parsed<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        Err(_) => Ok(None),
    }
}

fn env_address(key: &'static str) -> Result<Option<Address>, ConfigError> {
    match env::var(key) {
        Ok(value) => parse_address(&value)
            .map(Some)
            .ok_or(ConfigError::InvalidValue { key, value }),
        Err(_) => Ok(None),
    }
}

/// Parse a 20-byte hex address, with or without `0x`.
pub fn parse_address(raw: &str) -> Option<Address> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let bytes = hex::decode(digits).ok()?;
    bytes.try_into().ok()
}

fn parse_token_list(raw: &str) -> Result<Vec<TokenId>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PLASMA_REGISTERED_TOKENS",
                value: s.to_string(),
            })
        })
        .collect()
}
