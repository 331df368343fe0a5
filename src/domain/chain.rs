//! Chain parameters for Filecoin networks.
//!
//! Block heights are converted to wall-clock time with a purely linear
//! transform: `genesis + height * block_interval`. Each network carries its
//! own genesis timestamp; the block interval is 30 seconds everywhere.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Filecoin epoch duration in seconds.
pub const EPOCH_DURATION_SECS: u64 = 30;

// ============================================================================
// Chain Parameters
// ============================================================================

/// Constants needed to map a block height onto a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainParams {
    /// Unix timestamp (seconds) of block height 0.
    pub genesis_timestamp: i64,
    /// Seconds between consecutive heights.
    pub block_interval_secs: u64,
}

impl ChainParams {
    /// Creates chain parameters from raw constants.
    #[must_use]
    pub const fn new(genesis_timestamp: i64, block_interval_secs: u64) -> Self {
        Self {
            genesis_timestamp,
            block_interval_secs,
        }
    }
}

impl Default for ChainParams {
    fn default() -> Self {
        Network::default().chain_params()
    }
}

// ============================================================================
// Network
// ============================================================================

/// Filecoin network variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Filecoin mainnet.
    #[default]
    Mainnet,
    /// Calibration testnet.
    Calibration,
}

impl Network {
    /// Returns the human-readable name of the network.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "Mainnet",
            Self::Calibration => "Calibration",
        }
    }

    /// Unix timestamp of the network's genesis block.
    ///
    /// Mainnet launched 2020-08-24 22:00:00 UTC, calibration was re-genesised
    /// 2022-11-01 18:13:00 UTC.
    #[must_use]
    pub const fn genesis_timestamp(&self) -> i64 {
        match self {
            Self::Mainnet => 1_598_306_400,
            Self::Calibration => 1_667_326_380,
        }
    }

    /// The other network.
    #[must_use]
    pub const fn toggle(&self) -> Self {
        match self {
            Self::Mainnet => Self::Calibration,
            Self::Calibration => Self::Mainnet,
        }
    }

    /// Height-to-date constants for this network.
    #[must_use]
    pub const fn chain_params(&self) -> ChainParams {
        ChainParams::new(self.genesis_timestamp(), EPOCH_DURATION_SECS)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(Self::Mainnet),
            "calibration" | "calibnet" | "calib" => Ok(Self::Calibration),
            other => Err(DomainError::invalid_input(format!(
                "unknown network '{other}' (expected mainnet or calibration)"
            ))),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_network_is_mainnet() {
        assert_eq!(Network::default(), Network::Mainnet);
        assert_eq!(ChainParams::default(), Network::Mainnet.chain_params());
    }

    #[test]
    fn test_chain_params_use_epoch_duration() {
        let params = Network::Calibration.chain_params();
        assert_eq!(params.genesis_timestamp, 1_667_326_380);
        assert_eq!(params.block_interval_secs, 30);
    }

    #[test]
    fn test_toggle_switches_between_networks() {
        assert_eq!(Network::Mainnet.toggle(), Network::Calibration);
        assert_eq!(Network::Mainnet.toggle().toggle(), Network::Mainnet);
    }

    #[rstest]
    #[case::mainnet("mainnet", Network::Mainnet)]
    #[case::mixed_case("MainNet", Network::Mainnet)]
    #[case::calibration("calibration", Network::Calibration)]
    #[case::calibnet_alias("calibnet", Network::Calibration)]
    fn test_network_from_str(#[case] input: &str, #[case] expected: Network) {
        assert_eq!(input.parse::<Network>().unwrap(), expected);
    }

    #[test]
    fn test_network_from_str_rejects_unknown() {
        let err = "devnet".parse::<Network>().unwrap_err();
        assert!(err.to_string().contains("devnet"));
    }

    #[test]
    fn test_network_serde_lowercase() {
        let json = serde_json::to_string(&Network::Calibration).unwrap();
        assert_eq!(json, "\"calibration\"");
        let back: Network = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Network::Calibration);
    }
}
