//! Engine-wide defaults, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{PoolConfig, DEFAULT_MINIMUM_LIQUIDITY};
use crate::domain::{Deadline, FeeRate, Liquidity, SlippageTolerance, Timestamp, TokenPair};
use crate::error::AmmError;

/// Defaults applied when the registry creates pools and when callers
/// derive slippage floors and deadlines.
///
/// Every field is optional in TOML; missing ones take the pair
/// contract's values.
///
/// ```toml
/// minimum_liquidity = 1000
/// default_slippage_bps = 50
/// deadline_window_secs = 600
///
/// [fee]
/// numerator = 3
/// denominator = 1000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Swap fee for newly created pools.
    pub fee: FeeRate,
    /// Liquidity locked on a pool's first mint.
    pub minimum_liquidity: u64,
    /// Tolerance used to turn quotes into `min_*` floors.
    pub default_slippage_bps: SlippageTolerance,
    /// Seconds added to `now` to form a default deadline.
    pub deadline_window_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fee: FeeRate::STANDARD,
            minimum_liquidity: u64::try_from(DEFAULT_MINIMUM_LIQUIDITY.get()).unwrap_or(u64::MAX),
            default_slippage_bps: SlippageTolerance::HALF_PERCENT,
            deadline_window_secs: 600,
        }
    }
}

impl EngineConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] on a parse failure or
    /// [`validate`](Self::validate) errors.
    pub fn from_toml_str(contents: &str) -> Result<Self, AmmError> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| AmmError::InvalidConfiguration(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the file cannot be
    /// read or its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AmmError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AmmError::InvalidConfiguration(format!(
                "failed to read config file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Serializes to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, AmmError> {
        toml::to_string(self)
            .map_err(|e| AmmError::InvalidConfiguration(format!("failed to serialize config: {e}")))
    }

    /// Checks every field.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidFee`] for a malformed fee.
    /// - [`AmmError::InvalidConfiguration`] for a zero minimum liquidity or
    ///   a slippage tolerance above 100%.
    pub fn validate(&self) -> Result<(), AmmError> {
        self.fee.validate()?;
        if self.minimum_liquidity == 0 {
            return Err(AmmError::InvalidConfiguration(
                "minimum_liquidity must be > 0".to_string(),
            ));
        }
        SlippageTolerance::new(self.default_slippage_bps.basis_points())?;
        Ok(())
    }

    /// Pool parameters for `pair` under these defaults.
    ///
    /// # Errors
    ///
    /// Propagates [`PoolConfig::new`] validation errors.
    pub fn pool_config(&self, pair: TokenPair) -> Result<PoolConfig, AmmError> {
        PoolConfig::new(
            pair,
            self.fee,
            Liquidity::new(u128::from(self.minimum_liquidity)),
        )
    }

    /// `now + deadline_window_secs`.
    #[must_use]
    pub const fn deadline_from(&self, now: Timestamp) -> Deadline {
        Deadline::after(now, self.deadline_window_secs)
    }
}
