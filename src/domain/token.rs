//! Token identity type.

use super::{Amount, Decimals, TokenAddress};
use crate::error::AmmError;

/// A token: its address plus the decimal scale of its raw unit.
///
/// The engine itself never scales amounts; the helpers here exist for
/// callers that start from whole units.
///
/// # Examples
///
/// ```
/// use bumdex_amm::domain::{Amount, Decimals, Token, TokenAddress};
///
/// let wvery = Token::new(TokenAddress::from_bytes([1u8; 32]), Decimals::SIX);
/// assert_eq!(wvery.to_raw_amount(100), Ok(Amount::new(100_000_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    address: TokenAddress,
    decimals: Decimals,
}

impl Token {
    /// Creates a new `Token`.
    #[must_use]
    pub const fn new(address: TokenAddress, decimals: Decimals) -> Self {
        Self { address, decimals }
    }

    /// Returns the token address.
    #[must_use]
    pub const fn address(&self) -> TokenAddress {
        self.address
    }

    /// Returns the token decimals.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Converts whole token units to a raw [`Amount`].
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the scaled value exceeds `u128`.
    pub const fn to_raw_amount(&self, whole: u128) -> Result<Amount, AmmError> {
        match self.decimals.scale_up(whole) {
            Some(raw) => Ok(Amount::new(raw)),
            None => Err(AmmError::Overflow("raw amount exceeds u128")),
        }
    }

    /// Truncates a raw [`Amount`] to whole token units.
    #[must_use]
    pub const fn from_raw_amount(&self, raw: Amount) -> u128 {
        self.decimals.split(raw.get()).0
    }
}
