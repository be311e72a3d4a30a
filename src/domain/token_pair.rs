//! Ordered pair of distinct tokens and the canonical pair key.

use core::fmt;

use super::{SwapDirection, Token, TokenAddress};
use crate::error::AmmError;

/// Canonical key of a trading pair: the two addresses sorted ascending.
///
/// `PairId::new(a, b) == PairId::new(b, a)`, so a registry keyed by
/// `PairId` can never hold two pools for the same pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairId {
    token0: TokenAddress,
    token1: TokenAddress,
}

impl PairId {
    /// Builds the canonical key for two addresses.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if both addresses are equal.
    pub fn new(a: TokenAddress, b: TokenAddress) -> Result<Self, AmmError> {
        match a.cmp(&b) {
            core::cmp::Ordering::Less => Ok(Self { token0: a, token1: b }),
            core::cmp::Ordering::Greater => Ok(Self { token0: b, token1: a }),
            core::cmp::Ordering::Equal => Err(AmmError::InvalidToken(
                "token pair requires two distinct addresses",
            )),
        }
    }

    /// Lower address.
    #[must_use]
    pub const fn token0(&self) -> TokenAddress {
        self.token0
    }

    /// Higher address.
    #[must_use]
    pub const fn token1(&self) -> TokenAddress {
        self.token1
    }
}

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.token0, self.token1)
    }
}

/// An ordered pair of distinct tokens, canonically sorted by address.
///
/// `first()` is always the token with the lower address ("token0") and
/// `second()` the higher one ("token1"), no matter the order passed in.
///
/// # Examples
///
/// ```
/// use bumdex_amm::domain::{Decimals, Token, TokenAddress, TokenPair};
///
/// let wvery  = Token::new(TokenAddress::from_bytes([1u8; 32]), Decimals::SIX);
/// let vldemo = Token::new(TokenAddress::from_bytes([2u8; 32]), Decimals::EIGHTEEN);
///
/// let pair = TokenPair::new(vldemo, wvery).expect("distinct tokens");
/// assert_eq!(pair.first(), wvery);
/// assert_eq!(pair.second(), vldemo);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenPair {
    token0: Token,
    token1: Token,
}

impl TokenPair {
    /// Creates a canonically-ordered `TokenPair`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if both tokens have the same address.
    pub fn new(a: Token, b: Token) -> Result<Self, AmmError> {
        let id = PairId::new(a.address(), b.address())?;
        if id.token0() == a.address() {
            Ok(Self { token0: a, token1: b })
        } else {
            Ok(Self { token0: b, token1: a })
        }
    }

    /// Returns token0 (lower address).
    #[must_use]
    pub const fn first(&self) -> Token {
        self.token0
    }

    /// Returns token1 (higher address).
    #[must_use]
    pub const fn second(&self) -> Token {
        self.token1
    }

    /// Canonical key of this pair.
    #[must_use]
    pub const fn id(&self) -> PairId {
        PairId {
            token0: self.token0.address(),
            token1: self.token1.address(),
        }
    }

    /// Returns `true` if the given token is part of this pair.
    #[must_use]
    pub fn contains(&self, token: &Token) -> bool {
        self.token0 == *token || self.token1 == *token
    }

    /// Returns the counterpart of `token` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token` is not in the pair.
    pub fn other(&self, token: &Token) -> Result<Token, AmmError> {
        if *token == self.token0 {
            Ok(self.token1)
        } else if *token == self.token1 {
            Ok(self.token0)
        } else {
            Err(AmmError::InvalidToken("token is not part of this pair"))
        }
    }

    /// Swap direction when selling `token_in` into this pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token_in` is not in the pair.
    pub fn direction_for(&self, token_in: &Token) -> Result<SwapDirection, AmmError> {
        if *token_in == self.token0 {
            Ok(SwapDirection::ZeroForOne)
        } else if *token_in == self.token1 {
            Ok(SwapDirection::OneForZero)
        } else {
            Err(AmmError::InvalidToken("token_in is not part of the pool pair"))
        }
    }
}
