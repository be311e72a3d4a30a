//! Chain-agnostic token address.

use core::fmt;

/// Identifier of a token contract.
///
/// Wraps a fixed 32-byte array so that both 20-byte EVM addresses
/// (left-padded) and 32-byte account keys fit. Ordering is lexicographic
/// on the bytes, which is what canonical pair ordering relies on.
///
/// # Examples
///
/// ```
/// use bumdex_amm::domain::TokenAddress;
///
/// let evm = TokenAddress::from_evm([0x36; 20]);
/// assert_eq!(&evm.as_bytes()[..12], &[0u8; 12]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenAddress([u8; 32]);

impl TokenAddress {
    /// Creates a `TokenAddress` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Creates a `TokenAddress` from a 20-byte EVM address, left-padded
    /// with zeros.
    #[must_use]
    pub const fn from_evm(bytes: [u8; 20]) -> Self {
        let mut out = [0u8; 32];
        let mut i = 0;
        while i < 20 {
            out[12 + i] = bytes[i];
            i += 1;
        }
        Self(out)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// The all-zero address, used as the holder of locked liquidity.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
