//! Which way a swap moves through the pair.

use core::fmt;

/// Direction of a swap relative to the pair's canonical token order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Sell token0, receive token1.
    ZeroForOne,
    /// Sell token1, receive token0.
    OneForZero,
}

impl SwapDirection {
    /// The direction that undoes this one.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::ZeroForOne => Self::OneForZero,
            Self::OneForZero => Self::ZeroForOne,
        }
    }

    /// Orders `(reserve0, reserve1)` as `(reserve_in, reserve_out)`.
    #[must_use]
    pub fn orient<T>(self, pair: (T, T)) -> (T, T) {
        match self {
            Self::ZeroForOne => pair,
            Self::OneForZero => (pair.1, pair.0),
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroForOne => write!(f, "0->1"),
            Self::OneForZero => write!(f, "1->0"),
        }
    }
}
