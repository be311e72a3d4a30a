//! Explicit rounding direction for integer division.

/// Rounding direction for division on domain types.
///
/// Every division in the engine names its direction. Amounts paid out by
/// the pool round [`Down`](Rounding::Down); amounts charged to a trader
/// round [`Up`](Rounding::Up).
///
/// # Examples
///
/// ```
/// use bumdex_amm::domain::Rounding;
///
/// assert!(Rounding::Up.is_up());
/// assert!(Rounding::Down.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
