//! Caller-supplied time and operation deadlines.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AmmError;

/// Seconds since the Unix epoch, as supplied by the caller.
///
/// The engine never reads a clock; every operation receives `now`
/// explicitly, which keeps it deterministic and testable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Creates a timestamp from epoch seconds.
    #[must_use]
    pub const fn new(secs: u64) -> Self {
        Self(secs)
    }

    /// Epoch seconds.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Latest time at which an operation may still execute.
///
/// An operation evaluated at `now` fails with [`AmmError::Expired`] when
/// `now > deadline`; `now == deadline` is still accepted.
///
/// # Examples
///
/// ```
/// use bumdex_amm::domain::{Deadline, Timestamp};
///
/// let deadline = Deadline::after(Timestamp::new(1_000), 600);
/// assert!(!deadline.is_expired(Timestamp::new(1_600)));
/// assert!(deadline.is_expired(Timestamp::new(1_601)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deadline(Timestamp);

impl Deadline {
    /// A deadline at an absolute time.
    #[must_use]
    pub const fn at(time: Timestamp) -> Self {
        Self(time)
    }

    /// `now + window_secs`, saturating at `u64::MAX`.
    #[must_use]
    pub const fn after(now: Timestamp, window_secs: u64) -> Self {
        Self(Timestamp(now.0.saturating_add(window_secs)))
    }

    /// A deadline that never passes.
    #[must_use]
    pub const fn never() -> Self {
        Self(Timestamp(u64::MAX))
    }

    /// The deadline instant.
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.0
    }

    /// Returns `true` if `now` is past the deadline.
    #[must_use]
    pub const fn is_expired(&self, now: Timestamp) -> bool {
        now.0 > self.0 .0
    }

    /// Fails with [`AmmError::Expired`] if `now` is past the deadline.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Expired`] when `now > deadline`.
    pub const fn check(&self, now: Timestamp) -> Result<(), AmmError> {
        if self.is_expired(now) {
            return Err(AmmError::Expired {
                deadline: self.0,
                now,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
