//! Greedy change calculation
//!
//! Change is paid out one physical coin at a time: the hopper ejects a coin,
//! the caller waits for the eject cycle to finish, then asks for the next.
//! `ChangeStream` models that as a lazy iterator of single-coin commands.

use super::CHANGE_DENOMINATIONS;

/// Lazy sequence of single-coin eject commands for a change amount.
///
/// Each `next()` yields the value of one coin to eject, chosen greedily:
/// the largest denomination that still fits the remaining amount. For the
/// canonical set {50, 20, 10, 1} this produces exactly the per-denomination
/// division walk (50s first, then 20s, 10s, and 1s for the remainder) and
/// uses the minimum possible number of coins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChangeStream {
    remaining: u16,
}

impl ChangeStream {
    /// Create a stream paying out `change` in total.
    ///
    /// A zero amount yields no coins at all.
    pub const fn new(change: u16) -> Self {
        Self { remaining: change }
    }

    /// Value still to be paid out
    pub const fn remaining(&self) -> u16 {
        self.remaining
    }

    /// Whether all coins have been ejected
    pub const fn is_done(&self) -> bool {
        self.remaining == 0
    }
}

impl Iterator for ChangeStream {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        if self.remaining == 0 {
            return None;
        }
        for &denom in &CHANGE_DENOMINATIONS {
            if denom <= self.remaining {
                self.remaining -= denom;
                return Some(denom);
            }
        }
        // Unreachable while the table ends in a 1-unit coin
        None
    }
}
