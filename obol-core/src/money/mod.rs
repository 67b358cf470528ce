//! Coins, balance tracking, and change calculation
//!
//! All amounts are in minor currency units (pence).

pub mod balance;
pub mod change;

pub use balance::BalanceTracker;
pub use change::ChangeStream;

/// Coins the acceptor recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Coin {
    Ten,
    Twenty,
    Fifty,
}

impl Coin {
    /// Value in minor currency units
    pub const fn value(self) -> u16 {
        match self {
            Coin::Ten => 10,
            Coin::Twenty => 20,
            Coin::Fifty => 50,
        }
    }

    /// Look up a coin by value
    ///
    /// Anything outside the acceptor set is not a coin this machine takes.
    pub const fn from_value(value: u16) -> Option<Self> {
        match value {
            10 => Some(Coin::Ten),
            20 => Some(Coin::Twenty),
            50 => Some(Coin::Fifty),
            _ => None,
        }
    }
}

/// Denominations the change hopper can eject, largest first.
///
/// This set is canonical: greedy decomposition is coin-minimal for it.
/// That property does not hold for arbitrary sets, so the change calculator
/// must not be reused with a different table without revisiting the math.
pub const CHANGE_DENOMINATIONS: [u16; 4] = [50, 20, 10, 1];
