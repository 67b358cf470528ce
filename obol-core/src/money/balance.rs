//! Balance tracking for the current transaction

use super::Coin;

/// Tracks inserted coin value against the price of the selected drink.
///
/// `inserted` only ever grows by the value of coins the acceptor recognises;
/// invalid values are silently ignored per the hardware contract (they are
/// signals, not errors). Both fields are zeroed when a transaction begins
/// and again on the machine-wide reset.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BalanceTracker {
    /// Price of the selected drink
    required: u16,
    /// Cumulative value inserted this transaction
    inserted: u16,
}

impl BalanceTracker {
    /// Create a tracker with no transaction in progress
    pub const fn new() -> Self {
        Self {
            required: 0,
            inserted: 0,
        }
    }

    /// Begin a transaction: set the price owed and zero the inserted total
    pub fn begin(&mut self, price: u16) {
        self.required = price;
        self.inserted = 0;
    }

    /// Zero both balances (machine reset)
    pub fn reset(&mut self) {
        self.required = 0;
        self.inserted = 0;
    }

    /// Credit a coin by value
    ///
    /// Values outside the acceptor set are ignored. There is no upper bound
    /// on overpayment; the excess comes back as change.
    pub fn add_coin(&mut self, value: u16) {
        if Coin::from_value(value).is_some() {
            self.inserted = self.inserted.saturating_add(value);
        }
    }

    /// Amount still owed (zero once paid)
    pub fn remaining_due(&self) -> u16 {
        self.required.saturating_sub(self.inserted)
    }

    /// Whether enough has been inserted to cover the price
    pub fn is_paid(&self) -> bool {
        self.inserted >= self.required
    }

    /// Overpayment owed back to the customer
    pub fn change_due(&self) -> u16 {
        self.inserted.saturating_sub(self.required)
    }

    /// Price of the selected drink
    pub fn required(&self) -> u16 {
        self.required
    }

    /// Total inserted this transaction
    pub fn inserted(&self) -> u16 {
        self.inserted
    }
}
