//! Events that trigger mode transitions

/// Raw input events from the front panel and coin slot.
///
/// These are produced asynchronously (button edges, coin pulses) and queued
/// for the controller to consume; they are distinct from [`Event`], which is
/// what the controller derives from them after applying mode rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Next-drink button pressed
    NextDrink,
    /// Select button pressed
    Select,
    /// Coin inserted, by value in minor units
    Coin(u16),
}

/// Events that can trigger mode transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // User events
    /// Selection cycled to the next drink
    DrinkCycled,
    /// Select pressed, transaction begun
    TransactionStarted,
    /// A valid coin was credited, by value
    CoinAccepted(u16),
    /// Inserted balance reached the required price
    Paid,

    // Timer events
    /// Drink dispense duration elapsed
    DrinkDispensed,
    /// One change coin finished ejecting, by value
    CoinEjected(u16),
    /// All change paid out (or none was owed)
    ChangeDispensed,
    /// Drink-ready hold elapsed, machine reset
    ReadyElapsed,

    // Safety events
    /// Tilt reading rose above the alarm threshold
    TiltRaised,
    /// Tilt reading dropped back below the threshold
    TiltCleared,
}

impl Event {
    /// Check if this event originates from user input
    pub fn is_user_event(&self) -> bool {
        matches!(
            self,
            Event::DrinkCycled
                | Event::TransactionStarted
                | Event::CoinAccepted(_)
                | Event::Paid
        )
    }

    /// Check if this event originates from the tick scheduler
    pub fn is_timer_event(&self) -> bool {
        matches!(
            self,
            Event::DrinkDispensed
                | Event::CoinEjected(_)
                | Event::ChangeDispensed
                | Event::ReadyElapsed
        )
    }

    /// Check if this event originates from the tilt monitor
    pub fn is_safety_event(&self) -> bool {
        matches!(self, Event::TiltRaised | Event::TiltCleared)
    }
}
