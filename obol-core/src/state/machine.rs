//! Mode machine definition
//!
//! All dispensing, coin, and display behavior is a function of the current
//! mode and an event.

use super::events::Event;

/// Operating modes of the vending machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Showing the menu, selection cycles on the next-drink button
    #[default]
    Idle,
    /// Transaction open, waiting for coins to cover the price
    CoinInsertion,
    /// Drink valve open, progress bar advancing
    DispensingDrink,
    /// Ejecting change coins one at a time
    DispensingChange,
    /// Drink ready message held before the reset to idle
    DrinkReady,
    /// Tilt alarm active; preempts whatever was running
    Alarm,
}

impl Mode {
    /// Check if coin input is honored in this mode.
    ///
    /// Coins are only ever credited during coin insertion; pulses arriving
    /// in any other mode are dropped.
    pub fn accepts_coins(&self) -> bool {
        matches!(self, Mode::CoinInsertion)
    }

    /// Check if the drink valve may be driven in this mode
    pub fn drink_output_allowed(&self) -> bool {
        matches!(self, Mode::DispensingDrink)
    }

    /// Check if the change hopper may be driven in this mode
    pub fn change_output_allowed(&self) -> bool {
        matches!(self, Mode::DispensingChange)
    }

    /// Check if a dispense phase is running
    ///
    /// These are the modes whose screen content changes on plain ticks
    /// (progress bar, coin-eject line), so the display must be refreshed
    /// every tick while one of them is active.
    pub fn is_dispensing(&self) -> bool {
        matches!(self, Mode::DispensingDrink | Mode::DispensingChange)
    }

    /// Check if this is the alarm overlay mode
    pub fn is_alarm(&self) -> bool {
        matches!(self, Mode::Alarm)
    }

    /// Process an event and return the next mode
    ///
    /// This is the core transition logic. The alarm exit is absent on
    /// purpose: leaving `Alarm` restores the preempted mode, which the
    /// controller remembers (the table alone cannot).
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Mode::*;

        match (self, event) {
            // Idle transitions
            (Idle, DrinkCycled) => Idle,
            (Idle, TransactionStarted) => CoinInsertion,

            // Coin insertion transitions
            (CoinInsertion, Paid) => DispensingDrink,

            // Dispensing transitions
            (DispensingDrink, DrinkDispensed) => DispensingChange,
            (DispensingChange, ChangeDispensed) => DrinkReady,

            // Drink ready transitions
            (DrinkReady, ReadyElapsed) => Idle,

            // Tilt alarm preempts from any mode
            (_, TiltRaised) => Alarm,

            // Default: stay in current mode
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_vend_cycle() {
        let mode = Mode::Idle;

        let mode = mode.transition(Event::TransactionStarted);
        assert_eq!(mode, Mode::CoinInsertion);

        let mode = mode.transition(Event::Paid);
        assert_eq!(mode, Mode::DispensingDrink);

        let mode = mode.transition(Event::DrinkDispensed);
        assert_eq!(mode, Mode::DispensingChange);

        let mode = mode.transition(Event::ChangeDispensed);
        assert_eq!(mode, Mode::DrinkReady);

        let mode = mode.transition(Event::ReadyElapsed);
        assert_eq!(mode, Mode::Idle);
    }

    #[test]
    fn test_cycling_stays_idle() {
        let mode = Mode::Idle.transition(Event::DrinkCycled);
        assert_eq!(mode, Mode::Idle);
    }

    #[test]
    fn test_alarm_preempts_any_mode() {
        let modes = [
            Mode::Idle,
            Mode::CoinInsertion,
            Mode::DispensingDrink,
            Mode::DispensingChange,
            Mode::DrinkReady,
        ];

        for mode in modes {
            assert_eq!(mode.transition(Event::TiltRaised), Mode::Alarm);
        }
    }

    #[test]
    fn test_unrelated_events_ignored() {
        // A paid event outside coin insertion must not move the machine
        assert_eq!(Mode::Idle.transition(Event::Paid), Mode::Idle);
        assert_eq!(
            Mode::DrinkReady.transition(Event::CoinAccepted(50)),
            Mode::DrinkReady
        );
        assert_eq!(
            Mode::DispensingDrink.transition(Event::TransactionStarted),
            Mode::DispensingDrink
        );
    }

    #[test]
    fn test_accepts_coins() {
        assert!(Mode::CoinInsertion.accepts_coins());
        assert!(!Mode::Idle.accepts_coins());
        assert!(!Mode::DispensingChange.accepts_coins());
        assert!(!Mode::Alarm.accepts_coins());
    }

    #[test]
    fn test_is_dispensing() {
        assert!(Mode::DispensingDrink.is_dispensing());
        assert!(Mode::DispensingChange.is_dispensing());
        assert!(!Mode::Idle.is_dispensing());
        assert!(!Mode::CoinInsertion.is_dispensing());
        assert!(!Mode::DrinkReady.is_dispensing());
        assert!(!Mode::Alarm.is_dispensing());
    }

    #[test]
    fn test_output_gating() {
        assert!(Mode::DispensingDrink.drink_output_allowed());
        assert!(!Mode::DispensingDrink.change_output_allowed());
        assert!(Mode::DispensingChange.change_output_allowed());
        assert!(!Mode::Alarm.drink_output_allowed());
        assert!(!Mode::Alarm.change_output_allowed());
    }
}
