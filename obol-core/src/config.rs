//! Timing configuration
//!
//! All timing-sensitive phases are expressed in scheduler ticks rather than
//! hardware timer periods, so the same logic runs on any target that can
//! provide a fixed-rate tick.

/// Per-phase timing parameters, in ticks of `tick_interval_ms`.
///
/// Defaults match the original electrical design: a 100 ms tick, a 1 s drink
/// dispense shown as a 10-step progress bar, one coin ejected per tick, and
/// a 1 s drink-ready hold before the machine resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timings {
    /// Scheduler tick period in milliseconds
    pub tick_interval_ms: u32,
    /// Ticks the drink valve stays open (also the progress bar length)
    pub drink_dispense_ticks: u8,
    /// Ticks per physical coin ejected during change dispensing
    pub coin_eject_ticks: u8,
    /// Ticks the "drink ready" message is held before the reset to idle
    pub ready_delay_ticks: u8,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            drink_dispense_ticks: 10,
            coin_eject_ticks: 1,
            ready_delay_ticks: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let t = Timings::default();
        assert_eq!(t.tick_interval_ms, 100);
        assert_eq!(t.drink_dispense_ticks, 10);
        assert!(t.coin_eject_ticks >= 1);
        assert!(t.ready_delay_ticks >= 1);
    }
}
