//! Tilt monitor implementation
//!
//! The tilt sensor is sampled on every scheduler tick regardless of which
//! mode the machine is in. A reading above the threshold asserts the alarm
//! and flashes the display cursor at the tick rate; dropping back below the
//! threshold clears both.

/// Alarm threshold in the sensor's native units (200 ≙ 2.0 V)
pub const TILT_THRESHOLD: i16 = 200;

/// Threshold crossings reported by the monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TiltEdge {
    /// Reading rose above the threshold
    Raised,
    /// Reading dropped back to or below the threshold
    Cleared,
}

/// Tilt monitor tracking the alarm condition and its visual indicator
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TiltMonitor {
    threshold: i16,
    tilted: bool,
    indicator_on: bool,
}

impl Default for TiltMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl TiltMonitor {
    /// Create a monitor with the standard threshold
    pub const fn new() -> Self {
        Self::with_threshold(TILT_THRESHOLD)
    }

    /// Create a monitor with a custom threshold
    pub const fn with_threshold(threshold: i16) -> Self {
        Self {
            threshold,
            tilted: false,
            indicator_on: false,
        }
    }

    /// Feed one sensor reading, taken once per tick.
    ///
    /// Returns a [`TiltEdge`] on threshold crossings, None while the
    /// condition is unchanged. While tilted the indicator toggles once per
    /// call, producing the flash; once clear it is forced off.
    pub fn sample(&mut self, reading: i16) -> Option<TiltEdge> {
        if reading > self.threshold {
            let edge = (!self.tilted).then_some(TiltEdge::Raised);
            self.tilted = true;
            self.indicator_on = !self.indicator_on;
            edge
        } else {
            let edge = self.tilted.then_some(TiltEdge::Cleared);
            self.tilted = false;
            self.indicator_on = false;
            edge
        }
    }

    /// Whether the alarm condition is currently active
    pub fn is_tilted(&self) -> bool {
        self.tilted
    }

    /// Current state of the flashing indicator
    pub fn indicator_visible(&self) -> bool {
        self.indicator_on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_readings_stay_quiet() {
        let mut monitor = TiltMonitor::new();
        assert_eq!(monitor.sample(0), None);
        assert_eq!(monitor.sample(150), None);
        assert_eq!(monitor.sample(200), None); // At threshold, not above
        assert!(!monitor.is_tilted());
        assert!(!monitor.indicator_visible());
    }

    #[test]
    fn test_raise_and_clear_edges() {
        let mut monitor = TiltMonitor::new();
        assert_eq!(monitor.sample(250), Some(TiltEdge::Raised));
        assert!(monitor.is_tilted());

        // Held above threshold: no further edge
        assert_eq!(monitor.sample(260), None);
        assert_eq!(monitor.sample(210), None);

        assert_eq!(monitor.sample(190), Some(TiltEdge::Cleared));
        assert!(!monitor.is_tilted());
    }

    #[test]
    fn test_indicator_flashes_while_tilted() {
        let mut monitor = TiltMonitor::new();
        monitor.sample(250);
        assert!(monitor.indicator_visible());
        monitor.sample(250);
        assert!(!monitor.indicator_visible());
        monitor.sample(250);
        assert!(monitor.indicator_visible());

        // Clearing forces the indicator off
        monitor.sample(100);
        assert!(!monitor.indicator_visible());
    }

    #[test]
    fn test_custom_threshold() {
        let mut monitor = TiltMonitor::with_threshold(300);
        assert_eq!(monitor.sample(250), None);
        assert_eq!(monitor.sample(301), Some(TiltEdge::Raised));
    }
}
