//! The vending controller
//!
//! [`VendingMachine`] ties the mode machine, balance tracker, change stream,
//! and tilt monitor together. It is the single owner of all mutable machine
//! state: input events and tick callbacks both run to completion against it
//! inside one reactor task, so no locking is needed. A genuinely
//! multi-threaded port must put it behind a mutex or route every mutation
//! through a single-consumer channel.

use crate::config::Timings;
use crate::menu::Drink;
use crate::money::{BalanceTracker, ChangeStream};
use crate::safety::tilt::{TiltEdge, TiltMonitor};
use crate::state::{Event, InputEvent, Mode};

/// Snapshot of the discrete output lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Outputs {
    /// Drink dispense valve
    pub drink: bool,
    /// Change hopper motor
    pub change: bool,
    /// Tilt alarm sounder
    pub alarm: bool,
}

impl Outputs {
    /// All outputs deasserted
    pub const fn idle() -> Self {
        Self {
            drink: false,
            change: false,
            alarm: false,
        }
    }
}

/// The vending machine controller
///
/// Drive it with [`handle_input`](Self::handle_input) for queued input
/// events, [`tick`](Self::tick) once per scheduler tick, and
/// [`sample_tilt`](Self::sample_tilt) with a fresh sensor reading on every
/// tick regardless of mode. Each returns the significant [`Event`] produced,
/// if any, for logging and display refresh.
#[derive(Debug)]
pub struct VendingMachine {
    mode: Mode,
    /// Mode to restore when the tilt alarm clears
    resume: Mode,
    selected: Drink,
    balance: BalanceTracker,
    tilt: TiltMonitor,
    timings: Timings,
    /// Drink dispense ticks elapsed (doubles as the progress indicator)
    progress: u8,
    /// Coins still owed as change
    change: ChangeStream,
    /// Coin currently in the eject cycle (kept for the display)
    dispensing_coin: Option<u16>,
    /// Ticks left on the current coin eject
    eject_ticks_left: u8,
    /// Ticks left on the drink-ready hold
    ready_ticks_left: u8,
}

impl Default for VendingMachine {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}

impl VendingMachine {
    /// Create a machine in idle with all balances zeroed
    pub fn new(timings: Timings) -> Self {
        Self {
            mode: Mode::Idle,
            resume: Mode::Idle,
            selected: Drink::default(),
            balance: BalanceTracker::new(),
            tilt: TiltMonitor::new(),
            timings,
            progress: 0,
            change: ChangeStream::new(0),
            dispensing_coin: None,
            eject_ticks_left: 0,
            ready_ticks_left: 0,
        }
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Currently selected drink
    pub fn selected_drink(&self) -> Drink {
        self.selected
    }

    /// Balance state for the current transaction
    pub fn balance(&self) -> &BalanceTracker {
        &self.balance
    }

    /// Drink dispense progress, 0..=drink_dispense_ticks
    pub fn drink_progress(&self) -> u8 {
        self.progress.min(self.timings.drink_dispense_ticks)
    }

    /// Value of the change coin currently being ejected
    pub fn dispensing_coin(&self) -> Option<u16> {
        self.dispensing_coin
    }

    /// Whether the tilt alarm is active
    pub fn alarm_active(&self) -> bool {
        self.tilt.is_tilted()
    }

    /// State of the flashing alarm indicator
    pub fn indicator_visible(&self) -> bool {
        self.tilt.indicator_visible()
    }

    /// Current output line states
    pub fn outputs(&self) -> Outputs {
        Outputs {
            drink: self.mode.drink_output_allowed(),
            change: self.mode.change_output_allowed()
                && (self.dispensing_coin.is_some() || !self.change.is_done()),
            alarm: self.tilt.is_tilted(),
        }
    }

    /// Process one queued input event
    pub fn handle_input(&mut self, input: InputEvent) -> Option<Event> {
        match input {
            InputEvent::NextDrink => {
                if self.mode != Mode::Idle {
                    return None;
                }
                self.selected = self.selected.next();
                self.balance.begin(self.selected.price());
                self.apply(Event::DrinkCycled)
            }
            InputEvent::Select => {
                if self.mode != Mode::Idle {
                    return None;
                }
                self.balance.begin(self.selected.price());
                self.apply(Event::TransactionStarted)
            }
            InputEvent::Coin(value) => self.handle_coin(value),
        }
    }

    /// Credit a coin pulse, if the mode and value allow it
    fn handle_coin(&mut self, value: u16) -> Option<Event> {
        if !self.mode.accepts_coins() {
            return None;
        }

        let before = self.balance.inserted();
        self.balance.add_coin(value);
        if self.balance.inserted() == before {
            // Not a coin this machine takes
            return None;
        }

        if self.balance.is_paid() {
            self.progress = 0;
            self.apply(Event::Paid)
        } else {
            self.apply(Event::CoinAccepted(value))
        }
    }

    /// Advance time-driven phases by one tick.
    ///
    /// Frozen while the alarm overlay is active; the interrupted phase
    /// continues where it left off once the tilt clears.
    pub fn tick(&mut self) -> Option<Event> {
        match self.mode {
            Mode::DispensingDrink => self.tick_drink(),
            Mode::DispensingChange => self.tick_change(),
            Mode::DrinkReady => self.tick_ready(),
            _ => None,
        }
    }

    fn tick_drink(&mut self) -> Option<Event> {
        self.progress = self.progress.saturating_add(1);
        if self.progress < self.timings.drink_dispense_ticks {
            return None;
        }

        self.apply(Event::DrinkDispensed);
        self.change = ChangeStream::new(self.balance.change_due());
        self.dispensing_coin = None;
        self.eject_ticks_left = 0;

        if self.change.is_done() {
            // No change owed: the change phase completes immediately
            self.ready_ticks_left = self.timings.ready_delay_ticks;
            return self.apply(Event::ChangeDispensed);
        }

        Some(Event::DrinkDispensed)
    }

    fn tick_change(&mut self) -> Option<Event> {
        if self.eject_ticks_left > 0 {
            self.eject_ticks_left -= 1;
            if self.eject_ticks_left == 0 {
                return self.dispensing_coin.map(Event::CoinEjected);
            }
            return None;
        }

        match self.change.next() {
            Some(value) => {
                self.dispensing_coin = Some(value);
                // This tick counts toward the eject cycle
                self.eject_ticks_left = self.timings.coin_eject_ticks.max(1) - 1;
                if self.eject_ticks_left == 0 {
                    Some(Event::CoinEjected(value))
                } else {
                    None
                }
            }
            None => {
                self.dispensing_coin = None;
                self.ready_ticks_left = self.timings.ready_delay_ticks;
                self.apply(Event::ChangeDispensed)
            }
        }
    }

    fn tick_ready(&mut self) -> Option<Event> {
        self.ready_ticks_left = self.ready_ticks_left.saturating_sub(1);
        if self.ready_ticks_left > 0 {
            return None;
        }

        self.reset();
        self.apply(Event::ReadyElapsed)
    }

    /// Feed one tilt sensor reading, taken once per tick in every mode.
    ///
    /// A rising edge preempts the current mode with the alarm overlay; the
    /// falling edge restores the preempted mode.
    pub fn sample_tilt(&mut self, reading: i16) -> Option<Event> {
        match self.tilt.sample(reading)? {
            TiltEdge::Raised => {
                if self.mode != Mode::Alarm {
                    self.resume = self.mode;
                }
                self.apply(Event::TiltRaised)
            }
            TiltEdge::Cleared => {
                self.mode = self.resume;
                Some(Event::TiltCleared)
            }
        }
    }

    /// Full state reset at the end of a transaction cycle
    fn reset(&mut self) {
        self.selected = Drink::default();
        self.balance.reset();
        self.progress = 0;
        self.change = ChangeStream::new(0);
        self.dispensing_coin = None;
        self.eject_ticks_left = 0;
        self.ready_ticks_left = 0;
        self.resume = Mode::Idle;
    }

    fn apply(&mut self, event: Event) -> Option<Event> {
        self.mode = self.mode.transition(event);
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paid_machine(drink_presses: u8, coins: &[u16]) -> VendingMachine {
        let mut vm = VendingMachine::default();
        for _ in 0..drink_presses {
            vm.handle_input(InputEvent::NextDrink);
        }
        vm.handle_input(InputEvent::Select);
        for &coin in coins {
            vm.handle_input(InputEvent::Coin(coin));
        }
        vm
    }

    /// Run ticks until the next event, with a sanity bound
    fn tick_until_event(vm: &mut VendingMachine) -> Event {
        for _ in 0..100 {
            if let Some(event) = vm.tick() {
                return event;
            }
        }
        panic!("no event within 100 ticks");
    }

    fn collect_ejected_coins(vm: &mut VendingMachine) -> std::vec::Vec<u16> {
        let mut coins = std::vec::Vec::new();
        loop {
            match tick_until_event(vm) {
                Event::CoinEjected(value) => coins.push(value),
                Event::ChangeDispensed => return coins,
                other => panic!("unexpected event {:?}", other),
            }
        }
    }

    #[test]
    fn test_selection_cycles_only_in_idle() {
        let mut vm = VendingMachine::default();
        assert_eq!(vm.selected_drink(), Drink::Cola);

        vm.handle_input(InputEvent::NextDrink);
        assert_eq!(vm.selected_drink(), Drink::Lemonade);
        assert_eq!(vm.balance().required(), 80);

        vm.handle_input(InputEvent::Select);
        assert_eq!(vm.mode(), Mode::CoinInsertion);

        // Cycling is dead once a transaction is open
        vm.handle_input(InputEvent::NextDrink);
        assert_eq!(vm.selected_drink(), Drink::Lemonade);
    }

    #[test]
    fn test_coins_ignored_outside_coin_insertion() {
        let mut vm = VendingMachine::default();
        assert_eq!(vm.handle_input(InputEvent::Coin(50)), None);
        assert_eq!(vm.balance().inserted(), 0);
    }

    #[test]
    fn test_invalid_coin_ignored() {
        let mut vm = VendingMachine::default();
        vm.handle_input(InputEvent::Select);
        assert_eq!(vm.handle_input(InputEvent::Coin(25)), None);
        assert_eq!(vm.balance().inserted(), 0);
        assert_eq!(vm.mode(), Mode::CoinInsertion);
    }

    #[test]
    fn test_underpayment_keeps_waiting() {
        let mut vm = VendingMachine::default();
        vm.handle_input(InputEvent::Select); // Cola, 80p

        assert_eq!(
            vm.handle_input(InputEvent::Coin(50)),
            Some(Event::CoinAccepted(50))
        );
        assert_eq!(vm.mode(), Mode::CoinInsertion);
        assert_eq!(vm.balance().remaining_due(), 30);
    }

    #[test]
    fn test_payment_starts_dispensing() {
        let mut vm = paid_machine(0, &[50, 50]);
        assert_eq!(vm.mode(), Mode::DispensingDrink);
        assert_eq!(vm.balance().inserted(), 100);

        // Progress advances once per tick for the full dispense duration
        for expected in 1u8..10 {
            assert_eq!(vm.tick(), None);
            assert_eq!(vm.drink_progress(), expected);
        }
        assert_eq!(vm.tick(), Some(Event::DrinkDispensed));
        assert_eq!(vm.mode(), Mode::DispensingChange);
    }

    #[test]
    fn test_quiet_ticks_change_visible_state() {
        // Ticks that produce no event still move what the screen shows, and
        // the mode flags itself as dispensing so the display refreshes
        let timings = Timings {
            coin_eject_ticks: 2,
            ..Timings::default()
        };
        let mut vm = VendingMachine::new(timings);
        vm.handle_input(InputEvent::Select);
        vm.handle_input(InputEvent::Coin(50));
        vm.handle_input(InputEvent::Coin(50)); // change 20

        assert!(vm.mode().is_dispensing());
        let before = vm.drink_progress();
        assert_eq!(vm.tick(), None);
        assert_eq!(vm.drink_progress(), before + 1);

        assert_eq!(tick_until_event(&mut vm), Event::DrinkDispensed);

        // First eject tick: no event yet, but the coin line is already up
        assert!(vm.mode().is_dispensing());
        assert_eq!(vm.tick(), None);
        assert_eq!(vm.dispensing_coin(), Some(20));
        assert_eq!(vm.tick(), Some(Event::CoinEjected(20)));
    }

    #[test]
    fn test_cola_overpaid_yields_one_twenty() {
        // required=80, insert 50+50 -> change 20 -> exactly one 20p coin
        let mut vm = paid_machine(0, &[50, 50]);
        assert_eq!(tick_until_event(&mut vm), Event::DrinkDispensed);
        assert_eq!(collect_ejected_coins(&mut vm), [20]);
        assert_eq!(vm.mode(), Mode::DrinkReady);
    }

    #[test]
    fn test_orange_juice_yields_one_ten() {
        // OrangeJuice: 2 presses from Cola, required=60, insert 50+20
        let mut vm = paid_machine(2, &[50, 20]);
        assert_eq!(vm.balance().change_due(), 10);
        assert_eq!(tick_until_event(&mut vm), Event::DrinkDispensed);
        assert_eq!(collect_ejected_coins(&mut vm), [10]);
    }

    #[test]
    fn test_exact_payment_skips_change_phase() {
        // Water: 3 presses, required=50, insert 50 -> no change events
        let mut vm = paid_machine(3, &[50]);
        assert_eq!(tick_until_event(&mut vm), Event::ChangeDispensed);
        assert_eq!(vm.mode(), Mode::DrinkReady);
    }

    #[test]
    fn test_ready_resets_machine() {
        let mut vm = paid_machine(3, &[50]);
        assert_eq!(tick_until_event(&mut vm), Event::ChangeDispensed);
        assert_eq!(tick_until_event(&mut vm), Event::ReadyElapsed);

        assert_eq!(vm.mode(), Mode::Idle);
        assert_eq!(vm.selected_drink().index(), 0);
        assert_eq!(vm.balance().required(), 0);
        assert_eq!(vm.balance().inserted(), 0);
        assert_eq!(vm.outputs(), Outputs::idle());
    }

    #[test]
    fn test_alarm_preempts_and_resumes_dispensing() {
        let mut vm = paid_machine(0, &[50, 50]);

        // Part-way through the drink dispense
        vm.tick();
        vm.tick();
        let progress = vm.drink_progress();
        assert_eq!(vm.mode(), Mode::DispensingDrink);

        assert_eq!(vm.sample_tilt(250), Some(Event::TiltRaised));
        assert_eq!(vm.mode(), Mode::Alarm);
        assert!(vm.outputs().alarm);
        assert!(!vm.outputs().drink);

        // Timers are frozen while the alarm is up
        assert_eq!(vm.tick(), None);
        assert_eq!(vm.drink_progress(), progress);

        // Indicator flashes at the tick rate while tilted
        assert!(vm.indicator_visible());
        vm.sample_tilt(250);
        assert!(!vm.indicator_visible());

        // Clearing the tilt resumes the interrupted mode
        assert_eq!(vm.sample_tilt(150), Some(Event::TiltCleared));
        assert_eq!(vm.mode(), Mode::DispensingDrink);
        assert!(!vm.outputs().alarm);
        assert_eq!(vm.drink_progress(), progress);
    }

    #[test]
    fn test_alarm_from_idle_returns_to_idle() {
        let mut vm = VendingMachine::default();
        vm.sample_tilt(300);
        assert_eq!(vm.mode(), Mode::Alarm);
        vm.sample_tilt(0);
        assert_eq!(vm.mode(), Mode::Idle);
    }

    #[test]
    fn test_outputs_during_change() {
        let mut vm = paid_machine(0, &[50, 50]);
        tick_until_event(&mut vm); // DrinkDispensed
        assert_eq!(vm.mode(), Mode::DispensingChange);
        assert!(vm.outputs().change);
        assert!(!vm.outputs().drink);
    }

    #[test]
    fn test_multi_coin_change_sequence() {
        // Lemonade (1 press, 80p) paid with 3x50 = 150 -> change 70 = 50+20
        let mut vm = paid_machine(1, &[50, 50, 50]);
        assert_eq!(tick_until_event(&mut vm), Event::DrinkDispensed);
        assert_eq!(collect_ejected_coins(&mut vm), [50, 20]);
    }

    #[test]
    fn test_slow_coin_eject_timing() {
        let timings = Timings {
            coin_eject_ticks: 3,
            ..Timings::default()
        };
        let mut vm = VendingMachine::new(timings);
        vm.handle_input(InputEvent::Select);
        vm.handle_input(InputEvent::Coin(50));
        vm.handle_input(InputEvent::Coin(50)); // change 20

        assert_eq!(tick_until_event(&mut vm), Event::DrinkDispensed);

        // One coin takes three ticks to eject
        assert_eq!(vm.tick(), None);
        assert_eq!(vm.dispensing_coin(), Some(20));
        assert_eq!(vm.tick(), None);
        assert_eq!(vm.tick(), Some(Event::CoinEjected(20)));
        assert_eq!(tick_until_event(&mut vm), Event::ChangeDispensed);
    }
}
