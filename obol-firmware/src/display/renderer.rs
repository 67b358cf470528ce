//! Screen rendering
//!
//! Builds screens for the different machine modes. The front panel carries a
//! 16x2 character LCD; the blinking cursor doubles as the tilt alarm flash
//! indicator.

use core::fmt::Write;

use heapless::String;

use obol_core::state::Mode;
use obol_core::traits::display::fit_to_width;
use obol_core::vend::VendingMachine;

/// A screen buffer that can be flushed to the LCD
#[derive(Clone)]
pub struct Screen {
    /// Lines of text (2 rows)
    lines: [String<16>; 2],
    /// Whether the blinking cursor is shown
    cursor_visible: bool,
}

impl Screen {
    /// Create a new empty screen
    pub const fn new() -> Self {
        Self {
            lines: [String::new(), String::new()],
            cursor_visible: false,
        }
    }

    /// Clear the screen
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.cursor_visible = false;
    }

    /// Set text at a specific row, truncated to the panel width
    pub fn set_line(&mut self, row: u8, text: &str) {
        if let Some(line) = self.lines.get_mut(row as usize) {
            line.clear();
            let _ = line.push_str(fit_to_width(text));
        }
    }

    /// Get a line of text
    pub fn line(&self, row: u8) -> &str {
        self.lines
            .get(row as usize)
            .map(|l| l.as_str())
            .unwrap_or("")
    }

    /// Show or hide the blinking cursor
    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    /// Whether the blinking cursor is shown
    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

/// Screen renderer for the machine modes
pub struct Renderer {
    screen: Screen,
}

impl Renderer {
    /// Create a new renderer
    pub const fn new() -> Self {
        Self {
            screen: Screen::new(),
        }
    }

    /// Get the current screen buffer
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Rebuild the screen from the machine state
    pub fn render(&mut self, vm: &VendingMachine) {
        match vm.mode() {
            Mode::Idle => self.render_menu(vm),
            Mode::CoinInsertion => self.render_coin_insertion(vm),
            Mode::DispensingDrink => self.render_dispensing_drink(vm),
            Mode::DispensingChange => self.render_dispensing_change(vm),
            Mode::DrinkReady => self.render_drink_ready(),
            Mode::Alarm => self.render_alarm(vm),
        }
    }

    fn render_menu(&mut self, vm: &VendingMachine) {
        let drink = vm.selected_drink();
        self.screen.clear();
        self.screen.set_line(0, "Select drink:");

        let mut line: String<16> = String::new();
        let _ = write!(line, "{} {}p", drink.label(), drink.price());
        self.screen.set_line(1, &line);
    }

    fn render_coin_insertion(&mut self, vm: &VendingMachine) {
        self.screen.clear();
        self.screen.set_line(0, "Insert coins:");

        let mut line: String<16> = String::new();
        let _ = write!(line, "Due: {}p", vm.balance().remaining_due());
        self.screen.set_line(1, &line);
    }

    fn render_dispensing_drink(&mut self, vm: &VendingMachine) {
        self.screen.clear();
        self.screen.set_line(0, "Dispensing drink");

        // 10-step progress bar in brackets
        let progress = vm.drink_progress() as usize;
        let mut bar: String<16> = String::new();
        let _ = bar.push('[');
        for i in 0..10 {
            let _ = bar.push(if i < progress { '-' } else { ' ' });
        }
        let _ = bar.push(']');
        self.screen.set_line(1, &bar);
    }

    fn render_dispensing_change(&mut self, vm: &VendingMachine) {
        self.screen.clear();
        self.screen.set_line(0, "Dispensing:");

        if let Some(value) = vm.dispensing_coin() {
            let mut line: String<16> = String::new();
            let _ = write!(line, "1 x {}p", value);
            self.screen.set_line(1, &line);
        }
    }

    fn render_drink_ready(&mut self) {
        self.screen.clear();
        self.screen.set_line(0, "Drink ready!");
        self.screen.set_line(1, "Thank you");
    }

    fn render_alarm(&mut self, vm: &VendingMachine) {
        self.screen.clear();
        self.screen.set_line(0, "ALARM");
        self.screen.set_line(1, "MACHINE TILTED");
        self.screen.set_cursor_visible(vm.indicator_visible());
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
