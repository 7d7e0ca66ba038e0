//! Hardware abstraction traits consumed by the event core.
//!
//! Implement these for your board (GPIO ports, timer peripheral, LED bank) to
//! let the handlers drive real hardware, or use test doubles on the host.

/// The five independently addressable output lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputLine {
    /// Inverted by the tick handler every `fast_toggle_ticks` ticks.
    FastBlink,
    /// Inverted by the tick handler every `slow_toggle_ticks` ticks.
    SlowBlink,
    /// Inverted on every accepted switch event.
    SwitchIndicator,
    /// Toggled by the idle loop.
    IdleLeft,
    /// Toggled by the idle loop.
    IdleRight,
}

impl OutputLine {
    /// All lines in bit order of [`OutputBits`].
    pub const ALL: [OutputLine; 5] = [
        OutputLine::FastBlink,
        OutputLine::SlowBlink,
        OutputLine::SwitchIndicator,
        OutputLine::IdleLeft,
        OutputLine::IdleRight,
    ];

    /// Bit mask of this line within [`OutputBits`].
    #[inline]
    pub const fn mask(self) -> u8 {
        match self {
            OutputLine::FastBlink => 1 << 0,
            OutputLine::SlowBlink => 1 << 1,
            OutputLine::SwitchIndicator => 1 << 2,
            OutputLine::IdleLeft => 1 << 3,
            OutputLine::IdleRight => 1 << 4,
        }
    }
}

/// Trait for abstracting the output lines.
///
/// Handle any hardware errors internally - these methods cannot fail.
pub trait OutputLines {
    /// Drives `line` active (`true`) or inactive (`false`).
    fn set_line(&mut self, line: OutputLine, active: bool);

    /// Inverts the current level of `line`.
    fn toggle_line(&mut self, line: OutputLine);
}

/// In-memory image of the output lines, one bit per [`OutputLine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputBits(u8);

impl OutputBits {
    /// All lines inactive.
    pub const fn new() -> Self {
        OutputBits(0)
    }

    /// Returns whether `line` is active.
    #[inline]
    pub fn is_active(&self, line: OutputLine) -> bool {
        self.0 & line.mask() != 0
    }

    /// Raw bit image.
    #[inline]
    pub fn bits(&self) -> u8 {
        self.0
    }
}

impl OutputLines for OutputBits {
    fn set_line(&mut self, line: OutputLine, active: bool) {
        if active {
            self.0 |= line.mask();
        } else {
            self.0 &= !line.mask();
        }
    }

    fn toggle_line(&mut self, line: OutputLine) {
        self.0 ^= line.mask();
    }
}

/// Eight-segment counter display refreshed by the button handler.
pub trait CounterDisplay {
    /// Shows `value`, one bit per display LED.
    fn show(&mut self, value: u8);
}

/// A bank of falling-edge interrupt inputs sharing one interrupt vector.
pub trait EdgePort {
    /// Enables the edge interrupt at `priority`. Called once during init.
    fn enable(&mut self, priority: u8);

    /// Clears the pending flags of the lines selected by `mask`.
    fn clear_pending(&mut self, mask: u8);

    /// Reads the raw input register.
    fn read(&mut self) -> u8;
}

/// Periodic timer that invokes the tick handler.
pub trait TickTimer {
    /// Starts the timer with the given period and interrupt priority.
    fn start(&mut self, period_cycles: u32, priority: u8);
}
