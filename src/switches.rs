//! Debounced switch bank: decoding, the edge source and the acceptance gate.

use crate::config::{CoreConfig, SWITCH_PORT_MASK};
use crate::handler::SwitchHandler;
use crate::io::{EdgePort, OutputLine, OutputLines};
use crate::report::{Report, Reporter};
use crate::state::EventState;

/// Pressed switches packed densely, bit `i` set when switch `i` is pressed.
///
/// Six switches are wired to non-contiguous port bits with negative logic.
/// Port bits 7, 6, 5 map to switches 5, 4, 3; port bits 3, 2 map to switches
/// 2, 1; port bit 0 maps to switch 0. Port bits 4 and 1 are not switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchState(u8);

impl SwitchState {
    /// No switch pressed.
    pub const NONE: SwitchState = SwitchState(0);

    /// Number of switches in the bank.
    pub const COUNT: u8 = 6;

    /// Decodes a raw port read (low level = pressed).
    #[inline]
    pub const fn from_port(raw: u8) -> Self {
        Self::from_active(!raw)
    }

    /// Repacks port bits that are already in positive logic.
    #[inline]
    pub const fn from_active(active: u8) -> Self {
        SwitchState(((active & 0xE0) >> 2) | ((active & 0x0C) >> 1) | (active & 0x01))
    }

    /// Packed switch bits.
    #[inline]
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Returns whether switch `index` is pressed. Out-of-range indices are never pressed.
    #[inline]
    pub fn is_pressed(&self, index: u8) -> bool {
        index < Self::COUNT && self.0 & (1 << index) != 0
    }

    /// Number of pressed switches.
    #[inline]
    pub fn pressed_count(&self) -> u32 {
        self.0.count_ones()
    }
}

impl core::fmt::UpperHex for SwitchState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::UpperHex::fmt(&self.0, f)
    }
}

/// Applies the debounce gate to one switch event.
///
/// Accepts when `debounce_counter >= debounce_ticks`: stores the state,
/// inverts the switch indicator line, reports, and restarts the debounce
/// window. Otherwise nothing changes. The comparison is plain, so a counter
/// that just wrapped rejects a genuine edge.
///
/// Returns whether the event was accepted.
pub fn accept_switches<O: OutputLines, R: Reporter>(
    state: &mut EventState,
    config: &CoreConfig,
    outputs: &mut O,
    reporter: &mut R,
    switches: SwitchState,
) -> bool {
    if state.debounce_counter < config.debounce_ticks() {
        trace!("switch edge discarded after {=u64} ticks", state.debounce_counter);
        return false;
    }

    debug!("switch edge accepted: {=u8:#x}", switches.bits());
    state.switch_state = switches;
    outputs.toggle_line(OutputLine::SwitchIndicator);
    reporter.report(Report::SwitchAccepted(switches));
    state.debounce_counter = 0;
    true
}

/// Falling-edge source for the switch bank.
///
/// Owns the port and the registered handler for its whole lifetime; there is
/// no way to swap the handler after [`init`](Self::init).
pub struct SwitchBank<P: EdgePort, H: SwitchHandler> {
    port: P,
    handler: H,
}

impl<P: EdgePort, H: SwitchHandler> SwitchBank<P, H> {
    /// Registers `handler`, clears stale flags and enables the interrupt.
    pub fn init(mut port: P, handler: H, priority: u8) -> Self {
        port.clear_pending(SWITCH_PORT_MASK);
        port.enable(priority);
        Self { port, handler }
    }

    /// Interrupt entry point.
    ///
    /// Flags are cleared before the read so an edge arriving during handling
    /// is latched again rather than lost. The handler runs on every edge; the
    /// debounce decision is the handler's.
    pub fn on_interrupt(&mut self) {
        self.port.clear_pending(SWITCH_PORT_MASK);
        let switches = SwitchState::from_port(self.port.read());
        self.handler.on_switches(switches);
    }

    /// The registered handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// The underlying port.
    pub fn port(&self) -> &P {
        &self.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_switch_bits_shift_down_by_two() {
        assert_eq!(SwitchState::from_active(0x80).bits(), 0x20);
        assert_eq!(SwitchState::from_active(0x40).bits(), 0x10);
        assert_eq!(SwitchState::from_active(0x20).bits(), 0x08);
    }

    #[test]
    fn middle_switch_bits_shift_down_by_one() {
        assert_eq!(SwitchState::from_active(0x08).bits(), 0x04);
        assert_eq!(SwitchState::from_active(0x04).bits(), 0x02);
    }

    #[test]
    fn bit_zero_stays_put() {
        assert_eq!(SwitchState::from_active(0x09).bits(), 0x05);
        assert_eq!(SwitchState::from_active(0x01).bits(), 0x01);
    }

    #[test]
    fn unmonitored_port_bits_are_ignored() {
        assert_eq!(SwitchState::from_active(0x12), SwitchState::NONE);
    }

    #[test]
    fn port_read_uses_negative_logic() {
        // All lines pulled up: nothing pressed.
        assert_eq!(SwitchState::from_port(0xFF), SwitchState::NONE);
        // Only port bit 7 pulled low.
        assert_eq!(SwitchState::from_port(0x7F).bits(), 0x20);
        // Every line low.
        assert_eq!(SwitchState::from_port(0x00).bits(), 0x3F);
    }

    #[test]
    fn is_pressed_and_count() {
        let state = SwitchState::from_active(0xA1);
        assert!(state.is_pressed(5));
        assert!(state.is_pressed(3));
        assert!(state.is_pressed(0));
        assert!(!state.is_pressed(4));
        assert!(!state.is_pressed(6));
        assert_eq!(state.pressed_count(), 3);
    }
}
