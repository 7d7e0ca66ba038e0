//! Button bank and the button-code state machine.

use crate::config::{BUTTON_PORT_MASK, SENTINEL_CODE};
use crate::handler::ButtonHandler;
use crate::io::{CounterDisplay, EdgePort};
use crate::report::{Report, Reporter};
use crate::state::EventState;

/// Decoded button code. Exactly one button bit set selects an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonCode {
    /// `0x01`: count up.
    Increment,
    /// `0x02`: count down.
    Decrement,
    /// `0x04`: zero the counter and stop ticking.
    Reset,
    /// `0x08`: show the sentinel and toggle ticking.
    Sentinel,
    /// Any other value, including no button and several buttons at once.
    Other(u8),
}

impl ButtonCode {
    /// Raw code as read from the port.
    pub const fn raw(self) -> u8 {
        match self {
            ButtonCode::Increment => 0x01,
            ButtonCode::Decrement => 0x02,
            ButtonCode::Reset => 0x04,
            ButtonCode::Sentinel => 0x08,
            ButtonCode::Other(raw) => raw,
        }
    }
}

impl From<u8> for ButtonCode {
    fn from(raw: u8) -> Self {
        match raw {
            0x01 => ButtonCode::Increment,
            0x02 => ButtonCode::Decrement,
            0x04 => ButtonCode::Reset,
            0x08 => ButtonCode::Sentinel,
            other => ButtonCode::Other(other),
        }
    }
}

/// Runs the button state machine for one event.
///
/// | Code | Counter | Ticking | Display |
/// |------|---------|---------|---------|
/// | `0x01` | +1, wrapping | unchanged | refreshed |
/// | `0x02` | -1, wrapping | unchanged | refreshed |
/// | `0x04` | 0 | disabled | refreshed |
/// | `0x08` | [`SENTINEL_CODE`] | toggled | refreshed |
/// | other | unchanged | unchanged | untouched |
///
/// Every call ends with exactly one [`Report::Button`], unknown codes included.
pub fn apply_button<D: CounterDisplay, R: Reporter>(
    state: &mut EventState,
    display: &mut D,
    reporter: &mut R,
    code: u8,
) {
    match ButtonCode::from(code) {
        ButtonCode::Increment => {
            state.button_counter = state.button_counter.wrapping_add(1);
            display.show(state.button_counter);
        }
        ButtonCode::Decrement => {
            state.button_counter = state.button_counter.wrapping_sub(1);
            display.show(state.button_counter);
        }
        ButtonCode::Reset => {
            state.tick_enable = false;
            state.button_counter = 0;
            debug!("ticking disabled by reset");
            display.show(state.button_counter);
        }
        ButtonCode::Sentinel => {
            state.tick_enable = !state.tick_enable;
            state.button_counter = SENTINEL_CODE;
            debug!("ticking toggled, now {=bool}", state.tick_enable);
            display.show(state.button_counter);
        }
        ButtonCode::Other(_) => {
            debug!("ignoring button code {=u8:#x}", code);
        }
    }

    reporter.report(Report::Button {
        code,
        counter: state.button_counter,
    });
}

/// Falling-edge source for the button bank.
///
/// Same ownership rules as [`SwitchBank`](crate::switches::SwitchBank): the
/// handler is fixed at [`init`](Self::init).
pub struct ButtonBank<P: EdgePort, H: ButtonHandler> {
    port: P,
    handler: H,
}

impl<P: EdgePort, H: ButtonHandler> ButtonBank<P, H> {
    /// Registers `handler`, clears stale flags and enables the interrupt.
    pub fn init(mut port: P, handler: H, priority: u8) -> Self {
        port.clear_pending(BUTTON_PORT_MASK);
        port.enable(priority);
        Self { port, handler }
    }

    /// Interrupt entry point: clear, read the button lines, dispatch.
    pub fn on_interrupt(&mut self) {
        self.port.clear_pending(BUTTON_PORT_MASK);
        let code = self.port.read() & BUTTON_PORT_MASK;
        self.handler.on_buttons(code);
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
    fn single_bit_codes_decode_to_actions() {
        assert_eq!(ButtonCode::from(0x01), ButtonCode::Increment);
        assert_eq!(ButtonCode::from(0x02), ButtonCode::Decrement);
        assert_eq!(ButtonCode::from(0x04), ButtonCode::Reset);
        assert_eq!(ButtonCode::from(0x08), ButtonCode::Sentinel);
    }

    #[test]
    fn zero_and_multi_bit_codes_are_other() {
        assert_eq!(ButtonCode::from(0x00), ButtonCode::Other(0x00));
        assert_eq!(ButtonCode::from(0x03), ButtonCode::Other(0x03));
        assert_eq!(ButtonCode::from(0x0C), ButtonCode::Other(0x0C));
        assert_eq!(ButtonCode::from(0x10), ButtonCode::Other(0x10));
    }
}
