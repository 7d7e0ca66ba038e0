//! Callback traits registered with the edge sources.
//!
//! Each edge source owns one handler. To let a single [`EventCore`] serve both
//! banks, register a shared reference: `&RefCell<EventCore<..>>` on the host,
//! or `&'static critical_section::Mutex<RefCell<EventCore<..>>>` on a target
//! where the tick interrupt also needs the core.
//!
//! [`EventCore`]: crate::events::EventCore

use crate::switches::SwitchState;
use core::cell::RefCell;
use critical_section::Mutex;

/// Receives decoded switch events.
pub trait SwitchHandler {
    /// Called on every switch edge with the decoded switch state.
    fn on_switches(&mut self, switches: SwitchState);
}

/// Receives button codes.
pub trait ButtonHandler {
    /// Called on every button edge with the masked button lines.
    fn on_buttons(&mut self, code: u8);
}

impl<T: SwitchHandler> SwitchHandler for &RefCell<T> {
    fn on_switches(&mut self, switches: SwitchState) {
        self.borrow_mut().on_switches(switches);
    }
}

impl<T: ButtonHandler> ButtonHandler for &RefCell<T> {
    fn on_buttons(&mut self, code: u8) {
        self.borrow_mut().on_buttons(code);
    }
}

impl<T: SwitchHandler> SwitchHandler for &Mutex<RefCell<T>> {
    fn on_switches(&mut self, switches: SwitchState) {
        critical_section::with(|cs| self.borrow_ref_mut(cs).on_switches(switches));
    }
}

impl<T: ButtonHandler> ButtonHandler for &Mutex<RefCell<T>> {
    fn on_buttons(&mut self, code: u8) {
        critical_section::with(|cs| self.borrow_ref_mut(cs).on_buttons(code));
    }
}
