//! The event core: shared state plus the collaborators the handlers drive.
//!
//! Provides [`EventCore`], which bundles the [`EventState`], the
//! [`CoreConfig`] and the board collaborators so each interrupt entry point is a
//! single method call.

use crate::buttons::apply_button;
use crate::config::CoreConfig;
use crate::handler::{ButtonHandler, SwitchHandler};
use crate::io::{CounterDisplay, OutputLines};
use crate::report::Reporter;
use crate::state::EventState;
use crate::switches::{SwitchState, accept_switches};
use crate::tick::service_tick;

/// Owns the shared state and the output collaborators.
///
/// Handlers run to completion and never block. Wrap the core in a
/// `critical_section::Mutex<RefCell<_>>` when it is reached from more than one
/// interrupt.
///
/// # Type Parameters
/// * `O` - Output line implementation
/// * `D` - Counter display implementation
/// * `R` - Report sink implementation
pub struct EventCore<O: OutputLines, D: CounterDisplay, R: Reporter> {
    state: EventState,
    config: CoreConfig,
    outputs: O,
    display: D,
    reporter: R,
}

impl<O: OutputLines, D: CounterDisplay, R: Reporter> EventCore<O, D, R> {
    /// Creates a core in the power-on state.
    pub fn new(config: CoreConfig, outputs: O, display: D, reporter: R) -> Self {
        Self::with_state(EventState::new(), config, outputs, display, reporter)
    }

    /// Creates a core starting from `state`.
    pub fn with_state(
        state: EventState,
        config: CoreConfig,
        outputs: O,
        display: D,
        reporter: R,
    ) -> Self {
        Self {
            state,
            config,
            outputs,
            display,
            reporter,
        }
    }

    /// Tick interrupt entry point.
    #[inline]
    pub fn on_tick(&mut self) {
        service_tick(&mut self.state, &self.config, &mut self.outputs);
    }

    /// Debounce gate for a decoded switch event. Returns whether it was accepted.
    pub fn on_switch_event(&mut self, switches: SwitchState) -> bool {
        accept_switches(
            &mut self.state,
            &self.config,
            &mut self.outputs,
            &mut self.reporter,
            switches,
        )
    }

    /// Button state machine for one raw code.
    pub fn on_button(&mut self, code: u8) {
        apply_button(&mut self.state, &mut self.display, &mut self.reporter, code);
    }

    /// Current shared state.
    pub fn state(&self) -> &EventState {
        &self.state
    }

    /// Mutable access to the shared state.
    pub fn state_mut(&mut self) -> &mut EventState {
        &mut self.state
    }

    /// Active configuration.
    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Output lines.
    pub fn outputs(&self) -> &O {
        &self.outputs
    }

    /// Mutable output lines, for the idle loop's own toggling.
    pub fn outputs_mut(&mut self) -> &mut O {
        &mut self.outputs
    }

    /// Counter display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Report sink.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Mutable report sink, e.g. to drain a [`ReportQueue`](crate::report::ReportQueue).
    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }
}

impl<O: OutputLines, D: CounterDisplay, R: Reporter> SwitchHandler for EventCore<O, D, R> {
    fn on_switches(&mut self, switches: SwitchState) {
        self.on_switch_event(switches);
    }
}

impl<O: OutputLines, D: CounterDisplay, R: Reporter> ButtonHandler for EventCore<O, D, R> {
    fn on_buttons(&mut self, code: u8) {
        self.on_button(code);
    }
}
