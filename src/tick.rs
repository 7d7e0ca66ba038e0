//! Periodic tick handler: debounce clock and the two toggle counters.

use crate::config::CoreConfig;
use crate::io::{OutputLine, OutputLines, TickTimer};
use crate::state::EventState;

/// Starts `timer` with the configured period and priority.
///
/// Call once at startup, before enabling interrupts globally.
pub fn init_tick<T: TickTimer>(timer: &mut T, config: &CoreConfig) {
    timer.start(config.tick_period_cycles(), config.tick_priority());
}

/// Services one tick.
///
/// The debounce counter advances on every call. While ticking is enabled the
/// fast and slow counters each advance and invert their line on rollover; the
/// two checks are independent. While disabled both counters are zeroed and
/// both lines are forced inactive on every call.
pub fn service_tick<O: OutputLines>(state: &mut EventState, config: &CoreConfig, outputs: &mut O) {
    state.debounce_counter = state.debounce_counter.wrapping_add(1);

    if state.tick_enable {
        state.toggle_counter_fast = state.toggle_counter_fast.wrapping_add(1);
        if state.toggle_counter_fast >= config.fast_toggle_ticks() {
            state.toggle_counter_fast = 0;
            outputs.toggle_line(OutputLine::FastBlink);
        }

        state.toggle_counter_slow = state.toggle_counter_slow.wrapping_add(1);
        if state.toggle_counter_slow >= config.slow_toggle_ticks() {
            state.toggle_counter_slow = 0;
            outputs.toggle_line(OutputLine::SlowBlink);
        }
    } else {
        state.toggle_counter_fast = 0;
        state.toggle_counter_slow = 0;
        outputs.set_line(OutputLine::FastBlink, false);
        outputs.set_line(OutputLine::SlowBlink, false);
    }
}
