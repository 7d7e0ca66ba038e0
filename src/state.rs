//! Shared scalars mutated by the interrupt handlers.

use crate::switches::SwitchState;

/// All state shared between the tick, switch and button handlers.
///
/// Every field lives for the whole program. Each field has a single writer
/// except `debounce_counter`, which the tick handler increments and the switch
/// handler resets on acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EventState {
    /// Gates the toggle counters of the tick handler.
    pub tick_enable: bool,

    /// Ticks since the fast line last inverted, in `[0, fast_toggle_ticks)`.
    pub toggle_counter_fast: u32,

    /// Ticks since the slow line last inverted, in `[0, slow_toggle_ticks)`.
    pub toggle_counter_slow: u32,

    /// Free-running tick count since the last accepted switch event.
    ///
    /// Wraps on overflow. Only compared against the debounce threshold, so a
    /// wrap that coincides with a real edge discards that edge.
    pub debounce_counter: u64,

    /// Switch state captured by the most recent accepted switch event.
    pub switch_state: SwitchState,

    /// Button counter, also the value shown on the counter display.
    pub button_counter: u8,
}

impl EventState {
    /// Power-on state: ticking disabled, all counters zero.
    pub const fn new() -> Self {
        Self {
            tick_enable: false,
            toggle_counter_fast: 0,
            toggle_counter_slow: 0,
            debounce_counter: 0,
            switch_state: SwitchState::NONE,
            button_counter: 0,
        }
    }
}
