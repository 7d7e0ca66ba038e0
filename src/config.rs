//! Timing and priority configuration for the event core.

/// Display code written when the sentinel button is pressed (alternating bits).
pub const SENTINEL_CODE: u8 = 0xAA;

/// Physical switch lines monitored on the switch port (bits 7-5, 3, 2 and 0).
pub const SWITCH_PORT_MASK: u8 = 0xED;

/// Button lines monitored on the button port (one bit per button).
pub const BUTTON_PORT_MASK: u8 = 0x0F;

/// Largest tick period accepted, bounded by the 24-bit SysTick reload register.
pub const MAX_TICK_PERIOD_CYCLES: u32 = 1 << 24;

/// Number of distinct interrupt priority levels (3 priority bits).
pub const PRIORITY_LEVELS: u8 = 8;

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick period of zero clock cycles.
    ZeroTickPeriod,

    /// Tick period does not fit the timer reload register.
    TickPeriodTooLong(u32),

    /// A toggle threshold of zero ticks.
    ZeroToggleThreshold,

    /// Priority outside the available levels.
    PriorityOutOfRange(u8),

    /// Tick and edge sources configured at the same priority.
    PriorityCollision(u8),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroTickPeriod => {
                write!(f, "tick period must be at least one clock cycle")
            }
            ConfigError::TickPeriodTooLong(cycles) => {
                write!(
                    f,
                    "tick period of {} cycles exceeds the {} cycle timer limit",
                    cycles, MAX_TICK_PERIOD_CYCLES
                )
            }
            ConfigError::ZeroToggleThreshold => {
                write!(f, "toggle thresholds must be at least one tick")
            }
            ConfigError::PriorityOutOfRange(priority) => {
                write!(
                    f,
                    "priority {} out of range (0-{})",
                    priority,
                    PRIORITY_LEVELS - 1
                )
            }
            ConfigError::PriorityCollision(priority) => {
                write!(
                    f,
                    "tick and edge interrupts both configured at priority {}",
                    priority
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Constants shared by the tick, switch and button handlers.
///
/// All thresholds are counted in ticks. Use [`CoreConfig::builder`] to
/// override individual values; [`CoreConfig::default`] matches a 48 MHz core
/// clock with a 1 ms tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CoreConfig {
    tick_period_cycles: u32,
    tick_priority: u8,
    edge_priority: u8,
    fast_toggle_ticks: u32,
    slow_toggle_ticks: u32,
    debounce_ticks: u64,
}

impl CoreConfig {
    /// Clock cycles per tick at 48 MHz with a 1 ms period.
    pub const DEFAULT_TICK_PERIOD_CYCLES: u32 = 48_000;
    /// Default priority of the tick interrupt.
    pub const DEFAULT_TICK_PRIORITY: u8 = 2;
    /// Default priority of both edge interrupts.
    pub const DEFAULT_EDGE_PRIORITY: u8 = 0;
    /// Ticks between inversions of the fast line.
    pub const DEFAULT_FAST_TOGGLE_TICKS: u32 = 1_000;
    /// Ticks between inversions of the slow line.
    pub const DEFAULT_SLOW_TOGGLE_TICKS: u32 = 2_000;
    /// Minimum ticks between two accepted switch events.
    pub const DEFAULT_DEBOUNCE_TICKS: u64 = 300;

    /// Creates a builder seeded with the default values.
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder {
            config: Self::default(),
        }
    }

    /// Tick period in clock cycles.
    #[inline]
    pub fn tick_period_cycles(&self) -> u32 {
        self.tick_period_cycles
    }

    /// Priority of the tick interrupt.
    #[inline]
    pub fn tick_priority(&self) -> u8 {
        self.tick_priority
    }

    /// Priority shared by the switch and button interrupts.
    #[inline]
    pub fn edge_priority(&self) -> u8 {
        self.edge_priority
    }

    /// Rollover threshold of the fast toggle counter.
    #[inline]
    pub fn fast_toggle_ticks(&self) -> u32 {
        self.fast_toggle_ticks
    }

    /// Rollover threshold of the slow toggle counter.
    #[inline]
    pub fn slow_toggle_ticks(&self) -> u32 {
        self.slow_toggle_ticks
    }

    /// Debounce window in ticks.
    #[inline]
    pub fn debounce_ticks(&self) -> u64 {
        self.debounce_ticks
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_period_cycles == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if self.tick_period_cycles > MAX_TICK_PERIOD_CYCLES {
            return Err(ConfigError::TickPeriodTooLong(self.tick_period_cycles));
        }
        if self.fast_toggle_ticks == 0 || self.slow_toggle_ticks == 0 {
            return Err(ConfigError::ZeroToggleThreshold);
        }
        for priority in [self.tick_priority, self.edge_priority] {
            if priority >= PRIORITY_LEVELS {
                return Err(ConfigError::PriorityOutOfRange(priority));
            }
        }
        if self.tick_priority == self.edge_priority {
            return Err(ConfigError::PriorityCollision(self.tick_priority));
        }
        Ok(())
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            tick_period_cycles: Self::DEFAULT_TICK_PERIOD_CYCLES,
            tick_priority: Self::DEFAULT_TICK_PRIORITY,
            edge_priority: Self::DEFAULT_EDGE_PRIORITY,
            fast_toggle_ticks: Self::DEFAULT_FAST_TOGGLE_TICKS,
            slow_toggle_ticks: Self::DEFAULT_SLOW_TOGGLE_TICKS,
            debounce_ticks: Self::DEFAULT_DEBOUNCE_TICKS,
        }
    }
}

/// Builder for [`CoreConfig`]. Validation happens in [`build`](Self::build).
#[derive(Debug, Clone, Copy)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl CoreConfigBuilder {
    /// Sets the tick period in clock cycles.
    pub fn tick_period_cycles(mut self, cycles: u32) -> Self {
        self.config.tick_period_cycles = cycles;
        self
    }

    /// Sets the tick and edge interrupt priorities (lower value wins).
    pub fn priorities(mut self, tick: u8, edge: u8) -> Self {
        self.config.tick_priority = tick;
        self.config.edge_priority = edge;
        self
    }

    /// Sets the fast and slow toggle thresholds.
    pub fn toggle_ticks(mut self, fast: u32, slow: u32) -> Self {
        self.config.fast_toggle_ticks = fast;
        self.config.slow_toggle_ticks = slow;
        self
    }

    /// Sets the debounce window. Zero accepts every edge.
    pub fn debounce_ticks(mut self, ticks: u64) -> Self {
        self.config.debounce_ticks = ticks;
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> Result<CoreConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
