//! Shared test infrastructure for irq-events integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use irq_events::{
    CoreConfig, CounterDisplay, EdgePort, EventCore, OutputBits, Report, Reporter, TickTimer,
};

// ============================================================================
// Mock Port
// ============================================================================

/// Port operations in the order the edge source performed them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortOp {
    Enable(u8),
    Clear(u8),
    Read,
}

/// Mock edge port returning a fixed input level and recording every access
pub struct MockPort {
    level: u8,
    ops: heapless::Vec<PortOp, 64>,
}

impl MockPort {
    pub fn new(level: u8) -> Self {
        Self {
            level,
            ops: heapless::Vec::new(),
        }
    }

    pub fn set_level(&mut self, level: u8) {
        self.level = level;
    }

    pub fn ops(&self) -> &[PortOp] {
        &self.ops
    }
}

impl EdgePort for MockPort {
    fn enable(&mut self, priority: u8) {
        let _ = self.ops.push(PortOp::Enable(priority));
    }

    fn clear_pending(&mut self, mask: u8) {
        let _ = self.ops.push(PortOp::Clear(mask));
    }

    fn read(&mut self) -> u8 {
        let _ = self.ops.push(PortOp::Read);
        self.level
    }
}

// ============================================================================
// Mock Timer
// ============================================================================

/// Mock tick timer recording the start parameters
#[derive(Default)]
pub struct MockTimer {
    pub started: Option<(u32, u8)>,
}

impl TickTimer for MockTimer {
    fn start(&mut self, period_cycles: u32, priority: u8) {
        self.started = Some((period_cycles, priority));
    }
}

// ============================================================================
// Recording Collaborators
// ============================================================================

/// Counter display that records every refresh
pub struct RecordingDisplay {
    history: heapless::Vec<u8, 512>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self {
            history: heapless::Vec::new(),
        }
    }

    pub fn history(&self) -> &[u8] {
        &self.history
    }

    pub fn last(&self) -> Option<u8> {
        self.history.last().copied()
    }
}

impl CounterDisplay for RecordingDisplay {
    fn show(&mut self, value: u8) {
        let _ = self.history.push(value);
    }
}

/// Reporter that records every report
pub struct RecordingReporter {
    reports: heapless::Vec<Report, 512>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self {
            reports: heapless::Vec::new(),
        }
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, report: Report) {
        let _ = self.reports.push(report);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type TestCore = EventCore<OutputBits, RecordingDisplay, RecordingReporter>;

/// Core with the given config and power-on state
pub fn core_with(config: CoreConfig) -> TestCore {
    EventCore::new(
        config,
        OutputBits::new(),
        RecordingDisplay::new(),
        RecordingReporter::new(),
    )
}

/// Core with small thresholds that keep tick loops short
pub fn small_core() -> TestCore {
    core_with(small_config())
}

/// Fast 3 ticks, slow 7 ticks, debounce 5 ticks
pub fn small_config() -> CoreConfig {
    CoreConfig::builder()
        .toggle_ticks(3, 7)
        .debounce_ticks(5)
        .build()
        .unwrap()
}

pub fn tick_n(core: &mut TestCore, n: u32) {
    for _ in 0..n {
        core.on_tick();
    }
}
