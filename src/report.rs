//! Textual event reports and the sinks that emit them.

use crate::switches::SwitchState;
use heapless::Deque;

/// An observable event produced by the switch or button handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Report {
    /// A switch event passed the debounce window.
    SwitchAccepted(SwitchState),

    /// A button event was handled (including unknown codes).
    Button {
        /// Raw button code as read from the port.
        code: u8,
        /// Button counter after the event.
        counter: u8,
    },
}

impl core::fmt::Display for Report {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Report::SwitchAccepted(state) => {
                write!(f, "Switch State: 0x{:02X}", state)
            }
            Report::Button { code, counter } => {
                write!(f, "Button State: 0x{:02X}\nButton Counter: {}", code, counter)
            }
        }
    }
}

/// Trait for abstracting the observability output.
///
/// Called from interrupt context; implementations must not block and cannot
/// fail.
pub trait Reporter {
    /// Emits one report.
    fn report(&mut self, report: Report);
}

/// Writes each report as text followed by a newline.
///
/// Suitable for a UART that implements [`core::fmt::Write`]. Write failures are
/// counted and otherwise ignored.
#[derive(Debug)]
pub struct FmtReporter<W: core::fmt::Write> {
    writer: W,
    write_errors: u32,
}

impl<W: core::fmt::Write> FmtReporter<W> {
    /// Wraps `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            write_errors: 0,
        }
    }

    /// Returns the underlying writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Number of reports that failed to write.
    pub fn write_errors(&self) -> u32 {
        self.write_errors
    }

    /// Consumes the reporter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: core::fmt::Write> Reporter for FmtReporter<W> {
    fn report(&mut self, report: Report) {
        if writeln!(self.writer, "{}", report).is_err() {
            self.write_errors = self.write_errors.saturating_add(1);
        }
    }
}

/// Bounded report buffer that defers text output out of interrupt context.
///
/// Handlers push reports; the idle loop drains them into a slow sink such as
/// [`FmtReporter`]. When full, the incoming report is dropped and counted.
#[derive(Debug)]
pub struct ReportQueue<const N: usize> {
    queue: Deque<Report, N>,
    dropped: u32,
}

impl<const N: usize> ReportQueue<N> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            queue: Deque::new(),
            dropped: 0,
        }
    }

    /// Removes the oldest report.
    pub fn pop(&mut self) -> Option<Report> {
        self.queue.pop_front()
    }

    /// Forwards every queued report to `sink`, oldest first.
    ///
    /// Returns the number of reports forwarded.
    pub fn drain_into<R: Reporter>(&mut self, sink: &mut R) -> usize {
        let mut forwarded = 0;
        while let Some(report) = self.queue.pop_front() {
            sink.report(report);
            forwarded += 1;
        }
        forwarded
    }

    /// Number of reports waiting.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if no reports are waiting.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Reports discarded because the queue was full.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}

impl<const N: usize> Default for ReportQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Reporter for ReportQueue<N> {
    fn report(&mut self, report: Report) {
        if self.queue.push_back(report).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            warn!("report queue full, {=u32} dropped", self.dropped);
        }
    }
}
