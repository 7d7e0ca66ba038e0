//! Integration tests for report sinks

mod common;
use common::*;

use core::fmt::Write;
use irq_events::{FmtReporter, Report, ReportQueue, Reporter, SwitchState};

#[test]
fn fmt_reporter_writes_one_line_per_report() {
    let mut reporter = FmtReporter::new(heapless::String::<128>::new());

    reporter.report(Report::SwitchAccepted(SwitchState::from_active(0xE0)));
    reporter.report(Report::Button {
        code: 0x01,
        counter: 7,
    });

    assert_eq!(
        reporter.writer().as_str(),
        "Switch State: 0x38\nButton State: 0x01\nButton Counter: 7\n"
    );
    assert_eq!(reporter.write_errors(), 0);
}

#[test]
fn fmt_reporter_counts_failed_writes() {
    let mut reporter = FmtReporter::new(heapless::String::<8>::new());

    reporter.report(Report::Button {
        code: 0x02,
        counter: 1,
    });

    assert_eq!(reporter.write_errors(), 1);
}

#[test]
fn queue_preserves_order_when_drained() {
    let mut queue = ReportQueue::<4>::new();
    queue.report(Report::Button { code: 1, counter: 1 });
    queue.report(Report::Button { code: 2, counter: 0 });
    let mut sink = RecordingReporter::new();

    assert_eq!(queue.drain_into(&mut sink), 2);

    assert!(queue.is_empty());
    assert_eq!(
        sink.reports(),
        &[
            Report::Button { code: 1, counter: 1 },
            Report::Button { code: 2, counter: 0 },
        ]
    );
}

#[test]
fn full_queue_drops_newest_and_counts() {
    let mut queue = ReportQueue::<2>::new();
    for counter in 0..5 {
        queue.report(Report::Button { code: 1, counter });
    }

    assert_eq!(queue.len(), 2);
    assert_eq!(queue.dropped(), 3);
    assert_eq!(queue.pop(), Some(Report::Button { code: 1, counter: 0 }));
    assert_eq!(queue.pop(), Some(Report::Button { code: 1, counter: 1 }));
    assert_eq!(queue.pop(), None);
}

#[test]
fn queue_defers_core_reports_to_idle_loop_writer() {
    let mut core = irq_events::EventCore::new(
        small_config(),
        irq_events::OutputBits::new(),
        RecordingDisplay::new(),
        ReportQueue::<8>::new(),
    );
    core.on_button(0x01);
    core.on_button(0x03);

    let mut uart = FmtReporter::new(heapless::String::<128>::new());
    core.reporter_mut().drain_into(&mut uart);

    let mut expected = heapless::String::<128>::new();
    write!(
        expected,
        "Button State: 0x01\nButton Counter: 1\nButton State: 0x03\nButton Counter: 1\n"
    )
    .unwrap();
    assert_eq!(uart.writer().as_str(), expected.as_str());
    assert!(core.reporter().is_empty());
}
