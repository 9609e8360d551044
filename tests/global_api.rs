//! The process-wide free-function surface.
//!
//! Everything here shares the one global registry, so the whole flow lives
//! in a single test function to keep ordering deterministic.

mod common;

use common::CaptureSink;
use nslog::{LogError, LogSink, LoggerOptions, PerformanceLoggerOptions, log_args};
use std::sync::Arc;

#[test]
fn global_surface_end_to_end() {
    let sink = Arc::new(CaptureSink::default());
    let capture = Arc::clone(&sink);
    nslog::set_log_output(move |args: &[String]| capture.write(args));

    // Registered namespace: tagged dispatch through the same instance.
    let logger = nslog::get_logger("svc", LoggerOptions::default()).unwrap();
    let again = nslog::get_logger("svc", LoggerOptions::default()).unwrap();
    assert!(logger.ptr_eq(&again));

    nslog::log("svc", log_args!["processed", 42, "records"]);
    assert!(sink.joined().last().unwrap().ends_with("processed 42 records"));

    // Unregistered first argument becomes payload of an anonymous call.
    sink.clear();
    nslog::log("loose", ["text"]);
    assert_eq!(sink.lines(), [vec![String::from("loose"), String::from("text")]]);

    // Severity free functions carry their markers.
    sink.clear();
    nslog::warn("standalone warning", Vec::<String>::new());
    nslog::error("svc", ["broke"]);
    let joined = sink.joined();
    assert_eq!(joined[0], "⚠️ Warning: standalone warning");
    assert!(joined[1].contains("🛑 Error!"));
    assert!(joined[1].ends_with("broke"));

    // Log-all mode overrides the disabled flag, then restores on exit.
    sink.clear();
    logger.set_enabled(false);
    nslog::log("svc", ["dropped"]);
    nslog::set_log_all_mode(true, Some(&["svc"]));
    nslog::log("svc", ["forced"]);
    nslog::set_log_all_mode(false, None);
    nslog::log("svc", ["dropped again"]);
    logger.set_enabled(true);
    assert_eq!(sink.joined().len(), 1);
    assert!(sink.joined()[0].ends_with("forced"));

    // Factories stay kind-strict through the free functions.
    let perf = nslog::get_performance_logger("perf", PerformanceLoggerOptions::default()).unwrap();
    assert!(matches!(
        nslog::get_logger("perf", LoggerOptions::default()),
        Err(LogError::KindMismatch { .. })
    ));

    // The aggregate count report covers every performance logger.
    perf.incr("tick");
    perf.incr("tick");
    sink.clear();
    nslog::print_log_counts();
    let report = sink.joined().join("\n");
    assert!(report.contains("Log call counts:"));
    assert!(report.contains("2:\ttick"));
}
