//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use nslog::{Clock, LogEvent, LogModule, LogSettings, LogSink, LoggerRegistry};

/// Sink that records every argument list it receives.
#[derive(Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<Vec<String>>>,
}

impl CaptureSink {
    pub fn lines(&self) -> Vec<Vec<String>> {
        self.lines.lock().unwrap().clone()
    }

    /// Each recorded event as a single space-joined line.
    pub fn joined(&self) -> Vec<String> {
        self.lines().iter().map(|args| args.join(" ")).collect()
    }

    pub fn clear(&self) {
        self.lines.lock().unwrap().clear();
    }
}

impl LogSink for CaptureSink {
    fn write(&self, args: &[String]) {
        self.lines.lock().unwrap().push(args.to_vec());
    }
}

/// Observer module that records every event it is notified of.
pub struct RecordingModule {
    name: String,
    events: Arc<Mutex<Vec<LogEvent>>>,
}

impl RecordingModule {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            events: Arc::default(),
        }
    }

    /// Handle to the event list, kept valid after the module is registered.
    pub fn events(&self) -> Arc<Mutex<Vec<LogEvent>>> {
        Arc::clone(&self.events)
    }
}

impl LogModule for RecordingModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_log(&self, event: &LogEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Manually advanced time source for deterministic elapsed markers.
pub struct ManualClock {
    origin: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.offset.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + *self.offset.lock().unwrap()
    }
}

/// Fresh registry with colors disabled and a capture sink installed.
pub fn test_registry() -> (Arc<LoggerRegistry>, Arc<CaptureSink>) {
    test_registry_with(LogSettings {
        colors_enabled: false,
        ..LogSettings::default()
    })
}

pub fn test_registry_with(settings: LogSettings) -> (Arc<LoggerRegistry>, Arc<CaptureSink>) {
    let registry = LoggerRegistry::new(settings);
    let sink = Arc::new(CaptureSink::default());
    registry.set_sink(sink.clone());
    (registry, sink)
}
