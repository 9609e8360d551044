//! Observer modules: fan-out order, gating, and event contents.

mod common;

use common::{RecordingModule, test_registry};
use nslog::{LogEvent, LogModule, LoggerOptions};
use std::sync::{Arc, Mutex};

#[test]
fn modules_see_the_final_argument_list_exactly_once() {
    let (registry, sink) = test_registry();
    let module = RecordingModule::new("recorder");
    let events = module.events();
    registry.add_module(Arc::new(module));

    let logger = registry
        .get_logger("svc", LoggerOptions::default())
        .unwrap();
    logger.warn(["careful"]);

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].namespace, "svc");
    assert_eq!(events[0].args, sink.lines()[0]);
}

#[test]
fn modules_are_notified_in_registration_order() {
    struct OrderProbe {
        name: &'static str,
        order: Arc<Mutex<Vec<&'static str>>>,
    }

    impl LogModule for OrderProbe {
        fn name(&self) -> &str {
            self.name
        }

        fn on_log(&self, _event: &LogEvent) {
            self.order.lock().unwrap().push(self.name);
        }
    }

    let (registry, _sink) = test_registry();
    let order: Arc<Mutex<Vec<&'static str>>> = Arc::default();
    registry.add_module(Arc::new(OrderProbe {
        name: "first",
        order: Arc::clone(&order),
    }));
    registry.add_module(Arc::new(OrderProbe {
        name: "second",
        order: Arc::clone(&order),
    }));

    registry
        .get_logger("svc", LoggerOptions::default())
        .unwrap()
        .log(["event"]);

    assert_eq!(order.lock().unwrap().as_slice(), ["first", "second"]);
}

#[test]
fn gated_calls_never_reach_modules() {
    let (registry, _sink) = test_registry();
    let module = RecordingModule::new("recorder");
    let events = module.events();
    registry.add_module(Arc::new(module));

    let logger = registry
        .get_logger(
            "svc",
            LoggerOptions {
                enabled: false,
                ..LoggerOptions::default()
            },
        )
        .unwrap();
    logger.log(["dropped"]);
    assert!(events.lock().unwrap().is_empty());

    // Errors pass gating by default and do reach modules.
    logger.error(["kept"]);
    assert_eq!(events.lock().unwrap().len(), 1);
}

#[test]
fn anonymous_events_carry_an_empty_namespace() {
    // Anonymous dispatch only exists on the free-function surface, which is
    // bound to the process-wide registry. This binary runs no other global
    // test, so swapping the global sink here is safe.
    let module = RecordingModule::new("recorder");
    let events = module.events();
    nslog::add_log_module(module);
    nslog::set_log_output(|_args: &[String]| {});

    nslog::log("no-such-namespace", ["payload"]);

    let events = events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].namespace, "");
    assert_eq!(events[0].args, ["no-such-namespace", "payload"]);
}
