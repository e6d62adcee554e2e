//! In-memory event capture for logging assertions in tests

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

type EventLog = Arc<Mutex<Vec<CapturedEvent>>>;

/// One recorded event: its level and every field rendered as text
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn op(&self) -> Option<&str> {
        self.field("op")
    }

    pub fn event(&self) -> Option<&str> {
        self.field("event")
    }
}

struct TextFields<'a>(&'a mut BTreeMap<String, String>);

impl Visit for TextFields<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}

struct CaptureLayer(EventLog);

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = BTreeMap::new();
        event.record(&mut TextFields(&mut fields));
        let captured = CapturedEvent {
            level: *event.metadata().level(),
            fields,
        };
        if let Ok(mut log) = self.0.lock() {
            log.push(captured);
        }
    }
}

/// Shared handle onto every event captured in this process
#[derive(Clone)]
pub struct TestCapture(EventLog);

impl TestCapture {
    fn snapshot(&self) -> Vec<CapturedEvent> {
        self.0.lock().map(|log| log.clone()).unwrap_or_default()
    }

    /// Events whose `op` field equals `op`, in emission order
    pub fn events_for_op(&self, op: &str) -> Vec<CapturedEvent> {
        self.snapshot()
            .into_iter()
            .filter(|e| e.op() == Some(op))
            .collect()
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.snapshot().iter().filter(|e| predicate(e)).count()
    }

    /// # Panics
    ///
    /// Panics when no event carries both `op` and `event`.
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let found = self.events_for_op(op).iter().any(|e| e.event() == Some(event));
        assert!(found, "no captured event op={} event={}", op, event);
    }
}

static CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capturing subscriber once and return the shared handle
///
/// Every test sees the same log, so assertions should key on a unique op
/// name or field value.
///
/// ```
/// use fitlog_core::logging_facility::test_capture::init_test_capture;
/// use fitlog_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_example_op");
/// capture.assert_event_exists("doc_example_op", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    CAPTURE
        .get_or_init(|| {
            let log = EventLog::default();
            tracing_subscriber::registry()
                .with(CaptureLayer(log.clone()))
                .try_init()
                .ok();
            TestCapture(log)
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_and_event_read_from_fields() {
        let fields = BTreeMap::from([
            ("op".to_string(), "add_goal".to_string()),
            ("event".to_string(), "end".to_string()),
        ]);
        let captured = CapturedEvent {
            level: Level::INFO,
            fields,
        };

        assert_eq!(captured.op(), Some("add_goal"));
        assert_eq!(captured.event(), Some("end"));
        assert_eq!(captured.field("collection"), None);
    }
}
