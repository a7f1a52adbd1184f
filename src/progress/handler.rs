//! Progress handler trait and events

use std::path::PathBuf;
use std::time::Duration;

/// Events emitted while a generator run works through its specs
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Run started
    Started { total: usize, dry_run: bool },

    /// A spec is about to be processed
    SpecStarted {
        id: u32,
        name: String,
        index: usize,
        total: usize,
    },

    /// An anchor in the base component was missing or ambiguous
    AnchorWarning { id: u32, message: String },

    /// Component and registration stub were produced
    SpecGenerated {
        id: u32,
        name: String,
        component: PathBuf,
    },

    /// The spec was skipped
    SpecFailed { id: u32, error: String },

    /// New entries were added to the aggregation file
    AggregationPatched { path: PathBuf, added: usize },

    /// Every generated variant was already listed
    AggregationUnchanged { path: PathBuf },

    /// The aggregation file could not be read, parsed or written
    AggregationFailed { path: PathBuf, error: String },

    /// Run finished
    Completed {
        succeeded: usize,
        failed: usize,
        total_time: Duration,
    },
}

/// Trait for handling progress events during generation
pub trait ProgressHandler: Send + Sync {
    /// Called when a progress event occurs
    fn on_progress(&self, event: &ProgressEvent);
}

/// No-op handler that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl ProgressHandler for NoOpHandler {
    fn on_progress(&self, _event: &ProgressEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingHandler {
        count: Arc<AtomicUsize>,
    }

    impl ProgressHandler for CountingHandler {
        fn on_progress(&self, _event: &ProgressEvent) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpHandler;
        handler.on_progress(&ProgressEvent::Started {
            total: 3,
            dry_run: false,
        });
    }

    #[test]
    fn test_progress_events() {
        let count = Arc::new(AtomicUsize::new(0));
        let handler = CountingHandler {
            count: count.clone(),
        };

        handler.on_progress(&ProgressEvent::Started {
            total: 1,
            dry_run: false,
        });
        handler.on_progress(&ProgressEvent::SpecFailed {
            id: 101,
            error: "base missing".to_string(),
        });
        handler.on_progress(&ProgressEvent::Completed {
            succeeded: 0,
            failed: 1,
            total_time: Duration::from_millis(4),
        });

        assert_eq!(count.load(Ordering::SeqCst), 3);
    }
}
