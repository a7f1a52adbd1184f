//! Logging-based progress handler

use super::{ProgressEvent, ProgressHandler};
use tracing::{debug, error, info, warn};

/// Handler that logs progress events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started { total, dry_run } => {
                info!(specs = total, dry_run, "Starting variant generation");
            }
            ProgressEvent::SpecStarted {
                id,
                name,
                index,
                total,
            } => {
                debug!(
                    id,
                    name = %name,
                    progress = format!("{}/{}", index, total),
                    "Generating variant"
                );
            }
            ProgressEvent::AnchorWarning { id, message } => {
                warn!(id, "{}", message);
            }
            ProgressEvent::SpecGenerated {
                id,
                name,
                component,
            } => {
                info!(id, name = %name, component = %component.display(), "Variant generated");
            }
            ProgressEvent::SpecFailed { id, error } => {
                warn!(id, error = %error, "Variant skipped");
            }
            ProgressEvent::AggregationPatched { path, added } => {
                info!(path = %path.display(), added, "Aggregation file updated");
            }
            ProgressEvent::AggregationUnchanged { path } => {
                debug!(path = %path.display(), "Aggregation file already up to date");
            }
            ProgressEvent::AggregationFailed { path, error } => {
                error!(
                    path = %path.display(),
                    error = %error,
                    "Aggregation file not patched; generated variants will not be loaded"
                );
            }
            ProgressEvent::Completed {
                succeeded,
                failed,
                total_time,
            } => {
                if *failed > 0 {
                    warn!(
                        succeeded,
                        failed,
                        total_time_ms = total_time.as_millis() as u64,
                        "Generation finished with failures"
                    );
                } else {
                    info!(
                        succeeded,
                        total_time_ms = total_time.as_millis() as u64,
                        "Generation complete"
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn test_logging_all_events() {
        let handler = LoggingHandler;

        let events = vec![
            ProgressEvent::Started {
                total: 2,
                dry_run: true,
            },
            ProgressEvent::SpecStarted {
                id: 101,
                name: "Galaxy Map".to_string(),
                index: 1,
                total: 2,
            },
            ProgressEvent::AnchorWarning {
                id: 101,
                message: "title marker not found".to_string(),
            },
            ProgressEvent::SpecGenerated {
                id: 101,
                name: "Galaxy Map".to_string(),
                component: PathBuf::from("views/generated/variant_101/component.rs"),
            },
            ProgressEvent::SpecFailed {
                id: 102,
                error: "base missing".to_string(),
            },
            ProgressEvent::AggregationPatched {
                path: PathBuf::from("views/generated/mod.rs"),
                added: 1,
            },
            ProgressEvent::AggregationUnchanged {
                path: PathBuf::from("views/generated/mod.rs"),
            },
            ProgressEvent::AggregationFailed {
                path: PathBuf::from("views/generated/mod.rs"),
                error: "marker missing".to_string(),
            },
            ProgressEvent::Completed {
                succeeded: 1,
                failed: 1,
                total_time: Duration::from_millis(12),
            },
        ];

        for event in events {
            handler.on_progress(&event);
        }
    }
}
