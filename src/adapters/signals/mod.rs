//! Signal adapters - Notifier and Navigator implementations.

mod recording;
mod tracing_signals;

pub use recording::{RecordingNavigator, RecordingNotifier};
pub use tracing_signals::{TracingNavigator, TracingNotifier};
