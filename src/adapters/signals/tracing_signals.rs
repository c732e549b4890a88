//! Notifier and navigator that write to the tracing pipeline.
//!
//! Used by the CLI, where there is no UI to show a toast or switch views.

use crate::domain::presentation::Route;
use crate::ports::{Navigator, Notice, NoticeLevel, Notifier};

/// Emits each notice as a log event at a matching level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => tracing::info!(notice = %notice.message, "Notice"),
            NoticeLevel::Warning => tracing::warn!(notice = %notice.message, "Notice"),
            NoticeLevel::Error => tracing::error!(notice = %notice.message, "Notice"),
        }
    }
}

/// Logs navigation requests instead of acting on them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!(path = %route.path(), "Navigation requested");
    }
}
