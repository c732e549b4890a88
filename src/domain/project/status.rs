//! Project status codes and their display resolution.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Label used when a status code is blank.
pub const UNKNOWN_STATUS_LABEL: &str = "Unknown";

/// Internal project lifecycle marker.
///
/// The four named codes are the fixed system vocabulary. Codes introduced
/// elsewhere are kept verbatim in `Other` instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    Completed,
    Overdue,
    Other(String),
}

impl ProjectStatus {
    /// All codes with a fixed display mapping.
    pub const KNOWN_CODES: [&'static str; 4] = ["planning", "in-progress", "completed", "overdue"];

    /// The internal code as stored.
    pub fn code(&self) -> &str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Overdue => "overdue",
            ProjectStatus::Other(code) => code,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ProjectStatus::Other(_))
    }

    /// Default display label. Unknown codes display verbatim.
    pub fn default_label(&self) -> &str {
        match self {
            ProjectStatus::Planning => "Pending",
            ProjectStatus::InProgress => "Running",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Overdue => "Overdue",
            ProjectStatus::Other(code) if code.trim().is_empty() => UNKNOWN_STATUS_LABEL,
            ProjectStatus::Other(code) => code,
        }
    }

    /// Styling tag the presentation layer pairs with the label.
    pub fn display_tag(&self) -> DisplayTag {
        match self {
            ProjectStatus::Planning => DisplayTag::Pending,
            ProjectStatus::InProgress => DisplayTag::Active,
            ProjectStatus::Completed => DisplayTag::Success,
            ProjectStatus::Overdue => DisplayTag::Danger,
            ProjectStatus::Other(_) => DisplayTag::Neutral,
        }
    }
}

impl From<&str> for ProjectStatus {
    fn from(code: &str) -> Self {
        match code {
            "planning" => ProjectStatus::Planning,
            "in-progress" => ProjectStatus::InProgress,
            "completed" => ProjectStatus::Completed,
            "overdue" => ProjectStatus::Overdue,
            other => ProjectStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(code: String) -> Self {
        match ProjectStatus::from(code.as_str()) {
            ProjectStatus::Other(_) => ProjectStatus::Other(code),
            known => known,
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Presentation styling class for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayTag {
    Active,
    Success,
    Pending,
    Danger,
    Neutral,
}

impl DisplayTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayTag::Active => "active",
            DisplayTag::Success => "success",
            DisplayTag::Pending => "pending",
            DisplayTag::Danger => "danger",
            DisplayTag::Neutral => "neutral",
        }
    }
}

/// A resolved status: the original code, its label and its tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDisplay {
    pub code: String,
    pub label: String,
    pub tag: DisplayTag,
}

/// Maps status codes to display labels and tags.
///
/// Label overrides (for localization) apply to known codes only; tags are
/// fixed by the code.
#[derive(Debug, Clone, Default)]
pub struct StatusResolver {
    labels: HashMap<String, String>,
}

impl StatusResolver {
    /// Resolver with the default labels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver with per-code label overrides. Blank labels and unknown
    /// codes are ignored.
    pub fn with_labels<I, K, V>(labels: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let labels = labels
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, v)| ProjectStatus::from(k.as_str()).is_known() && !v.trim().is_empty())
            .collect();
        Self { labels }
    }

    /// Resolves any code. Never fails and never returns an empty label.
    pub fn resolve(&self, code: &str) -> StatusDisplay {
        self.resolve_status(&ProjectStatus::from(code))
    }

    pub fn resolve_status(&self, status: &ProjectStatus) -> StatusDisplay {
        let label = self
            .labels
            .get(status.code())
            .cloned()
            .unwrap_or_else(|| status.default_label().to_string());

        StatusDisplay {
            code: status.code().to_string(),
            label,
            tag: status.display_tag(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_codes_use_fixed_mapping() {
        let resolver = StatusResolver::new();
        let cases = [
            ("planning", "Pending", DisplayTag::Pending),
            ("in-progress", "Running", DisplayTag::Active),
            ("completed", "Completed", DisplayTag::Success),
            ("overdue", "Overdue", DisplayTag::Danger),
        ];
        for (code, label, tag) in cases {
            let display = resolver.resolve(code);
            assert_eq!(display.label, label, "label for {code}");
            assert_eq!(display.tag, tag, "tag for {code}");
        }
    }

    #[test]
    fn unknown_code_is_displayed_verbatim() {
        let display = StatusResolver::new().resolve("on-hold");
        assert_eq!(display.label, "on-hold");
        assert_eq!(display.tag, DisplayTag::Neutral);
    }

    #[test]
    fn blank_code_gets_unknown_label() {
        let display = StatusResolver::new().resolve("");
        assert_eq!(display.label, UNKNOWN_STATUS_LABEL);
        assert_eq!(display.tag, DisplayTag::Neutral);
    }

    #[test]
    fn overrides_relabel_known_codes_only() {
        let resolver = StatusResolver::with_labels([
            ("in-progress", "Đang chạy"),
            ("completed", "  "),
            ("on-hold", "Paused"),
        ]);
        assert_eq!(resolver.resolve("in-progress").label, "Đang chạy");
        assert_eq!(resolver.resolve("in-progress").tag, DisplayTag::Active);
        assert_eq!(resolver.resolve("completed").label, "Completed");
        assert_eq!(resolver.resolve("on-hold").label, "on-hold");
    }

    #[test]
    fn status_round_trips_through_string() {
        for code in ProjectStatus::KNOWN_CODES {
            let status = ProjectStatus::from(code);
            assert!(status.is_known());
            assert_eq!(String::from(status), code);
        }
        assert_eq!(String::from(ProjectStatus::from("custom")), "custom");
    }

    #[test]
    fn tags_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&DisplayTag::Danger).unwrap(), "\"danger\"");
        assert_eq!(DisplayTag::Neutral.as_str(), "neutral");
    }

    proptest! {
        #[test]
        fn resolve_is_total_and_non_empty(code in ".*") {
            let display = StatusResolver::new().resolve(&code);
            prop_assert!(!display.label.is_empty());
            prop_assert!(!display.tag.as_str().is_empty());
        }

        #[test]
        fn resolve_is_stable(code in "[a-z-]{0,12}") {
            let resolver = StatusResolver::new();
            prop_assert_eq!(resolver.resolve(&code), resolver.resolve(&code));
        }
    }
}
