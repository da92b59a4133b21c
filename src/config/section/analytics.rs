//! `[analytics]` section configuration.
//!
//! ```toml
//! [analytics]
//! tracker = "UA-12345-1"
//! ```

use crate::config::ConfigDiagnostics;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Universal Analytics (`UA-1234-1`) or GA4 measurement (`G-ABC123`) ids.
static TRACKER_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(UA-\d{4,10}-\d{1,4}|G-[A-Z0-9]{4,12})$").expect("valid tracker regex")
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Tracker id; the analytics plugin is skipped when unset.
    pub tracker: Option<String>,
}

crate::config_fields!(AnalyticsConfig => AnalyticsFields, "analytics" { tracker });

impl AnalyticsConfig {
    pub fn is_enabled(&self) -> bool {
        self.tracker.is_some()
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(tracker) = &self.tracker
            && !TRACKER_ID.is_match(tracker)
        {
            diag.error_with_hint(
                Self::FIELDS.tracker,
                format!("'{tracker}' is not a tracker id"),
                "expected UA-XXXXXX-N or G-XXXXXXX",
            );
        }
    }
}
