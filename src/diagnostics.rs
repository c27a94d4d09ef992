use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::db_storage::DocumentStore;

/// Maximum number of collection names included in a report.
pub const MAX_COLLECTIONS: usize = 10;

/// Error text interpolated into a status string is cut to this many characters.
pub const ERROR_PREVIEW_CHARS: usize = 50;

/// Human-readable connectivity report served on `/test`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// Probes the document store. Never fails: every error ends up as text in
/// the `database` field.
///
/// `startup_error` is the connection error recorded when the store could not
/// be built at startup.
pub async fn probe(
    store: Option<&dyn DocumentStore>,
    startup_error: Option<&str>,
    config: &Config,
) -> DiagnosticReport {
    let mut report = DiagnosticReport {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: presence(config.database_url_set()),
        database_name: presence(config.database_name_set()),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    let Some(store) = store else {
        report.database = match startup_error {
            Some(e) => format!("❌ Error: {}", truncate_chars(e, ERROR_PREVIEW_CHARS)),
            None if config.database_url_set() => "⚠️  Available but not initialized".to_string(),
            None => "❌ Database module not found (run enable-database first)".to_string(),
        };
        return report;
    };

    report.database = "✅ Available".to_string();
    report.connection_status = "Connected".to_string();
    tracing::debug!("Probing document store '{}'", store.name());

    match store.list_collection_names().await {
        Ok(mut names) => {
            names.truncate(MAX_COLLECTIONS);
            report.collections = names;
            report.database = "✅ Connected & Working".to_string();
        }
        Err(e) => {
            tracing::warn!("⚠️  Collection listing failed: {}", e);
            report.database = format!(
                "⚠️  Connected but Error: {}",
                truncate_chars(&e.to_string(), ERROR_PREVIEW_CHARS)
            );
        }
    }

    report
}

fn presence(set: bool) -> String {
    let label = if set { "✅ Set" } else { "❌ Not Set" };
    label.to_string()
}

/// UTF-8 safe prefix of at most `max` characters.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 50), "short");
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("çãõéü", 2), "çã");
        assert_eq!(truncate_chars("", 5), "");
    }

    #[tokio::test]
    async fn test_probe_without_store() {
        let report = probe(None, None, &Config::default()).await;

        assert_eq!(report.backend, "✅ Running");
        assert!(report.database.contains("not found"));
        assert_eq!(report.connection_status, "Not Connected");
        assert_eq!(report.database_url, "❌ Not Set");
        assert_eq!(report.database_name, "❌ Not Set");
        assert!(report.collections.is_empty());
    }

    #[tokio::test]
    async fn test_probe_configured_but_not_initialized() {
        let config = Config {
            database_url: Some("postgres://localhost/gym".to_string()),
            ..Config::default()
        };
        let report = probe(None, None, &config).await;

        assert_eq!(report.database, "⚠️  Available but not initialized");
        assert_eq!(report.database_url, "✅ Set");
        assert_eq!(report.connection_status, "Not Connected");
    }

    #[tokio::test]
    async fn test_probe_reports_startup_error() {
        let config = Config {
            database_url: Some("postgres://localhost/gym".to_string()),
            ..Config::default()
        };
        let error = "pool timed out while waiting for an open connection to localhost";
        let report = probe(None, Some(error), &config).await;

        assert_eq!(
            report.database,
            format!("❌ Error: {}", truncate_chars(error, ERROR_PREVIEW_CHARS))
        );
        assert_eq!(truncate_chars(error, ERROR_PREVIEW_CHARS).chars().count(), 50);
    }
}
