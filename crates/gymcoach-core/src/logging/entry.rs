//! One JSONL log line.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single log entry, self-contained so appends never interleave badly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// RFC 3339 timestamp with milliseconds
    pub ts: String,
    /// trace, debug, info, warn or error
    pub level: String,
    /// Binary that wrote the entry, e.g. "desktop" or "cli"
    pub app: String,
    /// Module path, e.g. "gymcoach_core::api::client"
    pub target: String,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,
    /// Enclosing spans, root first, joined with " > "
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
}

impl LogEntry {
    pub fn new(
        level: impl Into<String>,
        app: impl Into<String>,
        target: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level: level.into(),
            app: app.into(),
            target: target.into(),
            msg: msg.into(),
            fields: None,
            span: None,
        }
    }

    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_parts_are_omitted() {
        let line = LogEntry::new("info", "cli", "gymcoach", "hello")
            .to_json_line()
            .unwrap();
        assert!(!line.contains("fields"));
        assert!(!line.contains("span"));

        let parsed = LogEntry::from_json_line(&line).unwrap();
        assert_eq!(parsed.msg, "hello");
        assert_eq!(parsed.app, "cli");
    }
}
