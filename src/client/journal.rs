//! Diagnostic request journal.
//!
//! When enabled, every request/response pair is appended as one JSON line
//! to `<log_dir>/requests-YYYY-MM-DD.jsonl` (UTC date). Credentials and
//! tokens are redacted before anything touches disk, and a failure to
//! write never fails the request that produced it.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde_json::{json, Map, Value};
use tokio::io::AsyncWriteExt;

/// Replacement for redacted values.
pub const REDACTED: &str = "***REDACTED***";

const SENSITIVE_KEYS: [&str; 4] = ["authorization", "client_id", "client_secret", "token"];

/// One request/response exchange, borrowed from the executor.
pub(crate) struct JournalEntry<'a> {
    pub method: &'a str,
    pub url: &'a str,
    pub params: &'a [(String, String)],
    pub data: Option<&'a Value>,
    pub headers: &'a HeaderMap,
    pub status: u16,
    pub body: &'a str,
}

/// Appends redacted JSONL records to a dated file.
#[derive(Debug, Clone)]
pub struct RequestJournal {
    dir: PathBuf,
}

impl RequestJournal {
    /// Create a journal writing into `dir`. The directory is created lazily.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the journal files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file records for `at` are appended to.
    pub fn file_for(&self, at: DateTime<Utc>) -> PathBuf {
        self.dir
            .join(format!("requests-{}.jsonl", at.format("%Y-%m-%d")))
    }

    /// Append one record. Errors are logged at `debug` and dropped.
    pub(crate) async fn record(&self, entry: JournalEntry<'_>) {
        let now = Utc::now();
        let line = build_record(&entry, now);
        if let Err(e) = self.append(&self.file_for(now), &line).await {
            tracing::debug!(error = %e, dir = %self.dir.display(), "Failed to write request journal");
        }
    }

    async fn append(&self, path: &Path, record: &Value) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await
    }
}

fn build_record(entry: &JournalEntry<'_>, at: DateTime<Utc>) -> Value {
    let params: Map<String, Value> = entry
        .params
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();

    let headers: Map<String, Value> = entry
        .headers
        .iter()
        .map(|(name, value)| {
            let value = value.to_str().unwrap_or("<binary>").to_string();
            (name.as_str().to_string(), Value::String(value))
        })
        .collect();

    let response_json: Option<Value> = serde_json::from_str(entry.body).ok();
    let response_text = match response_json {
        Some(_) => Value::Null,
        None => Value::String(entry.body.to_string()),
    };

    json!({
        "timestamp": at.to_rfc3339(),
        "method": entry.method,
        "url": entry.url,
        "request": {
            "params": redact(Value::Object(params)),
            "data": redact(entry.data.cloned().unwrap_or_else(|| json!({}))),
            "headers": redact(Value::Object(headers)),
        },
        "response": {
            "status_code": entry.status,
            "json": response_json.map(redact).unwrap_or(Value::Null),
            "text": response_text,
        },
    })
}

/// Replace the values of sensitive keys, at any depth, case-insensitively.
pub fn redact(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| {
                    if is_sensitive(&k) {
                        (k, Value::String(REDACTED.to_string()))
                    } else {
                        (k, redact(v))
                    }
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(redact).collect()),
        other => other,
    }
}

fn is_sensitive(key: &str) -> bool {
    SENSITIVE_KEYS
        .iter()
        .any(|sensitive| key.eq_ignore_ascii_case(sensitive))
}
