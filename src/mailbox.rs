//! Ingest placement-notice messages exported by the mail fetcher. Each
//! message is one JSON file with `{subject, date, from, text, html}`; the
//! IMAP side lives outside this binary and only ever hands us these files.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use serde::Deserialize;
use tracing::{info, warn};

use crate::db::{self, NoticeRow};
use crate::email;

#[derive(Debug, Deserialize)]
pub struct StoredMessage {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub html: String,
}

pub struct IngestStats {
    pub found: usize,
    pub saved: usize,
}

/// Read every .json message under `dir`, extract notice fields, and save.
/// Unparseable files are skipped with a warning; duplicates are ignored by
/// the store.
pub fn ingest_dir(conn: &Connection, dir: &Path) -> Result<IngestStats> {
    let mut notices = Vec::new();
    let mut found = 0;

    let entries =
        std::fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        found += 1;
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        match serde_json::from_str::<StoredMessage>(&raw) {
            Ok(msg) => notices.push(to_notice(&msg)),
            Err(e) => warn!("skipping {}: {}", path.display(), e),
        }
    }

    let saved = db::save_notices(conn, &notices)?;
    info!("ingested {} of {} messages from {}", saved, found, dir.display());
    Ok(IngestStats { found, saved })
}

/// Merge extracted body fields with the message envelope. Text body is
/// preferred; the HTML body is a fallback for text-less messages.
pub fn to_notice(msg: &StoredMessage) -> NoticeRow {
    let body = if msg.text.is_empty() { &msg.html } else { &msg.text };
    let fields = email::extract_fields(body);
    NoticeRow {
        subject: msg.subject.clone(),
        company: fields.company,
        ctc: fields.ctc,
        link: fields.link,
        date: normalize_date(&msg.date),
        from: msg.from.clone(),
    }
}

/// Accept RFC 3339 or RFC 2822 dates; anything else becomes "now" so the
/// notice still sorts into the feed.
fn normalize_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
        .to_rfc3339()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(text: &str, html: &str) -> StoredMessage {
        StoredMessage {
            subject: "Campus drive".into(),
            date: "2026-08-20T09:30:00Z".into(),
            from: "spr@example.edu".into(),
            text: text.into(),
            html: html.into(),
        }
    }

    #[test]
    fn notice_merges_envelope_and_body_fields() {
        let n = to_notice(&msg("Company: Initech\nCTC: 12 LPA\nhttps://x.co/a", ""));
        assert_eq!(n.subject, "Campus drive");
        assert_eq!(n.from, "spr@example.edu");
        assert_eq!(n.company, "Initech");
        assert_eq!(n.ctc, "12 LPA");
        assert_eq!(n.link, "https://x.co/a");
        assert!(n.date.starts_with("2026-08-20"));
    }

    #[test]
    fn html_body_is_a_fallback() {
        let n = to_notice(&msg("", "<p>Company: Hooli</p>"));
        assert_eq!(n.company, "Hooli</p>");
    }

    #[test]
    fn rfc2822_dates_accepted() {
        assert!(normalize_date("Thu, 20 Aug 2026 09:30:00 +0530").starts_with("2026-08-20"));
    }

    #[test]
    fn garbage_dates_fall_back_to_now() {
        let d = normalize_date("not a date");
        assert!(DateTime::parse_from_rfc3339(&d).is_ok());
    }

    #[test]
    fn fixture_message_parses() {
        let raw = std::fs::read_to_string("tests/fixtures/notice_message.json").unwrap();
        let msg: StoredMessage = serde_json::from_str(&raw).unwrap();
        let n = to_notice(&msg);
        assert_eq!(n.company, "Initech");
        assert!(!n.link.is_empty());
    }
}
