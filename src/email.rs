//! Regex field extraction for placement-notice emails. Labels are matched
//! case-insensitively, values run to the end of the physical line; a value
//! that wraps onto the next line is lost, which matches how the notices are
//! actually formatted.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static COMPANY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Company[ \t]*[:\-][ \t]*(.*)").unwrap());
static ORGANIZATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Name of the Organization[ \t]*[:\-][ \t]*(.*)").unwrap());
static CTC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)CTC[ \t]*[:\-][ \t]*(.*)").unwrap());
static PACKAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Package[ \t]*[:\-][ \t]*(.*)").unwrap());
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)https?://[^\s>]+").unwrap());

/// Fields pulled from one email body. Missing field = empty string.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct EmailFields {
    pub company: String,
    pub ctc: String,
    pub link: String,
}

pub fn extract_fields(body: &str) -> EmailFields {
    let body = body.replace('\r', "");
    EmailFields {
        company: first_capture(&body, &[&COMPANY_RE, &ORGANIZATION_RE]),
        ctc: first_capture(&body, &[&CTC_RE, &PACKAGE_RE]),
        link: LINK_RE
            .find(&body)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
    }
}

/// First non-empty capture across the alternatives. An empty capture (label
/// with nothing after it on the line) falls through to the next pattern.
fn first_capture(body: &str, patterns: &[&Regex]) -> String {
    patterns
        .iter()
        .filter_map(|re| re.captures(body))
        .map(|caps| caps[1].to_string())
        .find(|value| !value.is_empty())
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typical_notice_body() {
        let f = extract_fields("Company: Initech\nCTC: 12 LPA\nApply: https://x.co/apply");
        assert_eq!(f.company, "Initech");
        assert_eq!(f.ctc, "12 LPA");
        assert_eq!(f.link, "https://x.co/apply");
    }

    #[test]
    fn fallback_labels() {
        let f = extract_fields("Name of the Organization: Acme Ltd\nPackage - 8.5 LPA");
        assert_eq!(f.company, "Acme Ltd");
        assert_eq!(f.ctc, "8.5 LPA");
    }

    #[test]
    fn labels_are_case_insensitive() {
        let f = extract_fields("COMPANY - Hooli\nctc: 30 lpa");
        assert_eq!(f.company, "Hooli");
        assert_eq!(f.ctc, "30 lpa");
    }

    #[test]
    fn empty_primary_label_falls_through() {
        let f = extract_fields("Company:\nName of the Organization: Initech");
        assert_eq!(f.company, "Initech");
    }

    #[test]
    fn value_never_spans_lines() {
        let f = extract_fields("Company: Initech\nSolutions Pvt Ltd");
        assert_eq!(f.company, "Initech");
    }

    #[test]
    fn first_url_wins_and_angle_bracket_terminates() {
        let f = extract_fields("see <https://a.example/x> then https://b.example/y");
        assert_eq!(f.link, "https://a.example/x");
    }

    #[test]
    fn crlf_bodies_do_not_leak_carriage_returns() {
        let f = extract_fields("Company: Initech\r\nCTC: 12 LPA\r\n");
        assert_eq!(f.company, "Initech");
        assert_eq!(f.ctc, "12 LPA");
    }

    #[test]
    fn missing_fields_are_empty() {
        assert_eq!(extract_fields("nothing to see here"), EmailFields::default());
        assert_eq!(extract_fields(""), EmailFields::default());
    }
}
