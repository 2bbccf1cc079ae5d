use std::sync::LazyLock;

use regex::Regex;

use crate::db::EducationRow;
use crate::parser::rows::join_rows_with;

// Columns in a resume education table arrive as space-run or " | " separated.
static COLUMN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}| \| ").unwrap());

/// Positional mapping: degree, date range, institute, grade. Kept exactly as
/// observed in production resumes; a deviating layout corrupts the mapping
/// and the row is simply dropped or mis-filled.
pub fn extract(lines: &[String]) -> Vec<EducationRow> {
    let mut out = Vec::new();

    // Two-space join keeps the wrap point visible to the column split.
    for row in join_rows_with(lines, "  ") {
        let parts: Vec<&str> = COLUMN_RE.split(&row).map(str::trim).collect();
        if parts.len() < 2 {
            continue;
        }

        let degree = parts[0].to_string();
        let (start, end) = split_date_range(parts[1]);
        let institute = parts.get(2).copied().unwrap_or("").to_string();
        let grade = parts.get(3).copied().unwrap_or("").to_string();

        if degree.is_empty() && institute.is_empty() {
            continue;
        }
        out.push(EducationRow {
            degree,
            institute,
            start,
            end,
            grade,
        });
    }

    out
}

fn split_date_range(part: &str) -> (String, String) {
    match part.split_once(['\u{2013}', '-']) {
        Some((a, b)) => (a.trim().to_string(), b.trim().to_string()),
        None => (part.trim().to_string(), String::new()),
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn wrapped_entry_maps_positionally() {
        let rows = extract(&lines(&[
            "B.Tech \u{2013} Computer Science",
            "2020 \u{2013} 2024  XYZ Institute  8.5",
        ]));
        assert_eq!(rows.len(), 1);
        let r = &rows[0];
        assert_eq!(r.degree, "B.Tech \u{2013} Computer Science");
        assert_eq!(r.start, "2020");
        assert_eq!(r.end, "2024");
        assert_eq!(r.institute, "XYZ Institute");
        assert_eq!(r.grade, "8.5");
    }

    #[test]
    fn pipe_separated_columns() {
        let rows = extract(&lines(&["B.E. CSE | 2021 - 2025 | Thapar Institute | 9.1"]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].institute, "Thapar Institute");
        assert_eq!(rows[0].end, "2025");
    }

    #[test]
    fn single_column_row_dropped() {
        assert!(extract(&lines(&["just one field"])).is_empty());
    }

    #[test]
    fn missing_trailing_columns_default_empty() {
        let rows = extract(&lines(&["Diploma  2018 - 2020"]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].institute, "");
        assert_eq!(rows[0].grade, "");
    }

    #[test]
    fn hyphen_date_range() {
        let rows = extract(&lines(&["Degree  2019-2023  Place"]));
        assert_eq!(rows[0].start, "2019");
        assert_eq!(rows[0].end, "2023");
    }

    #[test]
    fn no_range_in_date_column() {
        let rows = extract(&lines(&["Degree  2024  Place"]));
        assert_eq!(rows[0].start, "2024");
        assert_eq!(rows[0].end, "");
    }

    #[test]
    fn sentence_terminated_entries_stay_separate() {
        let rows = extract(&lines(&[
            "B.E.  2020 - 2024  First Institute  9.0;",
            "XII  2018 - 2020  Second School  95%",
        ]));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].institute, "Second School");
    }

    #[test]
    fn never_more_rows_than_joined_rows() {
        let input = lines(&["a  b", "c  d;", "e"]);
        let rows = extract(&input);
        assert!(rows.len() <= crate::parser::rows::join_rows_with(&input, "  ").len());
    }

    #[test]
    fn empty_section() {
        assert!(extract(&[]).is_empty());
    }
}
