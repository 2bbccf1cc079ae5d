//! Bullet-line sections: achievements, positions of responsibility, and
//! extracurricular activities all share the same one-row-per-bullet shape.

use crate::db::{AchievementRow, ExtraActivityRow, PositionRow};
use crate::parser::blocks::{is_bullet, strip_marker};

/// Keep only bullet-marked lines, marker-stripped. Unmarked lines (dates,
/// stray wrap fragments) are ignored.
fn bullet_lines(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| is_bullet(l))
        .map(|l| strip_marker(l).to_string())
        .collect()
}

pub fn achievements(lines: &[String]) -> Vec<AchievementRow> {
    bullet_lines(lines)
        .into_iter()
        .map(|title| AchievementRow {
            title,
            detail: String::new(),
        })
        .collect()
}

pub fn positions(lines: &[String]) -> Vec<PositionRow> {
    bullet_lines(lines)
        .into_iter()
        .map(|title| PositionRow {
            title,
            detail: String::new(),
        })
        .collect()
}

pub fn extra_activities(lines: &[String]) -> Vec<ExtraActivityRow> {
    bullet_lines(lines)
        .into_iter()
        .map(|title| ExtraActivityRow {
            title,
            detail: String::new(),
        })
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn one_row_per_bullet() {
        let rows = achievements(&lines(&[
            "- Winner, Smart India Hackathon",
            "- AIR 1200 in JEE Mains",
        ]));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "Winner, Smart India Hackathon");
        assert_eq!(rows[0].detail, "");
    }

    #[test]
    fn unmarked_lines_ignored() {
        let rows = positions(&lines(&[
            "2023 - 2024",
            "- Placement Representative, CSE",
        ]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Placement Representative, CSE");
    }

    #[test]
    fn unicode_bullets_accepted() {
        let rows = extra_activities(&lines(&["\u{2022} Member, Music Society"]));
        assert_eq!(rows[0].title, "Member, Music Society");
    }

    #[test]
    fn no_bullets_no_rows() {
        assert!(achievements(&lines(&["plain prose only"])).is_empty());
    }

    #[test]
    fn empty_section() {
        assert!(positions(&[]).is_empty());
    }
}
