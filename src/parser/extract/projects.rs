use crate::db::ProjectRow;
use crate::parser::blocks::{group_blocks, strip_marker};

pub fn extract(lines: &[String]) -> Vec<ProjectRow> {
    group_blocks(lines)
        .into_iter()
        .filter_map(|block| {
            let name = strip_marker(block.header.trim()).to_string();
            if name.is_empty() && block.bullets.is_empty() {
                return None;
            }
            let name = if name.is_empty() {
                "Project".to_string()
            } else {
                name
            };
            Some(ProjectRow {
                name,
                summary: String::new(),
                bullets: block.bullets,
            })
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
    fn named_project_with_bullets() {
        let rows = extract(&lines(&[
            "Placement Portal",
            "- React dashboard",
            "- IMAP backend",
        ]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Placement Portal");
        assert_eq!(rows[0].summary, "");
        assert_eq!(rows[0].bullets.len(), 2);
    }

    #[test]
    fn headerless_bullets_get_default_name() {
        let rows = extract(&lines(&["- built something"]));
        assert_eq!(rows[0].name, "Project");
    }

    #[test]
    fn two_projects() {
        let rows = extract(&lines(&["Alpha", "- a", "Beta", "- b"]));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].name, "Beta");
    }

    #[test]
    fn name_without_bullets_still_emitted() {
        let rows = extract(&lines(&["Solo line project"]));
        assert_eq!(rows.len(), 1);
        assert!(rows[0].bullets.is_empty());
    }

    #[test]
    fn empty_section() {
        assert!(extract(&[]).is_empty());
    }
}
