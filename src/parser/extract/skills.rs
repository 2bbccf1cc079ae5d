use std::sync::LazyLock;

use regex::Regex;

use crate::db::SkillRow;
use crate::parser::rows::join_rows;

// "Category: item, item" where the category is words, '&', or '/'.
static CATEGORY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z &/]+)\s*:\s*(.+)$").unwrap());

pub fn extract(lines: &[String]) -> Vec<SkillRow> {
    let mut out = Vec::new();

    for row in join_rows(lines) {
        let Some(caps) = CATEGORY_RE.captures(&row) else {
            continue;
        };
        let category = caps[1].trim().to_string();
        let items = split_items(&caps[2]);
        if category.is_empty() || items.is_empty() {
            continue;
        }
        out.push(SkillRow { category, items });
    }

    out
}

fn split_items(s: &str) -> Vec<String> {
    s.split(" \u{b7} ")
        .flat_map(|part| part.split([',', ';']))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
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
    fn comma_separated_items() {
        let rows = extract(&lines(&["Languages: Python, C++, SQL"]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "Languages");
        assert_eq!(rows[0].items, vec!["Python", "C++", "SQL"]);
    }

    #[test]
    fn semicolon_and_middot_separators() {
        let rows = extract(&lines(&["Tools: Git; Docker \u{b7} Linux"]));
        assert_eq!(rows[0].items, vec!["Git", "Docker", "Linux"]);
    }

    #[test]
    fn category_with_ampersand_and_slash() {
        let rows = extract(&lines(&["Tools & Frameworks / Libraries: React"]));
        assert_eq!(rows[0].category, "Tools & Frameworks / Libraries");
    }

    #[test]
    fn non_matching_rows_skipped() {
        let rows = extract(&lines(&["no colon in this row", "C++ stuff: templates"]));
        // "C++ stuff" contains '+' which the category pattern rejects.
        assert!(rows.is_empty());
    }

    #[test]
    fn dangling_separators_dropped() {
        let rows = extract(&lines(&["Languages: Python, , SQL,"]));
        assert_eq!(rows[0].items, vec!["Python", "SQL"]);
    }

    #[test]
    fn category_alone_on_line_yields_nothing() {
        // The trailing colon flushes the row before the items arrive, so
        // neither row matches the pattern.
        let rows = extract(&lines(&["Languages:", "Python, C++"]));
        assert!(rows.is_empty());
    }

    #[test]
    fn never_more_rows_than_joined_rows() {
        let input = lines(&["Languages: C;", "free text", "Tools: Git"]);
        assert!(extract(&input).len() <= join_rows(&input).len());
    }

    #[test]
    fn empty_section() {
        assert!(extract(&[]).is_empty());
    }
}
