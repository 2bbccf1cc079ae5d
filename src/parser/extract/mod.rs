pub mod bullets;
pub mod education;
pub mod internships;
pub mod projects;
pub mod skills;

use serde::Serialize;

use super::sections::Section;
use crate::db::*;

/// All structured rows pulled out of one resume. Row identity is assigned by
/// the store on save; extraction itself is pure.
#[derive(Debug, Default, Serialize)]
pub struct ResumeData {
    pub education: Vec<EducationRow>,
    pub internships: Vec<InternshipRow>,
    pub projects: Vec<ProjectRow>,
    pub achievements: Vec<AchievementRow>,
    pub positions: Vec<PositionRow>,
    pub extra_activities: Vec<ExtraActivityRow>,
    pub skills: Vec<SkillRow>,
}

impl ResumeData {
    pub fn total_rows(&self) -> usize {
        self.education.len()
            + self.internships.len()
            + self.projects.len()
            + self.achievements.len()
            + self.positions.len()
            + self.extra_activities.len()
            + self.skills.len()
    }
}

// Alias spellings per extractor; the first alias present in the document
// wins, later aliases are ignored rather than merged.
const EDUCATION_ALIASES: &[&str] = &["EDUCATION"];
const INTERNSHIP_ALIASES: &[&str] = &["INTERNSHIP", "INTERNSHIPS"];
const PROJECT_ALIASES: &[&str] = &["PROJECTS"];
const ACHIEVEMENT_ALIASES: &[&str] = &["ACHIEVEMENTS"];
const POSITION_ALIASES: &[&str] = &["POSITIONS OF RESPONSIBILITY", "POSITIONS"];
const EXTRA_ALIASES: &[&str] = &["EXTRA CURRICULAR ACTIVITIES", "EXTRACURRICULAR"];
const SKILL_ALIASES: &[&str] = &["SKILL / INTEREST", "SKILLS / INTEREST", "SKILLS"];

pub fn extract_all(sections: &[Section]) -> ResumeData {
    ResumeData {
        education: education::extract(section_lines(sections, EDUCATION_ALIASES)),
        internships: internships::extract(section_lines(sections, INTERNSHIP_ALIASES)),
        projects: projects::extract(section_lines(sections, PROJECT_ALIASES)),
        achievements: bullets::achievements(section_lines(sections, ACHIEVEMENT_ALIASES)),
        positions: bullets::positions(section_lines(sections, POSITION_ALIASES)),
        extra_activities: bullets::extra_activities(section_lines(sections, EXTRA_ALIASES)),
        skills: skills::extract(section_lines(sections, SKILL_ALIASES)),
    }
}

/// Lines of the first alias present, or an empty slice. Unknown sections in
/// the map are never dispatched anywhere.
fn section_lines<'a>(sections: &'a [Section], aliases: &[&str]) -> &'a [String] {
    aliases
        .iter()
        .find_map(|alias| sections.iter().find(|s| s.heading == *alias))
        .map(|s| s.lines.as_slice())
        .unwrap_or(&[])
}

// ── Tests ──
