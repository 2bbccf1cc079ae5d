use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

pub const DB_PATH: &str = "data/placements.sqlite";

pub fn connect() -> Result<Connection> {
    connect_at(DB_PATH)
}

pub fn connect_at(path: &str) -> Result<Connection> {
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS resumes (
            id         INTEGER PRIMARY KEY,
            source     TEXT NOT NULL,
            raw_text   TEXT NOT NULL,
            parsed_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS education (
            id         INTEGER PRIMARY KEY,
            resume_id  INTEGER NOT NULL REFERENCES resumes(id),
            degree     TEXT NOT NULL,
            institute  TEXT NOT NULL,
            start_date TEXT,
            end_date   TEXT,
            grade      TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_education_resume ON education(resume_id);

        CREATE TABLE IF NOT EXISTS internships (
            id         INTEGER PRIMARY KEY,
            resume_id  INTEGER NOT NULL REFERENCES resumes(id),
            company    TEXT NOT NULL,
            title      TEXT,
            location   TEXT,
            start_date TEXT,
            end_date   TEXT,
            bullets    TEXT NOT NULL DEFAULT '[]'
        );
        CREATE INDEX IF NOT EXISTS idx_internships_resume ON internships(resume_id);

        CREATE TABLE IF NOT EXISTS projects (
            id         INTEGER PRIMARY KEY,
            resume_id  INTEGER NOT NULL REFERENCES resumes(id),
            name       TEXT NOT NULL,
            summary    TEXT,
            bullets    TEXT NOT NULL DEFAULT '[]'
        );
        CREATE INDEX IF NOT EXISTS idx_projects_resume ON projects(resume_id);

        CREATE TABLE IF NOT EXISTS achievements (
            id         INTEGER PRIMARY KEY,
            resume_id  INTEGER NOT NULL REFERENCES resumes(id),
            title      TEXT NOT NULL,
            detail     TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_achievements_resume ON achievements(resume_id);

        CREATE TABLE IF NOT EXISTS positions (
            id         INTEGER PRIMARY KEY,
            resume_id  INTEGER NOT NULL REFERENCES resumes(id),
            title      TEXT NOT NULL,
            detail     TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_positions_resume ON positions(resume_id);

        CREATE TABLE IF NOT EXISTS extra_activities (
            id         INTEGER PRIMARY KEY,
            resume_id  INTEGER NOT NULL REFERENCES resumes(id),
            title      TEXT NOT NULL,
            detail     TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_extra_resume ON extra_activities(resume_id);

        CREATE TABLE IF NOT EXISTS skills (
            id         INTEGER PRIMARY KEY,
            resume_id  INTEGER NOT NULL REFERENCES resumes(id),
            category   TEXT NOT NULL,
            items      TEXT NOT NULL DEFAULT '[]'
        );
        CREATE INDEX IF NOT EXISTS idx_skills_resume ON skills(resume_id);

        CREATE TABLE IF NOT EXISTS notices (
            id         INTEGER PRIMARY KEY,
            subject    TEXT NOT NULL,
            company    TEXT NOT NULL DEFAULT '',
            ctc        TEXT NOT NULL DEFAULT '',
            link       TEXT NOT NULL DEFAULT '',
            date       TEXT NOT NULL,
            sender     TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            UNIQUE(subject, date)
        );
        CREATE INDEX IF NOT EXISTS idx_notices_date ON notices(date);
        ",
    )?;
    Ok(())
}

// ── Extracted resume rows ──

#[derive(Debug, Clone, Serialize)]
pub struct EducationRow {
    pub degree: String,
    pub institute: String,
    pub start: String,
    pub end: String,
    pub grade: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InternshipRow {
    pub company: String,
    pub title: String,
    pub location: String,
    pub start: String,
    pub end: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectRow {
    pub name: String,
    pub summary: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AchievementRow {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PositionRow {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtraActivityRow {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillRow {
    pub category: String,
    pub items: Vec<String>,
}

/// Insert a resume plus all of its extracted rows in one transaction.
/// Returns the assigned resume id.
#[allow(clippy::too_many_arguments)]
pub fn save_resume(
    conn: &Connection,
    source: &str,
    raw_text: &str,
    education: &[EducationRow],
    internships: &[InternshipRow],
    projects: &[ProjectRow],
    achievements: &[AchievementRow],
    positions: &[PositionRow],
    extra_activities: &[ExtraActivityRow],
    skills: &[SkillRow],
) -> Result<i64> {
    let tx = conn.unchecked_transaction()?;
    let resume_id = {
        tx.execute(
            "INSERT INTO resumes (source, raw_text) VALUES (?1, ?2)",
            rusqlite::params![source, raw_text],
        )?;
        tx.last_insert_rowid()
    };

    {
        let mut stmt = tx.prepare(
            "INSERT INTO education (resume_id, degree, institute, start_date, end_date, grade)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;
        for r in education {
            stmt.execute(rusqlite::params![
                resume_id, r.degree, r.institute, r.start, r.end, r.grade,
            ])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO internships
             (resume_id, company, title, location, start_date, end_date, bullets)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )?;
        for r in internships {
            stmt.execute(rusqlite::params![
                resume_id,
                r.company,
                r.title,
                r.location,
                r.start,
                r.end,
                serde_json::to_string(&r.bullets)?,
            ])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO projects (resume_id, name, summary, bullets)
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        for r in projects {
            stmt.execute(rusqlite::params![
                resume_id,
                r.name,
                r.summary,
                serde_json::to_string(&r.bullets)?,
            ])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO achievements (resume_id, title, detail) VALUES (?1, ?2, ?3)",
        )?;
        for r in achievements {
            stmt.execute(rusqlite::params![resume_id, r.title, r.detail])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO positions (resume_id, title, detail) VALUES (?1, ?2, ?3)",
        )?;
        for r in positions {
            stmt.execute(rusqlite::params![resume_id, r.title, r.detail])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO extra_activities (resume_id, title, detail) VALUES (?1, ?2, ?3)",
        )?;
        for r in extra_activities {
            stmt.execute(rusqlite::params![resume_id, r.title, r.detail])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO skills (resume_id, category, items) VALUES (?1, ?2, ?3)",
        )?;
        for r in skills {
            stmt.execute(rusqlite::params![
                resume_id,
                r.category,
                serde_json::to_string(&r.items)?,
            ])?;
        }
    }

    tx.commit()?;
    Ok(resume_id)
}

// ── Notices ──

#[derive(Debug, Clone, Serialize)]
pub struct NoticeRow {
    pub subject: String,
    pub company: String,
    pub ctc: String,
    pub link: String,
    /// RFC 3339 timestamp of the source message.
    pub date: String,
    pub from: String,
}

pub fn save_notices(conn: &Connection, rows: &[NoticeRow]) -> Result<usize> {
    let tx = conn.unchecked_transaction()?;
    let mut count = 0;
    {
        let mut stmt = tx.prepare(
            "INSERT OR IGNORE INTO notices (subject, company, ctc, link, date, sender)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;
        for r in rows {
            count += stmt.execute(rusqlite::params![
                r.subject, r.company, r.ctc, r.link, r.date, r.from,
            ])?;
        }
    }
    tx.commit()?;
    Ok(count)
}

/// Notices from the last `days` days, newest first.
pub fn fetch_notices_since(conn: &Connection, days: i64) -> Result<Vec<NoticeRow>> {
    let cutoff = (chrono::Utc::now() - chrono::Duration::days(days)).to_rfc3339();
    let mut stmt = conn.prepare(
        "SELECT subject, company, ctc, link, date, sender
         FROM notices WHERE date >= ?1 ORDER BY date DESC",
    )?;
    let rows = stmt
        .query_map([cutoff], |row| {
            Ok(NoticeRow {
                subject: row.get(0)?,
                company: row.get(1)?,
                ctc: row.get(2)?,
                link: row.get(3)?,
                date: row.get(4)?,
                from: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

// ── Stats ──

pub struct Stats {
    pub resumes: usize,
    pub education: usize,
    pub internships: usize,
    pub projects: usize,
    pub achievements: usize,
    pub positions: usize,
    pub extra_activities: usize,
    pub skills: usize,
    pub notices: usize,
}

pub fn get_stats(conn: &Connection) -> Result<Stats> {
    let count = |table: &str| -> Result<usize> {
        Ok(conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| r.get(0))?)
    };
    Ok(Stats {
        resumes: count("resumes")?,
        education: count("education")?,
        internships: count("internships")?,
        projects: count("projects")?,
        achievements: count("achievements")?,
        positions: count("positions")?,
        extra_activities: count("extra_activities")?,
        skills: count("skills")?,
        notices: count("notices")?,
    })
}
