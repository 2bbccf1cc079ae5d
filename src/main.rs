mod db;
mod email;
mod mailbox;
mod parser;
mod pdf;
mod server;

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

#[derive(Parser)]
#[command(name = "placement_parser", about = "Placement-portal resume and notice extraction")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database schema
    Init,
    /// Parse one resume (PDF or text) and save its extracted rows
    Resume {
        /// Resume file; omit when using --dir
        path: Option<PathBuf>,
        /// Parse every .pdf/.txt file in a directory
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Print extracted rows as JSON instead of saving
        #[arg(long)]
        json: bool,
    },
    /// Ingest stored notice messages (JSON files) into the notices table
    Notices {
        /// Directory of exported message files
        #[arg(short, long)]
        dir: PathBuf,
    },
    /// Serve the dashboard JSON API
    Serve {
        #[arg(short, long, default_value = "5050")]
        port: u16,
    },
    /// Show row counts
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            let conn = db::connect()?;
            db::init_schema(&conn)?;
            println!("Schema ready at {}", db::DB_PATH);
            Ok(())
        }
        Commands::Resume { path, dir, json } => match (path, dir) {
            (Some(path), None) => parse_one(&path, json),
            (None, Some(dir)) => parse_dir(&dir),
            _ => bail!("pass exactly one of <PATH> or --dir"),
        },
        Commands::Notices { dir } => {
            let conn = db::connect()?;
            db::init_schema(&conn)?;
            let stats = mailbox::ingest_dir(&conn, &dir)?;
            println!("Saved {} new notices ({} messages found).", stats.saved, stats.found);
            Ok(())
        }
        Commands::Serve { port } => {
            let conn = db::connect()?;
            db::init_schema(&conn)?;
            drop(conn);
            server::serve(db::DB_PATH.to_string(), port).await
        }
        Commands::Stats => {
            let conn = db::connect()?;
            db::init_schema(&conn)?;
            let s = db::get_stats(&conn)?;
            println!("Resumes:          {}", s.resumes);
            println!("  education:      {}", s.education);
            println!("  internships:    {}", s.internships);
            println!("  projects:       {}", s.projects);
            println!("  achievements:   {}", s.achievements);
            println!("  positions:      {}", s.positions);
            println!("  extracurricular:{}", s.extra_activities);
            println!("  skills:         {}", s.skills);
            println!("Notices:          {}", s.notices);
            Ok(())
        }
    }
}

struct RowCounts {
    resumes: usize,
    rows: usize,
}

impl RowCounts {
    fn print(&self) {
        println!("Saved {} resumes, {} extracted rows.", self.resumes, self.rows);
    }
}

fn parse_one(path: &Path, json: bool) -> Result<()> {
    let text = pdf::read_text(path)?;
    let data = parser::extract_resume(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    let conn = db::connect()?;
    db::init_schema(&conn)?;
    let id = save(&conn, path, &text, &data)?;
    println!(
        "Resume {} saved as #{} ({} rows).",
        path.display(),
        id,
        data.total_rows()
    );
    Ok(())
}

fn parse_dir(dir: &Path) -> Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let conn = db::connect()?;
    db::init_schema(&conn)?;

    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("pdf") || e.eq_ignore_ascii_case("txt"))
        })
        .collect();
    files.sort();

    if files.is_empty() {
        println!("No .pdf or .txt files in {}", dir.display());
        return Ok(());
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec})")?
            .progress_chars("=> "),
    );

    let mut counts = RowCounts { resumes: 0, rows: 0 };

    // Text extraction dominates; parse each chunk in parallel, save serially.
    for chunk in files.chunks(64) {
        let results: Vec<_> = chunk
            .par_iter()
            .map(|path| {
                let parsed = pdf::read_text(path).map(|t| {
                    let data = parser::extract_resume(&t);
                    (t, data)
                });
                (path, parsed)
            })
            .collect();

        for (path, parsed) in results {
            match parsed {
                Ok((text, data)) => {
                    save(&conn, path, &text, &data)?;
                    counts.resumes += 1;
                    counts.rows += data.total_rows();
                }
                Err(e) => warn!("skipping {}: {:#}", path.display(), e),
            }
        }
        pb.inc(chunk.len() as u64);
    }

    pb.finish_and_clear();
    counts.print();
    Ok(())
}

fn save(
    conn: &rusqlite::Connection,
    path: &Path,
    text: &str,
    data: &parser::extract::ResumeData,
) -> Result<i64> {
    db::save_resume(
        conn,
        &path.display().to_string(),
        text,
        &data.education,
        &data.internships,
        &data.projects,
        &data.achievements,
        &data.positions,
        &data.extra_activities,
        &data.skills,
    )
}
