//! The generate pipeline: pick the week's topic, render it, write the file.
//!
//! Generation is idempotent by design. Two guards make re-runs safe for a
//! scheduled job: the target filename must not already exist, and no existing
//! post may carry the same `title:` line. Either match turns the run into a
//! reported no-op with a zero exit, not an error. `--force` bypasses both.
//!
//! The pipeline itself does no printing; it returns a [`Generated`] value
//! that the output module formats.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use thiserror::Error;
use walkdir::WalkDir;

use crate::render;
use crate::slug::slugify;
use crate::topics;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("error scanning posts directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Inputs to one generator run, straight from the CLI.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub posts_dir: PathBuf,
    /// Publish date override, `YYYY-MM-DD`. Defaults to the current UTC date.
    pub date: Option<String>,
    /// Rotation override. Defaults to the current ISO week.
    pub week_index: Option<i64>,
    pub force: bool,
    pub dry_run: bool,
}

/// What a generator run did (or would have done).
#[derive(Debug, Clone, PartialEq)]
pub enum Generated {
    /// Dry-run: nothing written, here is the plan.
    DryRun {
        week_index: i64,
        title: String,
        path: PathBuf,
    },
    /// No-op: the target file already exists.
    SkippedExistingFile { path: PathBuf },
    /// No-op: another post already carries this title.
    SkippedExistingTitle { title: String },
    /// The post was written.
    Created { path: PathBuf },
}

/// Run the generator once.
pub fn generate(request: &GenerateRequest) -> Result<Generated, GenerateError> {
    let week_index = request.week_index.unwrap_or_else(topics::current_week_index);
    let topic = topics::topic_for_week(week_index);

    let publish_date = resolve_publish_date(request.date.as_deref())?;
    let filename = format!("{publish_date}-{}.md", slugify(topic.title));
    let path = request.posts_dir.join(filename);

    if request.dry_run {
        return Ok(Generated::DryRun {
            week_index,
            title: topic.title.to_string(),
            path,
        });
    }

    fs::create_dir_all(&request.posts_dir)?;

    if path.exists() && !request.force {
        return Ok(Generated::SkippedExistingFile { path });
    }
    if !request.force && posts_contain_title(&request.posts_dir, topic.title)? {
        return Ok(Generated::SkippedExistingTitle {
            title: topic.title.to_string(),
        });
    }

    fs::write(&path, render::build_post(&topic, &publish_date))?;
    Ok(Generated::Created { path })
}

/// Validate an explicit `YYYY-MM-DD` date, or default to today (UTC).
pub fn resolve_publish_date(raw_date: Option<&str>) -> Result<String, GenerateError> {
    match raw_date {
        None => Ok(Utc::now().date_naive().format("%Y-%m-%d").to_string()),
        Some(raw) => {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| GenerateError::InvalidDate(raw.to_string()))?;
            Ok(raw.to_string())
        }
    }
}

/// Scan every `*.md` file in the posts directory for an exact
/// `title: "<title>"` front-matter line.
pub fn posts_contain_title(posts_dir: &Path, title: &str) -> Result<bool, GenerateError> {
    let needle = format!("title: \"{title}\"");
    for entry in WalkDir::new(posts_dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if entry.path().extension().is_none_or(|ext| ext != "md") {
            continue;
        }
        let contents = fs::read_to_string(entry.path())?;
        if contents.lines().any(|line| line == needle) {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn request(dir: &TempDir) -> GenerateRequest {
        GenerateRequest {
            posts_dir: dir.path().to_path_buf(),
            date: Some("2026-02-16".to_string()),
            week_index: Some(1),
            force: false,
            dry_run: false,
        }
    }

    #[test]
    fn creates_post_with_dated_slug_filename() {
        let dir = TempDir::new().unwrap();
        let Generated::Created { path } = generate(&request(&dir)).unwrap() else {
            panic!("expected Created");
        };
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("2026-02-16-"));
        assert!(name.ends_with(".md"));

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("---\nlayout: post\n"));
        assert!(contents.ends_with('\n'));
    }

    #[test]
    fn second_run_is_a_noop() {
        let dir = TempDir::new().unwrap();
        generate(&request(&dir)).unwrap();
        let second = generate(&request(&dir)).unwrap();
        assert!(matches!(second, Generated::SkippedExistingFile { .. }));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn force_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        generate(&request(&dir)).unwrap();
        let mut req = request(&dir);
        req.force = true;
        assert!(matches!(generate(&req).unwrap(), Generated::Created { .. }));
    }

    #[test]
    fn title_guard_catches_same_title_under_different_filename() {
        let dir = TempDir::new().unwrap();
        // Same topic generated under a different date: filename differs,
        // title matches.
        let mut first = request(&dir);
        first.date = Some("2026-02-09".to_string());
        generate(&first).unwrap();

        let second = generate(&request(&dir)).unwrap();
        assert!(matches!(second, Generated::SkippedExistingTitle { .. }));
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let posts = dir.path().join("_posts");
        let req = GenerateRequest {
            posts_dir: posts.clone(),
            dry_run: true,
            ..request(&dir)
        };
        let Generated::DryRun { week_index, title, path } = generate(&req).unwrap() else {
            panic!("expected DryRun");
        };
        assert_eq!(week_index, 1);
        assert!(!title.is_empty());
        assert!(path.starts_with(&posts));
        assert!(!posts.exists());
    }

    #[test]
    fn invalid_date_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut req = request(&dir);
        req.date = Some("16-02-2026".to_string());
        assert!(matches!(
            generate(&req).unwrap_err(),
            GenerateError::InvalidDate(_)
        ));
    }

    #[test]
    fn default_date_is_today_utc() {
        let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(resolve_publish_date(None).unwrap(), today);
    }

    #[test]
    fn title_scan_matches_exact_line_only() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("2026-01-05-old.md"),
            "---\ntitle: \"Existing Title\"\n---\n\nbody\n",
        )
        .unwrap();

        assert!(posts_contain_title(dir.path(), "Existing Title").unwrap());
        assert!(!posts_contain_title(dir.path(), "Existing").unwrap());
        assert!(!posts_contain_title(dir.path(), "Other Title").unwrap());
    }

    #[test]
    fn title_scan_ignores_non_markdown_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.txt"), "title: \"Existing Title\"\n").unwrap();
        assert!(!posts_contain_title(dir.path(), "Existing Title").unwrap());
    }
}
