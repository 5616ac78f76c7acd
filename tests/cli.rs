//! End-to-end CLI tests.
//!
//! These run the real binary against a temp posts directory. The publish
//! tests stay in dry-run mode or use missing credentials, so no network
//! calls ever leave the test process.

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("weekly-post").unwrap();
    // Make sure ambient credentials on a dev machine can't leak into tests.
    for var in [
        "LINKEDIN_ACCESS_TOKEN",
        "LINKEDIN_PERSON_URN",
        "INSTAGRAM_ACCESS_TOKEN",
        "INSTAGRAM_ACCOUNT_ID",
        "MEDIUM_TOKEN",
        "MEDIUM_USER_ID",
        "SITE_URL",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn generate_writes_one_post_and_reruns_are_noops() {
    let dir = TempDir::new().unwrap();
    let posts = dir.path().join("_posts");
    let posts_arg = posts.to_str().unwrap();

    cmd()
        .args(["generate", "--posts-dir", posts_arg])
        .args(["--date", "2026-02-16", "--week-index", "1"])
        .assert()
        .success()
        .stdout(contains("Created: "));

    // Second run without --force: exit 0, nothing new on disk.
    cmd()
        .args(["generate", "--posts-dir", posts_arg])
        .args(["--date", "2026-02-16", "--week-index", "1"])
        .assert()
        .success()
        .stdout(contains("already exists"));

    assert_eq!(std::fs::read_dir(&posts).unwrap().count(), 1);
}

#[test]
fn generate_dry_run_prints_plan_without_writing() {
    let dir = TempDir::new().unwrap();
    let posts = dir.path().join("_posts");

    cmd()
        .args(["generate", "--posts-dir", posts.to_str().unwrap()])
        .args(["--date", "2026-02-16", "--week-index", "2", "--dry-run"])
        .assert()
        .success()
        .stdout(contains("[dry-run] Week index: 2"))
        .stdout(contains("[dry-run] Target file: "));

    assert!(!posts.exists());
}

#[test]
fn generate_rejects_malformed_date() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["generate", "--posts-dir", dir.path().to_str().unwrap()])
        .args(["--date", "Feb 16 2026"])
        .assert()
        .failure()
        .stderr(contains("invalid date"));
}

#[test]
fn publish_skips_all_platforms_without_credentials() {
    let dir = TempDir::new().unwrap();
    let posts = dir.path().join("_posts");
    let posts_arg = posts.to_str().unwrap();

    cmd()
        .args(["generate", "--posts-dir", posts_arg])
        .args(["--date", "2026-02-16", "--week-index", "1"])
        .assert()
        .success();
    let post = std::fs::read_dir(&posts).unwrap().next().unwrap().unwrap().path();

    cmd()
        .args(["publish", "--post", post.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("[linkedin] Skipped: missing"))
        .stdout(contains("[instagram] Skipped: missing"))
        .stdout(contains("[medium] Skipped: missing"));
}

#[test]
fn publish_dry_run_reports_planned_actions() {
    let dir = TempDir::new().unwrap();
    let posts = dir.path().join("_posts");
    let posts_arg = posts.to_str().unwrap();

    cmd()
        .args(["generate", "--posts-dir", posts_arg])
        .args(["--date", "2026-02-16", "--week-index", "1"])
        .assert()
        .success();
    let post = std::fs::read_dir(&posts).unwrap().next().unwrap().unwrap().path();

    cmd()
        .args(["publish", "--post", post.to_str().unwrap(), "--dry-run"])
        .env("LINKEDIN_ACCESS_TOKEN", "t")
        .env("LINKEDIN_PERSON_URN", "urn:li:person:1")
        .env("INSTAGRAM_ACCESS_TOKEN", "t")
        .env("INSTAGRAM_ACCOUNT_ID", "1")
        .env("MEDIUM_TOKEN", "t")
        .env("MEDIUM_USER_ID", "u")
        .assert()
        .success()
        .stdout(contains("[linkedin] Dry run: would publish post"))
        .stdout(contains("[instagram] Dry run: would create media container + publish"))
        .stdout(contains("[medium] Dry run: would publish article"));
}

#[test]
fn publish_missing_post_file_is_fatal() {
    cmd()
        .args(["publish", "--post", "/no/such/post.md"])
        .assert()
        .failure()
        .stderr(contains("Post not found"));
}

#[test]
fn publish_rejects_file_without_front_matter() {
    let dir = TempDir::new().unwrap();
    let post = dir.path().join("plain.md");
    std::fs::write(&post, "just some markdown\n").unwrap();

    cmd()
        .args(["publish", "--post", post.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("front matter"));
}
