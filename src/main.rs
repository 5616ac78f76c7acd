use clap::{Parser, Subcommand};
use std::path::PathBuf;
use weekly_post::http::HttpTransport;
use weekly_post::publish::{self, PostContext};
use weekly_post::{frontmatter, generate, output};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "weekly-post")]
#[command(about = "Weekly blog post generator and social cross-poster")]
#[command(long_about = "\
Weekly blog post generator and social cross-poster

The editorial calendar is compiled in: the current ISO week number selects a
topic from a fixed rotation, and the generator writes it as a Jekyll post
(_posts/<date>-<slug>.md). Re-runs are no-ops until the rotation advances.

The publisher takes an existing post file and cross-posts it to LinkedIn,
Instagram, and Medium. Each platform is skipped unless its credentials are
set in the environment:

  LINKEDIN_ACCESS_TOKEN / LINKEDIN_PERSON_URN
  INSTAGRAM_ACCESS_TOKEN / INSTAGRAM_ACCOUNT_ID
  MEDIUM_TOKEN / MEDIUM_USER_ID

A typical schedule runs 'generate' from cron early in the week, then
'publish' on the file it reports.")]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate this week's post into the posts directory
    Generate {
        /// Posts directory
        #[arg(long, default_value = "_posts")]
        posts_dir: PathBuf,

        /// Publish date, YYYY-MM-DD (default: current UTC date)
        #[arg(long)]
        date: Option<String>,

        /// ISO week override for topic rotation (default: current ISO week)
        #[arg(long)]
        week_index: Option<i64>,

        /// Write even if a post with the same filename or title exists
        #[arg(long)]
        force: bool,

        /// Print the planned filename/topic and exit without writing
        #[arg(long)]
        dry_run: bool,
    },
    /// Cross-post an existing post to social platforms
    Publish {
        /// Path to the post markdown file
        #[arg(long)]
        post: PathBuf,

        /// Site base URL for the canonical article link
        #[arg(long, env = "SITE_URL", default_value = "https://www.lightandgrain.com")]
        site_url: String,

        /// Report what would be posted without making any network calls
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            posts_dir,
            date,
            week_index,
            force,
            dry_run,
        } => {
            let result = generate::generate(&generate::GenerateRequest {
                posts_dir,
                date,
                week_index,
                force,
                dry_run,
            })?;
            output::print_generated(&result);
        }
        Command::Publish {
            post,
            site_url,
            dry_run,
        } => {
            if !post.exists() {
                return Err(format!("Post not found: {}", post.display()).into());
            }
            let text = std::fs::read_to_string(&post)?;
            let fm = frontmatter::parse_front_matter(&text)?;

            let title = fm
                .get("title")
                .filter(|t| !t.is_empty())
                .cloned()
                .unwrap_or_else(|| frontmatter::slug_from_filename(&post));
            let body = fm.get(frontmatter::BODY_KEY).cloned().unwrap_or_default();
            let excerpt = fm
                .get("excerpt")
                .filter(|e| !e.is_empty())
                .cloned()
                .unwrap_or_else(|| {
                    frontmatter::excerpt_from_body(&body, frontmatter::DEFAULT_EXCERPT_LEN)
                });
            let image_url = fm.get("image").filter(|i| !i.is_empty()).cloned();

            let context = PostContext {
                title,
                excerpt,
                body,
                article_url: frontmatter::post_url(&site_url, &post),
                image_url,
            };

            let transport = HttpTransport::new();
            let platforms = publish::default_platforms();
            for (name, result) in publish::publish_all(&platforms, &context, &transport, dry_run) {
                output::print_publish_result(name, &result);
            }
        }
    }

    Ok(())
}
