//! Publisher-side front matter parsing and post URL/excerpt derivation.
//!
//! The parser is deliberately line-based, not a YAML parser. It captures
//! top-level `key: value` lines only; indented keys under `seo:` come out as
//! malformed top-level keys (`title` gets overwritten, for instance). That
//! behavior is kept on purpose for compatibility with existing posts: the
//! publisher only ever reads `title`, `excerpt`, and `image`, none of which
//! are nested, plus the body. Upgrading to a structured parser would change
//! how malformed posts fail, for no gain.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

/// Reserved key the trimmed body text is stored under. Starts with an
/// underscore so it can never collide with a legitimate front-matter key.
pub const BODY_KEY: &str = "_body";

/// Front-matter delimiter, including the line terminator the splitter keys on.
const FENCE: &str = "---\n";

/// Default excerpt budget when a post has no `excerpt:` field.
pub const DEFAULT_EXCERPT_LEN: usize = 220;

#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("post does not start with YAML front matter")]
    MissingDelimiter,
    #[error("could not parse front matter block")]
    Malformed,
}

/// Parse a post document into a flat key→value mapping plus the body under
/// [`BODY_KEY`].
///
/// The text must start with `---\n` and contain a closing `---\n`. Within
/// the block, the first colon on a line separates key from value; the value
/// is trimmed and one layer of surrounding double quotes is removed. Lines
/// without a colon are ignored.
pub fn parse_front_matter(markdown_text: &str) -> Result<HashMap<String, String>, FrontMatterError> {
    if !markdown_text.starts_with(FENCE) {
        return Err(FrontMatterError::MissingDelimiter);
    }

    let mut parts = markdown_text.splitn(3, FENCE);
    let (_, fm_block, body) = match (parts.next(), parts.next(), parts.next()) {
        (Some(head), Some(block), Some(body)) if head.is_empty() => (head, block, body),
        _ => return Err(FrontMatterError::Malformed),
    };

    let mut data = HashMap::new();
    for line in fm_block.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        data.insert(key.trim().to_string(), unquote(value.trim()).to_string());
    }

    data.insert(BODY_KEY.to_string(), body.trim().to_string());
    Ok(data)
}

/// Strip one layer of surrounding double quotes, if present.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Strip the `YYYY-MM-DD-` prefix from a post filename stem.
///
/// `_posts/2026-02-16-metering-film.md` → `metering-film`. Stems without a
/// date prefix pass through unchanged.
pub fn slug_from_filename(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    if has_date_prefix(&stem) {
        stem[11..].to_string()
    } else {
        stem
    }
}

/// True if `stem` starts with `dddd-dd-dd-`.
fn has_date_prefix(stem: &str) -> bool {
    let b = stem.as_bytes();
    b.len() > 11
        && b[0..4].iter().all(u8::is_ascii_digit)
        && b[4] == b'-'
        && b[5..7].iter().all(u8::is_ascii_digit)
        && b[7] == b'-'
        && b[8..10].iter().all(u8::is_ascii_digit)
        && b[10] == b'-'
}

/// Canonical article URL: site root joined with the filename slug, with a
/// trailing slash to match the generator's `permalink: /<slug>/` convention.
pub fn post_url(site_url: &str, post_path: &Path) -> String {
    format!("{}/{}/", site_url.trim_end_matches('/'), slug_from_filename(post_path))
}

/// Derive a plain-text excerpt from a Markdown body.
///
/// Markdown structural characters are dropped, whitespace is collapsed, and
/// the result is cut to `max_len` characters with an ellipsis when it runs
/// over.
pub fn excerpt_from_body(body: &str, max_len: usize) -> String {
    let cleaned: String = body
        .chars()
        .filter(|c| !matches!(c, '#' | '*' | '_' | '`' | '>' | '-'))
        .collect();
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.chars().count() <= max_len {
        return cleaned;
    }
    let cut: String = cleaned.chars().take(max_len - 1).collect();
    format!("{}…", cut.trim_end())
}
