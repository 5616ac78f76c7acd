//! # Weekly Post
//!
//! A weekly blog post generator and best-effort social cross-poster for
//! Jekyll-style sites. One binary, two commands:
//!
//! ```text
//! weekly-post generate   # pick this week's topic, write _posts/<date>-<slug>.md
//! weekly-post publish    # cross-post an existing post to social platforms
//! ```
//!
//! # How generation works
//!
//! The editorial calendar is a fixed list of topics compiled into the binary.
//! The current ISO week number indexes into it modulo the list length, so the
//! schedule is deterministic, needs no state, and wraps around when the list
//! is exhausted. A topic renders to YAML front matter plus a Markdown body
//! assembled from one of two fixed skeletons.
//!
//! Generation is idempotent: if the target file exists, or any post already
//! carries the same `title:` line, the run is a reported no-op. A scheduled
//! job can fire the generator every day and only the first run of the week
//! writes anything.
//!
//! # How publishing works
//!
//! The publisher reads a post file back, parses its front matter with a
//! deliberately simple line-based parser, derives the canonical article URL
//! from the filename, and fans out to LinkedIn, Instagram, and Medium in
//! that order. Every platform guards itself: missing credentials mean a
//! logged skip, and a failure on one platform never blocks the next. One
//! shot per platform, no retries — the next week's run is the retry.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`topics`] | Fixed topic catalog and the ISO-week rotation |
//! | [`body`] | The two body-skeleton builders (bullet and table variants) |
//! | [`render`] | Front-matter + body document rendering |
//! | [`slug`] | Title → filename/URL slug conversion |
//! | [`generate`] | Generator pipeline with duplicate guards and dry-run |
//! | [`frontmatter`] | Publisher-side parsing, article URL, excerpt derivation |
//! | [`publish`] | Platform registry and the best-effort fan-out driver |
//! | [`http`] | Blocking JSON POST transport behind a test seam |
//! | [`output`] | Pure notice formatting + print wrappers |
//!
//! # Design Decisions
//!
//! ## Sequential and blocking on purpose
//!
//! Each invocation is a short-lived script: one file write or three HTTP
//! POSTs. Async machinery would buy nothing; the publisher uses a blocking
//! `reqwest` client and plain sequential calls with per-platform error
//! isolation.
//!
//! ## The front matter parser is not a YAML parser
//!
//! The publisher's parser captures top-level `key: value` lines only.
//! Indented keys (the `seo:` block) leak out as malformed top-level keys.
//! This is kept intentionally: the publisher only needs `title`, `excerpt`,
//! `image`, and the body, and byte-compatible behavior with the existing
//! post corpus matters more than structural correctness. See
//! [`frontmatter`] for details.
//!
//! ## No YAML escaping in the renderer
//!
//! Front-matter string fields are written unescaped. Topic text is authored
//! constants, never user input, and the catalog contains no double quotes.

pub mod body;
pub mod frontmatter;
pub mod generate;
pub mod http;
pub mod output;
pub mod publish;
pub mod render;
pub mod slug;
pub mod topics;
