//! Title-to-slug conversion for filenames and permalinks.
//!
//! Slugs end up in two places: the generated post's filename
//! (`2026-02-16-<slug>.md`) and the canonical article URL the publisher
//! derives from that filename. Both need the same guarantees: lowercase
//! ASCII letters, digits, and hyphens only, bounded length, never empty.
//!
//! Accented input is transliterated through a fixed lookup table before the
//! charset filter runs, so "Café" becomes `cafe` rather than `caf`. The
//! table also covers the common UTF-8-read-as-Latin-1 mojibake pairs that
//! show up when titles pass through a misconfigured editor.

/// Hard cap on slug length. Keeps filenames comfortably under filesystem
/// limits once the date prefix and extension are added.
const MAX_SLUG_LEN: usize = 90;

/// Fallback for titles with no slug-safe characters at all.
const EMPTY_FALLBACK: &str = "post";

/// Transliterations applied before the charset filter. Order matters only in
/// that mojibake sequences must be replaced before their lead bytes are
/// stripped as non-ASCII.
const TRANSLITERATIONS: &[(&str, &str)] = &[
    // UTF-8 mis-decoded as Latin-1. Keys are the post-lowercase forms,
    // since the table runs after the lowercase step.
    ("ã©", "e"),
    ("ã¨", "e"),
    ("ã¤", "a"),
    ("ã¶", "o"),
    ("ã¼", "u"),
    ("ã±", "n"),
    ("ã§", "c"),
    // Plain accented characters
    ("é", "e"),
    ("è", "e"),
    ("ê", "e"),
    ("ë", "e"),
    ("á", "a"),
    ("à", "a"),
    ("â", "a"),
    ("ä", "a"),
    ("å", "a"),
    ("ó", "o"),
    ("ò", "o"),
    ("ô", "o"),
    ("ö", "o"),
    ("ø", "o"),
    ("ú", "u"),
    ("ù", "u"),
    ("û", "u"),
    ("ü", "u"),
    ("í", "i"),
    ("ì", "i"),
    ("î", "i"),
    ("ï", "i"),
    ("ñ", "n"),
    ("ç", "c"),
    ("ß", "ss"),
    ("æ", "ae"),
    ("œ", "oe"),
];

/// Convert a title into a URL- and filename-safe slug.
///
/// Steps, in order: lowercase, trim, transliterate (table above), drop
/// everything outside `[a-z0-9 \t\n-]`, collapse whitespace runs to a single
/// hyphen, collapse hyphen runs, truncate to [`MAX_SLUG_LEN`], trim hyphens,
/// and fall back to `"post"` if nothing survived.
///
/// ```
/// use weekly_post::slug::slugify;
/// assert_eq!(slugify("Pushing Tri-X to 1600"), "pushing-tri-x-to-1600");
/// assert_eq!(slugify("!!!"), "post");
/// ```
pub fn slugify(text: &str) -> String {
    let mut text = text.trim().to_lowercase();
    for (from, to) in TRANSLITERATIONS {
        if text.contains(from) {
            text = text.replace(from, to);
        }
    }

    // Charset filter + whitespace-to-hyphen + hyphen collapse in one walk.
    let mut slug = String::with_capacity(text.len());
    let mut prev_hyphen = false;
    for c in text.chars() {
        let mapped = match c {
            'a'..='z' | '0'..='9' => Some(c),
            '-' => Some('-'),
            c if c.is_whitespace() => Some('-'),
            _ => None,
        };
        match mapped {
            Some('-') => {
                if !prev_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                prev_hyphen = true;
            }
            Some(c) => {
                slug.push(c);
                prev_hyphen = false;
            }
            None => {}
        }
    }

    slug.truncate(MAX_SLUG_LEN);
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        EMPTY_FALLBACK.to_string()
    } else {
        slug.to_string()
    }
}
