//! Post document rendering: YAML front matter plus body.
//!
//! The front-matter key order is fixed and load-bearing: downstream tooling
//! (the duplicate-title guard, the publisher's line-based parser) matches on
//! exact lines like `title: "..."`. Keys render in this order: `layout`,
//! `title`, `date`, `tags`, `categories`, `excerpt`, `image`, `image_alt`,
//! `permalink`, then a nested `seo:` block.
//!
//! String fields are not YAML-escaped. Callers supply quote-safe text; topic
//! titles and excerpts are authored constants, never user input. This is a
//! documented contract, kept for byte-compatibility with existing posts.

use crate::topics::Topic;

/// Render a complete post document: front matter, blank line, trimmed body,
/// exactly one trailing newline.
///
/// Tags render as a bracketed, comma-joined, unquoted list. The permalink
/// slug is wrapped in slashes. The `seo:` block is the one nested structure
/// and is indented two spaces.
pub fn build_post(topic: &Topic, publish_date: &str) -> String {
    let tag_string = topic.tags.join(", ");

    let fm = [
        "---".to_string(),
        "layout: post".to_string(),
        format!("title: \"{}\"", topic.title),
        format!("date: {publish_date}"),
        format!("tags: [{tag_string}]"),
        format!("categories: [{}]", topic.category),
        format!("excerpt: \"{}\"", topic.excerpt),
        format!("image: {}", topic.image_url),
        format!("image_alt: \"{}\"", topic.image_alt),
        format!("permalink: /{}/", topic.permalink_slug),
        "seo:".to_string(),
        format!("  title: \"{}\"", topic.seo_title),
        format!("  description: \"{}\"", topic.seo_description),
        "---".to_string(),
    ];
    fm.join("\n") + "\n\n" + topic.body.trim() + "\n"
}
