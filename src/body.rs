//! Post body assembly from fixed structural skeletons.
//!
//! Bodies are pure string concatenation over a fixed outline. Two skeletons
//! exist and share the same divider and heading conventions:
//!
//! - [`bullet_body`]: intro, numbered sections with examples, a "Quick
//!   points" bullet block, a call-to-action list, final note, tagline.
//! - [`table_body`]: the richer variant. Sections additionally carry a tone
//!   note and an optional warning block, and the closing block is a Markdown
//!   comparison table of mistake/fix pairs instead of quick points.
//!
//! There is no parsing and no logic beyond presence checks on optional
//! fields. The builders return Markdown ready to hand to the front-matter
//! renderer.

/// One thematic section of a post body.
///
/// `tone` and `warning` are only rendered by the richer [`table_body`]
/// skeleton; the bullet skeleton ignores them.
pub struct Section {
    pub title: &'static str,
    pub explanation: &'static [&'static str],
    pub examples: &'static [&'static str],
    pub tone: Option<&'static str>,
    pub warning: Option<&'static str>,
}

/// Fixed closing tagline appended to every body, both variants.
const TAGLINE: &str = "👉 Subscribe • Print often • Share with **Light & Grain**";

const DIVIDER: [&str; 3] = ["", "---", ""];

fn push_intro(lines: &mut Vec<String>, intro_heading: &str, intro_lines: &[&str]) {
    lines.push(format!("## {intro_heading}"));
    lines.extend(intro_lines.iter().map(|l| l.to_string()));
    lines.extend(DIVIDER.iter().map(|l| l.to_string()));
}

fn push_section_core(lines: &mut Vec<String>, idx: usize, section: &Section) {
    lines.push(format!("## {}. **{}**", idx, section.title));
    lines.extend(section.explanation.iter().map(|l| l.to_string()));
    lines.push(String::new());
    lines.push("**Examples**".to_string());
    for example in section.examples {
        lines.push(format!("- {example}"));
    }
}

fn push_closing(lines: &mut Vec<String>, action_items: &[&str], final_lines: &[&str]) {
    lines.extend(DIVIDER.iter().map(|l| l.to_string()));
    lines.push("## Try this week".to_string());
    for item in action_items {
        lines.push(format!("- {item}"));
    }
    lines.extend(DIVIDER.iter().map(|l| l.to_string()));
    lines.push("## Final note".to_string());
    lines.extend(final_lines.iter().map(|l| l.to_string()));
    lines.push(String::new());
    lines.push(TAGLINE.to_string());
}

/// The simple skeleton: numbered sections plus a "Quick points" bullet list.
pub fn bullet_body(
    intro_heading: &str,
    intro_lines: &[&str],
    sections: &[Section],
    quick_points: &[&str],
    action_items: &[&str],
    final_lines: &[&str],
) -> String {
    let mut lines = Vec::new();
    push_intro(&mut lines, intro_heading, intro_lines);

    for (idx, section) in sections.iter().enumerate() {
        push_section_core(&mut lines, idx + 1, section);
        lines.extend(DIVIDER.iter().map(|l| l.to_string()));
    }

    lines.push("## Quick points".to_string());
    for point in quick_points {
        lines.push(format!("- {point}"));
    }

    push_closing(&mut lines, action_items, final_lines);
    lines.join("\n")
}

/// The richer skeleton: sections carry tone notes and optional warnings, and
/// the closing block is a mistake/fix comparison table.
pub fn table_body(
    intro_heading: &str,
    intro_lines: &[&str],
    sections: &[Section],
    corrections: &[(&str, &str)],
    action_items: &[&str],
    final_lines: &[&str],
) -> String {
    let mut lines = Vec::new();
    push_intro(&mut lines, intro_heading, intro_lines);

    for (idx, section) in sections.iter().enumerate() {
        push_section_core(&mut lines, idx + 1, section);
        if let Some(tone) = section.tone {
            lines.push(String::new());
            lines.push(format!("*Tone: {tone}*"));
        }
        if let Some(warning) = section.warning {
            lines.push(String::new());
            lines.push(format!("> ⚠️ {warning}"));
        }
        lines.extend(DIVIDER.iter().map(|l| l.to_string()));
    }

    lines.push("## Common mistakes and fixes".to_string());
    lines.push(String::new());
    lines.push("| Mistake | Fix |".to_string());
    lines.push("|---------|-----|".to_string());
    for (mistake, fix) in corrections {
        lines.push(format!("| {mistake} | {fix} |"));
    }

    push_closing(&mut lines, action_items, final_lines);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sections() -> Vec<Section> {
        vec![
            Section {
                title: "Meter for the shadows",
                explanation: &["Negative film holds highlights far better than shadows."],
                examples: &["Spot-meter a shaded wall", "Rate 400 film at 200"],
                tone: Some("practical"),
                warning: Some("Slide film is the opposite; it clips highlights first."),
            },
            Section {
                title: "Bracket when unsure",
                explanation: &["One stop either side costs two frames and saves a shoot."],
                examples: &["-1 / 0 / +1 around the metered reading"],
                tone: None,
                warning: None,
            },
        ]
    }

    #[test]
    fn bullet_body_numbers_sections_in_order() {
        let body = bullet_body(
            "Why metering matters",
            &["Light is the whole game."],
            &sample_sections(),
            &["Shadows first.", "Bracket cheap."],
            &["Shoot one roll at box speed."],
            &["Trust the meter, then learn when not to."],
        );
        assert!(body.contains("## 1. **Meter for the shadows**"));
        assert!(body.contains("## 2. **Bracket when unsure**"));
        let first = body.find("## 1.").unwrap();
        let second = body.find("## 2.").unwrap();
        assert!(first < second);
    }

    #[test]
    fn bullet_body_has_quick_points_and_tagline() {
        let body = bullet_body(
            "Intro",
            &["line"],
            &sample_sections(),
            &["point one"],
            &["do a thing"],
            &["closing"],
        );
        assert!(body.contains("## Quick points\n- point one"));
        assert!(body.contains("## Try this week\n- do a thing"));
        assert!(body.ends_with(TAGLINE));
    }

    #[test]
    fn bullet_body_ignores_tone_and_warning() {
        let body = bullet_body("Intro", &[], &sample_sections(), &[], &[], &[]);
        assert!(!body.contains("*Tone:"));
        assert!(!body.contains("⚠️"));
    }

    #[test]
    fn table_body_renders_comparison_table() {
        let body = table_body(
            "Intro",
            &["line"],
            &sample_sections(),
            &[("Metering off the sky", "Meter off a midtone or the shadows")],
            &["do a thing"],
            &["closing"],
        );
        assert!(body.contains("| Mistake | Fix |"));
        assert!(body.contains("| Metering off the sky | Meter off a midtone or the shadows |"));
        assert!(body.ends_with(TAGLINE));
    }

    #[test]
    fn table_body_emits_warning_only_when_present() {
        let body = table_body("Intro", &[], &sample_sections(), &[], &[], &[]);
        assert_eq!(body.matches("> ⚠️").count(), 1);
        assert_eq!(body.matches("*Tone:").count(), 1);
    }

    #[test]
    fn both_variants_share_divider_convention() {
        let bullets = bullet_body("A", &[], &sample_sections(), &[], &[], &[]);
        let table = table_body("A", &[], &sample_sections(), &[], &[], &[]);
        assert!(bullets.contains("\n---\n"));
        assert!(table.contains("\n---\n"));
    }
}
