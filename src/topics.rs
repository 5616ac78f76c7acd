//! The editorial calendar: a fixed topic catalog and the week rotation.
//!
//! Topics are compile-time constants. Selection is a modulo lookup over the
//! catalog keyed by ISO week number, so any given week index always maps to
//! the same topic and the calendar wraps cleanly after the list is exhausted.
//! ISO week 53 needs no special case: the modulo is unconditional.

use chrono::{Datelike, Utc};

use crate::body::{self, Section};

/// One entry in the editorial calendar. Everything the renderer needs to
/// produce a complete post: front-matter fields plus the pre-rendered body.
#[derive(Debug, Clone)]
pub struct Topic {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub image_url: &'static str,
    pub image_alt: &'static str,
    pub permalink_slug: &'static str,
    pub seo_title: &'static str,
    pub seo_description: &'static str,
    pub body: String,
}

/// Current ISO-8601 week number (1–53), UTC.
pub fn current_week_index() -> i64 {
    i64::from(Utc::now().date_naive().iso_week().week())
}

/// Deterministic topic selection: `(week_index - 1) mod catalog_len`.
///
/// `rem_euclid` keeps the mapping total over all integers, so overrides
/// outside 1–53 still land on a topic instead of panicking.
pub fn topic_for_week(week_index: i64) -> Topic {
    let mut topics = catalog();
    let idx = (week_index - 1).rem_euclid(topics.len() as i64) as usize;
    topics.swap_remove(idx)
}

/// Body shared by the technique-focused topics: the richer skeleton with
/// tone notes, warnings, and a mistake/fix table.
fn technique_body() -> String {
    body::table_body(
        "Why exposure discipline matters",
        &[
            "Film gives you no histogram and no second chance at the scene.",
            "A repeatable metering habit is worth more than any single piece of gear.",
        ],
        &[
            Section {
                title: "Meter for the shadows",
                explanation: &[
                    "Negative film holds overexposed highlights gracefully but loses shadow detail for good.",
                ],
                examples: &[
                    "Spot-meter the darkest area you want detail in, then close down two stops",
                    "Rate 400-speed film at 200 when in doubt",
                ],
                tone: Some("practical, no jargon"),
                warning: Some("Slide film clips highlights first; this advice inverts for E-6."),
            },
            Section {
                title: "Keep a one-line exposure log",
                explanation: &[
                    "Notes turn a bad frame into a lesson instead of a mystery.",
                ],
                examples: &[
                    "Frame number, light, meter reading, what you actually set",
                    "Mark frames where you guessed",
                ],
                tone: Some("encouraging"),
                warning: None,
            },
        ],
        &[
            ("Metering off the sky", "Meter off a midtone or the shadow you care about"),
            ("Trusting the in-camera average in backlight", "Spot-meter the subject, let the background blow out"),
            ("Changing film stock every roll", "Shoot ten rolls of one stock before judging it"),
        ],
        &[
            "Shoot one roll metering shadows only and compare the scans.",
            "Start an exposure log with your next roll.",
        ],
        &[
            "Exposure is a habit, not a talent.",
            "Ten deliberate rolls will teach you more than a year of casual shooting.",
        ],
    )
}

/// Body shared by the process- and community-focused topics: the simple
/// bullet skeleton.
fn process_body() -> String {
    body::bullet_body(
        "Slowing down is the point",
        &[
            "A weekly rhythm of shooting, developing, and printing builds skill faster than bursts of enthusiasm.",
            "Most of the craft lives in the boring, repeatable parts.",
        ],
        &[
            Section {
                title: "Develop on a schedule",
                explanation: &[
                    "Consistent chemistry and timing remove variables, so your negatives tell you about your shooting.",
                ],
                examples: &[
                    "Fix your developer dilution and temperature for a full season",
                    "Keep a dev log next to the tank",
                ],
                tone: None,
                warning: None,
            },
            Section {
                title: "Print small, print often",
                explanation: &[
                    "A 5x7 work print a week beats a gallery print a year.",
                ],
                examples: &[
                    "Pick one frame per roll and live with it on the wall for a week",
                    "Re-print the same negative after a month and compare",
                ],
                tone: None,
                warning: None,
            },
        ],
        &[
            "Consistency beats intensity.",
            "Your negatives are data; keep the process fixed so you can read them.",
            "A visible print queue keeps you shooting.",
        ],
        &[
            "Put one work print on the wall this week.",
            "Write down your full development recipe where you can see it.",
        ],
        &[
            "The darkroom rewards patience more than budget.",
            "Keep the loop small: shoot, develop, print, look, repeat.",
        ],
    )
}

/// The fixed topic catalog, in rotation order.
pub fn catalog() -> Vec<Topic> {
    vec![
        Topic {
            title: "Metering Film Without a Histogram: Habits That Stick",
            excerpt: "A practical guide to shadow metering and why a one-line exposure log changes everything.",
            category: "Technique",
            tags: &["film photography", "metering", "exposure", "beginners"],
            image_url: "https://images.pexels.com/photos/122400/pexels-photo-122400.jpeg",
            image_alt: "Handheld light meter held up against a city street",
            permalink_slug: "metering-film-without-a-histogram",
            seo_title: "Film Metering Habits: Shadow Metering Guide",
            seo_description: "Learn shadow metering for negative film and the simple exposure log that makes every roll a lesson.",
            body: technique_body(),
        },
        Topic {
            title: "A Weekly Darkroom Rhythm Anyone Can Keep",
            excerpt: "How a fixed develop-and-print schedule builds skill faster than bursts of enthusiasm.",
            category: "Process",
            tags: &["darkroom", "printing", "workflow", "film photography"],
            image_url: "https://images.pexels.com/photos/3497522/pexels-photo-3497522.jpeg",
            image_alt: "Prints hanging to dry in a home darkroom",
            permalink_slug: "weekly-darkroom-rhythm",
            seo_title: "Weekly Darkroom Workflow for Film Photographers",
            seo_description: "Build a sustainable weekly develop-and-print rhythm and learn why small consistent prints beat rare big ones.",
            body: process_body(),
        },
        Topic {
            title: "Why Your First Ten Rolls Should Be One Film Stock",
            excerpt: "Changing stocks every roll hides what your shooting is actually doing.",
            category: "Technique",
            tags: &["film stock", "learning", "exposure", "beginners"],
            image_url: "https://images.pexels.com/photos/1002638/pexels-photo-1002638.jpeg",
            image_alt: "Boxes of 35mm film stacked on a shelf",
            permalink_slug: "first-ten-rolls-one-film-stock",
            seo_title: "Learn Faster on Film: One Stock, Ten Rolls",
            seo_description: "Why sticking to a single film stock for ten rolls is the fastest way to learn exposure and development.",
            body: technique_body(),
        },
        Topic {
            title: "Home Development: The Case for Boring Chemistry",
            excerpt: "Fixed dilutions and temperatures turn your negatives into readable feedback.",
            category: "Process",
            tags: &["development", "chemistry", "darkroom", "workflow"],
            image_url: "https://images.pexels.com/photos/4553165/pexels-photo-4553165.jpeg",
            image_alt: "Developing tank and graduated cylinders on a counter",
            permalink_slug: "home-development-boring-chemistry",
            seo_title: "Consistent Film Development at Home",
            seo_description: "Keep developer, dilution, and temperature fixed so your negatives reflect your shooting, not your chemistry.",
            body: process_body(),
        },
        Topic {
            title: "Reading Negatives: What Thin and Dense Frames Tell You",
            excerpt: "Your negatives are a record of every metering decision you made.",
            category: "Technique",
            tags: &["negatives", "exposure", "metering", "film photography"],
            image_url: "https://images.pexels.com/photos/3497524/pexels-photo-3497524.jpeg",
            image_alt: "Strip of negatives held up to a light table",
            permalink_slug: "reading-negatives-thin-and-dense",
            seo_title: "How to Read Film Negatives for Exposure Feedback",
            seo_description: "Learn to read thin and dense negatives and trace them back to the metering decision that caused them.",
            body: technique_body(),
        },
        Topic {
            title: "The Work Print Habit: One Frame a Week on the Wall",
            excerpt: "Living with a small print for a week teaches more than any online critique.",
            category: "Printing",
            tags: &["printing", "work prints", "editing", "darkroom"],
            image_url: "https://images.pexels.com/photos/3062541/pexels-photo-3062541.jpeg",
            image_alt: "Small black and white prints pinned to a wall",
            permalink_slug: "work-print-habit",
            seo_title: "The Weekly Work Print Habit for Photographers",
            seo_description: "Pick one frame per roll, print it small, and live with it. A simple habit that sharpens your editing eye.",
            body: process_body(),
        },
        Topic {
            title: "Pushing Film: When It Helps and What It Costs",
            excerpt: "Push processing trades shadow detail and grain for usable shutter speeds.",
            category: "Technique",
            tags: &["push processing", "low light", "development", "film photography"],
            image_url: "https://images.pexels.com/photos/2873486/pexels-photo-2873486.jpeg",
            image_alt: "Dimly lit street scene at night",
            permalink_slug: "pushing-film-helps-and-costs",
            seo_title: "Push Processing Film: Benefits and Trade-offs",
            seo_description: "Understand what pushing film actually does to shadows, grain, and contrast, and when the trade is worth it.",
            body: technique_body(),
        },
        Topic {
            title: "Scanning at Home Without Losing Your Mind",
            excerpt: "A repeatable flat-scan workflow keeps your edits honest and your files consistent.",
            category: "Process",
            tags: &["scanning", "workflow", "hybrid", "film photography"],
            image_url: "https://images.pexels.com/photos/4792282/pexels-photo-4792282.jpeg",
            image_alt: "Film scanner with a negative strip loaded",
            permalink_slug: "scanning-at-home",
            seo_title: "Home Film Scanning Workflow That Stays Consistent",
            seo_description: "Set up a flat-scan workflow with fixed settings so your scans reflect your negatives, scan after scan.",
            body: process_body(),
        },
        Topic {
            title: "Building a Photo Walk Group That Actually Meets",
            excerpt: "Small, regular, low-pressure walks keep a local film community alive.",
            category: "Community",
            tags: &["community", "photo walks", "film photography", "habits"],
            image_url: "https://images.pexels.com/photos/1264210/pexels-photo-1264210.jpeg",
            image_alt: "Group of photographers walking down a street",
            permalink_slug: "photo-walk-group-that-meets",
            seo_title: "Start a Photo Walk Group That Lasts",
            seo_description: "Practical tips for starting a small, regular photo walk group: fixed day, fixed route, zero pressure.",
            body: process_body(),
        },
        Topic {
            title: "One Camera, One Lens, One Year",
            excerpt: "Constraint is the cheapest upgrade available to any photographer.",
            category: "Technique",
            tags: &["constraints", "gear", "learning", "film photography"],
            image_url: "https://images.pexels.com/photos/821749/pexels-photo-821749.jpeg",
            image_alt: "Single rangefinder camera on a wooden table",
            permalink_slug: "one-camera-one-lens-one-year",
            seo_title: "One Camera One Lens: A Year of Constraint",
            seo_description: "What a year with a single camera and lens teaches about seeing, and why constraint beats new gear.",
            body: technique_body(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_is_cyclical() {
        let n = catalog().len() as i64;
        for w in [1, 2, 17, 53] {
            assert_eq!(topic_for_week(w).title, topic_for_week(w + n).title);
        }
    }

    #[test]
    fn week_one_maps_to_first_topic() {
        assert_eq!(topic_for_week(1).title, catalog()[0].title);
    }

    #[test]
    fn consecutive_weeks_advance_by_one() {
        let topics = catalog();
        assert_eq!(topic_for_week(2).title, topics[1].title);
        assert_eq!(topic_for_week(topics.len() as i64).title, topics.last().unwrap().title);
    }

    #[test]
    fn wraps_after_catalog_exhausted() {
        let n = catalog().len() as i64;
        assert_eq!(topic_for_week(n + 1).title, catalog()[0].title);
    }

    #[test]
    fn selection_is_total_over_integers() {
        // Out-of-range overrides still land on a topic.
        topic_for_week(0);
        topic_for_week(-7);
        topic_for_week(1000);
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        assert_eq!(topic_for_week(5).title, topic_for_week(5).title);
    }

    #[test]
    fn current_week_index_is_in_iso_range() {
        let w = current_week_index();
        assert!((1..=53).contains(&w));
    }

    #[test]
    fn every_topic_has_required_fields() {
        for topic in catalog() {
            assert!(!topic.title.is_empty());
            assert!(!topic.excerpt.is_empty());
            assert!(!topic.category.is_empty());
            assert!(!topic.tags.is_empty());
            assert!(topic.image_url.starts_with("https://"));
            assert!(!topic.permalink_slug.is_empty());
            assert!(!topic.body.is_empty());
        }
    }

    #[test]
    fn titles_are_unique() {
        let topics = catalog();
        let mut titles: Vec<_> = topics.iter().map(|t| t.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), topics.len());
    }
}
