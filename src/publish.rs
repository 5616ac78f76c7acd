//! Best-effort social cross-posting.
//!
//! Each platform is one [`Platform`] implementation guarded by its own
//! credential check. The driver walks a fixed registry (LinkedIn →
//! Instagram → Medium) sequentially; a skip or failure on one platform never
//! blocks the next. Missing credentials are a skip, not an error. There are
//! no retries: each platform gets exactly one shot per run.
//!
//! Instagram is the only two-step flow: create a media container, then
//! publish it by the returned creation id. A response without a usable id is
//! fatal for Instagram only.

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::http::{HttpError, Transport};

const LINKEDIN_POSTS_URL: &str = "https://api.linkedin.com/v2/ugcPosts";
const INSTAGRAM_GRAPH_BASE: &str = "https://graph.facebook.com/v20.0";
const MEDIUM_API_BASE: &str = "https://api.medium.com/v1";

/// Logged response bodies are cut to this many characters.
const RESPONSE_SNIPPET_LEN: usize = 160;

/// Everything the platforms need from the post being published.
#[derive(Debug, Clone)]
pub struct PostContext {
    pub title: String,
    pub excerpt: String,
    pub body: String,
    pub article_url: String,
    pub image_url: Option<String>,
}

impl PostContext {
    /// Short-form share text: title, blank line, excerpt.
    fn share_text(&self) -> String {
        format!("{}\n\n{}", self.title, self.excerpt)
    }
}

/// What happened for one platform on one run.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Not attempted: missing credentials or missing required media.
    Skipped(String),
    /// Dry-run mode: describes the action that would have been taken.
    DryRun(String),
    /// The platform accepted (or at least answered) the publish call.
    Published { status: u16, snippet: String },
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("{0}")]
    Http(#[from] HttpError),
    #[error("invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed creating media container (status={status}): {body}")]
    NoCreationId { status: u16, body: String },
}

/// A social platform integration. One implementation per platform; the
/// credential-presence guard lives inside `publish` so every platform is
/// self-contained.
pub trait Platform {
    fn name(&self) -> &'static str;

    fn publish(
        &self,
        post: &PostContext,
        transport: &dyn Transport,
        dry_run: bool,
    ) -> Result<Outcome, PublishError>;
}

/// The fixed dispatch registry, in order.
pub fn default_platforms() -> Vec<Box<dyn Platform>> {
    vec![
        Box::new(Linkedin::from_env()),
        Box::new(Instagram::from_env()),
        Box::new(Medium::from_env()),
    ]
}

/// Fan a post out to every platform in registry order.
///
/// Sequential, one shot each. A skip or error on one platform is captured in
/// its slot of the result and never blocks the platforms after it.
pub fn publish_all(
    platforms: &[Box<dyn Platform>],
    post: &PostContext,
    transport: &dyn Transport,
    dry_run: bool,
) -> Vec<(&'static str, Result<Outcome, PublishError>)> {
    platforms
        .iter()
        .map(|platform| (platform.name(), platform.publish(post, transport, dry_run)))
        .collect()
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

fn snippet(body: &str) -> String {
    body.chars().take(RESPONSE_SNIPPET_LEN).collect()
}

// ============================================================================
// LinkedIn
// ============================================================================

struct LinkedinAuth {
    token: String,
    person_urn: String,
}

/// LinkedIn UGC share: one POST with the share text and article link.
pub struct Linkedin {
    auth: Option<LinkedinAuth>,
}

impl Linkedin {
    pub fn from_env() -> Self {
        let auth = env_nonempty("LINKEDIN_ACCESS_TOKEN")
            .zip(env_nonempty("LINKEDIN_PERSON_URN"))
            .map(|(token, person_urn)| LinkedinAuth { token, person_urn });
        Self { auth }
    }

    pub fn with_credentials(token: impl Into<String>, person_urn: impl Into<String>) -> Self {
        Self {
            auth: Some(LinkedinAuth {
                token: token.into(),
                person_urn: person_urn.into(),
            }),
        }
    }
}

impl Platform for Linkedin {
    fn name(&self) -> &'static str {
        "linkedin"
    }

    fn publish(
        &self,
        post: &PostContext,
        transport: &dyn Transport,
        dry_run: bool,
    ) -> Result<Outcome, PublishError> {
        let Some(auth) = &self.auth else {
            return Ok(Outcome::Skipped(
                "missing LINKEDIN_ACCESS_TOKEN or LINKEDIN_PERSON_URN".to_string(),
            ));
        };

        let payload = json!({
            "author": auth.person_urn,
            "lifecycleState": "PUBLISHED",
            "specificContent": {
                "com.linkedin.ugc.ShareContent": {
                    "shareCommentary": {
                        "text": format!("{}\n\nRead more: {}", post.share_text(), post.article_url),
                    },
                    "shareMediaCategory": "NONE",
                }
            },
            "visibility": {
                "com.linkedin.ugc.MemberNetworkVisibility": "PUBLIC",
            },
        });

        if dry_run {
            return Ok(Outcome::DryRun("would publish post".to_string()));
        }

        let headers = [
            bearer(&auth.token),
            ("X-Restli-Protocol-Version", "2.0.0".to_string()),
        ];
        let response = transport.post_json(LINKEDIN_POSTS_URL, &payload, &headers)?;
        Ok(Outcome::Published {
            status: response.status,
            snippet: snippet(&response.body),
        })
    }
}

// ============================================================================
// Instagram
// ============================================================================

struct InstagramAuth {
    token: String,
    account_id: String,
}

/// Instagram Graph API: create a media container, then publish it. Requires
/// an image; posts without an `image:` URL are skipped.
pub struct Instagram {
    auth: Option<InstagramAuth>,
}

/// Container-creation response. Everything except `id` is ignored.
#[derive(Debug, Deserialize)]
struct MediaContainer {
    id: Option<String>,
}

impl Instagram {
    pub fn from_env() -> Self {
        let auth = env_nonempty("INSTAGRAM_ACCESS_TOKEN")
            .zip(env_nonempty("INSTAGRAM_ACCOUNT_ID"))
            .map(|(token, account_id)| InstagramAuth { token, account_id });
        Self { auth }
    }

    pub fn with_credentials(token: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            auth: Some(InstagramAuth {
                token: token.into(),
                account_id: account_id.into(),
            }),
        }
    }
}

impl Platform for Instagram {
    fn name(&self) -> &'static str {
        "instagram"
    }

    fn publish(
        &self,
        post: &PostContext,
        transport: &dyn Transport,
        dry_run: bool,
    ) -> Result<Outcome, PublishError> {
        let Some(auth) = &self.auth else {
            return Ok(Outcome::Skipped(
                "missing INSTAGRAM_ACCESS_TOKEN or INSTAGRAM_ACCOUNT_ID".to_string(),
            ));
        };
        let Some(image_url) = &post.image_url else {
            return Ok(Outcome::Skipped(
                "post has no `image:` URL in front matter".to_string(),
            ));
        };

        if dry_run {
            return Ok(Outcome::DryRun(
                "would create media container + publish".to_string(),
            ));
        }

        let caption = format!("{}\n\nRead more: {}", post.share_text(), post.article_url);
        let create_url = format!("{INSTAGRAM_GRAPH_BASE}/{}/media", auth.account_id);
        let publish_url = format!("{INSTAGRAM_GRAPH_BASE}/{}/media_publish", auth.account_id);

        // The Graph API takes the token in the body, not a header.
        let container_payload = json!({
            "image_url": image_url,
            "caption": caption,
            "access_token": auth.token,
        });
        let created = transport.post_json(&create_url, &container_payload, &[])?;
        let container: MediaContainer = serde_json::from_str(&created.body)?;
        let creation_id = container.id.ok_or_else(|| PublishError::NoCreationId {
            status: created.status,
            body: created.body.clone(),
        })?;

        let publish_payload = json!({
            "creation_id": creation_id,
            "access_token": auth.token,
        });
        let response = transport.post_json(&publish_url, &publish_payload, &[])?;
        Ok(Outcome::Published {
            status: response.status,
            snippet: snippet(&response.body),
        })
    }
}

// ============================================================================
// Medium
// ============================================================================

struct MediumAuth {
    token: String,
    user_id: String,
}

/// Medium long-form import: the full Markdown body with a canonical-source
/// footer, published publicly.
pub struct Medium {
    auth: Option<MediumAuth>,
}

impl Medium {
    pub fn from_env() -> Self {
        let auth = env_nonempty("MEDIUM_TOKEN")
            .zip(env_nonempty("MEDIUM_USER_ID"))
            .map(|(token, user_id)| MediumAuth { token, user_id });
        Self { auth }
    }

    pub fn with_credentials(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            auth: Some(MediumAuth {
                token: token.into(),
                user_id: user_id.into(),
            }),
        }
    }
}

impl Platform for Medium {
    fn name(&self) -> &'static str {
        "medium"
    }

    fn publish(
        &self,
        post: &PostContext,
        transport: &dyn Transport,
        dry_run: bool,
    ) -> Result<Outcome, PublishError> {
        let Some(auth) = &self.auth else {
            return Ok(Outcome::Skipped(
                "missing MEDIUM_TOKEN or MEDIUM_USER_ID".to_string(),
            ));
        };

        let content = format!(
            "{}\n\nOriginally published: [{url}]({url})",
            post.body,
            url = post.article_url
        );
        let payload = json!({
            "title": post.title,
            "contentFormat": "markdown",
            "content": content,
            "publishStatus": "public",
        });

        if dry_run {
            return Ok(Outcome::DryRun("would publish article".to_string()));
        }

        let url = format!("{MEDIUM_API_BASE}/users/{}/posts", auth.user_id);
        let headers = [bearer(&auth.token)];
        let response = transport.post_json(&url, &payload, &headers)?;
        Ok(Outcome::Published {
            status: response.status,
            snippet: snippet(&response.body),
        })
    }
}
