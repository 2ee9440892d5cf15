use serde::Deserialize;
use tracing::{error, info, info_span};

use crate::config::{Config, OAuthKeys};
use crate::error::BotError;
use crate::oauth;

/// Something that can publish a finished message.
pub trait Publisher {
    /// Publish `text`, returning the created post id when the service reports one.
    fn publish(&self, keys: &OAuthKeys, text: &str) -> Result<Option<String>, BotError>;
}

#[derive(Debug, Deserialize)]
struct CreatedPost {
    #[serde(default)]
    data: Option<CreatedPostData>,
}

#[derive(Debug, Deserialize)]
struct CreatedPostData {
    #[serde(default)]
    id: Option<String>,
}

/// Pull `data.id` out of a create-post response body.
pub fn parse_post_id(body: &str) -> Option<String> {
    serde_json::from_str::<CreatedPost>(body)
        .ok()
        .and_then(|post| post.data)
        .and_then(|data| data.id)
}

/// X/Twitter v2 client that posts on behalf of the configured account.
#[derive(Clone)]
pub struct Twitter {
    agent: ureq::Agent,
    tweets_url: String,
}

impl Twitter {
    pub fn new(config: &Config) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            tweets_url: format!("{}/2/tweets", config.twitter_base_url.trim_end_matches('/')),
        }
    }

    pub fn tweets_url(&self) -> &str {
        &self.tweets_url
    }
}

impl Publisher for Twitter {
    fn publish(&self, keys: &OAuthKeys, text: &str) -> Result<Option<String>, BotError> {
        let nonce = oauth::generate_nonce();
        let timestamp = chrono::Utc::now().timestamp();
        let auth = oauth::authorization_header("POST", &self.tweets_url, keys, &nonce, timestamp)?;
        let payload = serde_json::json!({ "text": text });

        let response_result = {
            let _span = info_span!("twitter_post", url = %self.tweets_url).entered();
            self.agent
                .post(&self.tweets_url)
                .header("Authorization", auth.as_str())
                .send_json(&payload)
        };
        let response = match response_result {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Failed to reach posting endpoint");
                return Err(BotError::Transport { url: self.tweets_url.clone(), source: e });
            }
        };

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();
        let body = match body_reader.read_to_string() {
            Ok(body) => body,
            Err(e) => {
                error!(status, error = %e, "Failed to read posting response body");
                format!("<unreadable response body: {}>", e)
            }
        };

        if status >= 400 {
            error!(status, body = %body, "Twitter rejected the post");
            return Err(BotError::PostRejected { status, body });
        }

        let id = parse_post_id(&body);
        info!(status, tweet_id = ?id, "Tweet posted");
        Ok(id)
    }
}
