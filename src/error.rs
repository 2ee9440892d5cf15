use thiserror::Error;

/// Every way a run can fail. Binaries map any of these to a failed run.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("Missing one or more Twitter credentials in environment variables.")]
    MissingCredentials,

    #[error("Could not resolve team_id for {full_name} / {abbreviation}")]
    TeamNotFound {
        full_name: String,
        abbreviation: String,
    },

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("{url} returned HTTP {status}: {body}")]
    HttpStatus { url: String, status: u16, body: String },

    #[error("Twitter post failed [{status}]: {body}")]
    PostRejected { status: u16, body: String },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to sign request: {0}")]
    Signing(String),
}
