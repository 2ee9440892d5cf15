pub mod game;
pub mod team;

use serde::Deserialize;

/// BallDontLie list envelope: `{"data": [...], "meta": {...}}`. Only `data` is read.
#[derive(Debug, Deserialize)]
pub struct ApiList<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}
