use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{status} from {url}")]
    Status { status: u16, url: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("empty response body")]
    EmptyBody,

    #[error("invalid hero id {0:?}")]
    InvalidId(String),
}
