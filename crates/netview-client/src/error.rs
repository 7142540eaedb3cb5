use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("controller returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("layout {0:?} not found")]
    LayoutNotFound(String),
}

impl From<ureq::Error> for ClientError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, resp) => {
                let body = resp.into_string().unwrap_or_default();
                // Bodies can be arbitrarily large error pages.
                let body = body.chars().take(200).collect();
                ClientError::Http { status, body }
            }
            ureq::Error::Transport(t) => ClientError::Transport(t.to_string()),
        }
    }
}
