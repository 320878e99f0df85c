use omikuji_api::AniListError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OmikujiError {
    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a random pick failed. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickError {
    #[error("Please enter a username")]
    EmptyUsername,

    /// First message of the upstream GraphQL `errors` array, verbatim.
    #[error("{0}")]
    Upstream(String),

    #[error("no anime list found for username: {0}")]
    NoList(String),

    #[error("no anime found in list")]
    EmptyList,

    #[error("error fetching anime: {0}")]
    Fetch(String),
}

impl From<AniListError> for PickError {
    fn from(err: AniListError) -> Self {
        let cause = match err {
            AniListError::GraphQl(message) if !message.trim().is_empty() => {
                return Self::Upstream(message)
            }
            AniListError::GraphQl(_) => String::new(),
            other => other.to_string(),
        };
        if cause.trim().is_empty() {
            Self::Fetch("unknown error".into())
        } else {
            Self::Fetch(cause)
        }
    }
}
