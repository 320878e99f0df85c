//! The seam between list fetching and everything that consumes a list.
//!
//! [`AniListClient`](crate::AniListClient) is the production source; tests
//! substitute an in-memory one so selection can run without the network.

use std::future::Future;

use crate::anilist::types::MediaListCollection;

/// Something that can produce a user's anime list collection.
pub trait ListSource: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the full anime list collection for `username`.
    ///
    /// `Ok(None)` means the upstream answered but returned no collection.
    fn fetch_collection(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<MediaListCollection>, Self::Error>> + Send;
}
