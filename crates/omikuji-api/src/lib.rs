//! AniList GraphQL client for fetching a user's anime list collection.

pub mod anilist;
pub mod traits;

pub use anilist::{AniListClient, AniListError};
pub use traits::ListSource;
