//! Fetch a user's anime list and draw one entry from it.

use omikuji_api::anilist::types::{ListEntry, MediaListCollection};
use omikuji_api::ListSource;
use rand::Rng;

use crate::error::PickError;

/// Trim the submitted username, rejecting blank input.
pub fn validate_username(input: &str) -> Result<&str, PickError> {
    let username = input.trim();
    if username.is_empty() {
        Err(PickError::EmptyUsername)
    } else {
        Ok(username)
    }
}

/// Pick one entry uniformly from every list group of `collection`.
///
/// `username` only feeds the "no list" error message.
pub fn pick_entry<R: Rng>(
    collection: Option<MediaListCollection>,
    username: &str,
    rng: &mut R,
) -> Result<ListEntry, PickError> {
    let collection = match collection {
        Some(c) if !c.lists.is_empty() => c,
        _ => return Err(PickError::NoList(username.to_string())),
    };

    let groups = collection.lists.len();
    let mut pool = collection.into_entries();
    if pool.is_empty() {
        return Err(PickError::EmptyList);
    }

    let index = rng.gen_range(0..pool.len());
    tracing::debug!(groups, pool = pool.len(), index, "picked list entry");
    Ok(pool.swap_remove(index))
}

/// Validate, fetch once, and pick. No retries.
pub async fn fetch_random_entry<S, R>(
    source: &S,
    input: &str,
    rng: &mut R,
) -> Result<ListEntry, PickError>
where
    S: ListSource,
    PickError: From<S::Error>,
    R: Rng,
{
    let username = validate_username(input)?;
    let collection = source.fetch_collection(username).await?;
    pick_entry(collection, username, rng)
}
