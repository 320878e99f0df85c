use serde::{Deserialize, Serialize};

// ── GraphQL response wrappers ────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQLError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    #[serde(default)]
    pub message: String,
}

// ── User list query ──────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MediaListCollectionResponse {
    #[serde(rename = "MediaListCollection")]
    pub media_list_collection: Option<MediaListCollection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaListCollection {
    #[serde(default)]
    pub lists: Vec<MediaListGroup>,
}

/// One named partition of a user's list ("Watching", "Completed", ...).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaListGroup {
    #[serde(default)]
    pub entries: Vec<ListEntry>,
}

/// The user's personal record for one title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEntry {
    pub media: Media,
    pub status: String,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub title: MediaTitle,
    pub episodes: Option<u32>,
    pub format: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub description: Option<String>,
    pub average_score: Option<u32>,
    pub season_year: Option<u32>,
    pub cover_image: Option<CoverImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaTitle {
    pub english: Option<String>,
    #[serde(default)]
    pub romaji: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverImage {
    pub medium: Option<String>,
    pub large: Option<String>,
    pub extra_large: Option<String>,
}

// ── Conversions ──────────────────────────────────────────────────

impl MediaTitle {
    /// English title when AniList has one, romaji otherwise.
    pub fn preferred(&self) -> &str {
        match self.english.as_deref() {
            Some(english) if !english.is_empty() => english,
            _ => &self.romaji,
        }
    }
}

impl CoverImage {
    /// Highest-resolution cover URL available.
    pub fn best_url(&self) -> Option<&str> {
        [&self.extra_large, &self.large, &self.medium]
            .into_iter()
            .filter_map(|url| url.as_deref())
            .find(|url| !url.is_empty())
    }
}

impl Media {
    pub fn cover_url(&self) -> Option<&str> {
        self.cover_image.as_ref().and_then(CoverImage::best_url)
    }
}

impl MediaListCollection {
    /// Flatten all groups into one pool, dropping the grouping.
    pub fn into_entries(self) -> Vec<ListEntry> {
        self.lists
            .into_iter()
            .flat_map(|group| group.entries)
            .collect()
    }
}
