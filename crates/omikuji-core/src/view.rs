//! Read-only presentation of a picked list entry.

use std::fmt;

use omikuji_api::anilist::types::ListEntry;
use serde::Serialize;

use crate::format::format_description;

const NOT_AVAILABLE: &str = "N/A";
const NOT_RATED: &str = "Not rated";

/// Every field of the result card, already rendered to text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryView {
    pub title: String,
    pub episodes: String,
    pub format: String,
    pub your_status: String,
    pub your_score: String,
    pub average_score: String,
    pub year: String,
    pub genres: Vec<String>,
    pub description: String,
    pub cover_url: Option<String>,
}

impl EntryView {
    pub fn new(entry: &ListEntry) -> Self {
        let media = &entry.media;

        Self {
            title: media.title.preferred().to_string(),
            episodes: or_na(media.episodes),
            format: media
                .format
                .clone()
                .filter(|f| !f.is_empty())
                .unwrap_or_else(|| NOT_AVAILABLE.into()),
            your_status: entry.status.clone(),
            your_score: match entry.score {
                Some(score) if score > 0.0 => score.to_string(),
                _ => NOT_RATED.into(),
            },
            average_score: media
                .average_score
                .map(|s| format!("{s}%"))
                .unwrap_or_else(|| NOT_AVAILABLE.into()),
            year: or_na(media.season_year),
            genres: media.genres.clone(),
            description: format_description(media.description.as_deref()),
            cover_url: media.cover_url().map(str::to_string),
        }
    }
}

fn or_na(value: Option<u32>) -> String {
    match value {
        Some(v) if v > 0 => v.to_string(),
        _ => NOT_AVAILABLE.into(),
    }
}

impl fmt::Display for EntryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count().max(1)))?;
        if let Some(url) = &self.cover_url {
            writeln!(f, "Cover:          {url}")?;
        }
        writeln!(f, "Episodes:       {}", self.episodes)?;
        writeln!(f, "Format:         {}", self.format)?;
        writeln!(f, "Your Status:    {}", self.your_status)?;
        writeln!(f, "Your Score:     {}", self.your_score)?;
        writeln!(f, "Average Score:  {}", self.average_score)?;
        writeln!(f, "Year:           {}", self.year)?;

        if !self.genres.is_empty() {
            writeln!(f)?;
            writeln!(f, "Genres")?;
            let tags: Vec<String> = self.genres.iter().map(|g| format!("[{g}]")).collect();
            writeln!(f, "{}", tags.join(" "))?;
        }

        writeln!(f)?;
        writeln!(f, "Description")?;
        write!(f, "{}", self.description)
    }
}

#[cfg(test)]
mod tests {
    use omikuji_api::anilist::types::{CoverImage, Media, MediaTitle};

    use super::*;

    fn frieren() -> ListEntry {
        ListEntry {
            media: Media {
                title: MediaTitle {
                    english: Some("Frieren: Beyond Journey's End".into()),
                    romaji: "Sousou no Frieren".into(),
                },
                episodes: Some(28),
                format: Some("TV".into()),
                status: Some("FINISHED".into()),
                genres: vec!["Adventure".into(), "Drama".into()],
                description: Some("An elf<br><br>and her <i>journey</i>.".into()),
                average_score: Some(90),
                season_year: Some(2023),
                cover_image: Some(CoverImage {
                    medium: Some("small.jpg".into()),
                    large: Some("medium.jpg".into()),
                    extra_large: Some("large.jpg".into()),
                }),
            },
            status: "CURRENT".into(),
            score: Some(9.5),
        }
    }

    #[test]
    fn test_full_entry() {
        let view = EntryView::new(&frieren());
        assert_eq!(view.title, "Frieren: Beyond Journey's End");
        assert_eq!(view.episodes, "28");
        assert_eq!(view.format, "TV");
        assert_eq!(view.your_status, "CURRENT");
        assert_eq!(view.your_score, "9.5");
        assert_eq!(view.average_score, "90%");
        assert_eq!(view.year, "2023");
        assert_eq!(view.genres, vec!["Adventure", "Drama"]);
        assert_eq!(view.description, "An elf\nand her journey.");
        assert_eq!(view.cover_url.as_deref(), Some("large.jpg"));
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let mut entry = frieren();
        entry.media.title.english = None;
        entry.media.episodes = None;
        entry.media.format = None;
        entry.media.average_score = None;
        entry.media.season_year = None;
        entry.media.description = None;
        entry.media.cover_image = None;
        entry.score = Some(0.0);

        let view = EntryView::new(&entry);
        assert_eq!(view.title, "Sousou no Frieren");
        assert_eq!(view.episodes, "N/A");
        assert_eq!(view.format, "N/A");
        assert_eq!(view.your_score, "Not rated");
        assert_eq!(view.average_score, "N/A");
        assert_eq!(view.year, "N/A");
        assert_eq!(view.description, "No description available.");
        assert!(view.cover_url.is_none());
    }

    #[test]
    fn test_display_omits_cover_line_without_image() {
        let mut entry = frieren();
        entry.media.cover_image = Some(CoverImage::default());
        let text = EntryView::new(&entry).to_string();
        assert!(!text.contains("Cover:"));
        assert!(text.starts_with("Frieren: Beyond Journey's End\n"));
        assert!(text.contains("[Adventure] [Drama]"));
        assert!(text.ends_with("An elf\nand her journey."));
    }

    #[test]
    fn test_display_shows_best_cover() {
        let text = EntryView::new(&frieren()).to_string();
        assert!(text.contains("Cover:          large.jpg"));
    }

    #[test]
    fn test_serializes_for_json_output() {
        let json = serde_json::to_value(EntryView::new(&frieren())).unwrap();
        assert_eq!(json["title"], "Frieren: Beyond Journey's End");
        assert_eq!(json["genres"][1], "Drama");
        assert_eq!(json["cover_url"], "large.jpg");
    }
}
