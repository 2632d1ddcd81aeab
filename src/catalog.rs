use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::config::{read_json, LoadError};
use crate::cursor::{BoundaryPolicy, CursorError};
use crate::shared_vec_cursor::SharedVecCursor;

/// A record kind a page browses, with the boundary policy that page navigates it by.
pub trait Browsable: Sized {
    const POLICY: BoundaryPolicy;

    /// A cursor over `items` at the first position, using this kind's policy.
    fn cursor(items: Arc<Vec<Self>>) -> Result<SharedVecCursor<Self>, CursorError> {
        SharedVecCursor::at_start(items, Self::POLICY)
    }
}

/// Carousel image.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub path: String,
    pub caption: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub singer: String,
    pub audio_url: String,
    pub cover_url: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub title: String,
    pub url: String,
    pub intro: String,
    #[serde(default)]
    pub cast: Vec<String>,
}

impl Browsable for Slide {
    const POLICY: BoundaryPolicy = BoundaryPolicy::Clamp;
}

impl Browsable for Track {
    const POLICY: BoundaryPolicy = BoundaryPolicy::Wrap;
}

// Episodes are also reached by direct jumps from the episode list.
impl Browsable for Episode {
    const POLICY: BoundaryPolicy = BoundaryPolicy::Clamp;
}

#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    slides: Vec<Slide>,
    #[serde(default)]
    tracks: Vec<Track>,
    #[serde(default)]
    episodes: Vec<Episode>,
}

/// Every collection the pages browse, loaded once and then only read.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub slides: Arc<Vec<Slide>>,
    pub tracks: Arc<Vec<Track>>,
    pub episodes: Arc<Vec<Episode>>,
}

impl Catalog {
    pub fn new(slides: Vec<Slide>, tracks: Vec<Track>, episodes: Vec<Episode>) -> Self {
        Catalog {
            slides: Arc::new(slides),
            tracks: Arc::new(tracks),
            episodes: Arc::new(episodes),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let raw: RawCatalog = read_json(path)?;
        Ok(Self::from_raw(raw))
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawCatalog) -> Self {
        Catalog::new(raw.slides, raw.tracks, raw.episodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;

    const CATALOG: &str = r#"{
        "slides": [
            { "path": "intro.png", "caption": "Project overview" },
            { "path": "majors.png", "caption": "Major analysis" }
        ],
        "tracks": [
            { "title": "Song A", "singer": "Singer A", "audio_url": "a.mp3", "cover_url": "a.jpg" }
        ],
        "episodes": [
            { "title": "Episode 1", "url": "1.mp4", "intro": "Pilot", "cast": ["Lead"] },
            { "title": "Episode 2", "url": "2.mp4", "intro": "Sequel" }
        ]
    }"#;

    #[test]
    fn parse_catalog() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        assert_eq!(catalog.slides.len(), 2);
        assert_eq!(catalog.slides[1].caption, "Major analysis");
        assert_eq!(catalog.tracks[0].singer, "Singer A");
        assert_eq!(catalog.episodes[0].cast, vec!["Lead".to_string()]);
        assert!(catalog.episodes[1].cast.is_empty());
    }

    #[test]
    fn missing_collections_are_empty() {
        let catalog = Catalog::from_json(r#"{ "tracks": [] }"#).unwrap();
        assert!(catalog.slides.is_empty());
        assert_eq!(
            Slide::cursor(catalog.slides.clone()).unwrap_err(),
            CursorError::InvalidSize
        );
    }

    #[test]
    fn policies_per_record_kind() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let mut slides = Slide::cursor(catalog.slides.clone()).unwrap();
        slides.previous();
        assert_eq!(slides.current(), 0);

        let mut tracks = Track::cursor(catalog.tracks.clone()).unwrap();
        assert_eq!(tracks.policy(), BoundaryPolicy::Wrap);
        tracks.next();
        assert_eq!(tracks.item().title, "Song A");
    }
}
