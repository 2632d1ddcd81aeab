use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::{debug, warn};
use thiserror::Error;

use crate::catalog::{Browsable, Catalog, Episode, Slide, Track};
use crate::control::Control;
use crate::cursor::{Cursor, CursorError};
use crate::shared_vec_cursor::SharedVecCursor;

/// The navigators of one browsing session. Each page owns its cursor; nothing is
/// looked up by name. A page whose collection is empty has no navigator, and only
/// that page reports `InvalidSize` when used.
#[derive(Debug, Clone)]
pub struct Session {
    slides: Option<SharedVecCursor<Slide>>,
    tracks: Option<SharedVecCursor<Track>>,
    episodes: Option<SharedVecCursor<Episode>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Slides,
    Tracks,
    Episodes,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown page {0:?}, expected slides, tracks or episodes")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slides" => Ok(Page::Slides),
            "tracks" => Ok(Page::Tracks),
            "episodes" => Ok(Page::Episodes),
            _ => Err(UnknownPage(s.to_string())),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Slides => write!(f, "slides"),
            Page::Tracks => write!(f, "tracks"),
            Page::Episodes => write!(f, "episodes"),
        }
    }
}

fn built<T: Browsable>(page: Page, items: &Arc<Vec<T>>) -> Option<SharedVecCursor<T>> {
    match T::cursor(items.clone()) {
        Ok(cursor) => Some(cursor),
        Err(e) => {
            warn!("{} page unavailable: {}", page, e);
            None
        }
    }
}

impl Session {
    /// Starts every navigator at the first item.
    pub fn new(catalog: &Catalog) -> Self {
        Session {
            slides: built(Page::Slides, &catalog.slides),
            tracks: built(Page::Tracks, &catalog.tracks),
            episodes: built(Page::Episodes, &catalog.episodes),
        }
    }

    pub fn slides(&self) -> Result<&SharedVecCursor<Slide>, CursorError> {
        self.slides.as_ref().ok_or(CursorError::InvalidSize)
    }

    pub fn tracks(&self) -> Result<&SharedVecCursor<Track>, CursorError> {
        self.tracks.as_ref().ok_or(CursorError::InvalidSize)
    }

    pub fn episodes(&self) -> Result<&SharedVecCursor<Episode>, CursorError> {
        self.episodes.as_ref().ok_or(CursorError::InvalidSize)
    }

    pub fn navigator(&mut self, page: Page) -> Result<&mut dyn Cursor, CursorError> {
        let cursor: Option<&mut dyn Cursor> = match page {
            Page::Slides => self.slides.as_mut().map(|c| c as &mut dyn Cursor),
            Page::Tracks => self.tracks.as_mut().map(|c| c as &mut dyn Cursor),
            Page::Episodes => self.episodes.as_mut().map(|c| c as &mut dyn Cursor),
        };
        cursor.ok_or(CursorError::InvalidSize)
    }

    /// Applies `control` to the navigator of `page` only.
    pub fn apply(&mut self, page: Page, control: Control) -> Result<usize, CursorError> {
        let result = self.navigator(page).and_then(|cursor| cursor.apply(control));
        debug!("{} {}: {:?}", page, control, result);
        result
    }
}
