//! Prev/next/jump navigation over fixed collections, and feature assembly in front
//! of a trained grade model.

pub use catalog::{Browsable, Catalog, Episode, Slide, Track};
pub use config::{Config, LoadError, CONFIG_ENV};
pub use control::{Control, InvalidControl};
pub use cursor::{BoundaryPolicy, Cursor, CursorError};
pub use index_cursor::IndexCursor;
pub use session::{Page, Session, UnknownPage};
pub use shared_vec_cursor::SharedVecCursor;
pub use slice_cursor::SliceCursor;

mod catalog;
mod config;
mod control;
mod cursor;
pub mod features;
mod index_cursor;
mod session;
mod shared_vec_cursor;
mod slice_cursor;
