//! Grid model, word detection, candidate lookup, autofill search and the
//! Across Lite `.puz` binary codec for building crossword tools.
//!
//! This crate has no opinion on UI, persistence, or where a dictionary's
//! word list comes from on disk; it works entirely in memory from whatever
//! strings and bytes a caller hands it.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = document_features::document_features!()]

pub mod autofill;
mod cell;
mod clue;
mod coordinator;
mod dictionary;
mod direction;
mod entry;
mod error;
mod grid;
mod matcher;
mod pattern;
#[cfg(feature = "puz")]
pub mod puz;
mod word_index;

pub use cell::Cell;
pub use clue::ClueMap;
pub use coordinator::Coordinator;
pub use dictionary::{DictEntry, Dictionary};
pub use direction::Direction;
pub use entry::{Entry, EntryId};
pub use error::{Error, Result};
pub use grid::{CrosswordGrid, Symmetry, MAX_DIMENSION};
pub use matcher::{Matcher, RatingFilter, SortOrder};
pub use pattern::{pattern_of, Pattern, WILDCARD};
pub use word_index::WordIndex;
