//! Generic rectangular grid and coordinate types shared by the puzzle crates.
//!
//! [`Grid<T>`] is a flat, row-major backing store indexed by [`Position`]. It
//! carries no notion of what `T` means; crates built on top of it (crosswords,
//! word search boards, and the like) layer their own cell semantics on top.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod grid;
mod macros;
mod offset;
mod position;

pub use grid::*;
pub use offset::*;
pub use position::*;
