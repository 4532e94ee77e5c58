//! # WLX - Word-to-Line Lookup
//!
//! WLX indexes a plain-text file once, then answers interactive
//! word lookups against that snapshot. Every lookup reports how often
//! a word occurs and prints each line it occurs on.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Tokenization and inverted-index construction
//! - [`query`] - Exact-match lookups over a built index
//! - [`output`] - Occurrence report formatting
//! - [`repl`] - The interactive prompt loop
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::path::Path;
//! use wlx::index::build_index;
//! use wlx::query::QueryEngine;
//!
//! // Index a file once
//! let index = build_index(Path::new("notes.txt")).unwrap();
//!
//! // Look up words as often as you like
//! let engine = QueryEngine::new(&index);
//! let result = engine.lookup("pancake");
//! for (line, text) in result.occurrences() {
//!     println!("{}: {}", line + 1, text);
//! }
//! ```
//!
//! ## Design
//!
//! The index is a [`BTreeMap`](std::collections::BTreeMap) from each
//! word to the ordered set of zero-based line numbers it appears on,
//! next to a store of every source line verbatim. Lookups never copy
//! line text; results borrow from the index and stay valid for as long
//! as it lives.

pub mod index;
pub mod output;
pub mod query;
pub mod repl;
