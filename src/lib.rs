//! # agx - AI Agent Catalog Browser
//!
//! agx is a terminal browser and instant search for a static catalog of
//! AI-agent frameworks, design patterns, concepts, guides, tools, and
//! glossary terms. The catalog is embedded in the binary, loaded once at
//! startup into an immutable index, and never mutated afterwards.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`catalog`] - Embedded content catalog and the closed set of item kinds
//! - [`index`] - Immutable search index and href routing
//! - [`search`] - Pure substring matcher with tiered, capped ranking
//! - [`tui`] - Interactive terminal UI (search modal, help overlay)
//! - [`output`] - Colored and JSON result formatting for one-shot commands
//!
//! ## Quick Start
//!
//! ```
//! use agx::index::SearchIndex;
//!
//! let index = SearchIndex::embedded().unwrap();
//! for item in index.search("langgraph") {
//!     println!("{}  {}", item.title, item.href);
//! }
//! ```

pub mod catalog;
pub mod index;
pub mod output;
pub mod search;
#[cfg(feature = "interactive")]
pub mod tui;
