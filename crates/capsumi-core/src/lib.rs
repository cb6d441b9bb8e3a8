//! # capsumi-core - Page Model for the Capsumi Site
//!
//! Browser-independent half of the Capsumi site. Provides the content catalog,
//! navigation sections, theme model, UI state and the TEA (The Elm
//! Architecture) update loop that the Leptos frontend drives.
//!
//! ## Public API
//!
//! ### Content (`content`)
//! - [`ContentCard`] - Title, description and optional authors shown in the modal
//! - [`Author`] - Author name with a link to their document
//! - [`Tile`] - Clickable grid entry carrying a card
//! - [`Catalog`] - Every tile on the page, built once at startup
//!
//! ### Navigation (`section`)
//! - [`Section`] - The four in-page sections and their anchors
//!
//! ### Theme (`theme`)
//! - [`Theme`] - Light or dark presentation
//! - [`PresentationMode`] - Document-wide setter invoked when the theme changes
//!
//! ### State and Update (`state`, `message`, `handler`)
//! - [`UiState`] - Model: open card, mobile menu flag, theme
//! - [`Message`] - Every user-initiated event
//! - [`update()`] - Pure state transition returning an [`UpdateResult`]
//! - [`dispatch()`] - Runs follow-up messages and executes [`UpdateAction`]s
//!
//! ### Configuration (`config`) and Errors (`error`)
//! - [`SiteConfig`] - Embedded `site.toml` settings
//! - [`Error`], [`Result`]

pub mod config;
pub mod content;
pub mod error;
pub mod handler;
pub mod message;
pub mod section;
pub mod state;
pub mod theme;

pub use config::{AssetsConfig, LogLevel, LoggingConfig, SiteConfig, SiteSection};
pub use content::{Author, Catalog, ContentCard, Tile};
pub use error::{Error, Result};
pub use handler::{dispatch, update, UpdateAction, UpdateResult};
pub use message::{Message, ModalTarget};
pub use section::Section;
pub use state::UiState;
pub use theme::{PresentationMode, Theme};
