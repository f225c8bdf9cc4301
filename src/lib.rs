//! Browse-by-letter and browse-by-subject filtering for a static catalog table.
//!
//! [`CatalogFilter`] reads the rows of a catalog listing once, indexes their
//! first letters and subject tags, and then shows one letter, one subject or
//! everything by moving row nodes in and out of a container. The document side
//! is reached only through the traits in [`render`] and [`menu`]; [`page`]
//! implements them over an owned XHTML page.
//!
//! The binary `liszt` applies a filter and the menus to a static page and
//! writes the result.

pub mod config;
pub mod controller;
pub mod error;
pub mod fragment;
pub mod keys;
pub mod menu;
pub mod model;
pub mod page;
pub mod render;

pub use config::FilterOptions;
pub use controller::CatalogFilter;
pub use error::FilterError;
pub use menu::{Action, Menu, MenuHost, MenuItem, MenuKind, ResetFragment};
pub use model::{CatalogIndex, Field, RowRecord, SourceRow};
pub use render::{CaptionTarget, FragmentHistory, Navigator, NoCaption, RenderTarget};
