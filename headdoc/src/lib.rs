//! headdoc - ordered head-element model for HTML pages
//!
//! Build a [`DocumentModel`] once per page, fill its named containers with the
//! fluent API, then ask a [`Renderer`] for each markup fragment. Assembling the
//! fragments into a page is left to the caller.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(missing_docs))]
// Allow some pedantic lints that are too strict for this project
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::return_self_not_must_use)]

pub mod config;
pub mod container;
pub mod error;
pub mod escape;
pub mod model;
pub mod render;
pub mod status;
pub mod tables;
pub mod value;

pub use config::{ConfigError, PageConfig};
pub use container::NamedContainer;
pub use error::ValidationError;
pub use escape::escape_html;
pub use model::{DocumentModel, CORE_CONTAINERS};
pub use render::{render_doctype_as, Renderer, Section};
pub use status::ErrorPage;
pub use value::{Record, Value};
