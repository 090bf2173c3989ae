//! Normalized teletext page model.
//!
//! These types are the intermediate representation produced by the mapper
//! from the loosely-typed upstream document. They are plain immutable value
//! objects: a fresh `Response` is built per fetch, read everywhere, and
//! replaced wholesale by the next fetch. Link extraction and layout
//! geometry operate on this model only.

mod page;
mod response;

pub use page::{ContentType, Line, Page, Run, SubPage, SubPageContent};
pub use response::Response;
