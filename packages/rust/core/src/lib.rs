//! README assembly and input validation for profilegen.
//!
//! This crate holds the pure document assembler together with the pieces
//! that sit right next to it: icon resolution, the local catalog file, and
//! the validation rules applied to interview answers.

pub mod assembler;
pub mod catalog;
pub mod icons;
pub mod validate;

pub use assembler::{Section, assemble, sections, write_document};
pub use catalog::{load_catalog, save_catalog};
pub use icons::{ICON_BASE_URL, resolve_icon};
