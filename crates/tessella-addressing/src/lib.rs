#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions, clippy::multiple_crate_versions)]

//! Typed resource addressing for the Tessella pipeline.
//!
//! Raw strings enter the pipeline from CLI arguments and manifest files.
//! This crate classifies them once, at the boundary, and brands the result
//! so downstream code can demand "definitely a URL" or "definitely a local
//! path" through the type system instead of re-validating.

mod brand;
mod resolve;

pub use brand::{Branded, JsonMarker, JsonText, LocalPath, PathMarker, RemoteUrl, UrlMarker};
pub use resolve::{Address, resolve};
