//! Core library for the mod-report command line application.
//!
//! The library exposes the pieces that power the command-line interface as
//! well as the tests. The modules are structured to keep responsibilities
//! narrow and composable: the configuration record lives in [`config`], the
//! mods-folder enumerator in [`scan`], the shared diff computation in
//! [`model`], the per-format readers and writers under [`io`], and the
//! single-pass orchestration in [`report`].

pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod report;
pub mod scan;

pub use error::{ReportError, Result};
