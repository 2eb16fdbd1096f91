//! Scan a directory tree for `.webloc` internet shortcuts and report the
//! URL, creation time and location of each one.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;
pub mod shortcut;
pub mod timestamp;

pub use error::ReportError;
