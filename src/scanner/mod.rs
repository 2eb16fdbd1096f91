pub mod engine;
pub mod filter;
pub mod walker;

pub use engine::ReportEngine;
pub use walker::{WeblocFile, WeblocWalker};
