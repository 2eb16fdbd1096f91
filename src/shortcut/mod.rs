pub mod parser;

pub use parser::{extract_url, read_url, UrlNotFound};
