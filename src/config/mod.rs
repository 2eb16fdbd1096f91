pub mod env;
pub mod loader;
pub mod schema;

pub use env::EnvConfig;
pub use loader::load_config;
pub use schema::{Config, WalkErrorPolicy};
