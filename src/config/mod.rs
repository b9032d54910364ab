pub mod loader;
pub mod paths;
pub mod types;

pub use loader::{ConfigError, CONFIG_PATH_ENV};
pub use paths::{Paths, CLAUDE_DIR_ENV};
pub use types::{Config, PathsConfig};
