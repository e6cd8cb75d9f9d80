pub mod config;
pub mod decoder;
pub mod direct_search;
pub mod error;
pub mod filter;
pub mod loader;
pub mod reporter;
pub mod walker;

pub use config::{parse_extension_list, EncodingKind, SearchConfig, SearchRequest};
pub use direct_search::{find_in_path, SearchOutcome};
pub use error::{ErrorKind, FindError};
pub use loader::FsLoader;
