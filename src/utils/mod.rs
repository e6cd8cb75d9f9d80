mod logger;
pub mod progress;

pub use logger::init_logger;
