pub mod config;
pub mod error;
pub mod feature_flags;
pub mod models;

pub use config::*;
pub use error::*;
pub use feature_flags::*;
pub use models::*;
