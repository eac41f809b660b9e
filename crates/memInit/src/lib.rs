pub mod config;
pub mod constant;
pub mod errors;
pub mod image;
pub mod layout;
pub mod logs;
pub mod render;

pub use config::{DotProductInputs, MemoryConfig};
pub use errors::{ConfigError, MifError};
pub use image::MemoryImage;
pub use layout::{MemoryWord, RegionSpan, region::RegionKind};
