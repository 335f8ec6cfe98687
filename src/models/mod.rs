pub mod asset;
pub mod common;
pub mod image;
pub mod report;

pub use asset::*;
pub use common::*;
pub use image::*;
pub use report::*;
