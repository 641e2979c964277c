pub mod image;
pub mod raw;
