pub mod bitrate;
pub mod metadata;
pub mod scanner;
