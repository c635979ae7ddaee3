pub mod aggregate;
pub mod quality;
