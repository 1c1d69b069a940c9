pub mod host;
pub mod palette;
