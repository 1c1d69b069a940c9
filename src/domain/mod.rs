pub mod cursor;
pub mod event_source;
pub mod filter;
pub mod grouping;
pub mod models;
