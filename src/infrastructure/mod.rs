pub mod catalog;
pub mod terminal;
