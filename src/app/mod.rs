pub mod action;
pub mod catalog;
pub mod command;
pub mod features;
pub mod focus;
pub mod input;
pub mod keymap;
pub mod r#loop;
pub mod reducer;
pub mod state;
pub mod ui;
