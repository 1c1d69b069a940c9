pub mod history;
pub mod modals;
