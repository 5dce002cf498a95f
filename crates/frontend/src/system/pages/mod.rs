pub mod login;
pub mod menu;
