pub mod app;
pub mod components;
pub mod handler;
pub mod input;
pub mod layout;
pub mod state;
pub mod toggle;
pub mod tui;
pub mod views;
