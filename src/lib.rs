pub mod audio;
pub mod bridge;
pub mod event;
pub mod library;
pub mod spa;
pub mod ui;
pub mod util;
