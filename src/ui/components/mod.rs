pub mod album;
pub mod player;
pub mod sidebar;
pub mod spectrum;

pub use album::AlbumWidget;
pub use player::PlayerBar;
pub use sidebar::Sidebar;
pub use spectrum::SpectrumWidget;
