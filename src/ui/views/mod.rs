pub mod home;
pub mod map;
pub mod music;
pub mod pie;
pub mod relation;

pub use home::HomeView;
pub use map::MapView;
pub use music::MusicView;
pub use pie::PieView;
pub use relation::RelationView;
