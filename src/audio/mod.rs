pub mod analyzer;
pub mod backend;
pub mod error;
pub mod interaction;
pub mod provider;
pub mod state;

pub use backend::{AudioBackend, RodioBackend};
pub use error::AudioError;
pub use provider::AudioStateProvider;
pub use state::{AutoplayPhase, PlayerState};
