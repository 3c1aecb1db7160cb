pub mod cache;
pub mod error;
pub mod fetch;
pub mod modules;
pub mod router;
pub mod routes;

pub use cache::PageCache;
pub use error::SpaError;
pub use fetch::{HttpPageFetcher, PageFetcher};
pub use modules::{PageModule, PageModules};
pub use router::{RouterConfig, SpaRouter};
pub use routes::{Direction, PageSource, Route};
