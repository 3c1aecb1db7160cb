use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use flume::Sender;
use tokio::sync::RwLock;
use tracing::warn;

use crate::{
    event::events::Event,
    library::resume::HOME_INTRO,
    spa::{
        cache::PageCache,
        error::SpaError,
        fetch::PageFetcher,
        modules::PageModules,
        routes::{Direction, PageSource, Route},
    },
};

#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// How long the outgoing page stays on screen before the swap.
    pub transition: Duration,
    /// Hard cap on content resolution, so a stalled fetch cannot hold
    /// the transition lock.
    pub fetch_timeout: Duration,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            transition: Duration::from_millis(600),
            fetch_timeout: Duration::from_millis(600),
        }
    }
}

/// Single-page navigation with a transition lock. Content swaps are
/// deferred until the transition elapses, and at most one navigation is
/// in flight at any time.
pub struct SpaRouter {
    fetcher: Arc<dyn PageFetcher>,
    modules: Arc<PageModules>,
    cache: PageCache,
    config: RouterConfig,
    current: Arc<RwLock<Route>>,
    active_content: Arc<RwLock<String>>,
    is_transitioning: Arc<AtomicBool>,
    event_tx: Sender<Event>,
}

impl SpaRouter {
    pub async fn new(
        fetcher: Arc<dyn PageFetcher>,
        modules: Arc<PageModules>,
        config: RouterConfig,
        event_tx: Sender<Event>,
    ) -> Self {
        let cache = PageCache::new();
        cache.insert(Route::Home, HOME_INTRO.to_string()).await;

        Self {
            fetcher,
            modules,
            cache,
            config,
            current: Arc::new(RwLock::new(Route::Home)),
            active_content: Arc::new(RwLock::new(HOME_INTRO.to_string())),
            is_transitioning: Arc::new(AtomicBool::new(false)),
            event_tx,
        }
    }

    pub async fn current(&self) -> Route {
        *self.current.read().await
    }

    pub async fn active_content(&self) -> String {
        self.active_content.read().await.clone()
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning.load(Ordering::SeqCst)
    }

    /// Returns false when the navigation was dropped: a transition was
    /// already in flight, or the route is already current.
    pub async fn navigate(&self, route: Route, _direction: Direction) -> bool {
        if self.is_transitioning.swap(true, Ordering::SeqCst) {
            return false;
        }

        if *self.current.read().await == route {
            self.is_transitioning.store(false, Ordering::SeqCst);
            return false;
        }

        let resolved = tokio::time::timeout(self.config.fetch_timeout, self.resolve_content(route))
            .await
            .unwrap_or_else(|_| Err(SpaError::Fetch(format!("timed out loading {route}"))));

        let (target, content) = match resolved {
            Ok(content) => (route, content),
            Err(err) => {
                warn!("navigation to {route} failed: {err}");
                let _ = self
                    .event_tx
                    .send(Event::NavigationFailed(err.to_string()));
                // The home page is seeded at startup, so this never misses.
                let home = self
                    .cache
                    .get(Route::Home)
                    .await
                    .unwrap_or_else(|| HOME_INTRO.to_string());
                (Route::Home, home)
            }
        };

        let current = Arc::clone(&self.current);
        let active_content = Arc::clone(&self.active_content);
        let is_transitioning = Arc::clone(&self.is_transitioning);
        let modules = Arc::clone(&self.modules);
        let event_tx = self.event_tx.clone();
        let transition = self.config.transition;

        tokio::spawn(async move {
            tokio::time::sleep(transition).await;

            let outgoing = {
                let mut guard = current.write().await;
                let outgoing = *guard;
                *guard = target;
                outgoing
            };
            *active_content.write().await = content;
            is_transitioning.store(false, Ordering::SeqCst);

            modules.cleanup(outgoing).await;
            modules.init(target).await;

            let _ = event_tx.send(Event::PageShown(target));
        });

        true
    }

    async fn resolve_content(&self, route: Route) -> Result<String, SpaError> {
        if let Some(content) = self.cache.get(route).await {
            return Ok(content);
        }

        match route.source() {
            PageSource::Inline => Ok(String::new()),
            source @ PageSource::Remote(_) => {
                let content = self.fetcher.fetch(&source).await?;
                self.cache.insert(route, content.clone()).await;
                Ok(content)
            }
        }
    }
}
