use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::spa::routes::Route;

/// Once a page lands in the cache it is never refetched for the life of
/// the process.
#[derive(Clone, Default)]
pub struct PageCache {
    cache: Arc<RwLock<HashMap<Route, String>>>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, route: Route) -> Option<String> {
        self.cache.read().await.get(&route).cloned()
    }

    pub async fn insert(&self, route: Route, content: String) {
        self.cache.write().await.insert(route, content);
    }

    pub async fn contains(&self, route: Route) -> bool {
        self.cache.read().await.contains_key(&route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_then_get() {
        let cache = PageCache::new();
        assert!(cache.get(Route::Pie).await.is_none());

        cache.insert(Route::Pie, "grades".into()).await;
        assert_eq!(cache.get(Route::Pie).await.as_deref(), Some("grades"));
        assert!(cache.contains(Route::Pie).await);
        assert!(!cache.contains(Route::Map).await);
    }

    #[tokio::test]
    async fn clones_share_entries() {
        let cache = PageCache::new();
        let other = cache.clone();
        cache.insert(Route::Map, "campus".into()).await;
        assert_eq!(other.get(Route::Map).await.as_deref(), Some("campus"));
    }
}
