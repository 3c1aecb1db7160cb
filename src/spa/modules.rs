use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;

use crate::{audio::provider::AudioStateProvider, spa::routes::Route, ui::toggle::ViewToggle};

/// Per-page lifecycle. `cleanup` of the outgoing page always runs before
/// `init` of the incoming one.
#[async_trait]
pub trait PageModule: Send + Sync {
    async fn init(&self);
    async fn cleanup(&self);
}

#[derive(Default)]
pub struct PageModules {
    modules: HashMap<Route, Box<dyn PageModule>>,
}

impl PageModules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, route: Route, module: Box<dyn PageModule>) {
        self.modules.insert(route, module);
    }

    pub async fn init(&self, route: Route) {
        if let Some(module) = self.modules.get(&route) {
            module.init().await;
        }
    }

    pub async fn cleanup(&self, route: Route) {
        if let Some(module) = self.modules.get(&route) {
            module.cleanup().await;
        }
    }
}

/// Music page wiring: entering resets the view to the spectrum and kicks
/// playback, leaving tears the view state down.
pub struct MusicModule {
    toggle: ViewToggle,
    provider: Arc<AudioStateProvider>,
}

impl MusicModule {
    pub fn new(toggle: ViewToggle, provider: Arc<AudioStateProvider>) -> Self {
        Self { toggle, provider }
    }
}

#[async_trait]
impl PageModule for MusicModule {
    async fn init(&self) {
        self.toggle.reset().await;
        self.provider.force_play().await;
    }

    async fn cleanup(&self) {
        self.toggle.reset().await;
    }
}
