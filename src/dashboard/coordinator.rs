use std::sync::{Arc, Mutex};

use futures::future::join_all;

use crate::dashboard::{WidgetFetcher, WidgetRenderer};
use crate::domain::filter::FilterState;

struct RegisteredWidget {
    name: String,
    fetcher: Arc<dyn WidgetFetcher>,
    renderer: Arc<dyn WidgetRenderer>,
}

#[derive(Default)]
struct CoordinatorState {
    filters: Option<FilterState>,
    generation: u64,
}

/// Single entry point for (re)loading the whole dashboard.
///
/// Owns the current filter predicate and the monotonic refresh generation;
/// both are mutated only inside [`refresh`](Self::refresh). The generation is
/// the cancellation token of the dashboard: a response belongs to exactly one
/// generation and is honored only while that generation is still current, so
/// a slow response from an old filter can never overwrite newer data.
pub struct RefreshCoordinator {
    widgets: Vec<RegisteredWidget>,
    state: Mutex<CoordinatorState>,
}

impl RefreshCoordinator {
    pub fn new() -> Self {
        Self {
            widgets: Vec::new(),
            state: Mutex::new(CoordinatorState::default()),
        }
    }

    /// Adds a widget. Registration happens once, before the first refresh;
    /// the coordinator wraps every fetch with the generation guard and
    /// nothing else.
    pub fn register_widget(
        &mut self,
        name: impl Into<String>,
        fetcher: Arc<dyn WidgetFetcher>,
        renderer: Arc<dyn WidgetRenderer>,
    ) {
        self.widgets.push(RegisteredWidget {
            name: name.into(),
            fetcher,
            renderer,
        });
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    /// The filter predicate of the latest refresh.
    pub fn current_filters(&self) -> Option<FilterState> {
        self.lock_state().filters.clone()
    }

    /// The generation of the latest refresh.
    pub fn generation(&self) -> u64 {
        self.lock_state().generation
    }

    /// Reloads every registered widget under `filters`.
    ///
    /// Stores the predicate wholesale, bumps the generation, then runs one
    /// fetch per widget concurrently with no completion ordering. A result is
    /// applied only while its generation is still current; stale results and
    /// stale failures are discarded silently. Resolves once every fetch has
    /// either applied or been discarded, and never fails: each widget
    /// degrades independently.
    pub async fn refresh(&self, filters: Option<FilterState>) {
        let generation = {
            let mut state = self.lock_state();
            state.filters = filters.clone();
            state.generation += 1;
            state.generation
        };

        let fetches = self
            .widgets
            .iter()
            .map(|widget| self.refresh_widget(widget, generation, filters.as_ref()));
        join_all(fetches).await;
    }

    async fn refresh_widget(
        &self,
        widget: &RegisteredWidget,
        generation: u64,
        filters: Option<&FilterState>,
    ) {
        let result = widget.fetcher.fetch(filters).await;

        // The guard stays held through the render so a concurrent refresh
        // cannot bump the generation and apply its own result in between;
        // renders are synchronous, so the lock never spans an await.
        let state = self.lock_state();
        if state.generation != generation {
            log::debug!(
                "Discarding stale generation {generation} response for widget {}",
                widget.name
            );
            return;
        }

        match result {
            Ok(payload) => widget.renderer.render(payload, filters),
            Err(err) => {
                log::error!("Widget {} failed to refresh: {err}", widget.name);
                widget.renderer.render_failed();
            }
        }
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, CoordinatorState> {
        // The lock is only held across synchronous sections, never an await,
        // so poisoning would mean a panic inside one of them.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for RefreshCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
