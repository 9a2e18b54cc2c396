//! Owned chart-handle lifecycle.
//!
//! Chart libraries hand out stateful instances that must be destroyed before
//! a replacement is drawn on the same surface. [`ChartSlot`] makes that
//! lifecycle explicit: `replace` disposes the previous handle first, so
//! repeated refreshes never leak instances or stack duplicate visuals.

use crate::dto::analytics::ChartData;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    /// Bar chart with the index on the vertical axis.
    HorizontalBar,
}

/// Everything a backend needs to draw one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub data: ChartData,
}

/// Creates and disposes chart instances on some graphics surface.
pub trait ChartBackend: Send + Sync {
    type Handle: Send;

    fn create(&self, spec: &ChartSpec) -> Self::Handle;
    fn destroy(&self, handle: Self::Handle);
}

/// At most one live chart instance per widget surface.
pub struct ChartSlot<B: ChartBackend> {
    backend: B,
    handle: Option<B::Handle>,
}

impl<B: ChartBackend> ChartSlot<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            handle: None,
        }
    }

    /// Disposes the current instance, if any, then draws `spec`.
    pub fn replace(&mut self, spec: &ChartSpec) {
        if let Some(handle) = self.handle.take() {
            self.backend.destroy(handle);
        }
        self.handle = Some(self.backend.create(spec));
    }

    /// Disposes the current instance without drawing a replacement.
    pub fn clear(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.backend.destroy(handle);
        }
    }

    pub fn is_drawn(&self) -> bool {
        self.handle.is_some()
    }
}

impl<B: ChartBackend> Drop for ChartSlot<B> {
    fn drop(&mut self) {
        self.clear();
    }
}
