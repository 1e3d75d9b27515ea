//! Handle registry for mounted tag widgets.

use super::tag::{TagConfig, TagWidget};
use super::WidgetId;

/// Owns every widget instance mounted on one surface.
///
/// Instances stay tracked until [`WidgetRegistry::destroy_all`] runs, even if
/// their anchor was removed from the surface in the meantime. Teardown is
/// unconditional, so nothing mounted can outlive a render pass or disposal.
#[derive(Debug, Default)]
pub struct WidgetRegistry {
    next_id: u64,
    instances: Vec<TagWidget>,
    mounted_total: u64,
    destroyed_total: u64,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a new tag and start tracking it
    pub fn mount(&mut self, config: TagConfig) -> WidgetId {
        self.next_id += 1;
        let id = WidgetId(self.next_id);
        tracing::trace!(%id, name = %config.name, "mounting tag");
        self.instances.push(TagWidget::mount(id, config));
        self.mounted_total += 1;
        id
    }

    /// Destroy every tracked instance, returning how many were torn down
    pub fn destroy_all(&mut self) -> usize {
        let count = self.instances.len();
        for widget in &mut self.instances {
            widget.destroy();
        }
        self.instances.clear();
        self.destroyed_total += count as u64;
        if count > 0 {
            tracing::trace!(count, "destroyed tags");
        }
        count
    }

    pub fn get(&self, id: WidgetId) -> Option<&TagWidget> {
        self.instances.iter().find(|w| w.id() == id)
    }

    /// Tracked instances in mount order
    pub fn iter(&self) -> impl Iterator<Item = &TagWidget> {
        self.instances.iter()
    }

    /// Number of instances currently mounted
    pub fn live_count(&self) -> usize {
        self.instances.iter().filter(|w| w.is_mounted()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Instances mounted over the registry's lifetime
    pub fn mounted_total(&self) -> u64 {
        self.mounted_total
    }

    /// Instances destroyed over the registry's lifetime
    pub fn destroyed_total(&self) -> u64 {
        self.destroyed_total
    }
}
