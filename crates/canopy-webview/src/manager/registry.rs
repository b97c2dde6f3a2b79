use std::collections::HashMap;

use canopy_common::ViewId;

use super::types::View;

/// Id-keyed table of live views, remembering creation order.
#[derive(Default)]
pub struct ViewRegistry {
    views: HashMap<ViewId, View>,
    order: Vec<ViewId>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view. Returns `false` if the id is already live.
    pub fn insert(&mut self, view: View) -> bool {
        if self.views.contains_key(&view.id) {
            return false;
        }
        self.order.push(view.id.clone());
        self.views.insert(view.id.clone(), view);
        true
    }

    pub fn get(&self, id: &ViewId) -> Option<&View> {
        self.views.get(id)
    }

    pub fn get_mut(&mut self, id: &ViewId) -> Option<&mut View> {
        self.views.get_mut(id)
    }

    pub fn contains(&self, id: &ViewId) -> bool {
        self.views.contains_key(id)
    }

    /// Remove a view, handing its content handle to the caller to drop.
    pub fn remove(&mut self, id: &ViewId) -> Option<View> {
        let view = self.views.remove(id)?;
        self.order.retain(|existing| existing != id);
        Some(view)
    }

    /// Live ids in creation order.
    pub fn ids(&self) -> Vec<ViewId> {
        self.order.clone()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn standard_app_count(&self) -> usize {
        self.views.values().filter(|v| v.is_standard_app).count()
    }
}
