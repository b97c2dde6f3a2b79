//! The shell window as seen by the view manager.

use std::sync::Arc;

use canopy_common::{Size, ViewId};
use canopy_webview::{ContentView, HostWindow};
use winit::window::Window;

/// Child webviews are created inside the window up front, so attaching
/// and detaching only toggles visibility.
pub(super) struct WinitHost {
    window: Arc<Window>,
}

impl WinitHost {
    pub(super) fn new(window: Arc<Window>) -> Self {
        Self { window }
    }
}

impl HostWindow for WinitHost {
    fn content_size(&self) -> Size {
        let size = self
            .window
            .inner_size()
            .to_logical::<f64>(self.window.scale_factor());
        Size::new(size.width, size.height)
    }

    fn add_child_view(&mut self, id: &ViewId, view: &dyn ContentView) -> Result<(), String> {
        view.set_visible(true).map_err(|e| e.to_string())?;
        tracing::trace!(view_id = %id, "view attached");
        Ok(())
    }

    fn remove_child_view(&mut self, id: &ViewId, view: &dyn ContentView) -> Result<(), String> {
        view.set_visible(false).map_err(|e| e.to_string())?;
        tracing::trace!(view_id = %id, "view detached");
        Ok(())
    }
}
