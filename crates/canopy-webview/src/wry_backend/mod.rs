//! `wry`-backed content engine.
//!
//! Every view is a child webview of one host window, built hidden and
//! shown by the host when the compositor attaches it.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use canopy_common::{Rect, ViewError};
use tracing::debug;
use wry::raw_window_handle::HasWindowHandle;
use wry::{WebContext, WebViewBuilder};

use crate::backend::{ContentEngine, ContentView, ViewRequest};
use crate::history::NavHistory;
use crate::interceptor::key_listener_script;
use crate::ipc::{CONTEXT_MENU_SCRIPT, IPC_INIT_SCRIPT};

mod handlers;
mod view;

pub use view::WryView;

/// Convert a layout rectangle to wry's logical bounds.
pub fn to_wry_rect(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

pub(crate) fn engine_error(e: wry::Error) -> ViewError {
    ViewError::Engine(e.to_string())
}

/// Builds webviews as children of `window`, sharing one data directory.
pub struct WryEngine<W> {
    window: Arc<W>,
    web_context: WebContext,
    devtools: bool,
}

impl<W: HasWindowHandle> WryEngine<W> {
    /// `data_dir` holds cookies and storage shared by all views.
    pub fn new(window: Arc<W>, data_dir: Option<PathBuf>) -> Self {
        Self {
            window,
            web_context: WebContext::new(data_dir),
            devtools: cfg!(debug_assertions),
        }
    }

    /// Web inspector access; on by default in debug builds.
    pub fn with_devtools(mut self, enabled: bool) -> Self {
        self.devtools = enabled;
        self
    }
}

impl<W: HasWindowHandle> ContentEngine for WryEngine<W> {
    fn create_view(&mut self, request: ViewRequest<'_>) -> Result<Box<dyn ContentView>, ViewError> {
        let history = Arc::new(Mutex::new(NavHistory::default()));
        let shortcut_script = key_listener_script(request.shortcuts);

        let mut builder = WebViewBuilder::with_web_context(&mut self.web_context)
            .with_url(request.url)
            .with_bounds(to_wry_rect(&request.bounds))
            .with_visible(false)
            .with_focused(false)
            .with_devtools(self.devtools)
            .with_clipboard(false)
            .with_initialization_script(IPC_INIT_SCRIPT)
            .with_initialization_script(&shortcut_script)
            .with_initialization_script(CONTEXT_MENU_SCRIPT);

        if let Some(ua) = &request.options.user_agent {
            builder = builder.with_user_agent(ua.as_str());
        }

        builder = handlers::attach_ipc_handler(builder, request.signals.clone());
        builder = handlers::attach_page_load_handler(
            builder,
            request.signals.clone(),
            Arc::clone(&history),
        );
        builder = handlers::attach_title_handler(builder, request.signals.clone());
        builder = handlers::attach_new_window_handler(builder, request.signals);

        let webview = builder
            .build_as_child(&*self.window)
            .map_err(engine_error)?;

        debug!(view_id = %request.id, url = request.url, "webview created");
        Ok(Box::new(WryView::new(webview, history, request.url)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_converts_to_logical_bounds() {
        let wry_rect = to_wry_rect(&Rect {
            x: 0.0,
            y: 48.0,
            width: 750.0,
            height: 752.0,
        });

        match wry_rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!((pos.x - 0.0).abs() < f64::EPSILON);
                assert!((pos.y - 48.0).abs() < f64::EPSILON);
            }
            _ => panic!("expected logical position"),
        }
        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 750.0).abs() < f64::EPSILON);
                assert!((size.height - 752.0).abs() < f64::EPSILON);
            }
            _ => panic!("expected logical size"),
        }
    }
}
