//! View lifecycle and compositing for the Canopy shell.
//!
//! Hosts many embedded web views in one window and shows exactly one at a
//! time:
//! - [`ViewManager`]: create, show, navigate and destroy views
//! - Shortcut interception at the content boundary
//! - Credential injection into recognised login pages
//! - Unread-badge polling
//! - [`wry_backend`]: the production content engine

pub mod backend;
pub mod bounds;
pub mod credentials;
pub mod debounce;
pub mod events;
pub mod history;
pub mod interceptor;
pub mod ipc;
pub mod manager;
pub mod notifications;
pub mod wry_backend;

pub use backend::{
    ContentEngine, ContentSignal, ContentView, HostWindow, KeyInput, ScriptCallback, SignalSink,
    ViewOptions, ViewRequest,
};
pub use bounds::{compute_bounds, LayoutState};
pub use events::{LoadError, ViewEvent};
pub use ipc::IpcMessage;
pub use manager::{ManagerStats, PendingScript, View, ViewManager, ViewState};
pub use wry_backend::{WryEngine, WryView};
