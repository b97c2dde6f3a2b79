use std::sync::{Arc, Mutex};

use tracing::{debug, trace, warn};
use wry::{PageLoadEvent, WebViewBuilder};

use crate::backend::{ContentSignal, SignalSink};
use crate::history::NavHistory;
use crate::ipc::IpcMessage;

pub(super) fn attach_ipc_handler<'a>(
    builder: WebViewBuilder<'a>,
    sink: SignalSink,
) -> WebViewBuilder<'a> {
    builder.with_ipc_handler(move |request| {
        let body = request.body();
        let Some(message) = IpcMessage::from_json(body) else {
            warn!(
                view_id = %sink.view_id(),
                body_len = body.len(),
                "IPC message rejected: invalid JSON"
            );
            return;
        };
        let kind = message.kind.clone();
        match message.into_signal() {
            Some(signal) => sink.push(signal),
            None => debug!(view_id = %sink.view_id(), kind = %kind, "unhandled IPC message"),
        }
    })
}

pub(super) fn attach_page_load_handler<'a>(
    builder: WebViewBuilder<'a>,
    sink: SignalSink,
    history: Arc<Mutex<NavHistory>>,
) -> WebViewBuilder<'a> {
    builder.with_on_page_load_handler(move |event, url| match event {
        PageLoadEvent::Started => {
            trace!(view_id = %sink.view_id(), url = %url, "page load started");
            sink.push(ContentSignal::LoadStarted { url });
        }
        PageLoadEvent::Finished => {
            if let Ok(mut history) = history.lock() {
                history.commit(&url);
            }
            sink.push(ContentSignal::Navigated { url: url.clone() });
            sink.push(ContentSignal::LoadFinished { url });
        }
    })
}

pub(super) fn attach_title_handler<'a>(
    builder: WebViewBuilder<'a>,
    sink: SignalSink,
) -> WebViewBuilder<'a> {
    builder.with_document_title_changed_handler(move |title| {
        sink.push(ContentSignal::TitleChanged { title });
    })
}

/// Popups never open a native window; the host decides what to do.
pub(super) fn attach_new_window_handler<'a>(
    builder: WebViewBuilder<'a>,
    sink: SignalSink,
) -> WebViewBuilder<'a> {
    builder.with_new_window_req_handler(move |url| {
        debug!(view_id = %sink.view_id(), url = %url, "new window request");
        sink.push(ContentSignal::NewWindowRequested { url, title: None });
        false
    })
}
