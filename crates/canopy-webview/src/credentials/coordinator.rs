use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use canopy_common::{Diagnostic, DiagnosticLevel, ViewId};
use canopy_config::schema::CredentialsConfig;
use canopy_platform::SecretStore;
use serde_json::json;
use tokio::runtime::Handle;
use tracing::debug;

use super::bundle::CredentialBundle;
use super::classifier::ServiceClassifier;

/// Per-view state for the most recent classified load.
#[derive(Debug, Clone)]
struct InjectionRecord {
    service: String,
    load_seq: u64,
    injected: bool,
}

struct FetchOutcome {
    id: ViewId,
    load_seq: u64,
    bundle: CredentialBundle,
}

/// Work for the manager after draining completed fetches.
#[derive(Debug)]
pub enum InjectionStep {
    /// Push this bundle into the view.
    Inject { id: ViewId, bundle: CredentialBundle },
    Diagnostic(Diagnostic),
}

/// Classifies finished loads and runs secret fetches off the UI thread.
///
/// Fetches run on the tokio runtime and report back over a channel drained
/// by [`drain_ready`](Self::drain_ready). A result is only used if its view
/// still exists and has not finished another load since.
pub struct CredentialCoordinator {
    enabled: bool,
    classifier: ServiceClassifier,
    store: Arc<dyn SecretStore>,
    runtime: Option<Handle>,
    records: HashMap<ViewId, InjectionRecord>,
    tx: Sender<FetchOutcome>,
    rx: Receiver<FetchOutcome>,
}

impl CredentialCoordinator {
    pub fn new(
        config: &CredentialsConfig,
        store: Arc<dyn SecretStore>,
        runtime: Option<Handle>,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            enabled: config.enabled,
            classifier: ServiceClassifier::from_config(config),
            store,
            runtime,
            records: HashMap::new(),
            tx,
            rx,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Evaluate one finished load. `load_seq` must increase with every load
    /// of the same view.
    pub fn on_load_finished(&mut self, id: &ViewId, url: &str, load_seq: u64) -> Option<Diagnostic> {
        if !self.enabled {
            return None;
        }

        let service = match self.classifier.classify(url) {
            Some(service) => service.to_string(),
            None => {
                if self.records.remove(id).is_some() {
                    debug!(view_id = %id, "left login page, injection record reset");
                }
                return Some(Diagnostic::new(
                    "credential-no-match",
                    DiagnosticLevel::Debug,
                    "loaded URL matches no credential service",
                    json!({ "viewId": id, "url": url }),
                ));
            }
        };

        self.records.insert(
            id.clone(),
            InjectionRecord {
                service: service.clone(),
                load_seq,
                injected: false,
            },
        );

        let Some(handle) = &self.runtime else {
            return Some(Diagnostic::new(
                "credential-fetch-unavailable",
                DiagnosticLevel::Warn,
                "no async runtime for secret lookup",
                json!({ "viewId": id, "service": service }),
            ));
        };

        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();
        let view_id = id.clone();
        let fetch_service = service.clone();
        handle.spawn(async move {
            let bundle = CredentialBundle::fetch(store.as_ref(), &fetch_service).await;
            // Receiver gone means the manager shut down.
            let _ = tx.send(FetchOutcome {
                id: view_id,
                load_seq,
                bundle,
            });
        });

        Some(Diagnostic::new(
            "credential-fetch-started",
            DiagnosticLevel::Debug,
            "fetching secrets for login page",
            json!({ "viewId": id, "service": service, "load": load_seq }),
        ))
    }

    /// Collect completed fetches. Never blocks.
    pub fn drain_ready(&mut self) -> Vec<InjectionStep> {
        let mut steps = Vec::new();

        while let Ok(outcome) = self.rx.try_recv() {
            let FetchOutcome {
                id,
                load_seq,
                bundle,
            } = outcome;

            let record = match self.records.get_mut(&id) {
                Some(r) if r.load_seq == load_seq && !r.injected => r,
                _ => {
                    debug!(view_id = %id, load_seq, "discarding stale credential fetch");
                    continue;
                }
            };

            for (field, error) in bundle.failures() {
                steps.push(InjectionStep::Diagnostic(Diagnostic::new(
                    "credential-lookup-failed",
                    DiagnosticLevel::Warn,
                    format!("secret store lookup failed: {error}"),
                    json!({ "viewId": id, "service": bundle.service, "field": field }),
                )));
            }

            if !bundle.has_login() {
                steps.push(InjectionStep::Diagnostic(Diagnostic::new(
                    "credential-missing-login",
                    DiagnosticLevel::Info,
                    "no login stored for service, skipping injection",
                    json!({ "viewId": id, "service": bundle.service }),
                )));
                continue;
            }

            record.injected = true;
            steps.push(InjectionStep::Inject { id, bundle });
        }

        steps
    }

    /// Drop all state for a destroyed view. Late fetches are discarded.
    pub fn forget(&mut self, id: &ViewId) {
        self.records.remove(id);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
