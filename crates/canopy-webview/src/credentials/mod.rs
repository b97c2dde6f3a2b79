//! Credential injection for login pages.
//!
//! On every finished load the URL is classified against the configured
//! services. A match triggers a background fetch of the service's secrets;
//! the result is pushed into the page at most once for that load.

mod bundle;
mod classifier;
mod coordinator;

pub use bundle::{CredentialBundle, LOGIN_ACCOUNT, PASSWORD_ACCOUNT, TOTP_ACCOUNT};
pub use classifier::ServiceClassifier;
pub use coordinator::{CredentialCoordinator, InjectionStep};

/// IPC kind of the message carrying a bundle into the page.
pub const CREDENTIALS_MESSAGE: &str = "credentials";
