//! Service layer: the credential store and its renderers.

pub mod credential_store;
pub mod renderer;

pub use credential_store::{CredentialStore, RecordStatus};
pub use renderer::{render, render_js, render_json, RenderFormat};
