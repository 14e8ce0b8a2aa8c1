//! Azure AD credential resolution for the Stratus Azure remote-state
//! backend.
//!
//! The backend authenticates against Azure AD / Entra ID with up to four
//! credential fields (OIDC token, client ID, client secret, tenant ID),
//! each of which can be supplied inline, through a file, or (for all but
//! the secret) by the AKS workload-identity webhook. This crate decides
//! which value each field resolves to:
//!
//! - [`CredentialResolver`] — the four resolvers and their shared
//!   ordered-override scan
//! - [`ResolvedCredentials`] — all four values with secret-redacting `Debug`
//! - [`decode_client_certificate`] — inline PFX certificate decoding
//!
//! Resolution never talks to Azure; it only reads configuration, local
//! files, and the injected environment.

pub mod certificate;
pub mod credentials;
pub mod error;

// Re-exports for convenience.
pub use certificate::decode_client_certificate;
pub use credentials::{
    CredentialKind, CredentialResolver, ResolvedCredentials, SourceKind,
};
pub use error::CredentialError;
