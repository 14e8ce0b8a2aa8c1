use thiserror::Error;

use crate::credentials::{CredentialKind, SourceKind};

/// Errors raised while resolving Azure AD credentials.
///
/// Both file-read and mismatch failures are fatal configuration errors: the
/// caller aborts backend initialization rather than falling back or
/// retrying. A credential that resolves to nothing at all is *not* an
/// error; absence is judged by the code that builds the identity-provider
/// client.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// A configured credential file could not be read.
    #[error("reading {kind} from file {path:?}: {source}")]
    Read {
        /// Which credential field the file was supposed to supply.
        kind: CredentialKind,
        /// The path that failed to read.
        path: String,
        /// The underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// Two active sources supplied different non-empty values for the
    /// same credential field.
    #[error("mismatch between {kind} from {existing} and {kind} from {candidate} - {}", .candidate.resolution_hint())]
    Mismatch {
        /// The credential field the sources disagree about.
        kind: CredentialKind,
        /// The source whose value had been accepted so far.
        existing: SourceKind,
        /// The later-precedence source that disagreed.
        candidate: SourceKind,
    },

    /// The inline client certificate is not valid base64.
    #[error("could not decode client certificate data: {0}")]
    Certificate(#[from] base64::DecodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_field_and_path() {
        let err = CredentialError::Read {
            kind: CredentialKind::ClientSecret,
            path: "/run/secrets/sp".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("client secret"));
        assert!(msg.contains("/run/secrets/sp"));
    }

    #[test]
    fn mismatch_error_names_field_and_sources() {
        let err = CredentialError::Mismatch {
            kind: CredentialKind::OidcToken,
            existing: SourceKind::Inline,
            candidate: SourceKind::File,
        };
        assert_eq!(
            err.to_string(),
            "mismatch between OIDC token from the inline configuration and \
             OIDC token from the configured file - remove one or ensure they match"
        );
    }

    #[test]
    fn workload_identity_mismatch_hints_at_flag() {
        let err = CredentialError::Mismatch {
            kind: CredentialKind::ClientId,
            existing: SourceKind::Inline,
            candidate: SourceKind::WorkloadIdentity,
        };
        let msg = err.to_string();
        assert!(msg.contains("AKS workload identity"));
        assert!(msg.contains("disable use_aks_workload_identity"));
    }

    #[test]
    fn read_error_preserves_io_source() {
        let err = CredentialError::Read {
            kind: CredentialKind::OidcToken,
            path: "/tmp/token".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let source = std::error::Error::source(&err).expect("io source");
        assert!(source.to_string().contains("gone"));
    }
}
