//! Credential resolution for the Azure remote-state backend.
//!
//! Each Azure AD credential field can arrive from several places: a value
//! written inline in the backend configuration, a file the configuration
//! points at, or an environment variable injected by the AKS
//! workload-identity webhook. All four fields run the same ordered-override
//! scan: a later active source supersedes an earlier one, and two active
//! sources that disagree abort resolution instead of silently picking a
//! winner.
//!
//! Resolution decides *which* string to use, never whether it is valid.
//! An unset result is a legitimate outcome that downstream credential
//! construction gets to judge.

use std::fmt;

use stratus_backend::{ConfigValues, Environment, LogPolicy};
use tracing::debug;

use crate::certificate::decode_client_certificate;
use crate::error::CredentialError;

// Configuration fields consumed by the resolver.
const OIDC_TOKEN: &str = "oidc_token";
const OIDC_TOKEN_FILE_PATH: &str = "oidc_token_file_path";
const USE_AKS_WORKLOAD_IDENTITY: &str = "use_aks_workload_identity";
const CLIENT_ID: &str = "client_id";
const CLIENT_ID_FILE_PATH: &str = "client_id_file_path";
const CLIENT_SECRET: &str = "client_secret";
const CLIENT_SECRET_FILE_PATH: &str = "client_secret_file_path";
const TENANT_ID: &str = "tenant_id";
const CLIENT_CERTIFICATE: &str = "client_certificate";

/// Environment variable holding the path of the federated token file
/// mounted by the AKS workload-identity webhook.
pub const AZURE_FEDERATED_TOKEN_FILE: &str = "AZURE_FEDERATED_TOKEN_FILE";

/// Environment variable holding the client ID injected by the AKS
/// workload-identity webhook.
pub const AZURE_CLIENT_ID: &str = "AZURE_CLIENT_ID";

/// Environment variable holding the tenant ID injected by the AKS
/// workload-identity webhook.
pub const AZURE_TENANT_ID: &str = "AZURE_TENANT_ID";

/// The credential fields the backend resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    /// Federated OIDC identity token.
    OidcToken,
    /// Azure AD application (client) ID.
    ClientId,
    /// Service-principal client secret.
    ClientSecret,
    /// Azure AD tenant ID.
    TenantId,
}

impl fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OidcToken => "OIDC token",
            Self::ClientId => "client ID",
            Self::ClientSecret => "client secret",
            Self::TenantId => "tenant ID",
        })
    }
}

/// Where a credential value came from. Used in mismatch errors to tell the
/// operator which two inputs disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Written directly in the backend configuration.
    Inline,
    /// Read from a file named by the backend configuration.
    File,
    /// Injected by the AKS workload-identity webhook.
    WorkloadIdentity,
}

impl SourceKind {
    pub(crate) fn resolution_hint(self) -> &'static str {
        match self {
            Self::WorkloadIdentity => {
                "remove one, ensure they match, or disable use_aks_workload_identity"
            }
            Self::Inline | Self::File => "remove one or ensure they match",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Inline => "the inline configuration",
            Self::File => "the configured file",
            Self::WorkloadIdentity => "AKS workload identity",
        })
    }
}

/// One candidate provider of a credential value.
///
/// The variants mirror the three ways configuration can hand us a value;
/// `EnvFile` is the federated-token special case where the environment
/// variable names a file rather than carrying the value itself.
enum Source<'a> {
    /// Value written inline in the configuration.
    Inline(&'a str),
    /// Path (from configuration) of a file holding the value.
    File(&'a str),
    /// Workload-identity environment variable carrying the value directly.
    EnvValue(&'a str),
    /// Workload-identity environment variable naming a file to read.
    EnvFile(&'a str),
}

/// All four credentials resolved in one pass.
///
/// `Debug` redacts the token and secret so the struct can be logged while
/// diagnosing configuration problems.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedCredentials {
    /// Federated OIDC identity token, if any source supplied one.
    pub oidc_token: Option<String>,
    /// Client ID, if any source supplied one.
    pub client_id: Option<String>,
    /// Client secret, if any source supplied one.
    pub client_secret: Option<String>,
    /// Tenant ID, if any source supplied one.
    pub tenant_id: Option<String>,
}

impl fmt::Debug for ResolvedCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedCredentials")
            .field("oidc_token", &self.oidc_token.as_ref().map(|_| "[REDACTED]"))
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .field("tenant_id", &self.tenant_id)
            .finish()
    }
}

/// Resolves the Azure AD credential fields from configuration, files, and
/// the workload-identity environment.
///
/// Stateless: each method is an independent scan over immutable inputs, so
/// the methods may be called in any order, repeatedly, or concurrently.
/// Construction is cheap; the backend builds one during configuration
/// validation and drops it once the credentials are extracted.
pub struct CredentialResolver<'a> {
    values: &'a ConfigValues,
    env: &'a dyn Environment,
    log: LogPolicy,
}

impl<'a> CredentialResolver<'a> {
    /// Create a resolver over the given configuration and environment.
    pub fn new(values: &'a ConfigValues, env: &'a dyn Environment, log: LogPolicy) -> Self {
        Self { values, env, log }
    }

    /// Resolve the federated OIDC token.
    ///
    /// Sources, in precedence order: inline `oidc_token`, the file at
    /// `oidc_token_file_path`, and the federated token file named by
    /// `AZURE_FEDERATED_TOKEN_FILE` when workload identity is enabled.
    pub fn oidc_token(&self) -> Result<Option<String>, CredentialError> {
        let inline = self.values.string(OIDC_TOKEN);
        let path = self.values.string(OIDC_TOKEN_FILE_PATH);
        self.resolve(
            CredentialKind::OidcToken,
            &[
                Source::Inline(&inline),
                Source::File(&path),
                Source::EnvFile(AZURE_FEDERATED_TOKEN_FILE),
            ],
        )
    }

    /// Resolve the client ID.
    ///
    /// Sources, in precedence order: inline `client_id`, the file at
    /// `client_id_file_path`, and `AZURE_CLIENT_ID` when workload identity
    /// is enabled.
    pub fn client_id(&self) -> Result<Option<String>, CredentialError> {
        let inline = self.values.string(CLIENT_ID);
        let path = self.values.string(CLIENT_ID_FILE_PATH);
        self.resolve(
            CredentialKind::ClientId,
            &[
                Source::Inline(&inline),
                Source::File(&path),
                Source::EnvValue(AZURE_CLIENT_ID),
            ],
        )
    }

    /// Resolve the client secret.
    ///
    /// Sources: inline `client_secret` and the file at
    /// `client_secret_file_path`. The workload-identity webhook never
    /// injects secrets, so unlike the other three fields there is no
    /// environment override.
    pub fn client_secret(&self) -> Result<Option<String>, CredentialError> {
        let inline = self.values.string(CLIENT_SECRET);
        let path = self.values.string(CLIENT_SECRET_FILE_PATH);
        self.resolve(
            CredentialKind::ClientSecret,
            &[Source::Inline(&inline), Source::File(&path)],
        )
    }

    /// Resolve the tenant ID.
    ///
    /// Sources: inline `tenant_id` and `AZURE_TENANT_ID` when workload
    /// identity is enabled. No file source exists for this field.
    pub fn tenant_id(&self) -> Result<Option<String>, CredentialError> {
        let inline = self.values.string(TENANT_ID);
        self.resolve(
            CredentialKind::TenantId,
            &[
                Source::Inline(&inline),
                Source::EnvValue(AZURE_TENANT_ID),
            ],
        )
    }

    /// Decode the inline `client_certificate` value into PFX bytes.
    ///
    /// An absent certificate decodes to an empty vector.
    pub fn client_certificate(&self) -> Result<Vec<u8>, CredentialError> {
        decode_client_certificate(&self.values.string(CLIENT_CERTIFICATE))
    }

    /// Resolve all four credential fields. The first failure aborts.
    pub fn resolve_all(&self) -> Result<ResolvedCredentials, CredentialError> {
        Ok(ResolvedCredentials {
            oidc_token: self.oidc_token()?,
            client_id: self.client_id()?,
            client_secret: self.client_secret()?,
            tenant_id: self.tenant_id()?,
        })
    }

    /// The shared override-and-conflict scan.
    ///
    /// Walks `sources` in precedence order, skipping inactive ones. Each
    /// active source's trimmed value supersedes the accumulated value,
    /// except that two non-empty values that disagree are a
    /// [`CredentialError::Mismatch`]. An empty final value collapses to
    /// `None`.
    fn resolve(
        &self,
        kind: CredentialKind,
        sources: &[Source<'_>],
    ) -> Result<Option<String>, CredentialError> {
        let mut resolved = String::new();
        let mut origin = SourceKind::Inline;

        for source in sources {
            let (candidate, source_kind) = match source {
                Source::Inline(raw) => {
                    let trimmed = raw.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    (trimmed.to_owned(), SourceKind::Inline)
                }
                Source::File(path) => {
                    if path.is_empty() {
                        continue;
                    }
                    let contents = self.read_credential_file(kind, path)?;
                    (contents.trim().to_owned(), SourceKind::File)
                }
                Source::EnvValue(var) => {
                    let Some(value) = self.workload_identity_var(var) else {
                        continue;
                    };
                    (value.trim().to_owned(), SourceKind::WorkloadIdentity)
                }
                Source::EnvFile(var) => {
                    let Some(path) = self.workload_identity_var(var) else {
                        continue;
                    };
                    let contents = self.read_credential_file(kind, &path)?;
                    (contents.trim().to_owned(), SourceKind::WorkloadIdentity)
                }
            };

            if !resolved.is_empty() && !candidate.is_empty() && resolved != candidate {
                return Err(CredentialError::Mismatch {
                    kind,
                    existing: origin,
                    candidate: source_kind,
                });
            }

            if self.log.is_enabled() {
                debug!(field = %kind, source = ?source_kind, "credential source active");
            }

            resolved = candidate;
            origin = source_kind;
        }

        if resolved.is_empty() {
            Ok(None)
        } else {
            Ok(Some(resolved))
        }
    }

    /// A workload-identity variable counts as set only when the feature
    /// flag is enabled and the variable is non-empty.
    fn workload_identity_var(&self, var: &str) -> Option<String> {
        if !self.values.bool(USE_AKS_WORKLOAD_IDENTITY) {
            return None;
        }
        self.env.var(var).filter(|value| !value.is_empty())
    }

    fn read_credential_file(
        &self,
        kind: CredentialKind,
        path: &str,
    ) -> Result<String, CredentialError> {
        self.env
            .read_file(path)
            .map_err(|source| CredentialError::Read {
                kind,
                path: path.to_owned(),
                source,
            })
    }
}
