use std::io;

/// Read-only access to the process environment and local files.
///
/// Credential resolution needs two ambient inputs: environment variables
/// (the workload-identity webhook injects credentials that way) and the
/// contents of small local files named by configuration. Both are behind
/// this trait so resolution can run against a deterministic in-memory
/// environment in tests, see
/// [`MemoryEnvironment`](crate::testing::MemoryEnvironment).
///
/// Implementations must be `Send + Sync`; resolvers only perform reads, so
/// they may be invoked concurrently against a shared environment.
pub trait Environment: Send + Sync {
    /// Look up an environment variable. Returns `None` if unset or not
    /// valid UTF-8; may return `Some("")` for a variable set to the empty
    /// string. Callers decide whether that counts as set.
    fn var(&self, name: &str) -> Option<String>;

    /// Read the entire contents of the file at `path` as UTF-8.
    fn read_file(&self, path: &str) -> io::Result<String>;
}

/// The real process environment and filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEnvironment;

impl Environment for OsEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn read_file(&self, path: &str) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}
