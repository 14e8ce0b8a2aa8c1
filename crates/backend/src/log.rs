use crate::env::Environment;

/// Environment variable that turns on backend debug diagnostics.
pub const LOG_VAR: &str = "STRATUS_LOG";

/// Environment variable set by the acceptance-test harness; diagnostics
/// stay quiet while it is set so they don't pollute test output.
pub const ACC_VAR: &str = "STRATUS_ACC";

/// Injected policy deciding whether backends emit debug diagnostics.
///
/// Resolution outcomes never depend on this; it only gates `tracing`
/// output. Passing it explicitly (rather than consulting the process
/// environment at each call site) keeps the resolvers free of ambient
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogPolicy {
    enabled: bool,
}

impl LogPolicy {
    /// A policy that emits diagnostics.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// A policy that stays quiet.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Derive the policy from the environment: enabled iff [`LOG_VAR`] is
    /// set non-empty and [`ACC_VAR`] is not.
    pub fn from_environment(env: &dyn Environment) -> Self {
        let logging_on = env.var(LOG_VAR).is_some_and(|v| !v.is_empty());
        let acceptance_run = env.var(ACC_VAR).is_some_and(|v| !v.is_empty());
        Self {
            enabled: logging_on && !acceptance_run,
        }
    }

    /// Whether debug diagnostics should be emitted.
    pub fn is_enabled(self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryEnvironment;

    #[test]
    fn disabled_by_default() {
        let env = MemoryEnvironment::new();
        assert!(!LogPolicy::from_environment(&env).is_enabled());
    }

    #[test]
    fn enabled_when_log_var_set() {
        let env = MemoryEnvironment::new().with_var(LOG_VAR, "debug");
        assert!(LogPolicy::from_environment(&env).is_enabled());
    }

    #[test]
    fn empty_log_var_does_not_enable() {
        let env = MemoryEnvironment::new().with_var(LOG_VAR, "");
        assert!(!LogPolicy::from_environment(&env).is_enabled());
    }

    #[test]
    fn acceptance_run_suppresses_diagnostics() {
        let env = MemoryEnvironment::new()
            .with_var(LOG_VAR, "debug")
            .with_var(ACC_VAR, "1");
        assert!(!LogPolicy::from_environment(&env).is_enabled());
    }

    #[test]
    fn explicit_constructors() {
        assert!(LogPolicy::enabled().is_enabled());
        assert!(!LogPolicy::disabled().is_enabled());
    }
}
