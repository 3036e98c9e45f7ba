//! Property-test run profile read from the environment.
//!
//! Property suites in every crate call [`ProptestRunProfile::load`] so CI
//! can raise case counts or enable forking without touching the code.

use std::env;

/// Environment variable overriding the number of proptest cases.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable enabling forked proptest execution.
pub const RANDGRAPH_PBT_FORK_ENV_KEY: &str = "RANDGRAPH_PBT_FORK";

/// Case count and fork mode for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads overrides from the environment, keeping `default_cases` and
    /// `default_fork` for variables that are unset or malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use randgraph_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROPTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(RANDGRAPH_PBT_FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub fn cases(&self) -> u32 { self.cases }

    /// Whether each case runs in a forked subprocess.
    #[must_use]
    #[rustfmt::skip]
    pub fn fork(&self) -> bool { self.fork }
}

fn override_or<T>(key: &'static str, default: T, parse: fn(&str) -> Result<T, String>) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "ignoring malformed property-test override",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be positive".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("not a case count: {error}")),
    }
}

fn parse_flag(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("unrecognised flag `{other}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Sets or clears both keys for the lifetime of the guard, restoring the
    /// previous values on drop while holding [`ENV_LOCK`].
    struct ScopedEnv {
        saved: Vec<(&'static str, Option<String>)>,
        _lock: MutexGuard<'static, ()>,
    }

    impl ScopedEnv {
        fn new(cases: Option<&str>, fork: Option<&str>) -> Self {
            let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
            let mut saved = Vec::new();
            for (key, value) in [
                (PROPTEST_CASES_ENV_KEY, cases),
                (RANDGRAPH_PBT_FORK_ENV_KEY, fork),
            ] {
                saved.push((key, env::var(key).ok()));
                apply(key, value);
            }
            Self { saved, _lock: lock }
        }
    }

    fn apply(key: &str, value: Option<&str>) {
        match value {
            // SAFETY: every test touching these keys holds ENV_LOCK.
            Some(value) => unsafe { env::set_var(key, value) },
            // SAFETY: every test touching these keys holds ENV_LOCK.
            None => unsafe { env::remove_var(key) },
        }
    }

    impl Drop for ScopedEnv {
        fn drop(&mut self) {
            for (key, value) in &self.saved {
                apply(key, value.as_deref());
            }
        }
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let _env = ScopedEnv::new(None, None);
        assert_eq!(
            ProptestRunProfile::load(48, true),
            ProptestRunProfile {
                cases: 48,
                fork: true
            }
        );
    }

    #[rstest]
    #[case(" 1 ", 1)]
    #[case("512", 512)]
    fn case_overrides_are_honoured(#[case] raw: &str, #[case] expected: u32) {
        let _env = ScopedEnv::new(Some(raw), None);
        assert_eq!(ProptestRunProfile::load(48, false).cases(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-3")]
    #[case("many")]
    fn malformed_case_overrides_fall_back(#[case] raw: &str) {
        let _env = ScopedEnv::new(Some(raw), None);
        assert_eq!(ProptestRunProfile::load(48, false).cases(), 48);
    }

    #[rstest]
    #[case("On", true)]
    #[case("yes", true)]
    #[case("0", false)]
    #[case("FALSE", false)]
    fn fork_overrides_are_honoured(#[case] raw: &str, #[case] expected: bool) {
        let _env = ScopedEnv::new(None, Some(raw));
        assert_eq!(ProptestRunProfile::load(48, !expected).fork(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("sometimes")]
    fn malformed_fork_overrides_fall_back(#[case] raw: &str) {
        let _env = ScopedEnv::new(None, Some(raw));
        assert!(ProptestRunProfile::load(48, true).fork());
    }
}
