//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` and `global_test_lock()` to prevent environment variable pollution.
//! - Every test starts with all `MODE_*` variables cleared.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

const MODE_VARS: [&str; 7] = [
    "MODE_BASE_URL",
    "MODE_ORGANIZATION",
    "MODE_API_TOKEN",
    "MODE_API_PASSWORD",
    "MODE_TIMEOUT",
    "MODE_CONFIG_PATH",
    "MODE_PROFILE",
];

/// Run `f` with every `MODE_*` variable cleared, then `vars` applied.
pub fn with_mode_env<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let mut all: Vec<(&str, Option<&str>)> = MODE_VARS.iter().map(|k| (*k, None)).collect();
    for (key, value) in vars {
        all.retain(|(k, _)| k != key);
        all.push((*key, Some(*value)));
    }
    temp_env::with_vars(all, f)
}
