use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Every variable the config layer reads.
const CONFIG_VARS: [&str; 9] = [
    "INCINERATOR_API_KEY",
    "GEMINI_API_KEY",
    "API_KEY",
    "INCINERATOR_MODEL",
    "INCINERATOR_FALLBACK_MODEL",
    "INCINERATOR_TEMPERATURE",
    "INCINERATOR_LANG",
    "LANG",
    "LC_MESSAGES",
];

/// Exclusive, self-restoring view of the process environment for one test.
///
/// Holds the lock for its whole life and puts every touched variable back on
/// drop, newest change first.
pub(super) struct EnvScope {
    saved: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvScope {
    /// Lock the environment and unset all config variables.
    pub(super) fn clean() -> Self {
        let mut scope = Self {
            saved: Vec::new(),
            _lock: ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner),
        };
        for key in CONFIG_VARS {
            scope.unset(key);
        }
        scope
    }

    pub(super) fn set(&mut self, key: &'static str, value: &str) -> &mut Self {
        self.saved.push((key, std::env::var(key).ok()));
        // SAFETY: ENV_LOCK is held, so no other test touches the environment.
        unsafe {
            std::env::set_var(key, value);
        }
        self
    }

    pub(super) fn unset(&mut self, key: &'static str) -> &mut Self {
        self.saved.push((key, std::env::var(key).ok()));
        // SAFETY: ENV_LOCK is held.
        unsafe {
            std::env::remove_var(key);
        }
        self
    }
}

impl Drop for EnvScope {
    fn drop(&mut self) {
        while let Some((key, previous)) = self.saved.pop() {
            // SAFETY: ENV_LOCK is released only after this loop.
            unsafe {
                match previous {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
