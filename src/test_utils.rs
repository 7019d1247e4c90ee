use std::sync::{Mutex, MutexGuard};

/// Serializes tests that touch process-wide environment variables.
pub static ENV_MUTEX: Mutex<()> = Mutex::new(());

pub fn lock_env() -> MutexGuard<'static, ()> {
    ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner())
}
