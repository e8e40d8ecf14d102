//! Shareable handle to a Bevy `App` for rspec environments.

use bevy::prelude::App;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// App wrapper that may cross the rspec environment's `Send + Sync` bound.
#[derive(Debug)]
pub struct ThreadSafeApp(pub App);

// SAFETY: suites using this wrapper run serially and every access goes
// through the surrounding mutex, so the app is never touched from two threads
// at once.
unsafe impl Send for ThreadSafeApp {}
unsafe impl Sync for ThreadSafeApp {}

/// Shared pointer type for the wrapped app.
pub type SharedApp = Arc<Mutex<ThreadSafeApp>>;

/// Locks the shared app, recovering from a poisoned mutex.
pub fn lock_app(app: &SharedApp) -> MutexGuard<'_, ThreadSafeApp> {
    app.lock().unwrap_or_else(PoisonError::into_inner)
}
