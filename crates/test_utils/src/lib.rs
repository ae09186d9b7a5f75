//! Default create requests and workflow graphs for catalog integration tests.
//!
//! Services and data entities are produced through two kind-keyed
//! registries ([`factory`]); single-shape entities such as users or test
//! cases have plain constructors in [`fixtures`].

pub mod admin;
pub mod factory;
pub mod fixtures;
pub mod names;
pub mod workflow;

pub use admin::{int_admin_client, AdminBootstrapError};
pub use factory::{get_create_entity, get_create_service};
pub use fixtures::*;
pub use names::generate_name;
pub use workflow::get_test_dag;

use once_cell::sync::Lazy;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Global mutex to serialize tests that modify the process working directory.
/// Changing the directory concurrently can lead to nondeterministic failures.
pub static TEST_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Temporarily change the current working directory for the duration of the closure.
/// Always restores the original directory, even if the closure panics.
pub fn with_chdir<F, T>(target: impl AsRef<Path>, f: F) -> std::io::Result<T>
where
    F: FnOnce() -> T,
{
    // a test that panicked while holding the lock still restored the directory
    let _lock = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

    let original = env::current_dir()?;
    env::set_current_dir(target.as_ref())?;

    struct Reset(PathBuf);
    impl Drop for Reset {
        fn drop(&mut self) {
            let _ = env::set_current_dir(&self.0);
        }
    }
    let _guard = Reset(original);

    Ok(f())
}
