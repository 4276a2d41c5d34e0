//! Reactive value cells
//!
//! A [`Signal`] is the smallest reactive input: a shared value plus a dirty
//! flag the host render loop watches. Setting a signal to a different value
//! marks the flag so the next frame re-renders; the theme provider then
//! reads the new value and decides whether its snapshot is stale.
//!
//! ```rust
//! use prim_core::Signal;
//!
//! let width = Signal::new(390.0_f32);
//! width.set(820.0);
//! assert_eq!(width.get(), 820.0);
//! assert!(width.take_dirty());
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Shared dirty flag for triggering UI rebuilds
pub type DirtyFlag = Arc<AtomicBool>;

/// Shared, observable value
pub struct Signal<T> {
    value: Arc<RwLock<T>>,
    version: Arc<AtomicU64>,
    dirty_flag: DirtyFlag,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            version: Arc::clone(&self.version),
            dirty_flag: Arc::clone(&self.dirty_flag),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("value", &*self.value.read().unwrap())
            .field("version", &self.version())
            .finish()
    }
}

impl<T> Signal<T> {
    /// Number of effective changes so far
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    /// The dirty flag this signal reports on
    pub fn dirty_flag(&self) -> &DirtyFlag {
        &self.dirty_flag
    }

    /// Read and clear the dirty flag
    pub fn take_dirty(&self) -> bool {
        self.dirty_flag.swap(false, Ordering::SeqCst)
    }

    fn request_rebuild(&self) {
        self.dirty_flag.store(true, Ordering::SeqCst);
    }
}

impl<T: Clone + PartialEq> Signal<T> {
    /// Create a signal with its own dirty flag
    pub fn new(initial: T) -> Self {
        Self::with_dirty_flag(initial, Arc::new(AtomicBool::new(false)))
    }

    /// Create a signal that reports changes on a shared dirty flag
    pub fn with_dirty_flag(initial: T, dirty_flag: DirtyFlag) -> Self {
        Self {
            value: Arc::new(RwLock::new(initial)),
            version: Arc::new(AtomicU64::new(0)),
            dirty_flag,
        }
    }

    /// Current value
    pub fn get(&self) -> T {
        self.value.read().unwrap().clone()
    }

    /// Replace the value; equal values are ignored
    pub fn set(&self, value: T) {
        let mut current = self.value.write().unwrap();
        if *current == value {
            return;
        }
        *current = value;
        drop(current);

        let version = self.version.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::trace!("Signal::set - version {}", version);
        self.request_rebuild();
    }

    /// Update the value with a function of the current one
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.value.read().unwrap());
        self.set(next);
    }
}
