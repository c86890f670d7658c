//! Caller-owned singleton slots
//!
//! Factories are created lazily and torn down explicitly, but the slot that
//! holds them lives wherever the caller puts it (usually the composition root)
//! instead of in a process global. Accessors hand out borrows of the slot, so
//! an instance cannot be used after `delete_instance`.

use std::any::type_name;
use std::fmt;

/// Lazily-created, explicitly-deleted holder for at most one `T`
pub struct Singleton<T> {
    instance: Option<T>,
    create: fn() -> T,
    generation: u64,
}

impl<T> Singleton<T> {
    /// Create an empty slot that builds its instance with `create`
    pub const fn new(create: fn() -> T) -> Self {
        Self {
            instance: None,
            create,
            generation: 0,
        }
    }

    /// Get the instance, creating it on first access
    ///
    /// Repeated calls without an intervening [`Singleton::delete_instance`]
    /// return the same instance.
    pub fn get_instance(&mut self) -> &mut T {
        if self.instance.is_none() {
            self.generation += 1;
            log::debug!(
                "Creating {} instance (generation {})",
                type_name::<T>(),
                self.generation
            );
        }
        let create = self.create;
        self.instance.get_or_insert_with(create)
    }

    /// Destroy the instance if present
    ///
    /// Returns whether an instance was destroyed; calling it on an empty slot is a no-op.
    pub fn delete_instance(&mut self) -> bool {
        match self.instance.take() {
            Some(instance) => {
                log::debug!("Deleting {} instance", type_name::<T>());
                drop(instance);
                true
            }
            None => false,
        }
    }

    /// Borrow the instance without creating it
    pub fn instance(&self) -> Option<&T> {
        self.instance.as_ref()
    }

    /// Whether an instance currently exists
    pub fn is_alive(&self) -> bool {
        self.instance.is_some()
    }

    /// Number of instances this slot has constructed so far
    ///
    /// Two accesses observed under the same generation refer to the same instance.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<T: Default> Default for Singleton<T> {
    fn default() -> Self {
        Self::new(T::default)
    }
}

impl<T> fmt::Debug for Singleton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Singleton")
            .field("type", &type_name::<T>())
            .field("alive", &self.is_alive())
            .field("generation", &self.generation)
            .finish()
    }
}
