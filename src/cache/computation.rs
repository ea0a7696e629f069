//! Keyed memoization with at-most-one computation per key.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

use crate::error::Error;

/// A fully concurrent, keyed cache of computation results.
///
/// `get` returns the value computed for a key, computing it on first
/// request. The guarantees are:
///
/// - **Deterministic per key**: every call for an equal key observes the
///   same result, returned as a clone of one shared [`Arc`], so the value
///   itself is computed and allocated once.
/// - **At-most-one computation per key**: when several threads request an
///   uncomputed key, exactly one of them runs the computation; the others
///   block until it completes and then share its result.
/// - **No cross-key blocking**: the computation runs outside the cache's
///   internal lock, so a slow key never delays requests for other keys.
///   For the same reason the computation function may itself call back
///   into a cache for *different* keys; requesting the key currently being
///   computed from within its own computation deadlocks.
/// - **Failures are cached**: an `Err` result is stored like any value and
///   re-raised (cloned) by every present and future `get` of that key.
///
/// Key equality follows `Eq + Hash`: keys that compare equal share one
/// computation regardless of how they were constructed.
///
/// The computation function may be called concurrently for distinct keys
/// and must therefore be `Send + Sync`.
pub struct ComputationCache<K, V, E = Error> {
    slots: Mutex<HashMap<K, Arc<Slot<V, E>>>>,
    compute: Box<dyn Fn(&K) -> Result<V, E> + Send + Sync>,
}

enum SlotState<V, E> {
    /// Inserted, nobody has claimed the computation yet.
    Pending,
    /// One thread is running the computation function.
    Running,
    /// Computation finished; the stored result is handed to every waiter.
    Ready(Result<Arc<V>, E>),
    /// The computation function panicked. Waiters panic instead of
    /// blocking forever.
    Poisoned,
}

struct Slot<V, E> {
    state: Mutex<SlotState<V, E>>,
    done: Condvar,
}

impl<V, E> Slot<V, E> {
    fn new() -> Self {
        Slot {
            state: Mutex::new(SlotState::Pending),
            done: Condvar::new(),
        }
    }
}

/// Marks the slot poisoned if the computation function unwinds, waking all
/// waiters so they fail loudly instead of deadlocking.
struct PoisonOnUnwind<'a, V, E> {
    slot: &'a Slot<V, E>,
    armed: bool,
}

impl<V, E> Drop for PoisonOnUnwind<'_, V, E> {
    fn drop(&mut self) {
        if self.armed {
            let mut state = lock_unpoisoned(&self.slot.state);
            *state = SlotState::Poisoned;
            self.slot.done.notify_all();
        }
    }
}

/// Mutex poisoning only signals that another thread panicked; the protected
/// state machine stays consistent, so recover the guard and continue.
fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<K, V, E> ComputationCache<K, V, E>
where
    K: Eq + Hash + Clone,
    E: Clone,
{
    /// Creates a cache that computes missing values with `compute`.
    pub fn new<F>(compute: F) -> Self
    where
        F: Fn(&K) -> Result<V, E> + Send + Sync + 'static,
    {
        ComputationCache {
            slots: Mutex::new(HashMap::new()),
            compute: Box::new(compute),
        }
    }

    /// Returns the value associated with `key`, computing it if this is the
    /// first request.
    ///
    /// Blocks if another thread is currently computing the same key.
    /// A cached `Err` is returned (cloned) on every call.
    pub fn get(&self, key: K) -> Result<Arc<V>, E> {
        let slot = {
            let mut slots = lock_unpoisoned(&self.slots);
            Arc::clone(
                slots
                    .entry(key.clone())
                    .or_insert_with(|| Arc::new(Slot::new())),
            )
        };

        let claimed = {
            let mut state = lock_unpoisoned(&slot.state);
            match *state {
                SlotState::Pending => {
                    *state = SlotState::Running;
                    true
                }
                _ => false,
            }
        };

        if claimed {
            // Run the computation without holding any lock so that other
            // keys stay fully available meanwhile.
            let mut guard = PoisonOnUnwind {
                slot: &slot,
                armed: true,
            };
            let result = (self.compute)(&key).map(Arc::new);
            guard.armed = false;

            let output = result.clone();
            let mut state = lock_unpoisoned(&slot.state);
            *state = SlotState::Ready(result);
            slot.done.notify_all();
            return output;
        }

        let mut state = lock_unpoisoned(&slot.state);
        loop {
            match &*state {
                SlotState::Ready(result) => return result.clone(),
                SlotState::Poisoned => {
                    panic!("computation for a cached key panicked")
                }
                SlotState::Pending | SlotState::Running => {
                    state = slot
                        .done
                        .wait(state)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            }
        }
    }
}
