//! # Statekit Runtime
//!
//! Runtime implementation of the statekit state container.
//!
//! ## Core Components
//!
//! - **Store**: Owns the current state, runs the root reducer on every
//!   dispatched action, and fans the action out to subscribers
//! - **Subscription**: A subscriber's view of the dispatch stream
//!
//! ## Example
//!
//! ```
//! use statekit_core::{Action, Reducer};
//! use statekit_runtime::Store;
//!
//! #[derive(Clone, Debug)]
//! struct Increment;
//!
//! impl Action for Increment {
//!     fn action_type(&self) -> &'static str {
//!         "INCREMENT"
//!     }
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = u32;
//!     type Action = Increment;
//!
//!     fn reduce(&self, state: &mut u32, _action: Increment) {
//!         *state += 1;
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let store = Store::new(0, CounterReducer);
//! let mut subscription = store.subscribe();
//!
//! store.send(Increment).await;
//!
//! assert_eq!(store.state(|count| *count).await, 1);
//! assert_eq!(subscription.next().await.map(|a| a.action_type()), Ok("INCREMENT"));
//! # });
//! ```

use statekit_core::{action::Action, reducer::Reducer};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Metric names recorded by the store
pub mod metrics;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur while observing a Store
    ///
    /// Dispatching never fails: reducers are total, so every action is
    /// applied. Errors only surface on the subscriber side.
    #[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
    pub enum StoreError {
        /// Every handle to the store was dropped
        ///
        /// Returned by [`Subscription::next`](crate::Subscription::next) once
        /// buffered notifications are drained.
        #[error("Store closed: no further notifications")]
        Closed,
    }
}

pub use error::StoreError;

/// Default number of notifications buffered per subscriber
pub const DEFAULT_BROADCAST_CAPACITY: usize = 64;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use statekit_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_broadcast_capacity(256);
/// assert_eq!(config.broadcast_capacity, 256);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Notifications buffered for each subscriber before the slowest one
    /// starts skipping
    pub broadcast_capacity: usize,
}

impl StoreConfig {
    /// Create a new configuration (capacity clamped to at least 1)
    #[must_use]
    pub const fn new(broadcast_capacity: usize) -> Self {
        Self {
            broadcast_capacity: clamp_capacity(broadcast_capacity),
        }
    }

    /// Set the subscriber channel capacity (clamped to at least 1)
    #[must_use]
    pub const fn with_broadcast_capacity(mut self, capacity: usize) -> Self {
        self.broadcast_capacity = clamp_capacity(capacity);
        self
    }
}

// The broadcast channel cannot be created with zero slots
const fn clamp_capacity(capacity: usize) -> usize {
    if capacity == 0 { 1 } else { capacity }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            broadcast_capacity: DEFAULT_BROADCAST_CAPACITY,
        }
    }
}

/// Store module - the runtime coordinator
pub mod store {
    use super::{Action, Arc, Reducer, RwLock, StoreConfig, StoreError};
    use crate::metrics::{
        DISPATCH_TOTAL, NOTIFICATIONS_SKIPPED_TOTAL, REDUCER_DURATION_SECONDS, SUBSCRIBERS,
    };
    use tokio::sync::broadcast;

    /// The Store - runtime coordinator for a root reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`; readers share, dispatch is exclusive)
    /// 2. Reducer (state transitions)
    /// 3. Subscribers (one notification per dispatched action)
    ///
    /// A `Store` is an explicit context object rather than a global: create
    /// one with the initial state and hand clones to whatever owns the UI
    /// loop. Clones share the same state and subscribers. Dropping the last
    /// clone tears the store down.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, R>
    where
        R: Reducer<State = S, Action = A>,
    {
        state: Arc<RwLock<S>>,
        reducer: Arc<R>,
        /// Every dispatched action is published here after the reducer ran.
        notifications: broadcast::Sender<A>,
    }

    impl<S, A, R> Store<S, A, R>
    where
        R: Reducer<State = S, Action = A> + Send + Sync + 'static,
        A: Action,
        S: Send + Sync + 'static,
    {
        /// Create a new store with initial state and reducer
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R) -> Self {
            Self::with_config(initial_state, reducer, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        ///
        /// # Arguments
        ///
        /// - `initial_state`: Initial state value
        /// - `reducer`: The root reducer
        /// - `config`: Subscriber channel configuration
        #[must_use]
        pub fn with_config(initial_state: S, reducer: R, config: StoreConfig) -> Self {
            let (notifications, _) = broadcast::channel(config.broadcast_capacity.max(1));

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                notifications,
            }
        }

        /// Dispatch an action
        ///
        /// Runs the reducer to completion under the state write lock, then
        /// notifies every subscriber. Notification happens even when the
        /// reducer left state unchanged. Concurrent senders are serialized,
        /// and notifications are published before the lock is released, so
        /// subscribers observe actions in the order they were applied.
        ///
        /// ```ignore
        /// store.send(TodoAction::DeleteCompleted).await;
        /// ```
        #[tracing::instrument(skip_all, name = "store_send", fields(action_type = action.action_type(), tag = action.tag()))]
        pub async fn send(&self, action: A) {
            metrics::counter!(DISPATCH_TOTAL).increment(1);

            let mut state = self.state.write().await;
            tracing::trace!("Acquired write lock on state");

            let start = std::time::Instant::now();
            self.reducer.reduce(&mut *state, action.clone());
            metrics::histogram!(REDUCER_DURATION_SECONDS).record(start.elapsed().as_secs_f64());

            // No receivers is not an error: nobody is listening yet.
            let notified = self.notifications.send(action).unwrap_or(0);

            // Note: Precision loss acceptable for metrics
            #[allow(clippy::cast_precision_loss)]
            metrics::gauge!(SUBSCRIBERS).set(notified as f64);

            drop(state);
            tracing::debug!(notified, "Action processed");
        }

        /// Read current state via a closure
        ///
        /// Access state through a closure to ensure the lock is released promptly:
        ///
        /// ```ignore
        /// let count = store.state(|s| s.todos.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Clone the whole current state
        pub async fn snapshot(&self) -> S
        where
            S: Clone,
        {
            self.state(S::clone).await
        }

        /// Subscribe to dispatches
        ///
        /// The subscription sees every action sent after this call.
        #[must_use]
        pub fn subscribe(&self) -> Subscription<A> {
            Subscription {
                receiver: self.notifications.subscribe(),
            }
        }

        /// Number of live subscriptions
        #[must_use]
        pub fn subscriber_count(&self) -> usize {
            self.notifications.receiver_count()
        }
    }

    impl<S, A, R> Clone for Store<S, A, R>
    where
        R: Reducer<State = S, Action = A>,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                notifications: self.notifications.clone(),
            }
        }
    }

    impl<S, A, R> std::fmt::Debug for Store<S, A, R>
    where
        R: Reducer<State = S, Action = A>,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("subscribers", &self.notifications.receiver_count())
                .finish_non_exhaustive()
        }
    }

    /// A subscriber's handle on a store's dispatch stream
    ///
    /// Returned by [`Store::subscribe`]. Each subscription has its own
    /// bounded buffer; when a subscriber falls more than the configured
    /// capacity behind, the oldest notifications are skipped and a warning
    /// is logged.
    #[derive(Debug)]
    pub struct Subscription<A> {
        receiver: broadcast::Receiver<A>,
    }

    impl<A: Clone> Subscription<A> {
        /// Wait for the next dispatched action
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::Closed`] once the store has been dropped and
        /// all buffered notifications were consumed.
        pub async fn next(&mut self) -> Result<A, StoreError> {
            loop {
                match self.receiver.recv().await {
                    Ok(action) => return Ok(action),
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        Self::record_lag(skipped);
                    },
                    Err(broadcast::error::RecvError::Closed) => return Err(StoreError::Closed),
                }
            }
        }

        /// Take the next dispatched action if one is already buffered
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::Closed`] once the store has been dropped and
        /// all buffered notifications were consumed.
        pub fn try_next(&mut self) -> Result<Option<A>, StoreError> {
            loop {
                match self.receiver.try_recv() {
                    Ok(action) => return Ok(Some(action)),
                    Err(broadcast::error::TryRecvError::Empty) => return Ok(None),
                    Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                        Self::record_lag(skipped);
                    },
                    Err(broadcast::error::TryRecvError::Closed) => return Err(StoreError::Closed),
                }
            }
        }

        fn record_lag(skipped: u64) {
            tracing::warn!(skipped, "Subscriber lagged, {} notifications skipped", skipped);
            metrics::counter!(NOTIFICATIONS_SKIPPED_TOTAL).increment(skipped);
        }
    }
}

// Re-export for convenience
pub use store::{Store, Subscription};
