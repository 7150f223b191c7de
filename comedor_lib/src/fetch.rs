//! Reusable async fetch primitive.
//!
//! A [`FetchHook`] runs a parameterless producer when it is mounted and
//! again whenever its dependencies change, and publishes the outcome as an
//! [`ApiState`]. Each run is tagged with a generation number; only the run
//! holding the latest generation of a still-mounted hook may commit. Stale
//! runs are not aborted, their results are just dropped.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use comedor_api::ApiError;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::state::ApiState;

pub type ProducerFuture<T> = Pin<Box<dyn Future<Output = Result<T, ApiError>> + Send>>;

/// Shared, re-invocable async call producing a `T`.
pub type Producer<T> = Arc<dyn Fn() -> ProducerFuture<T> + Send + Sync>;

/// Wraps an async closure as a [`Producer`].
pub fn producer<T, F, Fut>(f: F) -> Producer<T>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
{
    Arc::new(move || Box::pin(f()) as ProducerFuture<T>)
}

#[derive(Debug)]
struct Generation {
    current: u64,
    mounted: bool,
}

struct Shared<T> {
    generation: Mutex<Generation>,
    state: watch::Sender<ApiState<T>>,
}

impl<T> Shared<T> {
    /// Starts a new generation and resets the state to loading.
    fn begin(&self) -> Option<u64> {
        let mut gen = self.generation.lock().unwrap_or_else(|e| e.into_inner());
        if !gen.mounted {
            return None;
        }
        gen.current += 1;
        self.state.send_replace(ApiState::loading());
        Some(gen.current)
    }

    /// Publishes `result` if `generation` is still the latest of a mounted hook.
    /// The lock is held across the publish so a newer `begin` cannot interleave.
    fn commit(&self, generation: u64, result: Result<T, ApiError>) -> bool {
        let gen = self.generation.lock().unwrap_or_else(|e| e.into_inner());
        if !gen.mounted || gen.current != generation {
            tracing::debug!(
                "Discarding stale fetch result (generation {}, current {}, mounted {})",
                generation,
                gen.current,
                gen.mounted
            );
            return false;
        }
        self.state.send_replace(ApiState::from_result(result));
        true
    }

    fn retire(&self) {
        let mut gen = self.generation.lock().unwrap_or_else(|e| e.into_inner());
        gen.mounted = false;
        gen.current += 1;
    }
}

/// Fetch state owned by one consumer, re-run when its dependencies change.
///
/// Must be used inside a Tokio runtime. Dropping the hook unmounts it.
pub struct FetchHook<T, D> {
    shared: Arc<Shared<T>>,
    producer: Producer<T>,
    deps: D,
}

impl<T, D> FetchHook<T, D>
where
    T: Send + Sync + 'static,
    D: PartialEq,
{
    /// Creates the hook and starts the first run.
    pub fn mount(producer: Producer<T>, deps: D) -> Self {
        let (state, _) = watch::channel(ApiState::loading());
        let hook = Self {
            shared: Arc::new(Shared {
                generation: Mutex::new(Generation {
                    current: 0,
                    mounted: true,
                }),
                state,
            }),
            producer,
            deps,
        };
        hook.run();
        hook
    }

    /// Stores the latest producer and re-runs it if `deps` differ from the
    /// previous ones. Returns whether a run was started.
    pub fn update(&mut self, producer: Producer<T>, deps: D) -> bool {
        self.producer = producer;
        if self.deps == deps {
            return false;
        }
        self.deps = deps;
        self.run();
        true
    }

    /// Runs the current producer regardless of dependencies and waits for it
    /// to settle. A newer run or an unmount while it is in flight drops its
    /// result silently.
    pub async fn refetch(&self) {
        if let Some(handle) = self.run() {
            if let Err(e) = handle.await {
                tracing::debug!("Refetch task did not finish: {}", e);
            }
        }
    }

    pub fn deps(&self) -> &D {
        &self.deps
    }

    /// Receiver notified on every committed state change.
    pub fn subscribe(&self) -> watch::Receiver<ApiState<T>> {
        self.shared.state.subscribe()
    }

    /// Stops accepting results. In-flight runs keep going but never commit.
    pub fn unmount(self) {
        drop(self);
    }

    fn run(&self) -> Option<JoinHandle<()>> {
        let generation = self.shared.begin()?;
        let shared = Arc::clone(&self.shared);
        let producer = Arc::clone(&self.producer);
        Some(tokio::spawn(async move {
            // Run the producer in its own task so a panic surfaces as a JoinError.
            let result = match tokio::spawn(async move { producer().await }).await {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!("Fetch producer failed: {}", e);
                    Err(ApiError::aborted(e))
                }
            };
            shared.commit(generation, result);
        }))
    }
}

impl<T: Clone, D> FetchHook<T, D> {
    /// Current state snapshot.
    pub fn state(&self) -> ApiState<T> {
        self.shared.state.borrow().clone()
    }
}

impl<T, D> Drop for FetchHook<T, D> {
    fn drop(&mut self) {
        self.shared.retire();
    }
}
