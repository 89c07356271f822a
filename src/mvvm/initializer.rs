//! # Initializers
//!
//! Initializers seed a Model's initial content. The synchronous form writes a
//! value and returns; the asynchronous form fetches from a collaborator and
//! accepts a cooperative cancellation token.

use super::error::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Synchronous one-shot seeding of a Model
pub trait VmInitializer: Send + Sync {
    fn initialize(&self) -> Result<()>;
}

/// Cancellable asynchronous seeding of a Model
#[async_trait]
pub trait VmInitializerAsync: Send + Sync {
    /// Fails with `InvalidArgument` when `token` is `None`
    async fn initialize_async(&self, token: Option<&CancellationToken>) -> Result<()>;
}

/// Cooperative cancellation signal shared between a caller and an initializer
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Later calls are no-ops.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancellation_requested(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
