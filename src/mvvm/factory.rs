//! # Factories
//!
//! A factory assembles a ViewModel, its data source and its initializer into
//! an `Infrastructure` bundle exactly once per session.

use super::data_source::{ReentryPolicy, VmDataSource};
use super::error::{MvvmError, Result};
use super::guard::require;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// One-shot assembler of an infrastructure bundle
pub trait Factory {
    type Output;

    /// Assemble the bundle. A second call fails with `AlreadyCreated` under
    /// the strict policy.
    fn create(&self) -> Result<Self::Output>;

    fn is_created(&self) -> bool;
}

/// `NotCreated -> Created` guard shared by every concrete factory
pub struct CreateGuard<B> {
    name: &'static str,
    policy: ReentryPolicy,
    created: Mutex<Option<B>>,
}

impl<B: Clone> CreateGuard<B> {
    pub fn new(name: &'static str, policy: ReentryPolicy) -> Self {
        Self {
            name,
            policy,
            created: Mutex::new(None),
        }
    }

    /// Run `build` on the first call; later calls fail or return the first bundle.
    ///
    /// A failed `build` leaves the guard in `NotCreated`.
    pub fn create_with(&self, build: impl FnOnce() -> Result<B>) -> Result<B> {
        let mut created = self.created.lock();
        if let Some(existing) = created.as_ref() {
            return match self.policy {
                ReentryPolicy::Strict => Err(MvvmError::AlreadyCreated(self.name)),
                ReentryPolicy::Tolerant => {
                    tracing::debug!("{} already created, returning existing bundle", self.name);
                    Ok(existing.clone())
                }
            };
        }

        let bundle = build()?;
        *created = Some(bundle.clone());
        tracing::info!("{} created", self.name);
        Ok(bundle)
    }

    pub fn is_created(&self) -> bool {
        self.created.lock().is_some()
    }
}

impl<B> fmt::Debug for CreateGuard<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateGuard")
            .field("name", &self.name)
            .field("policy", &self.policy)
            .field("created", &self.created.lock().is_some())
            .finish()
    }
}

/// Immutable bundle handed to the presentation layer
pub struct Infrastructure<VM, I: ?Sized> {
    view_model: Arc<VM>,
    data_source: Arc<dyn VmDataSource>,
    initializer: Arc<I>,
}

impl<VM, I: ?Sized> Infrastructure<VM, I> {
    pub fn builder() -> InfrastructureBuilder<VM, I> {
        InfrastructureBuilder {
            view_model: None,
            data_source: None,
            initializer: None,
        }
    }

    pub fn view_model(&self) -> &Arc<VM> {
        &self.view_model
    }

    pub fn data_source(&self) -> &Arc<dyn VmDataSource> {
        &self.data_source
    }

    pub fn initializer(&self) -> &Arc<I> {
        &self.initializer
    }
}

impl<VM, I: ?Sized> Clone for Infrastructure<VM, I> {
    fn clone(&self) -> Self {
        Self {
            view_model: Arc::clone(&self.view_model),
            data_source: Arc::clone(&self.data_source),
            initializer: Arc::clone(&self.initializer),
        }
    }
}

impl<VM, I: ?Sized> fmt::Debug for Infrastructure<VM, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Infrastructure")
            .field("view_model", &std::any::type_name::<VM>())
            .field("data_source", &self.data_source.name())
            .field("state", &self.data_source.state())
            .finish()
    }
}

/// Collects the three collaborators; `build` fails if any is missing
pub struct InfrastructureBuilder<VM, I: ?Sized> {
    view_model: Option<Arc<VM>>,
    data_source: Option<Arc<dyn VmDataSource>>,
    initializer: Option<Arc<I>>,
}

impl<VM, I: ?Sized> InfrastructureBuilder<VM, I> {
    pub fn view_model(mut self, view_model: Arc<VM>) -> Self {
        self.view_model = Some(view_model);
        self
    }

    pub fn data_source(mut self, data_source: Arc<dyn VmDataSource>) -> Self {
        self.data_source = Some(data_source);
        self
    }

    pub fn initializer(mut self, initializer: Arc<I>) -> Self {
        self.initializer = Some(initializer);
        self
    }

    pub fn build(self) -> Result<Infrastructure<VM, I>> {
        Ok(Infrastructure {
            view_model: require(self.view_model, "view_model")?,
            data_source: require(self.data_source, "data_source")?,
            initializer: require(self.initializer, "initializer")?,
        })
    }
}
