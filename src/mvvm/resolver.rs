//! # Resolver
//!
//! Keyed lookup of data sources and initializers. A resolver is populated once
//! through `ResolverBuilder` and is read-only afterwards. Keys are a closed
//! enum; string tokens are parsed into it and unknown tokens are a hard error.

use super::error::{MvvmError, Result};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use std::sync::Arc;

type Constructor<T> = Box<dyn Fn() -> Arc<T> + Send + Sync>;

/// Immutable registry from key to constructor
pub struct Resolver<K, T: ?Sized> {
    registry: HashMap<K, Constructor<T>>,
}

impl<K, T> Resolver<K, T>
where
    K: Copy + Eq + Hash + fmt::Display,
    T: ?Sized,
{
    pub fn builder() -> ResolverBuilder<K, T> {
        ResolverBuilder {
            registry: HashMap::new(),
        }
    }

    /// Instance registered under `key`
    pub fn resolve(&self, key: K) -> Result<Arc<T>> {
        let constructor = self
            .registry
            .get(&key)
            .ok_or_else(|| MvvmError::KeyNotFound(key.to_string()))?;
        tracing::debug!("Resolved `{}`", key);
        Ok(constructor())
    }

    /// Instance registered under the key named by `token`
    pub fn resolve_token(&self, token: &str) -> Result<Arc<T>>
    where
        K: FromStr,
    {
        let key = token
            .parse::<K>()
            .map_err(|_| MvvmError::KeyNotFound(token.to_string()))?;
        self.resolve(key)
    }

    pub fn contains(&self, key: K) -> bool {
        self.registry.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl<K: fmt::Debug, T: ?Sized> fmt::Debug for Resolver<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("keys", &self.registry.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Configuration surface for a `Resolver`
pub struct ResolverBuilder<K, T: ?Sized> {
    registry: HashMap<K, Constructor<T>>,
}

impl<K, T> ResolverBuilder<K, T>
where
    K: Copy + Eq + Hash + fmt::Display,
    T: ?Sized,
{
    /// Register a constructor; a later registration for the same key replaces it
    pub fn register(
        mut self,
        key: K,
        constructor: impl Fn() -> Arc<T> + Send + Sync + 'static,
    ) -> Self {
        self.registry.insert(key, Box::new(constructor));
        self
    }

    /// Register one shared instance returned on every resolve
    pub fn register_singleton(self, key: K, instance: Arc<T>) -> Self
    where
        T: Send + Sync + 'static,
    {
        self.register(key, move || Arc::clone(&instance))
    }

    pub fn build(self) -> Resolver<K, T> {
        Resolver {
            registry: self.registry,
        }
    }
}
