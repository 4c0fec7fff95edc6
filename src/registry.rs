//! Lifetime-aware service registry.
//!
//! The composition root registers every capability here as a mapping from
//! its Rust type to a lifetime policy and a construction rule. Components
//! never reach for a process-wide accessor; whoever needs to resolve
//! services receives the registry handle at construction.
//!
//! # Lifetimes
//!
//! - [`Lifetime::Singleton`] - one shared instance for the registry's life
//! - [`Lifetime::Transient`] - a fresh instance per resolution
//! - [`Lifetime::Scoped`] - one instance per [`Scope`]; the root registry
//!   acts as the root scope

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

/// How long an instance produced by a registration lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    /// One shared instance, created on first resolution.
    Singleton,
    /// A fresh instance on every resolution.
    Transient,
    /// One instance per scope.
    Scoped,
}

/// Resolution failures. Construction failure of a registered service at
/// first resolution time is fatal to startup; nothing in this crate
/// recovers from it.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("no service registered for `{service}`")]
    NotRegistered { service: &'static str },

    #[error("registered factory for `{service}` produced a value of a different type")]
    TypeMismatch { service: &'static str },

    #[error("failed to construct `{service}`")]
    Construction {
        service: &'static str,
        #[source]
        source: Box<RegistryError>,
    },
}

type BoxedService = Box<dyn Any + Send + Sync>;
type ServiceFactory =
    Box<dyn Fn(&ServiceRegistry) -> Result<BoxedService, RegistryError> + Send + Sync>;
type ServiceCache = Mutex<HashMap<TypeId, BoxedService>>;

struct Registration {
    lifetime: Lifetime,
    type_name: &'static str,
    factory: ServiceFactory,
}

/// Maps service types to lifetime policies and construction rules.
///
/// Registrations are added while building the composition root and are
/// immutable afterward; resolution is `&self` and safe to share behind an
/// `Arc`.
#[derive(Default)]
pub struct ServiceRegistry {
    registrations: HashMap<TypeId, Registration>,
    root_cache: ServiceCache,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a construction rule for `T` under the given lifetime.
    ///
    /// Factories receive the registry so they can resolve their own
    /// dependencies, and may fail; the failure surfaces at resolution time
    /// wrapped in [`RegistryError::Construction`].
    pub fn register<T, F>(&mut self, lifetime: Lifetime, factory: F)
    where
        T: Any + Clone + Send + Sync,
        F: Fn(&ServiceRegistry) -> Result<T, RegistryError> + Send + Sync + 'static,
    {
        self.registrations.insert(
            TypeId::of::<T>(),
            Registration {
                lifetime,
                type_name: type_name::<T>(),
                factory: Box::new(move |registry| {
                    factory(registry).map(|service| Box::new(service) as BoxedService)
                }),
            },
        );
    }

    /// Resolve an instance of `T` honoring its declared lifetime.
    ///
    /// Scoped services resolved here are cached in the root's own cache:
    /// the root registry doubles as the root scope.
    pub fn resolve<T>(&self) -> Result<T, RegistryError>
    where
        T: Any + Clone + Send + Sync,
    {
        let registration = self.registration_for::<T>()?;
        match registration.lifetime {
            Lifetime::Transient => self.construct::<T>(registration),
            Lifetime::Singleton | Lifetime::Scoped => {
                self.resolve_cached::<T>(registration, &self.root_cache)
            }
        }
    }

    /// Open a scope. Scoped services resolved through it are shared within
    /// the scope and dropped with it.
    pub fn create_scope(&self) -> Scope<'_> {
        Scope {
            registry: self,
            scoped_cache: Mutex::new(HashMap::new()),
        }
    }

    fn registration_for<T: Any>(&self) -> Result<&Registration, RegistryError> {
        self.registrations
            .get(&TypeId::of::<T>())
            .ok_or(RegistryError::NotRegistered {
                service: type_name::<T>(),
            })
    }

    fn construct<T>(&self, registration: &Registration) -> Result<T, RegistryError>
    where
        T: Any + Clone + Send + Sync,
    {
        let service =
            (registration.factory)(self).map_err(|source| RegistryError::Construction {
                service: registration.type_name,
                source: Box::new(source),
            })?;
        service
            .downcast::<T>()
            .map(|service| *service)
            .map_err(|_| RegistryError::TypeMismatch {
                service: registration.type_name,
            })
    }

    fn resolve_cached<T>(
        &self,
        registration: &Registration,
        cache: &ServiceCache,
    ) -> Result<T, RegistryError>
    where
        T: Any + Clone + Send + Sync,
    {
        let id = TypeId::of::<T>();
        if let Some(existing) = cache.lock().expect("service cache poisoned").get(&id) {
            return existing
                .downcast_ref::<T>()
                .cloned()
                .ok_or(RegistryError::TypeMismatch {
                    service: registration.type_name,
                });
        }

        // Construct outside the lock so factories may resolve their own
        // dependencies through the same cache. First insert wins if two
        // resolutions race.
        let constructed = self.construct::<T>(registration)?;
        let mut cache = cache.lock().expect("service cache poisoned");
        let entry = cache
            .entry(id)
            .or_insert_with(|| Box::new(constructed) as BoxedService);
        entry
            .downcast_ref::<T>()
            .cloned()
            .ok_or(RegistryError::TypeMismatch {
                service: registration.type_name,
            })
    }
}

/// A resolution scope created by [`ServiceRegistry::create_scope`].
///
/// Scoped registrations are cached here; singleton and transient
/// resolutions delegate to the owning registry.
pub struct Scope<'registry> {
    registry: &'registry ServiceRegistry,
    scoped_cache: ServiceCache,
}

impl Scope<'_> {
    pub fn resolve<T>(&self) -> Result<T, RegistryError>
    where
        T: Any + Clone + Send + Sync,
    {
        let registration = self.registry.registration_for::<T>()?;
        match registration.lifetime {
            Lifetime::Scoped => self
                .registry
                .resolve_cached::<T>(registration, &self.scoped_cache),
            _ => self.registry.resolve::<T>(),
        }
    }
}
