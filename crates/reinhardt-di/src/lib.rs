//! # Reinhardt Dependency Injection
//!
//! Scoped service resolution for isolated render calls.
//!
//! ## Scopes
//!
//! - **Singleton**: registered once at startup, shared by every call.
//! - **Local**: created fresh for one call and cleared when the call's scope is
//!   disposed.
//!
//! A [`ScopeFactory`] hands out [`ServiceScope`]s; callers hold them through a
//! [`ScopeGuard`], which disposes the scope exactly once when it is dropped,
//! whichever way the owning call ends.
//!
//! ## Example
//!
//! ```
//! use reinhardt_di::{DefaultScopeFactory, ScopeGuard};
//!
//! let factory = DefaultScopeFactory::new();
//! factory.singletons().set(String::from("https://example.com"));
//!
//! {
//!     let guard = ScopeGuard::acquire(&factory).unwrap();
//!     let ctx = guard.context();
//!     ctx.set_local(7u32);
//!     assert_eq!(*ctx.resolve::<u32>().unwrap(), 7);
//!     assert_eq!(ctx.resolve::<String>().unwrap().as_str(), "https://example.com");
//! } // disposed here
//! ```

pub mod context;
pub mod error;
pub mod factory;
pub mod scope;

pub use context::InjectionContext;
pub use error::{DiError, DiResult};
pub use factory::{DefaultScopeFactory, ScopeFactory, ScopeGuard, ServiceScope};
pub use scope::{LocalScope, SingletonScope};
