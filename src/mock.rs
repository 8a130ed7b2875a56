//! Mock base and the `Mockable` surface.
//!
//! A substitute type holds one [`Mock`] and routes every method body through
//! one of the `invoke*` entry points, chosen by the operation's result shape.
//! The entry points all record first, then resolve, so the call is in the
//! ledger even when resolution fails fatally.

use std::cell::RefCell;

use crate::ledger::{Invocation, Ledger};
use crate::logging;
use crate::reference::CallRef;
use crate::registry::StubRegistry;
use crate::report::{self, MockReport};
use crate::{MockError, Result};

/// Recording and stubbing state for one substitute instance.
///
/// Composes an invocation [`Ledger`] and a [`StubRegistry`] behind `RefCell`,
/// scoped to this instance. `Mock` is single-threaded by construction; tests
/// that need a shared handle clone an `Rc<Mock>`.
#[derive(Debug, Default)]
pub struct Mock {
    ledger: RefCell<Ledger>,
    registry: RefCell<StubRegistry>,
}

impl Mock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Mockable for Mock {
    fn mock(&self) -> &Mock {
        self
    }
}

/// The test-facing surface of a substitute type.
///
/// Implementors supply [`mock`](Mockable::mock); everything else is provided.
/// Providers run outside any internal borrow, so a provider may call back
/// into the same mock.
pub trait Mockable {
    /// The mock state this instance delegates to.
    fn mock(&self) -> &Mock;

    /// Install `provider` as the sole result source for `site`.
    ///
    /// Registering again for the same site replaces the previous provider.
    fn register<Args, Ret, F>(&self, site: &CallRef<Args, Ret>, provider: F)
    where
        Args: 'static,
        Ret: 'static,
        F: Fn(Args) -> Ret + 'static,
    {
        self.mock().registry.borrow_mut().register(site, provider);
    }

    /// Record the call, then resolve it through the registered provider.
    ///
    /// Panics if no provider is registered for `site`; the recorded call
    /// survives the panic. Use [`try_invoke`](Mockable::try_invoke) to treat
    /// a missing provider as a recoverable error instead.
    fn invoke<Args, Ret>(&self, site: &CallRef<Args, Ret>, args: Args) -> Ret
    where
        Args: Clone + 'static,
        Ret: 'static,
    {
        match self.try_invoke(site, args) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Record the call, then resolve it, reporting a missing provider as
    /// [`MockError::MissingStub`] instead of panicking.
    fn try_invoke<Args, Ret>(&self, site: &CallRef<Args, Ret>, args: Args) -> Result<Ret>
    where
        Args: Clone + 'static,
        Ret: 'static,
    {
        let mock = self.mock();
        mock.ledger.borrow_mut().record(site, args.clone());
        let provider = mock.registry.borrow().provider_for(site);
        match provider {
            Some(provider) => Ok((*provider)(args)),
            None => {
                logging::log_missing_stub(site.name());
                Err(MockError::MissingStub {
                    operation: site.name(),
                })
            }
        }
    }

    /// Record the call, then resolve an optional-result operation.
    ///
    /// An unregistered site yields `None` rather than an error.
    fn invoke_optional<Args, T>(&self, site: &CallRef<Args, Option<T>>, args: Args) -> Option<T>
    where
        Args: Clone + 'static,
        T: 'static,
    {
        let mock = self.mock();
        mock.ledger.borrow_mut().record(site, args.clone());
        let provider = mock.registry.borrow().provider_for(site);
        match provider {
            Some(provider) => (*provider)(args),
            None => {
                logging::log_unstubbed_optional(site.name());
                None
            }
        }
    }

    /// Record the call, then resolve it, using `fallback` when no provider
    /// is registered.
    fn invoke_or<Args, Ret>(&self, site: &CallRef<Args, Ret>, args: Args, fallback: Ret) -> Ret
    where
        Args: Clone + 'static,
        Ret: 'static,
    {
        let mock = self.mock();
        mock.ledger.borrow_mut().record(site, args.clone());
        let provider = mock.registry.borrow().provider_for(site);
        match provider {
            Some(provider) => (*provider)(args),
            None => {
                logging::log_fallback_used(site.name());
                fallback
            }
        }
    }

    /// Record a call to a unit-result operation.
    ///
    /// Nothing is resolved, so the arguments need not be `Clone`; completion
    /// callbacks and other move-only values can be recorded as-is and later
    /// inspected through [`invocations`](Mockable::invocations) when they are.
    fn invoke_unit<Args>(&self, site: &CallRef<Args, ()>, args: Args)
    where
        Args: 'static,
    {
        self.mock().ledger.borrow_mut().record(site, args);
    }

    /// Every recorded call to `site`, in call order.
    fn invocations<Args, Ret>(&self, site: &CallRef<Args, Ret>) -> Vec<Invocation<Args>>
    where
        Args: Clone + 'static,
    {
        self.mock().ledger.borrow().invocations(site)
    }

    /// True iff `site` has been called at least once.
    fn has_invoked<Args, Ret>(&self, site: &CallRef<Args, Ret>) -> bool {
        self.mock().ledger.borrow().has_invoked(site)
    }

    /// True iff `site` has been called exactly `n` times.
    fn has_invoked_exactly<Args, Ret>(&self, site: &CallRef<Args, Ret>, n: usize) -> bool {
        self.mock().ledger.borrow().has_invoked_exactly(site, n)
    }

    /// Clear the recorded history of every operation.
    ///
    /// Registered providers are untouched; sequence indices restart at 0.
    fn reset_invocations(&self) {
        self.mock().ledger.borrow_mut().reset();
    }

    /// Clear the recorded history of `site` only.
    fn reset_invocations_for<Args, Ret>(&self, site: &CallRef<Args, Ret>) {
        self.mock().ledger.borrow_mut().reset_site(site);
    }

    /// Per-operation diagnostics for this instance.
    fn report(&self) -> MockReport {
        let mock = self.mock();
        report::collect(&mock.ledger.borrow(), &mock.registry.borrow())
    }
}
