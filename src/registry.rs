//! Stubbed result providers, one slot per operation.
//!
//! Each call site owns at most one provider. Registering again replaces the
//! previous provider wholesale; there is no queueing or per-call matching.
//! Providers of unrelated signatures share one map the same way ledger
//! histories do, erased behind `Any` and recovered by downcast.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::logging;
use crate::reference::{CallId, CallRef};

struct StubSlot {
    operation: &'static str,
    provider: Box<dyn Any>,
}

/// Single-slot provider registry keyed by call-site identity.
#[derive(Default)]
pub struct StubRegistry {
    slots: HashMap<CallId, StubSlot>,
}

impl StubRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `provider` for `site`, replacing any previous one.
    ///
    /// The provider receives the full argument value of each call and
    /// computes that call's result.
    pub fn register<Args, Ret>(
        &mut self,
        site: &CallRef<Args, Ret>,
        provider: impl Fn(Args) -> Ret + 'static,
    ) where
        Args: 'static,
        Ret: 'static,
    {
        let provider: Rc<dyn Fn(Args) -> Ret> = Rc::new(provider);
        let replaced = self
            .slots
            .insert(
                site.id(),
                StubSlot {
                    operation: site.name(),
                    provider: Box::new(provider),
                },
            )
            .is_some();
        logging::log_provider_registered(site.name(), replaced);
    }

    /// The provider currently installed for `site`, if any.
    ///
    /// Returns a clone of the slot's `Rc` so the caller can run the
    /// provider without holding any borrow of the registry.
    pub fn provider_for<Args, Ret>(
        &self,
        site: &CallRef<Args, Ret>,
    ) -> Option<Rc<dyn Fn(Args) -> Ret>>
    where
        Args: 'static,
        Ret: 'static,
    {
        self.slots
            .get(&site.id())
            .and_then(|slot| slot.provider.downcast_ref::<Rc<dyn Fn(Args) -> Ret>>())
            .cloned()
    }

    /// True iff `site` currently has a provider installed.
    pub fn is_registered<Args, Ret>(&self, site: &CallRef<Args, Ret>) -> bool {
        self.slots.contains_key(&site.id())
    }

    /// Iterate `(id, operation)` for every registered slot.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (CallId, &'static str)> + '_ {
        self.slots.iter().map(|(id, slot)| (*id, slot.operation))
    }
}

impl fmt::Debug for StubRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StubRegistry")
            .field("slots", &self.slots.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_provider_round_trips() {
        let mut registry = StubRegistry::new();
        let site: CallRef<(String, i32), String> = CallRef::new("format");
        registry.register(&site, |(text, n)| format!("{text}:{n}"));

        let provider = registry.provider_for(&site).unwrap();
        assert_eq!((*provider)(("x".to_string(), 7)), "x:7");
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = StubRegistry::new();
        let site: CallRef<i32, i32> = CallRef::new("scale");
        registry.register(&site, |n| n * 2);
        registry.register(&site, |n| n * 10);

        let provider = registry.provider_for(&site).unwrap();
        assert_eq!((*provider)(3), 30);
    }

    #[test]
    fn test_unregistered_site_has_no_provider() {
        let registry = StubRegistry::new();
        let site: CallRef<i32, i32> = CallRef::new("absent");
        assert!(registry.provider_for(&site).is_none());
        assert!(!registry.is_registered(&site));
    }

    #[test]
    fn test_registration_is_per_site_not_per_signature() {
        let mut registry = StubRegistry::new();
        let first: CallRef<i32, i32> = CallRef::new("same_shape");
        let second: CallRef<i32, i32> = CallRef::new("same_shape");
        registry.register(&first, |n| n + 1);

        assert!(registry.is_registered(&first));
        assert!(!registry.is_registered(&second));
    }
}
