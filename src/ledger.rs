//! Per-instance invocation history.
//!
//! The ledger maps call-site identity to the ordered sequence of calls made
//! to that operation. Histories for operations with different signatures
//! live in one map behind a small type-erased trait; the typed history is
//! recovered by downcast under the site's own `Args` type.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use crate::logging;
use crate::reference::{CallId, CallRef};

/// One recorded call: the arguments passed and the call's position within
/// its operation's history (0-based, contiguous).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<Args> {
    /// Arguments the operation was called with.
    pub arguments: Args,
    /// Position of this call in the operation's history.
    pub sequence: usize,
}

/// Object-safe view over one operation's typed history.
trait ErasedHistory {
    fn call_count(&self) -> usize;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<Args: 'static> ErasedHistory for Vec<Invocation<Args>> {
    fn call_count(&self) -> usize {
        self.len()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

struct OperationHistory {
    operation: &'static str,
    calls: Box<dyn ErasedHistory>,
}

/// Ordered call history for every operation of one mock instance.
///
/// One entry per call, in call order; entries are never reordered or
/// removed except by an explicit reset. The ledger never rejects a call.
#[derive(Default)]
pub struct Ledger {
    histories: HashMap<CallId, OperationHistory>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one invocation for `site` and return its sequence index.
    ///
    /// Sequence indices start at 0 and stay contiguous per operation.
    pub fn record<Args, Ret>(&mut self, site: &CallRef<Args, Ret>, arguments: Args) -> usize
    where
        Args: 'static,
    {
        let slot = self
            .histories
            .entry(site.id())
            .or_insert_with(|| OperationHistory {
                operation: site.name(),
                calls: Box::new(Vec::<Invocation<Args>>::new()),
            });
        let calls = match slot
            .calls
            .as_any_mut()
            .downcast_mut::<Vec<Invocation<Args>>>()
        {
            Some(calls) => calls,
            // Ids are process-unique and every ref carries one signature.
            None => unreachable!("call id {} reused with a different signature", site.id()),
        };
        let sequence = calls.len();
        calls.push(Invocation {
            arguments,
            sequence,
        });
        logging::log_call_recorded(site.name(), sequence);
        sequence
    }

    /// Full history for `site`, in call order. Empty if never called.
    pub fn invocations<Args, Ret>(&self, site: &CallRef<Args, Ret>) -> Vec<Invocation<Args>>
    where
        Args: Clone + 'static,
    {
        self.histories
            .get(&site.id())
            .and_then(|slot| slot.calls.as_any().downcast_ref::<Vec<Invocation<Args>>>())
            .cloned()
            .unwrap_or_default()
    }

    /// Number of calls recorded for `site`.
    pub fn count<Args, Ret>(&self, site: &CallRef<Args, Ret>) -> usize {
        self.histories
            .get(&site.id())
            .map(|slot| slot.calls.call_count())
            .unwrap_or(0)
    }

    /// True iff `site` has been called at least once.
    pub fn has_invoked<Args, Ret>(&self, site: &CallRef<Args, Ret>) -> bool {
        self.count(site) > 0
    }

    /// True iff `site` has been called exactly `n` times, not "at least".
    pub fn has_invoked_exactly<Args, Ret>(&self, site: &CallRef<Args, Ret>, n: usize) -> bool {
        self.count(site) == n
    }

    /// Clear every operation's history.
    pub fn reset(&mut self) {
        self.histories.clear();
        logging::log_history_reset(None);
    }

    /// Clear history for `site` only; other operations are untouched.
    pub fn reset_site<Args, Ret>(&mut self, site: &CallRef<Args, Ret>) {
        self.histories.remove(&site.id());
        logging::log_history_reset(Some(site.name()));
    }

    /// Iterate `(id, operation, call count)` for every recorded operation.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (CallId, &'static str, usize)> + '_ {
        self.histories
            .iter()
            .map(|(id, slot)| (*id, slot.operation, slot.calls.call_count()))
    }
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("operations", &self.histories.len())
            .finish()
    }
}
