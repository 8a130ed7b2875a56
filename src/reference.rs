//! Call-site identity for mocked operations.
//!
//! Every operation a substitute implements is named by one [`CallRef`],
//! declared as a field of the substitute and constructed once when the mock
//! instance is built. The ref is the key under which calls are recorded and
//! result providers are registered, independent of the operation's argument
//! and return shape.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CALL_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique identity of one mocked operation.
///
/// Identities are allocated from a global counter, so refs created
/// separately never collide, even for operations with identical signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallId(u64);

impl CallId {
    fn next() -> Self {
        CallId(NEXT_CALL_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw identity value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifies one operation on one mock instance.
///
/// `Args` and `Ret` tie the ref to the operation's signature at compile
/// time; the marker is never invoked. By convention `Args` is the bare value
/// for a single-argument operation, a tuple for several arguments, and `()`
/// for none.
pub struct CallRef<Args, Ret> {
    id: CallId,
    name: &'static str,
    _signature: PhantomData<fn(Args) -> Ret>,
}

impl<Args, Ret> CallRef<Args, Ret> {
    /// Create a ref with a fresh, process-unique identity.
    pub fn new(name: &'static str) -> Self {
        Self {
            id: CallId::next(),
            name,
            _signature: PhantomData,
        }
    }

    /// The identity calls and stubs are keyed under.
    pub fn id(&self) -> CallId {
        self.id
    }

    /// Operation name, used in diagnostics and reports.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

// Manual impls so `Args` and `Ret` carry no bounds.
impl<Args, Ret> Clone for CallRef<Args, Ret> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Args, Ret> Copy for CallRef<Args, Ret> {}

impl<Args, Ret> PartialEq for CallRef<Args, Ret> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<Args, Ret> Eq for CallRef<Args, Ret> {}

impl<Args, Ret> Hash for CallRef<Args, Ret> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<Args, Ret> fmt::Debug for CallRef<Args, Ret> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallRef")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}
