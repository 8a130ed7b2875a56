//! Per-operation diagnostics snapshot.
//!
//! A report merges the ledger and registry views of one mock instance:
//! every operation that was called or stubbed appears once, with its call
//! count and whether a provider is currently registered. Reports serialize
//! to JSON for harnesses that collect them.

use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::ledger::Ledger;
use crate::reference::CallId;
use crate::registry::StubRegistry;

/// Diagnostics for one operation of a mock instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationReport {
    /// Operation name, as given to `CallRef::new`.
    pub operation: String,
    /// Number of recorded calls.
    pub calls: usize,
    /// Whether a result provider is currently registered.
    pub stubbed: bool,
}

/// Diagnostics for every operation a mock instance has seen.
///
/// Operations are ordered by name, so two reports over the same state
/// compare and serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MockReport {
    pub operations: Vec<OperationReport>,
}

pub(crate) fn collect(ledger: &Ledger, registry: &StubRegistry) -> MockReport {
    let mut merged: HashMap<CallId, OperationReport> = HashMap::new();
    for (id, operation, calls) in ledger.entries() {
        merged.insert(
            id,
            OperationReport {
                operation: operation.to_string(),
                calls,
                stubbed: false,
            },
        );
    }
    for (id, operation) in registry.entries() {
        merged
            .entry(id)
            .or_insert_with(|| OperationReport {
                operation: operation.to_string(),
                calls: 0,
                stubbed: false,
            })
            .stubbed = true;
    }
    let operations = merged
        .into_iter()
        // Name first; ids break ties between same-named operations.
        .sorted_by(|(a_id, a), (b_id, b)| {
            a.operation
                .cmp(&b.operation)
                .then(a_id.as_u64().cmp(&b_id.as_u64()))
        })
        .map(|(_, report)| report)
        .collect();
    MockReport { operations }
}

impl fmt::Display for MockReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operations.is_empty() {
            return write!(f, "no operations recorded or stubbed");
        }
        for (i, op) in self.operations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let stub = if op.stubbed { "stubbed" } else { "unstubbed" };
            write!(f, "{}: {} call(s), {}", op.operation, op.calls, stub)?;
        }
        Ok(())
    }
}
