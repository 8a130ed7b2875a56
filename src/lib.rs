//! Invocation recording and stub resolution for hand-written test doubles.
//!
//! A substitute implementation of a trait holds one [`Mock`] plus one
//! [`CallRef`] per operation, implements [`Mockable`], and routes every
//! method body through an `invoke*` entry point. The mock records each call
//! with its exact arguments and resolves the result through whatever
//! provider the test registered for that operation.
//!
//! ```
//! use mockbase::{CallRef, Mock, Mockable};
//!
//! trait Printer {
//!     fn print(&self, text: &str);
//! }
//!
//! struct MockPrinter {
//!     mock: Mock,
//!     print_ref: CallRef<String, ()>,
//! }
//!
//! impl MockPrinter {
//!     fn new() -> Self {
//!         Self {
//!             mock: Mock::new(),
//!             print_ref: CallRef::new("print"),
//!         }
//!     }
//! }
//!
//! impl Mockable for MockPrinter {
//!     fn mock(&self) -> &Mock {
//!         &self.mock
//!     }
//! }
//!
//! impl Printer for MockPrinter {
//!     fn print(&self, text: &str) {
//!         self.invoke_unit(&self.print_ref, text.to_string());
//!     }
//! }
//!
//! let printer = MockPrinter::new();
//! printer.print("Hello!");
//!
//! assert!(printer.has_invoked(&printer.print_ref));
//! assert_eq!(printer.invocations(&printer.print_ref)[0].arguments, "Hello!");
//! ```

pub mod ledger;
mod logging;
pub mod mock;
pub mod reference;
pub mod registry;
pub mod report;
use miette::Diagnostic;

pub use ledger::{Invocation, Ledger};
pub use mock::{Mock, Mockable};
pub use reference::{CallId, CallRef};
pub use registry::StubRegistry;
pub use report::{MockReport, OperationReport};

/// Result type alias for mock resolution
pub type Result<T> = std::result::Result<T, MockError>;

/// Error types for mock resolution
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum MockError {
    #[error("No result registered for operation: {operation}")]
    #[diagnostic(
        code(mockbase::missing_stub),
        help("Register a result provider for this operation with `register` before invoking it, or call it through an optional or fallback entry point.")
    )]
    MissingStub { operation: &'static str },
}
