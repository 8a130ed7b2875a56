//! Consumer crate showing how a hand-written substitute plugs into code
//! under test.

/// Anything that can print a line of text.
pub trait Printer {
    fn print(&self, text: &str);
}

/// The production implementation.
pub struct ConsolePrinter;

impl Printer for ConsolePrinter {
    fn print(&self, text: &str) {
        println!("{text}");
    }
}

/// Greets `name` through whatever printer it is given.
pub fn greet(printer: &dyn Printer, name: &str) {
    printer.print(&format!("Hello, {name}!"));
}
