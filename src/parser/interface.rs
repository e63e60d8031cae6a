use crate::parser::{ErrorContext, ParseError};

/// Where the Cli writes its output.
pub(crate) trait UserInterface {
    /// Print to standard output (the result, or the help message).
    fn print(&self, message: String);

    /// Print to standard error, followed by the position in the input where the error happened.
    fn print_error(&self, error: ParseError, error_context: ErrorContext);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError, error_context: ErrorContext) {
        eprintln!("{error}");
        eprintln!("{error_context}");
    }
}
