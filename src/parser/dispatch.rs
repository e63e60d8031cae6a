use std::env;

use crate::matcher::{match_tokens, Matched};
use crate::parser::{
    capture, ConsoleInterface, ErrorContext, ParseError, Printer, UserInterface,
};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The `sum_five` command line program.
///
/// ### Example
/// ```
/// use sum_five::CommandLine;
///
/// let command_line = CommandLine::new("program");
///
/// assert_eq!(command_line.parse_tokens(&["1", "2", "3", "4", "5"]), Ok(15.0));
/// assert_eq!(
///     command_line.parse_tokens(&["--operation", "multiply", "1", "2", "3", "4", "5", "6"]),
///     Ok(720.0)
/// );
/// assert_eq!(command_line.parse_tokens(&["1", "2"]), Err(1));
/// ```
pub struct CommandLine {
    program: String,
    about: Option<String>,
}

impl CommandLine {
    /// Create the command line program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            about: None,
        }
    }

    /// Document the about message, shown under the usage line of `--help`.
    /// If repeated, only the final message will apply.
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// Run the command line program against the input tokens.
    ///
    /// Processing happens in phases:
    /// 1. Token matching aligns the tokens to `--operation`, `--help`, and the positional numbers.
    /// 2. Token capturing converts each token into its type, then checks the count of numbers against the operation.
    /// 3. The operation reduces the numbers, and the result is printed.
    ///
    /// If at any point an error is encountered (ex: unknown option, invalid float, wrong count of numbers), the error is printed and this returns `Err(1)`.
    ///
    /// If the help switch (`-h` or `--help`) is encountered, the help message is printed and this returns `Err(0)`.
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<f64, i32> {
        let printer = Printer::terminal(self.program.clone(), self.about.clone());
        invoke(tokens, &printer, &ConsoleInterface::default())
    }

    /// Run the command line program against the environment's arguments ([`std::env::args`]).
    ///
    /// Exits with the `parse_tokens` error code (via [`std::process::exit`]) when the result is not printed.
    pub fn run(&self) {
        let command_input: Vec<String> = env::args().skip(1).collect();

        if let Err(exit_code) = self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            std::process::exit(exit_code);
        }
    }
}

/// Format a result as a floating point literal (ex: `15.0`, `-0.5`, `1e100`).
///
/// Values in scientific notation carry no decimal point (ex: `1e16`, `1e-5`).
pub fn format_number(value: f64) -> String {
    format!("{value:?}")
}

fn invoke(
    tokens: &[&str],
    printer: &Printer,
    user_interface: &(impl UserInterface + ?Sized),
) -> Result<f64, i32> {
    let fail = |offset: usize, error: ParseError| {
        user_interface.print_error(error, ErrorContext::new(offset, tokens));
        1
    };

    let (operation, numbers) = match match_tokens(tokens) {
        Ok(Matched::Help) => {
            printer.print_help(user_interface);
            return Err(0);
        }
        Ok(Matched::Parameters { operation, numbers }) => (operation, numbers),
        Err((offset, error)) => return Err(fail(offset, error.into())),
    };

    let end_offset: usize = tokens.iter().map(|token| token.len()).sum();
    let invocation =
        capture(operation, numbers, end_offset).map_err(|(offset, error)| fail(offset, error.into()))?;

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Captured {invocation:?}.");
    }

    let result = invocation
        .operation
        .reduce(&invocation.numbers)
        .map_err(|error| fail(end_offset, error.into()))?;
    user_interface.print(format_number(result));
    Ok(result)
}
