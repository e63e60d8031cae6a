pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const HELP_MESSAGE: &str = "Show this help message and exit.";

pub(crate) const OPERATION_NAME: &str = "operation";
pub(crate) const OPERATION_MESSAGE: &str = "Operation to perform (default: sum).";

pub(crate) const NUMBERS_NAME: &str = "N";
pub(crate) const NUMBERS_MESSAGE: &str = "Numeric values to process.";

// Ends option processing; every later token is positional.
pub(crate) const OPTIONS_TERMINATOR: &str = "--";
