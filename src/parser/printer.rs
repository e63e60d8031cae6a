use sum_five_core::Operation;
use terminal_size::{terminal_size, Width};

use crate::constant::*;
use crate::parser::UserInterface;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// We'll target 95% of the total width, to ensure the renderer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_MIDDLE_WIDTH: usize = 17;
// Used when the terminal width is unknown (ex: output is piped).
const DEFAULT_MIDDLE_WIDTH: usize = 40;
const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 1;
const CHOICE_INDENT: usize = 2;

/// Lays out `left` and `middle` columns, wrapping the middle column.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ColumnRenderer {
    left: usize,
    middle: usize,
}

impl ColumnRenderer {
    /// Produce a renderer based off the widest left/middle cells.
    /// This renderer will use a heuristic to chose the middle width.
    pub(crate) fn guided(left: usize, middle: usize, total_width: Option<usize>) -> Self {
        let non_middle = left + PADDING_WIDTH;

        let middle = match total_width {
            Some(total_width) => {
                let target_total_width = (total_width as f64 * TARGET_TOTAL_FACTOR) as usize;

                if middle + non_middle <= target_total_width {
                    middle
                } else {
                    std::cmp::max(
                        target_total_width.saturating_sub(non_middle),
                        MINIMUM_MIDDLE_WIDTH,
                    )
                }
            }
            None => std::cmp::min(middle, DEFAULT_MIDDLE_WIDTH),
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Columns left={left} middle={middle} (total {total_width:?}).");
        }

        Self {
            left,
            middle: std::cmp::max(middle, 2),
        }
    }

    pub(crate) fn render(&self, indent: usize, left: &str, middle: &str) -> Vec<String> {
        let padding = " ".repeat(PADDING_WIDTH);
        let left_cell = format!("{:indent$}{left}", "");
        let mut out: Vec<String> = chunk(middle, self.middle)
            .into_iter()
            .enumerate()
            .map(|(i, part)| {
                let left = if i == 0 { left_cell.as_str() } else { "" };
                format!("{left:width$}{padding}{part}", width = self.left)
            })
            .collect();

        if out.is_empty() {
            out.push(left_cell);
        }

        out
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.len() + word.len() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

// Words longer than the width are broken across lines, each piece ending in a hyphen.
fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let increment = width - 1;
    let characters: Vec<char> = word.chars().collect();
    let mut left = 0;

    while left + width < characters.len() {
        let piece: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{piece}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}

/// Prints the `--help` message.
pub(crate) struct Printer {
    program: String,
    about: Option<String>,
    terminal_width: Option<usize>,
}

impl Printer {
    pub(crate) fn terminal(program: impl Into<String>, about: Option<String>) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(program, about, terminal_width)
    }

    pub(crate) fn new(
        program: impl Into<String>,
        about: Option<String>,
        terminal_width: Option<usize>,
    ) -> Self {
        Self {
            program: program.into(),
            about,
            terminal_width,
        }
    }

    pub(crate) fn help_lines(&self) -> Vec<String> {
        let help_flags = format!("-{HELP_SHORT}, --{HELP_NAME}");
        let operation_example = OPERATION_NAME.to_ascii_uppercase();
        let operation_flags = format!("--{OPERATION_NAME} {operation_example}");
        let numbers_grammar = format!("{NUMBERS_NAME} [...]");
        let operation_choices = format!(
            "{{{}}} {OPERATION_MESSAGE}",
            Operation::ALL
                .iter()
                .map(Operation::to_string)
                .collect::<Vec<String>>()
                .join(", ")
        );

        let arguments = vec![(MAIN_INDENT, numbers_grammar.clone(), NUMBERS_MESSAGE.to_string())];
        let mut options = vec![
            (MAIN_INDENT, help_flags, HELP_MESSAGE.to_string()),
            (MAIN_INDENT, operation_flags, operation_choices),
        ];

        for operation in Operation::ALL {
            options.push((
                MAIN_INDENT + CHOICE_INDENT,
                operation.to_string(),
                operation.description().to_string(),
            ));
        }

        let (left_column_width, middle_column_width) = arguments.iter().chain(options.iter()).fold(
            (0, 0),
            |(left, middle), (indent, flags, message)| {
                (
                    std::cmp::max(left, indent + flags.len()),
                    std::cmp::max(middle, message.len()),
                )
            },
        );
        let column_renderer =
            ColumnRenderer::guided(left_column_width, middle_column_width, self.terminal_width);

        let mut lines = vec![format!(
            "usage: {p} [-{HELP_SHORT}] [--{OPERATION_NAME} {operation_example}] {numbers_grammar}",
            p = self.program,
        )];

        if let Some(about) = &self.about {
            let about_width = self
                .terminal_width
                .map(|tw| std::cmp::max(tw.saturating_sub(MAIN_INDENT), MINIMUM_MIDDLE_WIDTH))
                .unwrap_or(left_column_width + PADDING_WIDTH + column_renderer.middle);
            lines.push("".to_string());
            lines.extend(chunk(about, about_width));
        }

        lines.push("".to_string());
        lines.push("positional arguments:".to_string());
        for (indent, grammar, message) in &arguments {
            lines.extend(column_renderer.render(*indent, grammar, message));
        }

        lines.push("".to_string());
        lines.push("options:".to_string());
        for (indent, flags, message) in &options {
            lines.extend(column_renderer.render(*indent, flags, message));
        }

        lines
    }

    pub(crate) fn print_help(&self, user_interface: &(impl UserInterface + ?Sized)) {
        for line in self.help_lines() {
            user_interface.print(line);
        }
    }
}

/// Projects the input tokens onto a single line, with a caret under the offending position.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    offset: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    pub(crate) fn new(offset: usize, tokens: &[&str]) -> Self {
        Self {
            offset,
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let projection = self.tokens.join(" ");
        let tokens_length: usize = self.tokens.iter().map(String::len).sum();
        let target = std::cmp::min(self.offset, tokens_length.saturating_sub(1));
        // Every token fully consumed before the target contributes one space to the projection.
        let mut consumed = 0;
        let mut caret = target;

        for token in self.tokens.iter().take(self.tokens.len().saturating_sub(1)) {
            consumed += token.len();

            if consumed <= target {
                caret += 1;
            } else {
                break;
            }
        }

        write!(f, "{projection}\n{:caret$}^", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::util::InMemoryInterface;
    use rstest::rstest;

    #[rstest]
    #[case("", 10, vec![])]
    #[case("  ", 10, vec![])]
    #[case("abc", 10, vec!["abc"])]
    #[case("abc def", 10, vec!["abc def"])]
    #[case("abc def ghi", 10, vec!["abc def", "ghi"])]
    #[case("abcdefghijkl", 5, vec!["abcd-", "efgh-", "ijkl"])]
    #[case("ab abcdefghi", 5, vec!["ab", "abcd-", "efghi"])]
    fn chunk_paragraph(#[case] paragraph: &str, #[case] width: usize, #[case] expected: Vec<&str>) {
        assert_eq!(chunk(paragraph, width), expected);
    }

    #[test]
    fn column_renderer_simple() {
        let cr = ColumnRenderer { left: 5, middle: 23 };

        assert_eq!(
            cr.render(0, "abc", "something"),
            vec!["abc     something".to_string()]
        );
        assert_eq!(
            cr.render(0, "abc", "  something  "),
            vec!["abc     something".to_string()]
        );
        assert_eq!(
            cr.render(2, "ab", "something"),
            vec!["  ab    something".to_string()]
        );
        assert_eq!(
            cr.render(0, "abc", "something pieces full more stuff"),
            vec![
                "abc     something pieces full".to_string(),
                "        more stuff".to_string(),
            ]
        );
        assert_eq!(cr.render(1, "abc", ""), vec![" abc".to_string()]);
    }

    #[rstest]
    #[case(10, 20, None, 20)]
    #[case(10, 50, None, DEFAULT_MIDDLE_WIDTH)]
    #[case(10, 50, Some(100), 50)]
    #[case(10, 50, Some(60), 44)]
    #[case(10, 50, Some(20), MINIMUM_MIDDLE_WIDTH)]
    fn column_renderer_guided(
        #[case] left: usize,
        #[case] middle: usize,
        #[case] total_width: Option<usize>,
        #[case] expected: usize,
    ) {
        assert_eq!(
            ColumnRenderer::guided(left, middle, total_width),
            ColumnRenderer {
                left,
                middle: expected
            }
        );
    }

    #[test]
    fn print_help() {
        // Setup
        let printer = Printer::new(
            "program",
            Some("Perform mathematical operations on numbers.".to_string()),
            Some(100),
        );
        let interface = InMemoryInterface::default();

        // Execute
        printer.print_help(&interface);

        // Verify
        let message = interface.consume_message();
        assert_eq!(
            message,
            r#"usage: program [-h] [--operation OPERATION] N [...]

Perform mathematical operations on numbers.

positional arguments:
 N [...]                 Numeric values to process.

options:
 -h, --help              Show this help message and exit.
 --operation OPERATION   {multiply, sum} Operation to perform (default: sum).
   multiply              Multiply exactly 6 numbers.
   sum                   Sum exactly 5 numbers."#
        );
    }

    #[test]
    fn print_help_narrow() {
        // Setup
        let printer = Printer::new("program", None, None);
        let interface = InMemoryInterface::default();

        // Execute
        printer.print_help(&interface);

        // Verify
        let message = interface.consume_message();
        assert_eq!(
            message,
            r#"usage: program [-h] [--operation OPERATION] N [...]

positional arguments:
 N [...]                 Numeric values to process.

options:
 -h, --help              Show this help message and exit.
 --operation OPERATION   {multiply, sum} Operation to perform
                         (default: sum).
   multiply              Multiply exactly 6 numbers.
   sum                   Sum exactly 5 numbers."#
        );
    }

    #[rstest]
    #[case(0, vec![], "\n^")]
    #[case(3, vec![], "\n^")]
    #[case(0, vec!["abc"], "abc\n^")]
    #[case(2, vec!["abc"], "abc\n  ^")]
    #[case(9, vec!["abc"], "abc\n  ^")]
    #[case(0, vec!["1", "2", "x"], "1 2 x\n^")]
    #[case(2, vec!["1", "2", "x"], "1 2 x\n    ^")]
    #[case(3, vec!["1", "2", "x"], "1 2 x\n    ^")]
    #[case(11, vec!["--operation", "divide"], "--operation divide\n            ^")]
    fn error_context(#[case] offset: usize, #[case] tokens: Vec<&str>, #[case] expected: &str) {
        assert_eq!(
            ErrorContext::new(offset, tokens.as_slice()).to_string(),
            expected
        );
    }
}
