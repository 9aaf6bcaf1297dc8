//! Parameter-binding parser.
//!
//! The parser rewrites a query template containing any mix of the four
//! placeholder forms into a template where every placeholder is the
//! canonical [`PARAMETER_MARKER`], collecting one [`ParameterBinding`] per
//! placeholder:
//!
//! | Form               | Example    | Binding                 |
//! |--------------------|------------|-------------------------|
//! | Positional         | `?0`       | `Positional(0)`         |
//! | Named              | `:name`    | `Named("name")`         |
//! | Indexed expression | `?#{[0]}`  | `IndexedExpression("[0]")` |
//! | Named expression   | `:#{#a}`   | `NamedExpression("#a")` |
//!
//! Text between single quotes is a string literal and is copied unchanged.
//! A `?` or `:` that starts none of the forms is copied unchanged as well.
//!
//! The scan is a single left-to-right pass over the input.

use crate::binding::ParameterBinding;
use crate::config::{ParserConfig, UnterminatedExpression};
use crate::error::ParseError;
use crate::query::{PARAMETER_MARKER, ParsedQuery};

/// Opens the body of an expression placeholder, right after `?` or `:`.
const EXPRESSION_OPEN: &str = "#{";
/// Closes the body of an expression placeholder.
const EXPRESSION_CLOSE: char = '}';
/// Opens and closes a string literal.
const QUOTE: char = '\'';

/// Parser for query templates with parameter placeholders.
///
/// The parser holds only its configuration, so a single value can be shared
/// freely between threads.
///
/// # Example
///
/// ```
/// use cql_query::{ParameterBinding, ParameterBindingParser};
///
/// let mut bindings = Vec::new();
/// let query = ParameterBindingParser::INSTANCE.parse_and_collect_parameter_bindings(
///     "SELECT * FROM users WHERE id = ?0 AND name = :name",
///     &mut bindings,
/// );
///
/// assert_eq!(query, "SELECT * FROM users WHERE id = ?_param_? AND name = ?_param_?");
/// assert_eq!(
///     bindings,
///     vec![
///         ParameterBinding::Positional(0),
///         ParameterBinding::Named("name".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParameterBindingParser {
    config: ParserConfig,
}

impl ParameterBindingParser {
    /// Shared parser with the default configuration.
    pub const INSTANCE: Self = Self::new();

    /// Create a parser with the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            config: ParserConfig::new(),
        }
    }

    /// Create a parser with a custom configuration.
    #[must_use]
    pub const fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Get the parser configuration.
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Transform `query` and append its bindings to `bindings`.
    ///
    /// Returns the transformed query. Bindings already present in
    /// `bindings` are left in place. This never fails; malformed input is
    /// handled leniently as for [`parse`](Self::parse).
    pub fn parse_and_collect_parameter_bindings(
        &self,
        query: &str,
        bindings: &mut Vec<ParameterBinding>,
    ) -> String {
        let (transformed, collected) = self.parse(query).into_parts();
        bindings.extend(collected);
        transformed
    }

    /// Transform `query`, leniently.
    ///
    /// - An unterminated string literal extends to the end of the input.
    /// - An unterminated expression body is handled per
    ///   [`ParserConfig::unterminated_expression`].
    /// - A positional index too large for `usize` is not a placeholder.
    #[must_use]
    pub fn parse(&self, query: &str) -> ParsedQuery {
        let (parsed, _) = Scanner::new(query, self.config).run();
        parsed
    }

    /// Transform `query`, rejecting malformed constructs.
    ///
    /// Reports the first malformed construct in the input, if any.
    pub fn try_parse(&self, query: &str) -> Result<ParsedQuery, ParseError> {
        match Scanner::new(query, self.config).run() {
            (parsed, None) => Ok(parsed),
            (_, Some(error)) => Err(error),
        }
    }
}

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    InLiteral {
        /// Byte offset of the opening quote.
        start: usize,
    },
}

/// Single-use cursor over one query template.
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    state: State,
    config: ParserConfig,
    out: String,
    bindings: Vec<ParameterBinding>,
    marker_offsets: Vec<usize>,
    error: Option<ParseError>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str, config: ParserConfig) -> Self {
        Self {
            input,
            pos: 0,
            state: State::Normal,
            config,
            out: String::with_capacity(input.len()),
            bindings: Vec::new(),
            marker_offsets: Vec::new(),
            error: None,
        }
    }

    fn run(mut self) -> (ParsedQuery, Option<ParseError>) {
        while let Some(c) = self.input[self.pos..].chars().next() {
            match (self.state, c) {
                (State::Normal, QUOTE) => {
                    self.state = State::InLiteral { start: self.pos };
                    self.copy(c);
                }
                (State::Normal, '?' | ':') => self.placeholder(c),
                (State::InLiteral { .. }, QUOTE) => {
                    self.state = State::Normal;
                    self.copy(c);
                }
                _ => self.copy(c),
            }
        }

        if let State::InLiteral { start } = self.state {
            self.record(ParseError::UnterminatedLiteral { offset: start });
        }

        tracing::debug!(
            query_len = self.input.len(),
            bindings = self.bindings.len(),
            "parsed query template"
        );

        let parsed = ParsedQuery::new(self.out, self.bindings, self.marker_offsets);
        (parsed, self.error)
    }

    /// Try to match a placeholder starting with `lead` at the cursor.
    fn placeholder(&mut self, lead: char) {
        let input = self.input;
        let start = self.pos;
        // `lead` is ASCII, so the continuation starts one byte later.
        let rest = &input[start + 1..];

        if rest.starts_with(EXPRESSION_OPEN) {
            self.expression(lead, start);
            return;
        }

        let matched = match lead {
            '?' => self.positional(start, rest),
            _ => self.named(start, rest),
        };

        if !matched {
            self.copy(lead);
        }
    }

    fn expression(&mut self, lead: char, start: usize) {
        let input = self.input;
        let body_start = start + 1 + EXPRESSION_OPEN.len();
        let body = &input[body_start..];

        let (source, end) = match body.find(EXPRESSION_CLOSE) {
            Some(len) => (&body[..len], body_start + len + EXPRESSION_CLOSE.len_utf8()),
            None => {
                self.record(ParseError::UnterminatedExpression { offset: start });
                match self.config.unterminated_expression {
                    UnterminatedExpression::Absorb => (body, input.len()),
                    UnterminatedExpression::Verbatim => {
                        self.out.push_str(&input[start..]);
                        self.pos = input.len();
                        return;
                    }
                }
            }
        };

        let binding = match lead {
            '?' => ParameterBinding::IndexedExpression(source.to_string()),
            _ => ParameterBinding::NamedExpression(source.to_string()),
        };
        self.emit(binding, start, end);
    }

    fn positional(&mut self, start: usize, rest: &str) -> bool {
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return false;
        }

        let text = &rest[..digits];
        match text.parse::<usize>() {
            Ok(index) => {
                self.emit(ParameterBinding::Positional(index), start, start + 1 + digits);
                true
            }
            Err(_) => {
                self.record(ParseError::IndexOverflow {
                    offset: start,
                    digits: text.to_string(),
                });
                false
            }
        }
    }

    fn named(&mut self, start: usize, rest: &str) -> bool {
        let mut chars = rest.char_indices();
        match chars.next() {
            Some((_, c)) if c.is_alphabetic() || c == '_' => {}
            _ => return false,
        }

        let len = chars
            .find(|&(_, c)| !(c.is_alphanumeric() || c == '_'))
            .map_or(rest.len(), |(i, _)| i);

        let name = rest[..len].to_string();
        self.emit(ParameterBinding::Named(name), start, start + 1 + len);
        true
    }

    /// Write the marker for a placeholder spanning `start..end` of the input.
    fn emit(&mut self, binding: ParameterBinding, start: usize, end: usize) {
        tracing::trace!(offset = start, binding = %binding, "recognized placeholder");

        self.marker_offsets.push(self.out.len());
        self.out.push_str(PARAMETER_MARKER);
        self.bindings.push(binding);
        self.pos = end;
    }

    fn copy(&mut self, c: char) {
        self.out.push(c);
        self.pos += c.len_utf8();
    }

    // Only the first malformed construct is reported.
    fn record(&mut self, error: ParseError) {
        tracing::debug!(%error, "malformed query template");
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}
