//! Fuzz target for query template parsing.
//!
//! Feeds arbitrary templates through both parser configurations and checks
//! that every emitted marker lines up with a binding.

#![no_main]

use arbitrary::Arbitrary;
use cql_query::{
    PARAMETER_MARKER, ParameterBindingParser, ParserConfig, UnterminatedExpression,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    template: &'a str,
    verbatim: bool,
}

fuzz_target!(|input: Input<'_>| {
    let policy = if input.verbatim {
        UnterminatedExpression::Verbatim
    } else {
        UnterminatedExpression::Absorb
    };
    let parser =
        ParameterBindingParser::with_config(ParserConfig::new().unterminated_expression(policy));

    let parsed = parser.parse(input.template);
    assert_eq!(parsed.marker_offsets().len(), parsed.len());
    for &offset in parsed.marker_offsets() {
        assert_eq!(
            parsed.query().get(offset..offset + PARAMETER_MARKER.len()),
            Some(PARAMETER_MARKER)
        );
    }

    // Strict parsing agrees with lenient parsing on well-formed input.
    if let Ok(strict) = parser.try_parse(input.template) {
        assert_eq!(strict, parsed);
    }
});
