//! Property tests for the parameter-binding parser.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use cql_query::{PARAMETER_MARKER, ParameterBinding, ParameterBindingParser};
use proptest::prelude::*;

/// A piece of a generated template together with its expected output.
#[derive(Debug, Clone)]
enum Fragment {
    Text(String),
    Literal(String),
    Placeholder(ParameterBinding),
}

impl Fragment {
    fn source(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Literal(content) => format!("'{content}'"),
            Self::Placeholder(binding) => binding.to_string(),
        }
    }

    fn expected(&self) -> String {
        match self {
            Self::Placeholder(_) => PARAMETER_MARKER.to_string(),
            other => other.source(),
        }
    }
}

fn binding() -> impl Strategy<Value = ParameterBinding> {
    prop_oneof![
        (0..10_000usize).prop_map(ParameterBinding::Positional),
        "[a-z_][a-z0-9_]{0,8}".prop_map(ParameterBinding::Named),
        "[a-z0-9#\\[\\]. ]{0,10}".prop_map(ParameterBinding::IndexedExpression),
        "[a-z0-9#\\[\\]. ]{0,10}".prop_map(ParameterBinding::NamedExpression),
    ]
}

fn fragment() -> impl Strategy<Value = Fragment> {
    prop_oneof![
        // Leading space keeps text from extending a preceding identifier or index.
        " [A-Za-z0-9 =(),.*<>{}]{0,12}".prop_map(Fragment::Text),
        "[a-z0-9 ?:#{}]{0,12}".prop_map(Fragment::Literal),
        binding().prop_map(Fragment::Placeholder),
    ]
}

proptest! {
    #[test]
    fn generated_templates_match_model(fragments in prop::collection::vec(fragment(), 0..12)) {
        let source: String = fragments.iter().map(Fragment::source).collect();
        let expected: String = fragments.iter().map(Fragment::expected).collect();
        let expected_bindings: Vec<ParameterBinding> = fragments
            .iter()
            .filter_map(|fragment| match fragment {
                Fragment::Placeholder(binding) => Some(binding.clone()),
                _ => None,
            })
            .collect();

        let parsed = ParameterBindingParser::INSTANCE.try_parse(&source).unwrap();

        prop_assert_eq!(parsed.query(), expected.as_str());
        prop_assert_eq!(parsed.bindings(), expected_bindings.as_slice());
        prop_assert_eq!(parsed.query().matches(PARAMETER_MARKER).count(), parsed.len());
    }

    #[test]
    fn literals_are_preserved(content in "[^']{0,24}", prefix in "[a-z =]{0,8}") {
        let source = format!("{prefix}'{content}'");
        let parsed = ParameterBindingParser::INSTANCE.parse(&source);

        prop_assert_eq!(parsed.query(), source.as_str());
        prop_assert!(parsed.is_empty());
    }

    #[test]
    fn placeholder_free_input_is_identity(source in "[^?:']{0,64}") {
        let parsed = ParameterBindingParser::INSTANCE.parse(&source);

        prop_assert_eq!(parsed.query(), source.as_str());
        prop_assert!(parsed.is_empty());
    }

    #[test]
    fn arbitrary_input_keeps_offsets_consistent(source in any::<String>()) {
        let parsed = ParameterBindingParser::INSTANCE.parse(&source);

        prop_assert_eq!(parsed.marker_offsets().len(), parsed.len());
        for &offset in parsed.marker_offsets() {
            prop_assert_eq!(
                parsed.query().get(offset..offset + PARAMETER_MARKER.len()),
                Some(PARAMETER_MARKER)
            );
        }
        for binding in parsed.bindings() {
            let defined = [
                binding.parameter_index().is_some(),
                binding.parameter_name().is_some(),
                binding.expression_source().is_some(),
            ];
            prop_assert_eq!(defined.iter().filter(|&&set| set).count(), 1);
        }
    }
}
