//! Parsed query templates.

use crate::binding::ParameterBinding;

/// Canonical marker substituted for every recognized placeholder.
///
/// Downstream consumers locate binding sites by this exact token.
pub const PARAMETER_MARKER: &str = "?_param_?";

/// A query template after placeholder normalization.
///
/// Holds the transformed query text and one binding per emitted
/// [`PARAMETER_MARKER`], in left-to-right order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    query: String,
    bindings: Vec<ParameterBinding>,
    // Byte offset of each emitted marker; parallel to `bindings`.
    marker_offsets: Vec<usize>,
}

impl ParsedQuery {
    pub(crate) fn new(
        query: String,
        bindings: Vec<ParameterBinding>,
        marker_offsets: Vec<usize>,
    ) -> Self {
        debug_assert_eq!(bindings.len(), marker_offsets.len());
        Self {
            query,
            bindings,
            marker_offsets,
        }
    }

    /// Get the transformed query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Get the bindings in order of occurrence.
    #[must_use]
    pub fn bindings(&self) -> &[ParameterBinding] {
        &self.bindings
    }

    /// Get the byte offsets of the emitted markers within [`query`](Self::query).
    ///
    /// A marker-like text copied verbatim from a string literal is not listed.
    #[must_use]
    pub fn marker_offsets(&self) -> &[usize] {
        &self.marker_offsets
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the template had no placeholders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Check if any binding needs an expression evaluator.
    #[must_use]
    pub fn has_expressions(&self) -> bool {
        self.bindings.iter().any(ParameterBinding::is_expression)
    }

    /// Split into the transformed query and its bindings.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<ParameterBinding>) {
        (self.query, self.bindings)
    }

    /// Replace every emitted marker with `placeholder`.
    ///
    /// # Example
    ///
    /// ```
    /// use cql_query::ParameterBindingParser;
    ///
    /// let parsed = ParameterBindingParser::INSTANCE.parse("SELECT * FROM t WHERE a = :a");
    /// assert_eq!(parsed.render_with("?"), "SELECT * FROM t WHERE a = ?");
    /// ```
    #[must_use]
    pub fn render_with(&self, placeholder: &str) -> String {
        self.render_with_fn(|_, _| placeholder.to_string())
    }

    /// Replace every emitted marker with a placeholder computed from its
    /// ordinal and binding.
    #[must_use]
    pub fn render_with_fn<F>(&self, mut placeholder: F) -> String
    where
        F: FnMut(usize, &ParameterBinding) -> String,
    {
        let mut out = String::with_capacity(self.query.len());
        let mut cursor = 0;

        for (ordinal, (&offset, binding)) in
            self.marker_offsets.iter().zip(&self.bindings).enumerate()
        {
            out.push_str(&self.query[cursor..offset]);
            out.push_str(&placeholder(ordinal, binding));
            cursor = offset + PARAMETER_MARKER.len();
        }

        out.push_str(&self.query[cursor..]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParsedQuery {
        // "a = ?_param_? and b = ?_param_?"
        ParsedQuery::new(
            format!("a = {PARAMETER_MARKER} and b = {PARAMETER_MARKER}"),
            vec![
                ParameterBinding::Positional(0),
                ParameterBinding::NamedExpression("#b".to_string()),
            ],
            vec![4, 22],
        )
    }

    #[test]
    fn test_accessors() {
        let parsed = sample();
        assert_eq!(parsed.len(), 2);
        assert!(!parsed.is_empty());
        assert!(parsed.has_expressions());
        assert_eq!(&parsed.query()[4..13], PARAMETER_MARKER);
        assert_eq!(&parsed.query()[22..31], PARAMETER_MARKER);
    }

    #[test]
    fn test_render_with() {
        assert_eq!(sample().render_with("?"), "a = ? and b = ?");
    }

    #[test]
    fn test_render_with_fn_numbers_markers() {
        let rendered = sample().render_with_fn(|ordinal, _| format!("@p{}", ordinal + 1));
        assert_eq!(rendered, "a = @p1 and b = @p2");
    }

    #[test]
    fn test_empty_query() {
        let parsed = ParsedQuery::default();
        assert!(parsed.is_empty());
        assert!(!parsed.has_expressions());
        assert_eq!(parsed.render_with("?"), "");
        assert_eq!(parsed.into_parts(), (String::new(), Vec::new()));
    }
}
