//! Markup generation errors.
//!
//! Every error is fatal for the template being generated: nothing is emitted
//! for it, and the caller decides whether the whole build fails.

use serde::{Deserialize, Serialize};
use washi_relief::{NodeType, SourceLocation};

/// Markup error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MarkupErrorCode {
    /// A node kind the markup generator does not handle reached the dispatcher
    UnexpectedNode = 80,
    /// Interpolation with an empty expression
    MissingInterpolationExpression = 81,
    /// `v-if` / `v-else-if` branch without a condition
    MissingIfCondition = 82,
    /// `v-for` with an empty source expression
    MissingForSource = 83,
    /// `v-bind:arg` without a bound expression
    MissingBindExpression = 84,
}

impl MarkupErrorCode {
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnexpectedNode => "Unexpected node in mini-program markup generation.",
            Self::MissingInterpolationExpression => "Interpolation is missing its expression.",
            Self::MissingIfCondition => "v-if/v-else-if branch is missing its condition.",
            Self::MissingForSource => "v-for is missing its source expression.",
            Self::MissingBindExpression => "v-bind is missing its expression.",
        }
    }
}

/// Error raised while generating markup for one template
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct MarkupError {
    pub code: MarkupErrorCode,
    pub message: String,
    /// Location of the offending node, when the upstream AST recorded one
    pub loc: Option<SourceLocation>,
}

impl MarkupError {
    pub fn new(code: MarkupErrorCode, loc: &SourceLocation) -> Self {
        Self::with_message(code, code.message(), loc)
    }

    pub fn unexpected_node(node_type: NodeType, loc: &SourceLocation) -> Self {
        let message = format!(
            "{} ({})",
            MarkupErrorCode::UnexpectedNode.message(),
            node_type.name()
        );
        Self::with_message(MarkupErrorCode::UnexpectedNode, message, loc)
    }

    fn with_message(
        code: MarkupErrorCode,
        message: impl Into<String>,
        loc: &SourceLocation,
    ) -> Self {
        let mut message = message.into();
        let loc = if loc.is_stub() {
            None
        } else {
            message.push_str(&format!(" ({}:{})", loc.start.line, loc.start.column));
            Some(loc.clone())
        };
        Self { code, message, loc }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use washi_relief::Position;

    #[test]
    fn test_error_messages() {
        for code in [
            MarkupErrorCode::UnexpectedNode,
            MarkupErrorCode::MissingInterpolationExpression,
            MarkupErrorCode::MissingIfCondition,
            MarkupErrorCode::MissingForSource,
            MarkupErrorCode::MissingBindExpression,
        ] {
            assert!(!code.message().is_empty());
        }
    }

    #[test]
    fn test_location_is_reported_when_known() {
        let loc = SourceLocation::new(Position::new(10, 2, 5), Position::new(20, 2, 15), "{{ }}");
        let err = MarkupError::new(MarkupErrorCode::MissingInterpolationExpression, &loc);
        assert_eq!(err.loc.as_ref(), Some(&loc));
        assert_eq!(
            err.to_string(),
            "Interpolation is missing its expression. (2:5)"
        );
    }

    #[test]
    fn test_stub_location_is_dropped() {
        let err = MarkupError::unexpected_node(NodeType::CompoundExpression, &SourceLocation::STUB);
        assert!(err.loc.is_none());
        assert_eq!(
            err.to_string(),
            "Unexpected node in mini-program markup generation. (CompoundExpression)"
        );
    }
}
