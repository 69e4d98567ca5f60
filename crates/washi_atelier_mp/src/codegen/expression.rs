//! Expression rendering.
//!
//! Expressions arrive already rewritten by the data-binding transforms, so
//! rendering is a verbatim copy of their source text.

use washi_relief::{CompoundExpressionChild, CompoundExpressionNode, ExpressionNode, SourceLocation};

use crate::errors::{MarkupError, MarkupErrorCode};

/// Render an expression to the source text placed inside `{{ }}`.
pub fn render_expression(exp: &ExpressionNode<'_>) -> String {
    match exp {
        ExpressionNode::Simple(simple) => simple.content.to_string(),
        ExpressionNode::Compound(compound) => {
            let mut out = String::new();
            render_compound(compound, &mut out);
            out
        }
    }
}

fn render_compound(node: &CompoundExpressionNode<'_>, out: &mut String) {
    for child in node.children.iter() {
        match child {
            CompoundExpressionChild::Simple(exp) => out.push_str(&exp.content),
            CompoundExpressionChild::Compound(nested) => render_compound(nested, out),
            CompoundExpressionChild::Interpolation(interp) => {
                out.push_str(&render_expression(&interp.content));
            }
            CompoundExpressionChild::Text(text) => out.push_str(&text.content),
            CompoundExpressionChild::String(s) => out.push_str(s),
        }
    }
}

/// Render an expression the upstream contract guarantees to be non-empty.
pub(super) fn render_required(
    exp: Option<&ExpressionNode<'_>>,
    code: MarkupErrorCode,
    loc: &SourceLocation,
) -> Result<String, MarkupError> {
    let rendered = exp.map(render_expression).unwrap_or_default();
    if rendered.trim().is_empty() {
        let loc = exp.map(|exp| exp.loc()).filter(|l| !l.is_stub()).unwrap_or(loc);
        return Err(MarkupError::new(code, loc));
    }
    Ok(rendered)
}
