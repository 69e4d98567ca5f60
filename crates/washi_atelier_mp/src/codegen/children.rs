//! Children, text, comment, and interpolation generation functions.

use washi_relief::{CommentNode, InterpolationNode, TemplateChildNode, TextNode};

use super::context::MarkupCodegenContext;
use super::expression::render_required;
use super::node::generate_node;
use crate::errors::{MarkupError, MarkupErrorCode};

/// Generate children in document order
pub fn generate_children(
    ctx: &mut MarkupCodegenContext<'_>,
    children: &[TemplateChildNode<'_>],
) -> Result<(), MarkupError> {
    for child in children {
        generate_node(ctx, child)?;
    }
    Ok(())
}

/// Generate text node
pub fn generate_text(ctx: &mut MarkupCodegenContext<'_>, text: &TextNode) {
    ctx.push(&text.content);
}

/// Generate comment node
pub fn generate_comment(ctx: &mut MarkupCodegenContext<'_>, comment: &CommentNode) {
    if ctx.options.comments {
        ctx.push("<!--");
        ctx.push(&comment.content);
        ctx.push("-->");
    }
}

/// Generate interpolation node
pub fn generate_interpolation(
    ctx: &mut MarkupCodegenContext<'_>,
    interp: &InterpolationNode<'_>,
) -> Result<(), MarkupError> {
    let exp = render_required(
        Some(&interp.content),
        MarkupErrorCode::MissingInterpolationExpression,
        &interp.loc,
    )?;
    ctx.push_mustache(&exp);
    Ok(())
}
