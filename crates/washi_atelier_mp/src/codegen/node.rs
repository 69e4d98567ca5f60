//! Node generation functions.

use washi_relief::TemplateChildNode;

use super::children::{generate_comment, generate_interpolation, generate_text};
use super::context::MarkupCodegenContext;
use super::element::generate_element;
use super::v_if::generate_if;
use crate::errors::MarkupError;

/// Generate markup for one template node
pub fn generate_node(
    ctx: &mut MarkupCodegenContext<'_>,
    node: &TemplateChildNode<'_>,
) -> Result<(), MarkupError> {
    match node {
        TemplateChildNode::Element(el) => generate_element(ctx, el),
        TemplateChildNode::Text(text) => {
            generate_text(ctx, text);
            Ok(())
        }
        TemplateChildNode::Comment(comment) => {
            generate_comment(ctx, comment);
            Ok(())
        }
        TemplateChildNode::Interpolation(interp) => generate_interpolation(ctx, interp),
        TemplateChildNode::If(if_node) => generate_if(ctx, if_node),
        TemplateChildNode::IfBranch(branch) => generate_element(ctx, &branch.element),
        TemplateChildNode::CompoundExpression(_) => {
            Err(MarkupError::unexpected_node(node.node_type(), node.loc()))
        }
    }
}
