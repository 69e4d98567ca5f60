//! Attribute and directive serialization.

use washi_relief::{AttributeNode, DirectiveKind, DirectiveNode, PropNode};

use super::context::MarkupCodegenContext;
use super::expression::render_required;
use crate::errors::{MarkupError, MarkupErrorCode};

/// Generate element props in order.
///
/// Static attributes are copied as written and `v-bind:arg` becomes
/// `arg="{{exp}}"`. Every other directive kind is consumed by the data-binding
/// generator and leaves no trace in the markup.
pub fn generate_props<'p, 'a: 'p>(
    ctx: &mut MarkupCodegenContext<'_>,
    props: impl IntoIterator<Item = &'p PropNode<'a>>,
) -> Result<(), MarkupError> {
    for prop in props {
        match prop {
            PropNode::Attribute(attr) => generate_attribute(ctx, attr),
            PropNode::Directive(dir) => generate_directive(ctx, dir)?,
        }
    }
    Ok(())
}

fn generate_attribute(ctx: &mut MarkupCodegenContext<'_>, attr: &AttributeNode) {
    ctx.push(" ");
    ctx.push(&attr.name);
    if let Some(value) = &attr.value {
        ctx.push("=");
        ctx.push(value);
    }
}

fn generate_directive(
    ctx: &mut MarkupCodegenContext<'_>,
    dir: &DirectiveNode<'_>,
) -> Result<(), MarkupError> {
    match dir.name {
        DirectiveKind::Bind => generate_bind(ctx, dir),
        DirectiveKind::On
        | DirectiveKind::Model
        | DirectiveKind::Show
        | DirectiveKind::Html
        | DirectiveKind::Text
        | DirectiveKind::Slot
        | DirectiveKind::Once
        | DirectiveKind::Memo
        | DirectiveKind::Custom(_) => Ok(()),
    }
}

fn generate_bind(
    ctx: &mut MarkupCodegenContext<'_>,
    dir: &DirectiveNode<'_>,
) -> Result<(), MarkupError> {
    // `v-bind="obj"` has no argument to name an attribute after
    let Some(arg) = dir.arg_name() else {
        return Ok(());
    };
    let exp = render_required(
        dir.exp.as_ref(),
        MarkupErrorCode::MissingBindExpression,
        &dir.loc,
    )?;
    ctx.push(" ");
    ctx.push(arg);
    ctx.push_quoted_mustache(&exp);
    Ok(())
}
