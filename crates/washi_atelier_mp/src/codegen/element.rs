//! Element generation.

use washi_carton::alias_tag;
use washi_relief::ElementNode;

use super::children::generate_children;
use super::context::MarkupCodegenContext;
use super::props::generate_props;
use super::v_for::{generate_for, ForProps};
use super::v_if::generate_if_attr;
use crate::errors::MarkupError;

/// Generate an element and its subtree.
///
/// Attribute order is fixed: the conditional attribute, then the loop
/// attributes (including the hoisted key), then the remaining props as written.
pub fn generate_element(
    ctx: &mut MarkupCodegenContext<'_>,
    el: &ElementNode<'_>,
) -> Result<(), MarkupError> {
    let tag = alias_tag(&el.tag);
    tracing::trace!("generate element <{}>", tag);

    ctx.push("<");
    ctx.push(tag);

    if let Some(v_if) = &el.v_if {
        generate_if_attr(ctx, v_if)?;
    }

    let props: ForProps<'_, '_> = match &el.v_for {
        Some(v_for) => generate_for(ctx, v_for, &el.props)?,
        None => el.props.iter().collect(),
    };
    generate_props(ctx, props)?;

    if el.is_self_closing {
        ctx.push("/>");
        return Ok(());
    }

    ctx.push(">");
    generate_children(ctx, &el.children)?;
    ctx.push("</");
    ctx.push(tag);
    ctx.push(">");
    Ok(())
}
