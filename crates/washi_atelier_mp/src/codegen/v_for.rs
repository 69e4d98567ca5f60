//! v-for generation functions.
//!
//! Besides the loop attributes themselves, the loop owns the key binding of its
//! element: `:key="item.id"` is hoisted out of the ordinary attributes and
//! re-emitted as `wx:key="id"`.

use washi_carton::SmallVec;
use washi_relief::{DirectiveNode, ForAnnotation, PropNode};

use super::context::MarkupCodegenContext;
use super::expression::{render_expression, render_required};
use crate::errors::{MarkupError, MarkupErrorCode};

/// Props of a loop element with the key binding filtered out
pub type ForProps<'p, 'a> = SmallVec<[&'p PropNode<'a>; 8]>;

/// Result of splitting the key binding off a loop element's props
#[derive(Debug)]
pub struct HoistedKey<'p, 'a> {
    /// The `:key` directive, if the element has one
    pub key: Option<&'p DirectiveNode<'a>>,
    /// Remaining props in their original order
    pub rest: ForProps<'p, 'a>,
}

/// Split the first `:key` binding off `props` without touching the AST.
pub fn hoist_key<'p, 'a>(props: &'p [PropNode<'a>]) -> HoistedKey<'p, 'a> {
    let key_index = props
        .iter()
        .position(|prop| matches!(prop, PropNode::Directive(dir) if dir.is_bind_of("key")));

    let key = key_index.and_then(|index| match &props[index] {
        PropNode::Directive(dir) => Some(&**dir),
        PropNode::Attribute(_) => None,
    });
    let rest = props
        .iter()
        .enumerate()
        .filter(|(index, _)| Some(*index) != key_index)
        .map(|(_, prop)| prop)
        .collect();

    HoistedKey { key, rest }
}

/// Name the target key attribute after a rendered key expression.
///
/// The loop already scopes the item, so a dotted path keeps only its second
/// segment: `item.id` gives `id` and `item.nested.id` gives `nested`.
/// Returns `None` when nothing usable is left.
pub fn derive_key(rendered: &str) -> Option<&str> {
    if rendered.trim().is_empty() {
        return None;
    }
    let key = rendered.split('.').nth(1).unwrap_or(rendered);
    (!key.is_empty()).then_some(key)
}

/// Generate loop attributes and return the props left for ordinary serialization.
pub fn generate_for<'p, 'a>(
    ctx: &mut MarkupCodegenContext<'_>,
    v_for: &ForAnnotation<'_>,
    props: &'p [PropNode<'a>],
) -> Result<ForProps<'p, 'a>, MarkupError> {
    let source = render_required(
        Some(&v_for.source),
        MarkupErrorCode::MissingForSource,
        &v_for.loc,
    )?;

    ctx.push_directive("for");
    ctx.push_quoted_mustache(&source);

    if let Some(item) = &v_for.item_alias {
        ctx.push_directive("for-item");
        ctx.push_quoted(item);
    }

    if let Some(index) = &v_for.index_alias {
        ctx.push_directive("for-index");
        ctx.push_quoted(index);
    }

    let HoistedKey { key, rest } = hoist_key(props);
    if let Some(dir) = key {
        let rendered = dir.exp.as_ref().map(render_expression).unwrap_or_default();
        match derive_key(&rendered) {
            Some(key) => {
                ctx.push_directive("key");
                ctx.push_quoted(key);
            }
            None => {
                tracing::debug!(
                    "v-for key binding has no usable expression, omitting key attribute"
                );
            }
        }
    }

    Ok(rest)
}
