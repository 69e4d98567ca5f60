//! Mini-program markup generation.
//!
//! A single depth-first walk over the transformed template AST. Markup is
//! appended to one buffer in document order: siblings left to right, each
//! parent wrapping its children.

mod children;
mod context;
mod element;
mod expression;
mod node;
mod props;
mod v_for;
mod v_if;

use washi_relief::RootNode;

use crate::errors::MarkupError;
use crate::options::MpCompilerOptions;

pub use children::generate_children;
pub use context::{MarkupCodegenContext, MarkupCodegenResult};
pub use element::generate_element;
pub use expression::render_expression;
pub use node::generate_node;
pub use props::generate_props;
pub use v_for::{derive_key, generate_for, hoist_key, ForProps, HoistedKey};
pub use v_if::{generate_if, generate_if_attr};

/// Generate markup from root AST
pub fn generate(
    root: &RootNode<'_>,
    options: &MpCompilerOptions,
) -> Result<MarkupCodegenResult, MarkupError> {
    let mut ctx = MarkupCodegenContext::new(options);
    generate_children(&mut ctx, &root.children)?;
    Ok(MarkupCodegenResult {
        code: ctx.into_code(),
    })
}
