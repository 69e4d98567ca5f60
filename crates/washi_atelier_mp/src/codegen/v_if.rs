//! v-if generation functions.

use washi_relief::{IfAnnotation, IfBranchKind, IfNode};

use super::context::MarkupCodegenContext;
use super::element::generate_element;
use super::expression::render_required;
use crate::errors::{MarkupError, MarkupErrorCode};

/// Generate a conditional chain. Each branch is emitted as its own sibling
/// element, decorated with its own conditional attribute.
pub fn generate_if(
    ctx: &mut MarkupCodegenContext<'_>,
    if_node: &IfNode<'_>,
) -> Result<(), MarkupError> {
    for branch in if_node.branches.iter() {
        generate_element(ctx, &branch.element)?;
    }
    Ok(())
}

/// Generate the conditional attribute of a branch element.
pub fn generate_if_attr(
    ctx: &mut MarkupCodegenContext<'_>,
    v_if: &IfAnnotation<'_>,
) -> Result<(), MarkupError> {
    let name = match v_if.kind {
        IfBranchKind::If => "if",
        IfBranchKind::ElseIf => "elif",
        IfBranchKind::Else => {
            ctx.push_directive("else");
            return Ok(());
        }
    };
    let condition = render_required(
        v_if.condition.as_ref(),
        MarkupErrorCode::MissingIfCondition,
        &v_if.loc,
    )?;
    ctx.push_directive(name);
    ctx.push_quoted_mustache(&condition);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::MpCompilerOptions;
    use washi_carton::Bump;
    use washi_relief::{ExpressionNode, SourceLocation};

    fn render(v_if: &IfAnnotation<'_>) -> Result<String, MarkupError> {
        let options = MpCompilerOptions::default();
        let mut ctx = MarkupCodegenContext::new(&options);
        generate_if_attr(&mut ctx, v_if)?;
        Ok(ctx.into_code())
    }

    #[test]
    fn test_branch_attributes() {
        let allocator = Bump::new();
        let cond =
            |c: &str| Some(ExpressionNode::simple(&allocator, c, false, SourceLocation::STUB));

        let if_attr = IfAnnotation::new(IfBranchKind::If, cond("a"), SourceLocation::STUB);
        assert_eq!(render(&if_attr).unwrap(), r#" wx:if="{{a}}""#);

        let elif_attr = IfAnnotation::new(IfBranchKind::ElseIf, cond("b"), SourceLocation::STUB);
        assert_eq!(render(&elif_attr).unwrap(), r#" wx:elif="{{b}}""#);

        let else_attr = IfAnnotation::new(IfBranchKind::Else, None, SourceLocation::STUB);
        assert_eq!(render(&else_attr).unwrap(), " wx:else");
    }

    #[test]
    fn test_missing_condition_is_an_error() {
        let if_attr = IfAnnotation::new(IfBranchKind::If, None, SourceLocation::STUB);
        let err = render(&if_attr).unwrap_err();
        assert_eq!(err.code, MarkupErrorCode::MissingIfCondition);

        let elif_attr = IfAnnotation::new(IfBranchKind::ElseIf, None, SourceLocation::STUB);
        assert!(render(&elif_attr).is_err());
    }
}
