//! Mini-program markup compiler for Washi.
//!
//! This crate turns a parsed and transformed template AST into mini-program
//! markup (WXML and its sibling dialects):
//! - Text is copied verbatim and interpolations become `{{exp}}`
//! - `v-bind:arg` becomes `arg="{{exp}}"`; other directives are left to the
//!   data-binding generator
//! - Conditional chains become `wx:if` / `wx:elif` / `wx:else` siblings
//! - Loops become `wx:for` / `wx:for-item` / `wx:for-index`, with the element's
//!   `:key` hoisted into `wx:key`
//! - `<template>` groups become `<block>`
//!
//! ## Name Origin
//!
//! **Atelier** (/ˌætəlˈjeɪ/) is an artist's workshop or studio. The "mp" atelier
//! specializes in mini-program output, producing markup for the host runtime
//! instead of render functions.

pub mod codegen;
pub mod emit;
pub mod errors;
pub mod options;

pub use codegen::*;
pub use emit::*;
pub use errors::*;
pub use options::*;

// Re-export the AST so callers need a single dependency
pub use washi_relief as ast;
pub use washi_relief::{RootNode, TemplateChildNode};

/// Compile a template and hand the markup to `emitter` under `options.filename`.
///
/// Nothing is emitted when generation fails.
pub fn compile_template(
    root: &RootNode<'_>,
    options: &MpCompilerOptions,
    emitter: &mut impl EmitFile,
) -> Result<(), MarkupError> {
    let result = match generate(root, options) {
        Ok(result) => result,
        Err(err) => {
            tracing::debug!("markup generation failed for {}: {}", options.filename, err);
            return Err(err);
        }
    };

    tracing::debug!(
        "emitting {} ({} bytes)",
        options.filename,
        result.code.len()
    );
    emitter.emit_file(EmittedAsset {
        kind: AssetKind::Markup,
        file_name: options.filename.clone(),
        source: result.code,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use washi_carton::{Box, Bump};
    use washi_relief::{CompoundExpressionNode, ElementNode, SourceLocation, TextNode};

    #[test]
    fn test_compile_emits_once() {
        let allocator = Bump::new();
        let mut root = RootNode::new(&allocator, "<view>hello</view>");
        let mut view = ElementNode::new(&allocator, "view", SourceLocation::STUB);
        view.children.push(TemplateChildNode::Text(Box::new_in(
            TextNode::new("hello", SourceLocation::STUB),
            &allocator,
        )));
        root.children.push(TemplateChildNode::Element(Box::new_in(view, &allocator)));

        let mut emitter = MemoryEmitter::new();
        compile_template(&root, &MpCompilerOptions::default(), &mut emitter).unwrap();

        assert_eq!(emitter.assets().len(), 1);
        let asset = &emitter.assets()[0];
        assert_eq!(asset.kind, AssetKind::Markup);
        assert_eq!(asset.file_name, "index.wxml");
        assert_eq!(asset.source, "<view>hello</view>");
    }

    #[test]
    fn test_failed_compile_emits_nothing() {
        let allocator = Bump::new();
        let mut root = RootNode::new(&allocator, "");
        root.children.push(TemplateChildNode::Text(Box::new_in(
            TextNode::new("before", SourceLocation::STUB),
            &allocator,
        )));
        root.children.push(TemplateChildNode::CompoundExpression(Box::new_in(
            CompoundExpressionNode::new(&allocator, SourceLocation::STUB),
            &allocator,
        )));

        let mut emitter = MemoryEmitter::new();
        let err = compile_template(&root, &MpCompilerOptions::default(), &mut emitter).unwrap_err();

        assert_eq!(err.code, MarkupErrorCode::UnexpectedNode);
        assert!(emitter.assets().is_empty());
    }
}
