//! Template AST node types.
//!
//! This module defines the AST consumed by the mini-program markup generator.
//! Upstream passes have already classified directives: `v-if`/`v-else-if`/`v-else`
//! chains are grouped into [`IfNode`]s whose branches carry an [`IfAnnotation`],
//! and `v-for` is attached to its element as a [`ForAnnotation`].
//! All nodes are allocated in a bumpalo arena for the lifetime of one template.

use serde::{Deserialize, Serialize};
use washi_carton::{Box, Bump, String, Vec};

/// Node type discriminant, numbered as in the Vue compiler core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NodeType {
    Element = 1,
    Text = 2,
    Comment = 3,
    Interpolation = 5,
    CompoundExpression = 8,
    If = 9,
    IfBranch = 10,
}

impl NodeType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Element => "Element",
            Self::Text => "Text",
            Self::Comment => "Comment",
            Self::Interpolation => "Interpolation",
            Self::CompoundExpression => "CompoundExpression",
            Self::If => "If",
            Self::IfBranch => "IfBranch",
        }
    }
}

/// Source position in the template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Position {
    /// Byte offset from start of file
    pub offset: u32,
    /// 1-indexed line number
    pub line: u32,
    /// 1-indexed column number
    pub column: u32,
}

impl Position {
    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

/// Source location span [start, end)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
    pub source: String,
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::STUB
    }
}

impl SourceLocation {
    /// Stub location for generated nodes
    pub const STUB: Self = Self {
        start: Position {
            offset: 0,
            line: 1,
            column: 1,
        },
        end: Position {
            offset: 0,
            line: 1,
            column: 1,
        },
        source: String::const_new(""),
    };

    pub fn new(start: Position, end: Position, source: impl Into<String>) -> Self {
        Self {
            start,
            end,
            source: source.into(),
        }
    }

    /// Whether this is the stub location of a generated node.
    pub fn is_stub(&self) -> bool {
        self.start == Self::STUB.start && self.end == Self::STUB.end && self.source.is_empty()
    }
}

/// Root AST node
#[derive(Debug)]
pub struct RootNode<'a> {
    pub children: Vec<'a, TemplateChildNode<'a>>,
    pub source: String,
    pub loc: SourceLocation,
}

impl<'a> RootNode<'a> {
    pub fn new(allocator: &'a Bump, source: impl Into<String>) -> Self {
        Self {
            children: Vec::new_in(allocator),
            source: source.into(),
            loc: SourceLocation::STUB,
        }
    }
}

// ============================================================================
// Template Nodes
// ============================================================================

/// All template child node types
#[derive(Debug)]
pub enum TemplateChildNode<'a> {
    Element(Box<'a, ElementNode<'a>>),
    Text(Box<'a, TextNode>),
    Comment(Box<'a, CommentNode>),
    Interpolation(Box<'a, InterpolationNode<'a>>),
    If(Box<'a, IfNode<'a>>),
    IfBranch(Box<'a, IfBranchNode<'a>>),
    /// Merged text produced for render-function codegen; never valid markup input
    CompoundExpression(Box<'a, CompoundExpressionNode<'a>>),
}

impl<'a> TemplateChildNode<'a> {
    pub fn node_type(&self) -> NodeType {
        match self {
            Self::Element(n) => n.node_type(),
            Self::Text(n) => n.node_type(),
            Self::Comment(n) => n.node_type(),
            Self::Interpolation(n) => n.node_type(),
            Self::If(n) => n.node_type(),
            Self::IfBranch(n) => n.node_type(),
            Self::CompoundExpression(n) => n.node_type(),
        }
    }

    pub fn loc(&self) -> &SourceLocation {
        match self {
            Self::Element(n) => &n.loc,
            Self::Text(n) => &n.loc,
            Self::Comment(n) => &n.loc,
            Self::Interpolation(n) => &n.loc,
            Self::If(n) => &n.loc,
            Self::IfBranch(n) => &n.loc,
            Self::CompoundExpression(n) => &n.loc,
        }
    }
}

/// Element node
#[derive(Debug)]
pub struct ElementNode<'a> {
    pub tag: String,
    pub props: Vec<'a, PropNode<'a>>,
    pub children: Vec<'a, TemplateChildNode<'a>>,
    pub is_self_closing: bool,
    /// Conditional annotation from a grouped `v-if` chain
    pub v_if: Option<IfAnnotation<'a>>,
    /// Loop annotation from `v-for`
    pub v_for: Option<ForAnnotation<'a>>,
    pub loc: SourceLocation,
}

impl<'a> ElementNode<'a> {
    pub fn new(allocator: &'a Bump, tag: impl Into<String>, loc: SourceLocation) -> Self {
        Self {
            tag: tag.into(),
            props: Vec::new_in(allocator),
            children: Vec::new_in(allocator),
            is_self_closing: false,
            v_if: None,
            v_for: None,
            loc,
        }
    }

    pub fn node_type(&self) -> NodeType {
        NodeType::Element
    }
}

/// Prop node (attribute or directive)
#[derive(Debug)]
pub enum PropNode<'a> {
    Attribute(Box<'a, AttributeNode>),
    Directive(Box<'a, DirectiveNode<'a>>),
}

/// Attribute node
#[derive(Debug)]
pub struct AttributeNode {
    pub name: String,
    /// Raw value as supplied by the parser, including its quotes
    pub value: Option<String>,
    pub loc: SourceLocation,
}

impl AttributeNode {
    pub fn new(name: impl Into<String>, loc: SourceLocation) -> Self {
        Self {
            name: name.into(),
            value: None,
            loc,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Directive kind, normalized from the attribute name without prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectiveKind {
    Bind,
    On,
    Model,
    Show,
    Html,
    Text,
    Slot,
    Once,
    Memo,
    /// User directive (`v-focus` has the name `focus`)
    Custom(String),
}

/// Directive node (v-bind, v-on, etc.)
#[derive(Debug)]
pub struct DirectiveNode<'a> {
    pub name: DirectiveKind,
    /// Directive expression
    pub exp: Option<ExpressionNode<'a>>,
    /// Directive argument (e.g., "click" in @click)
    pub arg: Option<ExpressionNode<'a>>,
    /// Directive modifiers (e.g., ["stop", "prevent"] in @click.stop.prevent)
    pub modifiers: Vec<'a, String>,
    pub loc: SourceLocation,
}

impl<'a> DirectiveNode<'a> {
    pub fn new(allocator: &'a Bump, name: DirectiveKind, loc: SourceLocation) -> Self {
        Self {
            name,
            exp: None,
            arg: None,
            modifiers: Vec::new_in(allocator),
            loc,
        }
    }

    /// Argument name as written. `None` for a missing, empty or compound argument.
    pub fn arg_name(&self) -> Option<&str> {
        match &self.arg {
            Some(ExpressionNode::Simple(arg)) if !arg.content.is_empty() => {
                Some(arg.content.as_str())
            }
            _ => None,
        }
    }

    /// Whether this is `v-bind:<name>`.
    pub fn is_bind_of(&self, name: &str) -> bool {
        self.name == DirectiveKind::Bind && self.arg_name() == Some(name)
    }
}

/// Text node
#[derive(Debug)]
pub struct TextNode {
    pub content: String,
    pub loc: SourceLocation,
}

impl TextNode {
    pub fn new(content: impl Into<String>, loc: SourceLocation) -> Self {
        Self {
            content: content.into(),
            loc,
        }
    }

    pub fn node_type(&self) -> NodeType {
        NodeType::Text
    }
}

/// Comment node
#[derive(Debug)]
pub struct CommentNode {
    pub content: String,
    pub loc: SourceLocation,
}

impl CommentNode {
    pub fn new(content: impl Into<String>, loc: SourceLocation) -> Self {
        Self {
            content: content.into(),
            loc,
        }
    }

    pub fn node_type(&self) -> NodeType {
        NodeType::Comment
    }
}

/// Interpolation node ({{ expr }})
#[derive(Debug)]
pub struct InterpolationNode<'a> {
    pub content: ExpressionNode<'a>,
    pub loc: SourceLocation,
}

impl<'a> InterpolationNode<'a> {
    pub fn new(content: ExpressionNode<'a>, loc: SourceLocation) -> Self {
        Self { content, loc }
    }

    pub fn node_type(&self) -> NodeType {
        NodeType::Interpolation
    }
}

// ============================================================================
// Expression Nodes
// ============================================================================

/// Expression node types
#[derive(Debug)]
pub enum ExpressionNode<'a> {
    Simple(Box<'a, SimpleExpressionNode>),
    Compound(Box<'a, CompoundExpressionNode<'a>>),
}

impl<'a> ExpressionNode<'a> {
    /// Allocate a simple expression in the arena.
    pub fn simple(
        allocator: &'a Bump,
        content: impl Into<String>,
        is_static: bool,
        loc: SourceLocation,
    ) -> Self {
        Self::Simple(Box::new_in(
            SimpleExpressionNode::new(content, is_static, loc),
            allocator,
        ))
    }

    pub fn loc(&self) -> &SourceLocation {
        match self {
            Self::Simple(n) => &n.loc,
            Self::Compound(n) => &n.loc,
        }
    }
}

/// Simple expression node
#[derive(Debug)]
pub struct SimpleExpressionNode {
    pub content: String,
    pub is_static: bool,
    pub loc: SourceLocation,
}

impl SimpleExpressionNode {
    pub fn new(content: impl Into<String>, is_static: bool, loc: SourceLocation) -> Self {
        Self {
            content: content.into(),
            is_static,
            loc,
        }
    }
}

/// Compound expression node (mixed content)
#[derive(Debug)]
pub struct CompoundExpressionNode<'a> {
    pub children: Vec<'a, CompoundExpressionChild<'a>>,
    pub loc: SourceLocation,
}

impl<'a> CompoundExpressionNode<'a> {
    pub fn new(allocator: &'a Bump, loc: SourceLocation) -> Self {
        Self {
            children: Vec::new_in(allocator),
            loc,
        }
    }

    pub fn node_type(&self) -> NodeType {
        NodeType::CompoundExpression
    }
}

/// Child of a compound expression
#[derive(Debug)]
pub enum CompoundExpressionChild<'a> {
    Simple(Box<'a, SimpleExpressionNode>),
    Compound(Box<'a, CompoundExpressionNode<'a>>),
    Interpolation(Box<'a, InterpolationNode<'a>>),
    Text(Box<'a, TextNode>),
    String(String),
}

// ============================================================================
// Control Flow
// ============================================================================

/// Branch discriminant of a conditional chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum IfBranchKind {
    If = 0,
    ElseIf = 1,
    Else = 2,
}

/// Conditional annotation attached to an element (v-if / v-else-if / v-else)
#[derive(Debug)]
pub struct IfAnnotation<'a> {
    pub kind: IfBranchKind,
    /// Present for `if` and `else-if`
    pub condition: Option<ExpressionNode<'a>>,
    pub loc: SourceLocation,
}

impl<'a> IfAnnotation<'a> {
    pub fn new(
        kind: IfBranchKind,
        condition: Option<ExpressionNode<'a>>,
        loc: SourceLocation,
    ) -> Self {
        Self {
            kind,
            condition,
            loc,
        }
    }
}

/// Loop annotation attached to an element (v-for)
#[derive(Debug)]
pub struct ForAnnotation<'a> {
    /// Iterated expression
    pub source: ExpressionNode<'a>,
    /// Item alias (`item` in `(item, index) in items`)
    pub item_alias: Option<String>,
    /// Index alias (`index` in `(item, index) in items`)
    pub index_alias: Option<String>,
    pub loc: SourceLocation,
}

impl<'a> ForAnnotation<'a> {
    pub fn new(source: ExpressionNode<'a>, loc: SourceLocation) -> Self {
        Self {
            source,
            item_alias: None,
            index_alias: None,
            loc,
        }
    }
}

/// If node: one conditional chain, branches in chain order
#[derive(Debug)]
pub struct IfNode<'a> {
    pub branches: Vec<'a, IfBranchNode<'a>>,
    pub loc: SourceLocation,
}

impl<'a> IfNode<'a> {
    pub fn new(allocator: &'a Bump, loc: SourceLocation) -> Self {
        Self {
            branches: Vec::new_in(allocator),
            loc,
        }
    }

    pub fn node_type(&self) -> NodeType {
        NodeType::If
    }
}

/// If branch node. The branch's element carries the [`IfAnnotation`].
#[derive(Debug)]
pub struct IfBranchNode<'a> {
    pub element: ElementNode<'a>,
    pub loc: SourceLocation,
}

impl<'a> IfBranchNode<'a> {
    pub fn new(element: ElementNode<'a>, loc: SourceLocation) -> Self {
        Self { element, loc }
    }

    pub fn node_type(&self) -> NodeType {
        NodeType::IfBranch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_node_type_and_loc() {
        let allocator = Bump::new();
        let loc = SourceLocation::new(Position::new(0, 1, 1), Position::new(5, 1, 6), "hello");
        let text = TemplateChildNode::Text(Box::new_in(
            TextNode::new("hello", loc.clone()),
            &allocator,
        ));
        assert_eq!(text.node_type(), NodeType::Text);
        assert_eq!(text.loc(), &loc);

        let el = ElementNode::new(&allocator, "view", SourceLocation::STUB);
        let branch = TemplateChildNode::IfBranch(Box::new_in(
            IfBranchNode::new(el, SourceLocation::STUB),
            &allocator,
        ));
        assert_eq!(branch.node_type(), NodeType::IfBranch);

        let compound = TemplateChildNode::CompoundExpression(Box::new_in(
            CompoundExpressionNode::new(&allocator, SourceLocation::STUB),
            &allocator,
        ));
        assert_eq!(compound.node_type().name(), "CompoundExpression");
    }

    #[test]
    fn test_arg_name_lookup() {
        let allocator = Bump::new();
        let mut dir = DirectiveNode::new(&allocator, DirectiveKind::Bind, SourceLocation::STUB);
        assert!(dir.arg_name().is_none());

        dir.arg = Some(ExpressionNode::simple(
            &allocator,
            "key",
            true,
            SourceLocation::STUB,
        ));
        assert_eq!(dir.arg_name(), Some("key"));
        assert!(dir.is_bind_of("key"));
        assert!(!dir.is_bind_of("id"));

        dir.arg = Some(ExpressionNode::simple(&allocator, "", true, SourceLocation::STUB));
        assert!(dir.arg_name().is_none());

        dir.name = DirectiveKind::On;
        dir.arg = Some(ExpressionNode::simple(
            &allocator,
            "key",
            true,
            SourceLocation::STUB,
        ));
        assert!(!dir.is_bind_of("key"));
    }

    #[test]
    fn test_stub_location() {
        assert!(SourceLocation::default().is_stub());
        let loc = SourceLocation::new(Position::new(3, 1, 4), Position::new(9, 1, 10), "<view>");
        assert!(!loc.is_stub());
    }
}
