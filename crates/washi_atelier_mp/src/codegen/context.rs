//! Code generation context and result types.

use crate::options::MpCompilerOptions;

/// Markup generation context using a byte buffer as the single output accumulator
pub struct MarkupCodegenContext<'o> {
    /// Generated markup buffer (bytes)
    pub(super) code: Vec<u8>,
    /// Options
    pub(super) options: &'o MpCompilerOptions,
    /// Prefix of control-flow attributes (`wx:`)
    directive_prefix: &'o str,
}

/// Markup generation result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupCodegenResult {
    /// Generated markup
    pub code: String,
}

impl<'o> MarkupCodegenContext<'o> {
    /// Create a new codegen context
    pub fn new(options: &'o MpCompilerOptions) -> Self {
        Self {
            code: Vec::with_capacity(1024),
            options,
            directive_prefix: options.directive_prefix(),
        }
    }

    /// Push string to buffer
    #[inline]
    pub fn push(&mut self, code: &str) {
        self.code.extend_from_slice(code.as_bytes());
    }

    /// Push ` <prefix><name>`, e.g. ` wx:for-item`
    #[inline]
    pub fn push_directive(&mut self, name: &str) {
        self.code.push(b' ');
        self.code.extend_from_slice(self.directive_prefix.as_bytes());
        self.code.extend_from_slice(name.as_bytes());
    }

    /// Push `{{content}}`
    #[inline]
    pub fn push_mustache(&mut self, content: &str) {
        self.code.extend_from_slice(b"{{");
        self.code.extend_from_slice(content.as_bytes());
        self.code.extend_from_slice(b"}}");
    }

    /// Push `="value"`
    #[inline]
    pub fn push_quoted(&mut self, value: &str) {
        self.code.extend_from_slice(b"=\"");
        self.code.extend_from_slice(value.as_bytes());
        self.code.push(b'"');
    }

    /// Push `="{{content}}"`
    #[inline]
    pub fn push_quoted_mustache(&mut self, content: &str) {
        self.code.extend_from_slice(b"=\"");
        self.push_mustache(content);
        self.code.push(b'"');
    }

    /// Get the generated markup as a String
    pub fn into_code(self) -> String {
        String::from_utf8(self.code).unwrap_or_default()
    }
}
