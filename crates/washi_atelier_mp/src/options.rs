//! Mini-program compiler options.

use serde::{Deserialize, Serialize};
use washi_carton::{format_compact, String};

/// Target mini-program platform.
///
/// Platforms share the markup structure and differ in the namespace of their
/// control-flow attributes and in the template file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MiniProgramPlatform {
    /// WeChat (`wx:if`, `.wxml`)
    #[default]
    #[serde(alias = "mp-weixin")]
    Weixin,
    /// ByteDance (`tt:if`, `.ttml`)
    #[serde(alias = "mp-toutiao")]
    Toutiao,
    /// QQ (`qq:if`, `.qml`)
    #[serde(alias = "mp-qq")]
    Qq,
    /// Alipay (`a:if`, `.axml`)
    #[serde(alias = "mp-alipay")]
    Alipay,
    /// Baidu (`s-if`, `.swan`)
    #[serde(alias = "mp-baidu")]
    Baidu,
    /// Kuaishou (`ks:if`, `.ksml`)
    #[serde(alias = "mp-kuaishou")]
    Kuaishou,
}

impl MiniProgramPlatform {
    /// Prefix of control-flow attributes (`wx:` in `wx:if`).
    pub fn directive_prefix(&self) -> &'static str {
        match self {
            Self::Weixin => "wx:",
            Self::Toutiao => "tt:",
            Self::Qq => "qq:",
            Self::Alipay => "a:",
            Self::Baidu => "s-",
            Self::Kuaishou => "ks:",
        }
    }

    /// Template file extension, including the dot.
    pub fn template_extname(&self) -> &'static str {
        match self {
            Self::Weixin => ".wxml",
            Self::Toutiao => ".ttml",
            Self::Qq => ".qml",
            Self::Alipay => ".axml",
            Self::Baidu => ".swan",
            Self::Kuaishou => ".ksml",
        }
    }

    /// Template file name for a page or component path without extension.
    pub fn template_filename(&self, stem: &str) -> String {
        format_compact!("{}{}", stem, self.template_extname())
    }
}

/// Mini-program markup compiler options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MpCompilerOptions {
    /// File name the generated markup is emitted under
    pub filename: String,

    /// Target platform
    pub platform: MiniProgramPlatform,

    /// Explicit directive prefix, overriding the platform's
    pub directive: Option<String>,

    /// Whether to keep template comments in the output
    pub comments: bool,
}

impl Default for MpCompilerOptions {
    fn default() -> Self {
        Self {
            filename: String::const_new("index.wxml"),
            platform: MiniProgramPlatform::default(),
            directive: None,
            comments: false,
        }
    }
}

impl MpCompilerOptions {
    /// Options for `platform`, emitting `<stem><extname>`.
    pub fn for_platform(platform: MiniProgramPlatform, stem: &str) -> Self {
        Self {
            filename: platform.template_filename(stem),
            platform,
            ..Default::default()
        }
    }

    /// Effective prefix of control-flow attributes.
    pub fn directive_prefix(&self) -> &str {
        match &self.directive {
            Some(prefix) => prefix.as_str(),
            None => self.platform.directive_prefix(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = MpCompilerOptions::default();
        assert_eq!(opts.filename, "index.wxml");
        assert_eq!(opts.platform, MiniProgramPlatform::Weixin);
        assert_eq!(opts.directive_prefix(), "wx:");
        assert!(opts.directive.is_none());
        assert!(!opts.comments);
    }

    #[test]
    fn test_platform_tables() {
        let toutiao =
            MpCompilerOptions::for_platform(MiniProgramPlatform::Toutiao, "pages/index/index");
        assert_eq!(toutiao.filename, "pages/index/index.ttml");
        assert_eq!(toutiao.directive_prefix(), "tt:");
        assert_eq!(MiniProgramPlatform::Baidu.directive_prefix(), "s-");
        assert_eq!(MiniProgramPlatform::Alipay.template_filename("app"), "app.axml");
    }

    #[test]
    fn test_explicit_directive_wins() {
        let opts = MpCompilerOptions {
            directive: Some(String::from("qq:")),
            ..Default::default()
        };
        assert_eq!(opts.directive_prefix(), "qq:");
    }

    #[test]
    fn test_deserialize_from_json() {
        let opts: MpCompilerOptions = serde_json::from_str(
            r#"{ "filename": "pages/list/list.ttml", "platform": "mp-toutiao", "comments": true }"#,
        )
        .unwrap();
        assert_eq!(opts.filename, "pages/list/list.ttml");
        assert_eq!(opts.platform, MiniProgramPlatform::Toutiao);
        assert_eq!(opts.directive_prefix(), "tt:");
        assert!(opts.comments);

        let opts: MpCompilerOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, MpCompilerOptions::default());
    }
}
