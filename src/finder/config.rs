use crate::finder::error::FindError;
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

/// 支持的文本编码（封闭集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingKind {
    Ascii,
    #[default]
    SystemDefault,
    BigEndianUtf16,
    LittleEndianUtf16,
    Utf32,
    Utf7,
    Utf8,
}

impl EncodingKind {
    /// 解析命令行中的编码名称，忽略大小写并去掉连字符（"UTF-8" 等同于 "utf8"）
    pub fn parse(token: &str) -> Result<Self, FindError> {
        let normalized = token.to_lowercase().replace('-', "");
        match normalized.as_str() {
            "ascii" => Ok(EncodingKind::Ascii),
            "default" => Ok(EncodingKind::SystemDefault),
            "bigendianunicode" | "utf16be" => Ok(EncodingKind::BigEndianUtf16),
            "unicode" | "utf16" | "utf16le" => Ok(EncodingKind::LittleEndianUtf16),
            "utf32" => Ok(EncodingKind::Utf32),
            "utf7" => Ok(EncodingKind::Utf7),
            "utf8" => Ok(EncodingKind::Utf8),
            _ => Err(FindError::configuration(format!(
                "Unsupported encoding \"{}\".",
                token
            ))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EncodingKind::Ascii => "ascii",
            EncodingKind::SystemDefault => "default",
            EncodingKind::BigEndianUtf16 => "bigendianunicode",
            EncodingKind::LittleEndianUtf16 => "unicode",
            EncodingKind::Utf32 => "utf32",
            EncodingKind::Utf7 => "utf7",
            EncodingKind::Utf8 => "utf8",
        }
    }
}

impl fmt::Display for EncodingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 一次搜索请求：查找内容、根路径、编码与排除的扩展名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub root: PathBuf,
    pub encoding: EncodingKind,
    pub excluded_extensions: HashSet<String>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        SearchRequest {
            query: query.into(),
            root: root.into(),
            encoding: EncodingKind::default(),
            excluded_extensions: HashSet::new(),
        }
    }

    pub fn with_encoding(mut self, encoding: EncodingKind) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_excluded<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_extensions
            .extend(extensions.into_iter().map(Into::into));
        self
    }
}

/// 把逗号分隔的扩展名列表拆成集合，例如 "exe,dll"
pub fn parse_extension_list(list: &str) -> HashSet<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// 搜索配置结构体，用于配置搜索行为
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub concurrent: bool,
    pub max_workers: usize,
    pub show_progress: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            concurrent: false,
            max_workers: 5,
            show_progress: false,
        }
    }
}

impl SearchConfig {
    /// 创建新的搜索配置实例
    pub fn new() -> Self {
        Self::default()
    }
}
