use crate::finder::error::FindError;
use crate::utils::progress::ProgressManager;
use std::io::Write;
use std::path::{Path, PathBuf};

/// 单个文件的检查结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub path: PathBuf,
    pub matched: bool,
}

/// 目录搜索的汇总信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSummary {
    pub matched_count: usize,
    pub query: String,
}

const ENCODING_HINT_FILES: &str = "Try to specify a different encoding to parse the files or they are encrypted or special encoding files.";
const ENCODING_HINT_FILE: &str = "Try to specify a different encoding to parse the file or it was encrypted or special encoding files.";

/// 结果输出器：匹配一个打印一个，并累计匹配数
pub struct MatchReporter<W: Write> {
    out: W,
    progress: ProgressManager,
    query: String,
    matches: Vec<PathBuf>,
}

impl<W: Write> MatchReporter<W> {
    pub fn new(out: W, query: &str, show_progress: bool) -> Self {
        MatchReporter {
            out,
            progress: ProgressManager::new(show_progress),
            query: query.to_string(),
            matches: Vec::new(),
        }
    }

    pub fn searching(&mut self) -> Result<(), FindError> {
        self.emit("Searching...")
    }

    /// 记录一个已检查的文件
    pub fn examined(&mut self) {
        self.progress.increment();
    }

    pub fn examined_count(&self) -> u64 {
        self.progress.get_current()
    }

    /// 目录模式：立即打印匹配的路径
    pub fn report_match(&mut self, path: &Path) -> Result<(), FindError> {
        self.matches.push(path.to_path_buf());
        self.emit(&path.display().to_string())
    }

    /// 目录模式结束：打印汇总或未找到的提示
    pub fn finish_directory(&mut self) -> Result<SearchSummary, FindError> {
        self.progress.stop();
        let summary = SearchSummary {
            matched_count: self.matches.len(),
            query: self.query.clone(),
        };
        if summary.matched_count > 0 {
            self.emit(&format!(
                "\n{} file(s) may contain \"{}\".\n",
                summary.matched_count, summary.query
            ))?;
        } else {
            self.emit(&format!(
                "No files containing \"{}\" were found.\n\n\n{}",
                summary.query, ENCODING_HINT_FILES
            ))?;
        }
        Ok(summary)
    }

    /// 文件模式：打印单个文件的结论
    pub fn finish_file(&mut self, result: &MatchResult) -> Result<(), FindError> {
        self.progress.stop();
        if result.matched {
            self.emit(&format!("This file contains \"{}\".\n", self.query))
        } else {
            self.emit(&format!(
                "This file does not contain \"{}\".\n\n\n{}",
                self.query, ENCODING_HINT_FILE
            ))
        }
    }

    /// 文件模式：指定的文件因扩展名被排除，未读取
    pub fn file_skipped(&mut self, path: &Path, extension: &str) -> Result<(), FindError> {
        self.progress.stop();
        self.emit(&format!(
            "Skipped {}: files with extension \"{}\" are excluded.",
            path.display(),
            extension
        ))
    }

    /// 出错时清除进度条，已打印的匹配保留
    pub fn abort(&mut self) {
        self.progress.stop();
    }

    pub fn matches(&self) -> &[PathBuf] {
        &self.matches
    }

    fn emit(&mut self, line: &str) -> Result<(), FindError> {
        let out = &mut self.out;
        self.progress
            .suspend(|| writeln!(out, "{}", line).and_then(|_| out.flush()))
            .map_err(FindError::Output)
    }
}
