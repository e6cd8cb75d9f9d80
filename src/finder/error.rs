use std::io;
use std::path::{Path, PathBuf};

/// 错误大类：决定一次调用在哪个阶段终止
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 命令格式错误或编码不受支持，未进行任何搜索
    Configuration,
    /// 根路径无法解析，未读取任何文件
    PathResolution,
    /// 遍历过程中文件或目录读取失败，放弃剩余遍历
    Io,
}

/// 搜索过程中的统一错误类型，在 main 中统一打印
#[derive(Debug, thiserror::Error)]
pub enum FindError {
    #[error("Error: {0}")]
    Configuration(String),

    #[error("No executable found matching command \"{0}\"")]
    UnknownCommand(String),

    #[error("Error: {} Path: {}", describe_io(.source, .target), .path.display())]
    PathResolution {
        path: PathBuf,
        target: PathTarget,
        #[source]
        source: io::Error,
    },

    #[error("Error: {} Path: {}", describe_io(.source, .target), .path.display())]
    Io {
        path: PathBuf,
        target: PathTarget,
        #[source]
        source: io::Error,
    },

    #[error("Error: Failed to write search output: {0}")]
    Output(#[source] io::Error),
}

/// 出错路径指向的对象，用于区分 "File not found" 与 "Directory not found"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathTarget {
    File,
    Directory,
}

impl FindError {
    pub fn configuration(message: impl Into<String>) -> Self {
        FindError::Configuration(message.into())
    }

    /// 读取单个文件时的错误
    pub fn io(path: &Path, source: io::Error) -> Self {
        FindError::Io {
            path: path.to_path_buf(),
            target: PathTarget::File,
            source,
        }
    }

    /// 遍历目录时的错误
    pub fn walk(path: &Path, source: io::Error) -> Self {
        FindError::Io {
            path: path.to_path_buf(),
            target: PathTarget::Directory,
            source,
        }
    }

    /// 根路径无法解析；父目录存在时视为文件缺失，否则视为目录缺失
    pub fn path_resolution(path: &Path, source: io::Error) -> Self {
        let parent_exists = path
            .parent()
            .map(|p| p.as_os_str().is_empty() || p.is_dir())
            .unwrap_or(true);
        let target = if parent_exists {
            PathTarget::File
        } else {
            PathTarget::Directory
        };
        FindError::PathResolution {
            path: path.to_path_buf(),
            target,
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            FindError::Configuration(_) | FindError::UnknownCommand(_) => ErrorKind::Configuration,
            FindError::PathResolution { .. } => ErrorKind::PathResolution,
            FindError::Io { .. } | FindError::Output(_) => ErrorKind::Io,
        }
    }
}

impl From<walkdir::Error> for FindError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(Path::to_path_buf).unwrap_or_default();
        let source = if err.loop_ancestor().is_some() {
            io::Error::new(io::ErrorKind::Other, "filesystem loop detected")
        } else {
            err.into_io_error()
                .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "walk failed"))
        };
        FindError::walk(&path, source)
    }
}

/// 各平台 "路径过长" 的系统错误码
#[cfg(target_os = "linux")]
const NAME_TOO_LONG: Option<i32> = Some(36);
#[cfg(any(target_os = "macos", target_os = "freebsd", target_os = "ios"))]
const NAME_TOO_LONG: Option<i32> = Some(63);
#[cfg(windows)]
const NAME_TOO_LONG: Option<i32> = Some(206);
#[cfg(not(any(
    target_os = "linux",
    target_os = "macos",
    target_os = "freebsd",
    target_os = "ios",
    windows
)))]
const NAME_TOO_LONG: Option<i32> = None;

/// 把底层 I/O 错误翻译成面向用户的一句话
fn describe_io(err: &io::Error, target: &PathTarget) -> &'static str {
    if err.raw_os_error().is_some() && err.raw_os_error() == NAME_TOO_LONG {
        return "The specified path, file name, or both exceed the system-defined maximum length.";
    }
    match err.kind() {
        io::ErrorKind::NotFound => match *target {
            PathTarget::File => "File not found.",
            PathTarget::Directory => "Directory not found.",
        },
        io::ErrorKind::PermissionDenied => "Permission denied.",
        io::ErrorKind::InvalidInput => "Path contains invalid characters such as \", <, >, or |.",
        io::ErrorKind::Unsupported => "Path is in an invalid format.",
        _ => "An I/O error occurs.",
    }
}
