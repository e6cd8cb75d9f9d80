use crate::finder::error::FindError;
use crate::finder::filter::extension_token;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 待检查的文件：绝对路径及其扩展名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub path: PathBuf,
    pub extension: Option<String>,
}

impl FileCandidate {
    pub fn new(path: PathBuf) -> Self {
        let extension = extension_token(&path);
        FileCandidate { path, extension }
    }
}

/// 根路径的类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootKind {
    Directory(PathBuf),
    File(PathBuf),
}

/// 解析根路径，判断是目录还是普通文件
pub fn resolve_root(root: &Path) -> Result<RootKind, FindError> {
    let resolved = fs::canonicalize(root).map_err(|e| FindError::path_resolution(root, e))?;
    let metadata =
        fs::metadata(&resolved).map_err(|e| FindError::path_resolution(root, e))?;

    if metadata.is_dir() {
        Ok(RootKind::Directory(resolved))
    } else if metadata.is_file() {
        Ok(RootKind::File(resolved))
    } else {
        // 设备、管道等特殊文件不做搜索，避免读取时阻塞
        Err(FindError::path_resolution(
            root,
            io::Error::new(
                io::ErrorKind::Unsupported,
                "not a regular file or directory",
            ),
        ))
    }
}

/// 惰性枚举候选文件；目录模式下按文件名顺序递归遍历，文件模式下只产生一个路径
pub enum Candidates {
    Directory(walkdir::IntoIter),
    Single(Option<PathBuf>),
}

impl Candidates {
    pub fn new(root: &RootKind) -> Self {
        match root {
            RootKind::Directory(dir) => Candidates::Directory(
                WalkDir::new(dir)
                    .follow_links(true)
                    .sort_by_file_name()
                    .into_iter(),
            ),
            RootKind::File(file) => Candidates::Single(Some(file.clone())),
        }
    }
}

impl Iterator for Candidates {
    type Item = Result<FileCandidate, FindError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Candidates::Single(path) => path.take().map(|p| Ok(FileCandidate::new(p))),
            Candidates::Directory(walker) => loop {
                match walker.next()? {
                    Ok(entry) if entry.file_type().is_file() => {
                        return Some(Ok(FileCandidate::new(entry.into_path())));
                    }
                    Ok(_) => continue,
                    Err(e) => return Some(Err(FindError::from(e))),
                }
            },
        }
    }
}
