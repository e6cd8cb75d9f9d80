use std::collections::HashSet;
use std::path::Path;

/// 取文件名最后一个 '.' 之后的部分作为扩展名
///
/// 以 '.' 开头且没有其他 '.' 的文件名（如 ".gitignore"）没有扩展名。
pub fn extension_token(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().into_owned())
}

/// 判断文件扩展名是否在排除列表中（区分大小写）
pub fn is_excluded(path: &Path, excluded: &HashSet<String>) -> bool {
    if excluded.is_empty() {
        return false;
    }
    match extension_token(path) {
        Some(ext) => excluded.contains(&ext),
        None => false,
    }
}
