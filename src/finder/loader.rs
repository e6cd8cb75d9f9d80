use crate::finder::error::FindError;
use std::fs;
use std::io::Read;
use std::path::Path;

/// 读取文件全部字节的接口，搜索流程通过它访问文件内容
pub trait ByteLoader {
    fn load(&self, path: &Path) -> Result<Vec<u8>, FindError>;
}

/// 直接读取文件系统
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl ByteLoader for FsLoader {
    fn load(&self, path: &Path) -> Result<Vec<u8>, FindError> {
        // 文件句柄只在本作用域内存活
        let mut file = fs::File::open(path).map_err(|e| FindError::io(path, e))?;
        let size_hint = file
            .metadata()
            .ok()
            .and_then(|m| usize::try_from(m.len()).ok())
            .unwrap_or(0);
        let mut buffer = Vec::with_capacity(size_hint);
        file.read_to_end(&mut buffer)
            .map_err(|e| FindError::io(path, e))?;
        Ok(buffer)
    }
}
