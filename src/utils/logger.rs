use log::{LevelFilter, SetLoggerError};
use simple_logger::SimpleLogger;

/// 初始化日志系统，日志输出到 stderr，不干扰搜索结果
pub fn init_logger(verbose: bool) -> Result<(), SetLoggerError> {
    if verbose {
        SimpleLogger::new().with_level(LevelFilter::Debug).init()
    } else {
        SimpleLogger::new().with_level(LevelFilter::Off).init()
    }
}
