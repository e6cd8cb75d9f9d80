use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// 进度条管理器，在 stderr 上显示已检查的文件数
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// 创建新的进度条；disabled 时不输出任何内容
    pub fn new(enabled: bool) -> Self {
        let bar = if enabled {
            let bar = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner} {pos} file(s) examined {msg}")
            {
                bar.set_style(style);
            }
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        } else {
            ProgressBar::hidden()
        };
        ProgressManager { bar }
    }

    /// 增加进度
    pub fn increment(&self) {
        self.bar.inc(1);
    }

    /// 获取当前进度
    pub fn get_current(&self) -> u64 {
        self.bar.position()
    }

    /// 暂停进度条绘制后执行输出，避免与结果行交错
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    /// 停止并清除进度条
    pub fn stop(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_bar_still_counts() {
        let progress = ProgressManager::new(false);
        progress.increment();
        progress.increment();
        assert_eq!(progress.get_current(), 2);
        assert_eq!(progress.suspend(|| 7), 7);
        progress.stop();
    }
}
