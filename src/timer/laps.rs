// 单圈记录器 - 维护新在前的单圈时间列表

use crate::models::LapEntry;
use crate::timer::format_elapsed;

/// 单圈记录器
///
/// 列表新在前,插入顺序有意义;生命周期与计时会话相同,
/// 不做持久化(单圈属于会话内临时数据,重启后丢弃)
#[derive(Debug, Default)]
pub struct LapRecorder {
    /// 捕获的累计毫秒数,下标 0 为最新一圈
    laps: Vec<u64>,
}

impl LapRecorder {
    /// 创建空的记录器
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一圈,插入到列表最前
    pub fn record(&mut self, elapsed_ms: u64) {
        self.laps.insert(0, elapsed_ms);
    }

    /// 清空列表,由计时器重置时调用
    pub fn clear(&mut self) {
        self.laps.clear();
    }

    /// 当前圈数
    pub fn len(&self) -> usize {
        self.laps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laps.is_empty()
    }

    /// 生成带编号的单圈条目
    ///
    /// 显示编号为 `总圈数 - 下标`,最新一圈编号最大
    pub fn entries(&self) -> Vec<LapEntry> {
        let total = self.laps.len();
        self.laps
            .iter()
            .enumerate()
            .map(|(index, &elapsed_ms)| LapEntry {
                number: total - index,
                elapsed_ms,
                display: format_elapsed(elapsed_ms),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first_order() {
        let mut recorder = LapRecorder::new();
        recorder.record(100);
        recorder.record(250);
        recorder.record(400);

        let times: Vec<u64> = recorder.entries().iter().map(|l| l.elapsed_ms).collect();
        assert_eq!(times, vec![400, 250, 100]);
    }

    #[test]
    fn test_display_numbering() {
        let mut recorder = LapRecorder::new();
        recorder.record(100);
        recorder.record(250);
        recorder.record(400);

        let numbers: Vec<usize> = recorder.entries().iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec![3, 2, 1]);
    }

    #[test]
    fn test_clear() {
        let mut recorder = LapRecorder::new();
        recorder.record(100);
        recorder.clear();
        assert!(recorder.is_empty());
        assert!(recorder.entries().is_empty());
    }
}
