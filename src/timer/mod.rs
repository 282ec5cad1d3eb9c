// 计时器模块 - 秒表状态机
//
// 状态 {Stopped, Running},所有操作都是全函数,不会失败;
// 节拍调度由 TimerActor 负责,这里只做纯状态转换

pub mod laps;

pub use laps::LapRecorder;

use crate::models::{LapEntry, TimerSnapshot};

/// 每个调度节拍增加的毫秒数
///
/// 约定是"每个节拍加固定增量",而非测量墙钟差值,
/// 因此 elapsed 只会单调增加,不受调度抖动影响
pub const TICK_MS: u64 = 10;

/// 秒表状态机
///
/// elapsed_ms 仅由本状态机修改:tick 累加,reset 归零
#[derive(Debug, Default)]
pub struct TimerEngine {
    elapsed_ms: u64,
    running: bool,
    laps: LapRecorder,
}

impl TimerEngine {
    /// 创建初始状态的秒表（Stopped, elapsed=0）
    pub fn new() -> Self {
        Self::default()
    }

    /// 启动计时,仅在 Stopped 状态生效
    ///
    /// 返回是否发生了状态转换（Running 状态下为无操作）
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    /// 停止计时,仅在 Running 状态生效
    ///
    /// 返回是否发生了状态转换（Stopped 状态下为无操作）
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        true
    }

    /// 切换状态:Running 则停止,否则启动
    ///
    /// 这是前端主按钮唯一调用的转换,由 start/stop 原语组合而成;
    /// 返回切换后的运行状态
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
        self.running
    }

    /// 重置:任意状态下有效,强制 Stopped、elapsed 归零、清空单圈
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed_ms = 0;
        self.laps.clear();
    }

    /// 处理一个调度节拍,累加固定增量
    ///
    /// 仅在 Running 状态累加;停止后迟到的节拍是无操作
    pub fn tick(&mut self) {
        if self.running {
            self.elapsed_ms += TICK_MS;
        }
    }

    /// 记录一圈
    ///
    /// 仅在 Running 状态接受,捕获当前累计时间并插入列表最前;
    /// Stopped 状态下为无操作,返回 None
    pub fn record_lap(&mut self) -> Option<LapEntry> {
        if !self.running {
            return None;
        }
        self.laps.record(self.elapsed_ms);
        Some(LapEntry {
            number: self.laps.len(),
            elapsed_ms: self.elapsed_ms,
            display: format_elapsed(self.elapsed_ms),
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// 生成供前端渲染的快照
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            elapsed_ms: self.elapsed_ms,
            running: self.running,
            display: format_elapsed(self.elapsed_ms),
            laps: self.laps.entries(),
        }
    }
}

/// 将毫秒格式化为 mm:ss.cc（分:秒.百分秒）
pub fn format_elapsed(elapsed_ms: u64) -> String {
    let minutes = elapsed_ms / 60_000;
    let seconds = (elapsed_ms % 60_000) / 1_000;
    let centiseconds = (elapsed_ms % 1_000) / 10;
    format!("{:02}:{:02}.{:02}", minutes, seconds, centiseconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_n(engine: &mut TimerEngine, n: u64) {
        for _ in 0..n {
            engine.tick();
        }
    }

    #[test]
    fn test_initial_state() {
        let engine = TimerEngine::new();
        assert_eq!(engine.elapsed_ms(), 0);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_ticks_accumulate_fixed_increment() {
        let mut engine = TimerEngine::new();
        engine.start();
        // 500 毫秒对应 50 个节拍
        tick_n(&mut engine, 50);
        assert_eq!(engine.elapsed_ms(), 500);
    }

    #[test]
    fn test_stale_tick_ignored_when_stopped() {
        let mut engine = TimerEngine::new();
        engine.start();
        tick_n(&mut engine, 10);
        engine.stop();
        // 停止后迟到的节拍不改变状态
        engine.tick();
        assert_eq!(engine.elapsed_ms(), 100);
    }

    #[test]
    fn test_start_is_noop_when_running() {
        let mut engine = TimerEngine::new();
        assert!(engine.start());
        assert!(!engine.start());
        assert!(engine.is_running());
    }

    #[test]
    fn test_stop_twice_equals_stop_once() {
        let mut engine = TimerEngine::new();
        engine.start();
        tick_n(&mut engine, 5);

        assert!(engine.stop());
        let after_first = engine.snapshot();
        assert!(!engine.stop());
        let after_second = engine.snapshot();

        assert_eq!(after_first.elapsed_ms, after_second.elapsed_ms);
        assert_eq!(after_first.running, after_second.running);
    }

    #[test]
    fn test_toggle_composes_start_and_stop() {
        let mut engine = TimerEngine::new();
        assert!(engine.toggle());
        assert!(engine.is_running());
        assert!(!engine.toggle());
        assert!(!engine.is_running());
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut engine = TimerEngine::new();
        engine.start();
        tick_n(&mut engine, 30);
        engine.record_lap();

        engine.reset();
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.elapsed_ms, 0);
        assert!(!snapshot.running);
        assert!(snapshot.laps.is_empty());

        // Stopped 状态下重置同样有效
        engine.reset();
        assert_eq!(engine.elapsed_ms(), 0);
    }

    #[test]
    fn test_lap_ignored_when_stopped() {
        let mut engine = TimerEngine::new();
        assert!(engine.record_lap().is_none());
        assert!(engine.snapshot().laps.is_empty());
    }

    #[test]
    fn test_laps_newest_first() {
        let mut engine = TimerEngine::new();
        engine.start();

        tick_n(&mut engine, 10);
        engine.record_lap();
        tick_n(&mut engine, 15);
        engine.record_lap();
        tick_n(&mut engine, 15);
        engine.record_lap();

        let snapshot = engine.snapshot();
        let times: Vec<u64> = snapshot.laps.iter().map(|l| l.elapsed_ms).collect();
        assert_eq!(times, vec![400, 250, 100]);
        let numbers: Vec<usize> = snapshot.laps.iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec![3, 2, 1]);
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00.00");
        assert_eq!(format_elapsed(500), "00:00.50");
        assert_eq!(format_elapsed(65_430), "01:05.43");
        assert_eq!(format_elapsed(600_000), "10:00.00");
    }
}
