// Timer Actor - 使用Actor模式驱动秒表状态机
//
// 节拍与命令在同一个任务内交错执行,状态无需加锁;
// Interval 句柄最多持有一个:start 时创建,stop/reset 时丢弃,
// 丢弃即同步取消,不会有过期节拍在状态离开 Running 后生效

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{interval_at, Duration, Instant, Interval, MissedTickBehavior};

use crate::event_bus::{AppEvent, EventBus};
use crate::models::TimerSnapshot;
use crate::timer::{TimerEngine, TICK_MS};

/// 计时器命令
pub enum TimerCommand {
    /// 启动计时（Running 状态下为无操作）
    Start,

    /// 停止计时（Stopped 状态下为无操作）
    Stop,

    /// 切换启动/停止
    Toggle,

    /// 重置到初始状态并清空单圈
    Reset,

    /// 记录一圈（仅 Running 状态接受）
    Lap,

    /// 获取当前快照
    Snapshot {
        reply: oneshot::Sender<TimerSnapshot>,
    },

    /// 健康检查（Ping）
    HealthCheck { reply: oneshot::Sender<()> },
}

/// 计时器Actor
pub struct TimerActor {
    receiver: mpsc::Receiver<TimerCommand>,
    engine: TimerEngine, // 直接持有，无需锁
    ticker: Option<Interval>,
    event_bus: Arc<EventBus>,
}

impl TimerActor {
    /// 创建新的Actor
    pub fn new(event_bus: Arc<EventBus>) -> (Self, TimerHandle) {
        let (sender, receiver) = mpsc::channel(32);
        let actor = Self {
            receiver,
            engine: TimerEngine::new(),
            ticker: None,
            event_bus,
        };
        let handle = TimerHandle { sender };
        (actor, handle)
    }

    /// 运行Actor（在单独的任务中运行）
    ///
    /// biased 保证到期的节拍先于命令被处理,
    /// 这样查询快照前积压的节拍都已累加完毕
    pub async fn run(mut self) {
        tracing::info!("Timer Actor 已启动");

        loop {
            tokio::select! {
                biased;

                _ = Self::next_tick(&mut self.ticker), if self.ticker.is_some() => {
                    self.engine.tick();
                }

                cmd = self.receiver.recv() => {
                    match cmd {
                        Some(cmd) => self.handle(cmd),
                        None => break,
                    }
                }
            }
        }

        tracing::info!("Timer Actor 已停止");
    }

    async fn next_tick(ticker: &mut Option<Interval>) {
        match ticker.as_mut() {
            Some(ticker) => {
                ticker.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }

    fn handle(&mut self, cmd: TimerCommand) {
        match cmd {
            TimerCommand::Start => {
                if self.engine.start() {
                    self.sync_ticker();
                    self.event_bus.publish(AppEvent::TimerStarted);
                    tracing::debug!("计时已启动");
                }
            }

            TimerCommand::Stop => {
                if self.engine.stop() {
                    self.sync_ticker();
                    self.event_bus.publish(AppEvent::TimerStopped {
                        elapsed_ms: self.engine.elapsed_ms(),
                    });
                    tracing::debug!("计时已停止: {} 毫秒", self.engine.elapsed_ms());
                }
            }

            TimerCommand::Toggle => {
                let running = self.engine.toggle();
                self.sync_ticker();
                if running {
                    self.event_bus.publish(AppEvent::TimerStarted);
                } else {
                    self.event_bus.publish(AppEvent::TimerStopped {
                        elapsed_ms: self.engine.elapsed_ms(),
                    });
                }
            }

            TimerCommand::Reset => {
                self.engine.reset();
                self.sync_ticker();
                self.event_bus.publish(AppEvent::TimerReset);
                tracing::debug!("计时已重置");
            }

            TimerCommand::Lap => {
                if let Some(lap) = self.engine.record_lap() {
                    tracing::debug!("记录第 {} 圈: {}", lap.number, lap.display);
                    self.event_bus.publish(AppEvent::LapRecorded { lap });
                }
            }

            TimerCommand::Snapshot { reply } => {
                let _ = reply.send(self.engine.snapshot());
            }

            TimerCommand::HealthCheck { reply } => {
                // 立即响应，表明Actor正常运行
                let _ = reply.send(());
            }
        }
    }

    /// 让节拍句柄与引擎状态保持一致:Running 则恰好持有一个,否则不持有
    fn sync_ticker(&mut self) {
        if self.engine.is_running() {
            if self.ticker.is_none() {
                let period = Duration::from_millis(TICK_MS);
                let mut ticker = interval_at(Instant::now() + period, period);
                // 延迟的节拍逐个补发,维持"每个调度节拍加固定增量"的约定
                ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);
                self.ticker = Some(ticker);
            }
        } else {
            self.ticker = None;
        }
    }
}

/// 计时器Handle（用于与Actor通信，可克隆）
#[derive(Clone)]
pub struct TimerHandle {
    sender: mpsc::Sender<TimerCommand>,
}

impl TimerHandle {
    /// 启动计时
    pub async fn start(&self) {
        let _ = self.sender.send(TimerCommand::Start).await;
    }

    /// 停止计时
    pub async fn stop(&self) {
        let _ = self.sender.send(TimerCommand::Stop).await;
    }

    /// 切换启动/停止
    pub async fn toggle(&self) {
        let _ = self.sender.send(TimerCommand::Toggle).await;
    }

    /// 重置计时器
    pub async fn reset(&self) {
        let _ = self.sender.send(TimerCommand::Reset).await;
    }

    /// 记录一圈
    pub async fn lap(&self) {
        let _ = self.sender.send(TimerCommand::Lap).await;
    }

    /// 获取当前快照
    pub async fn snapshot(&self) -> TimerSnapshot {
        let (reply, rx) = oneshot::channel();
        self.sender
            .send(TimerCommand::Snapshot { reply })
            .await
            .ok();
        rx.await.unwrap_or_default()
    }

    /// 健康检查
    ///
    /// 返回true表示Actor正常运行，false表示Actor无响应或已停止
    pub async fn health_check(&self) -> bool {
        let (reply, rx) = oneshot::channel();

        if self
            .sender
            .send(TimerCommand::HealthCheck { reply })
            .await
            .is_err()
        {
            tracing::warn!("Timer Actor 健康检查失败: 通道已关闭");
            return false;
        }

        match tokio::time::timeout(std::time::Duration::from_secs(5), rx).await {
            Ok(Ok(())) => true,
            Ok(Err(_)) => {
                tracing::warn!("Timer Actor 健康检查失败: Actor已停止");
                false
            }
            Err(_) => {
                tracing::warn!("Timer Actor 健康检查失败: 超时(5秒)");
                false
            }
        }
    }
}
