// 事件总线 - 用于模块间解耦通信
//
// Actor 在状态转换后发布事件,应用层订阅并转发给前端触发重绘
// 使用 tokio::sync::broadcast 实现发布/订阅

use tokio::sync::broadcast;

use crate::models::{LapEntry, MeasurementRecord};

/// 应用事件枚举 - 定义所有可能的状态变化通知
#[derive(Debug, Clone)]
pub enum AppEvent {
    // --- 计时事件 ---

    /// 计时开始
    TimerStarted,

    /// 计时停止
    TimerStopped {
        elapsed_ms: u64,
    },

    /// 计时重置（单圈列表同时清空）
    TimerReset,

    /// 记录了一圈
    LapRecorded {
        lap: LapEntry,
    },

    // --- 测量事件 ---

    /// 测量计算成功
    MeasurementComputed {
        record: MeasurementRecord,
    },

    /// 清除了屏幕上的测量结果（存储槽不受影响）
    MeasurementCleared,
}

/// 事件总线
///
/// 使用 broadcast channel 实现发布/订阅,支持多个订阅者同时接收
pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl EventBus {
    /// 创建新的事件总线
    ///
    /// # 参数
    /// - `capacity`: 事件缓冲区大小
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// 发布事件
    ///
    /// 如果没有订阅者,事件会被丢弃(这是正常的)
    pub fn publish(&self, event: AppEvent) {
        match self.sender.send(event) {
            Ok(receiver_count) => {
                tracing::trace!("事件已发布，订阅者数量: {}", receiver_count);
            }
            Err(_) => {
                // 没有订阅者,忽略错误
                tracing::trace!("事件已发布但无订阅者");
            }
        }
    }

    /// 订阅事件
    ///
    /// 返回一个接收器,可以用 `.recv().await` 接收事件
    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    /// 获取当前订阅者数量
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_event_bus_basic() {
        let bus = EventBus::new(16);

        // 订阅事件
        let mut receiver = bus.subscribe();

        // 发布事件
        bus.publish(AppEvent::TimerStopped { elapsed_ms: 500 });

        // 接收事件
        match receiver.recv().await {
            Ok(AppEvent::TimerStopped { elapsed_ms }) => {
                assert_eq!(elapsed_ms, 500);
            }
            _ => panic!("未收到预期事件"),
        }
    }

    #[tokio::test]
    async fn test_multiple_subscribers() {
        let bus = EventBus::new(16);

        // 创建多个订阅者
        let mut receiver1 = bus.subscribe();
        let mut receiver2 = bus.subscribe();

        // 发布事件
        bus.publish(AppEvent::TimerReset);

        // 两个订阅者都应该收到事件
        assert!(receiver1.try_recv().is_ok());
        assert!(receiver2.try_recv().is_ok());
    }
}
