// Measurement Actor - 使用Actor模式管理测量状态
//
// 持有输入草稿、最近一次结果与存储槽;
// 保存是后台任务,失败仅记录日志(单槽覆盖,后写优先)

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::{mpsc, oneshot};

use crate::event_bus::{AppEvent, EventBus};
use crate::measurement;
use crate::models::{MeasurementRecord, MeasurementSnapshot, ValidationError};
use crate::storage::SlotStore;

/// 测量命令
pub enum MeasurementCommand {
    /// 更新体重输入草稿
    SetWeight { value: String },

    /// 更新身高输入草稿
    SetHeight { value: String },

    /// 按当前草稿计算
    Calculate {
        reply: oneshot::Sender<Result<MeasurementRecord, ValidationError>>,
    },

    /// 清除屏幕上的结果（存储槽不受影响）
    Clear,

    /// 获取当前快照
    Snapshot {
        reply: oneshot::Sender<MeasurementSnapshot>,
    },

    /// 健康检查（Ping）
    HealthCheck { reply: oneshot::Sender<()> },
}

/// 测量Actor（无需外层Mutex）
pub struct MeasurementActor {
    receiver: mpsc::Receiver<MeasurementCommand>,
    weight_input: String,
    height_input: String,
    record: Option<MeasurementRecord>,
    store: Arc<dyn SlotStore>,
    event_bus: Arc<EventBus>,
}

impl MeasurementActor {
    /// 创建新的Actor
    ///
    /// # 参数
    /// - `initial`: 启动时从存储槽读出的历史记录,作为初始结果展示
    pub fn new(
        initial: Option<MeasurementRecord>,
        store: Arc<dyn SlotStore>,
        event_bus: Arc<EventBus>,
    ) -> (Self, MeasurementHandle) {
        let (sender, receiver) = mpsc::channel(32);
        let actor = Self {
            receiver,
            weight_input: String::new(),
            height_input: String::new(),
            record: initial,
            store,
            event_bus,
        };
        let handle = MeasurementHandle { sender };
        (actor, handle)
    }

    /// 运行Actor（在单独的任务中运行）
    pub async fn run(mut self) {
        tracing::info!("Measurement Actor 已启动");

        while let Some(cmd) = self.receiver.recv().await {
            match cmd {
                MeasurementCommand::SetWeight { value } => {
                    self.weight_input = value;
                }

                MeasurementCommand::SetHeight { value } => {
                    self.height_input = value;
                }

                MeasurementCommand::Calculate { reply } => {
                    let _ = reply.send(self.calculate());
                }

                MeasurementCommand::Clear => {
                    // 只清除内存中的结果;存储槽仅被成功计算覆盖,
                    // 且仅在启动时读取一次,重开应用仍会恢复上次记录
                    self.record = None;
                    self.event_bus.publish(AppEvent::MeasurementCleared);
                    tracing::debug!("测量结果已清除");
                }

                MeasurementCommand::Snapshot { reply } => {
                    let _ = reply.send(MeasurementSnapshot {
                        weight_input: self.weight_input.clone(),
                        height_input: self.height_input.clone(),
                        record: self.record.clone(),
                    });
                }

                MeasurementCommand::HealthCheck { reply } => {
                    // 立即响应，表明Actor正常运行
                    let _ = reply.send(());
                }
            }
        }

        tracing::info!("Measurement Actor 已停止");
    }

    /// 验证草稿并计算
    ///
    /// 验证失败时不改动任何状态;成功后更新内存结果并发起后台保存
    fn calculate(&mut self) -> Result<MeasurementRecord, ValidationError> {
        let input = match measurement::validate(&self.weight_input, &self.height_input) {
            Ok(input) => input,
            Err(e) => {
                tracing::warn!("输入验证失败: {}", e);
                return Err(e);
            }
        };

        let record = measurement::compute(&input);
        tracing::info!(
            "BMI 计算完成: {} ({})",
            record.bmi,
            record.category.display_name()
        );

        self.record = Some(record.clone());

        // 后台保存,不阻塞后续命令;失败仅记录日志
        let store = self.store.clone();
        let to_save = record.clone();
        tokio::spawn(async move {
            if let Err(e) = store.save(&to_save).await {
                tracing::error!("测量记录保存失败: {}", e);
            }
        });

        self.event_bus.publish(AppEvent::MeasurementComputed {
            record: record.clone(),
        });

        Ok(record)
    }
}

/// 测量Handle（用于与Actor通信，可克隆）
#[derive(Clone)]
pub struct MeasurementHandle {
    sender: mpsc::Sender<MeasurementCommand>,
}

impl MeasurementHandle {
    /// 更新体重输入草稿
    pub async fn set_weight(&self, value: String) {
        let _ = self
            .sender
            .send(MeasurementCommand::SetWeight { value })
            .await;
    }

    /// 更新身高输入草稿
    pub async fn set_height(&self, value: String) {
        let _ = self
            .sender
            .send(MeasurementCommand::SetHeight { value })
            .await;
    }

    /// 按当前草稿计算
    pub async fn calculate(&self) -> Result<MeasurementRecord> {
        let (reply, rx) = oneshot::channel();
        self.sender
            .send(MeasurementCommand::Calculate { reply })
            .await
            .map_err(|_| anyhow::anyhow!("Actor通道已关闭"))?;
        let result = rx.await.map_err(|_| anyhow::anyhow!("Actor已停止"))?;
        result.map_err(anyhow::Error::from)
    }

    /// 清除屏幕上的结果
    pub async fn clear(&self) {
        let _ = self.sender.send(MeasurementCommand::Clear).await;
    }

    /// 获取当前快照
    pub async fn snapshot(&self) -> MeasurementSnapshot {
        let (reply, rx) = oneshot::channel();
        self.sender
            .send(MeasurementCommand::Snapshot { reply })
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
            .send(MeasurementCommand::HealthCheck { reply })
            .await
            .is_err()
        {
            tracing::warn!("Measurement Actor 健康检查失败: 通道已关闭");
            return false;
        }

        match tokio::time::timeout(std::time::Duration::from_secs(5), rx).await {
            Ok(Ok(())) => true,
            Ok(Err(_)) => {
                tracing::warn!("Measurement Actor 健康检查失败: Actor已停止");
                false
            }
            Err(_) => {
                tracing::warn!("Measurement Actor 健康检查失败: 超时(5秒)");
                false
            }
        }
    }
}
