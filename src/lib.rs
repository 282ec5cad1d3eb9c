// 健身计时助手 - Tauri应用主库

// 声明模块
pub mod actors;
pub mod app;
pub mod commands;
pub mod domains;
pub mod event_bus;
pub mod logger;
pub mod measurement;
pub mod models;
pub mod storage;
pub mod timer;
pub mod utils;

use std::sync::Arc;

use domains::{MeasurementDomain, TimerDomain};
use event_bus::EventBus;

pub use app::run;

/// 应用状态（按领域分组）
///
/// 两个业务领域加一条事件总线；没有全局可变状态，
/// 可变状态都在各自的 Actor 内部
/// - 计时领域：秒表状态机与单圈记录
/// - 测量领域：BMI 输入、计算与持久化
/// - 事件总线：用于领域与前端间解耦通信
#[derive(Clone)]
pub struct AppState {
    /// 计时领域管理器
    pub timer_domain: Arc<TimerDomain>,
    /// 测量领域管理器
    pub measurement_domain: Arc<MeasurementDomain>,
    /// 事件总线
    pub event_bus: Arc<EventBus>,
}
