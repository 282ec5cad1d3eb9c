//! 应用程序初始化和启动
//!
//! 负责 Tauri 应用的完整启动流程，包括：
//! - 日志系统初始化
//! - 应用数据目录创建
//! - 历史测量记录的一次性读取
//! - Actor 系统启动
//! - 事件转发
//! - 命令注册

use std::sync::Arc;

use tauri::{Emitter, Manager};
use tracing::{error, info, warn};

use crate::actors::{MeasurementActor, TimerActor};
use crate::commands::*;
use crate::domains::{MeasurementDomain, TimerDomain};
use crate::event_bus::{AppEvent, EventBus};
use crate::logger;
use crate::storage::{JsonFileStore, SlotStore};
use crate::AppState;

/// 应用程序入口点
///
/// 初始化并启动 Tauri 应用，包含以下步骤：
/// 1. 日志系统初始化
/// 2. 应用数据目录创建
/// 3. 存储槽初始化与历史记录读取（首次交互渲染之前，只读一次）
/// 4. Actor 系统启动
/// 5. 事件转发任务启动
/// 6. Tauri 命令注册
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // 创建日志广播器
    let log_broadcaster = Arc::new(logger::LogBroadcaster::new());

    // 初始化日志系统（带前端推送功能）
    logger::init_with_broadcaster(log_broadcaster.clone()).expect("Failed to initialize logger");

    tauri::Builder::default()
        .setup(move |app| {
            info!("初始化健身计时助手...");

            // 设置日志广播器的 app handle
            log_broadcaster.set_app_handle(app.handle().clone());

            let app_dir = app.path().app_data_dir().map_err(|e| e.to_string())?;
            std::fs::create_dir_all(&app_dir).map_err(|e| e.to_string())?;

            // 初始化运行时（仅用于启动前的一次性初始化，不用于运行 Actor）
            let runtime = tokio::runtime::Runtime::new().map_err(|e| e.to_string())?;

            let (state, timer_actor, measurement_actor) = runtime.block_on(async {
                // 初始化存储槽
                let store = Arc::new(
                    JsonFileStore::new(app_dir.join("measurement.json"))
                        .await
                        .expect("存储槽初始化失败"),
                );

                // 启动时读取一次历史记录;失败按"无记录"处理,应用继续运行
                let initial_record = match store.load().await {
                    Ok(record) => record,
                    Err(e) => {
                        warn!("读取历史测量记录失败: {}", e);
                        None
                    }
                };
                if initial_record.is_some() {
                    info!("已恢复上次测量记录");
                }

                // 创建事件总线（容量256,足够缓冲）
                let event_bus = Arc::new(EventBus::new(256));

                // 初始化 Actor
                // 注意：Actor 不在此处启动，而是在后台任务的运行时中启动
                let (timer_actor, timer_handle) = TimerActor::new(event_bus.clone());
                let (measurement_actor, measurement_handle) = MeasurementActor::new(
                    initial_record,
                    store.clone() as Arc<dyn SlotStore>,
                    event_bus.clone(),
                );

                // ==================== 组装领域管理器 ====================

                let timer_domain = Arc::new(TimerDomain::new(timer_handle));
                let measurement_domain = Arc::new(MeasurementDomain::new(measurement_handle));

                info!("领域管理器已初始化完成");

                let app_state = AppState {
                    timer_domain,
                    measurement_domain,
                    event_bus,
                };

                (app_state, timer_actor, measurement_actor)
            });

            // 启动后台任务
            {
                let state_clone = state.clone();
                let app_handle = app.handle().clone();
                std::thread::spawn(move || {
                    let rt = tokio::runtime::Runtime::new()
                        .expect("无法创建 Tokio 运行时，程序无法继续运行");
                    rt.block_on(async move {
                        info!("启动后台任务...");

                        // 启动 Actor（在这个长期运行的运行时中）
                        tokio::spawn(timer_actor.run());
                        tokio::spawn(measurement_actor.run());
                        info!("Actors 已启动");

                        // 订阅事件并转发给前端（长期运行，保持运行时活跃）
                        forward_events(app_handle, state_clone.event_bus.clone()).await;
                    });
                });
            }

            app.manage(state);
            Ok(())
        })
        .plugin(tauri_plugin_opener::init())
        .invoke_handler(tauri::generate_handler![
            timer_start,
            timer_stop,
            timer_toggle,
            timer_reset,
            timer_lap,
            timer_state,
            measurement_set_weight,
            measurement_set_height,
            measurement_calculate,
            measurement_clear,
            measurement_state,
            get_log_dir,
            open_log_folder,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

// ==================== 辅助函数 ====================

/// 订阅事件总线并将应用事件转发为前端可订阅的 Tauri 事件
///
/// 状态变化（计时转换、计圈、测量结果）经由这里触发前端重绘
async fn forward_events(app: tauri::AppHandle, event_bus: Arc<EventBus>) {
    use tokio::sync::broadcast::error::RecvError;

    let mut receiver = event_bus.subscribe();
    loop {
        match receiver.recv().await {
            Ok(event) => emit_event(&app, event),
            Err(RecvError::Lagged(count)) => {
                warn!("事件转发滞后，丢弃 {} 条事件", count);
            }
            Err(RecvError::Closed) => break,
        }
    }
}

/// 将单个应用事件映射为 Tauri 事件并发送
fn emit_event(app: &tauri::AppHandle, event: AppEvent) {
    let result = match event {
        AppEvent::TimerStarted => app.emit("timer-started", ()),
        AppEvent::TimerStopped { elapsed_ms } => app.emit("timer-stopped", elapsed_ms),
        AppEvent::TimerReset => app.emit("timer-reset", ()),
        AppEvent::LapRecorded { lap } => app.emit("lap-recorded", lap),
        AppEvent::MeasurementComputed { record } => app.emit("measurement-computed", record),
        AppEvent::MeasurementCleared => app.emit("measurement-cleared", ()),
    };

    if let Err(e) = result {
        error!("前端事件转发失败: {}", e);
    }
}
