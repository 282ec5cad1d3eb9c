//! 秒表控制命令
//!
//! 前端按钮意图的入口：启动/停止/切换/重置/计圈，
//! 以及渲染用的状态查询

use crate::models::TimerSnapshot;
use crate::AppState;

/// 启动计时（已在计时中则为无操作）
#[tauri::command]
pub async fn timer_start(state: tauri::State<'_, AppState>) -> Result<(), String> {
    state.timer_domain.get_timer().start().await;
    Ok(())
}

/// 停止计时（已停止则为无操作）
#[tauri::command]
pub async fn timer_stop(state: tauri::State<'_, AppState>) -> Result<(), String> {
    state.timer_domain.get_timer().stop().await;
    Ok(())
}

/// 切换启动/停止 - 主按钮实际调用的命令
#[tauri::command]
pub async fn timer_toggle(state: tauri::State<'_, AppState>) -> Result<(), String> {
    state.timer_domain.get_timer().toggle().await;
    Ok(())
}

/// 重置计时器并清空单圈列表
#[tauri::command]
pub async fn timer_reset(state: tauri::State<'_, AppState>) -> Result<(), String> {
    state.timer_domain.get_timer().reset().await;
    Ok(())
}

/// 记录一圈（仅计时中有效，停止时忽略）
#[tauri::command]
pub async fn timer_lap(state: tauri::State<'_, AppState>) -> Result<(), String> {
    state.timer_domain.get_timer().lap().await;
    Ok(())
}

/// 获取计时器当前状态
///
/// # 返回
/// - 累计时间、运行标志与单圈列表（新在前）
#[tauri::command]
pub async fn timer_state(state: tauri::State<'_, AppState>) -> Result<TimerSnapshot, String> {
    Ok(state.timer_domain.get_timer().snapshot().await)
}
