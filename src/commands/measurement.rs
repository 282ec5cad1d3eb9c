//! BMI 测量命令
//!
//! 提供输入草稿同步、计算、清除与状态查询接口；
//! 验证错误以字符串形式返回给前端弹窗提示

use tracing::info;

use crate::models::{MeasurementRecord, MeasurementSnapshot};
use crate::AppState;

/// 更新体重输入草稿
#[tauri::command]
pub async fn measurement_set_weight(
    state: tauri::State<'_, AppState>,
    value: String,
) -> Result<(), String> {
    state
        .measurement_domain
        .get_measurement()
        .set_weight(value)
        .await;
    Ok(())
}

/// 更新身高输入草稿
#[tauri::command]
pub async fn measurement_set_height(
    state: tauri::State<'_, AppState>,
    value: String,
) -> Result<(), String> {
    state
        .measurement_domain
        .get_measurement()
        .set_height(value)
        .await;
    Ok(())
}

/// 按当前草稿计算 BMI
///
/// # 返回
/// - `Ok(MeasurementRecord)`: 计算结果，同时已发起后台保存
/// - `Err(String)`: 验证错误提示，未改动任何状态
#[tauri::command]
pub async fn measurement_calculate(
    state: tauri::State<'_, AppState>,
) -> Result<MeasurementRecord, String> {
    state
        .measurement_domain
        .get_measurement()
        .calculate()
        .await
        .map_err(|e| e.to_string())
}

/// 清除屏幕上的测量结果
///
/// 存储槽不受影响，重开应用仍会恢复上次保存的记录
#[tauri::command]
pub async fn measurement_clear(state: tauri::State<'_, AppState>) -> Result<(), String> {
    info!("清除测量结果");
    state.measurement_domain.get_measurement().clear().await;
    Ok(())
}

/// 获取测量当前状态
#[tauri::command]
pub async fn measurement_state(
    state: tauri::State<'_, AppState>,
) -> Result<MeasurementSnapshot, String> {
    Ok(state.measurement_domain.get_measurement().snapshot().await)
}
