//! 系统工具命令
//!
//! 面向支持与排障的辅助接口：日志目录查询与打开

use crate::utils::file_system::{get_log_dir as get_log_dir_impl, open_folder_in_explorer};

/// 获取日志目录路径
#[tauri::command]
pub fn get_log_dir() -> Result<String, String> {
    let log_dir = get_log_dir_impl()?;
    Ok(log_dir.to_string_lossy().to_string())
}

/// 打开日志文件夹
#[tauri::command]
pub fn open_log_folder() -> Result<(), String> {
    let log_dir = get_log_dir_impl()?;
    open_folder_in_explorer(&log_dir)
}
