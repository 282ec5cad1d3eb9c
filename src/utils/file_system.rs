//! 文件系统操作工具
//!
//! 提供跨平台的日志目录访问与文件夹打开功能

use std::path::{Path, PathBuf};

/// 在系统文件管理器中打开文件夹
///
/// 根据不同操作系统使用对应的命令：
/// - Windows: explorer
/// - macOS: open
/// - Linux: xdg-open
///
/// # 参数
/// - `path`: 要打开的文件夹路径
pub fn open_folder_in_explorer(path: &Path) -> Result<(), String> {
    // 确保目录存在
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| format!("创建目录失败: {}", e))?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("explorer")
            .arg(path)
            .spawn()
            .map_err(|e| format!("无法打开文件夹: {}", e))?;
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()
            .map_err(|e| format!("无法打开文件夹: {}", e))?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()
            .map_err(|e| format!("无法打开文件夹: {}", e))?;
    }

    Ok(())
}

/// 获取日志目录路径（跨平台）
///
/// - macOS: ~/Library/Logs/fit-tracker
/// - Windows: %APPDATA%/fit-tracker/logs
/// - Linux: ~/.local/share/fit-tracker/logs
pub fn get_log_dir() -> Result<PathBuf, String> {
    let log_dir = if cfg!(target_os = "macos") {
        let home = std::env::var("HOME").map_err(|_| "无法获取 HOME 环境变量".to_string())?;
        PathBuf::from(home).join("Library/Logs/fit-tracker")
    } else if cfg!(target_os = "windows") {
        let appdata =
            std::env::var("APPDATA").map_err(|_| "无法获取 APPDATA 环境变量".to_string())?;
        PathBuf::from(appdata).join("fit-tracker").join("logs")
    } else {
        let home = std::env::var("HOME").map_err(|_| "无法获取 HOME 环境变量".to_string())?;
        PathBuf::from(home).join(".local/share/fit-tracker/logs")
    };

    Ok(log_dir)
}
