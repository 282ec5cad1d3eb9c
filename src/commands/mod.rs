//! Tauri 命令模块
//!
//! 提供前端调用的所有 Tauri 命令接口，按功能分组：
//! - timer: 秒表控制命令
//! - measurement: BMI 测量命令
//! - system: 系统工具命令

pub mod measurement;
pub mod system;
pub mod timer;

// 重新导出所有命令
pub use measurement::*;
pub use system::*;
pub use timer::*;
