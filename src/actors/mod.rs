// Actor模块 - 使用Actor模式管理并发状态
//
// 用消息传递替代Arc<Mutex<T>>,命令与节拍在单任务内顺序执行,
// 计时状态、单圈列表与测量结果都不需要加锁

pub mod measurement;
pub mod timer;

pub use measurement::{MeasurementActor, MeasurementCommand, MeasurementHandle};
pub use timer::{TimerActor, TimerCommand, TimerHandle};
