// 计时领域管理器
//
// 负责秒表状态机与单圈记录相关的功能
// 核心组件是 TimerActor 的 Handle

use crate::actors::TimerHandle;

/// 计时领域管理器 - 负责秒表与单圈
#[derive(Clone)]
pub struct TimerDomain {
    timer: TimerHandle,
}

impl TimerDomain {
    /// 创建新的计时领域管理器
    pub fn new(timer: TimerHandle) -> Self {
        Self { timer }
    }

    /// 获取计时器Handle
    pub fn get_timer(&self) -> &TimerHandle {
        &self.timer
    }
}
