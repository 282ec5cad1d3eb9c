// 测量领域管理器
//
// 负责 BMI 输入、计算与持久化相关的功能
// 核心组件是 MeasurementActor 的 Handle

use crate::actors::MeasurementHandle;

/// 测量领域管理器 - 负责 BMI 计算与记录
#[derive(Clone)]
pub struct MeasurementDomain {
    measurement: MeasurementHandle,
}

impl MeasurementDomain {
    /// 创建新的测量领域管理器
    pub fn new(measurement: MeasurementHandle) -> Self {
        Self { measurement }
    }

    /// 获取测量Handle
    pub fn get_measurement(&self) -> &MeasurementHandle {
        &self.measurement
    }
}
