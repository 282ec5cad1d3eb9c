// 数据模型模块 - 定义所有的数据结构

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 重新导出其他模块的类型
pub use crate::measurement::{ValidatedInput, ValidationError};
pub use crate::storage::StoreError;

/// 计时器快照 - 暴露给前端渲染的只读状态
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimerSnapshot {
    /// 累计毫秒数
    pub elapsed_ms: u64,
    /// 是否正在计时
    pub running: bool,
    /// 格式化后的显示文本（mm:ss.cc）
    pub display: String,
    /// 单圈列表（新在前）
    pub laps: Vec<LapEntry>,
}

/// 单圈记录 - 在接受计圈意图的瞬间捕获的累计时间
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LapEntry {
    /// 显示编号（总圈数 - 下标，最新一圈编号最大）
    pub number: usize,
    /// 捕获时的累计毫秒数
    pub elapsed_ms: u64,
    /// 格式化后的显示文本（mm:ss.cc）
    pub display: String,
}

/// BMI 分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    /// 偏瘦（BMI < 18.5）
    Underweight,
    /// 正常（18.5 - 24.9）
    Normal,
    /// 超重（25 - 29.9）
    Overweight,
    /// 肥胖（BMI >= 30）
    Obese,
}

impl BmiCategory {
    pub fn display_name(&self) -> &str {
        match self {
            Self::Underweight => "偏瘦",
            Self::Normal => "正常",
            Self::Overweight => "超重",
            Self::Obese => "肥胖",
        }
    }
}

/// 测量记录 - 最近一次成功计算的结果
///
/// 存储槽中有记录,当且仅当曾有一次计算成功完成
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// BMI 值（保留两位小数）
    pub bmi: f64,
    /// BMI 分类
    pub category: BmiCategory,
    /// 用户输入的体重原文（公斤）
    #[serde(rename = "weight")]
    pub weight_kg: String,
    /// 用户输入的身高原文（厘米）
    #[serde(rename = "height")]
    pub height_cm: String,
    /// 计算完成时间（ISO-8601）
    pub timestamp: DateTime<Utc>,
}

/// 测量界面快照 - 暴露给前端渲染的只读状态
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeasurementSnapshot {
    /// 体重输入框当前文本
    pub weight_input: String,
    /// 身高输入框当前文本
    pub height_input: String,
    /// 最近一次成功计算的结果（无则为 None）
    pub record: Option<MeasurementRecord>,
}
