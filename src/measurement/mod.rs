// 测量计算模块 - BMI 输入验证、公式计算与分类
//
// 纯逻辑,不持有状态;状态由 MeasurementActor 管理

use chrono::Utc;
use thiserror::Error;

use crate::models::{BmiCategory, MeasurementRecord};

/// 身高允许范围（厘米）
const HEIGHT_RANGE_CM: (f64, f64) = (50.0, 300.0);
/// 体重允许范围（公斤）
const WEIGHT_RANGE_KG: (f64, f64) = (20.0, 500.0);

/// 输入验证错误 - 全部面向用户提示,计算中止且不改动任何状态
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 任一输入框为空
    #[error("请输入体重和身高")]
    MissingInput,

    /// 任一输入无法解析为有限小数
    #[error("体重和身高必须是有效数字")]
    NotANumber,

    /// 任一输入不是正数
    #[error("体重和身高必须大于零")]
    NonPositive,

    /// 身高超出允许范围
    #[error("身高需在 50 - 300 厘米之间")]
    HeightOutOfRange,

    /// 体重超出允许范围
    #[error("体重需在 20 - 500 公斤之间")]
    WeightOutOfRange,
}

/// 通过验证的输入
///
/// 同时保留解析后的数值与去除空白后的原文,
/// 原文随记录一起保存,便于前端回显用户当时的输入
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub weight_raw: String,
    pub height_raw: String,
}

/// 验证体重/身高输入
///
/// 规则按顺序检查,第一条不通过的规则即为结果:
/// 1. 两项去除空白后均非空
/// 2. 两项均可解析为有限小数
/// 3. 两项均为正数
/// 4. 身高在 [50, 300] 厘米内
/// 5. 体重在 [20, 500] 公斤内
pub fn validate(weight_raw: &str, height_raw: &str) -> Result<ValidatedInput, ValidationError> {
    let weight_raw = weight_raw.trim();
    let height_raw = height_raw.trim();

    if weight_raw.is_empty() || height_raw.is_empty() {
        return Err(ValidationError::MissingInput);
    }

    let weight: f64 = weight_raw
        .parse()
        .map_err(|_| ValidationError::NotANumber)?;
    let height: f64 = height_raw
        .parse()
        .map_err(|_| ValidationError::NotANumber)?;

    // "inf"/"NaN" 能通过 parse,但不是有效的测量值
    if !weight.is_finite() || !height.is_finite() {
        return Err(ValidationError::NotANumber);
    }

    if weight <= 0.0 || height <= 0.0 {
        return Err(ValidationError::NonPositive);
    }

    if !(HEIGHT_RANGE_CM.0..=HEIGHT_RANGE_CM.1).contains(&height) {
        return Err(ValidationError::HeightOutOfRange);
    }

    if !(WEIGHT_RANGE_KG.0..=WEIGHT_RANGE_KG.1).contains(&weight) {
        return Err(ValidationError::WeightOutOfRange);
    }

    Ok(ValidatedInput {
        weight_kg: weight,
        height_cm: height,
        weight_raw: weight_raw.to_string(),
        height_raw: height_raw.to_string(),
    })
}

/// 根据已验证的输入计算测量记录
///
/// BMI = 体重(kg) / 身高(m)²,四舍五入保留两位小数后再分类
/// (先舍入再分类,保证边界值行为一致)
pub fn compute(input: &ValidatedInput) -> MeasurementRecord {
    let meters = input.height_cm / 100.0;
    let bmi = round_two(input.weight_kg / (meters * meters));

    MeasurementRecord {
        bmi,
        category: classify(bmi),
        weight_kg: input.weight_raw.clone(),
        height_cm: input.height_raw.clone(),
        timestamp: Utc::now(),
    }
}

/// 按舍入后的 BMI 值分类
///
/// 检查顺序固定:偏瘦、正常、超重,否则肥胖
pub fn classify(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi <= 24.9 {
        BmiCategory::Normal
    } else if bmi <= 29.9 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// 四舍五入保留两位小数（远离零方向）
fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compute_for(weight: &str, height: &str) -> MeasurementRecord {
        let input = validate(weight, height).expect("输入应通过验证");
        compute(&input)
    }

    #[test]
    fn test_bmi_boundary_table() {
        // 边界场景: (体重, 身高) -> (BMI, 分类)
        let cases = [
            ("60", "180", 18.52, BmiCategory::Normal),
            ("50", "180", 15.43, BmiCategory::Underweight),
            ("81", "180", 25.0, BmiCategory::Overweight),
            ("97", "180", 29.94, BmiCategory::Overweight),
            ("100", "180", 30.86, BmiCategory::Obese),
        ];

        for (weight, height, bmi, category) in cases {
            let record = compute_for(weight, height);
            assert_eq!(record.bmi, bmi, "体重 {} 身高 {} 的 BMI 不符", weight, height);
            assert_eq!(record.category, category);
            assert_eq!(record.weight_kg, weight);
            assert_eq!(record.height_cm, height);
        }
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(18.49), BmiCategory::Underweight);
        assert_eq!(classify(18.5), BmiCategory::Normal);
        assert_eq!(classify(24.9), BmiCategory::Normal);
        // 24.9 与 25 之间的舍入值按检查顺序落入超重
        assert_eq!(classify(24.95), BmiCategory::Overweight);
        assert_eq!(classify(25.0), BmiCategory::Overweight);
        assert_eq!(classify(29.9), BmiCategory::Overweight);
        assert_eq!(classify(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_validation_errors() {
        let cases = [
            ("", "170", ValidationError::MissingInput),
            ("abc", "170", ValidationError::NotANumber),
            ("-5", "170", ValidationError::NonPositive),
            ("70", "10", ValidationError::HeightOutOfRange),
            ("1000", "170", ValidationError::WeightOutOfRange),
        ];

        for (weight, height, expected) in cases {
            assert_eq!(validate(weight, height), Err(expected));
        }
    }

    #[test]
    fn test_validation_rule_order() {
        // 第一条不通过的规则即为结果
        assert_eq!(validate("abc", "   "), Err(ValidationError::MissingInput));
        assert_eq!(validate("-5", "abc"), Err(ValidationError::NotANumber));
        // 身高范围先于体重范围检查
        assert_eq!(validate("1000", "10"), Err(ValidationError::HeightOutOfRange));
    }

    #[test]
    fn test_non_finite_input_rejected() {
        assert_eq!(validate("inf", "170"), Err(ValidationError::NotANumber));
        assert_eq!(validate("70", "NaN"), Err(ValidationError::NotANumber));
    }

    #[test]
    fn test_whitespace_trimmed() {
        let record = compute_for("  70 ", " 175  ");
        assert_eq!(record.weight_kg, "70");
        assert_eq!(record.height_cm, "175");
        assert_eq!(record.bmi, 22.86);
        assert_eq!(record.category, BmiCategory::Normal);
    }

    #[test]
    fn test_range_endpoints_accepted() {
        assert!(validate("20", "50").is_ok());
        assert!(validate("500", "300").is_ok());
    }
}
