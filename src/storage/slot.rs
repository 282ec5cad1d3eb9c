// 单槽存储 - 以单个命名位置保存最近一次测量记录
//
// 槽位语义:最多保存一条记录,每次成功保存即整体覆盖;
// 写失败只记录日志不上抛(尽力而为的持久化),这是调用方的既定策略

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::MeasurementRecord;

/// 存储错误 - 基础设施错误,仅记录日志,不面向用户
#[derive(Debug, Error)]
pub enum StoreError {
    /// 槽位读取失败
    #[error("读取存储槽失败: {0}")]
    Read(#[source] std::io::Error),

    /// 槽位写入失败
    #[error("写入存储槽失败: {0}")]
    Write(#[source] std::io::Error),

    /// 记录序列化失败
    #[error("记录序列化失败: {0}")]
    Serialize(#[source] serde_json::Error),

    /// 槽内容无法解析为记录
    #[error("记录解析失败: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// 单槽键值存储能力
///
/// save/load 返回显式错误类型;"忽略写失败"是调用方的文档化约定,
/// 而非存储层的隐含行为
#[async_trait]
pub trait SlotStore: Send + Sync {
    /// 覆盖写入槽内记录
    async fn save(&self, record: &MeasurementRecord) -> Result<(), StoreError>;

    /// 读取槽内记录;槽不存在或为空时返回 None
    async fn load(&self) -> Result<Option<MeasurementRecord>, StoreError>;
}

/// JSON 文件实现 - 应用数据目录下的单个 JSON 文件即是槽位
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// 创建存储,确保父目录存在
    pub async fn new(path: PathBuf) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(Self { path })
    }
}

#[async_trait]
impl SlotStore for JsonFileStore {
    async fn save(&self, record: &MeasurementRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(record).map_err(StoreError::Serialize)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(StoreError::Write)
    }

    async fn load(&self) -> Result<Option<MeasurementRecord>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Read(e)),
        };

        if bytes.is_empty() {
            return Ok(None);
        }

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(StoreError::Deserialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement;
    use tempfile::tempdir;

    fn sample_record() -> MeasurementRecord {
        let input = measurement::validate("70", "175").unwrap();
        measurement::compute(&input)
    }

    #[tokio::test]
    async fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("measurement.json"))
            .await
            .unwrap();

        let record = sample_record();
        store.save(&record).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, Some(record));
    }

    #[tokio::test]
    async fn test_load_missing_slot_is_none() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("measurement.json"))
            .await
            .unwrap();

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_corrupt_slot_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("measurement.json");
        tokio::fs::write(&path, b"{ not json").await.unwrap();

        let store = JsonFileStore::new(path).await.unwrap();
        assert!(matches!(
            store.load().await,
            Err(StoreError::Deserialize(_))
        ));
    }

    #[tokio::test]
    async fn test_load_empty_slot_is_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("measurement.json");
        tokio::fs::write(&path, b"").await.unwrap();

        let store = JsonFileStore::new(path).await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_record() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("measurement.json"))
            .await
            .unwrap();

        store.save(&sample_record()).await.unwrap();

        let second = {
            let input = measurement::validate("81", "180").unwrap();
            measurement::compute(&input)
        };
        store.save(&second).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.bmi, 25.0);
        assert_eq!(loaded.weight_kg, "81");
    }
}
