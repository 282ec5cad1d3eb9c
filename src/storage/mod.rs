// 存储模块 - 测量记录的单槽持久化

// 子模块
pub mod slot;

// 重新导出主要类型
pub use slot::{JsonFileStore, SlotStore, StoreError};
