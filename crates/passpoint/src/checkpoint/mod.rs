//! 检查点
//!
//! 记录哪些线程经过了某个具名的位置
//!
//! # 功能
//! - 开关标志（由调用方决定是否据此记录）
//! - 按首次到达顺序记录线程标识，重复到达只记一次
//! - 不可变的线程快照
//! - 清空记录（不影响开关）

mod point;
mod types;


pub use point::*;
pub use types::*;
