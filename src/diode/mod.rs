//! # 二极管仿真模块
//!
//! 提供 Shockley 方程 I-V 特性与功耗计算。
//!
//! ## 子模块
//! - `calculator`: 电流/功耗计算与阈值判定
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/simulate.rs` 使用
//! - 使用 `models/`

pub mod calculator;
pub mod export;
pub mod plot;

pub use calculator::{CurveResult, DiodeModel};
