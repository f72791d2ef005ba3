//! # 数据模型模块
//!
//! 定义二极管材料规格与仿真参数。
//!
//! ## 依赖关系
//! - 被 `diode/` 和 `commands/` 使用
//! - 子模块: diode, simulation

pub mod diode;
pub mod simulation;

pub use diode::{DiodeSpec, PowerStatus, BUILTIN_DIODES, GERMANIUM, SILICON};
pub use simulation::{ClipRange, PhysicalConstants, SimulationParameters};
