//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `simulate`: 二极管 I-V 与功耗分析
//! - `materials`: 列出内置二极管材料参数
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: simulate

pub mod simulate;

use clap::{Parser, Subcommand};

/// diodelab - 二极管 I-V 与功耗分析工具
#[derive(Parser)]
#[command(name = "diodelab")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Shockley-equation I-V and power-loss analysis for silicon and germanium diodes", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Simulate I-V characteristics and power loss, then plot them
    Simulate(simulate::SimulateArgs),

    /// List the built-in diode materials
    Materials,
}
