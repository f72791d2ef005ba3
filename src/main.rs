//! # diodelab - 二极管 I-V 与功耗分析工具
//!
//! 基于 Shockley 二极管方程，计算硅/锗二极管在给定温度与电压范围内的
//! 电流与功耗，输出终端报告并生成图表。
//!
//! ## 子命令
//! - `simulate`  - I-V 特性与功耗分析（交互式或命令行参数）
//! - `materials` - 列出内置二极管材料参数
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── diode/     (计算、绘图、导出)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (输出与交互输入)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod diode;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
