//! # simulate 子命令 CLI 定义
//!
//! 硅/锗二极管 I-V 特性与功耗分析。
//! 未给出温度或电压范围时进入交互式输入。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/simulate.rs`

use crate::models::simulation::DEFAULT_SAMPLE_COUNT;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 图像输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PlotFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
}

impl std::fmt::Display for PlotFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlotFormat::Png => write!(f, "png"),
            PlotFormat::Svg => write!(f, "svg"),
        }
    }
}

/// simulate 子命令参数
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Temperature in Kelvin (prompted interactively if omitted)
    #[arg(short, long, allow_negative_numbers = true)]
    pub temperature: Option<f64>,

    /// Minimum sweep voltage in V (prompted with --v-max if omitted)
    #[arg(long, allow_negative_numbers = true, requires = "v_max")]
    pub v_min: Option<f64>,

    /// Maximum sweep voltage in V (prompted with --v-min if omitted)
    #[arg(long, allow_negative_numbers = true, requires = "v_min")]
    pub v_max: Option<f64>,

    /// Number of evenly spaced voltage samples
    #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    pub samples: usize,

    /// Output image path
    #[arg(
        short,
        long,
        env = "DIODELAB_OUTPUT",
        default_value = "diode_iv_temp_power.png"
    )]
    pub output: PathBuf,

    /// Image format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<PlotFormat>,

    /// Figure width in pixels
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Also export the I-V and power curves to this CSV file
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Skip plot generation
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,
}
