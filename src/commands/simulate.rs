//! # simulate 命令实现
//!
//! 计算硅/锗二极管的 I-V 特性与功耗，并输出报告与图表。
//!
//! ## 功能
//! - 交互式输入温度与电压范围（无效时回退默认值）
//! - 终端报告与阈值告警
//! - 输出上下两幅图 (PNG/SVG)
//! - 可选导出 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/simulate.rs` 定义的参数
//! - 使用 `diode/` 模块进行计算、绘图与导出
//! - 使用 `utils/output.rs`, `utils/prompt.rs`

use crate::cli::simulate::{PlotFormat, SimulateArgs};
use crate::diode::plot::{self, PlotConfig};
use crate::diode::{export, CurveResult, DiodeModel};
use crate::error::{DiodeLabError, Result};
use crate::models::{
    ClipRange, PhysicalConstants, PowerStatus, SimulationParameters, GERMANIUM, SILICON,
};
use crate::utils::{output, prompt};

use std::io;
use std::path::Path;
use tabled::{Table, Tabled};

/// 两种二极管的仿真结果
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub temperature: f64,
    pub silicon: CurveResult,
    pub germanium: CurveResult,
}

impl SimulationReport {
    /// 按报告顺序返回结果
    pub fn curves(&self) -> [&CurveResult; 2] {
        [&self.silicon, &self.germanium]
    }
}

/// 执行 simulate 命令
pub fn execute(args: SimulateArgs) -> Result<()> {
    output::print_header("Diode I-V Characteristics and Power Loss");

    let params = collect_parameters(&args)?;

    output::print_value("Temperature", &format!("{} K", params.temperature()));
    output::print_value(
        "Voltage range",
        &format!("{} V to {} V", params.v_min(), params.v_max()),
    );
    output::print_value("Samples", &params.sample_count().to_string());

    let constants = PhysicalConstants::default();
    output::print_value(
        "Thermal voltage kT/q",
        &format!("{:.4} mV", constants.thermal_voltage(params.temperature()) * 1e3),
    );

    let model = DiodeModel::new(constants, ClipRange::default());
    let report = run_simulation(&params, &model)?;

    print_report(&report);

    if let Some(ref path) = args.export {
        export::to_csv(&report.silicon, &report.germanium, path)?;
        output::print_success(&format!("Curve data saved to '{}'", path.display()));
    }

    if !args.no_plot {
        let format = args
            .format
            .unwrap_or_else(|| guess_format_from_extension(&args.output));
        output::print_info(&format!("Output format: {}", format));

        let config = PlotConfig {
            width: args.width,
            height: args.height,
            use_svg: format == PlotFormat::Svg,
        };

        let curves = [report.silicon.clone(), report.germanium.clone()];
        plot::generate_curve_plot(&curves, report.temperature, &args.output, &config)?;
        output::print_success(&format!("Plot saved to '{}'", args.output.display()));
    }

    Ok(())
}

/// 从文件扩展名推断图像格式，默认 PNG
fn guess_format_from_extension(path: &Path) -> PlotFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => PlotFormat::Svg,
        _ => PlotFormat::Png,
    }
}

/// 从命令行参数或交互式输入获取仿真参数
///
/// 命令行给出的值直接校验，无效即报错；交互输入无效时回退默认值。
fn collect_parameters(args: &SimulateArgs) -> Result<SimulationParameters> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout();

    let temperature = match args.temperature {
        Some(t) => t,
        None => {
            let value = prompt::prompt_temperature(&mut reader, &mut writer)?;
            if value.is_defaulted() {
                output::print_warning("Invalid input. Using default T = 300K");
            }
            value.value()
        }
    };

    let (v_min, v_max) = match (args.v_min, args.v_max) {
        (Some(lo), Some(hi)) => (lo, hi),
        (None, None) => {
            let value = prompt::prompt_voltage_range(&mut reader, &mut writer)?;
            if value.is_defaulted() {
                output::print_warning("Invalid input. Using default range -1V to +1V");
            }
            value.value()
        }
        _ => {
            return Err(DiodeLabError::InvalidArgument(
                "--v-min and --v-max must be given together".to_string(),
            ))
        }
    };

    SimulationParameters::new(temperature, v_min, v_max, args.samples)
}

/// 在同一组电压采样点上计算硅/锗两条曲线
pub fn run_simulation(
    params: &SimulationParameters,
    model: &DiodeModel,
) -> Result<SimulationReport> {
    let voltages = params.voltage_samples();

    Ok(SimulationReport {
        temperature: params.temperature(),
        silicon: model.simulate(&SILICON, params, &voltages)?,
        germanium: model.simulate(&GERMANIUM, params, &voltages)?,
    })
}

/// 单个二极管的结论文本
pub fn status_message(result: &CurveResult) -> (PowerStatus, String) {
    let status = result.status();
    let diode = &result.diode;
    let msg = match status {
        PowerStatus::ExceedsThreshold => format!(
            "WARNING: {} diode power loss is too high! {}",
            diode.name, diode.advice
        ),
        PowerStatus::WithinRange => format!(
            "{} power loss is within ideal range (<= {:.2} W)",
            diode.name, diode.power_threshold
        ),
    };
    (status, msg)
}

/// 报告表格行
#[derive(Debug, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Diode")]
    name: String,
    #[tabled(rename = "Is (A)")]
    saturation_current: String,
    #[tabled(rename = "Max |P| (W)")]
    max_power: String,
    #[tabled(rename = "Threshold (W)")]
    threshold: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// 打印功耗分析报告
fn print_report(report: &SimulationReport) {
    output::print_header(&format!(
        "Power Loss Analysis at T = {} K",
        report.temperature
    ));

    for curve in report.curves() {
        output::print_info(&format!(
            "{} max power loss: {:.4} W",
            curve.diode.name, curve.max_abs_power
        ));
    }

    output::print_separator();

    for curve in report.curves() {
        match status_message(curve) {
            (PowerStatus::ExceedsThreshold, msg) => output::print_warning(&msg),
            (PowerStatus::WithinRange, msg) => output::print_success(&msg),
        }
    }

    let rows: Vec<SummaryRow> = report
        .curves()
        .iter()
        .map(|c| SummaryRow {
            name: c.diode.name.to_string(),
            saturation_current: format!("{:e}", c.diode.saturation_current),
            max_power: format!("{:.4}", c.max_abs_power),
            threshold: format!("{:.2}", c.diode.power_threshold),
            status: c.status().to_string(),
        })
        .collect();

    println!("\n{}", Table::new(&rows));
}
