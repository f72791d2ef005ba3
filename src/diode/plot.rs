//! # I-V / 功耗图表生成
//!
//! 使用 `plotters` 库生成上下两幅共享电压轴的图表。
//!
//! ## 功能
//! - 上图: 电流 vs 电压 (I-V 特性)
//! - 下图: 功耗 vs 电压 (P = V × I)
//! - 硅为蓝色实线，锗为绿色虚线
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/simulate.rs` 调用
//! - 使用 `diode/calculator.rs` 的 CurveResult 结构
//! - 使用 `plotters` 渲染图表

use crate::diode::CurveResult;
use crate::error::{DiodeLabError, Result};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

/// 绘图配置
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    pub use_svg: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            width: 1000,
            height: 800,
            use_svg: false,
        }
    }
}

/// 单条曲线的绘制样式
struct SeriesStyle {
    color: RGBColor,
    dashed: bool,
}

/// 按顺序分配样式：第一条蓝色实线，其余绿色虚线
fn series_style(index: usize) -> SeriesStyle {
    if index == 0 {
        SeriesStyle {
            color: BLUE,
            dashed: false,
        }
    } else {
        SeriesStyle {
            color: RGBColor(0, 128, 0),
            dashed: true,
        }
    }
}

/// 生成 I-V 与功耗图
pub fn generate_curve_plot(
    results: &[CurveResult],
    temperature: f64,
    output_path: &Path,
    config: &PlotConfig,
) -> Result<()> {
    if results.is_empty() {
        return Err(DiodeLabError::EmptySeries("curve results".to_string()));
    }

    if config.width == 0 || config.height == 0 {
        return Err(DiodeLabError::PlotError(format!(
            "Zero width or height not allowed ({}x{})",
            config.width, config.height
        )));
    }

    let size = (config.width, config.height);
    if config.use_svg {
        let root = SVGBackend::new(output_path, size).into_drawing_area();
        draw_curve_charts(&root, results, temperature)?;
        root.present()
            .map_err(|e| DiodeLabError::PlotError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, size).into_drawing_area();
        draw_curve_charts(&root, results, temperature)?;
        root.present()
            .map_err(|e| DiodeLabError::PlotError(e.to_string()))?;
    }

    Ok(())
}

/// 绘制上下两幅图的核心逻辑
fn draw_curve_charts<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    results: &[CurveResult],
    temperature: f64,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| DiodeLabError::PlotError(format!("{:?}", e)))?;

    let areas = root.split_evenly((2, 1));

    let (x_min, x_max) = padded_range(results.iter().flat_map(|r| r.voltages()));

    draw_panel(
        &areas[0],
        results,
        &format!("I-V Characteristics at T = {} K", temperature),
        None,
        "Current (A)",
        (x_min, x_max),
        |r| r.currents().collect(),
        "Diode",
    )?;

    draw_panel(
        &areas[1],
        results,
        "Power Loss (P = V × I)",
        Some("Voltage (V)"),
        "Power (W)",
        (x_min, x_max),
        |r| r.powers().collect(),
        "Power Loss",
    )?;

    Ok(())
}

/// 绘制单幅图
#[allow(clippy::too_many_arguments)]
fn draw_panel<DB, F>(
    area: &DrawingArea<DB, Shift>,
    results: &[CurveResult],
    title: &str,
    x_desc: Option<&str>,
    y_desc: &str,
    x_range: (f64, f64),
    values: F,
    label_suffix: &str,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
    F: Fn(&CurveResult) -> Vec<f64>,
{
    let series: Vec<Vec<(f64, f64)>> = results
        .iter()
        .map(|r| r.voltages().zip(values(r)).collect())
        .collect();

    let (y_min, y_max) = padded_range(series.iter().flatten().map(|(_, y)| *y));

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 22).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range.0..x_range.1, y_min..y_max)
        .map_err(|e| DiodeLabError::PlotError(format!("{:?}", e)))?;

    let mut mesh = chart.configure_mesh();
    mesh.y_desc(y_desc)
        .x_label_style(("sans-serif", 14))
        .y_label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16));
    if let Some(desc) = x_desc {
        mesh.x_desc(desc);
    }
    mesh.draw()
        .map_err(|e| DiodeLabError::PlotError(format!("{:?}", e)))?;

    for (index, (result, data)) in results.iter().zip(&series).enumerate() {
        let style = series_style(index);
        let color = style.color;
        let label = format!("{} {}", result.diode.name, label_suffix);

        let anno = if style.dashed {
            chart
                .draw_series(DashedLineSeries::new(
                    data.iter().copied(),
                    10,
                    6,
                    color.stroke_width(2),
                ))
                .map_err(|e| DiodeLabError::PlotError(format!("{:?}", e)))?
        } else {
            chart
                .draw_series(LineSeries::new(data.iter().copied(), color.stroke_width(2)))
                .map_err(|e| DiodeLabError::PlotError(format!("{:?}", e)))?
        };

        anno.label(label).legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
        });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| DiodeLabError::PlotError(format!("{:?}", e)))?;

    Ok(())
}

/// 计算带 5% 边距的坐标范围
///
/// 非有限值被忽略；数据为常数时向两侧扩展，保证范围非空。
pub fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        return (-1.0, 1.0);
    }

    let span = max - min;
    if span == 0.0 {
        let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.05 };
        return (min - pad, max + pad);
    }

    let margin = span * 0.05;
    (min - margin, max + margin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diode::DiodeModel;
    use crate::models::{SimulationParameters, GERMANIUM, SILICON};
    use approx::assert_relative_eq;

    #[test]
    fn test_padded_range_margin() {
        let (lo, hi) = padded_range([-1.0, 0.0, 1.0].into_iter());
        assert_relative_eq!(lo, -1.1);
        assert_relative_eq!(hi, 1.1);
    }

    #[test]
    fn test_padded_range_degenerate() {
        assert_eq!(padded_range(std::iter::empty()), (-1.0, 1.0));
        assert_eq!(padded_range([0.0, 0.0].into_iter()), (-1.0, 1.0));

        let (lo, hi) = padded_range([2.0, f64::NAN, f64::INFINITY].into_iter());
        assert!(lo < 2.0 && hi > 2.0);
    }

    #[test]
    fn test_series_styles() {
        let silicon = series_style(0);
        assert_eq!(silicon.color, BLUE);
        assert!(!silicon.dashed);

        let germanium = series_style(1);
        assert_eq!(germanium.color, RGBColor(0, 128, 0));
        assert!(germanium.dashed);
    }

    fn two_diode_curves() -> Vec<CurveResult> {
        let params = SimulationParameters::new(300.0, -1.0, 1.0, 400).unwrap();
        let v = params.voltage_samples();
        let model = DiodeModel::default();
        vec![
            model.simulate(&SILICON, &params, &v).unwrap(),
            model.simulate(&GERMANIUM, &params, &v).unwrap(),
        ]
    }

    #[test]
    fn test_generate_png_and_svg() {
        let dir = tempfile::tempdir().unwrap();
        let curves = two_diode_curves();

        let png = dir.path().join("diode.png");
        generate_curve_plot(&curves, 300.0, &png, &PlotConfig::default()).unwrap();
        assert!(std::fs::metadata(&png).unwrap().len() > 0);

        let svg = dir.path().join("diode.svg");
        let config = PlotConfig {
            use_svg: true,
            ..PlotConfig::default()
        };
        generate_curve_plot(&curves, 300.0, &svg, &config).unwrap();
        let content = std::fs::read_to_string(&svg).unwrap();
        assert!(content.contains("<svg"));
    }

    #[test]
    fn test_generate_plot_rejects_zero_size() {
        let dir = tempfile::tempdir().unwrap();
        let config = PlotConfig {
            width: 0,
            ..PlotConfig::default()
        };
        let result = generate_curve_plot(
            &two_diode_curves(),
            300.0,
            &dir.path().join("empty.png"),
            &config,
        );
        assert!(matches!(result, Err(DiodeLabError::PlotError(_))));
    }

    #[test]
    fn test_generate_plot_rejects_empty_results() {
        let result = generate_curve_plot(
            &[],
            300.0,
            Path::new("unused.png"),
            &PlotConfig::default(),
        );
        assert!(matches!(result, Err(DiodeLabError::EmptySeries(_))));
    }
}
