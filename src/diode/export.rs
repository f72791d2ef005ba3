//! # 曲线数据导出
//!
//! 将硅/锗两条曲线按电压对齐导出为 CSV。
//!
//! ## 依赖关系
//! - 被 `commands/simulate.rs` 调用
//! - 使用 `diode/calculator.rs` 的 CurveResult 结构
//! - 使用 `csv` + `serde` 写入 CSV 文件

use crate::diode::CurveResult;
use crate::error::{DiodeLabError, Result};

use serde::Serialize;
use std::path::Path;

/// CSV 数据行
#[derive(Debug, Serialize)]
struct CurveRow {
    #[serde(rename = "voltage_V")]
    voltage: f64,
    #[serde(rename = "silicon_current_A")]
    silicon_current: f64,
    #[serde(rename = "silicon_power_W")]
    silicon_power: f64,
    #[serde(rename = "germanium_current_A")]
    germanium_current: f64,
    #[serde(rename = "germanium_power_W")]
    germanium_power: f64,
}

/// 导出硅/锗曲线为 CSV
///
/// 两条曲线必须基于同一组电压采样点。
pub fn to_csv(silicon: &CurveResult, germanium: &CurveResult, output_path: &Path) -> Result<()> {
    if silicon.points.len() != germanium.points.len() {
        return Err(DiodeLabError::InvalidArgument(format!(
            "curves differ in length ({} vs {})",
            silicon.points.len(),
            germanium.points.len()
        )));
    }

    let mut wtr = csv::Writer::from_path(output_path)?;

    for (si, ge) in silicon.points.iter().zip(&germanium.points) {
        if si.voltage != ge.voltage {
            return Err(DiodeLabError::InvalidArgument(format!(
                "curves sampled at different voltages ({} vs {})",
                si.voltage, ge.voltage
            )));
        }

        wtr.serialize(CurveRow {
            voltage: si.voltage,
            silicon_current: si.current,
            silicon_power: si.power,
            germanium_current: ge.current,
            germanium_power: ge.power,
        })?;
    }

    wtr.flush().map_err(|e| DiodeLabError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diode::DiodeModel;
    use crate::models::{SimulationParameters, GERMANIUM, SILICON};

    #[test]
    fn test_csv_export_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curves.csv");

        let params = SimulationParameters::new(300.0, -1.0, 1.0, 11).unwrap();
        let model = DiodeModel::default();
        let v = params.voltage_samples();
        let si = model.simulate(&SILICON, &params, &v).unwrap();
        let ge = model.simulate(&GERMANIUM, &params, &v).unwrap();

        to_csv(&si, &ge, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines[0],
            "voltage_V,silicon_current_A,silicon_power_W,germanium_current_A,germanium_power_W"
        );
        assert_eq!(lines.len(), 12);

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let last = rdr.records().last().unwrap().unwrap();
        assert_eq!(last[0].parse::<f64>().unwrap(), 1.0);
        assert_eq!(last[1].parse::<f64>().unwrap(), 0.1);
        assert_eq!(last[3].parse::<f64>().unwrap(), 0.1);
    }

    #[test]
    fn test_csv_export_rejects_mismatched_curves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");

        let model = DiodeModel::default();
        let a = SimulationParameters::new(300.0, -1.0, 1.0, 11).unwrap();
        let b = SimulationParameters::new(300.0, -1.0, 1.0, 12).unwrap();
        let si = model.simulate(&SILICON, &a, &a.voltage_samples()).unwrap();
        let ge = model.simulate(&GERMANIUM, &b, &b.voltage_samples()).unwrap();

        assert!(matches!(
            to_csv(&si, &ge, &path),
            Err(DiodeLabError::InvalidArgument(_))
        ));
    }
}
