//! # 仿真参数数据模型
//!
//! 定义温度、电压扫描范围、采样点数以及物理常数。
//!
//! ## 依赖关系
//! - 被 `diode/calculator.rs` 和 `commands/simulate.rs` 使用
//! - 使用 `error.rs` 进行参数校验

use crate::error::{DiodeLabError, Result};

/// 默认温度 (K)
pub const DEFAULT_TEMPERATURE: f64 = 300.0;

/// 默认电压范围 (V)
pub const DEFAULT_V_MIN: f64 = -1.0;
pub const DEFAULT_V_MAX: f64 = 1.0;

/// 默认采样点数
pub const DEFAULT_SAMPLE_COUNT: usize = 400;

/// 理想因子（理想二极管）
pub const IDEALITY_FACTOR: f64 = 1.0;

/// 物理常数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// 元电荷 q (C)
    pub charge: f64,
    /// 玻尔兹曼常数 k (J/K)
    pub boltzmann: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        PhysicalConstants {
            charge: 1.6e-19,
            boltzmann: 1.38e-23,
        }
    }
}

impl PhysicalConstants {
    /// 热电压 kT/q (V)
    pub fn thermal_voltage(&self, temperature: f64) -> f64 {
        self.boltzmann * temperature / self.charge
    }
}

/// 电流截断范围 (A)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRange {
    pub lower: f64,
    pub upper: f64,
}

impl Default for ClipRange {
    fn default() -> Self {
        ClipRange {
            lower: -1e-3,
            upper: 1e-1,
        }
    }
}

/// 一次仿真的输入参数
///
/// 通过 [`SimulationParameters::new`] 构造时完成校验，之后不可变。
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    temperature: f64,
    v_min: f64,
    v_max: f64,
    sample_count: usize,
    ideality: f64,
}

impl SimulationParameters {
    /// 创建并校验参数
    pub fn new(temperature: f64, v_min: f64, v_max: f64, sample_count: usize) -> Result<Self> {
        if !temperature.is_finite() || temperature <= 0.0 {
            return Err(DiodeLabError::InvalidTemperature(temperature));
        }
        if !v_min.is_finite() || !v_max.is_finite() || v_min >= v_max {
            return Err(DiodeLabError::InvalidRange {
                min: v_min,
                max: v_max,
            });
        }
        if sample_count < 2 {
            return Err(DiodeLabError::InvalidArgument(format!(
                "sample count must be at least 2, got {}",
                sample_count
            )));
        }

        Ok(SimulationParameters {
            temperature,
            v_min,
            v_max,
            sample_count,
            ideality: IDEALITY_FACTOR,
        })
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn v_min(&self) -> f64 {
        self.v_min
    }

    pub fn v_max(&self) -> f64 {
        self.v_max
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn ideality(&self) -> f64 {
        self.ideality
    }

    /// 生成等间距电压采样点（包含两端点）
    pub fn voltage_samples(&self) -> Vec<f64> {
        let last = self.sample_count - 1;
        let step = (self.v_max - self.v_min) / last as f64;

        (0..self.sample_count)
            .map(|i| {
                // 末点直接取 v_max，避免累积误差
                if i == last {
                    self.v_max
                } else {
                    self.v_min + i as f64 * step
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_voltage_samples_linspace() {
        let params = SimulationParameters::new(300.0, -1.0, 1.0, 5).unwrap();
        let v = params.voltage_samples();
        assert_eq!(v, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_default_sample_grid() {
        let params = SimulationParameters::new(
            DEFAULT_TEMPERATURE,
            DEFAULT_V_MIN,
            DEFAULT_V_MAX,
            DEFAULT_SAMPLE_COUNT,
        )
        .unwrap();
        let v = params.voltage_samples();
        assert_eq!(v.len(), 400);
        assert_eq!(v[0], -1.0);
        assert_eq!(v[399], 1.0);
        assert!(v.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_rejects_non_positive_temperature() {
        assert!(matches!(
            SimulationParameters::new(0.0, -1.0, 1.0, 400),
            Err(DiodeLabError::InvalidTemperature(_))
        ));
        assert!(SimulationParameters::new(-10.0, -1.0, 1.0, 400).is_err());
        assert!(SimulationParameters::new(f64::NAN, -1.0, 1.0, 400).is_err());
        assert!(SimulationParameters::new(f64::INFINITY, -1.0, 1.0, 400).is_err());
    }

    #[test]
    fn test_rejects_bad_range_and_samples() {
        assert!(matches!(
            SimulationParameters::new(300.0, 1.0, 1.0, 400),
            Err(DiodeLabError::InvalidRange { .. })
        ));
        assert!(SimulationParameters::new(300.0, 2.0, -2.0, 400).is_err());
        assert!(matches!(
            SimulationParameters::new(300.0, -1.0, 1.0, 1),
            Err(DiodeLabError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_thermal_voltage_room_temperature() {
        let vt = PhysicalConstants::default().thermal_voltage(300.0);
        assert_relative_eq!(vt, 0.025875, epsilon = 1e-9);
    }
}
