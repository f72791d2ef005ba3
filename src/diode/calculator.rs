//! # 二极管 I-V 与功耗计算器
//!
//! 基于 Shockley 二极管方程计算电流与瞬时功耗。
//!
//! ## 算法概述
//! 1. 生成电压采样点
//! 2. I = Is * (exp(qV / nkT) - 1)
//! 3. 将电流截断到 [-1 mA, 100 mA]，防止指数溢出主导后续统计
//! 4. P = V * I
//! 5. 取 max |P| 并与材料阈值比较
//!
//! ## 依赖关系
//! - 被 `commands/simulate.rs` 调用
//! - 使用 `models/` 的 DiodeSpec, SimulationParameters 等结构

use crate::error::{DiodeLabError, Result};
use crate::models::{ClipRange, DiodeSpec, PhysicalConstants, PowerStatus, SimulationParameters};

/// Shockley 方程计算电流
///
/// 正向大电压下指数会溢出为 `+inf`，由 [`clip_current`] 处理。
pub fn evaluate_current(
    voltages: &[f64],
    saturation_current: f64,
    temperature: f64,
    ideality: f64,
    constants: &PhysicalConstants,
) -> Result<Vec<f64>> {
    if !temperature.is_finite() || temperature <= 0.0 {
        return Err(DiodeLabError::InvalidTemperature(temperature));
    }
    if saturation_current.is_nan() || saturation_current <= 0.0 {
        return Err(DiodeLabError::InvalidArgument(format!(
            "saturation current must be > 0, got {}",
            saturation_current
        )));
    }
    if ideality.is_nan() || ideality <= 0.0 {
        return Err(DiodeLabError::InvalidArgument(format!(
            "ideality factor must be > 0, got {}",
            ideality
        )));
    }

    // 极小温度下 nkT 下溢为 0，指数系数不再有限
    let scale = constants.charge / (ideality * constants.boltzmann * temperature);
    if !scale.is_finite() {
        return Err(DiodeLabError::InvalidTemperature(temperature));
    }

    Ok(voltages
        .iter()
        .map(|v| saturation_current * (scale * v).exp_m1())
        .collect())
}

/// 逐元素截断电流
///
/// NaN 映射为下界，保证输出总在区间内。
pub fn clip_current(currents: &[f64], range: &ClipRange) -> Vec<f64> {
    currents
        .iter()
        .map(|&i| {
            if i.is_nan() {
                range.lower
            } else {
                i.clamp(range.lower, range.upper)
            }
        })
        .collect()
}

/// 瞬时功耗 P = V * I
pub fn compute_power(voltages: &[f64], currents: &[f64]) -> Result<Vec<f64>> {
    if voltages.len() != currents.len() {
        return Err(DiodeLabError::InvalidArgument(format!(
            "voltage and current series differ in length ({} vs {})",
            voltages.len(),
            currents.len()
        )));
    }

    Ok(voltages
        .iter()
        .zip(currents)
        .map(|(v, i)| v * i)
        .collect())
}

/// 最大功耗绝对值
pub fn max_abs_power(power: &[f64]) -> Result<f64> {
    if power.is_empty() {
        return Err(DiodeLabError::EmptySeries("power".to_string()));
    }

    Ok(power.iter().map(|p| p.abs()).fold(f64::NEG_INFINITY, f64::max))
}

/// 功耗判定（严格大于才算超标）
pub fn classify(max_power: f64, threshold: f64) -> PowerStatus {
    if max_power > threshold {
        PowerStatus::ExceedsThreshold
    } else {
        PowerStatus::WithinRange
    }
}

/// 单个采样点
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// 电压 (V)
    pub voltage: f64,
    /// 截断后的电流 (A)
    pub current: f64,
    /// 功耗 (W)
    pub power: f64,
}

/// 单个二极管的仿真结果
#[derive(Debug, Clone)]
pub struct CurveResult {
    /// 材料规格
    pub diode: DiodeSpec,
    /// 按电压升序排列的采样点
    pub points: Vec<CurvePoint>,
    /// max |P| (W)
    pub max_abs_power: f64,
}

impl CurveResult {
    /// 与材料阈值比较
    pub fn status(&self) -> PowerStatus {
        classify(self.max_abs_power, self.diode.power_threshold)
    }

    pub fn voltages(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.voltage)
    }

    pub fn currents(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.current)
    }

    pub fn powers(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.power)
    }
}

/// 二极管模型
#[derive(Debug, Clone, Default)]
pub struct DiodeModel {
    constants: PhysicalConstants,
    clip: ClipRange,
}

impl DiodeModel {
    /// 使用自定义常数创建模型
    pub fn new(constants: PhysicalConstants, clip: ClipRange) -> Self {
        Self { constants, clip }
    }

    /// 在给定电压采样点上对单个二极管执行完整计算
    ///
    /// 多个二极管共享同一组采样点，见 [`SimulationParameters::voltage_samples`]。
    pub fn simulate(
        &self,
        diode: &DiodeSpec,
        params: &SimulationParameters,
        voltages: &[f64],
    ) -> Result<CurveResult> {
        let raw = evaluate_current(
            voltages,
            diode.saturation_current,
            params.temperature(),
            params.ideality(),
            &self.constants,
        )?;
        let currents = clip_current(&raw, &self.clip);
        let power = compute_power(voltages, &currents)?;
        let max_abs_power = max_abs_power(&power)?;

        let points = voltages
            .iter()
            .zip(&currents)
            .zip(&power)
            .map(|((&voltage, &current), &power)| CurvePoint {
                voltage,
                current,
                power,
            })
            .collect();

        Ok(CurveResult {
            diode: *diode,
            points,
            max_abs_power,
        })
    }
}
