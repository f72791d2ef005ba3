//! # 交互式输入工具
//!
//! 从终端读取温度与电压范围，解析失败时回退到默认值。
//!
//! ## 回退策略
//! - 温度: 非数字、非有限值或 <= 0 时使用 300 K
//! - 电压范围: 任一值无效或 min >= max 时整体使用 [-1, 1] V，不接受部分输入
//!
//! ## 依赖关系
//! - 被 `commands/simulate.rs` 使用
//! - 使用 `models/simulation.rs` 的默认值常量

use crate::error::{DiodeLabError, Result};
use crate::models::simulation::{DEFAULT_TEMPERATURE, DEFAULT_V_MAX, DEFAULT_V_MIN};

use colored::Colorize;
use std::io::{BufRead, Write};

/// 输入解析结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputValue<T> {
    /// 用户提供的有效值
    Provided(T),
    /// 输入无效，使用默认值
    Defaulted(T),
}

impl<T: Copy> InputValue<T> {
    pub fn value(&self) -> T {
        match self {
            InputValue::Provided(v) | InputValue::Defaulted(v) => *v,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, InputValue::Defaulted(_))
    }
}

/// 解析单个电压值
pub fn parse_voltage(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 解析温度（必须为正的有限值）
pub fn parse_temperature(input: &str) -> Option<f64> {
    parse_voltage(input).filter(|t| *t > 0.0)
}

/// 温度回退策略
pub fn resolve_temperature(input: Option<&str>) -> InputValue<f64> {
    match input.and_then(parse_temperature) {
        Some(t) => InputValue::Provided(t),
        None => InputValue::Defaulted(DEFAULT_TEMPERATURE),
    }
}

/// 电压范围回退策略
pub fn resolve_voltage_range(min: Option<&str>, max: Option<&str>) -> InputValue<(f64, f64)> {
    let parsed = min
        .and_then(parse_voltage)
        .zip(max.and_then(parse_voltage))
        .filter(|(lo, hi)| lo < hi);

    match parsed {
        Some(range) => InputValue::Provided(range),
        None => InputValue::Defaulted((DEFAULT_V_MIN, DEFAULT_V_MAX)),
    }
}

/// 打印提示并读取一行，EOF 返回 None
pub fn prompt_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(writer, "{} {}", "[?]".cyan().bold(), prompt).map_err(DiodeLabError::InputError)?;
    writer.flush().map_err(DiodeLabError::InputError)?;

    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(DiodeLabError::InputError)?;

    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

/// 交互读取温度
pub fn prompt_temperature<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<InputValue<f64>> {
    let line = prompt_line(reader, writer, "Enter temperature in Kelvin (e.g., 300): ")?;
    Ok(resolve_temperature(line.as_deref()))
}

/// 交互读取电压范围
///
/// 最小值无效时不再询问最大值。
pub fn prompt_voltage_range<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<InputValue<(f64, f64)>> {
    let min = prompt_line(reader, writer, "Enter minimum voltage (e.g., -1): ")?;
    if min.as_deref().and_then(parse_voltage).is_none() {
        return Ok(resolve_voltage_range(None, None));
    }

    let max = prompt_line(reader, writer, "Enter maximum voltage (e.g., 1): ")?;
    Ok(resolve_voltage_range(min.as_deref(), max.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_resolve_temperature() {
        assert_eq!(resolve_temperature(Some(" 350 \n")), InputValue::Provided(350.0));
        assert_eq!(resolve_temperature(Some("77.5")), InputValue::Provided(77.5));
        assert_eq!(resolve_temperature(Some("abc")), InputValue::Defaulted(300.0));
        assert_eq!(resolve_temperature(Some("")), InputValue::Defaulted(300.0));
        assert_eq!(resolve_temperature(Some("0")), InputValue::Defaulted(300.0));
        assert_eq!(resolve_temperature(Some("-20")), InputValue::Defaulted(300.0));
        assert_eq!(resolve_temperature(Some("inf")), InputValue::Defaulted(300.0));
        assert_eq!(resolve_temperature(None), InputValue::Defaulted(300.0));
    }

    #[test]
    fn test_resolve_voltage_range_no_partial_input() {
        assert_eq!(
            resolve_voltage_range(Some("-0.5"), Some("0.8")),
            InputValue::Provided((-0.5, 0.8))
        );
        // 任一无效则两者都回退
        assert_eq!(
            resolve_voltage_range(Some("-0.5"), Some("x")),
            InputValue::Defaulted((-1.0, 1.0))
        );
        assert_eq!(
            resolve_voltage_range(Some("x"), Some("0.8")),
            InputValue::Defaulted((-1.0, 1.0))
        );
        assert_eq!(
            resolve_voltage_range(Some("1"), Some("-1")),
            InputValue::Defaulted((-1.0, 1.0))
        );
        assert_eq!(
            resolve_voltage_range(Some("NaN"), Some("1")),
            InputValue::Defaulted((-1.0, 1.0))
        );
    }

    #[test]
    fn test_prompt_temperature_reads_line() {
        let mut input = Cursor::new("425\n");
        let mut out = Vec::new();
        let value = prompt_temperature(&mut input, &mut out).unwrap();

        assert_eq!(value, InputValue::Provided(425.0));
        assert!(String::from_utf8(out).unwrap().contains("Enter temperature in Kelvin"));
    }

    #[test]
    fn test_prompt_temperature_eof_defaults() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        let value = prompt_temperature(&mut input, &mut out).unwrap();
        assert!(value.is_defaulted());
        assert_eq!(value.value(), 300.0);
    }

    #[test]
    fn test_prompt_voltage_range() {
        let mut input = Cursor::new("-2\n2\n");
        let mut out = Vec::new();
        let value = prompt_voltage_range(&mut input, &mut out).unwrap();
        assert_eq!(value, InputValue::Provided((-2.0, 2.0)));

        let prompts = String::from_utf8(out).unwrap();
        assert!(prompts.contains("Enter minimum voltage"));
        assert!(prompts.contains("Enter maximum voltage"));
    }

    #[test]
    fn test_prompt_voltage_range_invalid_min_skips_max() {
        let mut input = Cursor::new("low\n0.5\n");
        let mut out = Vec::new();
        let value = prompt_voltage_range(&mut input, &mut out).unwrap();
        assert_eq!(value, InputValue::Defaulted((-1.0, 1.0)));

        let prompts = String::from_utf8(out).unwrap();
        assert!(!prompts.contains("Enter maximum voltage"));
    }
}
