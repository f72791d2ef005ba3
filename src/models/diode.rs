//! # 二极管材料数据模型
//!
//! 定义内置的硅/锗二极管参数（饱和电流与功耗阈值）以及功耗判定结果。
//!
//! ## 依赖关系
//! - 被 `diode/` 和 `commands/` 使用
//! - 无外部模块依赖

/// 二极管材料规格
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiodeSpec {
    /// 显示名称
    pub name: &'static str,
    /// 饱和电流 Is (A)
    pub saturation_current: f64,
    /// 推荐最大功耗 (W)
    pub power_threshold: f64,
    /// 超出阈值时的建议
    pub advice: &'static str,
}

/// 硅二极管
pub const SILICON: DiodeSpec = DiodeSpec {
    name: "Silicon",
    saturation_current: 1e-12,
    power_threshold: 0.05,
    advice: "Consider cooling or changing design.",
};

/// 锗二极管
pub const GERMANIUM: DiodeSpec = DiodeSpec {
    name: "Germanium",
    saturation_current: 1e-6,
    power_threshold: 0.02,
    advice: "Consider replacing or reducing load.",
};

/// 所有内置材料（报告与绘图顺序）
pub const BUILTIN_DIODES: [DiodeSpec; 2] = [SILICON, GERMANIUM];

/// 功耗判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerStatus {
    WithinRange,
    ExceedsThreshold,
}

impl std::fmt::Display for PowerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PowerStatus::WithinRange => write!(f, "OK"),
            PowerStatus::ExceedsThreshold => write!(f, "TOO HIGH"),
        }
    }
}
