//! # materials 命令实现
//!
//! 以表格形式列出内置二极管材料参数。

use crate::error::Result;
use crate::models::{DiodeSpec, BUILTIN_DIODES};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 材料表格行
#[derive(Debug, Tabled)]
struct MaterialRow {
    #[tabled(rename = "Diode")]
    name: String,
    #[tabled(rename = "Is (A)")]
    saturation_current: String,
    #[tabled(rename = "Max Power (W)")]
    threshold: String,
}

impl From<&DiodeSpec> for MaterialRow {
    fn from(spec: &DiodeSpec) -> Self {
        MaterialRow {
            name: spec.name.to_string(),
            saturation_current: format!("{:e}", spec.saturation_current),
            threshold: format!("{:.2}", spec.power_threshold),
        }
    }
}

/// 执行 materials 命令
pub fn execute() -> Result<()> {
    output::print_header("Built-in Diode Materials");

    let rows: Vec<MaterialRow> = BUILTIN_DIODES.iter().map(MaterialRow::from).collect();
    println!("{}", Table::new(&rows));

    Ok(())
}
