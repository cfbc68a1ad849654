// aquaguard/src/commands/ranges.rs
//
// USE CASE: print the measurement column contract. Needs no model.

use comfy_table::{Table, presets::UTF8_FULL};

use aquaguard_core::domain::INPUT_BOUNDS;
use aquaguard_core::domain::potability::IDEAL_RANGES;

pub fn execute() -> anyhow::Result<()> {
    println!("💧 AquaGuard measurement columns (CSV header is case-sensitive)\n");

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Column", "Unit", "Input bound", "Ideal safe range"]);

    for (range, (lo, hi)) in IDEAL_RANGES.iter().zip(INPUT_BOUNDS) {
        table.add_row(vec![
            range.column.to_string(),
            if range.unit.is_empty() { "—".to_string() } else { range.unit.to_string() },
            format!("[{lo}, {hi}]"),
            format!("[{}, {}]", range.min, range.max),
        ]);
    }

    println!("{table}");
    println!("\nA record is rule-safe only when all nine readings sit inside their ideal ranges.");
    Ok(())
}
