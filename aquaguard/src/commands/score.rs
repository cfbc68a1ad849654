// aquaguard/src/commands/score.rs
//
// USE CASE: score a CSV batch and write it back with a Prediction column.

use std::path::PathBuf;

use anyhow::Context;
use comfy_table::{Table, presets::UTF8_FULL};

use aquaguard_core::application::{BatchReport, score_batch};
use aquaguard_core::infrastructure::adapters::datafusion::CsvStore;
use aquaguard_core::infrastructure::adapters::onnx::OnnxClassifier;
use aquaguard_core::infrastructure::config::load_config;

pub async fn execute(
    input: PathBuf,
    output: Option<PathBuf>,
    model: Option<PathBuf>,
    limit: Option<usize>,
    report_path: Option<PathBuf>,
    config_dir: PathBuf,
) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    // A. Config + resolution: flags > env > file > defaults
    let config = load_config(&config_dir)
        .with_context(|| format!("Failed to load configuration from {:?}", config_dir))?;
    let model_path = model.unwrap_or(config.model_path);
    let output = output.unwrap_or_else(|| PathBuf::from(&config.output_path));
    let preview_rows = limit.unwrap_or(config.preview_rows);

    // B. Model first: without the artifact nothing can be scored
    println!("⚙️  Loading model artifact from {:?}...", model_path);
    let classifier = OnnxClassifier::load(&model_path)
        .with_context(|| format!("Cannot start without the classifier at {:?}", model_path))?;

    // C. Score the batch (any error here aborts this batch only)
    println!("📂 Scoring batch {:?}...", input);
    let store = CsvStore::new();
    let report = score_batch(&store, &classifier, &input, &output)
        .await
        .with_context(|| format!("Batch scoring failed for {:?}", input))?;

    // D. Summary + preview
    println!(
        "\n✅ Batch complete: {} rows → {} Safe / {} Not Safe",
        report.total, report.safe, report.not_safe
    );
    for (column, median, cells) in &report.imputation.filled {
        println!("   ➜ imputed {cells} missing '{column}' cell(s) with batch median {median}");
    }
    println!("   Results written to {:?}", output);

    print_preview(&report, preview_rows);

    // E. Optional JSON run report
    if let Some(path) = report_path {
        std::fs::write(&path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("Failed to write run report to {:?}", path))?;
        println!("   Run report written to {:?}", path);
    }

    println!("\n✨ Done in {:.2?}", start.elapsed());
    Ok(())
}

fn print_preview(report: &BatchReport, preview_rows: usize) {
    if report.rows.is_empty() || preview_rows == 0 {
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "#", "ph", "Hardness", "Solids", "Chloramines", "Sulfate", "Conductivity",
        "Organic_carbon", "Trihalomethanes", "Turbidity", "Prediction",
    ]);

    for (idx, row) in report.rows.iter().take(preview_rows).enumerate() {
        let f = row.sample.as_features();
        let mut cells = vec![(idx + 1).to_string()];
        cells.extend(f.iter().map(|v| format!("{v:.2}")));
        cells.push(row.verdict.to_string());
        table.add_row(cells);
    }

    println!("\n{table}");
    if report.rows.len() > preview_rows {
        println!("   ... {} more row(s) in the output file", report.rows.len() - preview_rows);
    }
}
