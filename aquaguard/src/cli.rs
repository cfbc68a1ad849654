// aquaguard/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aquaguard")]
#[command(about = "Water potability decision engine (range rule + ML classifier)", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 💧 Checks one sample (nine readings) and prints the verdict
    Check {
        /// pH (0–14)
        #[arg(long, default_value_t = 7.0)]
        ph: f64,

        /// Hardness in mg/L (0–500)
        #[arg(long, default_value_t = 180.0)]
        hardness: f64,

        /// Total dissolved solids in ppm (0–50000)
        #[arg(long, default_value_t = 15000.0)]
        solids: f64,

        /// Chloramines in ppm (0–15)
        #[arg(long, default_value_t = 7.5)]
        chloramines: f64,

        /// Sulfate in mg/L (0–500)
        #[arg(long, default_value_t = 330.0)]
        sulfate: f64,

        /// Conductivity in µS/cm (0–1000)
        #[arg(long, default_value_t = 500.0)]
        conductivity: f64,

        /// Organic carbon in mg/L (0–50)
        #[arg(long, default_value_t = 10.0)]
        organic_carbon: f64,

        /// Trihalomethanes in µg/L (0–150)
        #[arg(long, default_value_t = 70.0)]
        trihalomethanes: f64,

        /// Turbidity in NTU (0–10)
        #[arg(long, default_value_t = 3.0)]
        turbidity: f64,

        /// Model artifact (overrides config and AQUAGUARD_MODEL_PATH)
        #[arg(long, short)]
        model: Option<PathBuf>,

        /// Directory probed for aquaguard.yaml
        #[arg(long, default_value = ".")]
        config_dir: PathBuf,
    },

    /// 📂 Scores a CSV batch and writes it back with a Prediction column
    Score {
        /// Input CSV (header must contain the nine canonical columns)
        input: PathBuf,

        /// Output CSV (default: aquaguard_predictions.csv, or config)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Model artifact (overrides config and AQUAGUARD_MODEL_PATH)
        #[arg(long, short)]
        model: Option<PathBuf>,

        /// Rows shown in the preview table
        #[arg(long)]
        limit: Option<usize>,

        /// Also write a JSON run report to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Directory probed for aquaguard.yaml
        #[arg(long, default_value = ".")]
        config_dir: PathBuf,
    },

    /// 📏 Prints the nine measurement columns, input bounds and ideal ranges
    Ranges,
}
