// aquaguard/src/commands/check.rs
//
// USE CASE: check one interactive sample.

use std::path::PathBuf;

use anyhow::Context;
use aquaguard_core::application::check_sample;
use aquaguard_core::domain::{Verdict, WaterSample};
use aquaguard_core::infrastructure::adapters::onnx::OnnxClassifier;
use aquaguard_core::infrastructure::config::load_config;
use aquaguard_core::ports::classifier::Label;

/// The nine readings as typed on the command line.
pub struct CheckArgs {
    pub ph: f64,
    pub hardness: f64,
    pub solids: f64,
    pub chloramines: f64,
    pub sulfate: f64,
    pub conductivity: f64,
    pub organic_carbon: f64,
    pub trihalomethanes: f64,
    pub turbidity: f64,
}

pub fn execute(
    args: CheckArgs,
    model: Option<PathBuf>,
    config_dir: PathBuf,
) -> anyhow::Result<()> {
    // A. Config + model resolution: flag > env > file > default
    let config = load_config(&config_dir)
        .with_context(|| format!("Failed to load configuration from {:?}", config_dir))?;
    let model_path = model.unwrap_or(config.model_path);

    // B. The classifier is mandatory: a missing artifact stops everything,
    // there is no rule-only mode.
    println!("⚙️  Loading model artifact from {:?}...", model_path);
    let classifier = OnnxClassifier::load(&model_path)
        .with_context(|| format!("Cannot start without the classifier at {:?}", model_path))?;

    let sample = WaterSample {
        ph: args.ph,
        hardness: args.hardness,
        solids: args.solids,
        chloramines: args.chloramines,
        sulfate: args.sulfate,
        conductivity: args.conductivity,
        organic_carbon: args.organic_carbon,
        trihalomethanes: args.trihalomethanes,
        turbidity: args.turbidity,
    };

    // C. Decide
    let assessment = check_sample(&sample, &classifier)?;

    println!("\n💧 AquaGuard — Water Potability Check");
    if assessment.rule_passed {
        println!("   Rule check: ✅ all nine readings inside their ideal ranges");
    } else {
        println!("   Rule check: out of ideal range:");
        for v in &assessment.violations {
            println!(
                "      ➜ {} = {} (ideal {}..{}{}{})",
                v.range.column,
                v.value,
                v.range.min,
                v.range.max,
                if v.range.unit.is_empty() { "" } else { " " },
                v.range.unit
            );
        }
    }
    println!(
        "   Model check: {}",
        match assessment.model_label {
            Label::Potable => "potable (1)",
            Label::NotPotable => "not potable (0)",
        }
    );

    match assessment.verdict {
        Verdict::Safe => println!("\n✅ VERDICT: Safe for drinking"),
        Verdict::NotSafe => println!("\n⛔ VERDICT: Not Safe for direct drinking"),
    }
    println!("   Suggestion: {}", assessment.suggestion());

    Ok(())
}
