// aquaguard/src/main.rs

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup Logging (Tracing)
    // RUST_LOG=debug aquaguard score ... for the details
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            ph,
            hardness,
            solids,
            chloramines,
            sulfate,
            conductivity,
            organic_carbon,
            trihalomethanes,
            turbidity,
            model,
            config_dir,
        } => commands::check::execute(
            commands::check::CheckArgs {
                ph,
                hardness,
                solids,
                chloramines,
                sulfate,
                conductivity,
                organic_carbon,
                trihalomethanes,
                turbidity,
            },
            model,
            config_dir,
        ),

        Commands::Score {
            input,
            output,
            model,
            limit,
            report,
            config_dir,
        } => commands::score::execute(input, output, model, limit, report, config_dir).await,

        Commands::Ranges => commands::ranges::execute(),
    }
}
