use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use clipscout_core::{SimulatedProvider, analyze_url, format_analysis_readable, format_timestamp};

#[derive(Parser)]
#[command(name = "clipscout")]
#[command(about = "Suggest viral clip timestamps for a video URL")]
struct Cli {
    /// Video URL
    url: String,

    /// Print the raw JSON result instead of the readable report
    #[arg(long)]
    json: bool,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let spinner = create_spinner("Analyzing video...");
    let result = analyze_url(&cli.url, &SimulatedProvider).await;
    spinner.finish_and_clear();

    let result = match result {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "\n{}  {}\n",
        style("clipscout").cyan().bold(),
        style("Viral Clip Finder").dim()
    );
    println!(
        "{} {} clip{} for a {} {} video\n",
        style("✓").green().bold(),
        result.clips.len(),
        if result.clips.len() == 1 { "" } else { "s" },
        format_timestamp(result.duration),
        style(result.platform).yellow()
    );
    println!("{}", style("─".repeat(60)).dim());

    println!("{}", format_analysis_readable(&result));

    Ok(())
}
