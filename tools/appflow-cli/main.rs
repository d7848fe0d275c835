use appflow::export;
use appflow::layout::{self, Stage};
use appflow::prelude::*;
use clap::Parser;
use std::time::Instant;

/// Offline app-flow generator: classifies the goal, expands the matching
/// deterministic template, and prints the architecture or its diagram.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Free-text description of the app to generate
    goal: Vec<String>,

    /// Print the diagram interchange JSON instead of the architecture export
    #[arg(long)]
    diagram: bool,

    /// Print a per-screen layout summary table after the payload
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    let cli = Cli::parse();
    let goal = cli.goal.join(" ");
    if goal.trim().is_empty() {
        eprintln!("error: goal text is required, e.g. `appflow-cli build a todo app`");
        std::process::exit(2);
    }

    let start = Instant::now();
    let architecture = FallbackGenerator::generate(&goal);
    let diagram = layout::layout(&architecture);
    let elapsed = start.elapsed();

    if cli.diagram {
        println!("{}", export::diagram_to_json(&diagram)?);
    } else {
        println!("{}", export::architecture_to_json(&architecture)?);
    }

    if cli.summary {
        eprintln!();
        eprintln!(
            "Family: {:?}  Screens: {}  Transitions: {}  ({:?})",
            classify_goal(&goal),
            architecture.screens.len(),
            architecture.transitions.len(),
            elapsed,
        );
        eprintln!("{:<16} {:<16} {:<12} {:>8} {:>8}", "id", "type", "stage", "x", "y");
        for screen in &architecture.screens {
            let position = diagram
                .node(&screen.id)
                .map(|n| n.position)
                .unwrap_or_default();
            eprintln!(
                "{:<16} {:<16} {:<12} {:>8.0} {:>8.0}",
                screen.id,
                screen.screen_type.to_string(),
                format!("{:?}", Stage::of(screen.screen_type)),
                position.x,
                position.y,
            );
        }
        eprintln!(
            "\nSuggested export file: {}",
            export::export_file_name(&architecture)
        );
    }

    Ok(())
}
