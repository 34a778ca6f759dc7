use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use blockchart::Chart;
use blockchart::render::{RenderConfig, Renderer, Rendering};

#[derive(Parser, Debug)]
#[command(
    name = "blockchart",
    about = "Find the enclosed regions of a box diagram drawn in plain text and how they nest",
    version
)]
struct Cli {
    /// Diagram file: spaces are empty, any other character is border
    input: PathBuf,

    /// JSON file overriding the display palette
    #[arg(long = "palette", short = 'p')]
    palette: Option<PathBuf>,

    /// Print the analysis as JSON instead of the text summary
    #[arg(long = "json")]
    json: bool,

    /// Skip the coloured diagram
    #[arg(long = "no-color")]
    no_color: bool,

    /// Log pipeline details
    #[arg(long = "verbose", short = 'v')]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if let Err(e) = run(&cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let chart = Chart::analyze_file(&cli.input)
        .with_context(|| format!("invalid diagram {}", cli.input.display()))?;

    let report = chart.report();
    if cli.json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    if !cli.no_color {
        let config = match &cli.palette {
            Some(path) => RenderConfig::from_json_file(path)?,
            None => RenderConfig::default(),
        };
        match chart.render(&Renderer::new(config)) {
            Rendering::Coloured(text) => print!("{}", text),
            declined => println!("{}", declined.text()),
        }
    }

    report.print_summary();
    Ok(())
}
