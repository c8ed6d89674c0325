//! Prints a report for a few sample circles
use anyhow::Result;
use clap::Parser;
use geofigures::report::{FigureReport, ReportConfiguration};
use geofigures::{Circle, FigureType};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "figure_report", version, about = "Report area and perimeter of sample figures")]
struct Cli {
    /// Decimals used for area, perimeter and ratio
    #[arg(long, default_value_t = 4)]
    precision: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "geofigures=debug,info"
    } else {
        "geofigures=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    tracing::debug!(?cli, "starting figure report");

    let mut figures: Vec<FigureType> = vec![
        Circle::new(1.0)?.into(),
        Circle::new(2.0)?.into(),
        Circle::with_position(5, 10, 3.0)?.into(),
    ];

    let report = FigureReport::new(ReportConfiguration {
        precision: cli.precision,
    });

    let mut out = String::new();
    out.push_str("=== GEOMETRIC FIGURES ===\n\n");
    for figure in &figures {
        report.write_figure(&mut out, figure)?;
    }
    report.write_radius_doubling(&mut out, &mut figures[0])?;
    report.write_comparison(&mut out, &figures[0], &figures[2])?;

    print!("{out}");
    Ok(())
}
