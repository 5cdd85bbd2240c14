// rootcrop-report: prints one dashboard selection to stdout
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use engine::config::EngineSettings;
use engine::view::{DashboardView, PriceTable};
use engine::PriceService;
use shared::models::{Commodity, ForecastInterval, Selection, YearFilter};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rootcrop-report")]
#[command(about = "Root crop price report for NCR: history, min/max and forecast")]
#[command(version)]
struct Cli {
    /// Engine settings file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the commodity workbooks; overrides the settings file
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Carrot, Cassava, Gabi, Potato or Sweet Potato
    #[arg(long, default_value = "Carrot")]
    commodity: Commodity,

    /// "All" or a year between 2012 and 2023; limits the printed history rows
    #[arg(short, long, default_value = "All")]
    year: YearFilter,

    /// "monthly" or "weekly"
    #[arg(short, long, default_value = "monthly")]
    interval: ForecastInterval,
}

impl Cli {
    fn settings(&self) -> Result<EngineSettings> {
        let settings = match &self.config {
            Some(path) => EngineSettings::load(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => EngineSettings::default(),
        };
        Ok(match &self.data_dir {
            Some(dir) => settings.with_data_dir(dir),
            None => settings,
        })
    }

    fn run(self) -> Result<()> {
        let settings = self.settings()?;
        let service = PriceService::new(settings);
        let selection = Selection { commodity: self.commodity, year: self.year, interval: self.interval };

        let view = service
            .render(&selection, &Default::default())
            .with_context(|| format!("failed to build the {} report", selection.commodity))?;
        print_report(&view);
        Ok(())
    }
}

fn print_table(table: &PriceTable) {
    println!("{:<12} {:>16} {:>20}", table.date_header, table.price_header, table.change_header);
    for row in &table.rows {
        println!("{:<12} {:>16} {:>20}", row.date, row.price, row.change);
    }
}

fn print_report(view: &DashboardView) {
    println!("{}", view.layout.title);
    println!("{} | {} | {}", view.selection.commodity, view.selection.year, view.selection.interval.label());
    println!();

    for gauge in &view.gauges {
        println!("{:<14} {}", gauge.title, gauge.label());
    }
    println!();

    print_table(&view.history_table.filtered(view.selection.year));
    println!();

    println!("{} ({})", view.layout.forecast_title, view.forecast.interval.label());
    print_table(&view.forecast.table);
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = cli.run() {
        tracing::error!(error = %format!("{:#}", e), "Report failed");
        return Err(e);
    }
    Ok(())
}
