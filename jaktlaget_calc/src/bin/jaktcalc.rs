//! jaktcalc CLI binary
//!
//! Evaluates a pitch scenario from flags and an optional scenario file. For
//! library usage, see the `jaktlaget_calc` crate documentation.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::filter::LevelFilter;

use jaktlaget_calc::calculator::{CalculatorInput, CalculatorOutput, derive};
use jaktlaget_calc::config::{ScenarioOverrides, load_scenario, resolve_input};
use jaktlaget_calc::format::{format_count, format_mkr, format_sek};
use jaktlaget_calc::projection::{PROJECTION, PROJECTION_PRICES_SEK};
use jaktlaget_calc::series::{self, SeriesPoint};
use jaktlaget_calc::{HUNTING_LICENSES, NORDIC_TOTAL, Region};

/// Scenario file picked up from the working directory when --config is absent.
const DEFAULT_SCENARIO: &str = "jaktcalc.toml";

/// Subscriber, revenue and ad-reach estimates for the Jaktlaget pitch.
#[derive(Parser, Debug)]
#[command(name = "jaktcalc", author, version, about)]
struct RootCli {
    #[command(subcommand)]
    command: Option<CliCommand>,
    #[command(flatten)]
    run: Cli,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// List active hunting licenses per region.
    Regions(ListArgs),
    /// Print the revenue projection table from the pitch.
    Projection(ListArgs),
}

#[derive(Args, Debug, Clone)]
struct ListArgs {
    /// Emit JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct Cli {
    /// Region key: NORDEN, SE, NO, DK or FI.
    #[arg(long)]
    region: Option<String>,
    /// Adoption, percent of active hunting licenses.
    #[arg(long)]
    adoption: Option<f64>,
    /// Monthly price in SEK (19 or 49).
    #[arg(long)]
    price: Option<u32>,
    /// Monthly active users, percent of subscribers.
    #[arg(long)]
    mau: Option<f64>,
    /// Feed views per monthly active user.
    #[arg(long)]
    views: Option<u32>,
    /// Partner share of voice, percent of ad inventory.
    #[arg(long)]
    sov: Option<f64>,
    /// Scenario file (TOML or JSON). Defaults to ./jaktcalc.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Clamp values into the page's slider ranges instead of rejecting them.
    #[arg(long, default_value_t = false)]
    clamp: bool,
    /// Emit JSON instead of a text report.
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Log level (trace|debug|info|warn|error).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl ScenarioOverrides for Cli {
    fn region(&self) -> Option<String> {
        self.region.clone()
    }
    fn adoption_pct(&self) -> Option<f64> {
        self.adoption
    }
    fn price(&self) -> Option<u32> {
        self.price
    }
    fn mau_pct(&self) -> Option<f64> {
        self.mau
    }
    fn views_per_mau(&self) -> Option<u32> {
        self.views
    }
    fn share_of_voice_pct(&self) -> Option<f64> {
        self.sov
    }
}

fn main() -> Result<()> {
    let cli = RootCli::parse();

    let level = cli
        .run
        .log_level
        .parse::<LevelFilter>()
        .map_err(|_| anyhow!("invalid log level: {}", cli.run.log_level))?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Some(CliCommand::Regions(args)) => return print_regions(args.json),
        Some(CliCommand::Projection(args)) => return print_projection(args.json),
        None => {}
    }

    run_scenario(&cli.run)
}

fn run_scenario(cli: &Cli) -> Result<()> {
    let scenario = match &cli.config {
        Some(path) => Some(
            load_scenario(path)?
                .ok_or_else(|| anyhow!("scenario file not found: {}", path.display()))?,
        ),
        None => load_scenario(Path::new(DEFAULT_SCENARIO))?,
    };

    let mut input = resolve_input(cli, scenario.as_ref())?;
    if cli.clamp {
        let clamped = input.clamped();
        if clamped != input {
            tracing::warn!(?input, ?clamped, "inputs clamped to slider ranges");
        }
        input = clamped;
    }

    let output = derive(&input)?;
    tracing::info!(
        region = %input.region,
        subscribers = output.subscribers,
        annual_revenue_sek = output.annual_revenue_sek,
        unique_reach = output.ads.unique_reach,
        "scenario evaluated"
    );

    if cli.json {
        let report = JsonReport {
            input: &input,
            output: &output,
            revenue_comparison: series::revenue_comparison(&output),
            reach: series::reach_series(&output),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&input, &output));
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    input: &'a CalculatorInput,
    output: &'a CalculatorOutput,
    revenue_comparison: Vec<SeriesPoint>,
    reach: Vec<SeriesPoint>,
}

fn render_report(input: &CalculatorInput, out: &CalculatorOutput) -> String {
    let mut lines = vec![
        format!(
            "Område            {} ({} aktiva jaktkort)",
            input.region.display_name(),
            format_count(out.base_count)
        ),
        format!("Adoption          {} %", input.adoption_pct),
        format!("Pris              {} kr / mån", input.price.monthly_sek()),
        String::new(),
        "Resultat – prenumeration".to_string(),
        format!("  Prenumeranter   {}", format_count(out.subscribers)),
        format!("  Intäkt / månad  {}", format_sek(out.monthly_revenue_sek)),
        format!("  Intäkt / år     {}", format_sek(out.annual_revenue_sek)),
        String::new(),
        format!(
            "Resultat – annonser (MAU {} %, {} visningar / MAU, SOV {} %)",
            input.mau_pct, input.views_per_mau, input.share_of_voice_pct
        ),
        format!("  Månatliga visningar (est.)  {}", format_count(out.ads.monthly_impressions)),
        format!("  Unik reach / månad (est.)   {}", format_count(out.ads.unique_reach)),
        format!("  MAU (antal)                 {}", format_count(out.ads.monthly_active_users)),
        String::new(),
        "Snabbjämförelse (år)".to_string(),
    ];
    for point in &out.comparison {
        lines.push(format!(
            "  {} kr scenario  {}",
            point.price_sek,
            format_mkr(point.annual_mkr, 2)
        ));
    }
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn print_regions(json: bool) -> Result<()> {
    if json {
        #[derive(Serialize)]
        struct Regions {
            regions: &'static [jaktlaget_calc::LicenseCount],
            nordic_total: u64,
        }
        let payload = Regions {
            regions: &HUNTING_LICENSES,
            nordic_total: NORDIC_TOTAL,
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    for region in Region::ALL {
        let year = region.entry().map(|e| e.year).unwrap_or("-");
        println!(
            "{:<7} {:<12} {:>8}  {}",
            region.key(),
            region.display_name(),
            format_count(region.base_count()),
            year
        );
    }
    Ok(())
}

fn print_projection(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&PROJECTION)?);
        return Ok(());
    }

    let prices: Vec<String> = PROJECTION_PRICES_SEK
        .iter()
        .map(|p| format!("Årsintäkt ({p} kr)"))
        .collect();
    println!(
        "Adoption | Användare | {} | Drift/år | Årsvinst (19 / 29 / 49)",
        prices.join(" | ")
    );
    for row in &PROJECTION {
        println!(
            "{} | {} | {} | {} | {}",
            row.adoption_label(),
            format_count(row.users),
            row.revenue_cells().join(" | "),
            row.opex_cell(),
            row.profit_cell()
        );
    }
    Ok(())
}
