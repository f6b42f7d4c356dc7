//! Rural Healthcare Workforce Analysis: CLI
//!
//! Fetches the latest physician density for India, derives the regional
//! workforce statistics, and prints them alongside the narrative pages.
//!
//! Usage:
//!   cargo run -p demo -- stats
//!   cargo run -p demo -- stats --json
//!   cargo run -p demo -- charts
//!   cargo run -p demo -- density
//!   cargo run -p demo -- diagram --output loops.svg
//!   cargo run -p demo -- page analysis

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use ruralcare_contracts::{StatsError, StatsReport, StatsResult};
use ruralcare_content::diagram::render_svg;
use ruralcare_content::narrative::{self, BulletGroup};
use ruralcare_content::{analysis_sections, Page};
use ruralcare_core::chart::{density_rows, ratio_rows, shortage_rows, vacancy_rows};
use ruralcare_core::HealthcareStatsProvider;
use ruralcare_source::{SourceConfig, WorldBankSource};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Rural healthcare workforce analysis.
///
/// Statistics are derived from the World Bank physician-density indicator.
/// When the indicator cannot be fetched, a fixed fallback dataset is used.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "Rural healthcare workforce analysis for India",
    long_about = "Derives regional doctor ratios, vacancy rates, and workforce shortages\n\
                  from the World Bank physician-density indicator, and prints the\n\
                  system-dynamics analysis pages."
)]
struct Cli {
    /// TOML file overriding the indicator endpoint.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the derived healthcare statistics.
    Stats {
        /// Emit the full report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the Data page chart series as JSON.
    Charts,
    /// Print the latest physician density next to the WHO recommendation.
    Density,
    /// Write the causal-loop diagram as SVG.
    Diagram {
        /// Destination file. Defaults to stdout.
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Print one narrative page.
    Page {
        #[arg(value_enum)]
        page: PageArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PageArg {
    Home,
    Analysis,
    Solutions,
    Data,
}

impl From<PageArg> for Page {
    fn from(arg: PageArg) -> Self {
        match arg {
            PageArg::Home => Page::Home,
            PageArg::Analysis => Page::Analysis,
            PageArg::Solutions => Page::Solutions,
            PageArg::Data => Page::Data,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    // Set RUST_LOG=debug to see which data path each request took.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("demo error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> StatsResult<()> {
    match cli.command {
        Command::Stats { json } => {
            let report = build_provider(cli.config.as_deref())?.produce_report().await;
            if json {
                println!("{}", to_json(&report)?);
            } else {
                print_report(&report);
            }
        }
        Command::Charts => {
            let report = build_provider(cli.config.as_deref())?.produce_report().await;
            let charts = serde_json::json!({
                "origin": report.origin,
                "ratio": ratio_rows(&report.stats),
                "vacancy": vacancy_rows(&report.stats),
                "shortage": shortage_rows(&report.stats),
            });
            println!("{}", to_json(&charts)?);
        }
        Command::Density => {
            let density = build_provider(cli.config.as_deref())?
                .latest_physician_density()
                .await;
            println!("{}", narrative::DENSITY_CHART_TITLE);
            for row in density_rows(density) {
                println!("  {:<16} {:>6.2}", row.name, row.value);
            }
        }
        Command::Diagram { output } => {
            let svg = render_svg();
            match output {
                Some(path) => {
                    std::fs::write(&path, svg).map_err(|e| StatsError::Output {
                        reason: format!("cannot write '{}': {}", path.display(), e),
                    })?;
                    println!("Diagram written to {}", path.display());
                }
                None => print!("{}", svg),
            }
        }
        Command::Page { page } => print_page(page.into()),
    }
    Ok(())
}

fn build_provider(config_path: Option<&Path>) -> StatsResult<HealthcareStatsProvider> {
    let config = match config_path {
        Some(path) => SourceConfig::from_file(path)?,
        None => SourceConfig::default(),
    };
    let source = WorldBankSource::new(config)?;
    Ok(HealthcareStatsProvider::new(Box::new(source)))
}

fn to_json<T: serde::Serialize>(value: &T) -> StatsResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| StatsError::Output {
        reason: e.to_string(),
    })
}

// ── Report output ─────────────────────────────────────────────────────────────

fn print_report(report: &StatsReport) {
    let stats = &report.stats;

    println!();
    println!("{}", narrative::DATA_HEADING);
    println!("{}", "=".repeat(narrative::DATA_HEADING.len()));
    println!(
        "Source: {} ({})",
        report.origin.label(),
        report.produced_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    if let Some(failure) = &report.failure {
        println!("Fetch failed: {}", failure);
    }
    println!("Physician density: {:.3} per 1,000 people", stats.physician_density);
    println!();

    println!("{} ({})", narrative::RATIO_CHART_TITLE, narrative::RATIO_CHART_SUBTITLE);
    println!("  {:<16} {:>8} {:>8} {:>8}", "State", "Rural", "Urban", "WHO");
    for row in ratio_rows(stats) {
        println!(
            "  {:<16} {:>8} {:>8} {:>8}",
            row.name, row.rural, row.urban, row.who
        );
    }
    println!();

    println!("{}", narrative::VACANCY_CHART_TITLE);
    for row in vacancy_rows(stats) {
        println!("  {:<26} {:>6.1}", row.name, row.rate);
    }
    println!();

    println!("{}", narrative::SHORTAGE_CHART_TITLE);
    for row in shortage_rows(stats) {
        println!("  {:<26} {:>6.1}", row.name, row.shortage);
    }
    println!();
}

// ── Narrative pages ───────────────────────────────────────────────────────────

fn print_page(page: Page) {
    println!();
    println!("{}: {}", narrative::SITE_TITLE, page.title());
    println!();
    match page {
        Page::Home => print_home(),
        Page::Analysis => print_analysis(),
        Page::Solutions => print_solutions(),
        Page::Data => print_data(),
    }
}

fn print_heading(text: &str) {
    println!("{}", text);
    println!("{}", "-".repeat(text.chars().count()));
}

fn print_groups(groups: &[BulletGroup], indent: &str) {
    for group in groups {
        if let Some(heading) = group.heading {
            println!("{}{}", indent, heading);
        }
        for item in group.items {
            println!("{}  - {}", indent, item);
        }
    }
}

fn print_home() {
    print_heading(narrative::HOME_HEADING);
    for paragraph in narrative::HOME_INTRO {
        println!("{}", paragraph);
        println!();
    }
    println!("Key findings:");
    for finding in narrative::KEY_FINDINGS {
        println!("  - {}", finding);
    }
    println!();
    print_heading(narrative::DIAGRAM_TITLE);
    println!("{}", narrative::DIAGRAM_CAPTION);
    println!("(run `demo diagram` for the SVG, `demo density` for the chart)");
    println!();
}

fn print_analysis() {
    print_heading("Core Variables");
    for variable in narrative::CORE_VARIABLES {
        println!("  - {}", variable);
    }
    println!();

    print_heading("Key Relationships");
    for rel in &narrative::KEY_RELATIONSHIPS {
        println!("  {} → {} ({})", rel.from, rel.to, rel.polarity);
        println!("      {}", rel.explanation);
    }
    println!();

    print_heading("Feedback Loops");
    for lp in &narrative::FEEDBACK_LOOPS {
        println!("  {} {} [{}]", lp.id, lp.name, lp.kind.label());
        println!("      {}", lp.chain.join(" → "));
    }
    println!();

    for section in analysis_sections() {
        print_heading(section.title);
        print_groups(section.groups, "");
        println!();
    }

    print_heading("System Archetypes");
    for archetype in &narrative::ARCHETYPES {
        println!("  {}: {}", archetype.name, archetype.description);
    }
    println!();
}

fn print_solutions() {
    print_heading("Existing Interventions");
    for intervention in &narrative::EXISTING_INTERVENTIONS {
        println!("  {} [{}]", intervention.name, intervention.level.label());
        println!("      Effectiveness: {}", intervention.effectiveness);
        println!("      Limitations:   {}", intervention.limitations);
    }
    println!();
    println!("{}", narrative::INTERVENTIONS_NOTE);
    println!();

    print_heading("Leverage Points");
    for tier in &narrative::LEVERAGE_POINTS {
        println!("{}", tier.title);
        print_groups(tier.groups, "  ");
    }
    println!();

    print_heading("Implementation Priorities");
    print_groups(&narrative::IMPLEMENTATION_PRIORITIES, "");
    println!();
}

fn print_data() {
    print_heading(narrative::DATA_HEADING);
    println!("  {}", narrative::RATIO_CHART_TITLE);
    println!("  {}", narrative::VACANCY_CHART_TITLE);
    println!("  {}", narrative::SHORTAGE_CHART_TITLE);
    println!("(run `demo stats` or `demo charts` for the values)");
    println!();
    println!("Data sources:");
    for source in narrative::DATA_SOURCES {
        println!("  - {}", source);
    }
    println!();
}
