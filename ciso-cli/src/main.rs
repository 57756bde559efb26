//! CISO CLI - inspect and export synthetic dashboard metrics

use anyhow::{Context, Result};
use ciso_core::{
    incidents, ControlsCoverage, DashboardMetrics, ExecutiveKpis, IncidentPoint,
    MetricsGenerator, DEFAULT_SEED, DEFAULT_TREND_DAYS,
};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser)]
#[command(name = "ciso")]
#[command(about = "CISO Dashboard - synthetic security posture metrics")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Seed for the incident stream
    #[arg(long, global = true, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one metrics section
    Show {
        /// Section to print
        #[arg(value_enum)]
        section: Section,

        /// Days in the incident trend
        #[arg(short, long, default_value_t = DEFAULT_TREND_DAYS)]
        days: u32,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Write the offline demo data files used by the dashboard
    Export {
        /// Output directory
        #[arg(short, long, default_value = "data")]
        out_dir: PathBuf,

        /// Days in the incident trend
        #[arg(short, long, default_value_t = DEFAULT_TREND_DAYS)]
        days: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Section {
    Kpis,
    Incidents,
    Controls,
    Metrics,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("ciso=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let generator = MetricsGenerator::with_seed(cli.seed);
    debug!(seed = cli.seed, "Generator ready");

    match cli.command {
        Commands::Show {
            section,
            days,
            format,
        } => show_command(&generator, section, days, format),
        Commands::Export { out_dir, days } => export_command(&generator, &out_dir, days),
    }
}

fn show_command(
    generator: &MetricsGenerator,
    section: Section,
    days: u32,
    format: Format,
) -> Result<()> {
    match (section, format) {
        (Section::Kpis, Format::Json) => print_json(&generator.executive_kpis()),
        (Section::Kpis, Format::Text) => {
            print_kpis(&generator.executive_kpis());
            Ok(())
        }
        (Section::Incidents, Format::Json) => print_json(&generator.incident_trend(days)?),
        (Section::Incidents, Format::Text) => {
            print_incidents(&generator.incident_trend(days)?);
            Ok(())
        }
        (Section::Controls, Format::Json) => print_json(&generator.controls_coverage()),
        (Section::Controls, Format::Text) => {
            print_controls(&generator.controls_coverage());
            Ok(())
        }
        (Section::Metrics, _) => {
            let metrics = DashboardMetrics {
                kpis: generator.executive_kpis(),
                incidents: generator.incident_trend(days)?,
                controls: generator.controls_coverage(),
            };
            if format == Format::Json {
                return print_json(&metrics);
            }
            print_kpis(&metrics.kpis);
            print_incidents(&metrics.incidents);
            print_controls(&metrics.controls);
            Ok(())
        }
    }
}

fn export_command(generator: &MetricsGenerator, out_dir: &Path, days: u32) -> Result<()> {
    println!("{} Exporting demo data to {}...", "→".blue(), out_dir.display());

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create directory: {}", out_dir.display()))?;

    let metrics = DashboardMetrics {
        kpis: generator.executive_kpis(),
        incidents: generator.incident_trend(days)?,
        controls: generator.controls_coverage(),
    };

    write_json(out_dir, "kpis", &metrics.kpis)?;
    write_json(out_dir, "incidents", &metrics.incidents)?;
    write_json(out_dir, "controls", &metrics.controls)?;
    write_json(out_dir, "metrics", &metrics)?;

    println!(
        "{} Wrote 4 files ({} incident days)",
        "✓".green(),
        metrics.incidents.len()
    );
    Ok(())
}

fn write_json<T: Serialize>(dir: &Path, name: &str, value: &T) -> Result<()> {
    let path = dir.join(format!("{}.json", name));
    let body = serde_json::to_string_pretty(value)?;
    fs::write(&path, body).with_context(|| format!("Failed to write file: {}", path.display()))?;
    println!("  {} {}", "▸".blue(), path.display());
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_kpis(kpis: &ExecutiveKpis) {
    println!("\n{} Executive KPIs", "═".blue().bold());
    println!("{} Overall risk: {:.0}%", "▸".blue(), kpis.overall_risk * 100.0);
    println!(
        "{} Open findings: {} ({} critical)",
        "▸".blue(),
        kpis.open_findings,
        kpis.critical_open.to_string().red()
    );
    println!(
        "{} Patch SLA compliance: {:.0}%",
        "▸".blue(),
        kpis.patch_sla_compliance * 100.0
    );
    println!("{} MTTD: {:.1}h", "▸".blue(), kpis.mean_time_to_detect_hours);
    println!("{} MTTR: {:.1}h", "▸".blue(), kpis.mean_time_to_respond_hours);
    println!(
        "{} Last updated: {}",
        "▸".blue(),
        ciso_core::kpi::timestamp::format(&kpis.last_updated)
    );
}

fn print_incidents(trend: &[IncidentPoint]) {
    println!("\n{} Incident Trend", "═".blue().bold());
    for point in trend {
        println!(
            "  {} {:>2} {}",
            point.date,
            point.incidents,
            "█".repeat(usize::from(point.incidents))
        );
    }
    println!(
        "{} {} days, {} incidents total",
        "▸".blue(),
        trend.len(),
        incidents::total(trend)
    );
}

fn print_controls(controls: &ControlsCoverage) {
    println!("\n{} Controls Coverage", "═".blue().bold());

    let cis = &controls.cis;
    println!("{} CIS Controls v8.1", "▸".blue());
    println!("  Implemented: {}", cis.implemented.to_string().green());
    println!("  In Progress: {}", cis.in_progress.to_string().yellow());
    println!("  Not Started: {}", cis.not_started.to_string().red());
    println!(
        "  {:.0}% implemented of {}",
        cis.implemented_ratio() * 100.0,
        cis.total()
    );

    println!("{} NIST CSF 2.0", "▸".blue());
    for (function, ratio) in controls.nist.functions() {
        println!("  {:<9} {:>4.0}%", function, ratio * 100.0);
    }
    println!("  Average   {:>4.0}%", controls.nist.average() * 100.0);
}
