//! Command-line report generator over a cleaned occurrence file.
//!
//! A small presentation consumer of the statistics API: prints the global
//! summary and, when a pathology is named, its descriptive, trend and
//! anomaly figures. Pass `--json` for machine-readable output.

use anyhow::{Context, bail};
use log::info;
use patho_stats::stats::{
    anomalous_years, describe, general_trend, global_summary, outliers, slope, top_departments,
    variation_by_year,
};
use patho_stats::{AnalysisConfig, FrenchDepartments, RecordFilter, load_records_from_path};
use serde_json::json;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut json_output = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json_output = true;
        } else {
            positional.push(arg);
        }
    }

    if positional.is_empty() {
        bail!("usage: patho-stats <effectifs.csv> [pathology] [--json]");
    }

    let path = PathBuf::from(&positional[0]);
    let pathology = positional.get(1).cloned();

    let config = AnalysisConfig::default();
    let resolver = FrenchDepartments::new();
    let collection = load_records_from_path(&path, &resolver, &config)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    let summary = global_summary(&collection);
    info!(
        "{} records, {} pathologies, {} departments, {} years",
        summary.record_count, summary.pathology_count, summary.department_count, summary.year_count
    );

    let Some(pathology) = pathology else {
        if json_output {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            print_summary(&summary);
        }
        return Ok(());
    };

    let stats = describe(&RecordFilter::for_pathology(&pathology).select(&collection));
    if stats.is_empty() {
        bail!("No data for pathology '{pathology}'");
    }

    let trend = general_trend(&collection, &pathology);
    let yearly_slope = slope(&collection, &pathology);
    let variations = variation_by_year(&collection, &pathology);
    let flagged = outliers(&collection, &pathology, None, config.outlier_threshold);
    let flagged_years = anomalous_years(&collection, &pathology, config.outlier_threshold);
    let top = top_departments(&collection, &pathology, config.extremes_count, None);

    if json_output {
        let report = json!({
            "pathology": pathology,
            "summary": summary,
            "statistics": stats,
            "trend": trend,
            "slope": yearly_slope,
            "variation_by_year": variations,
            "outlier_departments": flagged,
            "anomalous_years": flagged_years,
            "top_departments": top,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary(&summary);

    println!("\nPathology: {pathology}");
    println!("  Weighted prevalence:   {:>8.3} %", stats.weighted_prevalence);
    println!("  Mean prevalence:       {:>8.3} %", stats.mean_prevalence);
    println!("  Median prevalence:     {:>8.3} %", stats.median_prevalence);
    println!("  Std deviation:         {:>8.3}", stats.std_dev_prevalence);
    println!("  Trend: {} (slope {})", trend.label(), format_option(yearly_slope));

    if !variations.is_empty() {
        println!("\n  Yearly variation:");
        for variation in &variations {
            println!(
                "    {}: {:+.3} pts ({})",
                variation.year,
                variation.absolute_change,
                variation
                    .relative_change
                    .map_or_else(|| "n/a".to_string(), |v| format!("{v:+.3} %"))
            );
        }
    }

    match flagged {
        Some(scores) if !scores.is_empty() => {
            println!("\n  Outlier departments (|z| >= {}):", config.outlier_threshold);
            for score in scores {
                println!(
                    "    {} ({:.3} %, z = {:+.3})",
                    score.department, score.weighted_prevalence, score.z_score
                );
            }
        }
        Some(_) => println!("\n  No outlier department"),
        None => println!("\n  Department z-scores not computable"),
    }

    if !flagged_years.is_empty() {
        println!("  Anomalous years: {flagged_years:?}");
    }

    if !top.is_empty() {
        println!("\n  Highest-prevalence departments:");
        for (department, value) in top {
            println!("    {department}: {value:.3} %");
        }
    }

    Ok(())
}

fn print_summary(summary: &patho_stats::GlobalSummary) {
    println!("Dataset summary");
    println!("  Records:              {:>12}", summary.record_count);
    println!("  Pathologies:          {:>12}", summary.pathology_count);
    println!("  Departments:          {:>12}", summary.department_count);
    println!("  Years:                {:>12}", summary.year_count);
    println!("  Total cases:          {:>12}", summary.total_cases);
    println!("  Total population:     {:>12}", summary.total_population);
    println!("  Weighted prevalence:  {:>11.3} %", summary.weighted_prevalence);
    println!("  Mean prevalence:      {:>11.3} %", summary.mean_prevalence);
}

fn format_option(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:+.3}"))
}
