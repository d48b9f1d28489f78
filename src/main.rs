use anyhow::{Context, Result};
use chrono::Local;
use reqwest::Client;
use rollout_dashboard::{
    config::Config,
    fetch,
    process::{self, ProjectData},
    progress::{self, DashboardTotals},
};
use std::{env, fs, path::PathBuf};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();
    info!("startup");

    // ─── 2) load config ──────────────────────────────────────────────
    let config_path = env::args().nth(1).map(PathBuf::from);
    let config = Config::load_or_default(config_path.as_deref())?;
    info!(sheet_id = %config.sheet_id, gid = %config.gid, shape = ?config.shape, "configured");

    // ─── 3) fetch the sheet export ───────────────────────────────────
    let client = Client::new();
    let url = fetch::urls::resolve_fetch_url(&config)?;
    let csv_text = match fetch::fetch_sheet_csv(&client, &url).await {
        Ok(text) => text,
        Err(err) => {
            error!("sheet fetch failed: {}", err);
            return Err(err.into());
        }
    };

    // ─── 4) parse → build → aggregate ────────────────────────────────
    let table = process::parse_csv(&csv_text);
    let data = process::build(&table, config.shape);
    let totals = progress::summarize(&data);
    info!(
        categories = totals.category_count,
        countries = totals.country_count,
        steps = totals.total_steps,
        "built progress tree"
    );

    // ─── 5) render the summary ───────────────────────────────────────
    render_summary(&data, &totals);

    // ─── 6) snapshot for the presentation layer ──────────────────────
    if let Some(path) = &config.snapshot_path {
        let snapshot = serde_json::json!({
            "project_data": data,
            "totals": totals,
        });
        fs::write(path, serde_json::to_string_pretty(&snapshot)?)
            .with_context(|| format!("writing snapshot {}", path.display()))?;
        info!("wrote snapshot {}", path.display());
    }

    info!("done");
    Ok(())
}

fn render_summary(data: &ProjectData, totals: &DashboardTotals) {
    println!("=== Rollout Progress ===");
    println!(
        "Overall: {}% ({}/{} steps completed)",
        totals.overall_percent, totals.completed_steps, totals.total_steps
    );
    println!(
        "Categories: {}   Countries: {}   Target models: {}",
        totals.category_count, totals.country_count, totals.total_models
    );
    if !data.process_steps.is_empty() {
        println!("Steps: {}", data.process_steps.join(" → "));
    }
    println!();

    for category in &data.categories {
        println!(
            "{} ({} models) — {}%",
            category.category,
            category.total_models,
            progress::category_progress(category)
        );
        for country in &category.countries {
            println!(
                "  {} — {}%",
                country.name,
                progress::country_progress(country)
            );
            for unit in &country.units {
                match &unit.wbs_level {
                    Some(wbs) => println!(
                        "    {} [{}] — {}%",
                        unit.name,
                        wbs,
                        progress::unit_progress(unit)
                    ),
                    None => println!("    {} — {}%", unit.name, progress::unit_progress(unit)),
                }
            }
        }
    }

    println!();
    println!("Last updated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
}
