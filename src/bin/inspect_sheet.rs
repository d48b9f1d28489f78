use rollout_dashboard::{
    process::{build, parse_csv, TableShape},
    progress,
};
use std::{env, fs, process::exit};

fn main() {
    // Expect a CSV path and an optional shape (wide|long, default wide).
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <CSV_FILE> [wide|long]", args[0]);
        exit(1);
    }
    let shape = match args.get(2).map(String::as_str) {
        None | Some("wide") => TableShape::Wide,
        Some("long") => TableShape::Long,
        Some(other) => {
            eprintln!("Unknown shape '{}', expected wide or long", other);
            exit(1);
        }
    };

    let text = match fs::read_to_string(&args[1]) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading {}: {}", args[1], e);
            exit(1);
        }
    };

    let table = parse_csv(&text);
    println!("=== Raw table ===");
    println!("Headers ({}): {:?}", table.headers.len(), table.headers);
    println!("Rows: {}", table.rows.len());
    println!();

    let data = build(&table, shape);
    println!("=== Tree ===");
    println!("Resolved steps: {:?}", data.process_steps);
    for category in &data.categories {
        println!(
            "{} (total_models={}) — {}%",
            category.category,
            category.total_models,
            progress::category_progress(category)
        );
        for country in &category.countries {
            println!("  {}", country.name);
            for unit in &country.units {
                println!(
                    "    {} — {}%  {:?}",
                    unit.name,
                    progress::unit_progress(unit),
                    unit.steps
                        .iter()
                        .map(|s| (s.name.as_str(), s.status))
                        .collect::<Vec<_>>()
                );
            }
        }
    }
    println!();

    let totals = progress::summarize(&data);
    println!("=== Totals ===");
    println!(
        "overall={}% completed={}/{} categories={} countries={} models={}",
        totals.overall_percent,
        totals.completed_steps,
        totals.total_steps,
        totals.category_count,
        totals.country_count,
        totals.total_models
    );
}
