//! greenreach CLI - Debug tool for proximity search and land-cover
//! change summaries
//!
//! Usage:
//!   greenreach-cli nearest <csv> --lat <lat> --lon <lon> [--k 5] [--category <name>]
//!   greenreach-cli lulc <csv> [--from-year 2002] [--to-year 2021]
//!
//! This tool loads the pre-computed dashboard datasets and prints the
//! same numbers the interactive views display, helping to inspect the
//! proximity search and the land-cover aggregation from the terminal.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use greenreach::engine::AnalysisSession;
use greenreach::geo_utils::compute_bounds;
use greenreach::lulc::{annual_conversion, summarize, ChangeFilter};
use greenreach::{
    load_change_records, load_poi_dataset, CategoryFilter, GeoPoint, PoiCategory,
};

#[derive(Parser)]
#[command(name = "greenreach-cli")]
#[command(about = "Green-space proximity search and land-cover change summaries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the k nearest green spaces to a query point
    Nearest {
        /// CSV file with the cleaned POI table (name, category, lat, lon)
        dataset: PathBuf,

        /// Query latitude in degrees
        #[arg(long)]
        lat: f64,

        /// Query longitude in degrees
        #[arg(long)]
        lon: f64,

        /// Number of neighbors to return
        #[arg(short, long, default_value = "5")]
        k: usize,

        /// Restrict the search to one category (e.g. "Park/Garden")
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Summarize conversion of green land-cover classes to urban
    Lulc {
        /// CSV file with the MODIS change records
        dataset: PathBuf,

        /// First year of the analysis range (inclusive)
        #[arg(long, default_value = "2002")]
        from_year: u16,

        /// Last year of the analysis range (inclusive)
        #[arg(long, default_value = "2021")]
        to_year: u16,
    },
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Nearest {
            dataset,
            lat,
            lon,
            k,
            category,
        } => run_nearest(&dataset, lat, lon, k, category.as_deref(), cli.verbose),
        Commands::Lulc {
            dataset,
            from_year,
            to_year,
        } => run_lulc(&dataset, from_year, to_year),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_nearest(
    dataset: &PathBuf,
    lat: f64,
    lon: f64,
    k: usize,
    category: Option<&str>,
    verbose: bool,
) -> greenreach::Result<()> {
    println!("\n{}", "=".repeat(60));
    println!("Loading green spaces from: {}", dataset.display());
    println!("{}", "=".repeat(60));

    let points = load_poi_dataset(dataset)?;
    println!("Loaded {} points", points.len());

    let filter = match category {
        Some(label) => CategoryFilter::Only(PoiCategory::parse(label)),
        None => CategoryFilter::All,
    };
    let session = AnalysisSession::with_filter(points, filter);

    if verbose {
        let mut counts: Vec<_> = session.store().category_counts().into_iter().collect();
        counts.sort_by_key(|(category, _)| category.label());
        for (category, count) in counts {
            println!("  {}: {}", category, count);
        }
    }

    let neighbors = session.find_nearest(lat, lon, k)?;

    println!(
        "\nTop {} nearest to ({:.4}, {:.4}):",
        neighbors.len(),
        lat,
        lon
    );
    for (rank, n) in neighbors.iter().enumerate() {
        println!(
            "  {}. {} [{}] - {:.0} m",
            rank + 1,
            n.poi.name,
            n.poi.category,
            n.distance_m
        );
    }

    // Frame for the result map: query point plus all markers.
    let mut marker_points: Vec<GeoPoint> = neighbors.iter().map(|n| n.poi.location).collect();
    marker_points.push(GeoPoint::new(lat, lon));
    let bounds = compute_bounds(&marker_points);
    println!(
        "\nMap frame: lat {:.4}..{:.4}, lon {:.4}..{:.4}",
        bounds.min_lat, bounds.max_lat, bounds.min_lng, bounds.max_lng
    );

    Ok(())
}

fn run_lulc(dataset: &PathBuf, from_year: u16, to_year: u16) -> greenreach::Result<()> {
    println!("\n{}", "=".repeat(60));
    println!("Loading change records from: {}", dataset.display());
    println!("{}", "=".repeat(60));

    let records = load_change_records(dataset)?;
    println!("Loaded {} records", records.len());

    let filter = ChangeFilter {
        years: (from_year, to_year),
        ..ChangeFilter::default()
    };
    let selected = filter.apply(&records);
    let annual = annual_conversion(&selected);
    let summary = summarize(&annual);

    println!("\nAnnual conversion to urban ({}-{}):", from_year, to_year);
    for entry in &annual {
        println!("  {}: {:8.2} km2", entry.year, entry.area_km2);
    }

    println!("\nTotal area converted: {:.2} km2", summary.total_area_km2);
    if let Some(peak) = summary.peak {
        println!("Peak year: {} ({:.2} km2)", peak.year, peak.area_km2);
    }

    Ok(())
}
