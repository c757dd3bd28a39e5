//! Planet Finder CLI
//!
//! Command-line interface over the planet catalog: tier/material/distance
//! search, material listings, catalog statistics, and icon mapping reports.
//! This binary is a thin adapter; all business logic lives in the library
//! crates so any other front end can reuse it unchanged.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::warn;

use planetfinder_catalog::CatalogLoader;
use planetfinder_catalog::logging::{self, TracingConfig};
use planetfinder_core::{Catalog, Exchange, Material, MaterialId};
use planetfinder_icons::{SpriteCoverage, material_symbol, planet_symbol};
use planetfinder_search::{FilterSpec, SearchEngine, SearchHit};

/// Planet Finder - catalog search and icon resolution tool
#[derive(Parser)]
#[command(name = "planetfinder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format for structured data
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Path to the catalog data file
    #[arg(short, long, global = true, default_value = "data.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Search for planets by tier, materials, and distance
    Search(SearchArgs),

    /// List materials available as filter options
    Materials(MaterialsArgs),

    /// Show catalog statistics
    Info(InfoArgs),

    /// Report icon symbol mappings, optionally against a sprite sheet
    Icons(IconsArgs),
}

#[derive(Args)]
struct SearchArgs {
    /// Tier to include (repeatable; defaults to all tiers)
    #[arg(short, long)]
    tier: Vec<u8>,

    /// Required material id (repeatable)
    #[arg(short, long)]
    material: Vec<u32>,

    /// Maximum distance from the exchange, in light-years
    #[arg(long)]
    max_ly: Option<f64>,

    /// Exchange X coordinate
    #[arg(long, default_value_t = Exchange::DEFAULT_X)]
    exchange_x: f64,

    /// Exchange Y coordinate
    #[arg(long, default_value_t = Exchange::DEFAULT_Y)]
    exchange_y: f64,

    /// Maximum results to show
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Args)]
struct MaterialsArgs {
    /// Include materials that occur on no planet
    #[arg(long)]
    all: bool,
}

#[derive(Args)]
struct InfoArgs {
    /// Show per-type planet breakdown
    #[arg(short = 'D', long)]
    detailed: bool,
}

#[derive(Args)]
struct IconsArgs {
    /// Sprite sheet SVG to check symbol coverage against
    #[arg(short, long)]
    sprite: Option<PathBuf>,
}

fn setup_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    logging::init_with_config(TracingConfig {
        default_level: default_level.to_string(),
        show_target: verbosity >= 2,
        show_thread_ids: false,
        show_file: verbosity >= 3,
        show_line_number: verbosity >= 3,
    });
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let loaded = CatalogLoader::new()
        .load_file(&cli.data)
        .with_context(|| format!("Failed to load catalog {}", cli.data.display()))?;
    if !loaded.warnings.is_empty() {
        warn!(
            warnings = loaded.warnings.len(),
            "Catalog has integrity warnings; lookups on dangling ids show as unknown"
        );
    }

    match cli.command {
        Commands::Search(args) => cmd_search(&loaded.catalog, args, cli.format),
        Commands::Materials(args) => cmd_materials(&loaded.catalog, args, cli.format),
        Commands::Info(args) => cmd_info(&loaded.catalog, args, cli.format),
        Commands::Icons(args) => cmd_icons(&loaded.catalog, args, cli.format),
    }
}

fn cmd_search(catalog: &Catalog, args: SearchArgs, format: OutputFormat) -> Result<()> {
    let mut filter = if args.tier.is_empty() {
        FilterSpec::all_tiers()
    } else {
        FilterSpec::new().with_tiers(args.tier.iter().copied())
    };
    filter = filter.with_materials(args.material.iter().copied().map(MaterialId::from));
    if let Some(max_ly) = args.max_ly {
        filter = filter.with_max_light_years(max_ly);
    }

    for &id in &filter.required_material_ids {
        if catalog.material(id).is_none() {
            warn!(material = %id, "Requested material is not in the catalog");
        }
    }

    let engine = SearchEngine::with_exchange(Exchange::new(args.exchange_x, args.exchange_y));
    let mut hits = engine.search(catalog, &filter)?;
    if let Some(limit) = args.limit {
        hits.truncate(limit);
    }

    match format {
        OutputFormat::Json => {
            let json_hits: Vec<_> = hits.iter().map(|h| hit_json(catalog, h)).collect();
            println!("{}", serde_json::to_string_pretty(&json_hits)?);
        }
        OutputFormat::Csv => {
            println!("id,name,system_id,type,tier,fertility,size,x,y,distance,light_years");
            for hit in &hits {
                let p = hit.planet;
                println!(
                    "{},{},{},{},{},{},{},{},{},{:.2},{:.2}",
                    p.id,
                    p.name,
                    p.system_id,
                    p.type_code,
                    p.tier,
                    p.fertility,
                    p.size,
                    p.x,
                    p.y,
                    hit.distance,
                    hit.light_years
                );
            }
        }
        OutputFormat::Text => {
            println!(
                "{:<24} {:>6} {:>6} {:>18} {:>5} {:>10} {:>8}",
                "Name", "ID", "Sys", "Type", "Tier", "Distance", "LY"
            );
            println!(
                "{:-<24} {:->6} {:->6} {:->18} {:->5} {:->10} {:->8}",
                "", "", "", "", "", "", ""
            );
            for hit in &hits {
                let p = hit.planet;
                println!(
                    "{:<24} {:>6} {:>6} {:>18} {:>5} {:>10.2} {:>8.2}",
                    p.name,
                    p.id.value(),
                    p.system_id.value(),
                    planet_symbol(p.type_code).symbol(),
                    p.tier,
                    hit.distance,
                    hit.light_years
                );
            }
            println!("\nFound {} planets", hits.len());
        }
    }

    Ok(())
}

fn hit_json(catalog: &Catalog, hit: &SearchHit<'_>) -> serde_json::Value {
    let p = hit.planet;
    let materials: Vec<_> = p
        .materials
        .iter()
        .map(|m| {
            serde_json::json!({
                "id": m.material_id,
                "name": catalog.material_name(m.material_id).unwrap_or("Unknown"),
                "abundance": m.abundance,
            })
        })
        .collect();

    serde_json::json!({
        "id": p.id,
        "name": p.name,
        "system_id": p.system_id,
        "type": p.type_code,
        "type_symbol": planet_symbol(p.type_code).symbol(),
        "tier": p.tier,
        "fertility": p.fertility,
        "size": p.size,
        "x": p.x,
        "y": p.y,
        "distance": hit.distance,
        "light_years": hit.light_years,
        "materials": materials,
    })
}

fn cmd_materials(catalog: &Catalog, args: MaterialsArgs, format: OutputFormat) -> Result<()> {
    let materials: Vec<&Material> = if args.all {
        catalog.materials.iter().collect()
    } else {
        catalog.filterable_materials()
    };

    match format {
        OutputFormat::Json => {
            let json: Vec<_> = materials
                .iter()
                .map(|m| {
                    serde_json::json!({
                        "id": m.id,
                        "name": m.name,
                        "symbol": material_symbol(m.id, &m.name),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Csv => {
            println!("id,name,symbol");
            for m in &materials {
                let symbol = material_symbol(m.id, &m.name).unwrap_or_default();
                println!("{},{},{}", m.id, m.name, symbol);
            }
        }
        OutputFormat::Text => {
            println!("{:<6} {:<36} {}", "ID", "Name", "Symbol");
            println!("{:-<6} {:-<36} {:-<30}", "", "", "");
            for m in &materials {
                let symbol =
                    material_symbol(m.id, &m.name).unwrap_or_else(|| "(no icon)".to_string());
                println!("{:<6} {:<36} {}", m.id.value(), m.name, symbol);
            }
            println!("\n{} materials", materials.len());
        }
    }

    Ok(())
}

fn cmd_info(catalog: &Catalog, args: InfoArgs, format: OutputFormat) -> Result<()> {
    let stats = catalog.statistics();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        _ => {
            println!("Catalog statistics:");
            println!("  Systems:              {}", stats.system_count);
            println!("  Planets:              {}", stats.planet_count);
            println!("  Materials:            {}", stats.material_count);
            println!("  Filterable materials: {}", stats.filterable_material_count);

            println!("\nPlanets per tier:");
            for (tier, count) in &stats.planets_per_tier {
                println!("  Tier {}: {:>6}", tier, count);
            }

            if args.detailed {
                println!("\nPlanets per type:");
                for (code, count) in &stats.planets_per_type {
                    println!(
                        "  {:>3} {:<20} {:>6}",
                        code,
                        planet_symbol(*code).symbol(),
                        count
                    );
                }
            }
        }
    }

    Ok(())
}

fn cmd_icons(catalog: &Catalog, args: IconsArgs, format: OutputFormat) -> Result<()> {
    match args.sprite {
        Some(sprite_path) => {
            let svg = fs::read_to_string(&sprite_path).with_context(|| {
                format!("Failed to read sprite sheet {}", sprite_path.display())
            })?;
            let coverage = SpriteCoverage::of(catalog, &svg);
            print_coverage(&coverage, format)
        }
        None => cmd_materials(catalog, MaterialsArgs { all: true }, format),
    }
}

fn print_coverage(coverage: &SpriteCoverage, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "materials_checked": coverage.material_count(),
                "resolved": coverage.resolved.len(),
                "missing": coverage.missing.iter()
                    .map(|(id, symbol)| serde_json::json!({"id": id, "symbol": symbol}))
                    .collect::<Vec<_>>(),
                "iconless": coverage.iconless,
                "planet_types_resolved": coverage.planet_resolved.len(),
                "planet_types_missing": coverage.planet_missing.iter()
                    .map(|(code, symbol)| serde_json::json!({"type": code, "symbol": symbol}))
                    .collect::<Vec<_>>(),
                "unused_symbols": coverage.unused_symbols,
                "complete": coverage.is_complete(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Csv => {
            println!("kind,id,symbol,status");
            for (id, symbol) in &coverage.resolved {
                println!("material,{},{},resolved", id, symbol);
            }
            for (id, symbol) in &coverage.missing {
                println!("material,{},{},missing", id, symbol);
            }
            for id in &coverage.iconless {
                println!("material,{},,iconless", id);
            }
            for (code, symbol) in &coverage.planet_resolved {
                println!("planet_type,{},{},resolved", code, symbol);
            }
            for (code, symbol) in &coverage.planet_missing {
                println!("planet_type,{},{},missing", code, symbol);
            }
        }
        OutputFormat::Text => {
            println!("Sprite coverage:");
            println!("  Materials checked:     {}", coverage.material_count());
            println!("  Resolved:              {}", coverage.resolved.len());
            println!("  Missing from sheet:    {}", coverage.missing.len());
            println!("  Explicitly icon-less:  {}", coverage.iconless.len());
            println!("  Planet types resolved: {}", coverage.planet_resolved.len());
            println!("  Planet types missing:  {}", coverage.planet_missing.len());
            println!("  Unused sheet symbols:  {}", coverage.unused_symbols.len());

            if !coverage.missing.is_empty() {
                println!("\nMaterials without a sheet symbol:");
                for (id, symbol) in &coverage.missing {
                    println!("  {:<6} -> {}", id.value(), symbol);
                }
            }

            if !coverage.planet_missing.is_empty() {
                println!("\nPlanet types without a sheet symbol:");
                for (code, symbol) in &coverage.planet_missing {
                    println!("  {:<6} -> {}", code, symbol);
                }
            }

            if !coverage.unused_symbols.is_empty() {
                println!("\nUnused sheet symbols:");
                for symbol in &coverage.unused_symbols {
                    println!("  {}", symbol);
                }
            }
        }
    }

    Ok(())
}
