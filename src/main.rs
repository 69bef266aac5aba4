// src/main.rs

use clap::Parser;
use std::path::PathBuf;
use std::process;

use stock_optimizer::chart::series;
use stock_optimizer::io::reporting;
use stock_optimizer::{
    compute_costs, compute_safety_stock, seed_target_service_level, solve_service_level, sweep,
    CostInputs, LogisticsInputs, SafetyStockInputs, DEFAULT_MULTIPLIERS,
};

/// Economic service-level and safety-stock calculator.
///
/// Defaults reproduce the sample product scenario: 10/30 pricing, 1.5x
/// shortage multiplier, 100 units per pallet, 15% WACC, 30-day cycle,
/// 45-day lead time, weekly review, 10 units/day demand, 40% WMAPE.
#[derive(Debug, Parser)]
#[command(name = "stock-optimizer", version, about)]
struct Cli {
    /// SKU name shown in the report header.
    #[arg(long, default_value = "Sample Product")]
    sku: String,

    /// Purchase price per unit.
    #[arg(long, default_value_t = 10.0)]
    purchase_price: f64,

    /// Sale price per unit.
    #[arg(long, default_value_t = 30.0)]
    sale_price: f64,

    /// Shortage-cost multiplier: 1.0 = margin only, 2.0+ = reputation damage.
    /// Clamped to [1.0, 5.0].
    #[arg(long, default_value_t = 1.5)]
    shortage_multiplier: f64,

    /// Units stored per pallet.
    #[arg(long, default_value_t = 100)]
    units_per_pallet: u32,

    /// Storage cost of one pallet per day.
    #[arg(long, default_value_t = 1.0)]
    pallet_cost_per_day: f64,

    /// Annual cost of capital (WACC), in percent.
    #[arg(long, default_value_t = 15.0)]
    capital_rate_pct: f64,

    /// Average stock rotation cycle, in days.
    #[arg(long, default_value_t = 30)]
    cycle_days: u32,

    /// Operational service-level target in percent. Defaults to the
    /// economically optimal level, clamped to [50, 99.9].
    #[arg(long)]
    target_service_level_pct: Option<f64>,

    /// Days from order to delivery.
    #[arg(long, default_value_t = 45)]
    lead_time_days: u32,

    /// Days between orders.
    #[arg(long, default_value_t = 7)]
    review_period_days: u32,

    /// Average units sold per day.
    #[arg(long, default_value_t = 10.0)]
    avg_daily_demand: f64,

    /// Forecast error (WMAPE), in percent.
    #[arg(long, default_value_t = 40.0)]
    wmape_pct: f64,

    /// Directory to write scenario_table.csv, distribution.csv and
    /// stock_structure.csv into.
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // 1. ASSEMBLE AND VALIDATE INPUTS
    let cost_inputs = CostInputs {
        purchase_price: cli.purchase_price,
        sale_price: cli.sale_price,
        shortage_multiplier: cli.shortage_multiplier.clamp(1.0, 5.0),
    };
    let logistics = LogisticsInputs {
        units_per_pallet: cli.units_per_pallet,
        pallet_cost_per_day: cli.pallet_cost_per_day,
        capital_rate: cli.capital_rate_pct / 100.0,
        cycle_days: cli.cycle_days,
    };
    if let Err(e) = cost_inputs.validate().and_then(|_| logistics.validate()) {
        eprintln!("Invalid input: {e}");
        process::exit(1);
    }

    println!("=== Inventory Optimization: {} ===", cli.sku);

    // 2. ECONOMICS: SHORTAGE COST vs HOLDING COST
    let costs = compute_costs(&cost_inputs, &logistics);
    println!("\n--- Economics ---");
    println!(
        "Shortage cost X:      {:>8.2}  (margin {:.2} x multiplier {})",
        costs.shortage_cost, costs.unit_margin, cost_inputs.shortage_multiplier
    );
    println!(
        "Holding cost Y:       {:>8.2}  over {} days (space {:.2} + capital {:.2})",
        costs.holding_cost_cycle,
        logistics.cycle_days,
        costs.space_cost_per_day * logistics.cycle_days as f64,
        costs.capital_cost_per_day * logistics.cycle_days as f64
    );

    // 3. OPTIMAL SERVICE LEVEL
    let optimal = solve_service_level(costs.shortage_cost, costs.holding_cost_cycle);
    println!(
        "Optimal service level: {:>6.2}%  (Z = {:.2})",
        optimal.service_level * 100.0,
        optimal.z_score
    );
    println!(
        "Strategy: {} - {}",
        optimal.strategy.label().to_uppercase(),
        optimal.strategy.guidance()
    );

    // 4. MULTIPLIER SCENARIO TABLE
    let scenario_table = sweep(
        costs.unit_margin,
        costs.holding_cost_cycle,
        &DEFAULT_MULTIPLIERS,
    );
    println!("\n--- Multiplier scenarios ---");
    for row in &scenario_table {
        println!(
            "  {:.1}x  ->  SL {:>6.2}%",
            row.multiplier,
            row.service_level * 100.0
        );
    }

    // 5. OPERATIONS: SAFETY STOCK FOR THE CHOSEN TARGET
    let target_service_level = match cli.target_service_level_pct {
        Some(pct) => pct.clamp(50.0, 99.9) / 100.0,
        None => seed_target_service_level(optimal.service_level),
    };
    let ss_inputs = SafetyStockInputs {
        target_service_level,
        lead_time_days: cli.lead_time_days,
        review_period_days: cli.review_period_days,
        avg_daily_demand: cli.avg_daily_demand,
        wmape: cli.wmape_pct / 100.0,
    };
    if let Err(e) = ss_inputs.validate() {
        eprintln!("Invalid input: {e}");
        process::exit(1);
    }
    let safety = compute_safety_stock(&ss_inputs);

    println!(
        "\n--- Safety stock (target SL {:.2}%) ---",
        target_service_level * 100.0
    );
    println!(
        "Daily sigma:      {:>8.1} units   Risk period (L+T): {} days",
        safety.sigma_daily, safety.risk_period_days
    );
    println!(
        "Safety stock:     {:>8} units   (exact: {:.2}, Z = {:.2})",
        safety.safety_stock_units, safety.safety_stock, safety.z_score
    );
    println!("Cycle stock:      {:>8.0} units", safety.cycle_stock);
    println!("Reorder point:    {:>8} units", safety.reorder_point);

    // 6. OPTIONAL CSV EXPORT OF TABLE AND CHART SERIES
    if let Some(dir) = cli.export_dir {
        let curve = series::density_curve(series::DEFAULT_SAMPLES);
        let bars = series::stock_structure(safety.cycle_stock, safety.safety_stock);

        let result =
            reporting::write_scenario_table(&dir.join("scenario_table.csv"), &scenario_table)
                .and_then(|_| {
                    reporting::write_distribution(
                        &dir.join("distribution.csv"),
                        &curve,
                        optimal.z_score,
                    )
                })
                .and_then(|_| {
                    reporting::write_stock_structure(&dir.join("stock_structure.csv"), &bars)
                });

        match result {
            Ok(_) => println!("\nExport complete."),
            Err(e) => {
                eprintln!("Error writing CSV: {e}");
                process::exit(1);
            }
        }
    }
}
