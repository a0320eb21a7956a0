//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_report_adapter::JsonReportAdapter;
use crate::domain::config_validation::load_params;
use crate::domain::engine::{BacktestOutcome, run_backtest};
use crate::domain::error::AlphariseError;
use crate::domain::params::SimulationParams;
use crate::domain::recommendation::Recommendation;
use crate::domain::zone::Zone;
use crate::ports::data_port::MarketDataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "alpharise", about = "Variable-rate DCA strategy backtester")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Backtest the variable policy against its two benchmarks
    Backtest {
        #[arg(short, long)]
        config: PathBuf,
        /// Enriched market data CSV (date,price,cbbi,ema20,ema50,ema100)
        #[arg(short, long)]
        data: PathBuf,
        /// Write a full JSON report here
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        end: Option<NaiveDate>,
    },
    /// Print today's suggested action from the latest data
    Recommend {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        data: PathBuf,
    },
    /// Validate a strategy configuration
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Show date range and row count of a data file
    Info {
        #[arg(short, long)]
        data: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Backtest {
            config,
            data,
            output,
            start,
            end,
        } => run_backtest_command(&config, &data, output.as_deref(), start, end),
        Command::Recommend { config, data } => run_recommend(&config, &data),
        Command::Validate { config } => run_validate(&config),
        Command::Info { data } => run_info(&data),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(&err)
        }
    }
}

pub fn load_config(path: &std::path::Path) -> Result<SimulationParams, AlphariseError> {
    let adapter = FileConfigAdapter::from_file(path).map_err(|e| AlphariseError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })?;
    load_params(&adapter)
}

pub fn load_series(
    path: &std::path::Path,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<Vec<crate::domain::market_day::MarketDay>, AlphariseError> {
    let adapter = CsvAdapter::new(path);
    let series = adapter.fetch_series(start, end)?;
    if series.is_empty() {
        return Err(AlphariseError::NoData {
            path: path.display().to_string(),
        });
    }
    Ok(series)
}

fn run_backtest_command(
    config_path: &std::path::Path,
    data_path: &std::path::Path,
    output: Option<&std::path::Path>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<(), AlphariseError> {
    let params = load_config(config_path)?;
    let series = load_series(data_path, start, end)?;
    if series.len() < 2 {
        return Err(AlphariseError::InsufficientData {
            rows: series.len(),
            minimum: 2,
        });
    }

    let outcome = run_backtest(&series, &params).ok_or_else(|| AlphariseError::NoData {
        path: data_path.display().to_string(),
    })?;

    print_summary(&outcome, series.len());

    if let Some(path) = output {
        JsonReportAdapter.write(&outcome, &params, &path.display().to_string())?;
        println!("\nreport written to {}", path.display());
    }

    Ok(())
}

fn print_summary(outcome: &BacktestOutcome, num_days: usize) {
    println!("{num_days} days simulated");
    println!(
        "zones: {} accumulate / {} neutral / {} reduce",
        outcome.zone_counts.accumulation, outcome.zone_counts.neutral, outcome.zone_counts.reduction
    );
    println!();
    println!(
        "{:<14} {:>14} {:>12} {:>10} {:>10} {:>10}",
        "strategy", "final value", "contributed", "sharpe", "sortino", "annual"
    );
    for (name, run) in [
        ("variable DCA", &outcome.variable),
        ("matched DCA", &outcome.baseline),
        ("lump sum", &outcome.lump_sum),
    ] {
        let final_value = run.state.value_history.last().copied().unwrap_or(0.0);
        println!(
            "{:<14} {:>14.2} {:>12.2} {:>10.3} {:>10.3} {:>9.2}%",
            name,
            final_value,
            run.state.contributed_capital,
            run.metrics.sharpe,
            run.metrics.sortino,
            run.metrics.annualized_return * 100.0,
        );
    }
    println!();
    print_recommendation(&outcome.recommendation);
}

fn print_recommendation(rec: &Recommendation) {
    println!(
        "{}: {} (sentiment {} / tier {}) at {:.2}",
        rec.date, rec.zone, rec.sentiment, rec.tier, rec.price
    );
    match rec.zone {
        Zone::Accumulation => println!(
            "  buy {:.2} ({:.2} fresh + {:.2} from reserve)",
            rec.plan.total_buy, rec.plan.fresh_input, rec.plan.drain_amount
        ),
        Zone::Neutral => println!("  buy {:.2}", rec.plan.total_buy),
        Zone::Reduction => {
            println!(
                "  buy {:.2}, sell {:.6} units, bank {:.2} to reserve",
                rec.plan.total_buy, rec.sell_units, rec.plan.banked
            );
        }
    }
    println!(
        "  reserve {:.2} (interest earned {:.2})",
        rec.cash_reserve, rec.interest_accrued
    );
}

fn run_recommend(
    config_path: &std::path::Path,
    data_path: &std::path::Path,
) -> Result<(), AlphariseError> {
    let params = load_config(config_path)?;
    let series = load_series(data_path, None, None)?;

    let outcome = run_backtest(&series, &params).ok_or_else(|| AlphariseError::NoData {
        path: data_path.display().to_string(),
    })?;

    print_recommendation(&outcome.recommendation);
    Ok(())
}

fn run_validate(config_path: &std::path::Path) -> Result<(), AlphariseError> {
    let params = load_config(config_path)?;
    println!("config ok");
    println!(
        "  initial_capital={} base_dca={} t1={} t3={} f1={} f3={} sell_factor={}",
        params.initial_capital,
        params.base_dca,
        params.t1,
        params.t3,
        params.f1,
        params.f3,
        params.sell_factor
    );
    if params.t1 >= params.t3 {
        println!("  warning: t1 >= t3, accumulation takes precedence on overlap");
    }
    Ok(())
}

fn run_info(data_path: &std::path::Path) -> Result<(), AlphariseError> {
    let adapter = CsvAdapter::new(data_path);
    match adapter.data_range()? {
        Some((first, last, rows)) => {
            println!("{}: {rows} rows, {first} to {last}", data_path.display());
        }
        None => println!("{}: no rows", data_path.display()),
    }
    Ok(())
}
