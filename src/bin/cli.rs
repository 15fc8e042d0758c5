//! Black-76 CLI
//!
//! Command-line interface for pricing, implied volatility and listed-option
//! valuation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use black76_options::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "Black-76 pricing for options on futures")]
struct Args {
    /// Engine config file (JSON); defaults apply when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, default_value = "false")]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price and Greeks for one option
    Price {
        #[arg(long)]
        forward: f64,
        #[arg(long)]
        strike: f64,
        /// Years to expiry
        #[arg(long)]
        time: f64,
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
        #[arg(long)]
        vol: f64,
        /// Call or Put
        #[arg(long = "type", default_value = "call")]
        option_type: String,
    },
    /// Implied volatility from an observed premium
    ImpliedVol {
        #[arg(long)]
        forward: f64,
        #[arg(long)]
        strike: f64,
        #[arg(long)]
        time: f64,
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
        #[arg(long)]
        market_price: f64,
        #[arg(long = "type", default_value = "call")]
        option_type: String,
    },
    /// Present value of every listed option for a commodity
    ValueBook {
        /// JSON array of listings
        #[arg(long)]
        book: PathBuf,
        /// BRN or HH
        #[arg(long)]
        commodity: String,
        /// Futures price
        #[arg(long)]
        forward: f64,
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
        #[arg(long)]
        vol: f64,
        /// Valuation date (YYYY-MM-DD), today when omitted
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    match args.command {
        Command::Price {
            forward,
            strike,
            time,
            rate,
            vol,
            option_type,
        } => {
            let option_type = parse_option_type(&option_type)?;
            let result = black76_options::price(forward, strike, time, rate, vol, option_type)?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!(
                    "Black-76 {} F={:.4} K={:.4} T={:.4} r={:.4} vol={:.2}%",
                    option_type,
                    forward,
                    strike,
                    time,
                    rate,
                    vol * 100.0
                );
                println!("  Price: {:.6}", result.price);
                println!("  Delta: {:.6}", result.delta);
                println!("  Gamma: {:.6}", result.gamma);
                println!("  Vega:  {:.6} (per 1%: {:.6})", result.vega, result.vega_per_point());
                println!(
                    "  Theta: {:.6} (per day: {:.6})",
                    result.theta,
                    result.theta_per_day(config.valuation.day_count_basis)
                );
                println!("  Rho:   {:.6} (per bp: {:.6})", result.rho, result.rho_per_bp());
            }
        }
        Command::ImpliedVol {
            forward,
            strike,
            time,
            rate,
            market_price,
            option_type,
        } => {
            let option_type = parse_option_type(&option_type)?;
            let iv = black76_options::implied_volatility_with(
                forward,
                strike,
                time,
                rate,
                market_price,
                option_type,
                &config.solver,
            )?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&iv)?);
            } else {
                println!("Implied volatility: {:.4}%", iv.volatility * 100.0);
                println!(
                    "  {} iterations, residual {:.2e}, finished by {:?}",
                    iv.iterations, iv.residual, iv.method
                );
            }
        }
        Command::ValueBook {
            book,
            commodity,
            forward,
            rate,
            vol,
            as_of,
        } => {
            let as_of = as_of.unwrap_or_else(|| chrono::Utc::now().date_naive());
            let option_book = OptionBook::from_json_file(&book, as_of)
                .with_context(|| format!("loading option book {}", book.display()))?;
            let query = PvQuery {
                commodity: commodity.parse()?,
                interest_rate: rate,
                volatility: vol,
                forward,
            };
            let valued = value_book(&option_book, &query, as_of, &config.valuation)?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&valued)?);
            } else {
                println!("{} options as of {}", query.commodity, as_of);
                println!(
                    "{:>4} {:>8} {:>6} {:>10} {:>12} {:>10} {:>10}",
                    "Id", "Contract", "Type", "Strike", "Expiry", "PV", "Delta"
                );
                for v in &valued {
                    println!(
                        "{:>4} {:>8} {:>6} {:>10.2} {:>12} {:>10.2} {:>10.4}",
                        v.option.id,
                        v.option.expires_on,
                        v.option.option_type,
                        v.option.strike_price,
                        v.option.expiration_date,
                        v.pv,
                        v.pricing.delta
                    );
                }
            }
        }
    }

    Ok(())
}
