//! Example: Basic Black-76 pricing
//!
//! Run with: cargo run --example basic_pricing

use black76_options::prelude::*;

fn main() {
    // Option on a futures contract
    let forward = 82.50;
    let strike = 85.0;
    let time = 0.25; // 3 months
    let rate = 0.05; // 5% discount rate
    let vol = 0.35; // 35% volatility

    println!("=== Black-76 Pricing ===\n");
    println!("Forward:  {:.2}", forward);
    println!("Strike:   {:.2}", strike);
    println!("Time:     {:.2} years ({:.0} days)", time, time * 365.0);
    println!("Rate:     {:.1}%", rate * 100.0);
    println!("Vol:      {:.1}%\n", vol * 100.0);

    let call = match black76_options::price(forward, strike, time, rate, vol, OptionType::Call) {
        Ok(result) => result,
        Err(e) => {
            println!("Could not price call: {}", e);
            return;
        }
    };
    let put = match black76_options::price(forward, strike, time, rate, vol, OptionType::Put) {
        Ok(result) => result,
        Err(e) => {
            println!("Could not price put: {}", e);
            return;
        }
    };
    println!("Call Price: {:.4}", call.price);
    println!("Put Price:  {:.4}", put.price);

    // Put-call parity on a forward: C - P = e^(-rT) (F - K)
    let parity_lhs = call.price - put.price;
    let parity_rhs = (-rate * time).exp() * (forward - strike);
    println!("\nPut-Call Parity Check:");
    println!("  C - P = {:.6}", parity_lhs);
    println!("  e^(-rT)(F - K) = {:.6}", parity_rhs);
    println!("  Difference: {:.2e}", (parity_lhs - parity_rhs).abs());

    println!("\n=== Greeks (Call) ===\n");
    println!("Delta:  {:.4}", call.delta);
    println!("Gamma:  {:.4}", call.gamma);
    println!("Theta:  {:.4} (per day: {:.4})", call.theta, call.theta_per_day(365.0));
    println!("Vega:   {:.4} (per 1%: {:.4})", call.vega, call.vega_per_point());
    println!("Rho:    {:.4}", call.rho);

    println!("\n=== Implied Volatility ===\n");
    let market_price = call.price + 0.50; // Simulated market price
    match black76_options::implied_volatility(forward, strike, time, rate, market_price, OptionType::Call) {
        Ok(iv) => println!(
            "Market price {:.4} implies vol: {:.2}% ({} iterations)",
            market_price,
            iv.volatility * 100.0,
            iv.iterations
        ),
        Err(e) => println!("Could not solve for IV: {}", e),
    }

    // A premium above the discounted forward is unreachable
    match black76_options::implied_volatility(forward, strike, time, rate, 200.0, OptionType::Call) {
        Ok(iv) => println!("Unexpected vol {:.4}", iv.volatility),
        Err(e) => println!("Premium 200.00 rejected: {}", e),
    }
}
