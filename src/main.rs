use anyhow::Result;
use loss_minimizer::{config::AppConfig, loss, utils};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    utils::init_logging();

    let config = AppConfig::load()?;
    tracing::info!(
        len = config.prices.len(),
        strategy = ?config.strategy,
        output = ?config.output,
        "[INIT] loss-minimizer starting"
    );

    let outcome = loss::scan(&config.prices, config.strategy);
    match outcome.positions() {
        Some((buy, sell)) => {
            tracing::info!(buy, sell, loss = outcome.loss(), "[SCAN] minimal loss found")
        }
        None => tracing::info!("[SCAN] no buy/sell pair with a loss"),
    }

    println!("{}", utils::render_outcome(&outcome, config.output)?);
    Ok(())
}
