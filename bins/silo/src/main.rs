use anyhow::Context;
use silo_config::SiloConfig;
use silo_core::AlarmPolicy;
use silo_engine::InventoryEngine;
use tracing_subscriber::EnvFilter;

fn load_config() -> anyhow::Result<SiloConfig> {
    match std::env::args_os().nth(1) {
        Some(path) => SiloConfig::load(&path)
            .with_context(|| format!("loading config from {}", path.to_string_lossy())),
        None => Ok(SiloConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let config = load_config()?;

    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("invalid log_level '{}'", config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let policy = AlarmPolicy::default();
    tracing::info!(threshold = policy.threshold, "silo starting");

    let mut engine = InventoryEngine::new(policy);

    println!("Saisie : {}", config.input);
    engine
        .process_batch(&config.input)
        .context("processing input batch")?;

    for alarm in engine.alarms().entries() {
        println!("[LOG] {alarm}");
    }

    println!();
    print!("{}", engine.report());
    Ok(())
}
