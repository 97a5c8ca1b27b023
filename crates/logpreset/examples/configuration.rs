use logpreset::prelude::*;

fn main() -> Result<()> {
    let logger = Configurator::new()
        .enable_stacktrace()
        .set_level(Level::Debug)
        .set_output_path("stderr")
        .set_output_paths(["stderr", "stdout"])
        .set_preset("light-console")
        .build()?;

    logger.in_scope(|| {
        info!(port = 8080, "Server starting");
        warn!(retry_count = 3, "Operation failed, retrying");
    });

    // Errors from several bad options are reported together
    let err = Configurator::new()
        .set_preset("fancy")
        .set_level_str("loud")
        .config()
        .expect_err("invalid options");
    logger.in_scope(|| error!(%err, "rejected configuration"));

    logger.set_level(Level::Warn)?;
    logger.in_scope(|| info!("suppressed after raising the level"));

    Ok(())
}
