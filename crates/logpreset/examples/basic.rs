use logpreset::prelude::*;

fn main() {
    // An untouched configurator resolves to colorized text on stderr
    let logger = Configurator::new().must_build();
    logger.init().expect("no other global logger");

    info!("hello!");
    debug!(request_count = 42, "Debug information");
}
