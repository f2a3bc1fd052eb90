use devpages::config::Config;
use devpages::{logger, server};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let site = Arc::new(cfg.site()?);

    // Bind failure (port already in use) propagates and ends the process
    let listener = server::bind_listener(addr)?;

    logger::log_server_start(&listener.local_addr()?);

    server::run(listener, site, cfg.logging.access_log).await?;
    Ok(())
}
