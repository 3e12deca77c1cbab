use anyhow::Result;
use tracing::info;

use rookery_console::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    info!(version = env!("CARGO_PKG_VERSION"), "rookery starting");
    Session::new().run()?;
    Ok(())
}
