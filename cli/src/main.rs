mod app;
mod cli;
mod input;
mod logging;
mod transport;
mod view;

use clap::Parser;

use crate::cli::CliArgs;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::init(&args.log_level);
    app::run(args.config()).await
}
