use clap::Parser;
use color_eyre::eyre::Result;

use slide_countdown::{
    app::App,
    infrastructure::{cli::Cli, config::Config, tui::real::RealTui},
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let mut config = Config::new()?;
    config.countdown = Some(args.countdown(config.countdown()));
    if let Some(title) = args.title.clone() {
        config.slots.title = Some(title);
    }
    log::info!("starting with countdown {:?}", config.countdown);

    let mut tui = RealTui::new()?
        .tick_rate(args.tick_rate)
        .frame_rate(args.frame_rate);
    let mut app = App::new(config);
    app.run(&mut tui).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
