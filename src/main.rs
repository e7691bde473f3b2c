use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tryrelease::check::check_for_update;
use tryrelease::release::GitHubReleases;
use tryrelease::{config, ui, version};

#[derive(clap::Parser)]
#[command(
    name = "tryrelease",
    about = "Check online whether a newer release is available"
)]
struct Args {
    #[arg(short, long, help = "Show version")]
    version: bool,

    #[arg(long, help = "Check online if new version is available")]
    check_version: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if args.version {
        ui::display_version(version::full_version());
        return Ok(());
    }

    if args.check_version {
        if let Err(e) = run_check(args.config.as_deref()) {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
        return Ok(());
    }

    ui::display_platform();
    Ok(())
}

fn run_check(config_path: Option<&str>) -> Result<()> {
    let config = config::load_config(config_path)?;
    let source = GitHubReleases::from_config(&config.api)?;
    let status = check_for_update(
        &source,
        &config.project.project(),
        version::short_version(),
    )?;
    ui::display_update_status(&status);
    Ok(())
}
