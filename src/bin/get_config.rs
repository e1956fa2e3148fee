use clap::Parser;
use site_probe::utils::logger;
use site_probe::{ConfigFetcher, ConfigFetcherArgs, ErrorPolicy, ProbeRunner};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = ConfigFetcherArgs::parse();

    logger::init_cli_logger(args.verbose);

    let settings = match args.settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    if args.verbose {
        tracing::debug!("Resolved settings: {:?}", settings);
    }

    // Transport failures are not caught here: they end the process with a non-zero code.
    let runner = ProbeRunner::new(ConfigFetcher::new(settings), ErrorPolicy::Propagate);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runner.run(&mut out).await?;

    Ok(())
}
