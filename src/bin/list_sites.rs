use clap::Parser;
use site_probe::utils::logger;
use site_probe::{ErrorPolicy, ProbeRunner, SiteLister, SiteListerArgs};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = SiteListerArgs::parse();

    logger::init_cli_logger(args.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Configuration, request and parse errors are all printed; the exit code stays 0.
    let settings = match args.settings() {
        Ok(settings) => settings,
        Err(e) => {
            ErrorPolicy::Report.handle(e, &mut out)?;
            return Ok(());
        }
    };

    let runner = ProbeRunner::new(SiteLister::new(settings), ErrorPolicy::Report);
    runner.run(&mut out).await?;

    Ok(())
}
