use anyhow::{Context, Result};
use clap::Parser;

use dashboard_shell::cli::CliArgs;
use dashboard_shell::pointer::CountingHost;
use dashboard_shell::runtime::Shell;
use dashboard_shell::script::{Report, Script};

fn main() -> Result<()> {
    dashboard_shell::tracing::init();

    let args = CliArgs::parse();
    let config = args.load_config().map_err(anyhow::Error::msg)?;
    let store = args.layout_store().map_err(anyhow::Error::msg)?;
    let script = Script::load(&args.script).map_err(anyhow::Error::msg)?;

    let mut host = CountingHost::new();
    let report = {
        let mut shell = Shell::mount(&config, store, &mut host).context("failed to mount shell")?;
        script.run(&mut shell);
        let report = Report::from_model(shell.model());
        shell.teardown();
        report
    };

    if host.live_listeners() != 0 {
        tracing::warn!(live = host.live_listeners(), "pointer listeners leaked");
    }

    print!("{}", serde_yaml::to_string(&report)?);
    Ok(())
}
