use clap::Parser;
use fyyur::cli::{Cli, Commands, cmd_init_config};
use fyyur::{Config, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The file may not exist yet, so skip loading it
    if cli.command == Some(Commands::InitConfig) {
        return cmd_init_config(cli.config.as_deref());
    }

    let config = Config::load(cli.config.as_deref())?;
    let worker_threads = config.general.worker_threads;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();

    if worker_threads > 0 {
        builder.worker_threads(worker_threads);
    }

    let runtime = builder.build()?;
    runtime.block_on(run(cli.command, config))
}
