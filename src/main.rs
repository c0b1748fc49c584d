use clap::Parser;
use taskpulse::adapter::inbound::cli::command::{CheckCommand, Cli, Commands, ConfigCommand};
use taskpulse::adapter::inbound::cli::{check, config, output, paths, run};
use taskpulse::error::Result;
use tracing::error;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(output::OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    if let Err(e) = dispatch(cli.command).await {
        error!(error = %e, "Fatal error");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run(args) => run::execute(&args).await.map(|_| ()),
        Commands::Config(ConfigCommand::Init(args)) => {
            let path = args.path.unwrap_or_else(paths::default_config);
            config::execute_init(&path, args.force)
        }
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(args.config.as_deref()),
        Commands::Config(ConfigCommand::Validate(args)) => {
            config::execute_validate(args.config.as_deref())
        }
        Commands::Check(CheckCommand::Config(args)) => {
            check::execute_config(args.config.as_deref())
        }
        Commands::Check(CheckCommand::Telegram(args)) => {
            check::execute_telegram(args.config.as_deref()).await
        }
    }
}
