use clap::Parser;
use postboard::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli::prepare()?;

    match cli.command {
        Command::Schema(args) => cli::schema::run(&config, args).await,
        Command::User(args) => cli::user::run(&config, args).await,
        Command::Post(args) => cli::post::run(&config, args).await,
        Command::Demo => cli::demo::run(&config).await,
    }
}
