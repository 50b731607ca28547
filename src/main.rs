use clap::Parser;
use miette::Result;
use txtshade::cli::{Cli, Commands};
use txtshade::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Render(args) => txtshade::cli::render::run(args, &printer)?,
        Commands::Info(args) => txtshade::cli::info::run(args)?,
        Commands::Init(args) => txtshade::cli::init::run(args, &printer)?,
        Commands::Completions(args) => txtshade::cli::completions::run(args)?,
    }

    Ok(())
}
