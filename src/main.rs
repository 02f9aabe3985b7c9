use clap::Parser;
use gentol::cli::{Cli, Commands, Settings};
use gentol::core::Config;
use miette::Result;

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    gentol::cli::logging::init(cli.global.verbose);

    let config = Config::load(cli.global.config.as_deref())?;
    let settings = Settings::resolve(&cli.global, &config)?;

    match cli.command {
        Commands::Calc(args) => gentol::cli::commands::calc::run(args, &settings),
        Commands::Batch(args) => gentol::cli::commands::batch::run(args, &settings),
        Commands::Table(args) => gentol::cli::commands::table::run(args, &settings),
    }
}
