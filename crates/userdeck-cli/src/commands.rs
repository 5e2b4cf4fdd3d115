use super::args::{Cli, Commands, ConfigCommand};
use super::context::ExecutionContext;
use super::handlers;
use super::logging::{self, LogTarget};
use anyhow::Result;
use userdeck_runtime::resolve_workspace_path;

pub const LOG_FILE: &str = "userdeck.log";

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir, cli.api_url, cli.input, cli.format);

    let target = match &cli.command {
        Some(Commands::Browse { .. }) if handlers::browse::can_use_tui(&ctx) => {
            LogTarget::File(ctx.data_dir().join(LOG_FILE))
        }
        _ => LogTarget::Stderr,
    };
    logging::init(cli.log_level, target)?;
    tracing::debug!(data_dir = %ctx.data_dir().display(), "starting");

    let Some(command) = cli.command else {
        return handlers::guidance::handle(&ctx);
    };

    match command {
        Commands::List { search, compact } => handlers::list::handle(&ctx, search, compact),

        Commands::Show {
            card,
            search,
            steps,
        } => handlers::show::handle(&ctx, card, search, steps),

        Commands::Export { output, search } => handlers::export::handle(&ctx, output, search),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx),
            ConfigCommand::Init { force } => handlers::config::init(&ctx, force),
        },

        Commands::Browse { search } => handlers::browse::handle(&ctx, search),
    }
}
