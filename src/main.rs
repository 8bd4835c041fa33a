//! treeshell - demo shell built on the treeshell library.

mod cli;

use std::path::PathBuf;

use anyhow::Context;
use cli::Cli;
use tracing::{error, info};
use treeshell::{logging, Application, CommandContext, CommandResult, Result, ShellConfig};

const SHELL_NAME: &str = "neo";

fn main() {
    let cli = Cli::parse_args();

    if cli.log_stderr {
        logging::init_stderr_logging();
    } else if let Err(e) = logging::init_file_logging(SHELL_NAME) {
        // stderr would garble the raw-mode prompt, so run without logs
        eprintln!("Warning: Could not open log file: {e}");
    }

    if let Err(e) = run(&cli) {
        error!("{}: {}", e.category(), e);
        eprintln!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let mut config = ShellConfig::load_from_file(&config_path)?;
    cli.apply_overrides(&mut config);

    let app = build_app(config, config_path)?;
    app.run()
}

/// Builds the demo shell with a few sample commands.
fn build_app(config: ShellConfig, config_path: PathBuf) -> Result<Application> {
    let mut app = Application::with_config(SHELL_NAME, config);

    app.register_command("print", "[msg]", "show error message", |_| {
        CommandResult::failure("test error")
    })?;

    app.register_command("config show", "", "print the active configuration", |ctx| {
        show_config(ctx).into()
    })?;

    app.register_command("config path", "", "print the config file location", move |ctx| {
        ctx.info(&config_path.display().to_string());
        CommandResult::Done
    })?;

    Ok(app)
}

fn show_config(ctx: &mut CommandContext<'_>) -> anyhow::Result<()> {
    let rendered =
        toml::to_string_pretty(ctx.app().config()).context("failed to serialize config")?;
    ctx.info(rendered.trim_end());
    Ok(())
}
