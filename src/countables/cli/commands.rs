use super::print::{print_messages, render_countables, render_json};
use super::setup::{Cli, Commands};
use clap::Parser;
use colored::Colorize;
use countables::api::{CmdResult, ConfigAction};
use countables::config::CountablesConfig;
use countables::error::Result;
use countables::init::{initialize, CountablesContext};
use countables::logging::init_tracing;

/// `Ok(true)` means the request was refused (validation message already shown).
type Refused = bool;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = initialize(cli.data_dir.as_deref())?;

    let outcome = dispatch(&mut ctx, cli.command);

    // Saves run in the background; make sure they land before we exit.
    ctx.api.gateway().flush();
    if let Some(err) = ctx.api.gateway().last_error() {
        eprintln!("{}", format!("Warning: changes could not be saved: {}", err).yellow());
    }

    if outcome? {
        drop(ctx);
        std::process::exit(1);
    }
    Ok(())
}

fn dispatch(ctx: &mut CountablesContext, command: Option<Commands>) -> Result<Refused> {
    match command {
        Some(Commands::List { json }) => handle_list(ctx, json),
        Some(Commands::Add { name }) => finish(ctx.api.add(&name.join(" "))?),
        Some(Commands::Remove { name }) => finish(ctx.api.remove(&name)?),
        Some(Commands::Rename { old, new }) => finish(ctx.api.rename(&old, &new)?),
        Some(Commands::Inc { name, by }) => finish(ctx.api.increment(&name, by)?),
        Some(Commands::Dec { name, by }) => finish(ctx.api.decrement(&name, by)?),
        Some(Commands::Path) => handle_path(ctx),
        Some(Commands::Config { key, value }) => handle_config(ctx, key, value),
        Some(Commands::Init) => finish(ctx.api.init()?),
        None => handle_list(ctx, false),
    }
}

fn finish(result: CmdResult) -> Result<Refused> {
    print_messages(&result.messages);
    Ok(result.has_errors())
}

fn handle_list(ctx: &CountablesContext, json: bool) -> Result<Refused> {
    let result = ctx.api.list()?;
    if json {
        println!("{}", render_json(&result.listed)?);
        return Ok(false);
    }
    print!("{}", render_countables(&result.listed));
    finish(result)
}

fn handle_path(ctx: &CountablesContext) -> Result<Refused> {
    let result = ctx.api.data_paths()?;
    for path in &result.paths {
        println!("{}", path.display());
    }
    finish(result)
}

fn handle_config(
    ctx: &CountablesContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<Refused> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        for key in CountablesConfig::KEYS {
            println!("{} = {}", key, config.get(key).unwrap_or_default());
        }
    }
    finish(result)
}
