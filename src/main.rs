//! users-list: render user lists and check them against snapshots.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use users_list::components::UsersList;
use users_list::config::Config;
use users_list::constants;
use users_list::env::Env;
use users_list::models::{self, User};
use users_list::output::OutputFormat;
use users_list::snapshot::SnapshotStore;
use users_list::ui::Component;

use cli::args::{Cli, Command, RenderArgs, SnapshotArgs};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    match cli.command {
        Command::Render(args) => run_render(args),
        Command::Snapshot(args) => run_snapshot(args),
        Command::Schema => run_schema(),
        Command::Version => run_version(),
    }
}

fn load_config() -> Result<Config> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    Config::load(Some(&cwd), &Env::real()).context("failed to load configuration")
}

fn load_users(input: Option<&std::path::Path>) -> Result<Vec<User>> {
    let payload = cli::read_input(input)?;
    models::parse_users(&payload).context("failed to decode user list")
}

/// Render a payload in the configured format and print it.
fn run_render(args: RenderArgs) -> Result<()> {
    let mut config = load_config()?;
    args.flags.apply(&mut config);
    if let Some(format) = args.format {
        config.output.format = format;
    }

    let users = load_users(args.input.as_deref())?;
    let tree = UsersList::new(&users).with_config(&config.render).render();
    print!("{}", config.output.format.render(&tree, config.output.indent));
    Ok(())
}

/// Render a payload as HTML and compare it with the stored snapshot.
fn run_snapshot(args: SnapshotArgs) -> Result<()> {
    let mut config = load_config()?;
    args.apply(&mut config);

    let users = load_users(args.input.as_deref())?;
    let tree = UsersList::new(&users).with_config(&config.render).render();
    let rendered = OutputFormat::Html.render(&tree, config.output.indent);

    let store = SnapshotStore::new(config.snapshot.dir.clone(), config.snapshot.update);
    let outcome = store.check(&args.name, &rendered)?;
    let path = store.path_for(&args.name)?;
    println!(
        "{} snapshot '{}' {} ({})",
        "✔".green().bold(),
        args.name.bold(),
        outcome,
        path.display().to_string().dimmed(),
    );
    Ok(())
}

/// Print the JSON schema of the user list payload.
fn run_schema() -> Result<()> {
    let schema = schemars::schema_for!(Vec<User>);
    let json = serde_json::to_string_pretty(&schema).context("failed to serialize schema")?;
    println!("{json}");
    Ok(())
}

/// Print version and build information.
fn run_version() -> Result<()> {
    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}
