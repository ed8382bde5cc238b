//! Clap argument types and config overrides.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use users_list::config::Config;
use users_list::constants;
use users_list::models::HeadingLevel;
use users_list::output::OutputFormat;
use users_list::snapshot::UpdateMode;

/// Render user lists to HTML, JSON or the terminal, and check them against
/// stored snapshots.
#[derive(Parser, Debug)]
#[command(name = "users-list", version = users_list::constants::VERSION)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG`
    /// takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Render a user list payload.
    Render(RenderArgs),

    /// Render a user list payload and compare it with a stored snapshot.
    Snapshot(SnapshotArgs),

    /// Print the JSON schema of the accepted user list.
    Schema,

    /// Print version and build information.
    Version,
}

/// Flags shared by every command that renders.
#[derive(clap::Args, Debug, Default)]
pub struct RenderFlags {
    /// Heading element used for each row.
    #[arg(long, value_enum)]
    pub heading: Option<HeadingLevel>,

    /// Class attribute of each row.
    #[arg(long)]
    pub row_class: Option<String>,

    /// Class attribute of the container.
    #[arg(long)]
    pub container_class: Option<String>,

    /// Spaces per nesting level in HTML output (0 = compact, at most 16).
    #[arg(long, value_parser = parse_indent)]
    pub indent: Option<usize>,
}

fn parse_indent(value: &str) -> Result<usize, String> {
    let indent: usize = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if indent > constants::MAX_INDENT {
        return Err(format!("must be at most {}", constants::MAX_INDENT));
    }
    Ok(indent)
}

impl RenderFlags {
    /// Apply CLI flags on top of the loaded config (highest priority).
    pub fn apply(&self, config: &mut Config) {
        if let Some(heading) = self.heading {
            config.render.heading = heading;
        }
        if let Some(ref class) = self.row_class {
            config.render.row_class = class.clone();
        }
        if let Some(ref class) = self.container_class {
            config.render.container_class = Some(class.clone());
        }
        if let Some(indent) = self.indent {
            config.output.indent = indent;
        }
    }
}

/// Arguments for the `render` subcommand.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// JSON payload file. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub flags: RenderFlags,
}

/// Arguments for the `snapshot` subcommand.
#[derive(Parser, Debug)]
pub struct SnapshotArgs {
    /// Snapshot name (letters, digits, `_`, `-`, `.`).
    pub name: String,

    /// JSON payload file. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Directory holding snapshot files.
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Overwrite the stored snapshot when it differs.
    #[arg(long, default_value_t = false)]
    pub update: bool,

    #[command(flatten)]
    pub flags: RenderFlags,
}

impl SnapshotArgs {
    /// Apply snapshot and render flags on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        self.flags.apply(config);
        if let Some(ref dir) = self.dir {
            config.snapshot.dir = dir.clone();
        }
        if self.update {
            config.snapshot.update = UpdateMode::Always;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_render_with_flags() {
        let cli = Cli::parse_from([
            "users-list",
            "-vv",
            "render",
            "users.json",
            "--format",
            "json",
            "--heading",
            "h2",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Render(args) => {
                assert_eq!(args.input, Some(PathBuf::from("users.json")));
                assert_eq!(args.format, Some(OutputFormat::Json));
                assert_eq!(args.flags.heading, Some(HeadingLevel::H2));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn render_flags_override_config() {
        let flags = RenderFlags {
            heading: Some(HeadingLevel::H1),
            row_class: Some("row".into()),
            container_class: Some("list".into()),
            indent: Some(0),
        };
        let mut config = Config::default();
        flags.apply(&mut config);
        assert_eq!(config.render.heading, HeadingLevel::H1);
        assert_eq!(config.render.row_class, "row");
        assert_eq!(config.render.container_class.as_deref(), Some("list"));
        assert_eq!(config.output.indent, 0);
    }

    #[test]
    fn empty_flags_leave_config_alone() {
        let mut config = Config::default();
        RenderFlags::default().apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn snapshot_update_flag_forces_always() {
        let cli = Cli::parse_from(["users-list", "snapshot", "users", "--update", "--dir", "golden"]);
        let Command::Snapshot(args) = cli.command else {
            panic!("expected snapshot command");
        };
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config.snapshot.update, UpdateMode::Always);
        assert_eq!(config.snapshot.dir, PathBuf::from("golden"));
    }

    #[test]
    fn indent_flag_is_bounded() {
        let cli = Cli::parse_from(["users-list", "render", "--indent", "16"]);
        let Command::Render(args) = cli.command else {
            panic!("expected render command");
        };
        assert_eq!(args.flags.indent, Some(16));

        let err = Cli::try_parse_from(["users-list", "render", "--indent", "17"]).unwrap_err();
        assert!(err.to_string().contains("at most 16"));
        assert!(Cli::try_parse_from(["users-list", "render", "--indent", "wide"]).is_err());
    }
}
