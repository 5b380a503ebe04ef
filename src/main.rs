use anyhow::Result;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Arg, ArgAction, CommandFactory, FromArgMatches, Parser, Subcommand};
use clap_complete::Shell;
use std::ffi::OsString;
use std::process::ExitCode;

use jdkenv::{
    Config, commands,
    ui::{ColorMode, Ui},
};

#[derive(Parser)]
#[command(name = "jdkenv")]
#[command(about = "Switch between installed JDKs through a stable JAVA_HOME symlink")]
#[command(version, disable_version_flag = true)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// When to use colors: always, auto, never
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log what jdkenv is doing to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the version store and print shell setup instructions
    Init,

    /// List installed versions, marking the active one
    #[command(visible_alias = "versions")]
    List,

    /// Make a version active (a unique part of its name is enough)
    #[command(visible_alias = "set")]
    Use {
        /// Full or partial version name
        name: Option<String>,
    },

    /// Print the active version
    #[command(visible_alias = "version")]
    Current,

    /// Run diagnostics on the jdkenv setup
    Doctor,

    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

/// Outcome of parsing the command line
enum Parsed {
    Run(Cli),
    /// The first argument names no subcommand
    UnknownCommand(String),
}

/// The full command, including `-v` as a short for `--version`
fn command() -> clap::Command {
    Cli::command().arg(
        Arg::new("version")
            .short('v')
            .long("version")
            .action(ArgAction::Version)
            .help("Print version"),
    )
}

fn parse_from<I, T>(args: I) -> Result<Parsed, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) if e.kind() == ErrorKind::InvalidSubcommand => {
            let name = match e.get(ContextKind::InvalidSubcommand) {
                Some(ContextValue::String(name)) => name.clone(),
                _ => return Err(e),
            };
            return Ok(Parsed::UnknownCommand(name));
        }
        Err(e) => return Err(e),
    };
    Cli::from_arg_matches(&matches).map(Parsed::Run)
}

fn run(command: Option<Commands>, ui: &Ui) -> Result<()> {
    let Some(command) = command else {
        self::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Init => commands::init(&Config::load()?, ui),
        Commands::List => commands::list(&Config::load()?, ui),
        Commands::Use { name } => commands::use_version(&Config::load()?, name.as_deref(), ui),
        Commands::Current => commands::current(&Config::load()?, ui),
        Commands::Doctor => commands::doctor(&Config::load()?, ui),
        Commands::Completions { shell } => {
            let mut cmd = self::command();
            clap_complete::generate(shell, &mut cmd, "jdkenv", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = match parse_from(std::env::args_os()) {
        Ok(Parsed::Run(cli)) => cli,
        Ok(Parsed::UnknownCommand(name)) => {
            println!("not found: {}", name);
            return ExitCode::SUCCESS;
        }
        Err(e) => e.exit(),
    };
    jdkenv::logging::init(cli.verbose);
    let ui = Ui::new(cli.color, cli.no_color);

    match run(cli.command, &ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.err(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
