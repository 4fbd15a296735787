use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand, ValueEnum};
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// Commands that need the component registry before their action runs.
pub const REGISTRY_COMMANDS: [&str; 7] = ["add", "env", "init", "list", "upgrade", "doctor", "remove"];

/// Multi-character short options and the long options they stand for.
const SHORT_ALIASES: [(&str, &str); 5] = [
    ("-tw", "--tailwindPath"),
    ("-app", "--appPath"),
    ("-ca", "--checkApp"),
    ("-ct", "--checkTailwind"),
    ("-cp", "--checkPnpm"),
];

/// Top-level options that are understood before the subcommand.
const GLOBAL_FLAGS: [&str; 4] = ["-h", "--help", "-v", "--version"];

/// Dx/Ui CLI
#[derive(Parser, Debug)]
#[command(
    name = "ui",
    author,
    version,
    about = concat!(
        "Dx/Ui(v",
        env!("CARGO_PKG_VERSION"),
        "): Streamline UI Development with a CLI Tool for Efficient Component Integration"
    ),
    override_usage = "ui [command]",
    disable_version_flag = true
)]
pub struct Cli {
    /// Output the current version
    #[allow(dead_code)]
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Suggests you about what ui component is best for your job and ai chat...
    Suggest(AddArgs),

    /// Explains you what course of actions you should take to solve your ui problems...
    Explain(AddArgs),

    /// Creates A new project using any frontend frameworks
    Create(AddArgs),

    /// Initializes a new project
    Init(InitArgs),

    /// Adds components to your project
    Add(AddArgs),

    /// Removes components from the project
    Remove(RemoveArgs),

    /// Upgrades project components to the latest versions
    #[command(alias = "update")]
    Upgrade(UpgradeArgs),

    /// Lists all components, showing status, descriptions, and versions
    List(ListArgs),

    /// Displays debugging information for the local environment
    Env(EnvArgs),

    /// Checks for issues in the project
    Doctor(DoctorArgs),
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct AddArgs {
    /// Names of components to add
    #[arg(value_name = "COMPONENTS")]
    pub components: Vec<String>,

    /// Add all components
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub all: bool,

    /// Specify the path to the package.json file
    #[arg(short = 'p', long = "packagePath")]
    pub package_path: Option<PathBuf>,

    /// Specify the path to the tailwind.config.js file (also -tw)
    #[arg(long = "tailwindPath")]
    pub tailwind_path: Option<PathBuf>,

    /// Specify the path to the App.tsx file (also -app)
    #[arg(long = "appPath")]
    pub app_path: Option<PathBuf>,

    /// Accepted for compatibility; package.json is always written pretty-printed, so this has no effect
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub prettier: bool,

    /// Include App.tsx file content that requires a provider
    #[arg(
        long = "addApp",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub add_app: bool,
}

/// Project layout created by `init`.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Template {
    /// App router layout (`app/page.tsx`)
    #[default]
    App,
    /// Pages router layout (`pages/index.tsx`)
    Pages,
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct InitArgs {
    /// Name of the project to initialize
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Specify a template for the new project, e.g., app, pages
    #[arg(short, long, value_enum)]
    pub template: Option<Template>,
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct RemoveArgs {
    /// Names of components to remove
    #[arg(value_name = "COMPONENTS")]
    pub components: Vec<String>,

    /// Specify the path to the package.json file
    #[arg(short = 'p', long = "packagePath")]
    pub package_path: Option<PathBuf>,

    /// Remove all components
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub all: bool,

    /// Specify the path to the tailwind.config.js file (also -tw)
    #[arg(long = "tailwindPath")]
    pub tailwind_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct UpgradeArgs {
    /// Names of components to upgrade
    #[arg(value_name = "COMPONENTS")]
    pub components: Vec<String>,

    /// Specify the path to the package.json file
    #[arg(short = 'p', long = "packagePath")]
    pub package_path: Option<PathBuf>,

    /// Upgrade all components
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub all: bool,
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ListArgs {
    /// Specify the path to the package.json file
    #[arg(short = 'p', long = "packagePath")]
    pub package_path: Option<PathBuf>,

    /// List all components available remotely
    #[arg(short, long)]
    pub remote: bool,
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct EnvArgs {
    /// Specify the path to the package.json file
    #[arg(short = 'p', long = "packagePath")]
    pub package_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct DoctorArgs {
    /// Specify the path to the package.json file
    #[arg(short = 'p', long = "packagePath")]
    pub package_path: Option<PathBuf>,

    /// Specify the path to the tailwind.config.js file (also -tw)
    #[arg(long = "tailwindPath")]
    pub tailwind_path: Option<PathBuf>,

    /// Specify the path to the App.tsx file (also -app)
    #[arg(long = "appPath")]
    pub app_path: Option<PathBuf>,

    /// Check the App.tsx file (also -ca)
    #[arg(
        long = "checkApp",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub check_app: bool,

    /// Check the tailwind.config.js file (also -ct)
    #[arg(
        long = "checkTailwind",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub check_tailwind: bool,

    /// Check for Pnpm (also -cp)
    #[arg(
        long = "checkPnpm",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    pub check_pnpm: bool,
}

impl Default for DoctorArgs {
    fn default() -> Self {
        Self {
            package_path: None,
            tailwind_path: None,
            app_path: None,
            check_app: false,
            check_tailwind: true,
            check_pnpm: true,
        }
    }
}

/// The handler a command is bound to. Several command names share one handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    Add,
    Init,
    Remove,
    Upgrade,
    List,
    Env,
    Doctor,
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionId::Add => "add",
            ActionId::Init => "init",
            ActionId::Remove => "remove",
            ActionId::Upgrade => "upgrade",
            ActionId::List => "list",
            ActionId::Env => "env",
            ActionId::Doctor => "doctor",
        };
        f.write_str(name)
    }
}

impl Commands {
    /// The canonical command name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Suggest(_) => "suggest",
            Commands::Explain(_) => "explain",
            Commands::Create(_) => "create",
            Commands::Init(_) => "init",
            Commands::Add(_) => "add",
            Commands::Remove(_) => "remove",
            Commands::Upgrade(_) => "upgrade",
            Commands::List(_) => "list",
            Commands::Env(_) => "env",
            Commands::Doctor(_) => "doctor",
        }
    }

    pub fn action_id(&self) -> ActionId {
        match self {
            Commands::Suggest(_) | Commands::Explain(_) | Commands::Create(_) | Commands::Add(_) => {
                ActionId::Add
            },
            Commands::Init(_) => ActionId::Init,
            Commands::Remove(_) => ActionId::Remove,
            Commands::Upgrade(_) => ActionId::Upgrade,
            Commands::List(_) => ActionId::List,
            Commands::Env(_) => ActionId::Env,
            Commands::Doctor(_) => ActionId::Doctor,
        }
    }

    /// Whether the component registry must be loaded before this command runs.
    pub fn needs_registry(&self) -> bool {
        REGISTRY_COMMANDS.contains(&self.name())
    }
}

/// Rewrites raw argv into something clap understands.
///
/// Unknown options before the subcommand are dropped together with their
/// value, and the multi-character short options (`-tw`, `-app`, ...) are
/// expanded to their long forms.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let subcommands = subcommand_names();
    let mut args = args.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut seen_subcommand = false;
    let mut passthrough = false;
    // Set right after an unknown option without an inline `=value`
    let mut awaiting_value = false;

    for arg in args {
        let Some(token) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };

        if passthrough {
            normalized.push(arg);
            continue;
        }
        if token == "--" {
            passthrough = true;
            normalized.push(arg);
            continue;
        }

        if !seen_subcommand {
            let pending_value = std::mem::take(&mut awaiting_value);
            if !token.starts_with('-') {
                if pending_value && !subcommands.iter().any(|name| name == token) {
                    debug!("Ignoring value {} of an unknown option", token);
                    continue;
                }
                seen_subcommand = true;
            } else if !GLOBAL_FLAGS.contains(&token) {
                debug!("Ignoring unknown option {}", token);
                awaiting_value = !token.contains('=');
                continue;
            }
            normalized.push(arg);
            continue;
        }

        normalized.push(expand_short_alias(token).unwrap_or(arg));
    }

    normalized
}

/// Expands `-tw` and `-tw=value` style tokens to their long option.
fn expand_short_alias(token: &str) -> Option<OsString> {
    let (flag, value) = match token.split_once('=') {
        Some((flag, value)) => (flag, Some(value)),
        None => (token, None),
    };
    let (_, long) = SHORT_ALIASES.iter().find(|(short, _)| *short == flag)?;
    Some(match value {
        Some(value) => OsString::from(format!("{}={}", long, value)),
        None => OsString::from(*long),
    })
}

/// Every name a subcommand answers to, aliases included.
fn subcommand_names() -> Vec<String> {
    Cli::command()
        .get_subcommands()
        .flat_map(|sub| {
            std::iter::once(sub.get_name().to_string())
                .chain(sub.get_all_aliases().map(str::to_string))
        })
        .collect()
}
