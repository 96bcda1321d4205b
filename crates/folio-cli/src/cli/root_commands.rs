use clap::{Args, Subcommand, ValueEnum};

use folio_core::enums::Theme;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List projects, optionally filtered by category and search term.
    Projects(ProjectsArgs),
    /// Render the portfolio page to `index.html`.
    Build(BuildArgs),
    /// Ask the chat assistant. Starts a REPL on stdin when no message is given.
    Chat(ChatArgs),
    /// Play the hero typing animation in the terminal.
    Typing(TypingArgs),
    /// Show or change the stored color theme.
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommands>,
    },
    /// Validate a contact form submission.
    Contact(ContactArgs),
    /// Print the JSON schema of a site data type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ProjectsArgs {
    /// Category filter: all, web, mobile, desktop, api, other
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Case-insensitive search over title, description, and technologies
    #[arg(short, long)]
    pub search: Option<String>,

    /// Include the "load more" projects
    #[arg(long)]
    pub all: bool,
}

#[derive(Clone, Debug, Args)]
pub struct BuildArgs {
    /// Output directory (defaults to `site.output_dir`)
    #[arg(short, long)]
    pub out: Option<String>,

    /// Include the "load more" projects
    #[arg(long)]
    pub all: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ChatArgs {
    /// Question to ask; words are joined with spaces
    pub message: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct TypingArgs {
    /// Texts to cycle through (defaults to `typing.texts`)
    pub texts: Vec<String>,

    /// Stop after the last text instead of looping
    #[arg(long)]
    pub no_loop: bool,

    /// Reveal characters plainly instead of scrambling the tail
    #[arg(long)]
    pub no_scramble: bool,

    /// Vary the per-character delay like a human typist
    #[arg(long)]
    pub natural: bool,

    /// Stop after this many seconds
    #[arg(short, long)]
    pub duration: Option<u64>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum ThemeCommands {
    /// Print the stored theme.
    Show,
    /// Switch between light and dark.
    Toggle,
    /// Store a specific theme.
    Set {
        #[arg(value_enum)]
        theme: ThemeArg,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct ContactArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub subject: String,

    #[arg(long, default_value = "")]
    pub message: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Project,
    ChatMessage,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type to describe
    #[arg(value_enum)]
    pub type_name: SchemaType,
}
