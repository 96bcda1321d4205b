use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `folio` binary.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Folio - personal portfolio site")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::root_commands::{SchemaType, ThemeArg, ThemeCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["folio", "--format", "table", "--verbose", "projects"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Projects(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "build", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Build(_)));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["folio", "--format", "xml", "projects"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn projects_filters_parse() {
        let cli = Cli::try_parse_from(["folio", "projects", "-c", "web", "-s", "React"])
            .expect("cli should parse");
        let Commands::Projects(args) = cli.command else {
            panic!("expected projects command");
        };
        assert_eq!(args.category, "web");
        assert_eq!(args.search.as_deref(), Some("React"));
        assert!(!args.all);
    }

    #[test]
    fn chat_collects_trailing_words() {
        let cli = Cli::try_parse_from(["folio", "chat", "where", "are", "you", "based?"])
            .expect("cli should parse");
        let Commands::Chat(args) = cli.command else {
            panic!("expected chat command");
        };
        assert_eq!(args.message.join(" "), "where are you based?");
    }

    #[test]
    fn typing_flags_parse() {
        let cli = Cli::try_parse_from([
            "folio",
            "typing",
            "Hi",
            "There",
            "--no-loop",
            "--no-scramble",
            "--duration",
            "3",
        ])
        .expect("cli should parse");
        let Commands::Typing(args) = cli.command else {
            panic!("expected typing command");
        };
        assert_eq!(args.texts, vec!["Hi", "There"]);
        assert!(args.no_loop);
        assert!(args.no_scramble);
        assert_eq!(args.duration, Some(3));
    }

    #[test]
    fn theme_action_is_optional() {
        let cli = Cli::try_parse_from(["folio", "theme"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Theme { action: None }));

        let cli = Cli::try_parse_from(["folio", "theme", "set", "dark"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Theme {
                action: Some(ThemeCommands::Set {
                    theme: ThemeArg::Dark
                })
            }
        ));

        assert!(Cli::try_parse_from(["folio", "theme", "set", "sepia"]).is_err());
    }

    #[test]
    fn schema_type_uses_kebab_case() {
        let cli =
            Cli::try_parse_from(["folio", "schema", "chat-message"]).expect("cli should parse");
        let Commands::Schema(args) = cli.command else {
            panic!("expected schema command");
        };
        assert_eq!(args.type_name, SchemaType::ChatMessage);
    }
}
