use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

/// "0.3.2" for tagged releases, "0.3.2@abc1234" for dev builds.
fn version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("POCKETNOTES_GIT_HASH");
    const RELEASE: &str = env!("POCKETNOTES_RELEASE");

    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        if RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "pocketnotes", bin_name = "pocketnotes", version = version())]
#[command(
    about = "Capture notes quickly, organize them with tags, and find anything with instant search",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding notes.json and config.json [env: POCKETNOTES_DATA_DIR]
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "n", display_order = 1)]
    Create {
        /// Title words (joined with spaces)
        #[arg(trailing_var_arg = true)]
        title: Vec<String>,

        /// Note content
        #[arg(short, long)]
        content: Option<String>,

        /// Tags, comma separated or repeated (e.g. -t "work, rust" -t ideas)
        #[arg(short, long = "tag", value_name = "TAGS")]
        tags: Vec<String>,
    },

    /// List notes, optionally searching and filtering by tags
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Search titles, content and tags
        #[arg(short, long)]
        search: Option<String>,

        /// Only notes carrying this tag (repeat to require several)
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// View one or more notes in full
    #[command(alias = "v", display_order = 3)]
    View {
        /// Positions or id prefixes of the notes (e.g. 1 3 9f2c)
        #[arg(required = true, num_args = 1..)]
        notes: Vec<String>,
    },

    /// Edit a note
    #[command(alias = "e", display_order = 4)]
    Edit {
        /// Position or id prefix of the note
        note: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New content
        #[arg(short, long)]
        content: Option<String>,

        /// Tags to add, comma separated or repeated
        #[arg(short, long = "tag", value_name = "TAGS")]
        tags: Vec<String>,

        /// Tags to remove
        #[arg(long = "untag", value_name = "TAG")]
        untag: Vec<String>,

        /// Remove all existing tags first
        #[arg(long)]
        clear_tags: bool,
    },

    /// Delete one or more notes
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Positions or id prefixes of the notes (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        notes: Vec<String>,
    },

    /// List every tag in use, or suggest tags containing PREFIX
    #[command(display_order = 6)]
    Tags {
        /// Partial tag to complete (e.g. "ru" suggests "rust")
        prefix: Option<String>,
    },

    /// Get or set configuration
    #[command(display_order = 7)]
    Config {
        /// Configuration key (e.g., suggestion-limit)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_create_with_tags() {
        let cli = Cli::try_parse_from([
            "pocketnotes",
            "create",
            "-t",
            "work, rust",
            "-c",
            "body",
            "Weekly",
            "sync",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Create {
                title,
                content,
                tags,
            }) => {
                assert_eq!(title, vec!["Weekly", "sync"]);
                assert_eq!(content.as_deref(), Some("body"));
                assert_eq!(tags, vec!["work, rust"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_list_alias_with_filters() {
        let cli =
            Cli::try_parse_from(["pocketnotes", "ls", "-s", "trip", "-t", "a", "-t", "b"]).unwrap();
        match cli.command {
            Some(Commands::List { search, tags }) => {
                assert_eq!(search.as_deref(), Some("trip"));
                assert_eq!(tags, vec!["a", "b"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["pocketnotes", "-v"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.verbose);
    }

    #[test]
    fn delete_requires_a_selector() {
        assert!(Cli::try_parse_from(["pocketnotes", "delete"]).is_err());
    }
}
