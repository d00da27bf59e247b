//! Command-line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use cloze_core::{ItemQuery, SortKey, StageBand, StatusFilter};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "cloze-review")]
#[command(about = "Spaced repetition for facts with hidden words", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Item store file
    #[arg(long, env = "CLOZE_STORE", global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create an item
    Add {
        #[arg(short, long)]
        title: String,
        /// Markdown body (**bold**, *italic*, ~~strike~~)
        #[arg(short, long)]
        body: String,
        /// Word to hide; repeatable
        #[arg(long = "cloze")]
        clozes: Vec<String>,
        /// Hide a random share of the body's words
        #[arg(long)]
        auto: bool,
    },
    /// List items
    List {
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        #[arg(long, value_enum)]
        band: Option<BandArg>,
        /// Case-insensitive text search over title and body
        #[arg(long)]
        search: Option<String>,
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
    },
    /// Show an item with its clozes masked
    Show { id: Uuid },
    /// Edit an item's title, body or hidden words
    Edit {
        id: Uuid,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        body: Option<String>,
        /// Word to hide or unhide; repeatable
        #[arg(long = "toggle")]
        toggles: Vec<String>,
    },
    /// Delete an item
    Delete { id: Uuid },
    /// Show deck statistics
    Stats,
    /// Review due items interactively
    Review,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    NeedsReview,
    Completed,
    Mastered,
}

impl From<StatusArg> for StatusFilter {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::NeedsReview => Self::NeedsReview,
            StatusArg::Completed => Self::Completed,
            StatusArg::Mastered => Self::Mastered,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BandArg {
    Beginner,
    Learning,
    Mastered,
}

impl From<BandArg> for StageBand {
    fn from(arg: BandArg) -> Self {
        match arg {
            BandArg::Beginner => Self::Beginner,
            BandArg::Learning => Self::Learning,
            BandArg::Mastered => Self::Mastered,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    NextDue,
    Stage,
    Title,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::NextDue => Self::NextDue,
            SortArg::Stage => Self::Stage,
            SortArg::Title => Self::Title,
        }
    }
}

/// Build a deck query from `list` flags.
pub fn item_query(
    status: Option<StatusArg>,
    band: Option<BandArg>,
    search: Option<String>,
    sort: Option<SortArg>,
) -> ItemQuery {
    ItemQuery {
        status: status.map(Into::into),
        band: band.map(Into::into),
        search,
        sort: sort.map(Into::into),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_list_flags() {
        let cli = Cli::try_parse_from([
            "cloze-review",
            "list",
            "--status",
            "needs-review",
            "--sort",
            "next-due",
        ])
        .unwrap();

        let Commands::List {
            status, sort, band, ..
        } = cli.command
        else {
            panic!("expected list command");
        };
        assert_eq!(status, Some(StatusArg::NeedsReview));
        assert_eq!(sort, Some(SortArg::NextDue));
        assert_eq!(band, None);
    }

    #[test]
    fn parses_repeated_clozes() {
        let cli = Cli::try_parse_from([
            "cloze-review",
            "add",
            "--title",
            "Courage",
            "--body",
            "**Courage** is not the absence of *fear*",
            "--cloze",
            "Courage",
            "--cloze",
            "fear",
        ])
        .unwrap();

        let Commands::Add { clozes, auto, .. } = cli.command else {
            panic!("expected add command");
        };
        assert_eq!(clozes, vec!["Courage", "fear"]);
        assert!(!auto);
    }

    #[test]
    fn query_maps_flags() {
        let query = item_query(Some(StatusArg::Mastered), Some(BandArg::Learning), None, None);
        assert_eq!(query.status, Some(StatusFilter::Mastered));
        assert_eq!(query.band, Some(StageBand::Learning));
        assert_eq!(query.sort, None);
    }
}
