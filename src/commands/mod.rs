//! Command implementations
//!
//! Every subcommand is a struct implementing [`Command`]; `main` builds the
//! struct from parsed arguments and runs it against a shared [`CommandContext`].

pub mod base;
pub mod issues;
pub mod org;
pub mod people;
pub mod top;
pub mod validators;
pub mod weekly;

pub use base::{Command, CommandContext};
pub use issues::{IssuesCommand, PullsCommand};
pub use org::{MembersCommand, TeamMembersCommand, TeamsCommand};
pub use people::{CollaboratorsCommand, ContributorsCommand};
pub use top::{RankingKind, TopCommand};
pub use weekly::{HistogramKind, WeeklyCommand};
