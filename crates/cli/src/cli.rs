use core::str::FromStr;

use clap::{Parser, Subcommand};

use lockwatch_core::{DomainError, LockState};

/// Minimum price used by `listings` when none is given.
pub const DEFAULT_MIN_PRICE: u64 = 40_000;

/// Comma-separated lock states given as one flag value.
///
/// Blank segments are ignored: `--doors`, `--doors=` and `--doors locked,`
/// are all accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateList(Vec<LockState>);

impl StateList {
    pub fn into_inner(self) -> Vec<LockState> {
        self.0
    }
}

impl From<Vec<LockState>> for StateList {
    fn from(states: Vec<LockState>) -> Self {
        Self(states)
    }
}

impl FromStr for StateList {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LockState::parse_list(s).map(Self)
    }
}

/// States from an optional flag; an omitted flag is an empty list.
pub fn states(flag: Option<StateList>) -> Vec<LockState> {
    flag.unwrap_or_default().into_inner()
}

#[derive(Parser, Debug)]
#[command(name = "lockwatch", version, about = "Check whether cars and houses are locked up")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Check the sample car and house (the default).
    Demo,
    /// Check a car built from door states.
    Car {
        #[arg(
            long,
            num_args = 0..=1,
            default_missing_value = "",
            help = "Door states in order, comma-separated (locked/unlocked/true/false)"
        )]
        doors: Option<StateList>,
    },
    /// Check a house built from door and window states.
    House {
        #[arg(
            long,
            num_args = 0..=1,
            default_missing_value = "",
            help = "Door states in order, comma-separated (locked/unlocked/true/false)"
        )]
        doors: Option<StateList>,
        #[arg(
            long,
            num_args = 0..=1,
            default_missing_value = "",
            help = "Window states in order, comma-separated (locked/unlocked/true/false)"
        )]
        windows: Option<StateList>,
    },
    /// Sample car listings with their total and the expensive ones.
    Listings {
        #[arg(long, default_value_t = DEFAULT_MIN_PRICE)]
        min_price: u64,
    },
    /// Register cars by colour and report the count.
    Registry {
        #[arg(long = "color", required = true, value_delimiter = ',')]
        colors: Vec<String>,
    },
    /// First names of the sample student roster.
    Roster,
}

impl Cli {
    /// The requested command; no subcommand means the demo.
    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Demo)
    }
}
