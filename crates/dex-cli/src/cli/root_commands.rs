use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Load the listing and print every entity.
    List,
    /// Print the entities whose name matches exactly.
    Find(FindArgs),
    /// Load details for the matching entities and print them.
    Show(ShowArgs),
}

#[derive(Clone, Debug, Args)]
pub struct FindArgs {
    /// Display name, matched exactly and case-sensitively (e.g. `Pikachu`).
    pub name: String,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Display name, matched exactly and case-sensitively (e.g. `Pikachu`).
    pub name: String,
}
