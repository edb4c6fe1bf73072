//! Command line interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "code-diff", version, about = "Create, share and edit code diffs")]
pub struct Cli {
    /// Where to start: `/`, `/{identifier}`, `/{language}-diff` or a share link
    pub route: Option<String>,

    /// Load this file into the Before pane
    #[arg(long, value_name = "FILE")]
    pub before: Option<PathBuf>,

    /// Load this file into the After pane
    #[arg(long, value_name = "FILE")]
    pub after: Option<PathBuf>,

    /// Language tag for syntax mode (e.g. rust, json)
    #[arg(long, short)]
    pub language: Option<String>,

    /// Override the API base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Override the base URL of share links
    #[arg(long)]
    pub share_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Exchange an identity-provider token for a session
    Login {
        #[arg(long)]
        token: String,
    },
    /// Forget the stored session
    Logout,
}
