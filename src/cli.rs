use crate::table::ColorMode;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "git-merged")]
#[command(about = "Show which branches are merged into an integration branch", long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Branches to check; all remote and local branches when omitted
    pub branches: Vec<String>,

    /// Integration branch to check against; defaults to the current branch
    #[arg(long, value_name = "name")]
    pub branch: Option<String>,

    /// Include all remote branches
    #[arg(short = 'r', long)]
    pub remote: bool,

    /// Include all local branches
    #[arg(short = 'l', long)]
    pub local: bool,

    /// Include all remote and local branches
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Force colored output
    #[arg(short = 'c', long, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print the version and keep going
    #[arg(short = 'v', long)]
    pub version: bool,
}

impl Cli {
    pub fn check_remote(&self) -> bool {
        self.remote || self.all
    }

    pub fn check_local(&self) -> bool {
        self.local || self.all
    }

    pub fn color_mode(&self) -> ColorMode {
        if self.color {
            ColorMode::On
        } else if self.no_color {
            ColorMode::Off
        } else {
            ColorMode::Auto
        }
    }
}
