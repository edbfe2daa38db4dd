use clap::error::ErrorKind;
use clap::Parser;
use cli::Cli;
use errors::Result;
use git::{GitCli, GitCliImpl};
use table::TermCaps;

mod cli;
mod errors;
mod git;
mod merged;
mod select;
mod table;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    env_logger::init();

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // clap routes help to stdout and parse errors (with usage) to
            // stderr; only the exit code needs overriding.
            let _ = err.print();
            let code = if err.kind() == ErrorKind::DisplayHelp { 0 } else { 1 };
            std::process::exit(code);
        }
    };

    if args.version {
        println!("git-merged {}", VERSION);
    }

    let git = GitCliImpl::new();
    if let Err(e) = run(&args, &git) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Cli, git: &dyn GitCli) -> Result<()> {
    let integration = select::resolve_integration(git, args.branch.clone())?;
    let branches =
        select::select_branches(git, &args.branches, args.check_remote(), args.check_local())?;

    // Collect every result before printing anything, so a bad branch aborts
    // the run without a half-rendered table.
    let results = merged::check_branches(git, &branches, &integration)?;

    let (renderer, warning) = table::select_renderer(args.color_mode(), &TermCaps::detect());
    if let Some(warning) = warning {
        eprintln!("Warning: {}", warning);
    }

    print!("{}", renderer.render(&results, &integration));
    Ok(())
}
