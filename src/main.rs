use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

mod catalog;
mod config;
mod fuzzy;
mod git;
mod message;
mod prompt;
mod repo;

#[derive(Parser)]
#[command(name = "gacp", version)]
#[command(about = "A guided CLI for git add, commit and push with conventional commit messages")]
struct Cli {
    /// Commit type (e.g. feat, fix, chore)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    commit_type: Option<String>,

    /// Commit scope, the area of the change
    #[arg(short, long)]
    scope: Option<String>,

    /// Commit description
    #[arg(short, long)]
    desc: Option<String>,

    /// Do not stage changes before committing
    #[arg(long)]
    noadd: bool,

    /// Never push, and never ask to push
    #[arg(long)]
    nopush: bool,

    /// Print the git commands that would run, without executing anything
    #[arg(long)]
    dryrun: bool,
}

fn main() -> ExitCode {
    config::setup_colors();
    let cli = Cli::parse();

    match run(cli) {
        0 => ExitCode::SUCCESS,
        code => ExitCode::from(code.clamp(1, 255) as u8),
    }
}

fn run(cli: Cli) -> i32 {
    // Dry-run skips the repository check so the preview works anywhere.
    if !cli.dryrun {
        let repo = match repo::get_repo() {
            Ok(repo) => repo,
            Err(e) => {
                eprintln!("gacp: {}", e.message());
                return 1;
            }
        };

        if let Some(branch) = repo::get_branch_name(&repo) {
            println!("On branch: {}\n", branch.cyan().bold());
        }
    }

    let resolved = match prompt::resolve(cli.commit_type, cli.scope, cli.desc, cli.nopush) {
        Ok(resolved) => resolved,
        Err(prompt::PromptError::Cancelled) => {
            println!("Aborted, nothing was committed.");
            return 0;
        }
        Err(e) => {
            eprintln!("gacp: {}", e);
            return 1;
        }
    };

    let commit_message = message::compose(&resolved.commit_type, &resolved.scope, &resolved.desc);
    let should_add = !cli.noadd;
    // When the push prompt ran, the answer decides; otherwise the flag does.
    let should_push = resolved.push_confirmed.unwrap_or(!cli.nopush);

    let sequence = git::CommitSequence::new(&commit_message, should_add, should_push);

    if cli.dryrun {
        println!("{}", "Dry run, would execute:".bold());
        for line in sequence.render() {
            println!("  {}", line.cyan());
        }
        return 0;
    }

    println!("{} {}", "Commit message:".bold(), commit_message.cyan());
    sequence.execute()
}
