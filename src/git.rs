use std::process::{Command, Stdio};

use colored::Colorize;

/// Run a git command with inherited stdio, preserving colors and
/// interactivity (push may prompt for credentials). Returns the exit code.
pub fn run(args: &[String]) -> i32 {
    let result = Command::new("git")
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .and_then(|mut child| child.wait());

    match result {
        Ok(status) => status.code().unwrap_or(1),
        Err(e) => {
            eprintln!("gacp: failed to run git: {}", e);
            1
        }
    }
}

/// The add/commit/push invocations for one run, built once so that the
/// real execution and the dry-run rendering share the same conditional
/// structure.
pub struct CommitSequence {
    steps: Vec<Vec<String>>,
}

impl CommitSequence {
    pub fn new(message: &str, should_add: bool, should_push: bool) -> Self {
        let mut steps = Vec::new();

        if should_add {
            steps.push(vec!["add".to_string(), ".".to_string()]);
        }

        steps.push(vec![
            "commit".to_string(),
            "-m".to_string(),
            message.to_string(),
        ]);

        if should_push {
            steps.push(vec![
                "push".to_string(),
                "origin".to_string(),
                "HEAD".to_string(),
            ]);
        }

        Self { steps }
    }

    /// Run the steps in order, stopping at the first failure and
    /// returning its exit code. Earlier steps are not rolled back.
    pub fn execute(&self) -> i32 {
        for step in &self.steps {
            println!("Running: {}", display_command(step).bold());
            let code = run(step);
            if code != 0 {
                return code;
            }
        }
        0
    }

    /// Human-readable command lines, one per step, for dry-run output.
    pub fn render(&self) -> Vec<String> {
        self.steps.iter().map(|step| display_command(step)).collect()
    }
}

/// Format an argument list as a shell-style `git ...` line. Quoting is
/// for display only; execution always passes each argument as-is.
fn display_command(args: &[String]) -> String {
    let mut parts = vec!["git".to_string()];
    parts.extend(args.iter().map(|arg| display_arg(arg)));
    parts.join(" ")
}

fn display_arg(arg: &str) -> String {
    if arg.is_empty() || arg.contains(char::is_whitespace) || arg.contains('"') {
        format!("\"{}\"", arg.replace('"', "\\\""))
    } else {
        arg.to_string()
    }
}
