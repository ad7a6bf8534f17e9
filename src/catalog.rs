/// Commit types offered by the type picker, in display order.
/// The first entry is the default suggestion when the user submits
/// without typing anything.
pub const COMMIT_TYPES: &[&str] = &[
    "feat", "fix", "chore", "docs", "refactor", "test", "style", "perf", "build", "ci",
];
