use git2::Repository;

/// Open the repository from the current directory (or any parent).
pub fn get_repo() -> Result<Repository, git2::Error> {
    Repository::discover(".")
}

/// Get the current branch name, if HEAD points at one.
pub fn get_branch_name(repo: &Repository) -> Option<String> {
    repo.head().ok()?.shorthand().map(String::from)
}
