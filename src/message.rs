/// Build the conventional commit message.
///
/// Pure formatting: values are taken verbatim, including empty strings.
/// The scope parentheses are always present so the message shape stays
/// predictable for downstream tooling.
pub fn compose(commit_type: &str, scope: &str, desc: &str) -> String {
    format!("{}({}): {}", commit_type, scope, desc)
}
