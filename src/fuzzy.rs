/// Rank candidates against a typed query.
///
/// An empty query matches everything and preserves the original order.
/// Matching is case-insensitive. Candidates containing the query as a
/// contiguous substring always rank above candidates that only match it
/// as a scattered subsequence; ties keep the original order.
pub fn rank<'a>(query: &str, candidates: &[&'a str]) -> Vec<&'a str> {
    if query.is_empty() {
        return candidates.to_vec();
    }

    let query = query.to_lowercase();
    let mut scored: Vec<(i32, usize, &str)> = Vec::new();

    for (index, candidate) in candidates.iter().copied().enumerate() {
        if let Some(score) = score(&query, &candidate.to_lowercase()) {
            scored.push((score, index, candidate));
        }
    }

    scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    scored.into_iter().map(|(_, _, candidate)| candidate).collect()
}

/// Score a single candidate, higher is better. None means no match.
///
/// Substring hits score in the 1000 band (earlier and tighter is better);
/// subsequence hits score in the 100 band minus the total gap width, so
/// the two bands never overlap for the short keywords we rank.
fn score(query: &str, candidate: &str) -> Option<i32> {
    if let Some(pos) = candidate.find(query) {
        return Some(1000 - pos as i32 - (candidate.len() - query.len()) as i32);
    }

    let mut gaps = 0usize;
    let mut last_hit: Option<usize> = None;
    let mut chars = candidate.char_indices();

    for wanted in query.chars() {
        loop {
            match chars.next() {
                Some((i, c)) if c == wanted => {
                    if let Some(last) = last_hit {
                        gaps += i - last - 1;
                    }
                    last_hit = Some(i);
                    break;
                }
                Some(_) => continue,
                None => return None,
            }
        }
    }

    Some(100 - gaps as i32)
}
