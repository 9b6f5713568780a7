//! Excerpt and reading-time derivation.

/// Explicit cut marker inside a post body.
const MORE_MARKER: &str = "<!--more-->";
/// Word limit for automatic excerpts.
const MAX_WORDS: usize = 200;
/// Character limit for automatic excerpts (each word counts one extra for its separator).
const MAX_CHARS: usize = 1000;

/// Pick the excerpt for a post.
///
/// Priority: front matter `excerpt`, then text before `<!--more-->`, then
/// an automatic summary of the body.
pub fn derive_excerpt(explicit: Option<&str>, body: &str) -> String {
    if let Some(excerpt) = explicit.filter(|e| !e.is_empty()) {
        return excerpt.to_owned();
    }

    if let Some(index) = body.find(MORE_MARKER) {
        return body[..index].trim().to_owned();
    }

    auto_excerpt(body)
}

/// Summarize prose lines, skipping code fences, headings and blank lines.
fn auto_excerpt(body: &str) -> String {
    let mut in_code_block = false;
    let mut prose = Vec::new();

    for line in body.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("```") {
            in_code_block = !in_code_block;
            continue;
        }
        if in_code_block || trimmed.starts_with('#') || trimmed.is_empty() {
            continue;
        }
        prose.push(line);
    }

    let joined = prose.join(" ");
    let words: Vec<&str> = joined.split_whitespace().collect();

    let mut taken = Vec::new();
    let mut char_count = 0;
    for (i, word) in words.iter().enumerate() {
        if i >= MAX_WORDS || char_count + word.len() + 1 > MAX_CHARS {
            break;
        }
        taken.push(*word);
        char_count += word.len() + 1;
    }

    let mut excerpt = taken.join(" ");
    if words.len() > taken.len() {
        excerpt.push_str("...");
    }
    excerpt
}

/// Estimated reading time in whole minutes, rounded up, at least 1.
pub fn reading_time(body: &str, words_per_minute: usize) -> u32 {
    let words = body.split_whitespace().count();
    let minutes = words.div_ceil(words_per_minute.max(1)).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}
