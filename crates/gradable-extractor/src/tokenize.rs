//! Fragment tokenization

/// Split a fragment into lower-cased word tokens
///
/// Anything other than letters, digits, `_` and `'` separates tokens. Runs
/// of words listed in `phrases` are merged into one underscore-joined token
/// ("a little" becomes `a_little`), longest phrase first.
pub fn tokenize(fragment: &str, phrases: &[Vec<String>]) -> Vec<String> {
    let words: Vec<String> = fragment
        .to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '\''))
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();

    let mut phrases: Vec<&Vec<String>> = phrases.iter().filter(|p| p.len() > 1).collect();
    phrases.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut tokens = Vec::with_capacity(words.len());
    let mut i = 0;
    while i < words.len() {
        let matched = phrases
            .iter()
            .find(|phrase| words[i..].starts_with(phrase.as_slice()));

        match matched {
            Some(phrase) => {
                tokens.push(phrase.join("_"));
                i += phrase.len();
            }
            None => {
                tokens.push(words[i].clone());
                i += 1;
            }
        }
    }

    tokens
}
