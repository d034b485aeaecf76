// The matching rule: non-overlapping, case-insensitive, literal substring.
//
// The term is escaped before compilation, so punctuation and multi-word
// phrases match as literal character sequences — no pattern language leaks
// through to taxonomy authors. Matching is deliberately NOT word-boundary
// aware: "cat" counts inside "concatenate". Downstream analyses were built
// against that rule, so it is kept as the documented contract.

use anyhow::Result;
use regex_lite::Regex;

/// A matcher compiled from one taxonomy term.
///
/// Compile once per term, then count against every document — compilation is
/// the expensive half.
///
/// Both the term and the text are folded to lowercase before matching.
/// regex-lite's `i` flag only folds ASCII, and taxonomy terms in policy
/// documents routinely carry accented letters: "CAFÉ" must count as a match
/// for the term "café".
pub struct TermCounter {
    pattern: Regex,
}

impl TermCounter {
    pub fn new(term: &str) -> Result<Self> {
        let pattern = Regex::new(&regex_lite::escape(&term.to_lowercase()))?;
        Ok(Self { pattern })
    }

    /// Number of non-overlapping occurrences of the term in `text`.
    /// Returns 0 for empty text or no match. Pure function of its input.
    pub fn count(&self, text: &str) -> usize {
        self.pattern.find_iter(&text.to_lowercase()).count()
    }
}

/// One-shot convenience for counting a term without keeping the matcher.
pub fn count_term(text: &str, term: &str) -> Result<usize> {
    Ok(TermCounter::new(term)?.count(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_is_case_insensitive_and_non_overlapping() {
        assert_eq!(count_term("The cat sat on the mat. CAT!", "cat").unwrap(), 2);
    }

    #[test]
    fn embedded_substrings_count() {
        // Not word-boundary aware, per the documented matching rule
        assert_eq!(count_term("concatenate", "cat").unwrap(), 1);
    }

    #[test]
    fn case_folding_is_not_ascii_only() {
        assert_eq!(count_term("CAFÉ café Café", "café").unwrap(), 3);
    }

    #[test]
    fn empty_text_counts_zero() {
        assert_eq!(count_term("", "cat").unwrap(), 0);
    }

    #[test]
    fn punctuation_in_terms_is_literal() {
        // '.' must not act as a regex wildcard
        assert_eq!(count_term("web 2.0 vs web 2x0", "2.0").unwrap(), 1);
        assert_eq!(count_term("cost (net) and cost (net)", "(net)").unwrap(), 2);
    }

    #[test]
    fn multi_word_phrases_match_with_embedded_whitespace() {
        assert_eq!(
            count_term("Climate change. CLIMATE CHANGE is here.", "climate change").unwrap(),
            2
        );
    }

    #[test]
    fn overlapping_candidates_count_once() {
        // "aa" in "aaa" matches at offset 0, then the scan resumes at 2
        assert_eq!(count_term("aaa", "aa").unwrap(), 1);
    }
}
