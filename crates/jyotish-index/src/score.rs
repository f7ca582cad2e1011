//! Keyword-overlap scoring

/// Points when the whole query contains a keyword
const KEYWORD_IN_QUERY: f64 = 3.0;
/// Points per (keyword, token) pair where either contains the other
const PARTIAL_MATCH: f64 = 1.0;
/// Points per long query token found in the document text
const TEXT_MATCH: f64 = 0.5;
/// Tokens need more than this many characters to count against text
const MIN_TEXT_TOKEN_CHARS: usize = 3;

/// A lower-cased query split into whitespace tokens
pub(crate) struct PreparedQuery {
    lowered: String,
}

impl PreparedQuery {
    pub(crate) fn new(query: &str) -> Self {
        Self {
            lowered: query.to_lowercase(),
        }
    }

    pub(crate) fn tokens(&self) -> impl Iterator<Item = &str> {
        self.lowered.split_whitespace()
    }
}

/// Score one document. `text_lower` is the document text, lower-cased.
pub(crate) fn score(query: &PreparedQuery, keywords: &[String], text_lower: &str) -> f64 {
    let mut score = 0.0;

    for keyword in keywords {
        if query.lowered.contains(keyword.as_str()) {
            score += KEYWORD_IN_QUERY;
        }
        // Every pair counts, so one token can match a keyword twice over
        for token in query.tokens() {
            if keyword.contains(token) || token.contains(keyword.as_str()) {
                score += PARTIAL_MATCH;
            }
        }
    }

    for token in query.tokens() {
        if token.chars().count() > MIN_TEXT_TOKEN_CHARS && text_lower.contains(token) {
            score += TEXT_MATCH;
        }
    }

    score
}
