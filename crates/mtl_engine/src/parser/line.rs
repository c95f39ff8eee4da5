//! Line normalization
//!
//! Turns one raw line into a keyword and its argument tokens.

/// Tokens of one non-empty statement line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTokens<'a> {
    /// First token, case preserved
    pub keyword: &'a str,
    /// Remaining tokens, case preserved
    pub arguments: Vec<&'a str>,
}

impl<'a> LineTokens<'a> {
    /// Tokenize a raw line
    ///
    /// Returns `None` for blank and comment-only lines. A leading byte order
    /// mark is dropped.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let mut tokens = strip_comment(raw)
            .trim_start_matches('\u{feff}')
            .split_whitespace();
        let keyword = tokens.next()?;
        Some(Self {
            keyword,
            arguments: tokens.collect(),
        })
    }
}

/// Cut the line at the first `#`
pub fn strip_comment(raw: &str) -> &str {
    match raw.find('#') {
        Some(index) => &raw[..index],
        None => raw,
    }
}
