use std::fmt;

// ---------------------------------------------------------------------------
// Token – one raw line of input
// ---------------------------------------------------------------------------

/// A single line of raw text before type interpretation.
pub type Token = String;

/// Split display-area text into tokens.
///
/// Lines are separated by `'\n'` (a trailing `'\r'` is dropped). Empty lines
/// in the middle are kept as blank tokens, but trailing empty lines are not,
/// so a final newline does not add a token.
pub fn split_tokens(text: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    tokens
}

/// Join tokens back into display-area text.
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut out = String::new();
    for (i, tok) in tokens.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(tok.as_ref());
    }
    out
}

// ---------------------------------------------------------------------------
// ValueKind – the outcome of type detection
// ---------------------------------------------------------------------------

/// The type the cascade settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Float,
    Text,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Integer => write!(f, "integers"),
            ValueKind::Float => write!(f, "floating-point numbers"),
            ValueKind::Text => write!(f, "text"),
        }
    }
}

// ---------------------------------------------------------------------------
// SortedData – typed values in ascending order
// ---------------------------------------------------------------------------

/// Tokens reinterpreted as one type and sorted ascending.
#[derive(Debug, Clone, PartialEq)]
pub enum SortedData {
    Integers(Vec<i64>),
    Floats(Vec<f64>),
    Text(Vec<String>),
}

impl SortedData {
    pub fn kind(&self) -> ValueKind {
        match self {
            SortedData::Integers(_) => ValueKind::Integer,
            SortedData::Floats(_) => ValueKind::Float,
            SortedData::Text(_) => ValueKind::Text,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SortedData::Integers(v) => v.len(),
            SortedData::Floats(v) => v.len(),
            SortedData::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render every value as one line of text.
    ///
    /// Floats use the `Debug` form, which always carries a fractional part or
    /// an exponent (`2.0`, `1e20`), so the rendering is detected as floats
    /// again rather than integers.
    pub fn render(&self) -> Vec<String> {
        match self {
            SortedData::Integers(v) => v.iter().map(|i| i.to_string()).collect(),
            SortedData::Floats(v) => v.iter().map(|f| format!("{f:?}")).collect(),
            SortedData::Text(v) => v.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_drops_trailing_newlines_only() {
        assert_eq!(split_tokens("a\n\nb\n\n"), vec!["a", "", "b"]);
        assert_eq!(split_tokens("a\r\nb"), vec!["a", "b"]);
        assert!(split_tokens("").is_empty());
        assert!(split_tokens("\n\n").is_empty());
    }

    #[test]
    fn join_is_inverse_of_split_for_plain_lines() {
        let tokens = vec!["3", "", "x"];
        assert_eq!(split_tokens(&join_tokens(&tokens)), tokens);
    }

    #[test]
    fn floats_render_with_fractional_part() {
        let data = SortedData::Floats(vec![0.25, 2.0, 1e20]);
        assert_eq!(data.render(), vec!["0.25", "2.0", "1e20"]);
    }

    #[test]
    fn kind_and_len() {
        let data = SortedData::Text(vec!["a".into(), "b".into()]);
        assert_eq!(data.kind(), ValueKind::Text);
        assert_eq!(data.len(), 2);
        assert!(SortedData::Integers(vec![]).is_empty());
    }
}
