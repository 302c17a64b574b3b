//! Path lexer — scans a path string into an ordered token sequence.
//!
//! The grammar has three segment shapes: dotted properties (`a.b`),
//! bracketed indices (`items[0]`, `map[key]`), and call-shaped segments
//! (`name(arg1, arg2)`). A path string maps to exactly one token sequence;
//! the scan is a single left-to-right pass with no backtracking and no side
//! effects.
//!
//! # Key design decisions
//!
//! - **Index key typing happens here, once.** Bracket content that parses
//!   fully as a base-10 integer becomes a numeric key (`"007"` → `7`);
//!   anything else is carried as a string key. Evaluation never revisits
//!   this decision.
//! - **Permissive delimiter scanning.** An unterminated `[` or `(` consumes
//!   the remainder of the string as index/argument content instead of
//!   failing. Odd input degrades to best-effort tokens; the `Tokenize`
//!   error kind is reserved for internal invariant violations only.
//! - **Depth counting is not quote-aware.** Index and call scans balance
//!   nested `[`/`]` and `(`/`)` without tracking quotes; only the argument
//!   parser (which runs on the collected call content) understands quoting.
//!   Index expressions are expected to be simple numeric/identifier content.

use std::fmt;

use crate::error::Result;
use crate::literal::parse_arguments;
use crate::value::Value;

/// Bracket content, typed once at tokenize time.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexKey {
    /// Content that parsed fully as a base-10 integer.
    Num(i64),
    /// Anything else, carried verbatim.
    Str(String),
}

/// One parsed segment of a path expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A bare identifier or dotted segment.
    Property(String),
    /// Bracketed access.
    Index(IndexKey),
    /// A call-shaped segment `name(arg1, arg2, …)` with its arguments
    /// already parsed into literal values.
    Call { name: String, args: Vec<Value> },
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Property(name) => f.write_str(name),
            Token::Index(IndexKey::Num(n)) => write!(f, "[{n}]"),
            Token::Index(IndexKey::Str(key)) => write!(f, "[{key}]"),
            Token::Call { name, args } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Scan a path string into tokens.
///
/// Never fails for merely odd input; the `Result` carries the reserved
/// `Tokenize` kind for internal invariant violations, which the current
/// grammar cannot produce.
///
/// ```
/// use fieldpath::{tokenize, IndexKey, Token};
///
/// let tokens = tokenize("items[0].total").unwrap();
/// assert_eq!(tokens, vec![
///     Token::Property("items".into()),
///     Token::Index(IndexKey::Num(0)),
///     Token::Property("total".into()),
/// ]);
/// ```
pub fn tokenize(path: &str) -> Result<Vec<Token>> {
    let chars: Vec<char> = path.chars().collect();
    let mut tokens = Vec::new();
    let mut acc = String::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '.' => {
                if !acc.is_empty() {
                    tokens.push(Token::Property(std::mem::take(&mut acc)));
                }
                i += 1;
            }
            '[' => {
                if !acc.is_empty() {
                    tokens.push(Token::Property(std::mem::take(&mut acc)));
                }
                let (content, next) = scan_delimited(&chars, i, '[', ']');
                tokens.push(Token::Index(classify_index(&content)));
                i = next;
            }
            '(' => {
                let name = std::mem::take(&mut acc);
                let (content, next) = scan_delimited(&chars, i, '(', ')');
                tokens.push(Token::Call {
                    name,
                    args: parse_arguments(&content),
                });
                i = next;
            }
            c => {
                acc.push(c);
                i += 1;
            }
        }
    }

    if !acc.is_empty() {
        tokens.push(Token::Property(acc));
    }

    Ok(tokens)
}

/// Collect the content between a delimiter pair, balancing nested pairs.
///
/// `chars[start]` is the opening delimiter. Returns the enclosed content and
/// the index just past the closing delimiter. When the pair never closes,
/// the remainder of the string is the content and the scan position is the
/// end of input.
fn scan_delimited(chars: &[char], start: usize, open: char, close: char) -> (String, usize) {
    let mut depth = 0usize;
    let mut content = String::new();
    let mut i = start;

    while i < chars.len() {
        let c = chars[i];
        if c == open {
            depth += 1;
            if depth > 1 {
                content.push(c);
            }
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return (content, i + 1);
            }
            content.push(c);
        } else {
            content.push(c);
        }
        i += 1;
    }

    (content, chars.len())
}

/// Decide the index key type from the full bracket content.
///
/// Fractional and exponent forms stay string keys; a fractional sequence
/// index is meaningless. Integer-looking content is coerced even when the
/// text differs from its canonical form (`"007"` → `7`).
fn classify_index(content: &str) -> IndexKey {
    match content.trim().parse::<i64>() {
        Ok(n) => IndexKey::Num(n),
        Err(_) => IndexKey::Str(content.to_string()),
    }
}
