//! String → token sequence.
//!
//! Deterministic, total, and pure: the tokenizer never panics. At each
//! position it either applies the maximal-munch rule below or stops,
//! returning the prefix tokens it already produced.

use super::errors::CompileError;
use super::types::{Op, Token};

/// Single-character operator and punctuation lookup (`lut1`, 25 entries).
const LUT1: &[(char, Op)] = &[
    ('=', Op::Assign),
    ('+', Op::Plus),
    ('-', Op::Minus),
    ('*', Op::Star),
    ('/', Op::Slash),
    ('%', Op::Percent),
    ('~', Op::Tilde),
    ('&', Op::Amp),
    ('|', Op::Pipe),
    ('^', Op::Caret),
    ('<', Op::Lt),
    ('>', Op::Gt),
    ('!', Op::Bang),
    ('.', Op::Dot),
    ('(', Op::LParen),
    (')', Op::RParen),
    ('[', Op::LBracket),
    (']', Op::RBracket),
    ('{', Op::LBrace),
    ('}', Op::RBrace),
    ('?', Op::Question),
    (':', Op::Colon),
    (',', Op::Comma),
    (';', Op::Semi),
];

/// Two-character operator lookup (`lut2`, 16 entries).
const LUT2: &[(&str, Op)] = &[
    ("&&", Op::AmpAmp),
    ("||", Op::PipePipe),
    ("==", Op::EqEq),
    ("!=", Op::BangEq),
    ("<=", Op::LtEq),
    (">=", Op::GtEq),
    ("<<", Op::Shl),
    (">>", Op::Shr),
    ("+=", Op::PlusEq),
    ("-=", Op::MinusEq),
    ("*=", Op::StarEq),
    ("/=", Op::SlashEq),
    ("%=", Op::PercentEq),
    ("&=", Op::AmpEq),
    ("^=", Op::CaretEq),
    ("|=", Op::PipeEq),
];

/// Keyword identifier lookup (`lutkwd`).
const LUTKWD: &[(&str, Op)] = &[
    ("if", Op::If),
    ("else", Op::Else),
    ("for", Op::For),
    ("while", Op::While),
    ("return", Op::Return),
];

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '@'
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Tokenizes `src`, stopping at the first position no rule matches.
///
/// Returns `Err(CompileError::TrailingInput)` if characters remain after
/// stopping, `Err(CompileError::BadLiteral(..))` if a numeric run fails to
/// parse, and `Ok(tokens)` otherwise. ASCII whitespace between tokens is
/// skipped before the maximal-munch rule is applied at each position.
pub fn tokenize(src: &str) -> Result<Vec<Token>, CompileError> {
    let chars: Vec<char> = src.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0usize;

    while pos < chars.len() {
        while pos < chars.len() && is_whitespace(chars[pos]) {
            pos += 1;
        }
        if pos >= chars.len() {
            break;
        }

        let c = chars[pos];

        if c.is_ascii_digit() || (c == '.' && chars.get(pos + 1).is_some_and(char::is_ascii_digit))
        {
            let start = pos;
            while pos < chars.len() && (chars[pos].is_ascii_digit() || chars[pos] == '.') {
                pos += 1;
            }
            let text: String = chars[start..pos].iter().collect();
            if text.contains('.') {
                let val: f32 = text
                    .parse()
                    .map_err(|_| CompileError::BadLiteral(text.clone()))?;
                tokens.push(Token::Float(val));
            } else {
                let val: i32 = text
                    .parse()
                    .map_err(|_| CompileError::BadLiteral(text.clone()))?;
                tokens.push(Token::Int(val));
            }
            continue;
        }

        if is_ident_char(c) {
            let start = pos;
            while pos < chars.len() && is_ident_char(chars[pos]) {
                pos += 1;
            }
            let text: String = chars[start..pos].iter().collect();
            if let Some(&(_, op)) = LUTKWD.iter().find(|(kw, _)| *kw == text) {
                tokens.push(Token::Op(op));
            } else {
                tokens.push(Token::Ident(text));
            }
            continue;
        }

        if pos + 1 < chars.len() {
            let two: String = chars[pos..pos + 2].iter().collect();
            if let Some(&(_, op)) = LUT2.iter().find(|(s, _)| *s == two) {
                tokens.push(Token::Op(op));
                pos += 2;
                continue;
            }
        }

        if let Some(&(_, op)) = LUT1.iter().find(|(ch, _)| *ch == c) {
            tokens.push(Token::Op(op));
            pos += 1;
            continue;
        }

        break;
    }

    while pos < chars.len() && is_whitespace(chars[pos]) {
        pos += 1;
    }
    if pos < chars.len() {
        return Err(CompileError::TrailingInput);
    }

    Ok(tokens)
}
