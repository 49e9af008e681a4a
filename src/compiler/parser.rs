//! Token sequence → AST, by precedence climbing.
//!
//! The grammar is exactly `program := statement*`, `statement := expr ';'`,
//! with `expr` a left-associative combination of atoms across twelve
//! precedence tiers. Every production that may fail captures its entry
//! position and restores it on failure, so a failed speculative parse never
//! loses tokens.

use super::ast::Ast;
use super::errors::CompileError;
use super::types::{Op, Token};

/// Precedence tiers, loosest first, down to the tier adjacent to an atom.
///
/// Multiplicative operators bind tighter than additive ones, as required by
/// `a + b * c` parsing as `a + (b * c)`. Every other tier keeps its
/// otherwise-unusual relative order: bitwise and logical operators bind
/// tighter than arithmetic, and every tier (including assignment) folds
/// left-associatively.
const TIERS: &[&[Op]] = &[
    &[Op::Comma],
    &[
        Op::Assign,
        Op::PlusEq,
        Op::MinusEq,
        Op::StarEq,
        Op::SlashEq,
        Op::PercentEq,
        Op::AmpEq,
        Op::PipeEq,
        Op::CaretEq,
    ],
    &[Op::Plus, Op::Minus],
    &[Op::Star, Op::Slash, Op::Percent],
    &[Op::Shl, Op::Shr],
    &[Op::Lt, Op::LtEq, Op::Gt, Op::GtEq],
    &[Op::EqEq, Op::BangEq],
    &[Op::Amp],
    &[Op::Caret],
    &[Op::Pipe],
    &[Op::AmpAmp],
    &[Op::PipePipe],
];

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn mark(&self) -> usize {
        self.pos
    }

    fn restore(&mut self, mark: usize) {
        self.pos = mark;
    }

    fn peek_op(&self) -> Option<Op> {
        match self.tokens.get(self.pos) {
            Some(Token::Op(op)) => Some(*op),
            _ => None,
        }
    }

    /// Parses a single atom: an identifier or numeric literal token.
    fn atom(&mut self) -> Option<Ast> {
        match self.tokens.get(self.pos)? {
            Token::Ident(_) | Token::Int(_) | Token::Float(_) => {
                let token = self.tokens[self.pos].clone();
                self.pos += 1;
                Some(Ast::leaf(token))
            }
            Token::Op(_) => None,
        }
    }

    /// Parses one precedence tier, delegating to the next-tighter tier for
    /// both operands and left-folding while the current tier's operators
    /// keep matching.
    fn parse_tier(&mut self, tier: usize) -> Option<Ast> {
        if tier == TIERS.len() {
            return self.atom();
        }

        let mut lhs = self.parse_tier(tier + 1)?;

        loop {
            let mark = self.mark();
            match self.peek_op() {
                Some(op) if TIERS[tier].contains(&op) => {
                    self.pos += 1;
                    match self.parse_tier(tier + 1) {
                        Some(rhs) => lhs = Ast::binary(op, lhs, rhs),
                        None => {
                            self.restore(mark);
                            break;
                        }
                    }
                }
                _ => break,
            }
        }

        Some(lhs)
    }

    fn binary(&mut self) -> Option<Ast> {
        self.parse_tier(0)
    }
}

/// Parses a full program: zero or more `expr ';'` statements.
///
/// Stops successfully once no further expression can be parsed; fails if an
/// expression parses but is not followed by `;`, or if tokens remain after
/// the statement loop ends.
pub fn parse(tokens: &[Token]) -> Result<Ast, CompileError> {
    let mut parser = Parser { tokens, pos: 0 };
    let mut statements = Vec::new();

    loop {
        let mark = parser.mark();
        match parser.binary() {
            None => {
                parser.restore(mark);
                break;
            }
            Some(expr) => {
                if parser.peek_op() == Some(Op::Semi) {
                    parser.pos += 1;
                    statements.push(expr);
                } else {
                    return Err(CompileError::UnexpectedToken);
                }
            }
        }
    }

    if parser.pos != parser.tokens.len() {
        return Err(CompileError::UnexpectedToken);
    }

    Ok(Ast::statements(statements))
}
