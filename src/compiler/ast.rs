//! The parser's output tree.

use super::types::{Op, Token};

/// A parsed syntax tree node.
///
/// Leaf nodes carry an identifier or literal `Token`; internal nodes carry
/// an `Op` token and one child per operand. The top-level statement-sequence
/// node is labelled with `Op::Semi` and has one child per parsed statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Ast {
    pub token: Token,
    pub children: Vec<Ast>,
}

impl Ast {
    pub fn leaf(token: Token) -> Self {
        Ast {
            token,
            children: Vec::new(),
        }
    }

    pub fn binary(op: Op, lhs: Ast, rhs: Ast) -> Self {
        Ast {
            token: Token::Op(op),
            children: vec![lhs, rhs],
        }
    }

    pub fn statements(children: Vec<Ast>) -> Self {
        Ast {
            token: Token::Op(Op::Semi),
            children,
        }
    }
}
