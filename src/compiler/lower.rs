//! AST → flat IR array, by a single post-order traversal.

use super::ast::Ast;
use super::types::{IrId, IrNode, Op, Token};

/// Lowers `ast` into `ir`, appending nodes in post-order, and returns the
/// `IrId` of the node just appended for `ast`'s root.
///
/// Children are always lowered (and so appended) before their parent, which
/// is exactly what guarantees the topological invariant: every `IrNode::Op`
/// node's `args` are indices strictly less than its own.
pub fn lower(ast: &Ast, ir: &mut Vec<IrNode>) -> IrId {
    let node = match &ast.token {
        Token::Ident(name) => {
            debug_assert!(ast.children.is_empty());
            IrNode::Sym { name: name.clone() }
        }
        Token::Int(val) => {
            debug_assert!(ast.children.is_empty());
            IrNode::ConstInt { val: *val }
        }
        Token::Float(val) => {
            debug_assert!(ast.children.is_empty());
            IrNode::ConstFloat { val: *val }
        }
        Token::Op(op) => {
            let args = ast.children.iter().map(|child| lower(child, ir)).collect();
            IrNode::Op { op: *op, args }
        }
    };

    let id = IrId::from(ir.len());
    ir.push(node);
    id
}
