//! IR + register map → code words + symbol table.
//!
//! Emission is a single linear pass in IR-index order, so the code stream's
//! structure mirrors the post-order traversal that produced the IR. Symbol
//! IDs are assigned in first-occurrence order, which (since emission walks
//! the IR in index order) is the same thing.

use std::collections::HashMap;

use crate::bytecode::BytecodeOp;

use super::scan::RegisterMap;
use super::types::{IrNode, SymId};

/// A first-seen-order identifier interner.
#[derive(Default)]
struct SymbolTable {
    ids: HashMap<String, SymId>,
    names: Vec<String>,
}

impl SymbolTable {
    fn intern(&mut self, name: &str) -> SymId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = SymId::from(self.names.len());
        self.ids.insert(name.to_owned(), id);
        self.names.push(name.to_owned());
        id
    }
}

/// Emits `codes` and `syms` for `ir`, using `reglut` for every node's
/// destination (and source operand) registers.
pub fn emit(ir: &[IrNode], reglut: &RegisterMap) -> (Vec<u32>, Vec<String>) {
    let mut codes = Vec::new();
    let mut symbols = SymbolTable::default();

    for (i, node) in ir.iter().enumerate() {
        match node {
            IrNode::ConstInt { val } => {
                codes.push(BytecodeOp::LoadConstInt as u32);
                codes.push(reglut[i].0);
                codes.push(*val as u32);
            }
            IrNode::ConstFloat { val } => {
                codes.push(BytecodeOp::LoadConstFloat as u32);
                codes.push(reglut[i].0);
                codes.push(val.to_bits());
            }
            IrNode::Op { op, args } => {
                if let Some(bc) = BytecodeOp::from_op(*op) {
                    codes.push(bc as u32);
                    codes.push(reglut[i].0);
                    for arg in args {
                        codes.push(reglut[arg.index()].0);
                    }
                }
                // Assignment, compound-assignment, and structural/keyword
                // ops (including the top-level `;` statement sequence)
                // have no bytecode encoding and emit nothing.
            }
            IrNode::Sym { name } => {
                codes.push(BytecodeOp::AddrSymbol as u32);
                codes.push(symbols.intern(name).0);
            }
            IrNode::Empty => {}
        }
    }

    (codes, symbols.names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::lower::lower;
    use crate::compiler::parser::parse;
    use crate::compiler::scan::scan;
    use crate::compiler::tokenizer::tokenize;

    fn emit_src(src: &str) -> (Vec<u32>, Vec<String>) {
        let ast = parse(&tokenize(src).unwrap()).unwrap();
        let mut ir = Vec::new();
        lower(&ast, &mut ir);
        let (reglut, _) = scan(&ir);
        emit(&ir, &reglut)
    }

    #[test]
    fn empty_program_emits_nothing() {
        let (codes, syms) = emit_src("");
        assert!(codes.is_empty());
        assert!(syms.is_empty());
    }

    #[test]
    fn int_literal() {
        let (codes, syms) = emit_src("42;");
        assert_eq!(codes, vec![BytecodeOp::LoadConstInt as u32, 0, 42]);
        assert!(syms.is_empty());
    }

    #[test]
    fn symbol_reference() {
        let (codes, syms) = emit_src("@clr;");
        assert_eq!(codes, vec![BytecodeOp::AddrSymbol as u32, 0]);
        assert_eq!(syms, vec!["@clr".to_string()]);
    }

    #[test]
    fn binary_arithmetic() {
        let (codes, _) = emit_src("1 + 2;");
        assert_eq!(
            codes,
            vec![
                BytecodeOp::LoadConstInt as u32,
                0,
                1,
                BytecodeOp::LoadConstInt as u32,
                1,
                2,
                BytecodeOp::Plus as u32,
                2,
                0,
                1,
            ]
        );
    }

    #[test]
    fn precedence_multiply_before_plus_in_stream_order() {
        let (codes, _) = emit_src("1 + 2 * 3;");

        // Decode linearly (respecting each opcode's arity) rather than
        // scanning raw words, since a register or immediate word can
        // coincidentally equal another opcode's placeholder value.
        let mut ops = Vec::new();
        let mut pos = 0;
        while pos < codes.len() {
            let op = BytecodeOp::from_u32(codes[pos]).unwrap();
            ops.push(op);
            pos += 1 + op.operand_words();
        }

        let mul_pos = ops.iter().position(|&op| op == BytecodeOp::Multiply).unwrap();
        let plus_pos = ops.iter().position(|&op| op == BytecodeOp::Plus).unwrap();
        assert!(mul_pos < plus_pos);
    }

    #[test]
    fn symbol_reuse_shares_one_id() {
        let (codes, syms) = emit_src("@a + @a;");
        assert_eq!(syms, vec!["@a".to_string()]);

        // Walk the stream respecting each opcode's arity, rather than
        // scanning for the opcode's numeric value directly: a register or
        // immediate word can coincidentally equal an opcode's placeholder
        // value.
        let mut addr_ops = Vec::new();
        let mut pos = 0;
        while pos < codes.len() {
            let op = BytecodeOp::from_u32(codes[pos]).unwrap();
            if op == BytecodeOp::AddrSymbol {
                addr_ops.push(codes[pos + 1]);
            }
            pos += 1 + op.operand_words();
        }
        assert_eq!(addr_ops, vec![0, 0]);
    }

    #[test]
    fn two_statements_emit_no_trailing_code() {
        let (codes, _) = emit_src("1; 2;");
        assert_eq!(
            codes,
            vec![
                BytecodeOp::LoadConstInt as u32,
                0,
                1,
                BytecodeOp::LoadConstInt as u32,
                1,
                2,
            ]
        );
    }

    #[test]
    fn assignment_emits_nothing() {
        let (codes, _) = emit_src("@a = 1;");
        // Only the ConstInt and the Sym get code; the assignment op itself
        // contributes nothing.
        assert_eq!(
            codes,
            vec![
                BytecodeOp::AddrSymbol as u32,
                0,
                BytecodeOp::LoadConstInt as u32,
                1,
                1,
            ]
        );
    }

    #[test]
    fn float_immediate_is_bitcast_not_converted() {
        let (codes, _) = emit_src("1.5;");
        assert_eq!(codes[0], BytecodeOp::LoadConstFloat as u32);
        assert_eq!(codes[2], 1.5f32.to_bits());
    }
}
