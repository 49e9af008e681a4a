//! The five-pass ZFX compilation pipeline: tokenizer → parser → lowerer →
//! scanner → emitter, orchestrated by [`compile`].
//!
//! Each pass consumes the previous pass's output and owns its own; there
//! are no back-edges, and nothing about one compile is visible to another.

pub mod ast;
pub mod emit;
pub mod errors;
pub mod lower;
pub mod parser;
pub mod scan;
pub mod tokenizer;
pub mod types;

pub use errors::CompileError;
pub use types::{CompileOutput, IrId, IrNode, Op, RegId, SymId, Token};

/// Compiles `src` into a bytecode stream, a symbol table, and a register
/// count.
///
/// This is the crate's sole entry point. It either returns a complete
/// [`CompileOutput`] or a single [`CompileError`]; there is no partial
/// output and no recovery.
pub fn compile(src: &str) -> Result<CompileOutput, CompileError> {
    let tokens = tokenizer::tokenize(src)?;
    let ast = parser::parse(&tokens)?;

    let mut ir = Vec::new();
    lower::lower(&ast, &mut ir);

    let (reglut, _deps) = scan::scan(&ir);
    let (codes, syms) = emit::emit(&ir, &reglut);

    Ok(CompileOutput {
        codes,
        syms,
        nregs: ir.len() as u32,
    })
}
