//! A compiler for ZFX, a small expression-oriented language, targeting a
//! linear, register-based bytecode.
//!
//! A ZFX program is a sequence of semicolon-terminated expression
//! statements. Compilation runs in five passes: tokenizer, parser,
//! lowerer, scanner, emitter, each producing the next pass's input and
//! nothing else. [`compile`] is the only way in.
//!
//! ```
//! let out = zfx::compile("@x = 1 + 2 * 3;").unwrap();
//! assert!(!out.codes.is_empty());
//! ```

pub mod bytecode;
pub mod compiler;

pub use bytecode::BytecodeOp;
pub use compiler::{compile, CompileError, CompileOutput};
