use thiserror::Error;

pub mod codegen;
pub mod loop_tracker;

/// Identifier handed out when a loop is opened; numbers the generated
/// `loop_n`/`loop_end_n` label pair.
pub type LoopId = usize;

/// One unit of emitted assembly text, corresponding to one source instruction.
pub type AssemblyFragment = String;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    #[error("Mismatched closing square bracket: `]` with no matching `[`")]
    UnbalancedLoop,

    #[error("End of input with {depth} unclosed loop(s): `[` with no matching `]`")]
    UnclosedLoop { depth: usize },
}
