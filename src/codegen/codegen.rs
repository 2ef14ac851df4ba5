use crate::lexer::Instruction;

use super::{loop_tracker::LoopTracker, AssemblyFragment, CodegenError};

/// Declares the zero-initialized 9999-byte tape and points `rsi` (the data
/// pointer) at its base.
pub const PROLOGUE: &str = "section .data\n\
    \ttape times 9999 db 0\n\
    section .text\n\
    global _start\n\
    _start:\n\
    mov rsi, tape\n\n";

/// Exit syscall with status 0.
pub const EPILOGUE: &str = "mov rax, 60\n\
    xor rdi, rdi\n\
    syscall";

/// Translate one instruction into its assembly fragment.
///
/// `rsi` holds the data pointer throughout the generated program, which is
/// why the read/write syscall blocks never touch it: the byte at `[rsi]` is
/// already the source/destination buffer.
pub fn translate(
    instruction: Instruction,
    tracker: &mut LoopTracker,
) -> Result<AssemblyFragment, CodegenError> {
    Ok(match instruction {
        Instruction::MoveRight => "inc rsi\n".to_string(),
        Instruction::MoveLeft => "dec rsi\n".to_string(),
        Instruction::Increment => "inc byte [rsi]\n".to_string(),
        Instruction::Decrement => "dec byte [rsi]\n".to_string(),

        // write syscall: one byte from [rsi] to stdout
        Instruction::Output => "mov rax, 1\n\
            mov rdi, 1\n\
            mov rdx, 1\n\
            syscall\n"
            .to_string(),

        // read syscall: one byte from stdin into [rsi]
        Instruction::Input => "mov rax, 0\n\
            mov rdi, 0\n\
            mov rdx, 1\n\
            syscall\n"
            .to_string(),

        // skip the body up front when the byte is already zero
        Instruction::LoopOpen => {
            let n = tracker.open();
            format!("loop_{n}:\ncmp byte [rsi], 0\nje loop_end_{n}\n")
        }

        // jump back while the byte is non-zero
        Instruction::LoopClose => {
            let n = tracker.close()?;
            format!("cmp byte [rsi], 0\njne loop_{n}\nloop_end_{n}:\n")
        }
    })
}

/// One pass over the whole program: prologue, one fragment per instruction
/// in input order, epilogue. Any error aborts the pass with no partial
/// recovery.
pub fn emit_program(instructions: &[Instruction]) -> Result<String, CodegenError> {
    let mut tracker = LoopTracker::new();
    let mut output = String::from(PROLOGUE);

    for &instruction in instructions {
        output.push_str(&translate(instruction, &mut tracker)?);
    }
    tracker.finish()?;

    output.push_str(EPILOGUE);
    Ok(output)
}
