use super::{CodegenError, LoopId};

/// Nesting state for `[`/`]` during the single translation pass.
///
/// Ids come from a counter of every loop opened so far in the program, not
/// from stack depth, so sibling loops that reuse the same depth still get
/// distinct `loop_n` labels. The stack itself only remembers which ids are
/// still waiting on their `]`.
#[derive(Debug, Default)]
pub struct LoopTracker {
    /// Ids of the currently unmatched `[`s, innermost last.
    stack: Vec<LoopId>,

    /// Total loops opened so far; always greater than any id on the stack.
    opened: usize,
}

impl LoopTracker {
    pub fn new() -> LoopTracker {
        LoopTracker::default()
    }

    /// Open a new loop and return its id. The first loop in a program is 1.
    pub fn open(&mut self) -> LoopId {
        self.opened += 1;
        self.stack.push(self.opened);
        self.opened
    }

    /// Close the innermost open loop and return its id.
    pub fn close(&mut self) -> Result<LoopId, CodegenError> {
        self.stack.pop().ok_or(CodegenError::UnbalancedLoop)
    }

    /// Current unmatched-open-bracket nesting.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Called once the pass is over: any loop still open means the program
    /// ended before its matching `]`.
    pub fn finish(&self) -> Result<(), CodegenError> {
        if self.stack.is_empty() {
            Ok(())
        } else {
            Err(CodegenError::UnclosedLoop {
                depth: self.stack.len(),
            })
        }
    }
}
