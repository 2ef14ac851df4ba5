use super::Instruction;

/// Filters raw source text down to the eight instruction characters.
/// Everything else (whitespace, prose, commentary) is skipped outright,
/// so a program and the same program with garbage interleaved lex identically.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    chars: std::str::Chars<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            chars: source.chars(),
        }
    }

    pub fn next_instruction(&mut self) -> Option<Instruction> {
        for c in self.chars.by_ref() {
            if let Some(instruction) = Instruction::from_char(c) {
                return Some(instruction);
            }
        }
        None
    }

    pub fn collect_instructions(&mut self) -> Vec<Instruction> {
        let mut v = vec![];
        while let Some(instruction) = self.next_instruction() {
            v.push(instruction);
        }
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Instruction::*;

    #[test]
    fn lexes_all_eight_instructions() {
        let instructions = Lexer::new("><+-.,[]").collect_instructions();
        assert_eq!(
            instructions,
            vec![MoveRight, MoveLeft, Increment, Decrement, Output, Input, LoopOpen, LoopClose]
        );
    }

    #[test]
    fn skips_everything_else() {
        let instructions = Lexer::new("read a char, then print it.\n").collect_instructions();
        // only the `,` and `.` in the prose are instructions
        assert_eq!(instructions, vec![Input, Output]);
    }

    #[test]
    fn garbage_interleaving_changes_nothing() {
        let clean = Lexer::new("+++.").collect_instructions();
        let noisy = Lexer::new(" +\n+ comment + here .\t").collect_instructions();
        assert_eq!(clean, noisy);
    }

    #[test]
    fn empty_source_lexes_to_nothing() {
        assert!(Lexer::new("").collect_instructions().is_empty());
        assert!(Lexer::new("no instructions at all?!").collect_instructions().is_empty());
    }
}
