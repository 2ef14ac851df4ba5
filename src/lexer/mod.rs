pub mod lexer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    // `>`: Increment the `data pointer` by one
    MoveRight,
    // `<`: Decrement the `data pointer` by one
    MoveLeft,

    // `+`: Increment the byte at the `data pointer` by one
    Increment,
    // `-`: Decrement the byte at the `data pointer` by one
    Decrement,

    // `.`: Write the byte at the `data pointer` to stdout
    Output,
    // `,`: Read the next byte from stdin and store it at the `data pointer`
    Input,

    // `[`: If the byte at the `data pointer` is zero, jump forward past the matching `]`
    LoopOpen,
    // `]`: If the byte at the `data pointer` is non-zero, jump back to the matching `[`
    LoopClose,
}

impl Instruction {
    pub fn from_char(c: char) -> Option<Instruction> {
        match c {
            '>' => Some(Instruction::MoveRight),
            '<' => Some(Instruction::MoveLeft),
            '+' => Some(Instruction::Increment),
            '-' => Some(Instruction::Decrement),
            '.' => Some(Instruction::Output),
            ',' => Some(Instruction::Input),
            '[' => Some(Instruction::LoopOpen),
            ']' => Some(Instruction::LoopClose),
            _ => None,
        }
    }
}
