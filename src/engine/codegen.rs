use std::{
    fmt,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, trace};

use crate::{
    ast::{Node, Operator},
    error::Error,
};

/// Name of the primary register. Every subexpression leaves its result here.
pub const PRIMARY: &str = "AX";
/// Name of the secondary register. Receives the spilled left operand.
pub const SECONDARY: &str = "BX";

/// One pseudo-instruction of the two-register stack machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `MOV AX, <value>`: load a literal into the primary register.
    Load(i64),
    /// `PUSH AX`: spill the primary register onto the stack.
    Push,
    /// `POP BX`: restore the most recent spill into the secondary register.
    Pop,
    /// `<OP> AX, BX, AX`: `AX := BX <op> AX`. The left operand is in the
    /// secondary register, the right operand in the primary register.
    Apply(Operator),
}

impl Instruction {
    const fn mnemonic(op: Operator) -> &'static str {
        match op {
            Operator::Add => "ADD",
            Operator::Sub => "SUB",
            Operator::Mul => "MUL",
            Operator::Div => "DIV",
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(value) => write!(f, "MOV {PRIMARY}, {value}"),
            Self::Push => write!(f, "PUSH {PRIMARY}"),
            Self::Pop => write!(f, "POP {SECONDARY}"),
            Self::Apply(op) => {
                write!(f, "{} {PRIMARY}, {SECONDARY}, {PRIMARY}", Self::mnemonic(*op))
            },
        }
    }
}

/// Emits the instruction sequence computing `node` into the primary register.
///
/// The walk is post-order. For an operator node the left operand is computed
/// and spilled, the right operand is computed, the spill is popped into the
/// secondary register and the operator is applied. Pushes and pops therefore
/// nest like the tree itself: there is one of each per operator node and the
/// stack is empty once the whole tree has been emitted.
///
/// Nothing is evaluated, so a division by a zero literal still produces a
/// `DIV` instruction.
///
/// # Example
/// ```
/// use exprtree::{
///     ast::Operator,
///     engine::codegen::{Instruction, generate},
///     parse,
/// };
///
/// let code = generate(&parse("2-1").unwrap());
/// assert_eq!(code,
///            vec![Instruction::Load(2),
///                 Instruction::Push,
///                 Instruction::Load(1),
///                 Instruction::Pop,
///                 Instruction::Apply(Operator::Sub)]);
/// ```
#[must_use]
pub fn generate(node: &Node) -> Vec<Instruction> {
    let mut code = Vec::new();
    emit(node, &mut code);
    debug!(instructions = code.len(), "code generated");
    code
}

fn emit(node: &Node, code: &mut Vec<Instruction>) {
    match node {
        Node::Operand { value } => code.push(Instruction::Load(*value)),
        Node::Operator { op, left, right } => {
            emit(left, code);
            code.push(Instruction::Push);
            emit(right, code);
            code.push(Instruction::Pop);
            trace!(%op, "apply");
            code.push(Instruction::Apply(*op));
        },
    }
}

/// A complete assembly listing: the generated instructions embedded between
/// a fixed header and a fixed footer.
///
/// The header names the program entry point, the footer hands the primary
/// register to a placeholder output routine and halts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    source:       String,
    instructions: Vec<Instruction>,
}

impl Program {
    /// MIME type of an exported listing.
    pub const CONTENT_TYPE: &'static str = "text/plain";
    /// File extension of an exported listing.
    pub const EXTENSION: &'static str = "asm";
    /// File stem used when none is given.
    pub const DEFAULT_STEM: &'static str = "expression";

    /// Generates the program for `node`, recording `source` in its header.
    ///
    /// The recorded source is collapsed to a single line so that it stays
    /// inside the header comment.
    #[must_use]
    pub fn new(source: &str, node: &Node) -> Self {
        Self { source:       source.split_whitespace().collect::<Vec<_>>().join(" "),
               instructions: generate(node), }
    }

    /// The instructions between header and footer.
    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of `PUSH` instructions.
    #[must_use]
    pub fn push_count(&self) -> usize {
        self.instructions
            .iter()
            .filter(|i| matches!(i, Instruction::Push))
            .count()
    }

    /// Number of `POP` instructions.
    #[must_use]
    pub fn pop_count(&self) -> usize {
        self.instructions
            .iter()
            .filter(|i| matches!(i, Instruction::Pop))
            .count()
    }

    /// The default export file name, `expression.asm`.
    #[must_use]
    pub fn file_name() -> String {
        Self::file_name_with_stem(Self::DEFAULT_STEM)
    }

    /// The export file name for a custom stem.
    #[must_use]
    pub fn file_name_with_stem(stem: &str) -> String {
        format!("{stem}.{}", Self::EXTENSION)
    }

    /// Writes the listing to `path`. If `path` is an existing directory the
    /// listing is written to `path/expression.asm`.
    ///
    /// # Returns
    /// The path that was written.
    ///
    /// # Errors
    /// Returns [`Error::Export`] if the file cannot be written.
    pub fn write_to(&self, path: &Path) -> Result<PathBuf, Error> {
        let target = if path.is_dir() {
            path.join(Self::file_name())
        } else {
            path.to_path_buf()
        };

        if let Err(e) = fs::write(&target, self.to_string()) {
            return Err(Error::Export { path:   target,
                                       source: e, });
        }
        debug!(path = %target.display(), "program written");
        Ok(target)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "; Generated by exprtree")?;
        writeln!(f, "; Expression: {}", self.source)?;
        writeln!(f, "section .text")?;
        writeln!(f, "global _start")?;
        writeln!(f)?;
        writeln!(f, "_start:")?;

        for instruction in &self.instructions {
            writeln!(f, "    {instruction}")?;
        }

        writeln!(f, "    CALL print_result")?;
        writeln!(f, "    HLT")?;
        writeln!(f)?;
        writeln!(f, "print_result:")?;
        writeln!(f, "    ; output routine: prints the value held in {PRIMARY}")?;
        writeln!(f, "    RET")
    }
}
