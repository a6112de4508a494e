use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    pub fn char(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Sub => '-',
            Operation::Mul => '*',
            Operation::Div => '/',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operation::Add),
            '-' => Some(Operation::Sub),
            '*' => Some(Operation::Mul),
            '/' => Some(Operation::Div),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

#[test]
fn symbol_round_trip() {
    for op in [Operation::Add, Operation::Sub, Operation::Mul, Operation::Div] {
        assert_eq!(Operation::from_char(op.char()), Some(op));
    }
    assert_eq!(Operation::from_char('%'), None);
}
