use std::fmt;

/// How operators are spelled when an expression is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Notation {
    /// `+ - * /`
    #[default]
    Ascii,
    /// `+ - × ÷`
    Unicode,
}

/// The operator that produced an expression node
///
/// `None` marks a leaf holding one of the input numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    None,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The binary operators, in the order the search tries them
    pub const BINARY: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Grouping tier used when deciding on parentheses
    pub fn precedence(self) -> u8 {
        match self {
            Operator::None => 100,
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
        }
    }

    /// Whether a child built with `child` must be wrapped in parentheses
    /// when it appears under `self`, on the left side if `is_left`.
    pub fn needs_parentheses(self, child: Operator, is_left: bool) -> bool {
        let parent_tier = self.precedence();
        let child_tier = child.precedence();

        if parent_tier < child_tier {
            return false;
        }

        if parent_tier == child_tier {
            match (self, child) {
                (Operator::Add | Operator::Multiply, _) => return false,
                (Operator::Subtract, Operator::Add) | (Operator::Divide, Operator::Multiply)
                    if is_left =>
                {
                    return false;
                }
                _ => {}
            }
        }

        true
    }

    /// The textual symbol for this operator, empty for leaves
    pub fn symbol(self, notation: Notation) -> &'static str {
        match (self, notation) {
            (Operator::None, _) => "",
            (Operator::Add, _) => "+",
            (Operator::Subtract, _) => "-",
            (Operator::Multiply, Notation::Ascii) => "*",
            (Operator::Multiply, Notation::Unicode) => "×",
            (Operator::Divide, Notation::Ascii) => "/",
            (Operator::Divide, Notation::Unicode) => "÷",
        }
    }

    pub(crate) fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
            Operator::None => unreachable!("a leaf operator has no arithmetic"),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol(Notation::Ascii))
    }
}
