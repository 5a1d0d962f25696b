use std::fmt;

use crate::expression::ast::Expression;
use crate::expression::operator::Notation;

/// An expression paired with the notation it is written in
pub struct Rendered<'a> {
    expression: &'a Expression,
    notation: Notation,
}

impl Expression {
    /// Borrow this expression as something printable in the given notation
    pub fn display(&self, notation: Notation) -> Rendered<'_> {
        Rendered {
            expression: self,
            notation,
        }
    }

    /// Render this expression with minimal parentheses
    pub fn render(&self, notation: Notation) -> String {
        self.display(notation).to_string()
    }
}

fn fmt_expression(
    f: &mut fmt::Formatter,
    expr: &Expression,
    notation: Notation,
    need_parens: bool,
) -> fmt::Result {
    if expr.is_leaf() {
        return write!(f, "{:.0}", expr.value());
    }

    if need_parens {
        write!(f, "(")?;
    }

    let operator = expr.operator();
    for (position, child) in expr.children().iter().enumerate() {
        if position > 0 {
            write!(f, " {} ", operator.symbol(notation))?;
        }
        let need = operator.needs_parentheses(child.operator(), position == 0);
        fmt_expression(f, child, notation, need)?;
    }

    if need_parens {
        write!(f, ")")?;
    }
    Ok(())
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_expression(f, self.expression, self.notation, false)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_expression(f, self, Notation::Ascii, false)
    }
}
