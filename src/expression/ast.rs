use std::cmp::Ordering;

use log::trace;

use crate::expression::operator::{Notation, Operator};

/// One node of an arithmetic expression tree
///
/// Nodes are only created through [`Expression::leaf`] and
/// [`Expression::combine`] and are never modified afterwards. `value` always
/// holds the result of applying `operator` to the children.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    value: f64,
    operator: Operator,
    children: Vec<Expression>,
}

impl Expression {
    /// Wrap an input number as a leaf
    pub fn leaf(number: i64) -> Self {
        Self {
            value: number as f64,
            operator: Operator::None,
            children: Vec::new(),
        }
    }

    /// Combine two expressions with a binary operator, canonicalizing the result.
    ///
    /// - `+` and `*` absorb operands built with the same operator and sort the
    ///   children by ascending value.
    /// - `a - (x - y)` becomes `a + (y - x)`.
    /// - `a / (x / y)` becomes `a * (y / x)`.
    ///
    /// The caller must not divide by a zero-valued `right`.
    ///
    /// # Panics
    ///
    /// Panics if `operator` is [`Operator::None`].
    pub fn combine(operator: Operator, left: Expression, right: Expression) -> Self {
        debug_assert!(
            operator != Operator::Divide || right.value != 0.0,
            "division by a zero-valued operand"
        );

        let value = operator.apply(left.value, right.value);

        let (operator, children) = match operator {
            Operator::Add | Operator::Multiply => (operator, flatten(operator, [left, right])),
            Operator::Subtract if right.operator == Operator::Subtract => {
                trace!("Rewriting a - (x - y) as a + (y - x)");
                (Operator::Add, vec![left, right.inverted()])
            }
            Operator::Divide if right.operator == Operator::Divide => {
                trace!("Rewriting a / (x / y) as a * (y / x)");
                (Operator::Multiply, vec![left, right.inverted()])
            }
            Operator::Subtract | Operator::Divide => (operator, vec![left, right]),
            Operator::None => unreachable!("cannot combine expressions with the leaf operator"),
        };

        Self {
            value,
            operator,
            children,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn children(&self) -> &[Expression] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.operator == Operator::None
    }

    /// Whether the value lies strictly within `tolerance` of `target`
    pub fn is_close_to(&self, target: f64, tolerance: f64) -> bool {
        (self.value - target).abs() < tolerance
    }

    /// Turn `x - y` into `y - x` (or `x / y` into `y / x`) as a new node.
    fn inverted(self) -> Self {
        let value = match self.operator {
            Operator::Subtract => -self.value,
            Operator::Divide => 1.0 / self.value,
            other => unreachable!("only subtraction and division are inverted, got {other:?}"),
        };

        let mut children = self.children;
        children.reverse();

        Self {
            value,
            operator: self.operator,
            children,
        }
    }
}

/// Merge same-operator operands into one child list in canonical order.
fn flatten(operator: Operator, operands: [Expression; 2]) -> Vec<Expression> {
    let mut children = Vec::with_capacity(4);
    for operand in operands {
        if operand.operator == operator {
            children.extend(operand.children);
        } else {
            children.push(operand);
        }
    }
    children.sort_by(canonical_order);
    children
}

/// Ascending value; equal values fall back to their rendered text.
fn canonical_order(a: &Expression, b: &Expression) -> Ordering {
    a.value
        .partial_cmp(&b.value)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.render(Notation::Ascii).cmp(&b.render(Notation::Ascii)))
}
