//! Algebraic clean-up of parsed equations.

use super::{BinaryOp, Expr};

/// Fold constant subtrees and drop neutral elements.
///
/// Folding uses the same arithmetic as evaluation, so the simplified tree
/// evaluates to what the unsimplified one would have.
pub fn simplify(expr: Expr) -> Expr {
    match expr {
        Expr::Neg(inner) => match simplify(*inner) {
            Expr::Number(n) => Expr::Number(-n),
            Expr::Neg(double) => *double,
            other => Expr::Neg(Box::new(other)),
        },
        Expr::Binary { op, lhs, rhs } => simplify_binary(op, simplify(*lhs), simplify(*rhs)),
        Expr::Call { function, args } => {
            let args: Vec<Expr> = args.into_iter().map(simplify).collect();
            let call = Expr::Call { function, args };
            if call.is_constant() {
                Expr::Number(call.eval(&|_| f64::NAN))
            } else {
                call
            }
        },
        leaf => leaf,
    }
}

fn simplify_binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    if let (Some(a), Some(b)) = (literal(&lhs), literal(&rhs)) {
        return Expr::Number(op.apply(a, b));
    }

    match (op, literal(&lhs), literal(&rhs)) {
        (BinaryOp::Add, Some(z), _) if z == 0.0 => rhs,
        (BinaryOp::Add, _, Some(z)) if z == 0.0 => lhs,
        (BinaryOp::Sub, _, Some(z)) if z == 0.0 => lhs,
        (BinaryOp::Sub, Some(z), _) if z == 0.0 => simplify(Expr::Neg(Box::new(rhs))),
        (BinaryOp::Mul, Some(one), _) if one == 1.0 => rhs,
        (BinaryOp::Mul, _, Some(one)) if one == 1.0 => lhs,
        (BinaryOp::Div, _, Some(one)) if one == 1.0 => lhs,
        (BinaryOp::Pow, _, Some(one)) if one == 1.0 => lhs,
        (BinaryOp::Pow, _, Some(z)) if z == 0.0 => Expr::Number(1.0),
        _ => Expr::binary(op, lhs, rhs),
    }
}

/// Numeric value of a leaf that does not depend on any variable.
fn literal(expr: &Expr) -> Option<f64> {
    match expr {
        Expr::Number(n) => Some(*n),
        Expr::Constant(c) => Some(c.value()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{Constant, Function, Variable};

    fn x() -> Expr {
        Expr::Variable(Variable::X)
    }

    #[test]
    fn folds_constants() {
        let e = Expr::binary(
            BinaryOp::Mul,
            Expr::Number(2.0),
            Expr::Constant(Constant::Pi),
        );
        assert_eq!(simplify(e), Expr::Number(2.0 * std::f64::consts::PI));
    }

    #[test]
    fn folds_constant_calls() {
        let e = Expr::Call {
            function: Function::Sqrt,
            args: vec![Expr::Number(16.0)],
        };
        assert_eq!(simplify(e), Expr::Number(4.0));
    }

    #[test]
    fn drops_neutral_elements() {
        let e = Expr::binary(
            BinaryOp::Add,
            Expr::binary(BinaryOp::Mul, Expr::Number(1.0), x()),
            Expr::Number(0.0),
        );
        assert_eq!(simplify(e), x());

        let e = Expr::binary(BinaryOp::Pow, x(), Expr::Number(1.0));
        assert_eq!(simplify(e), x());

        let e = Expr::binary(BinaryOp::Sub, Expr::Number(0.0), x());
        assert_eq!(simplify(e), Expr::Neg(Box::new(x())));
    }

    #[test]
    fn double_negation() {
        let e = Expr::Neg(Box::new(Expr::Neg(Box::new(x()))));
        assert_eq!(simplify(e), x());
    }

    #[test]
    fn keeps_variable_terms() {
        let e = Expr::binary(BinaryOp::Mul, x(), Expr::Number(3.0));
        assert_eq!(simplify(e.clone()), e);
    }

    #[test]
    fn undefined_constant_folds_to_nan() {
        let e = Expr::binary(BinaryOp::Div, Expr::Number(1.0), Expr::Number(0.0));
        assert!(matches!(simplify(e), Expr::Number(n) if n.is_nan()));
    }
}
