//! Equation text to [`Expr`] via the `pest` grammar.

use super::{allowed_names, BinaryOp, Constant, Expr, Function, Variable};
use crate::error::{Result, VizError};
use pest::error::{Error as PestError, LineColLocation};
use pest::iterators::{Pair, Pairs};
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest::Parser;

#[allow(missing_docs, unreachable_pub)]
mod grammar {
    use pest_derive::Parser;

    #[derive(Parser)]
    #[grammar = "expr/grammar.pest"]
    pub struct EquationParser;
}

use grammar::{EquationParser, Rule};

fn pratt() -> PrattParser<Rule> {
    PrattParser::new()
        .op(Op::infix(Rule::Add, Assoc::Left) | Op::infix(Rule::Sub, Assoc::Left))
        .op(Op::infix(Rule::Mul, Assoc::Left) | Op::infix(Rule::Div, Assoc::Left))
        .op(Op::prefix(Rule::Neg) | Op::prefix(Rule::Pos))
        .op(Op::infix(Rule::Pow, Assoc::Right))
}

/// Parse equation text, resolving identifiers against `variables` and the
/// allow-list.
pub(super) fn parse(source: &str, variables: &[Variable]) -> Result<Expr> {
    let mut pairs = EquationParser::parse(Rule::Equation, source).map_err(syntax_error)?;

    let expr = pairs
        .next()
        .and_then(|equation| equation.into_inner().next())
        .ok_or(VizError::EmptyExpression)?;

    Resolver {
        variables,
        pratt: pratt(),
    }
    .expr(expr.into_inner())
}

struct Resolver<'v> {
    variables: &'v [Variable],
    pratt: PrattParser<Rule>,
}

impl Resolver<'_> {
    fn expr(&self, pairs: Pairs<'_, Rule>) -> Result<Expr> {
        self.pratt
            .map_primary(|primary| self.primary(primary))
            .map_prefix(|op, rhs| match op.as_rule() {
                Rule::Neg => Ok(Expr::Neg(Box::new(rhs?))),
                _ => rhs,
            })
            .map_infix(|lhs, op, rhs| {
                let op = match op.as_rule() {
                    Rule::Add => BinaryOp::Add,
                    Rule::Sub => BinaryOp::Sub,
                    Rule::Mul => BinaryOp::Mul,
                    Rule::Div => BinaryOp::Div,
                    _ => BinaryOp::Pow,
                };
                Ok(Expr::binary(op, lhs?, rhs?))
            })
            .parse(pairs)
    }

    fn primary(&self, pair: Pair<'_, Rule>) -> Result<Expr> {
        match pair.as_rule() {
            Rule::Number => pair
                .as_str()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Expr::Number)
                .ok_or_else(|| VizError::Syntax {
                    column: pair.as_span().start() + 1,
                    message: format!("invalid number `{}`", pair.as_str()),
                }),
            Rule::Ident => self.symbol(pair.as_str()),
            Rule::Call => self.call(pair),
            Rule::Expr => self.expr(pair.into_inner()),
            rule => Err(VizError::Syntax {
                column: pair.as_span().start() + 1,
                message: format!("unexpected {:?}", rule),
            }),
        }
    }

    fn symbol(&self, name: &str) -> Result<Expr> {
        if let Some(var) = Variable::from_name(name).filter(|v| self.variables.contains(v)) {
            return Ok(Expr::Variable(var));
        }
        if let Some(constant) = Constant::from_name(name) {
            return Ok(Expr::Constant(constant));
        }
        Err(self.undefined(name))
    }

    fn call(&self, pair: Pair<'_, Rule>) -> Result<Expr> {
        let mut inner = pair.into_inner();
        let name = inner.next().map(|p| p.as_str()).unwrap_or_default();
        let function = Function::from_name(name).ok_or_else(|| self.undefined(name))?;

        let args = inner
            .map(|arg| self.expr(arg.into_inner()))
            .collect::<Result<Vec<_>>>()?;

        if !function.accepts(args.len()) {
            return Err(VizError::Arity {
                function: function.name(),
                expected: function.arity_label().to_string(),
                found: args.len(),
            });
        }

        Ok(Expr::Call { function, args })
    }

    fn undefined(&self, name: &str) -> VizError {
        tracing::debug!("Rejected identifier `{}`", name);
        VizError::UndefinedSymbol {
            name: name.to_string(),
            allowed: allowed_names(self.variables),
        }
    }
}

fn syntax_error(err: PestError<Rule>) -> VizError {
    let err = err.renamed_rules(|rule| {
        match rule {
            Rule::Equation | Rule::Expr => "expression",
            Rule::Number => "number",
            Rule::Ident | Rule::Call => "name",
            Rule::Add | Rule::Pos => "`+`",
            Rule::Sub | Rule::Neg => "`-`",
            Rule::Mul => "`*`",
            Rule::Div => "`/`",
            Rule::Pow => "`**`",
            Rule::EOI => "end of input",
            _ => "token",
        }
        .to_string()
    });
    let column = match err.line_col {
        LineColLocation::Pos((_, col)) | LineColLocation::Span((_, col), _) => col,
    };
    VizError::Syntax {
        column,
        message: err.variant.message().into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: &[Variable] = &[Variable::X];
    const XY: &[Variable] = &[Variable::X, Variable::Y];

    fn eval(source: &str, vars: &[Variable], x: f64, y: f64) -> f64 {
        let expr = parse(source, vars).unwrap();
        expr.eval(&|v| match v {
            Variable::X => x,
            Variable::Y => y,
        })
    }

    #[test]
    fn precedence_and_associativity() {
        assert_eq!(eval("1 + 2 * 3", X, 0.0, 0.0), 7.0);
        assert_eq!(eval("2 ** 3 ** 2", X, 0.0, 0.0), 512.0);
        assert_eq!(eval("2 ^ 3 ^ 2", X, 0.0, 0.0), 512.0);
        assert_eq!(eval("-x**2", X, 3.0, 0.0), -9.0);
        assert_eq!(eval("(-x)**2", X, 3.0, 0.0), 9.0);
        assert_eq!(eval("8 / 4 / 2", X, 0.0, 0.0), 1.0);
        assert_eq!(eval("10 - 4 - 3", X, 0.0, 0.0), 3.0);
        assert_eq!(eval("2**-1", X, 0.0, 0.0), 0.5);
        assert_eq!(eval("+x - -x", X, 2.0, 0.0), 4.0);
    }

    #[test]
    fn functions_and_constants() {
        assert!((eval("sin(pi/2)", X, 0.0, 0.0) - 1.0).abs() < 1e-12);
        assert!((eval("ln(e)", X, 0.0, 0.0) - 1.0).abs() < 1e-12);
        assert!((eval("log(100, 10)", X, 0.0, 0.0) - 2.0).abs() < 1e-12);
        assert_eq!(eval("sqrt(x**2 + y**2)", XY, 3.0, 4.0), 5.0);
        assert_eq!(eval("abs(x) * 1.5e1", X, -2.0, 0.0), 30.0);
    }

    #[test]
    fn rejects_unknown_function() {
        let err = parse("foo(x)", X).unwrap_err();
        assert!(matches!(err, VizError::UndefinedSymbol { ref name, .. } if name == "foo"));
    }

    #[test]
    fn rejects_undeclared_variable() {
        let err = parse("x + y", X).unwrap_err();
        assert!(matches!(err, VizError::UndefinedSymbol { ref name, .. } if name == "y"));
        assert!(parse("x + y", XY).is_ok());
    }

    #[test]
    fn rejects_code_like_input() {
        for source in ["__import__(x)", "exec(x)", "x.real", "open(x)", "sin"] {
            assert!(parse(source, X).is_err(), "{source} should be rejected");
        }
    }

    #[test]
    fn rejects_calling_a_constant() {
        assert!(matches!(
            parse("pi(2)", X),
            Err(VizError::UndefinedSymbol { .. })
        ));
    }

    #[test]
    fn arity_is_checked() {
        assert!(matches!(
            parse("sin(x, 2)", X),
            Err(VizError::Arity { function: "sin", found: 2, .. })
        ));
        assert!(matches!(parse("exp()", X), Err(VizError::Arity { found: 0, .. })));
    }

    #[test]
    fn syntax_errors_carry_a_column() {
        match parse("x + * 2", X) {
            Err(VizError::Syntax { column, .. }) => assert_eq!(column, 5),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(parse("2x", X), Err(VizError::Syntax { .. })));
        assert!(matches!(parse("(x + 1", X), Err(VizError::Syntax { .. })));
    }

    #[test]
    fn overflowing_literal_is_rejected() {
        assert!(matches!(parse("1e999 * x", X), Err(VizError::Syntax { column: 1, .. })));
    }
}
