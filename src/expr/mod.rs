//! Equation parsing and vectorised evaluation.
//!
//! Equations are parsed with a `pest` grammar into an [`Expr`] tree whose
//! identifiers are resolved against a closed allow-list: the declared
//! variables, the constants in [`Constant`] and the functions in
//! [`Function`]. Nothing outside that list can be named, so an equation can
//! only ever describe arithmetic.

mod eval;
mod parser;
mod simplify;

pub use eval::CompiledExpr;
pub use simplify::simplify;

use crate::error::{Result, VizError};
use std::fmt;

/// Free variable of an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    /// Horizontal axis.
    X,
    /// Depth axis (3D only).
    Y,
}

impl Variable {
    /// Symbol as written in equations.
    pub fn name(self) -> &'static str {
        match self {
            Variable::X => "x",
            Variable::Y => "y",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "x" => Some(Variable::X),
            "y" => Some(Variable::Y),
            _ => None,
        }
    }
}

/// Named constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    /// π
    Pi,
    /// Euler's number.
    E,
}

impl Constant {
    /// Every constant an equation may use.
    pub const ALL: [Constant; 2] = [Constant::Pi, Constant::E];

    /// Symbol as written in equations.
    pub fn name(self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "e",
        }
    }

    /// Numeric value.
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// Functions an equation may call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Tangent.
    Tan,
    /// Inverse sine.
    Asin,
    /// Inverse cosine.
    Acos,
    /// Inverse tangent.
    Atan,
    /// Square root.
    Sqrt,
    /// Absolute value.
    Abs,
    /// Natural logarithm (optional base as second argument).
    Ln,
    /// Natural logarithm, alias of `ln`.
    Log,
    /// Exponential.
    Exp,
}

impl Function {
    /// Every function an equation may call.
    pub const ALL: [Function; 11] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Asin,
        Function::Acos,
        Function::Atan,
        Function::Sqrt,
        Function::Abs,
        Function::Ln,
        Function::Log,
        Function::Exp,
    ];

    /// Symbol as written in equations.
    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Sqrt => "sqrt",
            Function::Abs => "abs",
            Function::Ln => "ln",
            Function::Log => "log",
            Function::Exp => "exp",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Whether `count` arguments are accepted.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Function::Ln | Function::Log => count == 1 || count == 2,
            _ => count == 1,
        }
    }

    fn arity_label(self) -> &'static str {
        match self {
            Function::Ln | Function::Log => "1 or 2",
            _ => "1",
        }
    }

    /// Apply to already evaluated arguments.
    ///
    /// Domain errors yield NaN, the same as IEEE arithmetic does.
    pub fn apply(self, args: &[f64]) -> f64 {
        let a = args.first().copied().unwrap_or(f64::NAN);
        match self {
            Function::Sin => a.sin(),
            Function::Cos => a.cos(),
            Function::Tan => a.tan(),
            Function::Asin => a.asin(),
            Function::Acos => a.acos(),
            Function::Atan => a.atan(),
            Function::Sqrt => a.sqrt(),
            Function::Abs => a.abs(),
            Function::Exp => a.exp(),
            Function::Ln | Function::Log => match args.get(1) {
                Some(&base) => a.ln() / base.ln(),
                None => a.ln(),
            },
        }
    }
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `**` or `^`
    Pow,
}

impl BinaryOp {
    /// Evaluate on two operands.
    ///
    /// Division by zero is undefined and yields NaN rather than an infinity.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div if rhs == 0.0 => f64::NAN,
            BinaryOp::Div => lhs / rhs,
            BinaryOp::Pow => lhs.powf(rhs),
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }

    fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div => 2,
            BinaryOp::Pow => 4,
        }
    }
}

/// Unary minus sits between multiplication and power.
const NEG_PRECEDENCE: u8 = 3;
const ATOM_PRECEDENCE: u8 = 5;

/// Parsed equation.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal.
    Number(f64),
    /// Named constant.
    Constant(Constant),
    /// Declared free variable.
    Variable(Variable),
    /// Negation.
    Neg(Box<Expr>),
    /// Binary operation.
    Binary {
        /// Operator.
        op: BinaryOp,
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
    },
    /// Allow-listed function call.
    Call {
        /// Function.
        function: Function,
        /// Arguments.
        args: Vec<Expr>,
    },
}

impl Expr {
    /// Build a binary node.
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Evaluate at one sample, looking variables up through `bind`.
    ///
    /// Intermediate infinities are kept so that e.g. `1/exp(1000)` is 0;
    /// callers decide what to do with a non-finite final value.
    pub fn eval(&self, bind: &dyn Fn(Variable) -> f64) -> f64 {
        match self {
            Expr::Number(n) => *n,
            Expr::Constant(c) => c.value(),
            Expr::Variable(v) => bind(*v),
            Expr::Neg(inner) => -inner.eval(bind),
            Expr::Binary { op, lhs, rhs } => op.apply(lhs.eval(bind), rhs.eval(bind)),
            Expr::Call { function, args } => {
                let values: Vec<f64> = args.iter().map(|a| a.eval(bind)).collect();
                function.apply(&values)
            },
        }
    }

    /// Whether the tree is free of variables.
    pub fn is_constant(&self) -> bool {
        match self {
            Expr::Number(_) | Expr::Constant(_) => true,
            Expr::Variable(_) => false,
            Expr::Neg(inner) => inner.is_constant(),
            Expr::Binary { lhs, rhs, .. } => lhs.is_constant() && rhs.is_constant(),
            Expr::Call { args, .. } => args.iter().all(Expr::is_constant),
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Neg(_) => NEG_PRECEDENCE,
            Expr::Binary { op, .. } => op.precedence(),
            Expr::Number(n) if *n < 0.0 => NEG_PRECEDENCE,
            _ => ATOM_PRECEDENCE,
        }
    }

    fn fmt_child(&self, f: &mut fmt::Formatter<'_>, min: u8) -> fmt::Result {
        if self.precedence() < min {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Constant(c) => f.write_str(c.name()),
            Expr::Variable(v) => f.write_str(v.name()),
            Expr::Neg(inner) => {
                f.write_str("-")?;
                inner.fmt_child(f, NEG_PRECEDENCE + 1)
            },
            Expr::Binary { op, lhs, rhs } => {
                let p = op.precedence();
                // Power is right associative, everything else left associative.
                let (left_min, right_min) = if *op == BinaryOp::Pow {
                    (p + 1, p)
                } else {
                    (p, p + 1)
                };
                lhs.fmt_child(f, left_min)?;
                write!(f, " {} ", op.symbol())?;
                rhs.fmt_child(f, right_min)
            },
            Expr::Call { function, args } => {
                write!(f, "{}(", function.name())?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(")")
            },
        }
    }
}

/// Names accepted for a declared variable set, for error messages.
fn allowed_names(variables: &[Variable]) -> String {
    variables
        .iter()
        .map(|v| v.name())
        .chain(Constant::ALL.iter().map(|c| c.name()))
        .chain(Function::ALL.iter().map(|f| f.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Strip a leading `y=` or `z=` and surrounding whitespace.
pub fn normalize(source: &str) -> &str {
    let trimmed = source.trim();
    for prefix in ["y", "z"] {
        if let Some(rest) = trimmed.strip_prefix(prefix) {
            if let Some(rhs) = rest.trim_start().strip_prefix('=') {
                return rhs.trim();
            }
        }
    }
    trimmed
}

/// Parse, simplify and compile an equation over `variables`.
///
/// Fails with [`VizError::UndefinedSymbol`] for any identifier that is not a
/// declared variable, an allow-listed constant or an allow-listed function.
pub fn compile(source: &str, variables: &[Variable]) -> Result<CompiledExpr> {
    let body = normalize(source);
    if body.is_empty() {
        return Err(VizError::EmptyExpression);
    }

    let parsed = parser::parse(body, variables)?;
    let simplified = simplify(parsed);
    tracing::debug!("Compiled equation `{}` as `{}`", body, simplified);

    Ok(CompiledExpr::new(simplified, variables.to_vec()))
}
