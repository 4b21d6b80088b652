//! Vectorised evaluation over `ndarray` arrays.

use super::{Expr, Variable};
use crate::error::{Result, VizError};
use ndarray::{Array, ArrayView, Dimension, Zip};
use std::fmt;

/// A simplified equation ready to be sampled.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledExpr {
    expr: Expr,
    variables: Vec<Variable>,
}

impl CompiledExpr {
    pub(super) fn new(expr: Expr, variables: Vec<Variable>) -> Self {
        Self { expr, variables }
    }

    /// Evaluate at a single sample. Non-finite results become NaN.
    pub fn eval_at(&self, x: f64, y: f64) -> f64 {
        let value = self.expr.eval(&|v| match v {
            Variable::X => x,
            Variable::Y => y,
        });
        if value.is_finite() {
            value
        } else {
            f64::NAN
        }
    }

    /// Evaluate a one-variable equation element-wise over `x`.
    ///
    /// The result has the same shape as `x`. Undefined samples are NaN.
    pub fn call<D: Dimension>(&self, x: ArrayView<'_, f64, D>) -> Result<Array<f64, D>> {
        if self.variables.len() != 1 {
            return Err(VizError::Arguments(format!(
                "expected {} argument array(s), got 1",
                self.variables.len()
            )));
        }
        Ok(x.mapv(|xv| self.eval_at(xv, f64::NAN)))
    }

    /// Evaluate a two-variable equation element-wise over `x` and `y`.
    ///
    /// Both arrays must have the same shape, which is also the result's shape.
    pub fn call2<D: Dimension>(
        &self,
        x: ArrayView<'_, f64, D>,
        y: ArrayView<'_, f64, D>,
    ) -> Result<Array<f64, D>> {
        if self.variables.len() != 2 {
            return Err(VizError::Arguments(format!(
                "expected {} argument array(s), got 2",
                self.variables.len()
            )));
        }
        if x.shape() != y.shape() {
            return Err(VizError::Arguments(format!(
                "shape mismatch: {:?} vs {:?}",
                x.shape(),
                y.shape()
            )));
        }
        Ok(Zip::from(&x)
            .and(&y)
            .map_collect(|&xv, &yv| self.eval_at(xv, yv)))
    }
}

impl fmt::Display for CompiledExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.expr, f)
    }
}
