//! Real-valued gate parameters.
//!
//! A [`Parameter`] is an expression tree. Evaluating it against a
//! [`Variables`] assignment is the function from variable values to the
//! rotation angle (or exponent) of a gate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::f64::consts::PI;
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::variables::Variables;

/// A symbolic or concrete parameter expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Parameter {
    /// A constant numeric value.
    Constant(f64),
    /// A named variable.
    Symbol(String),
    /// The constant π.
    Pi,
    /// Negation.
    Neg(Box<Parameter>),
    /// Addition.
    Add(Box<Parameter>, Box<Parameter>),
    /// Subtraction.
    Sub(Box<Parameter>, Box<Parameter>),
    /// Multiplication.
    Mul(Box<Parameter>, Box<Parameter>),
    /// Division.
    Div(Box<Parameter>, Box<Parameter>),
}

impl Parameter {
    /// Create a constant parameter.
    pub fn constant(value: f64) -> Self {
        Parameter::Constant(value)
    }

    /// Create a symbolic parameter.
    pub fn symbol(name: impl Into<String>) -> Self {
        Parameter::Symbol(name.into())
    }

    /// Create a π constant.
    pub fn pi() -> Self {
        Parameter::Pi
    }

    /// Check if this expression refers to any variable.
    pub fn is_symbolic(&self) -> bool {
        match self {
            Parameter::Symbol(_) => true,
            Parameter::Constant(_) | Parameter::Pi => false,
            Parameter::Neg(e) => e.is_symbolic(),
            Parameter::Add(a, b)
            | Parameter::Sub(a, b)
            | Parameter::Mul(a, b)
            | Parameter::Div(a, b) => a.is_symbolic() || b.is_symbolic(),
        }
    }

    /// Value of a variable-free expression.
    ///
    /// Returns `None` if the expression is symbolic or divides by zero.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Parameter::Constant(v) => Some(*v),
            Parameter::Symbol(_) => None,
            Parameter::Pi => Some(PI),
            Parameter::Neg(e) => e.as_constant().map(|v| -v),
            Parameter::Add(a, b) => Some(a.as_constant()? + b.as_constant()?),
            Parameter::Sub(a, b) => Some(a.as_constant()? - b.as_constant()?),
            Parameter::Mul(a, b) => Some(a.as_constant()? * b.as_constant()?),
            Parameter::Div(a, b) => {
                let divisor = b.as_constant()?;
                if divisor == 0.0 {
                    return None;
                }
                Some(a.as_constant()? / divisor)
            }
        }
    }

    /// Resolve this expression to a number.
    ///
    /// Every variable the expression refers to must be bound in `variables`;
    /// otherwise the error names all of the unbound ones.
    pub fn evaluate(&self, variables: &Variables) -> IrResult<f64> {
        let missing: BTreeSet<String> = self
            .symbols()
            .into_iter()
            .filter(|name| !variables.contains(name))
            .collect();
        if !missing.is_empty() {
            return Err(IrError::UnresolvedParameter(missing));
        }
        self.eval_bound(variables)
    }

    fn eval_bound(&self, variables: &Variables) -> IrResult<f64> {
        Ok(match self {
            Parameter::Constant(v) => *v,
            Parameter::Symbol(name) => variables
                .get(name)
                .ok_or_else(|| IrError::UnresolvedParameter(BTreeSet::from([name.clone()])))?,
            Parameter::Pi => PI,
            Parameter::Neg(e) => -e.eval_bound(variables)?,
            Parameter::Add(a, b) => a.eval_bound(variables)? + b.eval_bound(variables)?,
            Parameter::Sub(a, b) => a.eval_bound(variables)? - b.eval_bound(variables)?,
            Parameter::Mul(a, b) => a.eval_bound(variables)? * b.eval_bound(variables)?,
            Parameter::Div(a, b) => {
                let divisor = b.eval_bound(variables)?;
                if divisor == 0.0 {
                    return Err(IrError::DivisionByZero(self.to_string()));
                }
                a.eval_bound(variables)? / divisor
            }
        })
    }

    /// Get all variable names in this expression.
    pub fn symbols(&self) -> BTreeSet<String> {
        let mut set = BTreeSet::new();
        self.collect_symbols(&mut set);
        set
    }

    pub(crate) fn collect_symbols(&self, set: &mut BTreeSet<String>) {
        match self {
            Parameter::Constant(_) | Parameter::Pi => {}
            Parameter::Symbol(name) => {
                set.insert(name.clone());
            }
            Parameter::Neg(e) => e.collect_symbols(set),
            Parameter::Add(a, b)
            | Parameter::Sub(a, b)
            | Parameter::Mul(a, b)
            | Parameter::Div(a, b) => {
                a.collect_symbols(set);
                b.collect_symbols(set);
            }
        }
    }

    /// Multiply by a constant factor.
    ///
    /// Constant expressions fold to a single constant so decompositions of
    /// numeric gates stay numeric.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        match self.as_constant() {
            Some(v) => Parameter::Constant(v * factor),
            None if factor == 1.0 => self.clone(),
            None if factor == -1.0 => -self.clone(),
            None => Parameter::Mul(Box::new(Parameter::Constant(factor)), Box::new(self.clone())),
        }
    }

    /// Bind a symbol to a value, returning a new expression.
    #[must_use]
    pub fn bind(&self, name: &str, value: f64) -> Self {
        match self {
            Parameter::Symbol(n) if n == name => Parameter::Constant(value),
            Parameter::Constant(_) | Parameter::Pi | Parameter::Symbol(_) => self.clone(),
            Parameter::Neg(e) => Parameter::Neg(Box::new(e.bind(name, value))),
            Parameter::Add(a, b) => {
                Parameter::Add(Box::new(a.bind(name, value)), Box::new(b.bind(name, value)))
            }
            Parameter::Sub(a, b) => {
                Parameter::Sub(Box::new(a.bind(name, value)), Box::new(b.bind(name, value)))
            }
            Parameter::Mul(a, b) => {
                Parameter::Mul(Box::new(a.bind(name, value)), Box::new(b.bind(name, value)))
            }
            Parameter::Div(a, b) => {
                Parameter::Div(Box::new(a.bind(name, value)), Box::new(b.bind(name, value)))
            }
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Constant(v) => write!(f, "{v}"),
            Parameter::Symbol(name) => write!(f, "{name}"),
            Parameter::Pi => write!(f, "pi"),
            Parameter::Neg(e) => write!(f, "-({e})"),
            Parameter::Add(a, b) => write!(f, "({a} + {b})"),
            Parameter::Sub(a, b) => write!(f, "({a} - {b})"),
            Parameter::Mul(a, b) => write!(f, "({a} * {b})"),
            Parameter::Div(a, b) => write!(f, "({a} / {b})"),
        }
    }
}

impl From<f64> for Parameter {
    fn from(value: f64) -> Self {
        Parameter::Constant(value)
    }
}

impl From<i32> for Parameter {
    fn from(value: i32) -> Self {
        Parameter::Constant(f64::from(value))
    }
}

impl From<&str> for Parameter {
    fn from(name: &str) -> Self {
        Parameter::Symbol(name.to_string())
    }
}

impl std::ops::Add for Parameter {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Parameter::Add(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Sub for Parameter {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Parameter::Sub(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Mul for Parameter {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Parameter::Mul(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Div for Parameter {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Parameter::Div(Box::new(self), Box::new(rhs))
    }
}

impl std::ops::Neg for Parameter {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Parameter::Neg(Box::new(self))
    }
}
