use std::{fmt, str::FromStr};

use log::{debug, warn};
use vecmath::{FormatSpec, Vec4};

#[derive(thiserror::Error, Debug, PartialEq)]
pub(crate) enum OperandError {
    #[error("Unknown operation: {0} (expected add, sub, dot, dot-sum, eq or show)")]
    UnknownOperation(String),
    #[error("Invalid number: `{0}`")]
    InvalidNumber(String),
    #[error("A vector has at most 4 components, got {0}")]
    TooManyComponents(usize),
    #[error("Operation `{0}` needs a right hand side")]
    MissingOperand(Op),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    Add,
    Sub,
    Dot,
    DotSum,
    Eq,
    Show,
}

impl FromStr for Op {
    type Err = OperandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "add" => Ok(Op::Add),
            "sub" => Ok(Op::Sub),
            "dot" => Ok(Op::Dot),
            "dot-sum" | "dot_sum" => Ok(Op::DotSum),
            "eq" => Ok(Op::Eq),
            "show" => Ok(Op::Show),
            _ => Err(OperandError::UnknownOperation(s.to_owned())),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Dot => "dot",
            Op::DotSum => "dot-sum",
            Op::Eq => "eq",
            Op::Show => "show",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Operand {
    Vector(Vec4),
    Scalar(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Outcome {
    Vector(Vec4),
    Scalar(f32),
    Bool(bool),
}

impl Outcome {
    pub(crate) fn render(&self, spec: &FormatSpec) -> String {
        match self {
            Outcome::Vector(v) => v.format(spec),
            Outcome::Scalar(s) => spec.format_f32(*s),
            Outcome::Bool(b) => b.to_string(),
        }
    }
}

/// Parses `"1,2,3"` or `"(1, 2, 3)"` into a vector, missing components are `0`.
pub(crate) fn parse_vector(input: &str) -> Result<Vec4, OperandError> {
    let trimmed = input.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(trimmed)
        .trim();

    if inner.is_empty() {
        return Ok(Vec4::zero());
    }

    let values = inner
        .split(',')
        .map(parse_number)
        .collect::<Result<Vec<f32>, _>>()?;

    if values.len() > 4 {
        return Err(OperandError::TooManyComponents(values.len()));
    }

    Ok(Vec4::from_slice(&values))
}

/// A right hand side without a `,` or parentheses is a scalar.
pub(crate) fn parse_operand(input: &str) -> Result<Operand, OperandError> {
    let trimmed = input.trim();
    if trimmed.contains(',') || trimmed.starts_with('(') {
        Ok(Operand::Vector(parse_vector(trimmed)?))
    } else {
        Ok(Operand::Scalar(parse_number(trimmed)?))
    }
}

fn parse_number(input: &str) -> Result<f32, OperandError> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| OperandError::InvalidNumber(trimmed.to_owned()))
}

fn required(op: Op, rhs: Option<&str>) -> Result<&str, OperandError> {
    rhs.ok_or(OperandError::MissingOperand(op))
}

pub(crate) fn evaluate(op: Op, lhs: &str, rhs: Option<&str>) -> Result<Outcome, OperandError> {
    let lhs = parse_vector(lhs)?;
    debug!("Evaluating `{}` with left hand side {}", op, lhs);

    let outcome = match op {
        Op::Show => {
            if let Some(rhs) = rhs {
                warn!("Ignored right hand side `{}` for `show`", rhs);
            }
            Outcome::Vector(lhs)
        }
        Op::Add => match parse_operand(required(op, rhs)?)? {
            Operand::Vector(v) => Outcome::Vector(lhs.add_vec(v)),
            Operand::Scalar(s) => Outcome::Vector(lhs.add_scalar(s)),
        },
        Op::Sub => match parse_operand(required(op, rhs)?)? {
            Operand::Vector(v) => Outcome::Vector(lhs.sub_vec(v)),
            Operand::Scalar(s) => Outcome::Vector(lhs.sub_scalar(s)),
        },
        Op::Dot => Outcome::Vector(lhs.dot(parse_vector(required(op, rhs)?)?)),
        Op::DotSum => Outcome::Scalar(lhs.dot_sum(parse_vector(required(op, rhs)?)?)),
        Op::Eq => Outcome::Bool(lhs.equals(&parse_vector(required(op, rhs)?)?)),
    };

    Ok(outcome)
}
