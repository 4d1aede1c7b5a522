//! Problem-instance contract shared with external generators
//!
//! A generator produces one `ProblemInstance` per run: the randomized
//! parameters it chose, the answers those parameters lead to, and how the
//! answers should be rounded for display. The serialized form keeps the
//! field names downstream graders consume (`params`, `correct_answers`,
//! `nDigits`, `sigfigs`).

use crate::round::round_to_digits;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single named parameter of a generated problem
///
/// Untagged so parameters serialize as plain JSON scalars and arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Text(String),
    Bool(bool),
    List(Vec<ParamValue>),
}

impl ParamValue {
    // ========== Safe Accessors (never panic) ==========

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ParamValue]> {
        match self {
            ParamValue::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Number(_) => "number",
            ParamValue::Text(_) => "text",
            ParamValue::Bool(_) => "bool",
            ParamValue::List(_) => "list",
        }
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        ParamValue::Number(n)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        ParamValue::Number(n as f64)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(items: Vec<T>) -> Self {
        ParamValue::List(items.into_iter().map(Into::into).collect())
    }
}

/// One fully generated problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemInstance {
    pub params: HashMap<String, ParamValue>,
    pub correct_answers: HashMap<String, f64>,
    #[serde(rename = "nDigits")]
    pub n_digits: u32,
    pub sigfigs: u32,
}

impl ProblemInstance {
    pub fn new(n_digits: u32, sigfigs: u32) -> Self {
        Self {
            params: HashMap::new(),
            correct_answers: HashMap::new(),
            n_digits,
            sigfigs,
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_answer(mut self, name: impl Into<String>, value: f64) -> Self {
        self.correct_answers.insert(name.into(), value);
        self
    }

    /// Stores `value` rounded to this instance's `n_digits`
    pub fn with_rounded_answer(self, name: impl Into<String>, value: f64) -> Self {
        let digits = self.n_digits;
        self.with_answer(name, round_to_digits(value, digits))
    }

    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }

    pub fn answer(&self, name: &str) -> Option<f64> {
        self.correct_answers.get(name).copied()
    }
}
