//! Evaluation and transaction contexts.
//!
//! A context is an open mapping from string keys to flag-relevant values plus
//! an optional targeting key. Contexts are replaced wholesale at the API level;
//! the builder methods here produce new values instead of mutating shared ones.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name a nested context's targeting key is stored under.
pub const TARGETING_KEY_FIELD: &str = "targeting_key";

/// A single value stored in an [`EvaluationContext`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvaluationValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<EvaluationValue>),
    Struct(BTreeMap<String, EvaluationValue>),
}

impl EvaluationValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            Self::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    /// Parse a raw string (e.g. from the environment) into the narrowest value.
    ///
    /// `true`/`false` become booleans, integers and floats are recognised,
    /// everything else stays a string.
    pub fn parse_lossy(raw: &str) -> Self {
        if let Ok(value) = raw.parse::<bool>() {
            return Self::Bool(value);
        }
        if let Ok(value) = raw.parse::<i64>() {
            return Self::Int(value);
        }
        if let Ok(value) = raw.parse::<f64>() {
            return Self::Float(value);
        }
        Self::String(raw.to_string())
    }
}

impl From<bool> for EvaluationValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for EvaluationValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for EvaluationValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for EvaluationValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for EvaluationValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for EvaluationValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Vec<EvaluationValue>> for EvaluationValue {
    fn from(values: Vec<EvaluationValue>) -> Self {
        Self::List(values)
    }
}

/// A nested context keeps its targeting key as a `targeting_key` field.
///
/// An explicit `targeting_key` field takes precedence over the key.
impl From<EvaluationContext> for EvaluationValue {
    fn from(context: EvaluationContext) -> Self {
        let mut fields = context.fields;
        if let Some(key) = context.targeting_key {
            fields
                .entry(TARGETING_KEY_FIELD.to_string())
                .or_insert(Self::String(key));
        }
        Self::Struct(fields)
    }
}

/// Flag-relevant data about the subject of an evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    targeting_key: Option<String>,
    #[serde(flatten)]
    fields: BTreeMap<String, EvaluationValue>,
}

/// Per-call-chain context carried by a transaction context propagator.
pub type TransactionContext = EvaluationContext;

impl EvaluationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_targeting_key(mut self, key: impl Into<String>) -> Self {
        self.targeting_key = Some(key.into());
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<EvaluationValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn targeting_key(&self) -> Option<&str> {
        self.targeting_key.as_deref()
    }

    pub fn get(&self, key: &str) -> Option<&EvaluationValue> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when there is neither a targeting key nor any field.
    pub fn is_empty(&self) -> bool {
        self.targeting_key.is_none() && self.fields.is_empty()
    }

    /// Layer `other` on top of `self`.
    ///
    /// Fields present in `other` win. The targeting key is only replaced when
    /// `other` carries one.
    pub fn merge(&self, other: &EvaluationContext) -> EvaluationContext {
        let mut merged = self.clone();
        if let Some(key) = &other.targeting_key {
            merged.targeting_key = Some(key.clone());
        }
        for (key, value) in &other.fields {
            merged.fields.insert(key.clone(), value.clone());
        }
        merged
    }
}
