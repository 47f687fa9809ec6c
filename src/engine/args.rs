//! Positional and keyword arguments for engine operations.
//!
//! Arguments are carried as `serde_json::Value`s so a single recorded call
//! can hold numbers, strings, sequences and nested rows without a bespoke
//! value type. The typed accessors below name the operation in their
//! errors so a bad call is reported against the call that made it.

use serde_json::{Map, Value};

use super::error::PlotError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Args {
    pub positional: Vec<Value>,
    pub keyword: Map<String, Value>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a keyword argument, replacing any previous value for `key`.
    pub fn kw(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.keyword.insert(key.to_string(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.positional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    /// Look up an argument by keyword first, then by position.
    pub fn lookup(&self, key: &str, index: usize) -> Option<&Value> {
        self.keyword.get(key).or_else(|| self.positional.get(index))
    }

    pub fn f64_at(&self, op: &str, key: &str, index: usize) -> Result<f64, PlotError> {
        let v = self
            .lookup(key, index)
            .ok_or_else(|| PlotError::bad(op, format!("missing `{key}`")))?;
        as_f64(op, v)
    }

    pub fn f64_or(
        &self,
        op: &str,
        key: &str,
        index: usize,
        fallback: f64,
    ) -> Result<f64, PlotError> {
        match self.lookup(key, index) {
            Some(v) => as_f64(op, v),
            None => Ok(fallback),
        }
    }

    pub fn str_at(&self, op: &str, key: &str, index: usize) -> Result<String, PlotError> {
        match self.lookup(key, index) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(PlotError::bad(
                op,
                format!("`{key}` must be a string, got {other}"),
            )),
            None => Err(PlotError::bad(op, format!("missing `{key}`"))),
        }
    }

    pub fn str_kw(&self, op: &str, key: &str) -> Result<Option<String>, PlotError> {
        match self.keyword.get(key) {
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Null) | None => Ok(None),
            Some(other) => Err(PlotError::bad(
                op,
                format!("`{key}` must be a string, got {other}"),
            )),
        }
    }

    /// Booleans also accept `0`/`1` so `grid(0, 1)` reads naturally.
    pub fn bool_or(
        &self,
        op: &str,
        key: &str,
        index: usize,
        fallback: bool,
    ) -> Result<bool, PlotError> {
        match self.lookup(key, index) {
            None | Some(Value::Null) => Ok(fallback),
            Some(Value::Bool(b)) => Ok(*b),
            Some(Value::Number(n)) => Ok(n.as_f64().is_some_and(|f| f != 0.0)),
            Some(other) => Err(PlotError::bad(
                op,
                format!("`{key}` must be a boolean, got {other}"),
            )),
        }
    }
}

pub(crate) fn as_f64(op: &str, v: &Value) -> Result<f64, PlotError> {
    v.as_f64()
        .ok_or_else(|| PlotError::bad(op, format!("expected a number, got {v}")))
}

pub(crate) fn as_series(op: &str, v: &Value) -> Result<Vec<f64>, PlotError> {
    match v {
        // serde_json stores NaN and infinities as null; keep them as gaps.
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => Ok(f64::NAN),
                item => as_f64(op, item),
            })
            .collect(),
        other => Err(PlotError::bad(
            op,
            format!("expected a numeric sequence, got {other}"),
        )),
    }
}

pub(crate) fn as_rows(op: &str, v: &Value) -> Result<Vec<Vec<f64>>, PlotError> {
    match v {
        Value::Array(rows) => rows.iter().map(|row| as_series(op, row)).collect(),
        other => Err(PlotError::bad(
            op,
            format!("expected a sequence of rows, got {other}"),
        )),
    }
}

/// Labels may be given as strings or numbers; numbers are formatted.
pub(crate) fn as_labels(op: &str, v: &Value) -> Result<Vec<String>, PlotError> {
    match v {
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                Value::Number(n) => Ok(n.to_string()),
                other => Err(PlotError::bad(op, format!("expected a label, got {other}"))),
            })
            .collect(),
        other => Err(PlotError::bad(
            op,
            format!("expected a sequence of labels, got {other}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keyword_wins_over_position() {
        let args = Args::new().arg(1.0).kw("bins", 20);
        assert_eq!(args.f64_at("hist", "bins", 0).unwrap(), 20.0);
    }

    #[test]
    fn numeric_booleans() {
        let args = Args::new().arg(0).arg(1);
        assert!(!args.bool_or("grid", "x", 0, true).unwrap());
        assert!(args.bool_or("grid", "y", 1, false).unwrap());
    }

    #[test]
    fn non_finite_values_become_gaps() {
        let values = as_series("plot", &Value::from(vec![1.0, f64::NAN, f64::INFINITY])).unwrap();
        assert_eq!(values[0], 1.0);
        assert!(values[1].is_nan());
        assert!(values[2].is_nan());
    }

    #[test]
    fn series_rejects_strings() {
        let err = as_series("plot", &json!([1, "two"])).unwrap_err();
        assert!(matches!(err, PlotError::BadArgument { ref op, .. } if op == "plot"));
    }
}
