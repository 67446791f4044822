// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Converting forms to JSON values.
//!
//! Symbols and strings become JSON strings, numbers JSON numbers
//! (`null` for NaN and the infinities, which JSON can't represent). A
//! table without keyed entries becomes an array. A table with keyed
//! entries becomes an object in entry order; its positional entries,
//! if any, are collected into an array under `children`, added last.

use crate::value::{Form, Entry};
use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Name of the object field holding a table's positional entries.
pub const CHILDREN: &str = "children";

#[derive(Error, Debug)]
pub enum JsonError {
    #[error("cannot use composite key {0}")]
    NonScalarKey(Form),
    #[error("{0}")]
    Serialize(#[from] serde_json::Error),
}

fn number_to_value(n: f64) -> Value {
    // 2^53: integral values up to here are exact as i64
    if n.fract() == 0.0 && n.abs() <= 9007199254740992.0 {
        Value::from(n as i64)
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

pub fn form_to_value(form: &Form) -> Result<Value, JsonError> {
    match form {
        Form::Number(n) => Ok(number_to_value(*n)),
        Form::Symbol(s) | Form::String(s) => Ok(Value::String(s.to_string())),
        Form::Table(entries) => {
            let mut object = Map::new();
            let mut children = Vec::new();
            for entry in entries {
                match entry {
                    Entry::Pair { key, value } => {
                        let k = key.scalar_text()
                            .ok_or_else(|| JsonError::NonScalarKey(key.clone()))?;
                        // a repeated key keeps its place, the last value wins
                        object.insert(k, form_to_value(value)?);
                    }
                    Entry::Item(form) => children.push(form_to_value(form)?),
                }
            }
            if object.is_empty() {
                return Ok(Value::Array(children))
            }
            if ! children.is_empty() {
                object.insert(CHILDREN.to_string(), Value::Array(children));
            }
            Ok(Value::Object(object))
        }
    }
}

/// Compact JSON text for `form`.
pub fn form_to_json_string(form: &Form) -> Result<String, JsonError> {
    Ok(serde_json::to_string(&form_to_value(form)?)?)
}
