// Copyright (c) 2025 Folio Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use serde_json::Value;

/// A section record inside a dictionary, addressed by its dotted key.
///
/// Accessors never fail: a missing leaf renders as its full key, and a
/// missing list is empty.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    key: String,
    value: Option<&'a Value>,
}

impl<'a> Record<'a> {
    pub fn new(key: &str, value: Option<&'a Value>) -> Self {
        Self {
            key: key.to_string(),
            value,
        }
    }

    pub fn field(&self, name: &str) -> Record<'a> {
        let value = self.value.and_then(|v| v.get(name));
        Record {
            key: format!("{}.{}", self.key, name),
            value: value.filter(|v| !v.is_null()),
        }
    }

    /// Scalar text of this record, `None` when absent or structured.
    pub fn opt_str(&self) -> Option<String> {
        match self.value? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn as_text(&self) -> String {
        self.opt_str().unwrap_or_else(|| self.key.clone())
    }

    pub fn text(&self, name: &str) -> String {
        self.field(name).as_text()
    }

    /// Elements of the list field `name`, in stored order.
    pub fn items(&self, name: &str) -> Vec<Record<'a>> {
        let list = self.field(name);
        match list.value {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| Record {
                    key: format!("{}.{}", list.key, i),
                    value: Some(item),
                })
                .collect(),
            _ => vec![],
        }
    }
}
