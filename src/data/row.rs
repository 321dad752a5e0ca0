use std::{cmp::Ordering, fmt};

/// A raw cell value, as produced by the input reader.
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    Empty,
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Cell inference used by the CSV reader: blank -> `Empty`, numeric -> `Number`.
    pub fn infer(cell: &str) -> Self {
        if cell.trim().is_empty() {
            return Self::Empty;
        }
        match cell.trim().parse::<f64>() {
            Ok(v) => Self::Number(v),
            Err(_) => Self::Text(cell.to_string()),
        }
    }

    /// The value as a finite real, if it is one (numeric text included).
    pub fn as_finite_f64(&self) -> Option<f64> {
        let v = match self {
            Self::Empty => return None,
            Self::Number(v) => *v,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        v.is_finite().then_some(v)
    }

    /// Lowercased, trimmed text form; used for tag fields like the shape selector.
    pub fn as_tag(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Number(v) => v.to_string(),
            Self::Text(s) => s.trim().to_lowercase(),
        }
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for RawValue {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("null"),
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(s) => write_quoted(f, s),
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for ch in s.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

/// One input record: field names mapped to raw values, in input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    fields: Vec<(String, RawValue)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, replacing the value in place if the name already exists.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<RawValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.push(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Canonical text form of the row; every per-row hash is taken over this.
    pub fn seed_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_quoted(f, name)?;
            write!(f, ": {value}")?;
        }
        f.write_str("}")
    }
}

/// Parsed rows plus the verbatim source text they came from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub rows: Vec<Row>,
    pub source_text: String,
}

impl Dataset {
    pub fn new(rows: Vec<Row>, source_text: impl Into<String>) -> Self {
        Self {
            rows,
            source_text: source_text.into(),
        }
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.rows.iter().any(|r| r.get(name).is_some())
    }

    /// Processing order: input order, or stable ascending by `order_field` when any
    /// row carries it. Rows without a numeric key sort after all keyed rows.
    pub fn processing_order(&self, order_field: &str) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.rows.len()).collect();
        if !self.has_field(order_field) {
            return order;
        }

        let keys: Vec<Option<f64>> = self
            .rows
            .iter()
            .map(|r| r.get(order_field).and_then(RawValue::as_finite_f64))
            .collect();
        order.sort_by(|&a, &b| match (keys[a], keys[b]) {
            // Numeric comparison, so -0 and 0 tie.
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        order
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/row.rs"]
mod tests;
