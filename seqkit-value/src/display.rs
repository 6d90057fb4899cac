use std::fmt;

use ordered_float::OrderedFloat;

use crate::Value;

// Values print the way untyped values are stringified when concatenated
// into text: lists join their items with commas and records are opaque.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(OrderedFloat(n)) => write_number(*n, f),
            Value::String(s) => f.write_str(s),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    // absent items inside a list print as nothing
                    match item {
                        Value::Undefined | Value::Null => {}
                        item => write!(f, "{}", item)?,
                    }
                }
                Ok(())
            }
            Value::Record(_) => f.write_str("[object Object]"),
        }
    }
}

fn write_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        })
    } else if n == 0.0 {
        // no negative zero
        f.write_str("0")
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // exponent form, the exponent always signed
        let formatted = format!("{:e}", n);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, exponent)
            }
            _ => f.write_str(&formatted),
        }
    } else {
        write!(f, "{}", n)
    }
}
