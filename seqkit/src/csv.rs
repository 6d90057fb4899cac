// Rendering sequences as text. Fields are quoted but never escaped: an
// embedded quote, separator or newline ends up in the output as is.

use std::fmt::Display;

use seqkit_value::Value;

use crate::error::{Error, Result};

pub const DEFAULT_SEPARATOR: &str = ",";

/// Render rows of values as CSV, every field wrapped in double quotes.
///
/// ```
/// use seqkit::array_to_csv;
///
/// assert_eq!(array_to_csv(&[["a", "b"], ["c", "d"]], ","), "\"a\",\"b\"\n\"c\",\"d\"");
/// ```
pub fn array_to_csv<R, T>(rows: &[R], separator: &str) -> String
where
    R: AsRef<[T]>,
    T: Display,
{
    tracing::trace!(rows = rows.len(), "rendering rows as CSV");
    rows.iter()
        .map(|row| {
            row.as_ref()
                .iter()
                .map(quoted)
                .collect::<Vec<_>>()
                .join(separator)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render records as CSV with a header line.
///
/// The header line lists `headers` unquoted. Each record then becomes one
/// line holding, for every header, the quoted value of that field. Missing
/// and falsy fields render as `""`.
pub fn json_to_csv<H: AsRef<str>>(records: &[Value], headers: &[H], separator: &str) -> String {
    tracing::trace!(
        records = records.len(),
        headers = headers.len(),
        "rendering records as CSV"
    );
    let header_line = headers
        .iter()
        .map(|header| header.as_ref())
        .collect::<Vec<&str>>()
        .join(separator);
    let lines = records.iter().map(|record| {
        headers
            .iter()
            .map(|header| {
                let value = record.field(header.as_ref());
                if value.is_truthy() {
                    quoted(&value)
                } else {
                    "\"\"".to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(separator)
    });
    std::iter::once(header_line)
        .chain(lines)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a JSON array of records and render it with [`json_to_csv`].
pub fn json_text_to_csv<H: AsRef<str>>(
    text: &str,
    headers: &[H],
    separator: &str,
) -> Result<String> {
    let value = Value::parse_json(text).inspect_err(|_| {
        tracing::debug!("json_text_to_csv: input is not valid JSON");
    })?;
    let records = value.as_list().ok_or(Error::NotAnArray)?;
    Ok(json_to_csv(records, headers, separator))
}

/// Join elements with `separator`, using `last_separator` between the last
/// two.
///
/// ```
/// use seqkit::join;
///
/// let pens = ["pen", "pineapple", "apple", "pen"];
/// assert_eq!(join(&pens, ",", "&"), "pen,pineapple,apple&pen");
/// ```
pub fn join<T: Display>(seq: &[T], separator: &str, last_separator: &str) -> String {
    let mut joined = String::new();
    let last = seq.len().saturating_sub(1);
    for (index, item) in seq.iter().enumerate() {
        joined.push_str(&item.to_string());
        if index + 1 == last {
            joined.push_str(last_separator);
        } else if index < last {
            joined.push_str(separator);
        }
    }
    joined
}

/// [`join`] with [`DEFAULT_SEPARATOR`] everywhere.
pub fn join_default<T: Display>(seq: &[T]) -> String {
    join(seq, DEFAULT_SEPARATOR, DEFAULT_SEPARATOR)
}

fn quoted<T: Display + ?Sized>(item: &T) -> String {
    format!("\"{}\"", item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_to_csv_separator() {
        assert_eq!(
            array_to_csv(&[vec![1, 2], vec![3]], ";"),
            "\"1\";\"2\"\n\"3\""
        );
    }

    #[test]
    fn test_array_to_csv_empty() {
        assert_eq!(array_to_csv::<Vec<i32>, i32>(&[], ","), "");
    }

    #[test]
    fn test_json_to_csv_no_records() {
        assert_eq!(json_to_csv(&[], &["a", "b"], ","), "a,b");
    }

    #[test]
    fn test_json_text_to_csv_errors() {
        assert_eq!(
            json_text_to_csv("{oops", &["a"], ","),
            Err(Error::InvalidJson)
        );
        assert_eq!(
            json_text_to_csv(r#"{"a": 1}"#, &["a"], ","),
            Err(Error::NotAnArray)
        );
    }

    #[test]
    fn test_join() {
        let pens = ["pen", "pineapple", "apple", "pen"];
        assert_eq!(join(&pens, ",", "&"), "pen,pineapple,apple&pen");
        assert_eq!(join(&pens, ",", ","), "pen,pineapple,apple,pen");
        assert_eq!(join_default(&pens), "pen,pineapple,apple,pen");
    }

    #[test]
    fn test_join_short() {
        assert_eq!(join::<i32>(&[], ",", "&"), "");
        assert_eq!(join(&[1], ",", "&"), "1");
        assert_eq!(join(&[1, 2], ",", "&"), "1&2");
    }
}
