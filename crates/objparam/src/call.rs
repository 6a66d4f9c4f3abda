//! Call shapes for the `<noun>` method.
//!
//! The classic accessor overloads one method on arity: no arguments lists
//! names, one name reads, a name and a value writes, and a mapping or a run
//! of pairs writes in bulk. [`ParamCall`] names each shape explicitly and
//! [`ParamCall::from_args`] maps a positional argument list onto it.

use serde_json::Value;

use crate::error::{ParamError, ParamResult};

/// One invocation of the `<noun>` method.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamCall {
    /// List the names currently stored for the receiver.
    List,
    /// Read one value.
    Get(String),
    /// Store one value and return it.
    Set(String, Value),
    /// Store several values in order and return them in the same order.
    SetMany(Vec<(String, Value)>),
}

impl ParamCall {
    /// Bulk assignment from any sequence of name/value pairs.
    pub fn set_many<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::SetMany(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Interpret a positional argument list.
    ///
    /// - no arguments: [`ParamCall::List`]
    /// - a single string: [`ParamCall::Get`]
    /// - a single object: [`ParamCall::SetMany`], in the object's key order
    /// - two arguments: [`ParamCall::Set`]
    /// - any larger even count: [`ParamCall::SetMany`] over alternating pairs
    ///
    /// Odd counts above one, non-string names and any other single argument
    /// fail with [`ParamError::InvalidArgument`]. The whole list is checked
    /// before a call is returned, so a rejected list never mutates anything.
    pub fn from_args(method: &str, args: Vec<Value>) -> ParamResult<Self> {
        let count = args.len();
        let invalid = |reason: String| ParamError::InvalidArgument {
            method: method.to_string(),
            count,
            reason,
        };

        let args = match <[Value; 1]>::try_from(args) {
            Ok([Value::String(name)]) => return Ok(Self::Get(name)),
            Ok([Value::Object(map)]) => return Ok(Self::SetMany(map.into_iter().collect())),
            Ok([other]) => {
                return Err(invalid(format!(
                    "expected a name or a mapping, got {}",
                    kind_of(&other)
                )))
            }
            Err(args) => args,
        };

        match count {
            0 => Ok(Self::List),
            n if n % 2 == 1 => Err(invalid(
                "odd number of arguments cannot form name/value pairs".to_string(),
            )),
            _ => {
                let mut pairs = into_pairs(args).map_err(invalid)?;
                if pairs.len() == 1 {
                    let (name, value) = pairs.remove(0);
                    Ok(Self::Set(name, value))
                } else {
                    Ok(Self::SetMany(pairs))
                }
            }
        }
    }
}

fn into_pairs(args: Vec<Value>) -> Result<Vec<(String, Value)>, String> {
    let mut pairs = Vec::with_capacity(args.len() / 2);
    let mut iter = args.into_iter().enumerate();
    while let (Some((pos, name)), Some((_, value))) = (iter.next(), iter.next()) {
        match name {
            Value::String(name) => pairs.push((name, value)),
            other => {
                return Err(format!(
                    "argument {pos} must be a name, got {}",
                    kind_of(&other)
                ))
            }
        }
    }
    Ok(pairs)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl From<&str> for ParamCall {
    fn from(name: &str) -> Self {
        Self::Get(name.to_string())
    }
}

impl From<String> for ParamCall {
    fn from(name: String) -> Self {
        Self::Get(name)
    }
}

impl<K: Into<String>, V: Into<Value>> From<(K, V)> for ParamCall {
    fn from((name, value): (K, V)) -> Self {
        Self::Set(name.into(), value.into())
    }
}

impl From<Vec<(String, Value)>> for ParamCall {
    fn from(pairs: Vec<(String, Value)>) -> Self {
        Self::SetMany(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn shape(args: Vec<Value>) -> ParamResult<ParamCall> {
        ParamCall::from_args("param", args)
    }

    #[test]
    fn no_args_lists() {
        assert_eq!(shape(vec![]).unwrap(), ParamCall::List);
    }

    #[test]
    fn single_name_gets() {
        assert_eq!(
            shape(vec![json!("color")]).unwrap(),
            ParamCall::Get("color".into())
        );
    }

    #[test]
    fn name_and_value_sets() {
        assert_eq!(
            shape(vec![json!("color"), Value::Null]).unwrap(),
            ParamCall::Set("color".into(), Value::Null)
        );
    }

    #[test]
    fn mapping_keeps_key_order() {
        let call = shape(vec![json!({ "z": 1, "a": 2, "m": 3 })]).unwrap();
        assert_eq!(
            call,
            ParamCall::SetMany(vec![
                ("z".into(), json!(1)),
                ("a".into(), json!(2)),
                ("m".into(), json!(3)),
            ])
        );
    }

    #[test]
    fn even_pairs_keep_order_and_duplicates() {
        let call = shape(vec![
            json!("a"),
            json!(1),
            json!("b"),
            json!(2),
            json!("a"),
            json!(3),
        ])
        .unwrap();
        assert_eq!(
            call,
            ParamCall::SetMany(vec![
                ("a".into(), json!(1)),
                ("b".into(), json!(2)),
                ("a".into(), json!(3)),
            ])
        );
    }

    #[test]
    fn odd_count_is_rejected() {
        let err = shape(vec![json!("a"), json!(1), json!("b")]).unwrap_err();
        assert!(matches!(
            err,
            ParamError::InvalidArgument { ref method, count: 3, .. } if method == "param"
        ));
    }

    #[test]
    fn non_string_name_is_rejected() {
        let err = shape(vec![json!("a"), json!(1), json!(7), json!(2)]).unwrap_err();
        match err {
            ParamError::InvalidArgument { count, reason, .. } => {
                assert_eq!(count, 4);
                assert!(reason.contains("argument 2"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn single_scalar_is_rejected() {
        let err = shape(vec![json!(42)]).unwrap_err();
        assert!(matches!(err, ParamError::InvalidArgument { count: 1, .. }));
    }

    #[test]
    fn conversions() {
        assert_eq!(ParamCall::from("x"), ParamCall::Get("x".into()));
        assert_eq!(
            ParamCall::from(("x", 5)),
            ParamCall::Set("x".into(), json!(5))
        );
        assert_eq!(
            ParamCall::set_many([("a", 1), ("b", 2)]),
            ParamCall::SetMany(vec![("a".into(), json!(1)), ("b".into(), json!(2))])
        );
    }
}
