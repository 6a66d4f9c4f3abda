//! Results returned by accessor calls.

use serde_json::Value;

/// Values written by a bulk assignment, in assignment order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Assigned(Vec<Value>);

impl Assigned {
    pub(crate) fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    /// Every assigned value, in the order the pairs were given.
    pub fn values(&self) -> &[Value] {
        &self.0
    }

    /// The single-result form: the last value assigned.
    pub fn last(&self) -> Option<&Value> {
        self.0.last()
    }

    /// Number of pairs assigned, duplicates included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing was assigned.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Take ownership of the assigned values.
    pub fn into_vec(self) -> Vec<Value> {
        self.0
    }
}

/// Values removed by a delete, one slot per requested name.
///
/// A slot is `None` when the name was not present.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Deleted(Vec<Option<Value>>);

impl Deleted {
    pub(crate) fn new(values: Vec<Option<Value>>) -> Self {
        Self(values)
    }

    /// Removed values in the order the names were given.
    pub fn values(&self) -> &[Option<Value>] {
        &self.0
    }

    /// The single-result form: the value removed for the first name.
    pub fn first(&self) -> Option<&Value> {
        self.0.first().and_then(Option::as_ref)
    }

    /// Number of names requested.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no names were requested.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Take ownership of the per-name slots.
    pub fn into_vec(self) -> Vec<Option<Value>> {
        self.0
    }
}

/// Outcome of any accessor call.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamReply {
    /// Stored names, sorted.
    Names(Vec<String>),
    /// A read: `None` if the name is absent, `Some(Value::Null)` for a
    /// stored null.
    Value(Option<Value>),
    /// The value written by a single assignment.
    Set(Value),
    /// Values written by a bulk assignment.
    Assigned(Assigned),
    /// Presence check result.
    Exists(bool),
    /// Values removed by a delete.
    Deleted(Deleted),
}

impl ParamReply {
    /// Collapse the reply to one value, the way a single-result caller sees
    /// it: the last of a bulk assignment, the first of a delete.
    ///
    /// Returns `None` for name listings and presence checks.
    pub fn scalar(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => value.as_ref(),
            Self::Set(value) => Some(value),
            Self::Assigned(assigned) => assigned.last(),
            Self::Deleted(deleted) => deleted.first(),
            Self::Names(_) | Self::Exists(_) => None,
        }
    }

    /// The names of a [`ParamReply::Names`] reply.
    pub fn names(&self) -> Option<&[String]> {
        match self {
            Self::Names(names) => Some(names.as_slice()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn assigned_scalar_is_last() {
        let assigned = Assigned::new(vec![json!(1), json!(2), json!(3)]);
        assert_eq!(assigned.last(), Some(&json!(3)));
        assert_eq!(assigned.len(), 3);
        assert_eq!(ParamReply::Assigned(assigned.clone()).scalar(), Some(&json!(3)));
        assert_eq!(assigned.into_vec(), vec![json!(1), json!(2), json!(3)]);
    }

    #[test]
    fn deleted_scalar_is_first() {
        let deleted = Deleted::new(vec![Some(json!("a")), None, Some(json!("c"))]);
        assert_eq!(deleted.first(), Some(&json!("a")));
        assert_eq!(ParamReply::Deleted(deleted).scalar(), Some(&json!("a")));
    }

    #[test]
    fn deleted_first_absent_is_none() {
        let deleted = Deleted::new(vec![None, Some(json!(2))]);
        assert_eq!(deleted.first(), None);
        assert!(!deleted.is_empty());
        assert_eq!(deleted.into_vec(), vec![None, Some(json!(2))]);
    }

    #[test]
    fn empty_results() {
        assert!(Assigned::default().is_empty());
        assert_eq!(Deleted::default().len(), 0);
        assert_eq!(Deleted::default().first(), None);
    }

    #[test]
    fn stored_null_scalar_is_null() {
        let reply = ParamReply::Value(Some(Value::Null));
        assert_eq!(reply.scalar(), Some(&Value::Null));
        assert_eq!(ParamReply::Value(None).scalar(), None);
    }

    #[test]
    fn listings_have_no_scalar() {
        let reply = ParamReply::Names(vec!["a".into()]);
        assert_eq!(reply.scalar(), None);
        assert_eq!(reply.names(), Some(&["a".to_string()][..]));
        assert_eq!(ParamReply::Exists(true).scalar(), None);
    }
}
