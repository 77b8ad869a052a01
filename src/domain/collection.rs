use std::fmt;

use super::{Record, property::joined};

/// An ordered result set of records, rendered as a JSON-like array.
///
/// Records in a collection are expected to be of a single kind; the wrapper
/// carries them in input order and never re-sorts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collection {
    /// An ordered list of records.
    List(Vec<Record>),
    /// Marker produced when the source value was not a list.
    ///
    /// Renders as the degenerate `{}` text instead of an array; the original
    /// element count and kind are not recoverable from it.
    Invalid,
}

impl Collection {
    /// Wrap an ordered list of records.
    #[must_use]
    pub const fn new(records: Vec<Record>) -> Self {
        Self::List(records)
    }

    /// The wrapped records, or `None` for the degenerate marker.
    #[must_use]
    pub fn records(&self) -> Option<&[Record]> {
        match self {
            Self::List(records) => Some(records),
            Self::Invalid => None,
        }
    }
}

impl From<Vec<Record>> for Collection {
    fn from(records: Vec<Record>) -> Self {
        Self::List(records)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::List(records) => write!(f, "[{}]", joined(records)),
            Self::Invalid => f.write_str("{}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Collection;
    use crate::domain::{Host, Oid, Property, Record, Status};

    fn oid(raw: &str) -> Oid {
        raw.parse().unwrap()
    }

    #[test]
    fn empty_list_renders_as_empty_array() {
        assert_eq!(Collection::new(Vec::new()).to_string(), "[]");
    }

    #[test]
    fn records_join_without_trailing_comma() {
        let records = vec![
            Record::from(Status::new(oid("st1"), &[])),
            Record::from(Status::new(oid("st2"), &[])),
        ];
        assert_eq!(
            Collection::from(records).to_string(),
            "[{\"oid\":\"st1\",\"class\":\"status\", },{\"oid\":\"st2\",\"class\":\"status\", }]"
        );
    }

    #[test]
    fn invalid_input_renders_the_degenerate_marker() {
        assert_eq!(Collection::Invalid.to_string(), "{}");
        assert!(Collection::Invalid.records().is_none());
    }

    #[test]
    fn host_collection_keeps_input_order() {
        let hosts: Vec<Record> = ["h2", "h1", "h3"]
            .into_iter()
            .map(|id| {
                Record::from(Host::new(
                    oid(id),
                    vec![Property::new("name".to_string(), id.to_string()).into()],
                ))
            })
            .collect();
        let rendered = Collection::from(hosts).to_string();
        let positions: Vec<_> = ["\"oid\":\"h2\"", "\"oid\":\"h1\"", "\"oid\":\"h3\""]
            .iter()
            .map(|needle| rendered.find(needle).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
