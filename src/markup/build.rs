use serde_json::Value;

use super::Element;
use crate::domain::{
    Collection, Config, Host, HostChild, HostGroup, HostGroupChild, Initiator, Kind, Oid, OidError,
    Property, Record, Redundancy, Status, System, SystemChild,
};

/// Builds typed inventory records from parsed markup elements.
///
/// Elements are classified by tag, resolved through the configured alias
/// table, and assembled bottom-up: children are fully constructed before
/// their parent.
#[derive(Debug, Clone, Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Creates a builder using the built-in tag spellings only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with the given classification config.
    #[must_use]
    pub const fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Builds the record described by `element`, recursively building its
    /// children first.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] if a tag is unrecognised, a required
    /// attribute is absent, or a child element appears under a parent that
    /// cannot hold its kind.
    pub fn record(&self, element: &Element) -> Result<Record, BuildError> {
        match self.kind(element)? {
            Kind::Property => Err(BuildError::BareProperty),
            Kind::Status => self.status(element).map(Record::Status),
            Kind::Redundancy => self.redundancy(element).map(Record::Redundancy),
            Kind::Initiator => self.initiator(element).map(Record::Initiator),
            Kind::Host => self.host(element).map(Record::Host),
            Kind::HostGroup => self.host_group(element).map(Record::HostGroup),
            Kind::System => self.system(element).map(Record::System),
        }
    }

    /// Builds a property from an element carrying `name` and `value`
    /// attributes.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingAttribute`] if either attribute is
    /// absent.
    pub fn property(element: &Element) -> Result<Property, BuildError> {
        let name = require(element, "name")?;
        let value = require(element, "value")?;
        Ok(Property::new(name.to_string(), value.to_string()))
    }

    /// Builds a result set from an ordered list of record elements.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] if any element fails to build.
    pub fn collection(&self, elements: &[Element]) -> Result<Collection, BuildError> {
        let records = elements
            .iter()
            .map(|element| self.record(element))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!("built a collection of {} records", records.len());
        Ok(Collection::List(records))
    }

    /// Builds a result set from a JSON value describing a list of elements.
    ///
    /// A value that is not a list degrades to [`Collection::Invalid`] (the
    /// `{}` marker) rather than failing the call.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] if a list item is not a valid element
    /// description or fails to build.
    pub fn collection_from_value(&self, value: &Value) -> Result<Collection, BuildError> {
        let Some(items) = value.as_array() else {
            tracing::warn!("result set is not a list; emitting the degenerate marker");
            return Ok(Collection::Invalid);
        };

        let elements = items
            .iter()
            .map(|item| serde_json::from_value(item.clone()))
            .collect::<Result<Vec<Element>, _>>()?;
        self.collection(&elements)
    }

    fn kind(&self, element: &Element) -> Result<Kind, BuildError> {
        self.config
            .kind_of(&element.tag)
            .ok_or_else(|| BuildError::UnknownTag(element.tag.clone()))
    }

    fn oid(&self, element: &Element) -> Result<Oid, BuildError> {
        let raw = require(element, "oid")?;
        Ok(Oid::try_from(raw)?)
    }

    /// Collects the children of a leaf-kind element, all of which must be
    /// properties.
    fn properties(&self, element: &Element, parent: Kind) -> Result<Vec<Property>, BuildError> {
        let mut properties = Vec::with_capacity(element.children.len());
        for child in &element.children {
            match self.kind(child)? {
                Kind::Property => properties.push(Self::property(child)?),
                other => {
                    return Err(BuildError::UnexpectedChild {
                        parent,
                        child: other,
                    });
                }
            }
        }
        Ok(properties)
    }

    fn status(&self, element: &Element) -> Result<Status, BuildError> {
        Ok(Status::new(
            self.oid(element)?,
            &self.properties(element, Kind::Status)?,
        ))
    }

    fn redundancy(&self, element: &Element) -> Result<Redundancy, BuildError> {
        Ok(Redundancy::new(
            self.oid(element)?,
            &self.properties(element, Kind::Redundancy)?,
        ))
    }

    fn initiator(&self, element: &Element) -> Result<Initiator, BuildError> {
        Ok(Initiator::new(
            self.oid(element)?,
            &self.properties(element, Kind::Initiator)?,
        ))
    }

    fn host(&self, element: &Element) -> Result<Host, BuildError> {
        let mut children = Vec::with_capacity(element.children.len());
        for child in &element.children {
            match self.kind(child)? {
                Kind::Property => children.push(HostChild::Property(Self::property(child)?)),
                Kind::Initiator => children.push(HostChild::Initiator(self.initiator(child)?)),
                other => {
                    return Err(BuildError::UnexpectedChild {
                        parent: Kind::Host,
                        child: other,
                    });
                }
            }
        }
        Ok(Host::new(self.oid(element)?, children))
    }

    fn host_group(&self, element: &Element) -> Result<HostGroup, BuildError> {
        let mut children = Vec::with_capacity(element.children.len());
        for child in &element.children {
            match self.kind(child)? {
                Kind::Property => children.push(HostGroupChild::Property(Self::property(child)?)),
                Kind::Host => children.push(HostGroupChild::Host(self.host(child)?)),
                other => {
                    return Err(BuildError::UnexpectedChild {
                        parent: Kind::HostGroup,
                        child: other,
                    });
                }
            }
        }
        Ok(HostGroup::new(self.oid(element)?, children))
    }

    fn system(&self, element: &Element) -> Result<System, BuildError> {
        let mut children = Vec::with_capacity(element.children.len());
        for child in &element.children {
            match self.kind(child)? {
                Kind::Property => children.push(SystemChild::Property(Self::property(child)?)),
                Kind::Redundancy => children.push(SystemChild::Redundancy(self.redundancy(child)?)),
                other => {
                    return Err(BuildError::UnexpectedChild {
                        parent: Kind::System,
                        child: other,
                    });
                }
            }
        }
        Ok(System::new(self.oid(element)?, children))
    }
}

fn require<'a>(element: &'a Element, attribute: &'static str) -> Result<&'a str, BuildError> {
    element
        .attribute(attribute)
        .ok_or_else(|| BuildError::MissingAttribute {
            tag: element.tag.clone(),
            attribute,
        })
}

/// Errors that can occur when building records from markup elements.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The element tag is not mapped to any kind.
    #[error("unrecognised element tag '{0}'")]
    UnknownTag(String),
    /// A required attribute is absent from the element's attribute set.
    #[error("element '{tag}' is missing required attribute '{attribute}'")]
    MissingAttribute {
        /// Tag of the offending element.
        tag: String,
        /// Name of the absent attribute.
        attribute: &'static str,
    },
    /// A child element appeared under a parent that cannot hold its kind.
    #[error("'{child}' elements cannot appear inside '{parent}' elements")]
    UnexpectedChild {
        /// Kind of the containing element.
        parent: Kind,
        /// Kind of the misplaced child.
        child: Kind,
    },
    /// A property element was supplied where a record was expected.
    #[error("a bare property element does not form a record")]
    BareProperty,
    /// The object identifier attribute is present but empty.
    #[error("invalid object identifier")]
    Oid(#[from] OidError),
    /// A JSON element description could not be deserialized.
    #[error("malformed element description")]
    Json(#[from] serde_json::Error),
}
