use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    Oid, Property,
    property::{fragment, joined},
};

/// Discriminates the seven element kinds understood by the builder.
///
/// [`Kind::Property`] identifies the name/value leaf elements; the remaining
/// six variants identify addressable records carrying an object identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    /// A name/value pair contributing to a record's properties fragment.
    Property,
    /// A status record.
    Status,
    /// A redundancy link record.
    Redundancy,
    /// An initiator record.
    Initiator,
    /// A host record (may nest initiators).
    Host,
    /// A host group record (may nest hosts).
    HostGroup,
    /// A system record (may nest redundancy links).
    System,
}

impl Kind {
    /// The canonical element tag for this kind.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::Status => "status",
            Self::Redundancy => "redundancy",
            Self::Initiator => "initiator",
            Self::Host => "host",
            Self::HostGroup => "host-group",
            Self::System => "system",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A status record.
///
/// Leaf kind: all children are properties, pre-rendered into a single
/// fragment at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    oid: Oid,
    properties: String,
}

impl Status {
    /// Build a status record from its object identifier and property
    /// children.
    #[must_use]
    pub fn new(oid: Oid, properties: &[Property]) -> Self {
        Self {
            oid,
            properties: fragment(properties),
        }
    }

    /// The object identifier.
    #[must_use]
    pub const fn oid(&self) -> &Oid {
        &self.oid
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{\"oid\":\"{}\",\"class\":\"status\",{} }}",
            self.oid, self.properties
        )
    }
}

/// A redundancy link record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redundancy {
    oid: Oid,
    properties: String,
}

impl Redundancy {
    /// Build a redundancy record from its object identifier and property
    /// children.
    #[must_use]
    pub fn new(oid: Oid, properties: &[Property]) -> Self {
        Self {
            oid,
            properties: fragment(properties),
        }
    }

    /// The object identifier.
    #[must_use]
    pub const fn oid(&self) -> &Oid {
        &self.oid
    }
}

impl fmt::Display for Redundancy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{\"oid\":\"{}\",\"class\":\"redundancy\",{} }}",
            self.oid, self.properties
        )
    }
}

/// An initiator record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Initiator {
    oid: Oid,
    properties: String,
}

impl Initiator {
    /// Build an initiator record from its object identifier and property
    /// children.
    #[must_use]
    pub fn new(oid: Oid, properties: &[Property]) -> Self {
        Self {
            oid,
            properties: fragment(properties),
        }
    }

    /// The object identifier.
    #[must_use]
    pub const fn oid(&self) -> &Oid {
        &self.oid
    }
}

impl fmt::Display for Initiator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{\"oid\":\"{}\",\"class\":\"initiator\",{} }}",
            self.oid, self.properties
        )
    }
}

/// A classified child of a [`Host`] element: a property or a nested
/// initiator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostChild {
    /// A name/value pair routed to the properties fragment.
    Property(Property),
    /// A nested initiator routed to the initiator list.
    Initiator(Initiator),
}

impl From<Property> for HostChild {
    fn from(property: Property) -> Self {
        Self::Property(property)
    }
}

impl From<Initiator> for HostChild {
    fn from(initiator: Initiator) -> Self {
        Self::Initiator(initiator)
    }
}

/// A host record with its nested initiators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    oid: Oid,
    properties: String,
    initiators: Vec<Initiator>,
}

impl Host {
    /// Build a host record from its object identifier and an ordered,
    /// heterogeneous list of children.
    ///
    /// Children are partitioned by variant: properties into the pre-rendered
    /// fragment, initiators into the nested list. Relative order within each
    /// bucket is preserved.
    #[must_use]
    pub fn new(oid: Oid, children: Vec<HostChild>) -> Self {
        let mut properties = Vec::new();
        let mut initiators = Vec::new();
        for child in children {
            match child {
                HostChild::Property(property) => properties.push(property),
                HostChild::Initiator(initiator) => initiators.push(initiator),
            }
        }

        let mut properties = fragment(&properties);
        if !properties.is_empty() {
            properties.push(',');
        }
        if initiators.is_empty() {
            // The wire grammar carries a spare separator before an empty
            // initiator list.
            properties.push(',');
        }

        Self {
            oid,
            properties,
            initiators,
        }
    }

    /// The object identifier.
    #[must_use]
    pub const fn oid(&self) -> &Oid {
        &self.oid
    }

    /// The nested initiators, in input order.
    #[must_use]
    pub fn initiators(&self) -> &[Initiator] {
        &self.initiators
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{\"oid\":\"{}\",\"class\":\"host\",{}\"initiator\":[{}]}}",
            self.oid,
            self.properties,
            joined(&self.initiators)
        )
    }
}

/// A classified child of a [`HostGroup`] element: a property or a nested
/// host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostGroupChild {
    /// A name/value pair routed to the properties fragment.
    Property(Property),
    /// A nested host routed to the host list.
    Host(Host),
}

impl From<Property> for HostGroupChild {
    fn from(property: Property) -> Self {
        Self::Property(property)
    }
}

impl From<Host> for HostGroupChild {
    fn from(host: Host) -> Self {
        Self::Host(host)
    }
}

/// A host group record with its nested hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostGroup {
    oid: Oid,
    properties: String,
    hosts: Vec<Host>,
}

impl HostGroup {
    /// Build a host group record from its object identifier and an ordered,
    /// heterogeneous list of children.
    #[must_use]
    pub fn new(oid: Oid, children: Vec<HostGroupChild>) -> Self {
        let mut properties = Vec::new();
        let mut hosts = Vec::new();
        for child in children {
            match child {
                HostGroupChild::Property(property) => properties.push(property),
                HostGroupChild::Host(host) => hosts.push(host),
            }
        }

        let mut properties = fragment(&properties);
        if !properties.is_empty() {
            properties.push(',');
        }

        Self {
            oid,
            properties,
            hosts,
        }
    }

    /// The object identifier.
    #[must_use]
    pub const fn oid(&self) -> &Oid {
        &self.oid
    }

    /// The nested hosts, in input order.
    #[must_use]
    pub fn hosts(&self) -> &[Host] {
        &self.hosts
    }
}

impl fmt::Display for HostGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{\"oid\":\"{}\",\"class\":\"host_group\",{}\"hosts\":[{}]}}",
            self.oid,
            self.properties,
            joined(&self.hosts)
        )
    }
}

/// A classified child of a [`System`] element: a property or a nested
/// redundancy link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemChild {
    /// A name/value pair routed to the properties fragment.
    Property(Property),
    /// A nested redundancy link routed to the redundancy list.
    Redundancy(Redundancy),
}

impl From<Property> for SystemChild {
    fn from(property: Property) -> Self {
        Self::Property(property)
    }
}

impl From<Redundancy> for SystemChild {
    fn from(redundancy: Redundancy) -> Self {
        Self::Redundancy(redundancy)
    }
}

/// A system record with its nested redundancy links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct System {
    oid: Oid,
    properties: String,
    redundancies: Vec<Redundancy>,
}

impl System {
    /// Build a system record from its object identifier and an ordered,
    /// heterogeneous list of children.
    #[must_use]
    pub fn new(oid: Oid, children: Vec<SystemChild>) -> Self {
        let mut properties = Vec::new();
        let mut redundancies = Vec::new();
        for child in children {
            match child {
                SystemChild::Property(property) => properties.push(property),
                SystemChild::Redundancy(redundancy) => redundancies.push(redundancy),
            }
        }

        let mut properties = fragment(&properties);
        if !properties.is_empty() {
            properties.push(',');
        }

        Self {
            oid,
            properties,
            redundancies,
        }
    }

    /// The object identifier.
    #[must_use]
    pub const fn oid(&self) -> &Oid {
        &self.oid
    }

    /// The nested redundancy links, in input order.
    #[must_use]
    pub fn redundancies(&self) -> &[Redundancy] {
        &self.redundancies
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{\"oid\":\"{}\",\"class\":\"system\",{}\"redundancies\":[{}]}}",
            self.oid,
            self.properties,
            joined(&self.redundancies)
        )
    }
}

/// Any one of the six addressable inventory record kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// A status record.
    Status(Status),
    /// A redundancy link record.
    Redundancy(Redundancy),
    /// An initiator record.
    Initiator(Initiator),
    /// A host record.
    Host(Host),
    /// A host group record.
    HostGroup(HostGroup),
    /// A system record.
    System(System),
}

impl Record {
    /// The kind of this record.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Status(_) => Kind::Status,
            Self::Redundancy(_) => Kind::Redundancy,
            Self::Initiator(_) => Kind::Initiator,
            Self::Host(_) => Kind::Host,
            Self::HostGroup(_) => Kind::HostGroup,
            Self::System(_) => Kind::System,
        }
    }

    /// The object identifier.
    #[must_use]
    pub const fn oid(&self) -> &Oid {
        match self {
            Self::Status(status) => status.oid(),
            Self::Redundancy(redundancy) => redundancy.oid(),
            Self::Initiator(initiator) => initiator.oid(),
            Self::Host(host) => host.oid(),
            Self::HostGroup(group) => group.oid(),
            Self::System(system) => system.oid(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Status(status) => status.fmt(f),
            Self::Redundancy(redundancy) => redundancy.fmt(f),
            Self::Initiator(initiator) => initiator.fmt(f),
            Self::Host(host) => host.fmt(f),
            Self::HostGroup(group) => group.fmt(f),
            Self::System(system) => system.fmt(f),
        }
    }
}

impl From<Status> for Record {
    fn from(status: Status) -> Self {
        Self::Status(status)
    }
}

impl From<Redundancy> for Record {
    fn from(redundancy: Redundancy) -> Self {
        Self::Redundancy(redundancy)
    }
}

impl From<Initiator> for Record {
    fn from(initiator: Initiator) -> Self {
        Self::Initiator(initiator)
    }
}

impl From<Host> for Record {
    fn from(host: Host) -> Self {
        Self::Host(host)
    }
}

impl From<HostGroup> for Record {
    fn from(group: HostGroup) -> Self {
        Self::HostGroup(group)
    }
}

impl From<System> for Record {
    fn from(system: System) -> Self {
        Self::System(system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid(raw: &str) -> Oid {
        raw.parse().unwrap()
    }

    fn prop(name: &str, value: &str) -> Property {
        Property::new(name.to_string(), value.to_string())
    }

    #[test]
    fn status_renders_with_space_padded_tail() {
        let status = Status::new(oid("st1"), &[prop("health", "OK")]);
        assert_eq!(
            status.to_string(),
            "{\"oid\":\"st1\",\"class\":\"status\",\"health\":\"OK\" }"
        );
    }

    #[test]
    fn status_with_no_properties_keeps_the_padding() {
        let status = Status::new(oid("st1"), &[]);
        assert_eq!(status.to_string(), "{\"oid\":\"st1\",\"class\":\"status\", }");
    }

    #[test]
    fn redundancy_class_label() {
        let redundancy = Redundancy::new(oid("rd1"), &[prop("mode", "active-active")]);
        assert_eq!(
            redundancy.to_string(),
            "{\"oid\":\"rd1\",\"class\":\"redundancy\",\"mode\":\"active-active\" }"
        );
    }

    #[test]
    fn initiator_class_label() {
        let initiator = Initiator::new(oid("in1"), &[prop("id", "iqn.1998-01.com:esx-1")]);
        assert_eq!(
            initiator.to_string(),
            "{\"oid\":\"in1\",\"class\":\"initiator\",\"id\":\"iqn.1998-01.com:esx-1\" }"
        );
    }

    #[test]
    fn host_without_initiators_doubles_the_separator() {
        let host = Host::new(oid("h1"), vec![prop("name", "srv1").into()]);
        assert_eq!(
            host.to_string(),
            "{\"oid\":\"h1\",\"class\":\"host\",\"name\":\"srv1\",,\"initiator\":[]}"
        );
    }

    #[test]
    fn host_with_initiator_has_a_single_separator() {
        let initiator = Initiator::new(oid("in1"), &[prop("id", "wwn-1")]);
        let host = Host::new(oid("h1"), vec![prop("name", "srv1").into(), initiator.into()]);
        assert_eq!(
            host.to_string(),
            "{\"oid\":\"h1\",\"class\":\"host\",\"name\":\"srv1\",\
             \"initiator\":[{\"oid\":\"in1\",\"class\":\"initiator\",\"id\":\"wwn-1\" }]}"
        );
    }

    #[test]
    fn host_with_nothing_still_carries_the_spare_separator() {
        let host = Host::new(oid("h1"), Vec::new());
        assert_eq!(
            host.to_string(),
            "{\"oid\":\"h1\",\"class\":\"host\",,\"initiator\":[]}"
        );
    }

    #[test]
    fn host_without_properties_renders_cleanly() {
        let initiator = Initiator::new(oid("in1"), &[]);
        let host = Host::new(oid("h1"), vec![initiator.into()]);
        assert_eq!(
            host.to_string(),
            "{\"oid\":\"h1\",\"class\":\"host\",\
             \"initiator\":[{\"oid\":\"in1\",\"class\":\"initiator\", }]}"
        );
    }

    #[test]
    fn spare_separator_tracks_initiator_presence() {
        let empty = Host::new(oid("h1"), vec![prop("name", "srv1").into()]);
        assert!(empty.to_string().contains(",,\"initiator\":["));

        let populated = Host::new(
            oid("h1"),
            vec![
                prop("name", "srv1").into(),
                Initiator::new(oid("in1"), &[]).into(),
            ],
        );
        assert!(!populated.to_string().contains(",,\"initiator\":["));
    }

    #[test]
    fn interleaved_children_keep_per_bucket_order() {
        let host = Host::new(
            oid("h1"),
            vec![
                Initiator::new(oid("a"), &[]).into(),
                prop("p1", "v1").into(),
                Initiator::new(oid("b"), &[]).into(),
                prop("p2", "v2").into(),
            ],
        );
        assert_eq!(
            host.to_string(),
            "{\"oid\":\"h1\",\"class\":\"host\",\"p1\":\"v1\",\"p2\":\"v2\",\
             \"initiator\":[{\"oid\":\"a\",\"class\":\"initiator\", },\
             {\"oid\":\"b\",\"class\":\"initiator\", }]}"
        );
    }

    #[test]
    fn host_group_nests_hosts() {
        let host = Host::new(oid("h1"), vec![prop("name", "srv1").into()]);
        let group = HostGroup::new(
            oid("hg1"),
            vec![prop("name", "production").into(), host.into()],
        );
        assert_eq!(
            group.to_string(),
            "{\"oid\":\"hg1\",\"class\":\"host_group\",\"name\":\"production\",\
             \"hosts\":[{\"oid\":\"h1\",\"class\":\"host\",\"name\":\"srv1\",,\"initiator\":[]}]}"
        );
    }

    #[test]
    fn host_group_without_hosts_has_empty_array() {
        let group = HostGroup::new(oid("hg1"), vec![prop("name", "empty").into()]);
        assert_eq!(
            group.to_string(),
            "{\"oid\":\"hg1\",\"class\":\"host_group\",\"name\":\"empty\",\"hosts\":[]}"
        );
    }

    #[test]
    fn system_nests_redundancies() {
        let redundancy = Redundancy::new(oid("rd1"), &[prop("mode", "failover")]);
        let system = System::new(
            oid("sy1"),
            vec![prop("vendor", "HP").into(), redundancy.into()],
        );
        assert_eq!(
            system.to_string(),
            "{\"oid\":\"sy1\",\"class\":\"system\",\"vendor\":\"HP\",\
             \"redundancies\":[{\"oid\":\"rd1\",\"class\":\"redundancy\",\"mode\":\"failover\" }]}"
        );
    }

    #[test]
    fn record_dispatches_kind_and_render() {
        let record = Record::from(Status::new(oid("st1"), &[]));
        assert_eq!(record.kind(), Kind::Status);
        assert_eq!(record.oid().as_str(), "st1");
        assert_eq!(record.to_string(), Status::new(oid("st1"), &[]).to_string());
    }

    #[test]
    fn kind_tags_are_canonical() {
        assert_eq!(Kind::HostGroup.tag(), "host-group");
        assert_eq!(Kind::Property.to_string(), "property");
    }
}
