//! This bench test renders a large host-group graph to API text.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use saninv::{
    Oid, Property,
    domain::{Host, HostChild, HostGroup, HostGroupChild, Initiator},
};

/// Generates a host group holding `hosts` hosts, each with a handful of
/// properties and initiators.
fn build_group(hosts: usize) -> HostGroup {
    let mut children: Vec<HostGroupChild> = vec![
        Property::new("name".to_string(), "production".to_string()).into(),
        Property::new("member-count".to_string(), hosts.to_string()).into(),
    ];

    for h in 0..hosts {
        let mut host_children: Vec<HostChild> = (0..8)
            .map(|p| Property::new(format!("prop-{p}"), format!("value-{p}")).into())
            .collect();
        for i in 0..4 {
            let oid = Oid::new(format!("initiator_{h}_{i}")).unwrap();
            let properties = [Property::new(
                "id".to_string(),
                format!("iqn.1998-01.com.example:host-{h}-{i}"),
            )];
            host_children.push(Initiator::new(oid, &properties).into());
        }
        let oid = Oid::new(format!("host_{h}")).unwrap();
        children.push(Host::new(oid, host_children).into());
    }

    let oid = Oid::new("hostgroup_0".to_string()).unwrap();
    HostGroup::new(oid, children)
}

fn render_tree(c: &mut Criterion) {
    let group = build_group(100);

    c.bench_function("render host group", |b| {
        b.iter(|| black_box(&group).to_string());
    });
}

criterion_group!(benches, render_tree);
criterion_main!(benches);
