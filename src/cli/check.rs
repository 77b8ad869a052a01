use std::{collections::BTreeMap, path::PathBuf};

use clap::Parser;
use saninv::{
    Builder, Collection, Config, Element, Kind, Record,
    domain::{Host, System},
};
use tracing::instrument;

use super::terminal::Colorize;

/// Build an element tree and report per-kind record counts.
#[derive(Debug, Parser)]
#[command(about = "Build an element tree and report per-kind record counts")]
pub struct Check {
    /// Path to the JSON element tree, or '-' for stdin
    input: PathBuf,

    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,

    /// Suppress headers and format for scripting
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Check {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: Config) -> anyhow::Result<()> {
        let raw = super::read_input(&self.input)?;
        let value: serde_json::Value = serde_json::from_str(&raw)?;
        let builder = Builder::with_config(config);

        let records: Vec<Record> = if value.is_array() {
            match builder.collection_from_value(&value)? {
                Collection::List(records) => records,
                Collection::Invalid => Vec::new(),
            }
        } else {
            let element: Element = serde_json::from_value(value)?;
            vec![builder.record(&element)?]
        };

        let mut counts: BTreeMap<Kind, usize> = BTreeMap::new();
        for record in &records {
            tally(record, &mut counts);
        }
        let total: usize = counts.values().sum();

        if total == 0 {
            println!("No records found.");
            return Ok(());
        }

        match self.output {
            OutputFormat::Json => Self::output_json(&counts, total)?,
            OutputFormat::Table => {
                if self.quiet {
                    println!("{total}");
                } else {
                    Self::output_table(&counts, total);
                }
            }
        }

        Ok(())
    }

    fn output_table(counts: &BTreeMap<Kind, usize>, total: usize) {
        println!("{}", format!("{total} records").success());
        for (kind, count) in counts {
            println!("  {} {count}", format!("{:<12}", kind.tag()).dim());
        }
    }

    fn output_json(counts: &BTreeMap<Kind, usize>, total: usize) -> anyhow::Result<()> {
        use serde_json::json;

        let kinds: Vec<_> = counts
            .iter()
            .map(|(kind, count)| json!({"kind": kind.tag(), "count": count}))
            .collect();

        let output = json!({
            "kinds": kinds,
            "total": total,
        });

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}

/// Counts a record and every record nested beneath it.
fn tally(record: &Record, counts: &mut BTreeMap<Kind, usize>) {
    match record {
        Record::Host(host) => tally_host(host, counts),
        Record::HostGroup(group) => {
            *counts.entry(Kind::HostGroup).or_insert(0) += 1;
            for host in group.hosts() {
                tally_host(host, counts);
            }
        }
        Record::System(system) => tally_system(system, counts),
        other => *counts.entry(other.kind()).or_insert(0) += 1,
    }
}

fn tally_host(host: &Host, counts: &mut BTreeMap<Kind, usize>) {
    *counts.entry(Kind::Host).or_insert(0) += 1;
    let initiators = host.initiators().len();
    if initiators > 0 {
        *counts.entry(Kind::Initiator).or_insert(0) += initiators;
    }
}

fn tally_system(system: &System, counts: &mut BTreeMap<Kind, usize>) {
    *counts.entry(Kind::System).or_insert(0) += 1;
    let redundancies = system.redundancies().len();
    if redundancies > 0 {
        *counts.entry(Kind::Redundancy).or_insert(0) += redundancies;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use saninv::{
        Kind, Oid, Property, Record,
        domain::{Host, HostGroup, Initiator},
    };

    use super::tally;

    fn oid(raw: &str) -> Oid {
        raw.parse().unwrap()
    }

    #[test]
    fn tally_descends_into_nested_records() {
        let host = Host::new(
            oid("h1"),
            vec![
                Property::new("name".to_string(), "srv1".to_string()).into(),
                Initiator::new(oid("in1"), &[]).into(),
                Initiator::new(oid("in2"), &[]).into(),
            ],
        );
        let group = HostGroup::new(oid("hg1"), vec![host.into()]);

        let mut counts = BTreeMap::new();
        tally(&Record::from(group), &mut counts);

        assert_eq!(counts.get(&Kind::HostGroup), Some(&1));
        assert_eq!(counts.get(&Kind::Host), Some(&1));
        assert_eq!(counts.get(&Kind::Initiator), Some(&2));
    }

    #[test]
    fn tally_skips_zero_rows() {
        let host = Host::new(oid("h1"), Vec::new());

        let mut counts = BTreeMap::new();
        tally(&Record::from(host), &mut counts);

        assert_eq!(counts.get(&Kind::Host), Some(&1));
        assert_eq!(counts.get(&Kind::Initiator), None);
    }
}
