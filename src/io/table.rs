//! # Table
//!
//! Renders flow query results as an aligned plain-text table. Names are taken from a
//! [`Labeling`] where available; unlabeled nodes fall back to `u<node>`. Rows are sorted
//! by source name, then sink name, so repeated runs produce identical reports.

use std::{
    fmt::Display,
    fs::File,
    hash::Hash,
    io::{BufWriter, Write},
    path::Path,
};

use super::*;
use crate::{algo::QueryResult, utils::Labeling};

/// A writer rendering flow query results as a three-column text table
#[derive(Debug, Clone)]
pub struct FlowTableWriter {
    /// Column headers for source, sink, and flow value
    headers: [String; 3],
}

impl Default for FlowTableWriter {
    fn default() -> Self {
        Self {
            headers: ["source".to_string(), "sink".to_string(), "flow".to_string()],
        }
    }
}

impl FlowTableWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the column headers
    pub fn headers<S: Into<String>>(mut self, source: S, sink: S, flow: S) -> Self {
        self.headers = [source.into(), sink.into(), flow.into()];
        self
    }

    /// Writes `results` as an aligned table. The name columns are left-aligned,
    /// the value column is right-aligned. Empty results yield only the header line.
    pub fn try_write_table<W, L>(
        &self,
        results: &[QueryResult],
        labeling: &Labeling<L>,
        mut writer: W,
    ) -> Result<()>
    where
        W: Write,
        L: Clone + Eq + Hash + Display,
    {
        let name = |u: Node| {
            labeling
                .label_of(u)
                .map_or_else(|| format!("u{u}"), |label| label.to_string())
        };

        let mut rows: Vec<[String; 3]> = results
            .iter()
            .map(|r| [name(r.source), name(r.sink), r.value.to_string()])
            .collect();
        rows.sort();

        let mut widths = [0usize; 3];
        for row in std::iter::once(&self.headers).chain(rows.iter()) {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        for row in std::iter::once(&self.headers).chain(rows.iter()) {
            writeln!(
                writer,
                "{:<w0$}  {:<w1$}  {:>w2$}",
                row[0],
                row[1],
                row[2],
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2]
            )?;
        }

        Ok(())
    }

    /// Writes `results` as an aligned table to a file
    pub fn try_write_table_file<P, L>(
        &self,
        results: &[QueryResult],
        labeling: &Labeling<L>,
        path: P,
    ) -> Result<()>
    where
        P: AsRef<Path>,
        L: Clone + Eq + Hash + Display,
    {
        self.try_write_table(results, labeling, BufWriter::new(File::create(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::*;

    #[test]
    fn renders_sorted_aligned_report() {
        let (labeling, _) = Labeling::from_labeled_arcs(LOGISTICS_ARCS);
        let results: Vec<_> = LOGISTICS_MAX_FLOWS
            .iter()
            .map(|(source, sink, value)| QueryResult {
                source: labeling.node_of(source).unwrap(),
                sink: labeling.node_of(sink).unwrap(),
                value: *value,
            })
            .collect();

        let mut out = Vec::new();
        FlowTableWriter::new()
            .headers("Terminal", "Shop", "Flow (units)")
            .try_write_table(&results, &labeling, &mut out)
            .unwrap();

        // Shops sort by name, so "Shop 10" precedes "Shop 4"
        let expected = "Terminal    Shop     Flow (units)\n\
            Terminal 1  Shop 1             15\n\
            Terminal 1  Shop 2             10\n\
            Terminal 1  Shop 3             20\n\
            Terminal 1  Shop 4             15\n\
            Terminal 1  Shop 5             10\n\
            Terminal 1  Shop 6             20\n\
            Terminal 1  Shop 7             15\n\
            Terminal 1  Shop 8             15\n\
            Terminal 1  Shop 9             10\n\
            Terminal 2  Shop 10            20\n\
            Terminal 2  Shop 11            10\n\
            Terminal 2  Shop 12            15\n\
            Terminal 2  Shop 13             5\n\
            Terminal 2  Shop 14            10\n\
            Terminal 2  Shop 4             10\n\
            Terminal 2  Shop 5             10\n\
            Terminal 2  Shop 6             10\n\
            Terminal 2  Shop 7             15\n\
            Terminal 2  Shop 8             15\n\
            Terminal 2  Shop 9             10\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn unlabeled_nodes_fall_back_to_indices() {
        let results = [QueryResult {
            source: 0,
            sink: 2,
            value: 7,
        }];

        let mut out = Vec::new();
        FlowTableWriter::new()
            .try_write_table(&results, &Labeling::<String>::new(), &mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "source  sink  flow\nu0      u2       7\n"
        );
    }

    #[test]
    fn empty_results_yield_header_only() {
        let mut out = Vec::new();
        FlowTableWriter::new()
            .try_write_table(&[], &Labeling::<String>::new(), &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "source  sink  flow\n");
    }
}
