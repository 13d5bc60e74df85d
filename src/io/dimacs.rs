//! # Dimacs
//!
//! The DIMACS maximum-flow format. A problem line `p max <n> <m>` is followed by node
//! designator lines `n <id> s|t` marking the source and the sink, and `m` arc lines
//! `a <u> <v> <c>`. Lines starting with `c` are comments and may appear anywhere.

use std::{
    fs::File,
    io::{BufRead, BufWriter, ErrorKind, Write},
    path::Path,
};

use fxhash::FxHashSet;

use super::*;

/// A network together with the source and sink designated in a DIMACS file
#[derive(Debug, Clone)]
pub struct FlowInstance<G> {
    /// The capacitated network
    pub network: G,
    /// The designated source node
    pub source: Node,
    /// The designated sink node
    pub sink: Node,
}

/// A GraphReader for the DIMACS maximum-flow format
#[derive(Debug, Copy, Clone, Default)]
pub struct DimacsReader;

impl DimacsReader {
    /// Creates a new reader
    pub fn new() -> Self {
        Self
    }

    /// Reads a network plus its source and sink designators.
    ///
    /// # Errors
    /// Returns an error if the input is malformed or if either designator is missing.
    pub fn try_read_instance<G, R>(&self, reader: R) -> Result<FlowInstance<G>>
    where
        G: GraphFromArcs,
        R: BufRead,
    {
        let (network, source, sink) = self.try_parse(reader)?;
        Ok(FlowInstance {
            network,
            source: source.ok_or(io_error!(
                ErrorKind::InvalidData,
                "Source designator not found"
            ))?,
            sink: sink.ok_or(io_error!(
                ErrorKind::InvalidData,
                "Sink designator not found"
            ))?,
        })
    }

    /// Reads a network plus its source and sink designators from a file.
    pub fn try_read_instance_file<G, P>(&self, path: P) -> Result<FlowInstance<G>>
    where
        G: GraphFromArcs,
        P: AsRef<Path>,
    {
        self.try_read_instance(BufReader::new(File::open(path)?))
    }

    /// Parses the full input. The designators are optional at this level.
    fn try_parse<G, R>(&self, reader: R) -> Result<(G, Option<Node>, Option<Node>)>
    where
        G: GraphFromArcs,
        R: BufRead,
    {
        let mut header: Option<(NumNodes, NumArcs)> = None;
        let mut source: Option<Node> = None;
        let mut sink: Option<Node> = None;
        let mut arcs: Vec<Arc> = Vec::new();
        let mut seen_arcs: FxHashSet<(Node, Node)> = FxHashSet::default();

        for line in reader.lines() {
            let line = line?;
            let mut parts = line.split(' ').filter(|t| !t.is_empty());

            match parts.next() {
                None | Some("c") => continue,
                Some("p") => {
                    raise_error_unless!(
                        header.is_none(),
                        ErrorKind::InvalidData,
                        "Duplicate problem line."
                    );
                    raise_error_unless!(
                        parts.next() == Some("max"),
                        ErrorKind::InvalidData,
                        "Problem line must declare 'max'."
                    );

                    let n: NumNodes = parse_next_value!(parts, "Number of nodes");
                    let m: NumArcs = parse_next_value!(parts, "Number of arcs");
                    arcs.reserve(m as usize);
                    header = Some((n, m));
                }
                Some("n") => {
                    let (n, _) = header.ok_or(io_error!(
                        ErrorKind::InvalidData,
                        "Node designator before problem line."
                    ))?;

                    let id: Node = parse_next_value!(parts, "Node id");
                    raise_error_unless!(
                        (1..=n).contains(&id),
                        ErrorKind::InvalidData,
                        format!("Node {id} is out of bounds.")
                    );

                    match parts.next() {
                        Some("s") => {
                            raise_error_unless!(
                                source.is_none(),
                                ErrorKind::InvalidData,
                                "Duplicate source designator."
                            );
                            source = Some(id - 1);
                        }
                        Some("t") => {
                            raise_error_unless!(
                                sink.is_none(),
                                ErrorKind::InvalidData,
                                "Duplicate sink designator."
                            );
                            sink = Some(id - 1);
                        }
                        _ => {
                            return Err(io_error!(
                                ErrorKind::InvalidData,
                                "Node designator must be 's' or 't'."
                            ));
                        }
                    }
                }
                Some("a") => {
                    let (n, _) = header.ok_or(io_error!(
                        ErrorKind::InvalidData,
                        "Arc before problem line."
                    ))?;

                    let from: Node = parse_next_value!(parts, "Source node");
                    let dest: Node = parse_next_value!(parts, "Target node");
                    let capacity: Capacity = parse_next_value!(parts, "Arc capacity");

                    raise_error_unless!(
                        (1..=n).contains(&from) && (1..=n).contains(&dest),
                        ErrorKind::InvalidData,
                        format!("Arc ({from},{dest}) is out of bounds.")
                    );
                    raise_error_unless!(
                        capacity > 0,
                        ErrorKind::InvalidData,
                        format!("Arc ({from},{dest}) must have positive capacity.")
                    );
                    raise_error_unless!(
                        seen_arcs.insert((from, dest)),
                        ErrorKind::InvalidData,
                        format!("Duplicate arc ({from},{dest}).")
                    );

                    arcs.push(Arc(from - 1, dest - 1, capacity));
                }
                Some(token) => {
                    return Err(io_error!(
                        ErrorKind::InvalidData,
                        format!("Unknown line type: {token}")
                    ));
                }
            }
        }

        let (n, _) = header.ok_or(io_error!(ErrorKind::NotFound, "Problem line not found"))?;
        Ok((G::from_arcs(n, arcs), source, sink))
    }
}

impl<G: GraphFromArcs> GraphReader<G> for DimacsReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> std::io::Result<G> {
        let (network, _, _) = self.try_parse(reader)?;
        Ok(network)
    }
}

/// Trait for creating networks from a DimacsReader.
/// Used as shorthand for default DimacsReader settings
pub trait DimacsRead: Sized {
    /// Tries to read the network from a given reader
    fn try_read_dimacs<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the network from a given file
    fn try_read_dimacs_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_dimacs(BufReader::new(File::open(path)?))
    }
}

impl<G> DimacsRead for G
where
    G: GraphFromArcs,
{
    fn try_read_dimacs<R: BufRead>(reader: R) -> Result<Self> {
        DimacsReader::default().try_read_graph(reader)
    }
}

/// A writer for the DIMACS maximum-flow format
#[derive(Debug, Copy, Clone, Default)]
pub struct DimacsWriter {
    /// Optional source and sink written as designator lines
    instance: Option<(Node, Node)>,
}

impl DimacsWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes designator lines for `source` and `sink` after the problem line
    pub fn instance(mut self, source: Node, sink: Node) -> Self {
        self.instance = Some((source, sink));
        self
    }
}

impl<G: CapacityGraph> GraphWriter<G> for DimacsWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> std::io::Result<()> {
        writeln!(
            writer,
            "p max {} {}",
            graph.number_of_nodes(),
            graph.number_of_arcs()
        )?;

        if let Some((source, sink)) = self.instance {
            writeln!(writer, "n {} s", source + 1)?;
            writeln!(writer, "n {} t", sink + 1)?;
        }

        for Arc(u, v, c) in graph.ordered_arcs() {
            writeln!(writer, "a {} {} {}", u + 1, v + 1, c)?;
        }

        Ok(())
    }
}

/// Trait for writing a network to a writer in the DIMACS format.
/// Shorthand for default settings.
pub trait DimacsWrite {
    /// Tries to write the network to a writer
    fn try_write_dimacs<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the network to a file
    fn try_write_dimacs_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_dimacs(writer)
    }
}

impl<G: CapacityGraph> DimacsWrite for G {
    fn try_write_dimacs<W: Write>(&self, writer: W) -> Result<()> {
        DimacsWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::algo::*;

    const SAMPLE: &str = "c toy instance\n\
        p max 4 4\n\
        n 1 s\n\
        n 4 t\n\
        a 1 2 3\n\
        a 1 3 5\n\
        c the lower path has more capacity\n\
        a 2 4 3\n\
        a 3 4 4\n";

    #[test]
    fn reads_instance_and_solves() {
        let instance: FlowInstance<CapacityMatrix> = DimacsReader::new()
            .try_read_instance(Cursor::new(SAMPLE))
            .unwrap();

        assert_eq!(instance.source, 0);
        assert_eq!(instance.sink, 3);
        assert_eq!(instance.network.number_of_arcs(), 4);
        assert_eq!(
            instance
                .network
                .max_flow_value(instance.source, instance.sink)
                .unwrap(),
            7
        );
    }

    #[test]
    fn graph_reader_ignores_designators() {
        let network = CapacityAdjArray::try_read_dimacs(Cursor::new(SAMPLE)).unwrap();
        assert_eq!(network.number_of_nodes(), 4);
        assert_eq!(network.capacity_of(0, 2), 5);
    }

    #[test]
    fn missing_designator_fails_instance_read_only() {
        let data = "p max 2 1\nn 1 s\na 1 2 4\n";

        let instance: Result<FlowInstance<CapacityMatrix>> =
            DimacsReader::new().try_read_instance(Cursor::new(data));
        assert_eq!(instance.unwrap_err().kind(), ErrorKind::InvalidData);

        assert!(CapacityMatrix::try_read_dimacs(Cursor::new(data)).is_ok());
    }

    #[test]
    fn writes_designators_and_arcs() {
        let mut network = CapacityMatrix::new(2);
        network.add_arc((0, 1, 9));

        let mut out = Vec::new();
        DimacsWriter::new()
            .instance(0, 1)
            .try_write_graph(&network, &mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "p max 2 1\nn 1 s\nn 2 t\na 1 2 9\n"
        );

        let mut plain = Vec::new();
        network.try_write_dimacs(&mut plain).unwrap();
        assert_eq!(String::from_utf8(plain).unwrap(), "p max 2 1\na 1 2 9\n");
    }

    #[test]
    fn rejects_malformed_input() {
        for data in [
            "p max 2 1\na 1 2 4\na 1 2 6\n",
            "a 1 2 4\np max 2 1\n",
            "p max 2 1\nn 3 s\na 1 2 4\n",
            "p max 2 1\nn 1 x\na 1 2 4\n",
            "p flow 2 1\na 1 2 4\n",
            "x 1 2\n",
        ] {
            let result: Result<CapacityMatrix> = CapacityMatrix::try_read_dimacs(Cursor::new(data));
            assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidData);
        }
    }

    #[test]
    fn round_trip_with_designators() {
        let mut network = CapacityAdjArray::new(6);
        network.add_arcs([(0, 1, 16), (0, 2, 13), (1, 3, 12), (2, 4, 14), (3, 5, 20), (4, 5, 4)]);

        let mut out = Vec::new();
        DimacsWriter::new()
            .instance(0, 5)
            .try_write_graph(&network, &mut out)
            .unwrap();

        let instance: FlowInstance<CapacityAdjArray> = DimacsReader::new()
            .try_read_instance(Cursor::new(out))
            .unwrap();
        assert_eq!(instance.source, 0);
        assert_eq!(instance.sink, 5);
        assert_eq!(
            instance.network.ordered_arcs().collect::<Vec<_>>(),
            network.ordered_arcs().collect::<Vec<_>>()
        );
    }
}
