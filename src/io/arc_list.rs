//! # ArcList
//!
//! The ArcList-Format consists of a header line `p <problem> <n> <m>`, followed by `m`
//! non-comment-lines `u v c` representing a capacitated arc `Arc(u - 1, v - 1, c)`.

use std::{
    fs::File,
    io::{BufRead, BufWriter, ErrorKind, Lines, Write},
    path::Path,
};

use super::*;

/// A GraphReader for the ArcList-Format
#[derive(Debug, Clone)]
pub struct ArcListReader {
    /// Problem identifier expected in the header
    problem: String,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for ArcListReader {
    /// Default to the `flow` problem
    fn default() -> Self {
        Self {
            problem: "flow".to_string(),
            comment_identifier: "c".to_string(),
        }
    }
}

impl ArcListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the problem identifier
    pub fn problem<S: Into<String>>(mut self, problem: S) -> ArcListReader {
        self.problem = problem.into();
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> ArcListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl<G: GraphFromArcs> GraphReader<G> for ArcListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> std::io::Result<G> {
        let mut arcs_reader =
            ArcListArcsReader::try_new(reader, &self.problem, &self.comment_identifier)?;
        let n = arcs_reader.number_of_nodes();

        let mut arcs = Vec::with_capacity(arcs_reader.number_of_arcs() as usize);
        while let Some(arc) = arcs_reader.try_next_arc()? {
            arcs.push(arc);
        }

        Ok(G::from_arcs(n, arcs))
    }
}

/// Trait for creating networks from an ArcListReader.
/// Used as shorthand for default ArcListReader settings
pub trait ArcListRead: Sized {
    /// Tries to read the network from a given reader
    fn try_read_arc_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the network from a given file
    fn try_read_arc_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_arc_list(BufReader::new(File::open(path)?))
    }
}

impl<G> ArcListRead for G
where
    G: GraphFromArcs,
{
    fn try_read_arc_list<R: BufRead>(reader: R) -> Result<Self> {
        ArcListReader::default().try_read_graph(reader)
    }
}

/// Real ArcListReader that consumes the reader
pub struct ArcListArcsReader<'a, R> {
    /// Lines in the reader
    lines: Lines<R>,
    /// Number of nodes parsed from header
    number_of_nodes: NumNodes,
    /// Number of arcs parsed from header
    number_of_arcs: NumArcs,
    /// Comment identifier
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> ArcListArcsReader<'a, R> {
    /// Creates a new ArcListArcsReader and tries to parse the first non-comment-line as the header
    pub fn try_new(reader: R, problem: &str, comment_identifier: &'a str) -> Result<Self> {
        let mut arc_list_reader = Self {
            lines: reader.lines(),
            number_of_nodes: 0,
            number_of_arcs: 0,
            comment_identifier,
        };

        let header = arc_list_reader
            .next_non_comment_line()?
            .ok_or(io_error!(ErrorKind::NotFound, "Header not found"))?;

        let mut parts = header.split(' ').filter(|t| !t.is_empty());
        raise_error_unless!(
            parts.next() == Some("p"),
            ErrorKind::InvalidData,
            "Header must start with 'p'."
        );
        raise_error_unless!(
            parts.next() == Some(problem),
            ErrorKind::InvalidData,
            format!("Header problem is not '{problem}'.")
        );

        arc_list_reader.number_of_nodes = parse_next_value!(parts, "Number of nodes");
        arc_list_reader.number_of_arcs = parse_next_value!(parts, "Number of arcs");

        Ok(arc_list_reader)
    }

    /// Returns the parsed number of arcs in the network
    pub fn number_of_arcs(&self) -> NumArcs {
        self.number_of_arcs
    }

    /// Returns the parsed number of nodes in the network
    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }
}

impl<R: BufRead> Iterator for ArcListArcsReader<'_, R> {
    type Item = Arc;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next_arc().unwrap()
    }
}

impl<R: BufRead> ArcListArcsReader<'_, R> {
    /// Returns the next non-comment-line if it exists or propagate an error
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            let line = self.lines.next();
            match line {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.starts_with(self.comment_identifier) => continue,
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }

    /// Tries to parse an arc from the next non-comment-line.
    /// Endpoints are 1-indexed in the file and decremented here.
    pub fn try_next_arc(&mut self) -> Result<Option<Arc>> {
        let line = self.next_non_comment_line()?;
        if let Some(line) = line {
            let mut parts = line.split(' ').filter(|t| !t.is_empty());

            let from: Node = parse_next_value!(parts, "Source node");
            let dest: Node = parse_next_value!(parts, "Target node");
            let capacity: Capacity = parse_next_value!(parts, "Arc capacity");

            raise_error_unless!(
                (1..=self.number_of_nodes).contains(&from)
                    && (1..=self.number_of_nodes).contains(&dest),
                ErrorKind::InvalidData,
                format!("Arc ({from},{dest}) is out of bounds.")
            );
            raise_error_unless!(
                capacity > 0,
                ErrorKind::InvalidData,
                format!("Arc ({from},{dest}) must have positive capacity.")
            );

            Ok(Some(Arc(from - 1, dest - 1, capacity)))
        } else {
            Ok(None)
        }
    }
}

/// A writer for the ArcList-Format
#[derive(Debug, Clone)]
pub struct ArcListWriter {
    /// Problem identifier written to the header
    problem: String,
}

impl Default for ArcListWriter {
    /// Default to the `flow` problem
    fn default() -> Self {
        Self {
            problem: "flow".to_string(),
        }
    }
}

impl ArcListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the problem identifier
    pub fn problem<S: Into<String>>(mut self, problem: S) -> ArcListWriter {
        self.problem = problem.into();
        self
    }
}

impl<G: CapacityGraph> GraphWriter<G> for ArcListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> std::io::Result<()> {
        writeln!(
            writer,
            "p {} {} {}",
            self.problem,
            graph.number_of_nodes(),
            graph.number_of_arcs()
        )?;

        for Arc(u, v, c) in graph.ordered_arcs() {
            writeln!(writer, "{} {} {}", u + 1, v + 1, c)?;
        }

        Ok(())
    }
}

/// Trait for writing a network to a writer in the ArcList-Format.
/// Shorthand for default settings.
pub trait ArcListWrite {
    /// Tries to write the network to a writer
    fn try_write_arc_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the network to a file
    fn try_write_arc_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_arc_list(writer)
    }
}

impl<G: CapacityGraph> ArcListWrite for G {
    fn try_write_arc_list<W: Write>(&self, writer: W) -> Result<()> {
        ArcListWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_sample_with_comments() {
        let data = "c a small shipping network\np flow 3 2\n1 2 5\nc capacities are in pallets\n3 1 7\n";
        let network: CapacityAdjArray = ArcListReader::new()
            .try_read_graph(Cursor::new(data))
            .unwrap();

        assert_eq!(network.number_of_nodes(), 3);
        assert_eq!(network.number_of_arcs(), 2);
        assert_eq!(network.capacity_of(0, 1), 5);
        assert_eq!(network.capacity_of(2, 0), 7);
    }

    #[test]
    fn writes_header_and_sorted_arcs() {
        let mut network = CapacityAdjArray::new(3);
        network.add_arcs([(2, 0, 7), (0, 1, 5)]);

        let mut out = Vec::new();
        network.try_write_arc_list(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "p flow 3 2\n1 2 5\n3 1 7\n"
        );
    }

    #[test]
    fn round_trip_preserves_arcs() {
        let mut network = CapacityMatrix::new(5);
        network.add_arcs([(0, 4, 3), (1, 2, 8), (2, 1, 2), (4, 0, 1)]);

        let mut out = Vec::new();
        network.try_write_arc_list(&mut out).unwrap();
        let read_back = CapacityMatrix::try_read_arc_list(Cursor::new(out)).unwrap();

        assert_eq!(
            read_back.ordered_arcs().collect::<Vec<_>>(),
            network.ordered_arcs().collect::<Vec<_>>()
        );
    }

    #[test]
    fn custom_problem_identifier() {
        let data = "p cap 2 1\n1 2 3\n";
        let network: CapacityMatrix = ArcListReader::new()
            .problem("cap")
            .try_read_graph(Cursor::new(data))
            .unwrap();
        assert_eq!(network.capacity_of(0, 1), 3);

        let default_reader = ArcListReader::new();
        let err =
            GraphReader::<CapacityMatrix>::try_read_graph(&default_reader, Cursor::new(data))
                .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn rejects_invalid_arcs() {
        for data in [
            "p flow 2 1\n1 2 0\n",
            "p flow 2 1\n1 3 5\n",
            "p flow 2 1\n0 2 5\n",
            "p flow 2 1\n1 2\n",
        ] {
            let result: Result<CapacityMatrix> =
                ArcListReader::new().try_read_graph(Cursor::new(data));
            assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidData);
        }
    }

    #[test]
    fn missing_header_is_not_found() {
        let result: Result<CapacityMatrix> =
            ArcListReader::new().try_read_graph(Cursor::new("c only comments\n"));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);
    }
}
