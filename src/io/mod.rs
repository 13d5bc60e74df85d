/*!
# IO

Utilities for reading and writing networks from and to different file formats.

## Input Formats

Currently supported input formats:
- **ArcList**: Represents the network as a header line followed by a list of capacitated arcs.
- **Dimacs**: The [DIMACS maximum-flow format](http://archive.dimacs.rutgers.edu/pub/netflow/general-info/specs.tex)
  which additionally designates a source and a sink node.

Both formats use 1-indexed nodes on disk and 0-indexed nodes in memory.

## Output Formats

For writing networks, in addition to the above formats, the following is supported:
- **Dot**: The [DOT language](https://graphviz.org/doc/info/lang.html) of [GraphViz](https://graphviz.org/)
  with optional flow annotations.

The DOT format:
- is the only format that does not require a header,
- supports node labels (all others only allow positive integer nodes),
- requires labels to follow DOT’s naming conventions (no spaces, hyphens, or other special characters).

Flow query results can further be rendered as an aligned text table, see [`FlowTableWriter`].

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by readers and writers for a specific format.
- [`NetworkRead`] and [`NetworkWrite`] abstract over reading/writing using a given [`FileFormat`].

*/

pub mod arc_list;
pub mod dimacs;
pub mod dot;
pub mod table;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
    str::FromStr,
};

use crate::prelude::*;

pub use arc_list::*;
pub use dimacs::*;
pub use dot::*;
pub use table::*;

/// Identifier for a network file format.
///
/// Used in [`NetworkRead`] and [`NetworkWrite`] to determine the
/// correct parser or writer to use.
///
/// Currently supported:
/// - [`FileFormat::ArcList`]
/// - [`FileFormat::Dimacs`]
/// - [`FileFormat::Dot`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Header plus arc-per-line format
    ArcList,
    /// DIMACS maximum-flow format
    Dimacs,
    /// DOT language of GraphViz
    Dot,
}

impl FromStr for FileFormat {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "arclist" => Ok(FileFormat::ArcList),
            "dimacs" => Ok(FileFormat::Dimacs),
            "dot" => Ok(FileFormat::Dot),
            _ => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Unknown FileFormat: {s}").as_str(),
            )),
        }
    }
}

/// Trait for types that can read networks in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
///
/// Typically implemented by specific readers (e.g., [`ArcListRead`],
/// [`DimacsRead`]).
pub trait GraphReader<G> {
    /// Reads a network from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a network in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a network from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a network in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write networks in a specific format.
///
/// This trait provides both a low-level method to write to any
/// [`Write`] instance and a convenience wrapper to write directly
/// to files.
///
/// Typically implemented by specific writers (e.g., [`ArcListWrite`],
/// [`DimacsWrite`], [`DotWrite`]).
pub trait GraphWriter<G> {
    /// Writes the given network to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given network to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Trait for reading networks when only a [`FileFormat`] is known.
///
/// Provides a unified interface to construct networks from readers
/// or files by dispatching to the correct format-specific parser.
///
/// Automatically implemented for networks that support all required
/// format-specific traits (e.g., [`ArcListRead`], [`DimacsRead`]).
pub trait NetworkRead: Sized {
    /// Reads a network from the given reader according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the format is unsupported for this network type
    /// or if the input does not match the expected format.
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead;

    /// Reads a network from the given file according to the specified [`FileFormat`].
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if the input
    /// is invalid for the chosen format.
    fn try_from_file<P>(path: P, format: FileFormat) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_from_reader(BufReader::new(File::open(path)?), format)
    }
}

impl<G> NetworkRead for G
where
    G: ArcListRead + DimacsRead,
{
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead,
    {
        match format {
            FileFormat::ArcList => Self::try_read_arc_list(reader),
            FileFormat::Dimacs => Self::try_read_dimacs(reader),
            _ => Err(io_error!(
                ErrorKind::InvalidInput,
                format!("{format:?} does not support NetworkRead")
            )),
        }
    }
}

/// Trait for writing networks when only a [`FileFormat`] is known.
///
/// Provides a unified interface to output networks to writers or files
/// by dispatching to the correct format-specific writer.
///
/// Automatically implemented for networks that support all required
/// format-specific traits (e.g., [`ArcListWrite`], [`DimacsWrite`], [`DotWrite`]).
pub trait NetworkWrite {
    /// Writes the network to the given writer according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the format is unsupported for this network type
    /// or if writing fails (e.g., IO errors).
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write;

    /// Writes the network to the given file according to the specified [`FileFormat`].
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_to_writer(BufWriter::new(File::create(path)?), format)
    }
}

impl<G> NetworkWrite for G
where
    G: ArcListWrite + DimacsWrite + DotWrite,
{
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::ArcList => self.try_write_arc_list(writer),
            FileFormat::Dimacs => self.try_write_dimacs(writer),
            FileFormat::Dot => self.try_write_dot(writer),
        }
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let next = $iterator.next();
        raise_error_unless!(
            next.is_some(),
            ErrorKind::InvalidData,
            format!("Premature end of line when parsing {}.", $name)
        );

        let parsed = next.unwrap().parse();
        raise_error_unless!(
            parsed.is_ok(),
            ErrorKind::InvalidData,
            format!("Invalid value found. Cannot parse {}.", $name)
        );

        parsed.unwrap()
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::CapacityMatrix;

    #[test]
    fn file_format_from_str() {
        assert_eq!("arclist".parse::<FileFormat>().unwrap(), FileFormat::ArcList);
        assert_eq!("DIMACS".parse::<FileFormat>().unwrap(), FileFormat::Dimacs);
        assert_eq!("Dot".parse::<FileFormat>().unwrap(), FileFormat::Dot);
        assert!("metis".parse::<FileFormat>().is_err());
    }

    #[test]
    fn read_dispatches_on_format() {
        let arc_list = "p flow 3 2\n1 2 5\n2 3 4\n";
        let dimacs = "p max 3 2\nn 1 s\nn 3 t\na 1 2 5\na 2 3 4\n";

        for (data, format) in [
            (arc_list, FileFormat::ArcList),
            (dimacs, FileFormat::Dimacs),
        ] {
            let network =
                CapacityMatrix::try_from_reader(std::io::Cursor::new(data), format).unwrap();
            assert_eq!(network.number_of_nodes(), 3);
            assert_eq!(network.capacity_of(0, 1), 5);
            assert_eq!(network.capacity_of(1, 2), 4);
        }

        assert!(
            CapacityMatrix::try_from_reader(std::io::Cursor::new(arc_list), FileFormat::Dot)
                .is_err()
        );
    }

    #[test]
    fn write_dispatches_on_format() {
        let network = CapacityMatrix::from_rows(vec![vec![0, 7], vec![0, 0]]).unwrap();

        let mut arc_list = Vec::new();
        network
            .try_write_to_writer(&mut arc_list, FileFormat::ArcList)
            .unwrap();
        assert_eq!(String::from_utf8(arc_list).unwrap(), "p flow 2 1\n1 2 7\n");

        let mut dot = Vec::new();
        network
            .try_write_to_writer(&mut dot, FileFormat::Dot)
            .unwrap();
        assert!(String::from_utf8(dot).unwrap().starts_with("digraph {"));
    }
}
