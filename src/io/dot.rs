//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use basic functionality to draw (colored) nodes and arcs,
//! optionally annotated with their flow values.
//!
//! For example, drawing a network with flow annotations where the source side of a minimum cut
//! is colored red can be achieved via
//! ```ignore
//! let dot_writer = DotWriter::default();
//! dot_writer.start_graph(&mut writer)?;
//! dot_writer.write_flow_arcs(&mut writer, &network, ek.flow())?;
//! dot_writer.color_nodes(&mut writer, ek.source_side_cut(), DotColor::Red)?;
//! dot_writer.finish_graph(&mut writer)?;
//! ```
//!
//! Note that for nodes, the latest coloring is the one that will be applied in a visualizer,
//! whereas for arcs, each new colored arc adds another arc to the graph. Use the inbuilt
//! `.filter()` method to selectively prevent drawing arcs prematurely.
use std::{fmt::Display, io::Write};

use super::*;
use crate::algo::FlowAssignment;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Increment nodes by 1 before writing
    inc_nodes: bool,
    /// Prefix of a node (default: 'u')
    prefix: String,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            inc_nodes: true,
            prefix: "u".to_string(),
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *false*, nodes retain their internal value (-1 that of input)
    pub fn inc_nodes(mut self, inc_nodes: bool) -> Self {
        self.inc_nodes = inc_nodes;
        self
    }

    /// Set the prefix of a node (`u` by default). Can also be changed while drawing to draw
    /// additional subgraphs apart from the original network.
    pub fn node_prefix<S>(self, prefix: S) -> DotWriter
    where
        S: Into<String>,
    {
        DotWriter {
            inc_nodes: self.inc_nodes,
            prefix: prefix.into(),
        }
    }

    /// Writes the opening brackets of the graph.
    /// Networks are always directed.
    pub fn start_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "digraph {{")
    }

    /// Formats a node depending on `self.prefix, self.inc_nodes`
    fn format_node(&self, u: Node) -> String {
        let u = u + self.inc_nodes as Node;
        format!("{}{u}", self.prefix)
    }

    /// Writes an iterator of arcs to `writer`, each labeled with its capacity.
    /// Must know if the arcs should be colored.
    pub fn write_arcs<W, I>(&self, writer: &mut W, arcs: I, color: Option<DotColor>) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Arc>,
    {
        let arc_color = color.map_or(String::new(), |col| format!(", color={col}"));

        for Arc(u, v, c) in arcs.into_iter() {
            write!(
                writer,
                "{}->{}[label=\"{c}\"{arc_color}];",
                self.format_node(u),
                self.format_node(v)
            )?;
        }
        writeln!(writer)
    }

    /// Writes all arcs of `network` to `writer`, each labeled with `flow/capacity`.
    /// Arcs carrying negative net flow are shown as `0/capacity`.
    pub fn write_flow_arcs<W, G>(
        &self,
        writer: &mut W,
        network: &G,
        flow: &FlowAssignment,
    ) -> Result<()>
    where
        W: Write,
        G: CapacityGraph,
    {
        for Arc(u, v, c) in network.ordered_arcs() {
            let f = flow.between(u, v).max(0);
            write!(
                writer,
                "{}->{}[label=\"{f}/{c}\"];",
                self.format_node(u),
                self.format_node(v)
            )?;
        }
        writeln!(writer)
    }

    /// Writes a list of node labels to `writer`.
    /// Pairs well with `Labeling::iter()`.
    pub fn write_node_labels<W, L, I>(&self, writer: &mut W, labels: I) -> Result<()>
    where
        W: Write,
        L: Display,
        I: IntoIterator<Item = (Node, L)>,
    {
        for (u, label) in labels.into_iter() {
            write!(writer, "{}[label=\"{label}\"];", self.format_node(u))?;
        }
        writeln!(writer)
    }

    /// Writes a list of colored nodes to `writer`.
    /// This method should only be needed when wanting to color additional nodes which is why
    /// `color` is not optional.
    pub fn color_nodes<W, I>(&self, writer: &mut W, nodes: I, color: DotColor) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Node>,
    {
        for u in nodes.into_iter() {
            write!(
                writer,
                "{}[style=filled, color={color}]",
                self.format_node(u)
            )?;
        }
        writeln!(writer)
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")
    }
}

impl<G> GraphWriter<G> for DotWriter
where
    G: CapacityGraph,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> std::io::Result<()>
    where
        W: Write,
    {
        self.start_graph(&mut writer)?;
        self.write_arcs(&mut writer, graph.ordered_arcs(), None)?;
        self.finish_graph(&mut writer)
    }
}

/// Trait for writing a network to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the network to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the network to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(writer)
    }
}

impl<G> DotWrite for G
where
    G: CapacityGraph,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Subset of the permitted colors in Svg-Dot taken from
/// `https://graphviz.gitlab.io/doc/info/colors.html#svg`
#[derive(Debug, Copy, Clone)]
pub enum DotColor {
    Black,
    Blue,
    Brown,
    Crimson,
    Cyan,
    Gold,
    Gray,
    Green,
    Lime,
    Magenta,
    Orange,
    Pink,
    Purple,
    Red,
    Salmon,
    SkyBlue,
    Teal,
    Violet,
    White,
    Yellow,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::*;

    #[test]
    fn writes_plain_network() {
        let mut network = CapacityAdjArray::new(3);
        network.add_arcs([(0, 1, 4), (1, 2, 2)]);

        let mut out = Vec::new();
        network.try_write_dot(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "digraph {\nu1->u2[label=\"4\"];u2->u3[label=\"2\"];\n}\n"
        );
    }

    #[test]
    fn writes_colored_arcs() {
        let mut out = Vec::new();
        DotWriter::new()
            .write_arcs(&mut out, [Arc(0, 1, 4)], Some(DotColor::Red))
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "u1->u2[label=\"4\", color=red];\n"
        );
    }

    #[test]
    fn writes_flow_over_capacity_labels() {
        let mut network = CapacityMatrix::new(4);
        network.add_arcs([(0, 1, 3), (0, 2, 5), (1, 3, 3), (2, 3, 4)]);

        let mut ek = EdmondsKarp::new(&network, 0, 3).unwrap();
        assert_eq!(ek.run(), 7);

        let mut out = Vec::new();
        let dot_writer = DotWriter::new();
        dot_writer.start_graph(&mut out).unwrap();
        dot_writer
            .write_flow_arcs(&mut out, &network, ek.flow())
            .unwrap();
        dot_writer.finish_graph(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "digraph {\nu1->u2[label=\"3/3\"];u1->u3[label=\"4/5\"];u2->u4[label=\"3/3\"];u3->u4[label=\"4/4\"];\n}\n"
        );
    }

    #[test]
    fn labels_and_colored_nodes() {
        let mut out = Vec::new();
        let dot_writer = DotWriter::new().inc_nodes(false).node_prefix("n");
        dot_writer
            .write_node_labels(&mut out, [(0, "s"), (1, "t")])
            .unwrap();
        dot_writer
            .color_nodes(&mut out, [0], DotColor::SkyBlue)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "n0[label=\"s\"];n1[label=\"t\"];\nn0[style=filled, color=skyblue]\n"
        );
    }
}
