//! Visualize graphs in the graphviz format.
use crate::graph::*;
use std::collections::BTreeMap;

/**
 * Colours and labels of vertices and edges when dumping in graphviz.
 *
 * All maps are borrowed and left untouched.
 * Vertices and edges missing from the maps get defaults:
 * white vertices labelled by themselves, and black unlabelled edges.
 * Edges of undirected graphs are looked up in their canonical form.
 */
#[derive(Debug, Clone)]
pub struct DotStyle<'a, V> {
    vertex_color: Option<&'a BTreeMap<V, String>>,
    edge_color: Option<&'a BTreeMap<Edge<V>, String>>,
    vertex_label: Option<&'a BTreeMap<V, String>>,
    edge_label: Option<&'a BTreeMap<Edge<V>, String>>,
}

impl<'a, V> Default for DotStyle<'a, V> {
    fn default() -> Self {
        Self {
            vertex_color: None,
            edge_color: None,
            vertex_label: None,
            edge_label: None,
        }
    }
}

impl<'a, V: Vertex> DotStyle<'a, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_colors(mut self, colors: &'a BTreeMap<V, String>) -> Self {
        self.vertex_color = Some(colors);
        self
    }

    pub fn edge_colors(mut self, colors: &'a BTreeMap<Edge<V>, String>) -> Self {
        self.edge_color = Some(colors);
        self
    }

    pub fn vertex_labels(mut self, labels: &'a BTreeMap<V, String>) -> Self {
        self.vertex_label = Some(labels);
        self
    }

    pub fn edge_labels(mut self, labels: &'a BTreeMap<Edge<V>, String>) -> Self {
        self.edge_label = Some(labels);
        self
    }
}

/**
 * Dumps a directed/undirected graph into graphviz format.
 *
 * Vertices are named by their `Debug` representations.
 *
 * # Examples
 *
 * ```rust
 * use graphtrek::{algorithm::graphviz::*, graph::{undirected::*, *}};
 * use std::collections::BTreeMap;
 *
 * let g = UndirectedGraph::from_edges([(2, 1), (1, 3)]).unwrap();
 * let colors = BTreeMap::from([(1, "green".to_owned())]);
 * let edge_labels = BTreeMap::from([(Edge::new(1, 2), "0".to_owned())]);
 * let style = DotStyle::new()
 *     .vertex_colors(&colors)
 *     .edge_labels(&edge_labels);
 * let trial = {
 *     let mut buf = vec![];
 *     g.dump_in_graphviz(&mut buf, "g", &style).unwrap();
 *     String::from_utf8(buf).unwrap()
 * };
 * assert_eq!(
 *     trial,
 *     r#"graph g {
 *   ordering=out;
 *   node [shape=circle];
 *   edge [penwidth=3];
 *   1 [label="1", style=filled, fillcolor="green"];
 *   2 [label="2", style=filled, fillcolor="white"];
 *   3 [label="3", style=filled, fillcolor="white"];
 *   1 -- 2 [color="black", label="0"];
 *   1 -- 3 [color="black"];
 * }
 * "#);
 * ```
 */
pub trait DumpInGraphviz
where
    Self: QueryableGraph + DirectedOrNot,
{
    /**
     * Dumps a directed/undirected graph to a `std::io::Write` object in the graphviz format.
     */
    fn dump_in_graphviz<W>(
        &self,
        out: &mut W,
        graph_name: &str,
        style: &DotStyle<'_, Self::Vertex>,
    ) -> std::io::Result<()>
    where
        W: std::io::Write,
    {
        if Self::DIRECTED_OR_NOT {
            writeln!(out, "digraph {} {{", graph_name)?;
        } else {
            writeln!(out, "graph {} {{", graph_name)?;
        }
        writeln!(out, "  ordering=out;")?;
        writeln!(out, "  node [shape=circle];")?;
        writeln!(out, "  edge [penwidth=3];")?;
        if self.num_vertices() == 0 {
            writeln!(out, "  Empty [shape=ellipse];")?;
        }
        for v in self.iter_vertices() {
            let color = lookup(style.vertex_color, v).unwrap_or("white");
            let label = match lookup(style.vertex_label, v) {
                Some(l) => l.to_owned(),
                None => format!("{:?}", v),
            };
            writeln!(
                out,
                "  {:?} [label=\"{}\", style=filled, fillcolor=\"{}\"];",
                v,
                escape(&label),
                escape(color)
            )?;
        }
        let dir = if Self::DIRECTED_OR_NOT { "->" } else { "--" };
        for e in self.iter_edges() {
            let color = lookup(style.edge_color, &e).unwrap_or("black");
            write!(
                out,
                "  {:?} {} {:?} [color=\"{}\"",
                e.source,
                dir,
                e.sink,
                escape(color)
            )?;
            if let Some(label) = lookup(style.edge_label, &e) {
                write!(out, ", label=\"{}\"", escape(label))?;
            }
            writeln!(out, "];")?;
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}

impl<G> DumpInGraphviz for G where G: QueryableGraph + DirectedOrNot {}

fn lookup<'a, K: Ord>(map: Option<&'a BTreeMap<K, String>>, key: &K) -> Option<&'a str> {
    map.and_then(|m| m.get(key)).map(|s| s.as_str())
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
