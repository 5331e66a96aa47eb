//! Road networks loaded from text descriptions.
//!
//! A description has one record per line:
//!
//! ```plain
//! V,<id>,<latitude>,<longitude>
//! E,<from>,<to>,<street name>
//! ```
//!
//! Every `E` record is a one-way road segment between two vertices declared earlier.
//! Coordinates are kept in 1/100000 of a degree.
use crate::{
    algorithm::{LeastCostPath, Route},
    graph::{directed::*, *},
    GraphError, Result,
};
use ahash::RandomState;
use std::{
    collections::{BTreeMap, HashMap},
    io::BufRead,
};
use tracing::{debug, trace};

const COORDINATE_SCALE: f64 = 100_000.0;

/// A position in 1/100000 of a degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinates {
    pub lat: i64,
    pub lon: i64,
}

impl Coordinates {
    /// Straight-line distance, in 1/100000 of a degree, rounded.
    pub fn distance_to(&self, other: &Coordinates) -> u64 {
        let dlat = (self.lat - other.lat) as f64;
        let dlon = (self.lon - other.lon) as f64;
        dlat.hypot(dlon).round() as u64
    }
}

/// A directed graph of road segments, with vertex coordinates and street names.
#[derive(Debug, Clone)]
pub struct RoadNetwork {
    graph: DirectedGraph<u64>,
    coordinates: HashMap<u64, Coordinates, RandomState>,
    street_names: BTreeMap<Edge<u64>, String>,
}

impl RoadNetwork {
    /// Parses a description.
    ///
    /// Blank lines are skipped.
    /// Unknown record types, malformed fields and edges to undeclared vertices are errors.
    #[tracing::instrument(level = "debug", skip(reader))]
    pub fn load<R: BufRead>(reader: R) -> Result<Self> {
        let mut res = Self {
            graph: DirectedGraph::new(),
            coordinates: HashMap::with_hasher(RandomState::new()),
            street_names: BTreeMap::new(),
        };
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            res.load_record(idx + 1, line.trim())?;
        }
        debug!(
            vertices = res.graph.num_vertices(),
            edges = res.graph.num_edges(),
            "loaded a road network"
        );
        Ok(res)
    }

    fn load_record(&mut self, line_no: usize, line: &str) -> Result<()> {
        if line.is_empty() {
            trace!(line = line_no, "skipped a blank line");
            return Ok(());
        }
        let fields: Vec<&str> = line.splitn(4, ',').collect();
        match fields.as_slice() {
            ["V", id, lat, lon] => {
                let id = parse_id(line_no, id)?;
                let coord = Coordinates {
                    lat: parse_degrees(line_no, lat)?,
                    lon: parse_degrees(line_no, lon)?,
                };
                self.graph.add_vertex(id);
                self.coordinates.insert(id, coord);
            }
            ["E", from, to, name] => {
                let from = parse_id(line_no, from)?;
                let to = parse_id(line_no, to)?;
                for v in [from, to] {
                    if !self.graph.contains_vertex(&v) {
                        return Err(parse_error(line_no, format!("undeclared vertex {}", v)));
                    }
                }
                self.graph.add_edge(from, to)?;
                self.street_names
                    .insert(Edge::new(from, to), name.trim().trim_matches('"').to_owned());
            }
            _ => {
                return Err(parse_error(line_no, format!("malformed record {:?}", line)));
            }
        }
        Ok(())
    }

    pub fn graph(&self) -> &DirectedGraph<u64> {
        &self.graph
    }

    pub fn coordinates(&self, v: &u64) -> Option<Coordinates> {
        self.coordinates.get(v).copied()
    }

    pub fn street_name(&self, from: u64, to: u64) -> Option<&str> {
        self.street_names
            .get(&Edge::new(from, to))
            .map(|s| s.as_str())
    }

    /// Straight-line length of an edge,
    /// or `None` if an endpoint is not a vertex of this network.
    pub fn cost(&self, edge: &Edge<u64>) -> Option<u64> {
        let from = self.coordinates.get(&edge.source)?;
        let to = self.coordinates.get(&edge.sink)?;
        Some(from.distance_to(to))
    }

    /// The shortest drive from `start` to `dest`, measured in straight-line segment lengths.
    pub fn least_cost_route(&self, start: u64, dest: u64) -> Option<Route<u64, u64>> {
        // every vertex of `self.graph` has coordinates
        self.graph
            .least_cost_route(&start, &dest, |e| self.cost(e).unwrap_or_default())
    }
}

fn parse_error(line: usize, reason: String) -> GraphError {
    GraphError::Parse { line, reason }
}

fn parse_id(line: usize, s: &str) -> Result<u64> {
    s.trim()
        .parse()
        .map_err(|e| parse_error(line, format!("bad vertex id {:?}: {}", s, e)))
}

fn parse_degrees(line: usize, s: &str) -> Result<i64> {
    let deg: f64 = s
        .trim()
        .parse()
        .map_err(|e| parse_error(line, format!("bad coordinate {:?}: {}", s, e)))?;
    if !deg.is_finite() || deg.abs() > 360.0 {
        return Err(parse_error(line, format!("coordinate out of range: {}", deg)));
    }
    Ok((deg * COORDINATE_SCALE).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"V,1,53.430996,-113.491331
V,2,53.431,-113.49
V,3,53.44,-113.49

E,1,2,"Main Street"
E,2,3,Saint Albert Trail, North
E,3,1,
"#;

    #[test]
    fn load() {
        let net = RoadNetwork::load(SAMPLE.as_bytes()).unwrap();
        assert_eq!(net.graph().num_vertices(), 3);
        assert_eq!(net.graph().num_edges(), 3);
        assert_eq!(
            net.coordinates(&1),
            Some(Coordinates {
                lat: 5343100,
                lon: -11349133
            })
        );
        assert_eq!(net.street_name(1, 2), Some("Main Street"));
        assert_eq!(net.street_name(2, 3), Some("Saint Albert Trail, North"));
        assert_eq!(net.street_name(3, 1), Some(""));
        assert_eq!(net.street_name(2, 1), None);
    }

    #[test]
    fn cost_is_euclidean() {
        let net = RoadNetwork::load(SAMPLE.as_bytes()).unwrap();
        assert_eq!(net.cost(&Edge::new(2, 3)), Some(900));
        assert_eq!(net.cost(&Edge::new(2, 9)), None);
    }

    #[test]
    fn route_follows_one_way_roads() {
        let net = RoadNetwork::load(SAMPLE.as_bytes()).unwrap();
        let route = net.least_cost_route(2, 1).unwrap();
        assert_eq!(route.path, vec![2, 3, 1]);
        assert_eq!(
            route.cost,
            net.cost(&Edge::new(2, 3)).unwrap() + net.cost(&Edge::new(3, 1)).unwrap()
        );
        assert_eq!(net.least_cost_route(1, 42), None);
    }

    struct BrokenReader;

    impl std::io::Read for BrokenReader {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disconnected"))
        }
    }

    #[test]
    fn read_failures_are_io_errors() {
        let reader = std::io::BufReader::new(BrokenReader);
        match RoadNetwork::load(reader) {
            Err(GraphError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::Other),
            other => panic!("{:?}", other.map(|n| n.graph().num_vertices())),
        }
    }

    #[test]
    fn malformed_records() {
        for (text, line) in [
            ("X,1,2,3\n", 1),
            ("V,1,53.0\n", 1),
            ("V,1,53.0,-113.0\nV,a,1,1\n", 2),
            ("V,1,abc,1\n", 1),
            ("V,1,53.0,-113.0\nE,1,2,Nowhere\n", 2),
        ] {
            match RoadNetwork::load(text.as_bytes()) {
                Err(GraphError::Parse { line: l, .. }) => assert_eq!(l, line, "{}", text),
                other => panic!("{:?} for {:?}", other.map(|n| n.graph().num_vertices()), text),
            }
        }
    }
}
