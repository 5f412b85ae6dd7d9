//! Shortest routes between two points of a road map, found with A*.
//!
//! The crate is built around three pieces:
//! - a [`RouteGraph`](graph::RouteGraph): anything that can look up the node closest to a
//!   position, list the neighbors of a node and convert normalized distances to meters.
//!   [`RoadMap`](graph::RoadMap) is the bundled implementation.
//! - a [`RoutePlanner`](planner::RoutePlanner), which resolves start and end positions to
//!   nodes and runs the search.
//! - the resulting [`Path`](path::Path): copies of the visited nodes, start first, and the
//!   total length in real-world units.
//!
//! ## Example
//! ```
//! use route_planner::prelude::*;
//!
//! // a single road with three nodes, 1 normalized unit = 1000 meters
//! let mut map = RoadMap::new(1000.0).unwrap();
//! let a = map.add_node((0.1, 0.1)).unwrap();
//! let b = map.add_node((0.1, 0.5)).unwrap();
//! let c = map.add_node((0.4, 0.5)).unwrap();
//! map.add_road(RoadKind::Residential, &[a, b, c]).unwrap();
//!
//! // inputs are in percent of the map extent
//! let mut planner = RoutePlanner::new(&mut map, 10.0, 10.0, 40.0, 50.0).unwrap();
//! let path = planner.run().unwrap();
//!
//! assert_eq!(path.len(), 3);
//! assert_eq!(path.start().id, a);
//! assert_eq!(path.end().id, c);
//! assert!((path.distance() - 700.0).abs() < 1e-2);
//!
//! // the map keeps a copy for whoever draws it
//! assert_eq!(map.path().map(|p| p.len()), Some(3));
//! ```
//!
//! ## Features
//! - `parallel` (default): the nearest-node lookup of [`RoadMap`](graph::RoadMap) is spread
//!   over a rayon thread pool.
//! - `log`: emits `debug` records for search outcomes and `trace` records with internal
//!   timings through the [`log`](https://docs.rs/log) facade.

#![deny(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

#[macro_use]
mod macros;

mod config;
pub use config::PlannerConfig;

mod error;
pub use error::{Result, RouteError};

pub mod graph;

pub mod path;

pub mod planner;

/// Index of a [`Node`](graph::Node) inside the graph that owns it.
pub type NodeID = usize;

/// A position in normalized map space. Both axes usually span `0.0..=1.0`.
pub type Point = (f32, f32);

type NodeIDMap<V> = hashbrown::HashMap<NodeID, V>;

/// The Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f32 {
    let (dx, dy) = (a.0 - b.0, a.1 - b.1);
    (dx * dx + dy * dy).sqrt()
}

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        graph::{Node, RoadKind, RoadMap, RouteGraph},
        path::Path,
        planner::RoutePlanner,
        NodeID, PlannerConfig, Point, RouteError,
    };
}
