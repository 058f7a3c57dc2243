//! Depth-first search over the region hierarchy.
//!
//! The traversal is pre-order: roots in stored order, then each node's
//! children in stored order. A path stack holds the chain from the current
//! root down to the current node and is popped when a subtree is exhausted,
//! so every match carries its own full ancestor path. Matching a node never
//! stops descent into its children, because the same name can appear at
//! several depths (a county named like a city elsewhere).
//!
//! # Example
//! ```
//! # use xzqh_reader::{search, Data, DataBuilder, RegionNode};
//! let roots = vec![RegionNode::new("Beijing", "110000")
//!     .with_child(RegionNode::new("Chaoyang", "110105").with_center(116.4, 39.9))];
//! let bytes = DataBuilder::new().build(&roots).unwrap();
//! let data = Data::from_bytes(&bytes).unwrap();
//!
//! let matches = search(data.root(), "Chaoyang");
//! assert_eq!(matches[0].path_names(), ["Beijing", "Chaoyang"]);
//! ```

use std::fmt;
use log::trace;

use super::format::{Region, Regions, RegionsIter};

/// A region whose field matched a query, with its ancestor chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a> {
    /// Regions from the root down to and including `region`.
    pub path: Vec<Region<'a>>,
    pub region: Region<'a>,
}

impl<'a> Match<'a> {
    /// Depth of the match; 1 for a root-level region.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn path_names(&self) -> Vec<&'a str> {
        self.path.iter().map(|r| r.name()).collect()
    }
}

/// Renders the block printed by the interactive query loop.
impl fmt::Display for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Found match:")?;
        writeln!(f, "{}", self.path_names().join(" -> "))?;
        writeln!(f, "Code: {}", self.region.code())?;
        match self.region.center() {
            Some(center) => writeln!(f, "Coordinates: {}, {}", center.longitude, center.latitude)?,
            None => writeln!(f, "Coordinates: N/A")?,
        }
        write!(f, "{}", "-".repeat(50))
    }
}

/// Lazy pre-order search yielding every region accepted by `predicate`.
///
/// Created by [`search`], [`search_by_code`] or [`search_with`].
pub struct Search<'a, I, F> {
    roots: I,
    predicate: F,
    path: Vec<Region<'a>>,
    stack: Vec<RegionsIter<'a>>,
}

impl<'a, I, F> Search<'a, I, F>
where
    I: Iterator<Item = Region<'a>>,
    F: FnMut(&Region<'a>) -> bool,
{
    fn new(roots: I, predicate: F) -> Self {
        Self {
            roots,
            predicate,
            path: Vec::new(),
            stack: Vec::new(),
        }
    }

    /// Pushes `region` onto the path and schedules its children.
    fn enter(&mut self, region: Region<'a>) -> Option<Match<'a>> {
        self.path.push(region);
        let children = region.children().unwrap_or_else(|| Regions::empty(&[]));
        self.stack.push(children.iter());

        if (self.predicate)(&region) {
            trace!("Matched {} at depth {}", region.code(), self.path.len());
            Some(Match { path: self.path.clone(), region })
        } else {
            None
        }
    }
}

impl<'a, I, F> Iterator for Search<'a, I, F>
where
    I: Iterator<Item = Region<'a>>,
    F: FnMut(&Region<'a>) -> bool,
{
    type Item = Match<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next = match self.stack.last_mut() {
                Some(children) => match children.next() {
                    Some(child) => child,
                    None => {
                        // Subtree exhausted: backtrack
                        self.stack.pop();
                        self.path.pop();
                        continue;
                    }
                },
                None => self.roots.next()?,
            };

            if let Some(found) = self.enter(next) {
                return Some(found);
            }
        }
    }
}

/// Lazily yields every region accepted by `predicate`, in pre-order.
pub fn search_with<'a, R, F>(roots: R, predicate: F) -> Search<'a, R::IntoIter, F>
where
    R: IntoIterator<Item = Region<'a>>,
    F: FnMut(&Region<'a>) -> bool,
{
    Search::new(roots.into_iter(), predicate)
}

/// Finds every region named exactly `name`, in pre-order.
///
/// Comparison is byte-for-byte: no case folding, trimming or substring
/// matching. An empty `name` is not rejected here.
pub fn search<'a, R>(roots: R, name: &str) -> Vec<Match<'a>>
where
    R: IntoIterator<Item = Region<'a>>,
{
    search_with(roots, |r: &Region<'a>| r.name() == name).collect()
}

/// Finds every region whose code is exactly `code`, in pre-order.
pub fn search_by_code<'a, R>(roots: R, code: &str) -> Vec<Match<'a>>
where
    R: IntoIterator<Item = Region<'a>>,
{
    search_with(roots, |r: &Region<'a>| r.code() == code).collect()
}
