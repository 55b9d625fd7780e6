//! Results of the bipartiteness check.
use ahash::RandomState;
use std::collections::HashMap;
use std::hash::Hash;

/// State of a vertex during and after two-coloring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    #[default]
    Uncolored,
    ColorA,
    ColorB,
}

impl Color {
    /// The other of the two colors. `Uncolored` stays `Uncolored`.
    pub fn opposite(self) -> Self {
        match self {
            Color::Uncolored => Color::Uncolored,
            Color::ColorA => Color::ColorB,
            Color::ColorB => Color::ColorA,
        }
    }

    pub fn is_colored(self) -> bool {
        self != Color::Uncolored
    }
}

/// A two-coloring of every vertex of a bipartite graph.
///
/// Only holds `ColorA` and `ColorB`.
/// Iterates in the vertex order of the graph it was computed from.
/// Labels are consistent within a connected component only:
/// every component starts from `ColorA`.
#[derive(Clone, PartialEq, Eq)]
pub struct Coloring<K>
where
    K: Hash + Eq,
{
    entries: Vec<(K, Color)>,
    index: HashMap<K, usize, RandomState>,
}

impl<K> Coloring<K>
where
    K: Hash + Eq + Clone,
{
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    pub(crate) fn push(&mut self, key: K, color: Color) {
        debug_assert!(color.is_colored());
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, color));
    }
}

impl<K> Coloring<K>
where
    K: Hash + Eq,
{
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &K) -> Option<Color> {
        self.index.get(key).map(|i| self.entries[*i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, Color)> + '_ {
        self.entries.iter().map(|(k, c)| (k, *c))
    }

    /// Splits vertices into those colored `ColorA` and those colored `ColorB`.
    pub fn partition(&self) -> (Vec<&K>, Vec<&K>) {
        let mut a = vec![];
        let mut b = vec![];
        for (k, c) in self.iter() {
            match c {
                Color::ColorA => a.push(k),
                Color::ColorB => b.push(k),
                Color::Uncolored => {}
            }
        }
        (a, b)
    }
}

impl<K> std::fmt::Debug for Coloring<K>
where
    K: Hash + Eq + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Outcome of [crate::graph::BipartiteGraph::is_bipartite].
///
/// `NotBipartite` is an ordinary answer, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bipartiteness<K>
where
    K: Hash + Eq,
{
    Bipartite(Coloring<K>),
    NotBipartite,
}

impl<K> Bipartiteness<K>
where
    K: Hash + Eq,
{
    pub fn is_bipartite(&self) -> bool {
        matches!(self, Bipartiteness::Bipartite(_))
    }

    pub fn coloring(&self) -> Option<&Coloring<K>> {
        match self {
            Bipartiteness::Bipartite(c) => Some(c),
            Bipartiteness::NotBipartite => None,
        }
    }

    pub fn into_coloring(self) -> Option<Coloring<K>> {
        match self {
            Bipartiteness::Bipartite(c) => Some(c),
            Bipartiteness::NotBipartite => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_colors() {
        assert_eq!(Color::ColorA.opposite(), Color::ColorB);
        assert_eq!(Color::ColorB.opposite(), Color::ColorA);
        assert_eq!(Color::Uncolored.opposite(), Color::Uncolored);
        assert_eq!(Color::default(), Color::Uncolored);
        assert!(!Color::Uncolored.is_colored());
    }

    #[test]
    fn partition_keeps_order() {
        let mut c = Coloring::with_capacity(4);
        c.push("x", Color::ColorA);
        c.push("y", Color::ColorB);
        c.push("z", Color::ColorA);
        c.push("w", Color::ColorB);
        assert_eq!(c.partition(), (vec![&"x", &"z"], vec![&"y", &"w"]));
        assert_eq!(c.get(&"z"), Some(Color::ColorA));
        assert_eq!(c.get(&"nope"), None);
        assert_eq!(c.len(), 4);
    }

    #[test]
    fn empty_coloring_is_still_bipartite() {
        let res: Bipartiteness<&str> = Bipartiteness::Bipartite(Coloring::with_capacity(0));
        assert!(res.is_bipartite());
        assert!(res.coloring().map(|c| c.is_empty()).unwrap_or(false));
        assert_ne!(res, Bipartiteness::NotBipartite);
        assert_eq!(Bipartiteness::<&str>::NotBipartite.into_coloring(), None);
    }

    #[test]
    fn debug_as_map() {
        let mut c = Coloring::with_capacity(1);
        c.push("x", Color::ColorA);
        assert_eq!(format!("{:?}", c), r#"{"x": ColorA}"#);
    }
}
