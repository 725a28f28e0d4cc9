//! `UndirectedGraph` - an undirected graph over caller data, reached from one entry vertex.
//!
//! Vertices are owned by a registry ([`NodePool`]) and refer to each other through
//! branded [`VertexId`] handles stored in per-vertex adjacency lists. An edge is a
//! mutual pair of list entries; it is created only by `connect` and removed only by
//! `disconnect`, so adjacency stays symmetric.
//!
//! All state sits in one `GhostCell`:
//! - searches, traversals and accessors take `&GhostToken<'brand>`
//! - insertion and deletion take `&mut GhostToken<'brand>`
//!
//! The print and equality callbacks are bound at construction and never receive
//! the token, so they cannot re-enter the graph while a sweep is running.
//!
//! ### Reachability
//! Every sweep starts at the entry vertex (the first vertex inserted), then
//! continues from each anchor it has not reached yet. Deleting a vertex turns
//! its former neighbours into anchors, so a deletion that splits the graph
//! never hides the pieces it cut off.
//!
//! A vertex inserted with no adjacency into a non-empty graph is registered
//! but unreachable: lookups, traversals and duplicate detection do not see it,
//! and [`UndirectedGraph::destroy`] reports it as orphaned.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `insert_vertex` | \(O((k + 1)(n + m))\) | one lookup per adjacency target |
//! | `delete_vertex` | \(O(n + m + d^2)\) | lookup, then unlink `d` neighbours |
//! | search / traversal | \(O(n + m)\) | doubled by the two-pass strategy |
//! | `destroy` | \(O(n + m + \sum d^2)\) | |

use core::fmt;
use core::marker::PhantomData;

use tracing::{debug, warn};

use super::access::visited::VisitedFlag;
use super::config::GraphConfig;
use super::error::{GraphError, GraphResult};
use crate::alloc::{AllocError, NodePool};
use crate::collections::{SinglyList, Stack};
use crate::{GhostCell, GhostToken};

mod frontier;
mod traversal;


/// A strongly-typed handle to a vertex of one branded graph.
///
/// Deleting the vertex invalidates the handle. Its registry slot may later hold
/// another vertex, but under a new generation, so the stale handle keeps
/// resolving to nothing.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexId<'brand> {
    index: usize,
    generation: u32,
    _brand: PhantomData<fn(&'brand ()) -> &'brand ()>,
}

impl<'brand> VertexId<'brand> {
    #[inline(always)]
    fn new(index: usize, generation: u32) -> Self {
        Self {
            index,
            generation,
            _brand: PhantomData,
        }
    }

    /// Returns the registry slot of this vertex.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.index
    }

    /// Returns how many times the slot had been reused when this vertex took it.
    #[inline(always)]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for VertexId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({}@{})", self.index, self.generation)
    }
}

struct Vertex<'brand, T> {
    data: T,
    adjacent: SinglyList<VertexId<'brand>>,
    visited: VisitedFlag,
}

impl<'brand, T> Vertex<'brand, T> {
    fn new(data: T) -> Self {
        Self {
            data,
            adjacent: SinglyList::new(),
            visited: VisitedFlag::new(),
        }
    }
}

struct GraphState<'brand, T> {
    vertices: NodePool<Vertex<'brand, T>>,
    entry: Option<VertexId<'brand>>,
    /// Secondary sweep roots. Never holds the entry; may hold several vertices
    /// of one component.
    anchors: SinglyList<VertexId<'brand>>,
}

/// What [`UndirectedGraph::destroy`] released.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DestroyStats {
    /// Vertices reached from the entry by the collecting sweep.
    pub reachable: usize,
    /// Vertices still registered but not reachable from the entry.
    pub orphaned: usize,
}

impl DestroyStats {
    /// Total number of vertices released.
    pub fn total(&self) -> usize {
        self.reachable + self.orphaned
    }
}

type PrintFn<T> = Box<dyn Fn(&T)>;
type EqualFn<T> = Box<dyn Fn(&T, &T) -> bool>;

/// An undirected graph whose vertices hold caller data of type `T`.
pub struct UndirectedGraph<'brand, T> {
    state: GhostCell<'brand, GraphState<'brand, T>>,
    print: PrintFn<T>,
    equal: EqualFn<T>,
    config: GraphConfig,
}

impl<'brand, T> UndirectedGraph<'brand, T> {
    /// Creates an empty graph bound to a print callback and an equality predicate.
    ///
    /// `print` is called once per vertex, in visiting order, by the traversals.
    /// `equal(needle, candidate)` decides whether a vertex holds the data being
    /// looked up.
    pub fn new(
        print: impl Fn(&T) + 'static,
        equal: impl Fn(&T, &T) -> bool + 'static,
    ) -> Self {
        Self::from_parts(GraphConfig::default(), NodePool::new(), print, equal)
    }

    /// Creates an empty graph with explicit configuration.
    ///
    /// # Errors
    /// Returns `AllocError` if `config.capacity` vertex slots cannot be reserved.
    pub fn with_config(
        config: GraphConfig,
        print: impl Fn(&T) + 'static,
        equal: impl Fn(&T, &T) -> bool + 'static,
    ) -> Result<Self, AllocError> {
        let vertices = NodePool::try_with_capacity(config.capacity)?;
        Ok(Self::from_parts(config, vertices, print, equal))
    }

    fn from_parts(
        config: GraphConfig,
        vertices: NodePool<Vertex<'brand, T>>,
        print: impl Fn(&T) + 'static,
        equal: impl Fn(&T, &T) -> bool + 'static,
    ) -> Self {
        Self {
            state: GhostCell::new(GraphState {
                vertices,
                entry: None,
                anchors: SinglyList::new(),
            }),
            print: Box::new(print),
            equal: Box::new(equal),
            config,
        }
    }

    /// Returns the configuration fixed at construction.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Inserts a vertex holding `data`, adjacent to the vertices matching `adjacent`.
    ///
    /// Each element of `adjacent` is resolved with the equality predicate; repeated
    /// targets resolve to the same vertex and produce a single edge. The first
    /// vertex ever inserted into an empty graph becomes the entry.
    ///
    /// Insertion is all-or-nothing: on error the graph is left exactly as it was
    /// and `data` is dropped.
    ///
    /// # Errors
    /// - [`GraphError::AlreadyExists`] if a reachable vertex already matches `data`.
    /// - [`GraphError::UnknownAdjacent`] if an adjacency target is not reachable.
    /// - [`GraphError::Alloc`] if the vertex or one of its links cannot be allocated.
    pub fn insert_vertex(
        &self,
        token: &mut GhostToken<'brand>,
        data: T,
        adjacent: &[T],
    ) -> GraphResult<VertexId<'brand>> {
        let state = self.state.borrow_mut(token);
        let order = self.config.lookup;

        if self.find_in(state, order, &data)?.is_some() {
            return Err(GraphError::AlreadyExists);
        }

        let mut neighbors: Vec<VertexId<'brand>> = Vec::new();
        neighbors.try_reserve_exact(adjacent.len()).map_err(AllocError::from)?;
        for (position, wanted) in adjacent.iter().enumerate() {
            let id = self
                .find_in(state, order, wanted)?
                .ok_or(GraphError::UnknownAdjacent { position })?;
            if !neighbors.contains(&id) {
                neighbors.push(id);
            }
        }

        let (idx, generation) = state.vertices.try_alloc_versioned(Vertex::new(data))?;
        let id = VertexId::new(idx, generation);
        for (wired, &neighbor) in neighbors.iter().enumerate() {
            if let Err(err) = state.connect(neighbor, id) {
                for &linked in &neighbors[..wired] {
                    state.disconnect(linked, id);
                }
                state.vertices.take(id.index());
                return Err(err.into());
            }
        }

        match state.entry {
            None => state.entry = Some(id),
            Some(entry) if neighbors.is_empty() => {
                debug!(
                    vertex = id.index(),
                    entry = entry.index(),
                    "inserted vertex is not reachable from the entry"
                );
            }
            Some(_) => {}
        }

        debug!(vertex = id.index(), degree = neighbors.len(), "inserted vertex");
        Ok(id)
    }

    /// Deletes the reachable vertex matching `data` and returns its stored value.
    ///
    /// Every edge of the vertex is removed from both endpoints, and each former
    /// neighbour becomes an anchor so it stays reachable. If the vertex was the
    /// entry, the graph re-anchors on its most recently added neighbour, or on
    /// another anchor, or on the lowest registered vertex.
    ///
    /// # Errors
    /// - [`GraphError::NotFound`] if no reachable vertex matches `data`.
    /// - [`GraphError::Alloc`] if the lookup sweep or the anchor list cannot grow.
    ///   The graph is unchanged in that case.
    ///
    /// # Panics
    /// Panics if an edge of the vertex is recorded on one endpoint only.
    pub fn delete_vertex(&self, token: &mut GhostToken<'brand>, data: &T) -> GraphResult<T> {
        let state = self.state.borrow_mut(token);
        let id = self
            .find_in(state, self.config.lookup, data)?
            .ok_or(GraphError::NotFound)?;

        let successor = state.vertex(id).adjacent.front().copied();
        let degree = state.vertex(id).adjacent.len();
        state.adopt_neighbors(id)?;
        let removed = state.release(id);
        state.anchors.remove_first(&id);

        if state.entry == Some(id) {
            let next = match successor {
                Some(next) => Some(next),
                None => state.anchors.pop_front().or_else(|| state.first_handle()),
            };
            if let Some(next) = next {
                state.anchors.remove_first(&next);
            }
            state.entry = next;
            debug!(
                from = id.index(),
                to = ?next.map(VertexId::index),
                "re-anchored entry vertex"
            );
        }

        debug!(vertex = id.index(), degree, anchors = state.anchors.len(), "deleted vertex");
        Ok(removed)
    }

    /// Releases every vertex and link, returning what was freed.
    ///
    /// A depth-first sweep from the entry and the anchors collects each reachable
    /// vertex exactly once; each is then unlinked and dropped. Vertices still registered after
    /// that (unreachable ones) are released last.
    pub fn destroy(mut self) -> DestroyStats {
        let state = self.state.get_mut();
        let mut stats = DestroyStats::default();

        let mut collected = Stack::new();
        if let Err(err) = state.collect_reachable(&mut collected) {
            warn!(%err, "reachable sweep cut short; remaining vertices released from the registry");
        }
        while let Some(id) = collected.pop() {
            drop(state.release(id));
            stats.reachable += 1;
        }
        while let Some(id) = state.first_handle() {
            drop(state.release(id));
            stats.orphaned += 1;
        }
        state.anchors.clear();
        state.entry = None;

        debug!(reachable = stats.reachable, orphaned = stats.orphaned, "destroyed graph");
        stats
    }

    /// Returns the data stored at `id`, or `None` if the handle is stale.
    pub fn get<'a>(&'a self, token: &'a GhostToken<'brand>, id: VertexId<'brand>) -> Option<&'a T> {
        self.state.borrow(token).lookup(id).map(|vertex| &vertex.data)
    }

    /// Iterates over the neighbours of `id`, most recently linked first.
    pub fn neighbors<'a>(
        &'a self,
        token: &'a GhostToken<'brand>,
        id: VertexId<'brand>,
    ) -> impl Iterator<Item = VertexId<'brand>> + 'a {
        self.state
            .borrow(token)
            .lookup(id)
            .into_iter()
            .flat_map(|vertex| vertex.adjacent.iter().copied())
    }

    /// Returns the number of edges at `id` (zero for a stale handle).
    pub fn degree(&self, token: &GhostToken<'brand>, id: VertexId<'brand>) -> usize {
        self.state
            .borrow(token)
            .lookup(id)
            .map_or(0, |vertex| vertex.adjacent.len())
    }

    /// Returns the vertex every sweep starts from.
    pub fn entry(&self, token: &GhostToken<'brand>) -> Option<VertexId<'brand>> {
        self.state.borrow(token).entry
    }

    /// Returns the number of registered vertices, reachable or not.
    pub fn vertex_count(&self, token: &GhostToken<'brand>) -> usize {
        self.state.borrow(token).vertices.len()
    }

    /// Returns `true` if no vertex is registered.
    pub fn is_empty(&self, token: &GhostToken<'brand>) -> bool {
        self.state.borrow(token).vertices.is_empty()
    }

    /// Returns `true` if no vertex is currently marked visited.
    ///
    /// Holds between any two public calls.
    pub fn is_at_rest(&self, token: &GhostToken<'brand>) -> bool {
        self.state.borrow(token).is_at_rest()
    }
}

impl<'brand, T> GraphState<'brand, T> {
    #[inline]
    fn lookup(&self, id: VertexId<'brand>) -> Option<&Vertex<'brand, T>> {
        self.vertices.get_versioned(id.index, id.generation)
    }

    fn vertex(&self, id: VertexId<'brand>) -> &Vertex<'brand, T> {
        match self.lookup(id) {
            Some(vertex) => vertex,
            None => panic!("vertex handle {id:?} does not refer to a live vertex"),
        }
    }

    fn vertex_mut(&mut self, id: VertexId<'brand>) -> &mut Vertex<'brand, T> {
        match self.vertices.get_versioned_mut(id.index, id.generation) {
            Some(vertex) => vertex,
            None => panic!("vertex handle {id:?} does not refer to a live vertex"),
        }
    }

    /// Handle of the lowest registered vertex.
    fn first_handle(&self) -> Option<VertexId<'brand>> {
        let index = self.vertices.first_index()?;
        let generation = self.vertices.generation(index)?;
        Some(VertexId::new(index, generation))
    }

    /// Sweep roots in order: the entry, then the anchors.
    fn roots(&self) -> impl Iterator<Item = VertexId<'brand>> + '_ {
        self.entry.into_iter().chain(self.anchors.iter().copied())
    }

    /// Records every neighbour of `id` as an anchor, or none of them.
    fn adopt_neighbors(&mut self, id: VertexId<'brand>) -> Result<(), AllocError> {
        let Some(vertex) = self.vertices.get_versioned(id.index, id.generation) else {
            panic!("vertex handle {id:?} does not refer to a live vertex");
        };

        let mut adopted = 0;
        for &neighbor in &vertex.adjacent {
            if self.entry == Some(neighbor) || self.anchors.contains(&neighbor) {
                continue;
            }
            if let Err(err) = self.anchors.push_front(neighbor) {
                // New anchors sit at the head of the list.
                for _ in 0..adopted {
                    self.anchors.pop_front();
                }
                return Err(err);
            }
            adopted += 1;
        }
        Ok(())
    }

    /// Links `a` and `b` in both adjacency lists, or in neither.
    fn connect(&mut self, a: VertexId<'brand>, b: VertexId<'brand>) -> Result<(), AllocError> {
        self.vertex_mut(a).adjacent.push_front(b)?;
        if let Err(err) = self.vertex_mut(b).adjacent.push_front(a) {
            self.vertex_mut(a).adjacent.remove_first(&b);
            return Err(err);
        }
        Ok(())
    }

    /// Removes the edge between `a` and `b` from both adjacency lists.
    fn disconnect(&mut self, a: VertexId<'brand>, b: VertexId<'brand>) {
        let forward = self.vertex_mut(a).adjacent.remove_first(&b);
        let backward = self.vertex_mut(b).adjacent.remove_first(&a);
        assert!(
            forward && backward,
            "asymmetric adjacency between vertex {} and vertex {}",
            a.index(),
            b.index()
        );
    }

    /// Unlinks `id` from all of its neighbours and removes it from the registry.
    fn release(&mut self, id: VertexId<'brand>) -> T {
        while let Some(&neighbor) = self.vertex(id).adjacent.front() {
            self.disconnect(id, neighbor);
        }
        let vertex = match self.vertices.take(id.index()) {
            Some(vertex) => vertex,
            None => panic!("vertex handle {id:?} does not refer to a live vertex"),
        };
        assert!(vertex.adjacent.is_empty(), "vertex {} kept links after unlinking", id.index());
        vertex.data
    }

    fn is_at_rest(&self) -> bool {
        self.vertices
            .iter()
            .all(|(_, vertex)| !vertex.visited.is_visited())
    }

    /// Clears every visited flag by walking the registry instead of the edges.
    fn clear_visited(&self) {
        for (_, vertex) in self.vertices.iter() {
            vertex.visited.unmark();
        }
    }
}
