//! Breadth-first and depth-first search and traversal.
//!
//! Every sweep starts at the entry vertex, then resumes from each anchor it has
//! not reached yet. Order within a component comes from a private frontier:
//! a `Queue` for breadth-first, a `Stack` for depth-first. Neighbours are
//! examined in adjacency order (most recently linked first).
//!
//! With [`VisitedStrategy::TwoPass`] a sweep marks vertex flags while visiting,
//! then repeats the identical walk clearing them, stopping at the same vertex.
//! If a frontier cannot grow mid-sweep, flags are cleared through the registry
//! instead so they are never left set.

use tracing::{trace, warn};

use super::frontier::Frontier;
use super::{GraphState, UndirectedGraph, VertexId};
use crate::alloc::AllocError;
use crate::collections::{Queue, Stack};
use crate::graph::access::visited::VisitedSet;
use crate::graph::config::{SearchOrder, VisitedStrategy};
use crate::graph::error::GraphResult;
use crate::GhostToken;

impl<'brand, T> UndirectedGraph<'brand, T> {
    /// Finds the reachable vertex matching `data`, nearest vertices first.
    ///
    /// Visited flags are left exactly as they were, whether or not a match is found.
    ///
    /// # Errors
    /// Returns [`GraphError::Alloc`](crate::graph::GraphError::Alloc) if the scratch queue cannot grow.
    pub fn breadth_first_search(
        &self,
        token: &GhostToken<'brand>,
        data: &T,
    ) -> GraphResult<Option<VertexId<'brand>>> {
        let state = self.state.borrow(token);
        Ok(self.search_in::<Queue<_>>(state, data)?)
    }

    /// Finds the reachable vertex matching `data`, one branch at a time.
    ///
    /// # Errors
    /// Returns [`GraphError::Alloc`](crate::graph::GraphError::Alloc) if the scratch stack cannot grow.
    pub fn depth_first_search(
        &self,
        token: &GhostToken<'brand>,
        data: &T,
    ) -> GraphResult<Option<VertexId<'brand>>> {
        let state = self.state.borrow(token);
        Ok(self.search_in::<Stack<_>>(state, data)?)
    }

    /// Prints every reachable vertex in breadth-first order.
    ///
    /// # Errors
    /// Returns [`GraphError::Alloc`](crate::graph::GraphError::Alloc) if the scratch queue cannot grow;
    /// the vertices printed so far stay printed.
    pub fn breadth_first_traversal(&self, token: &GhostToken<'brand>) -> GraphResult<()> {
        let state = self.state.borrow(token);
        state.sweep::<Queue<_>, _>(self.config.visited, |data| {
            (self.print)(data);
            false
        })?;
        Ok(())
    }

    /// Prints every reachable vertex in depth-first order.
    ///
    /// # Errors
    /// Returns [`GraphError::Alloc`](crate::graph::GraphError::Alloc) if the scratch stack cannot grow.
    pub fn depth_first_traversal(&self, token: &GhostToken<'brand>) -> GraphResult<()> {
        let state = self.state.borrow(token);
        state.sweep::<Stack<_>, _>(self.config.visited, |data| {
            (self.print)(data);
            false
        })?;
        Ok(())
    }

    /// Counts the vertices reachable from the entry and the anchors.
    ///
    /// # Errors
    /// Returns [`GraphError::Alloc`](crate::graph::GraphError::Alloc) if the scratch queue cannot grow.
    pub fn reachable_count(&self, token: &GhostToken<'brand>) -> GraphResult<usize> {
        let state = self.state.borrow(token);
        let mut count = 0;
        state.sweep::<Queue<_>, _>(self.config.visited, |_| {
            count += 1;
            false
        })?;
        Ok(count)
    }

    pub(super) fn find_in(
        &self,
        state: &GraphState<'brand, T>,
        order: SearchOrder,
        needle: &T,
    ) -> Result<Option<VertexId<'brand>>, AllocError> {
        match order {
            SearchOrder::BreadthFirst => self.search_in::<Queue<_>>(state, needle),
            SearchOrder::DepthFirst => self.search_in::<Stack<_>>(state, needle),
        }
    }

    fn search_in<F>(
        &self,
        state: &GraphState<'brand, T>,
        needle: &T,
    ) -> Result<Option<VertexId<'brand>>, AllocError>
    where
        F: Frontier<VertexId<'brand>>,
    {
        state.sweep::<F, _>(self.config.visited, |candidate| (self.equal)(needle, candidate))
    }
}

impl<'brand, T> GraphState<'brand, T> {
    /// Visits reachable vertices in frontier order until `visit` returns `true`.
    ///
    /// Returns the vertex `visit` stopped at, if any.
    fn sweep<F, V>(
        &self,
        strategy: VisitedStrategy,
        mut visit: V,
    ) -> Result<Option<VertexId<'brand>>, AllocError>
    where
        F: Frontier<VertexId<'brand>>,
        V: FnMut(&T) -> bool,
    {
        if self.entry.is_none() {
            return Ok(None);
        }

        let found = match strategy {
            VisitedStrategy::TwoPass => self.sweep_two_pass::<F, V>(&mut visit),
            VisitedStrategy::ScopedSet => self.sweep_scoped::<F, V>(&mut visit),
        };

        trace!(
            ?strategy,
            anchors = self.anchors.len(),
            found = ?found.map(|id| id.map(VertexId::index)),
            "sweep finished"
        );
        debug_assert!(self.is_at_rest(), "sweep left visited flags set");
        found
    }

    fn sweep_two_pass<F, V>(&self, visit: &mut V) -> Result<Option<VertexId<'brand>>, AllocError>
    where
        F: Frontier<VertexId<'brand>>,
        V: FnMut(&T) -> bool,
    {
        let marked = self.mark_pass::<F, V>(visit);
        let restored = match marked {
            Ok(stop_at) => self.unmark_pass::<F>(stop_at),
            Err(err) => Err(err),
        };
        if restored.is_err() {
            warn!(
                vertices = self.vertices.len(),
                "sweep ran out of scratch memory; clearing visited flags from the registry"
            );
            self.clear_visited();
        }
        marked
    }

    fn mark_pass<F, V>(&self, visit: &mut V) -> Result<Option<VertexId<'brand>>, AllocError>
    where
        F: Frontier<VertexId<'brand>>,
        V: FnMut(&T) -> bool,
    {
        let mut frontier = F::default();

        for root in self.roots() {
            if !self.vertex(root).visited.try_visit() {
                continue;
            }
            let mut current = Some(root);
            while let Some(id) = current {
                let vertex = self.vertex(id);
                if visit(&vertex.data) {
                    return Ok(Some(id));
                }
                for &next in &vertex.adjacent {
                    if self.vertex(next).visited.try_visit() {
                        frontier.push(next)?;
                    }
                }
                current = frontier.pop();
            }
        }

        Ok(None)
    }

    /// Repeats the walk of `mark_pass`, clearing each flag it set.
    ///
    /// The walk stops at `stop_at` by identity, mirroring where the marking
    /// pass stopped without consulting the callback again.
    fn unmark_pass<F>(
        &self,
        stop_at: Option<VertexId<'brand>>,
    ) -> Result<Option<VertexId<'brand>>, AllocError>
    where
        F: Frontier<VertexId<'brand>>,
    {
        let mut frontier = F::default();

        for root in self.roots() {
            if !self.vertex(root).visited.try_unvisit() {
                continue;
            }
            let mut current = Some(root);
            while let Some(id) = current {
                if stop_at == Some(id) {
                    return Ok(stop_at);
                }
                for &next in &self.vertex(id).adjacent {
                    if self.vertex(next).visited.try_unvisit() {
                        frontier.push(next)?;
                    }
                }
                current = frontier.pop();
            }
        }

        Ok(stop_at)
    }

    fn sweep_scoped<F, V>(&self, visit: &mut V) -> Result<Option<VertexId<'brand>>, AllocError>
    where
        F: Frontier<VertexId<'brand>>,
        V: FnMut(&T) -> bool,
    {
        let mut seen = VisitedSet::try_new(self.vertices.slot_count())?;
        let mut frontier = F::default();

        for root in self.roots() {
            if !seen.try_visit(root.index()) {
                continue;
            }
            let mut current = Some(root);
            while let Some(id) = current {
                let vertex = self.vertex(id);
                if visit(&vertex.data) {
                    return Ok(Some(id));
                }
                for &next in &vertex.adjacent {
                    if seen.try_visit(next.index()) {
                        frontier.push(next)?;
                    }
                }
                current = frontier.pop();
            }
        }

        Ok(None)
    }

    /// Collects every vertex reachable from the roots into `out`, each exactly once.
    ///
    /// Flags set here are not cleared: the caller releases every collected vertex.
    pub(super) fn collect_reachable(&self, out: &mut Stack<VertexId<'brand>>) -> Result<(), AllocError> {
        let mut pending = Stack::new();

        for root in self.roots() {
            if !self.vertex(root).visited.try_visit() {
                continue;
            }
            out.push(root)?;
            let mut current = Some(root);
            while let Some(id) = current {
                for &next in &self.vertex(id).adjacent {
                    if self.vertex(next).visited.try_visit() {
                        pending.push(next)?;
                        out.push(next)?;
                    }
                }
                current = pending.pop();
            }
        }

        Ok(())
    }
}
