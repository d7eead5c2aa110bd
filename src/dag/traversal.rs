// src/dag/traversal.rs

//! Explicit-stack depth-first traversal shared by cycle detection and
//! topological sorting.
//!
//! Every node moves through `Unvisited -> Active -> Finished`. A node is
//! `Active` exactly while it sits on the traversal stack, so an edge into an
//! `Active` node is a back-edge and closes a cycle.
//!
//! Roots are tried in index order `0..n` and successors are followed in
//! adjacency order, so the event sequence is a pure function of the graph.

use std::ops::ControlFlow;

use crate::dag::graph::Graph;
use crate::types::NodeId;

/// Per-node traversal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    Unvisited,
    /// On the current DFS path.
    Active,
    Finished,
}

/// Something the traversal observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DfsEvent {
    /// Node went from `Unvisited` to `Active`.
    Discover(NodeId),
    /// Node went from `Active` to `Finished`; all successors are done.
    Finish(NodeId),
    /// Edge `from -> to` where `to` is still `Active`.
    ///
    /// `cycle` is the closed path `[to, .., from, to]` taken from the stack.
    BackEdge {
        from: NodeId,
        to: NodeId,
        cycle: Vec<NodeId>,
    },
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    /// Index into `successors(node)` of the next edge to follow.
    next: usize,
}

/// One DFS pass over a graph. Build a fresh one per pass.
#[derive(Debug)]
pub struct Traversal<'g> {
    graph: &'g Graph,
    state: Vec<VisitState>,
    stack: Vec<Frame>,
}

impl<'g> Traversal<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            state: vec![VisitState::Unvisited; graph.node_count()],
            stack: Vec::new(),
        }
    }

    pub fn state_of(&self, node: NodeId) -> Option<VisitState> {
        self.state.get(node).copied()
    }

    /// Walk the whole graph, feeding every event to `on_event`.
    ///
    /// Returning `ControlFlow::Break` from the callback stops the walk
    /// immediately and hands the value back to the caller.
    pub fn run<B, F>(&mut self, mut on_event: F) -> ControlFlow<B>
    where
        F: FnMut(DfsEvent) -> ControlFlow<B>,
    {
        let graph = self.graph;

        for root in graph.nodes() {
            if self.state[root] != VisitState::Unvisited {
                continue;
            }
            self.enter(root, &mut on_event)?;

            while let Some(frame) = self.stack.last_mut() {
                let node = frame.node;
                let Some(&next) = graph.successors(node).get(frame.next) else {
                    self.stack.pop();
                    self.state[node] = VisitState::Finished;
                    on_event(DfsEvent::Finish(node))?;
                    continue;
                };
                frame.next += 1;

                match self.state[next] {
                    VisitState::Unvisited => self.enter(next, &mut on_event)?,
                    VisitState::Active => {
                        let cycle = self.cycle_closing_at(next);
                        on_event(DfsEvent::BackEdge {
                            from: node,
                            to: next,
                            cycle,
                        })?;
                    }
                    VisitState::Finished => {}
                }
            }
        }

        ControlFlow::Continue(())
    }

    fn enter<B, F>(&mut self, node: NodeId, on_event: &mut F) -> ControlFlow<B>
    where
        F: FnMut(DfsEvent) -> ControlFlow<B>,
    {
        self.state[node] = VisitState::Active;
        self.stack.push(Frame { node, next: 0 });
        on_event(DfsEvent::Discover(node))
    }

    fn cycle_closing_at(&self, target: NodeId) -> Vec<NodeId> {
        let start = self
            .stack
            .iter()
            .position(|f| f.node == target)
            .unwrap_or(0);
        let mut cycle: Vec<NodeId> = self.stack[start..].iter().map(|f| f.node).collect();
        cycle.push(target);
        cycle
    }
}
