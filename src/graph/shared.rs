//! Serialized access to one graph from several pipeline workers.
//!
//! Every engine operation assumes it owns the scaffolds it touches for its
//! whole duration. The handle hands out the graph one closure at a time so
//! an operation never interleaves with another.

use std::sync::Arc;

use parking_lot::Mutex;

use super::ScaffoldGraph;

#[derive(Debug, Clone, Default)]
pub struct SharedScaffoldGraph {
    inner: Arc<Mutex<ScaffoldGraph>>,
}

impl SharedScaffoldGraph {
    pub fn new(graph: ScaffoldGraph) -> Self {
        Self { inner: Arc::new(Mutex::new(graph)) }
    }

    /// Run `op` with exclusive access to the graph.
    pub fn with<R>(&self, op: impl FnOnce(&mut ScaffoldGraph) -> R) -> R {
        let mut graph = self.inner.lock();
        op(&mut graph)
    }

    /// Like [`SharedScaffoldGraph::with`] but gives up instead of waiting.
    pub fn try_with<R>(&self, op: impl FnOnce(&mut ScaffoldGraph) -> R) -> Option<R> {
        let mut graph = self.inner.try_lock()?;
        Some(op(&mut graph))
    }

    /// Take the graph back out, if this is the last handle.
    pub fn into_inner(self) -> Option<ScaffoldGraph> {
        Arc::try_unwrap(self.inner).ok().map(Mutex::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Length;

    #[test]
    fn test_operations_from_threads_are_serialized() {
        let shared = SharedScaffoldGraph::new(ScaffoldGraph::new());

        let workers: Vec<_> = (0..4)
            .map(|_| {
                let handle = shared.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        handle.with(|g| g.add_contig(Length::new(100.0, 10.0)));
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let graph = shared.into_inner().unwrap();
        assert_eq!(graph.contig_count(), 100);
    }

    #[test]
    fn test_try_with_fails_while_locked() {
        let shared = SharedScaffoldGraph::new(ScaffoldGraph::new());
        let other = shared.clone();

        let nested = shared.with(|_| other.try_with(|g| g.contig_count()));
        assert_eq!(nested, None);
        assert_eq!(other.try_with(|g| g.contig_count()), Some(0));
    }
}
