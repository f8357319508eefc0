//! Tree resolution engine.
//!
//! Expands dropped entries into a flat list of file and directory records.
//!
//! # Traversal
//!
//! Every entry becomes a node in an arena, linked to its parent by index.
//! Each node that needs I/O (a file to materialize or a directory to list)
//! gets one task in a [`FuturesUnordered`] set. All tasks of a fan-out group
//! are pushed before the set is polled, so sibling latencies overlap. When a
//! directory listing completes, its children are admitted to the arena and
//! their tasks join the same set. Tree depth never turns into call-stack
//! depth.
//!
//! A task only ever writes the slot of the node it was created for. Once the
//! set drains, an iterative post-order walk assembles the result in input
//! order, independent of completion order.
//!
//! # Failure
//!
//! The first failing task ends resolution. The remaining tasks are dropped
//! together with everything resolved so far, so callers see either the
//! complete tree or exactly one error.

use futures::future::LocalBoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;

use crate::core::entry::{DirectoryReader, Entry, EntryKind, Materialized};
use crate::core::error::ResolveError;
use crate::models::{DirectoryRecord, EmptyDropPolicy, FileRecord, Record, Resolution};

/// Result of one node task.
enum Outcome<E: Entry> {
    File(Materialized<E::Handle>),
    Children(Vec<E>),
}

type Task<E> = LocalBoxFuture<'static, (usize, Result<Outcome<E>, ResolveError>)>;

enum Slot<H> {
    /// Task still in flight, or record already emitted.
    Pending,
    File(FileRecord<H>),
    /// Listed directory with its children's node indices in listing order.
    Directory(Vec<usize>),
}

struct Node<H> {
    full_path: String,
    name: String,
    slot: Slot<H>,
}

/// Arena of every node discovered during one resolution.
struct Tree<H> {
    nodes: Vec<Node<H>>,
}

impl<H> Tree<H> {
    fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn push(&mut self, full_path: String, name: String) -> usize {
        self.nodes.push(Node {
            full_path,
            name,
            slot: Slot::Pending,
        });
        self.nodes.len() - 1
    }

    /// Flatten the subtrees under `roots` in post-order.
    fn flatten(mut self, roots: &[usize]) -> Vec<Record<H>> {
        let mut records = Vec::with_capacity(self.nodes.len());

        for &root in roots {
            // (node, index of the next child to visit)
            let mut stack = vec![(root, 0usize)];

            while let Some((index, cursor)) = stack.pop() {
                if let Slot::Directory(children) = &self.nodes[index].slot
                    && let Some(&child) = children.get(cursor)
                {
                    stack.push((index, cursor + 1));
                    stack.push((child, 0));
                    continue;
                }
                records.extend(self.take(index));
            }
        }

        records
    }

    fn take(&mut self, index: usize) -> Option<Record<H>> {
        let node = &mut self.nodes[index];
        match std::mem::replace(&mut node.slot, Slot::Pending) {
            Slot::File(file) => Some(Record::File(file)),
            Slot::Directory(_) => Some(Record::Directory(DirectoryRecord {
                full_path: std::mem::take(&mut node.full_path),
                name: std::mem::take(&mut node.name),
            })),
            Slot::Pending => None,
        }
    }
}

/// Resolve dropped entries into a flattened list of records.
///
/// Entries that are neither files nor directories are skipped. An input
/// with nothing resolvable yields an empty [`Resolution`].
pub async fn resolve<E, I>(entries: I) -> Result<Resolution<E::Handle>, ResolveError>
where
    E: Entry,
    I: IntoIterator<Item = E>,
{
    let mut tree = Tree::new();
    let mut in_flight: FuturesUnordered<Task<E>> = FuturesUnordered::new();

    let roots: Vec<usize> = entries
        .into_iter()
        .filter_map(|entry| admit(&mut tree, &mut in_flight, entry))
        .collect();

    if roots.is_empty() {
        return Ok(Resolution::empty());
    }

    while let Some((index, outcome)) = in_flight.next().await {
        match outcome? {
            Outcome::File(file) => {
                let full_path = tree.nodes[index].full_path.clone();
                tree.nodes[index].slot = Slot::File(FileRecord::from_materialized(full_path, file));
            }
            Outcome::Children(entries) => {
                let children = entries
                    .into_iter()
                    .filter_map(|entry| admit(&mut tree, &mut in_flight, entry))
                    .collect();
                tree.nodes[index].slot = Slot::Directory(children);
            }
        }
    }

    Ok(Resolution::new(tree.flatten(&roots)))
}

/// Resolve a drop and route the outcome.
///
/// `on_drop` receives the partitioned records unless `policy` suppresses an
/// empty result. `on_error` receives the first failure; `on_drop` is then
/// never called.
pub(crate) async fn deliver<E, D, F>(entries: Vec<E>, policy: EmptyDropPolicy, on_drop: D, on_error: F)
where
    E: Entry,
    D: FnOnce(Vec<FileRecord<E::Handle>>, Vec<DirectoryRecord>),
    F: FnOnce(ResolveError),
{
    match resolve(entries).await {
        Ok(resolution) => {
            let (files, directories) = resolution.into_parts();
            if policy.delivers(files.len()) {
                on_drop(files, directories);
            }
        }
        Err(err) => on_error(err),
    }
}

/// Add an entry to the arena and queue its task. Returns `None` for kinds
/// that cannot be resolved.
fn admit<E: Entry>(
    tree: &mut Tree<E::Handle>,
    in_flight: &mut FuturesUnordered<Task<E>>,
    entry: E,
) -> Option<usize> {
    let kind = entry.kind();
    if !kind.is_resolvable() {
        return None;
    }

    let index = tree.push(entry.full_path(), entry.name());
    let task = match kind {
        EntryKind::File => materialize(index, entry),
        _ => list(index, entry),
    };
    in_flight.push(task);
    Some(index)
}

fn materialize<E: Entry>(index: usize, entry: E) -> Task<E> {
    async move {
        let outcome = entry
            .materialize()
            .await
            .map(Outcome::File)
            .map_err(|err| ResolveError::Materialize {
                path: entry.full_path(),
                reason: err.to_string(),
            });
        (index, outcome)
    }
    .boxed_local()
}

fn list<E: Entry>(index: usize, entry: E) -> Task<E> {
    async move {
        let outcome = read_all(&entry)
            .await
            .map(Outcome::Children)
            .map_err(|reason| ResolveError::Listing {
                path: entry.full_path(),
                reason,
            });
        (index, outcome)
    }
    .boxed_local()
}

/// Drain a directory reader until it returns an empty batch.
async fn read_all<E: Entry>(entry: &E) -> Result<Vec<E>, String> {
    let mut reader = entry.reader().map_err(|err| err.to_string())?;
    let mut children = Vec::new();

    loop {
        let batch = reader.read_batch().await.map_err(|err| err.to_string())?;
        if batch.is_empty() {
            break;
        }
        children.extend(batch);
    }

    Ok(children)
}
