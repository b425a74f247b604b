//! Storage seam: consistent reads and atomic units of work over [`Tables`].

use std::sync::Arc;

use orderdesk_core::DomainResult;

use crate::tables::Tables;

/// Injected storage interface.
///
/// Implementations must guarantee that `transact` is all-or-nothing: either
/// every mutation the closure performs becomes visible, or none do. Writers
/// are serialized; `read` observes a consistent snapshot.
pub trait Store: Send + Sync + 'static {
    /// Run a read-only closure against a consistent snapshot of the tables.
    fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> DomainResult<R>;

    /// Run a closure as one atomic unit of work. Mutations commit only when
    /// the closure returns `Ok`; any error discards them all.
    fn transact<R>(&self, f: impl FnOnce(&mut Tables) -> DomainResult<R>) -> DomainResult<R>;
}

impl<S: Store> Store for Arc<S> {
    fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> DomainResult<R> {
        (**self).read(f)
    }

    fn transact<R>(&self, f: impl FnOnce(&mut Tables) -> DomainResult<R>) -> DomainResult<R> {
        (**self).transact(f)
    }
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Entities on this page, ordered by id.
    pub content: Vec<T>,
    /// Total number of entities across all pages.
    pub total_elements: u64,
    /// Total number of pages at the requested page size.
    pub total_pages: u64,
    /// Zero-based index of this page.
    pub number: u64,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
        }
    }
}
