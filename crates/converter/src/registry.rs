//! Key-ordered table cache with atomic snapshot publication.
//!
//! # Mental model
//!
//! * Readers load an `Arc<Snapshot>` and answer lookups against that immutable view.
//! * Writers take the write lock, clone the current snapshot, insert into the
//!   clone and publish it with a single atomic store.
//!
//! # Invariants
//!
//! * Snapshot entries are sorted by key with no duplicates.
//! * A published snapshot is never mutated; a reader holding one keeps seeing
//!   the same complete table set after later writes
//!   (see `invariants::test_snapshot_isolation_across_put`).
//! * Concurrent writers never lose each other's entries
//!   (see `invariants::test_no_lost_updates`).
//!
//! # Concurrency & ordering
//!
//! * Reads are wait-free: one `ArcSwap` load, no lock.
//! * Writes are serialized by a `parking_lot::Mutex`. The lock only orders
//!   writers against each other; it never guards reads.

use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;

use crate::catalog::CurveCatalog;
use crate::key::ScaleKey;
use crate::table::ScaleTable;

/// Immutable published registry state.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
	entries: Vec<(ScaleKey, Arc<ScaleTable>)>,
}

impl Snapshot {
	/// Looks up the table stored under exactly `key`.
	#[inline]
	pub fn get(&self, key: ScaleKey) -> Option<&Arc<ScaleTable>> {
		self.search(key).ok().map(|index| &self.entries[index].1)
	}

	/// Ordered search for `key`.
	///
	/// Returns `Ok(index)` on an exact match, or `Err(insertion_point)` where
	/// `key` would be inserted to keep the entries sorted.
	#[inline]
	pub fn search(&self, key: ScaleKey) -> Result<usize, usize> {
		self.entries.binary_search_by_key(&key, |(k, _)| *k)
	}

	/// Key at `index` in ascending order.
	pub fn key_at(&self, index: usize) -> Option<ScaleKey> {
		self.entries.get(index).map(|(k, _)| *k)
	}

	/// Table at `index` in ascending key order.
	pub fn value_at(&self, index: usize) -> Option<&Arc<ScaleTable>> {
		self.entries.get(index).map(|(_, t)| t)
	}

	/// Key and table at `index` in ascending key order.
	#[inline]
	pub fn entry_at(&self, index: usize) -> Option<(ScaleKey, &Arc<ScaleTable>)> {
		self.entries.get(index).map(|(k, t)| (*k, t))
	}

	/// Iterates entries in ascending key order.
	pub fn iter(&self) -> impl Iterator<Item = (ScaleKey, &Arc<ScaleTable>)> {
		self.entries.iter().map(|(k, t)| (*k, t))
	}

	/// All keys in ascending order.
	pub fn keys(&self) -> Vec<ScaleKey> {
		self.entries.iter().map(|(k, _)| *k).collect()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	fn insert(&mut self, key: ScaleKey, table: Arc<ScaleTable>) {
		match self.search(key) {
			Ok(index) => self.entries[index].1 = table,
			Err(index) => self.entries.insert(index, (key, table)),
		}
	}
}

/// Copy-on-write map from [`ScaleKey`] to [`ScaleTable`].
pub struct Registry {
	snap: ArcSwap<Snapshot>,
	write_lock: Mutex<()>,
}

impl Registry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self {
			snap: ArcSwap::from_pointee(Snapshot::default()),
			write_lock: Mutex::new(()),
		}
	}

	/// Creates a registry seeded with every curve in `catalog`.
	pub fn from_catalog(catalog: &CurveCatalog) -> Self {
		let entries = catalog.curves().to_vec();
		Self {
			snap: ArcSwap::from_pointee(Snapshot { entries }),
			write_lock: Mutex::new(()),
		}
	}

	/// Pins the current snapshot.
	#[inline]
	pub fn snapshot(&self) -> Arc<Snapshot> {
		self.snap.load_full()
	}

	/// Looks up the table stored under exactly `key`.
	#[inline]
	pub fn get(&self, key: ScaleKey) -> Option<Arc<ScaleTable>> {
		self.snap.load().get(key).cloned()
	}

	/// Ordered search against the current snapshot. See [`Snapshot::search`].
	#[inline]
	pub fn search(&self, key: ScaleKey) -> Result<usize, usize> {
		self.snap.load().search(key)
	}

	/// Inserts or overwrites one entry and publishes the result.
	///
	/// Returns the snapshot that was published.
	pub fn put(&self, key: ScaleKey, table: Arc<ScaleTable>) -> Arc<Snapshot> {
		let _guard = self.write_lock.lock();

		let mut next = Snapshot::clone(&self.snap.load());
		next.insert(key, table);
		let next = Arc::new(next);
		self.snap.store(Arc::clone(&next));

		tracing::debug!(%key, entries = next.len(), "published font scale table");
		next
	}

	pub fn len(&self) -> usize {
		self.snap.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Default for Registry {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for Registry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Registry")
			.field("keys", &self.snap.load().keys())
			.finish()
	}
}

#[cfg(test)]
mod invariants;
