use std::sync::Arc;
use std::thread;

use super::Registry;
use crate::catalog::CurveCatalog;
use crate::key::ScaleKey;
use crate::table::ScaleTable;

/// Invariant: a pinned snapshot is unaffected by later writes.
pub(crate) fn inv_snapshot_isolation_across_put() {
	let registry = Registry::from_catalog(&CurveCatalog::builtin());
	let before = registry.snapshot();

	registry.put(ScaleKey::new(140), Arc::new(ScaleTable::linear(1.4)));
	registry.put(ScaleKey::new(115), Arc::new(ScaleTable::linear(9.0)));

	assert_eq!(before.len(), 5);
	assert!(before.get(ScaleKey::new(140)).is_none());
	assert_eq!(before.get(ScaleKey::new(115)).unwrap().convert(8.0), 9.2);

	let after = registry.snapshot();
	assert_eq!(after.len(), 6);
	assert_eq!(after.get(ScaleKey::new(115)).unwrap().convert(8.0), 72.0);
}

#[cfg_attr(test, test)]
pub(crate) fn test_snapshot_isolation_across_put() {
	inv_snapshot_isolation_across_put()
}

/// Invariant: concurrent writers to distinct keys never drop each other's entries.
pub(crate) fn inv_no_lost_updates() {
	const WRITERS: i32 = 8;
	const PER_WRITER: i32 = 25;

	let registry = Registry::new();
	thread::scope(|s| {
		for w in 0..WRITERS {
			let registry = &registry;
			s.spawn(move || {
				for i in 0..PER_WRITER {
					let raw = 100 + w * PER_WRITER + i;
					registry.put(
						ScaleKey::new(raw),
						Arc::new(ScaleTable::linear(raw as f32 / 100.0)),
					);
				}
			});
		}
	});

	let snap = registry.snapshot();
	assert_eq!(snap.len(), (WRITERS * PER_WRITER) as usize);
	let keys = snap.keys();
	assert!(keys.windows(2).all(|w| w[0] < w[1]));
}

#[cfg_attr(test, test)]
pub(crate) fn test_no_lost_updates() {
	inv_no_lost_updates()
}

/// Invariant: readers racing writers always observe a sorted, complete prefix of the seed.
pub(crate) fn inv_readers_see_consistent_snapshots() {
	let registry = Registry::from_catalog(&CurveCatalog::builtin());

	thread::scope(|s| {
		s.spawn(|| {
			for raw in 201..=260 {
				registry.put(
					ScaleKey::new(raw),
					Arc::new(ScaleTable::linear(raw as f32 / 100.0)),
				);
			}
		});
		for _ in 0..4 {
			s.spawn(|| {
				for _ in 0..200 {
					let snap = registry.snapshot();
					let keys = snap.keys();
					assert!(keys.len() >= 5);
					assert!(keys.windows(2).all(|w| w[0] < w[1]));
					assert_eq!(snap.key_at(0), Some(ScaleKey::new(115)));
				}
			});
		}
	});

	assert_eq!(registry.len(), 65);
}

#[cfg_attr(test, test)]
pub(crate) fn test_readers_see_consistent_snapshots() {
	inv_readers_see_consistent_snapshots()
}
