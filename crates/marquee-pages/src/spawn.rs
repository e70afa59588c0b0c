//! Single-threaded task spawning for page data fetches.
//!
//! In the browser tasks run on the JS event loop through
//! `wasm_bindgen_futures`. On native targets they queue on a thread-local
//! [`LocalPool`](futures::executor::LocalPool) that tests drive with
//! [`run_until_stalled`].

use std::future::Future;

#[cfg(not(target_arch = "wasm32"))]
mod native {
	use futures::executor::{LocalPool, LocalSpawner};
	use std::cell::RefCell;

	thread_local! {
		pub(super) static POOL: RefCell<LocalPool> = RefCell::new(LocalPool::new());
		// Kept apart from POOL so running tasks can spawn more tasks.
		pub(super) static SPAWNER: LocalSpawner = POOL.with(|pool| pool.borrow().spawner());
	}
}

/// Spawns `future` on the current thread.
pub fn spawn_local<F>(future: F)
where
	F: Future<Output = ()> + 'static,
{
	#[cfg(target_arch = "wasm32")]
	wasm_bindgen_futures::spawn_local(future);

	#[cfg(not(target_arch = "wasm32"))]
	{
		use futures::task::LocalSpawnExt;

		native::SPAWNER.with(|spawner| {
			if let Err(err) = spawner.spawn_local(future) {
				crate::warn_log!("failed to spawn task: {}", err);
			}
		});
	}
}

/// Runs queued tasks until none can make progress.
///
/// Returns without running anything when called from inside a task.
#[cfg(not(target_arch = "wasm32"))]
pub fn run_until_stalled() {
	native::SPAWNER.with(|_| ());
	native::POOL.with(|pool| match pool.try_borrow_mut() {
		Ok(mut pool) => pool.run_until_stalled(),
		Err(_) => crate::warn_log!("run_until_stalled called from a running task"),
	});
}
