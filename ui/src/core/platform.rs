//! Platform glue for spawning UI-bound futures.

use std::future::Future;

/// Spawn a future onto the UI scheduler.
///
/// Futures touch `Signal`s, so they must stay on the render thread on every
/// platform; on native this delegates to the Dioxus task scheduler rather
/// than a thread pool.
pub fn spawn_future<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(fut);

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = dioxus::prelude::spawn(fut);
    }
}
