use crate::hooks::FetchState;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

/// Fetch on mount and again whenever `deps` changes. Each trigger spawns a
/// fresh request and every completion writes straight into the state handle,
/// so with overlapping requests the last completion wins. Failures are
/// logged and surfaced only through the returned state.
#[hook]
pub fn use_fetch_with_deps<T, D, F, Fut>(
    deps: D,
    fetch_fn: F,
) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    T: 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let fetch_fn = Rc::new(fetch_fn);

    let refetch = {
        let fetch_state = fetch_state.clone();

        use_callback(deps.clone(), move |_, _| {
            let fetch_state = fetch_state.clone();
            let fetch_fn = fetch_fn.clone();

            fetch_state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                match (*fetch_fn)().await {
                    Ok(data) => fetch_state.set(FetchState::Success(data)),
                    Err(err) => {
                        log::error!("Fetch failed: {}", err);
                        fetch_state.set(FetchState::Error(err));
                    }
                }
            });
        })
    };

    // Fetch on mount and on dependency change
    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
            || ()
        });
    }

    (fetch_state, refetch)
}
