//! Shared matrix store for everything rendered under a [`MatrixProvider`].

use crate::config::MatrixConfig;
use crate::model::{JsRandom, MatrixAction, MatrixState};
use yew::prelude::*;

/// Handle to the single matrix store; consumers read snapshots from it and
/// mutate only by dispatching actions.
#[derive(Clone, PartialEq)]
pub struct MatrixContext {
    pub state: UseReducerHandle<MatrixState>,
}

impl MatrixContext {
    pub fn dispatch(&self, action: MatrixAction) {
        self.state.dispatch(action);
    }
}

#[derive(Properties, PartialEq)]
pub struct MatrixProviderProps {
    pub config: MatrixConfig,
    /// Bumped by the parent on every Generate; a change rebuilds the grid.
    pub generation: u32,
    pub children: Children,
}

#[function_component]
pub fn MatrixProvider(props: &MatrixProviderProps) -> Html {
    let state = {
        let config = props.config;
        use_reducer(move || MatrixState::generate(config, &mut JsRandom))
    };
    let seen_generation = use_mut_ref(|| props.generation);

    {
        let state = state.clone();
        let config = props.config;
        use_effect_with(props.generation, move |generation| {
            let mut seen = seen_generation.borrow_mut();
            if *seen != *generation {
                *seen = *generation;
                state.dispatch(MatrixAction::Regenerate(config));
            }
            || ()
        });
    }

    let ctx = MatrixContext { state };
    html! {
        <ContextProvider<MatrixContext> context={ctx}>
            { props.children.clone() }
        </ContextProvider<MatrixContext>>
    }
}

/// Fetches the surrounding matrix store.
///
/// # Panics
/// When called outside a `MatrixProvider`; that is a wiring bug, not a runtime
/// condition.
#[hook]
pub fn use_matrix() -> MatrixContext {
    require_context(use_context::<MatrixContext>())
}

fn require_context(ctx: Option<MatrixContext>) -> MatrixContext {
    ctx.expect("use_matrix called outside of a MatrixProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "outside of a MatrixProvider")]
    fn missing_provider_is_fatal() {
        require_context(None);
    }
}
