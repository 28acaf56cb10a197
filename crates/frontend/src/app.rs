use crate::layout::global_context::BoardContext;
use crate::layout::tabs::TabBar;
use leptos::prelude::*;

#[component]
pub fn App(board: BoardContext, reload_period_ms: Option<u32>) -> impl IntoView {
    // The same BoardContext also backs the `showTab` export.
    provide_context(board);

    view! {
        <TabBar reload_period_ms=reload_period_ms />
    }
}
