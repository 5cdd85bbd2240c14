#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::Selection;

use crate::components::{Dashboard, ErrorBanner, Sidebar};
use crate::state::app_state::AppState;

/// Root component. Every selection change re-runs the whole pipeline through
/// the memo; the previous view is simply replaced.
#[component]
pub fn App() -> Element {
    let state = use_context::<AppState>();
    let mut selection = use_signal(Selection::default);

    let render_state = state.clone();
    let view = use_memo(move || render_state.render(&selection()));

    let body = match view() {
        Ok(dashboard) => rsx! { Dashboard { view: dashboard, palette: state.palette.clone() } },
        Err(failure) => rsx! { ErrorBanner { failure } },
    };

    rsx! {
        div {
            style: "display: flex; min-height: 100vh; font-family: sans-serif; color: {state.palette.foreground}; background: {state.palette.background};",
            Sidebar {
                selection: selection(),
                on_change: move |next: Selection| selection.set(next),
            }
            main {
                style: "flex: 1; padding: 20px 28px; overflow-x: auto;",
                h1 { style: "margin: 0;", "{state.layout.title}" }
                p { style: "margin: 4px 0 20px; color: {state.palette.neutral};", "{state.subtitle}" }
                {body}
            }
        }
    }
}
