// Replaces the dashboard body when a selection fails to render
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::state::app_state::RenderFailure;

#[component]
pub fn ErrorBanner(failure: RenderFailure) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "margin: 24px 0; padding: 16px 20px; border: 1px solid #f5c2c7; border-radius: 8px; background: #f8d7da; color: #842029;",
            h3 { style: "margin: 0 0 8px;", "{failure.title}" }
            p { style: "margin: 0; font-family: monospace;", "{failure.message}" }
        }
    }
}
