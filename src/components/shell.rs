//! Application shell.
//!
//! Renders the app header and switches between the two top-level views
//! based on the view cursor. Also hosts the small shared fragments
//! (error banner, loading spinner) both views use.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::folder_grid::FolderGrid;
use crate::components::gallery::Gallery;
use crate::config::{APP_NAME, APP_TAGLINE, messages};
use crate::models::ViewCursor;

stylance::import_crate_style!(css, "src/components/shell.module.css");

/// Application frame: header plus the active view.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::app>
            <header class=css::header>
                <h1 class=css::title>{APP_NAME}</h1>
                <p class=css::tagline>{APP_TAGLINE}</p>
            </header>

            <main class=css::main>
                {move || {
                    if ctx.user_id.is_none() {
                        return view! {
                            <ErrorNotice message=messages::NO_USER_ID.to_string() />
                        }
                        .into_any();
                    }
                    match ctx.cursor.get() {
                        ViewCursor::FolderList => view! { <FolderGrid /> }.into_any(),
                        ViewCursor::Gallery { id, name } => {
                            view! { <Gallery folder_id=id folder_name=name /> }.into_any()
                        }
                    }
                }}
            </main>
        </div>
    }
}

/// Inline error banner.
#[component]
pub fn ErrorNotice(message: String) -> impl IntoView {
    view! {
        <div class=css::error role="alert">{message}</div>
    }
}

/// Centered loading indicator.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class=css::spinnerWrap>
            <div class=css::spinner aria-hidden="true"></div>
            <p class=css::spinnerLabel>"Loading..."</p>
        </div>
    }
}
