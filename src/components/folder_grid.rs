//! Folder grid view.
//!
//! Entry view listing the user's folders as cards. Clicking a card opens
//! its gallery; the delete strip under each card removes the folder after
//! confirmation and reloads the list, keeping the cached file counts
//! authoritative.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::shell::{ErrorNotice, Spinner};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Folder;
use crate::utils::dom;
use crate::utils::format::count_label;

stylance::import_crate_style!(css, "src/components/folder_grid.module.css");

#[component]
pub fn FolderGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = ctx.folders;

    let on_refresh = move |_: leptos::ev::MouseEvent| {
        if let Some(user_id) = ctx.user_id {
            spawn_local(state.load(user_id));
            spawn_local(state.refresh_stats(user_id));
        }
    };

    view! {
        <section class=css::view>
            <div class=css::toolbar>
                <StatsStrip />
                <button class=css::refreshButton on:click=on_refresh title="Refresh folders">
                    <Icon icon=ic::REFRESH />
                </button>
            </div>

            {move || state.error.get().map(|message| view! { <ErrorNotice message=message /> })}

            <Show when=move || !state.loading.get() fallback=|| view! { <Spinner /> }>
                <Show
                    when=move || state.folders.with(|f| !f.is_empty())
                    fallback=|| view! { <EmptyFolders /> }
                >
                    <div class=css::grid>
                        <For
                            each=move || state.folders.get()
                            key=|folder| folder.id
                            children=move |folder| view! { <FolderCard folder=folder /> }
                        />
                    </div>
                </Show>
            </Show>
        </section>
    }
}

/// Account usage summary; stays blank until the stats fetch lands.
#[component]
fn StatsStrip() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::stats>
            {move || ctx.folders.stats.get().map(|stats| {
                format!(
                    "{} \u{00b7} {} \u{00b7} {:.1} MB used",
                    count_label(stats.total_folders, "folder"),
                    count_label(stats.total_files, "file"),
                    stats.total_size_mb,
                )
            })}
        </div>
    }
}

#[component]
fn FolderCard(folder: Folder) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let open_label = format!("Open folder {}", folder.name);
    let name = folder.name.clone();
    let title = folder.name.clone();

    let folder_for_open = folder.clone();
    let handle_open = move |_: leptos::ev::MouseEvent| {
        ctx.open_folder(&folder_for_open);
    };

    let folder_id = folder.id;
    let name_for_delete = folder.name.clone();
    let handle_delete = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        let prompt = format!("Delete folder \"{}\" and all its files?", name_for_delete);
        if !dom::confirm(&prompt) {
            return;
        }
        if let Some(user_id) = ctx.user_id {
            spawn_local(ctx.folders.delete(user_id, folder_id));
        }
    };

    view! {
        <div class=css::card>
            <div
                class=css::cardBody
                on:click=handle_open
                role="button"
                tabindex="0"
                aria-label=open_label
            >
                <span class=css::cardIcon aria-hidden="true"><Icon icon=ic::FOLDER /></span>
                <h3 class=css::cardName title=title>{name}</h3>
                <p class=css::cardCount>{count_label(folder.file_count, "file")}</p>
            </div>
            <button class=css::cardDelete on:click=handle_delete title="Delete folder">
                <Icon icon=ic::TRASH />
                <span>"Delete"</span>
            </button>
        </div>
    }
}

#[component]
fn EmptyFolders() -> impl IntoView {
    view! {
        <div class=css::empty>
            <span class=css::emptyIcon aria-hidden="true"><Icon icon=ic::FOLDER /></span>
            <p>"No folders yet"</p>
        </div>
    }
}
