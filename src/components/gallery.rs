//! File gallery view.
//!
//! Grid of files scoped to one folder, with photo thumbnails fed from the
//! URL cache, a bulk-delete selection, and the modal presenter. Fetches
//! its file snapshot on entry; the view cursor guard makes sure a late
//! response from a superseded navigation never lands here.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::modal::FileModal;
use super::shell::{ErrorNotice, Spinner};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::messages;
use crate::models::StoredFile;
use crate::utils::dom;
use crate::utils::format::format_size;

stylance::import_crate_style!(css, "src/components/gallery.module.css");

#[component]
pub fn Gallery(folder_id: i64, folder_name: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = ctx.gallery;

    // Fetch on entry.
    spawn_local(state.load(folder_id));

    let selection_count = Signal::derive(move || state.model.with(|m| m.selection_count()));

    let on_back = move |_: leptos::ev::MouseEvent| ctx.close_gallery();

    let on_delete_selected = move |_: leptos::ev::MouseEvent| {
        let count = selection_count.get_untracked();
        if count == 0 {
            return;
        }
        if dom::confirm(&format!("Delete {} selected file(s)?", count)) {
            spawn_local(state.delete_selected(folder_id));
        }
    };

    view! {
        <section class=css::view>
            <div class=css::toolbar>
                <button class=css::backButton on:click=on_back title="Back to folders">
                    <Icon icon=ic::BACK />
                    <span>"Back"</span>
                </button>
                <span class=css::folderName>{folder_name}</span>
                <Show when=move || (selection_count.get() > 0)>
                    <button class=css::deleteSelected on:click=on_delete_selected>
                        <Icon icon=ic::TRASH />
                        <span>{move || format!("Delete ({})", selection_count.get())}</span>
                    </button>
                </Show>
            </div>

            {move || state.error.get().map(|message| view! { <ErrorNotice message=message /> })}

            <Show when=move || !state.loading.get() fallback=|| view! { <Spinner /> }>
                <Show
                    when=move || state.model.with(|m| !m.files.is_empty())
                    fallback=|| view! { <EmptyGallery /> }
                >
                    <div class=css::grid>
                        <For
                            each=move || state.model.with(|m| m.files.clone())
                            key=|file| file.id
                            children=move |file| view! { <FileCard folder_id=folder_id file=file /> }
                        />
                    </div>
                </Show>
            </Show>

            <FileModal />
        </section>
    }
}

#[component]
fn FileCard(folder_id: i64, file: StoredFile) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = ctx.gallery;

    let file_id = file.id;
    let is_photo = file.kind.is_photo();
    let glyph = ic::file_kind_icon(file.kind);

    let thumbnail_url =
        Signal::derive(move || state.model.with(|m| m.url_for(file_id).map(str::to_string)));
    let is_selected = Signal::derive(move || state.model.with(|m| m.is_selected(file_id)));

    let aria_label = format!("File: {}", file.name);
    let select_label = format!("Select {}", file.name);
    let alt_name = file.name.clone();
    let title = file.name.clone();
    let name = file.name.clone();

    let file_for_open = file.clone();
    let handle_open = move |_: leptos::ev::MouseEvent| {
        spawn_local(state.open(folder_id, file_for_open.clone()));
    };

    let handle_toggle = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        state.toggle_selected(file_id);
    };

    let name_for_delete = file.name.clone();
    let handle_delete = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if !dom::confirm(&format!("Delete \"{}\"?", name_for_delete)) {
            return;
        }
        spawn_local(async move {
            if let Err(e) = state.delete_one(file_id).await {
                dom::warn(&format!("File delete failed: {}", e));
                dom::alert(messages::DELETE_FILE_FAILED);
            }
        });
    };

    let card_class = move || {
        if is_selected.get() {
            format!("{} {}", css::card, css::cardSelected)
        } else {
            css::card.to_string()
        }
    };

    view! {
        <div
            class=card_class
            on:click=handle_open
            role="button"
            tabindex="0"
            aria-label=aria_label
        >
            <input
                type="checkbox"
                class=css::select
                prop:checked=move || is_selected.get()
                on:click=handle_toggle
                aria-label=select_label
            />
            <button class=css::cardDelete on:click=handle_delete title="Delete file">
                <Icon icon=ic::TRASH />
            </button>
            <div class=css::preview>
                {move || match (is_photo, thumbnail_url.get()) {
                    (true, Some(url)) => {
                        view! { <img class=css::thumbnail src=url alt=alt_name.clone() /> }
                            .into_any()
                    }
                    _ => {
                        view! {
                            <span class=css::glyph aria-hidden="true"><Icon icon=glyph /></span>
                        }
                        .into_any()
                    }
                }}
            </div>
            <div class=css::info>
                <p class=css::fileName title=title>{name}</p>
                <p class=css::fileSize>{format_size(file.size)}</p>
            </div>
        </div>
    }
}

#[component]
fn EmptyGallery() -> impl IntoView {
    view! {
        <div class=css::empty>
            <span class=css::emptyIcon aria-hidden="true"><Icon icon=ic::FILE /></span>
            <p>"No files in this folder"</p>
        </div>
    }
}
