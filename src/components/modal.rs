//! Modal presenter for a single file.
//!
//! Pure presentation over the gallery's open `(file, url)` pair: photo
//! preview, metadata, a download action via a transient anchor, and a
//! confirmed delete. The modal closes only after a successful delete;
//! on failure it stays open and surfaces a blocking alert.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::messages;
use crate::models::StoredFile;
use crate::utils::dom;
use crate::utils::format::{format_date, format_size};

stylance::import_crate_style!(css, "src/components/modal.module.css");

/// Modal overlay, mounted while the gallery has an open file.
#[component]
pub fn FileModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = ctx.gallery;

    // Memoized so unrelated model changes (selection toggles, URL cache
    // inserts) don't remount the dialog mid-interaction.
    let open_entry = Memo::new(move |_| state.model.with(|m| m.open_entry().cloned()));

    move || {
        open_entry
            .get()
            .map(|(file, url)| view! { <ModalContent file=file url=url /> })
    }
}

#[component]
fn ModalContent(file: StoredFile, url: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = ctx.gallery;

    let (deleting, set_deleting) = signal(false);

    let file_id = file.id;
    let is_photo = file.kind.is_photo();
    let glyph = ic::file_kind_icon(file.kind);

    let dialog_label = format!("Preview of {}", file.name);
    let alt_name = file.name.clone();
    let name = file.name.clone();
    let meta = format!(
        "{} \u{2022} {}",
        format_size(file.size),
        format_date(&file.uploaded_at)
    );

    let download_url = url.clone();
    let download_name = file.name.clone();
    let on_download = move |_: leptos::ev::MouseEvent| {
        dom::trigger_download(&download_url, &download_name);
    };

    let delete_name = file.name.clone();
    let on_delete = move |_: leptos::ev::MouseEvent| {
        if deleting.get_untracked() {
            return;
        }
        if !dom::confirm(&format!("Delete \"{}\"?", delete_name)) {
            return;
        }
        set_deleting.set(true);
        spawn_local(async move {
            // A successful delete prunes the file, which closes the
            // modal; on failure the modal stays open for a retry.
            if let Err(e) = state.delete_one(file_id).await {
                dom::warn(&format!("File delete failed: {}", e));
                dom::alert(messages::DELETE_FILE_FAILED);
                set_deleting.set(false);
            }
        });
    };

    let on_backdrop = move |_: leptos::ev::MouseEvent| state.close_modal();
    let on_close = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        state.close_modal();
    };
    let stop = |ev: leptos::ev::MouseEvent| ev.stop_propagation();

    view! {
        <div
            class=css::backdrop
            on:click=on_backdrop
            role="dialog"
            aria-modal="true"
            aria-label=dialog_label
        >
            <div class=css::dialog on:click=stop>
                <button
                    class=css::closeButton
                    on:click=on_close
                    title="Close preview"
                    aria-label="Close preview"
                >
                    <Icon icon=ic::CLOSE />
                </button>

                {if is_photo {
                    view! { <img class=css::image src=url.clone() alt=alt_name /> }.into_any()
                } else {
                    view! {
                        <div class=css::glyph aria-hidden="true"><Icon icon=glyph /></div>
                    }
                    .into_any()
                }}

                <div class=css::infoPanel>
                    <h3 class=css::fileName>{name}</h3>
                    <p class=css::fileMeta>{meta}</p>
                    <div class=css::actions>
                        <button class=css::downloadButton on:click=on_download>
                            <Icon icon=ic::DOWNLOAD />
                            <span>"Download"</span>
                        </button>
                        <button
                            class=css::deleteButton
                            on:click=on_delete
                            disabled=move || deleting.get()
                        >
                            <Icon icon=ic::TRASH />
                            <span>{move || if deleting.get() { "Deleting..." } else { "Delete" }}</span>
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
