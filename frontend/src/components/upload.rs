//! File picker, upload button, share link and error message.

use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::types::UploadViewModel;

#[component]
pub fn UploadPanel(
    vm: UploadViewModel,
    /// `accept` attribute of the file input; empty accepts anything
    #[prop(optional)]
    accept: &'static str,
) -> impl IntoView {
    // Handler pour le changement de fichier
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        vm.select(file);
    };

    let on_upload = move |_| vm.trigger();

    view! {
        <div class="upload-area">
            <input
                type="file"
                accept=accept
                on:change=on_file_change
            />
            <button
                on:click=on_upload
                disabled=move || !vm.can_trigger()
            >
                {move || vm.button_label()}
            </button>
        </div>

        <Show
            when=move || vm.error_message().is_some()
            fallback=|| view! { }
        >
            <div class="error-message">
                {move || vm.error_message().unwrap_or_default()}
            </div>
        </Show>

        <Show
            when=move || vm.link().is_some()
            fallback=|| view! { }
        >
            <ShareLink link=Signal::derive(move || vm.link().unwrap_or_default())/>
        </Show>
    }
}

#[component]
pub fn ShareLink(link: Signal<String>) -> impl IntoView {
    view! {
        <div class="share-link">
            <h3>"✅ Share this link:"</h3>
            <a href=link target="_blank" rel="noopener noreferrer">
                {link}
            </a>
        </div>
    }
}
