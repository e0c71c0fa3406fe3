use leptos::prelude::*;

use super::{Catalog, Dispatch};
use crate::{
    portfolio::Category,
    state::{DraftEdit, UiEvent},
};

/// Dialog collecting a new portfolio item. Only reachable in admin mode.
#[component]
pub fn UploadDialog() -> impl IntoView {
    let dispatch = expect_context::<Dispatch>();
    let catalog = expect_context::<Catalog>();
    let edit = move |edit: DraftEdit| dispatch.send(UiEvent::EditDraft(edit));

    view! {
        <Show when=move || dispatch.with(|s| s.upload_open)>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/60">
                <div class="glass-strong border border-white/20 rounded-lg p-6 w-full max-w-md">
                    <div class="flex items-center justify-between">
                        <h3 class="font-heading text-2xl">"Add work"</h3>
                        <button
                            aria-label="Close"
                            on:click=move |_| dispatch.send(UiEvent::CloseUpload)
                        >
                            "✕"
                        </button>
                    </div>
                    <div class="space-y-4 mt-4">
                        <div>
                            <label for="upload_title">"Title"</label>
                            <input
                                id="upload_title"
                                type="text"
                                placeholder="Title of the work"
                                class="glass w-full mt-2 px-3 py-2 rounded-md"
                                prop:value=move || dispatch.with(|s| s.draft.title.clone())
                                on:input=move |ev| edit(DraftEdit::Title(event_target_value(&ev)))
                            />
                        </div>
                        <div>
                            <label for="upload_category">"Category"</label>
                            <select
                                id="upload_category"
                                class="glass w-full mt-2 px-3 py-2 rounded-md"
                                prop:value=move || {
                                    dispatch.with(|s| s.draft.category.as_str().to_string())
                                }
                                on:change=move |ev| {
                                    match event_target_value(&ev).parse::<Category>() {
                                        Ok(category) => edit(DraftEdit::Category(category)),
                                        Err(e) => log::warn!("ignoring category selection: {e}"),
                                    }
                                }
                            >
                                {Category::ALL
                                    .into_iter()
                                    .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                        <div>
                            <label for="upload_description">"Description (optional)"</label>
                            <textarea
                                id="upload_description"
                                rows="3"
                                placeholder="A few words about the work"
                                class="glass w-full mt-2 px-3 py-2 rounded-md"
                                prop:value=move || dispatch.with(|s| s.draft.description.clone())
                                on:input=move |ev| {
                                    edit(DraftEdit::Description(event_target_value(&ev)))
                                }
                            ></textarea>
                        </div>
                        <div>
                            <label for="upload_image">"Image"</label>
                            <input
                                id="upload_image"
                                type="file"
                                accept="image/*"
                                class="glass w-full mt-2"
                                on:change=move |ev| {
                                    #[cfg(feature = "hydrate")]
                                    read_selected_image(ev, dispatch, catalog.image_warn_bytes());
                                    #[cfg(not(feature = "hydrate"))]
                                    let _ = ev;
                                }
                            />
                            {move || {
                                dispatch
                                    .with(|s| {
                                        (!s.draft.image_url.is_empty()).then(|| s.draft.image_url.clone())
                                    })
                                    .map(|src| {
                                        view! {
                                            <img
                                                src=src
                                                alt="Preview"
                                                class="mt-4 w-full h-48 object-cover rounded-lg"
                                            />
                                        }
                                    })
                            }}
                        </div>
                        <button
                            class="w-full glass-strong py-2 rounded-md disabled:opacity-50"
                            disabled=move || dispatch.with(|s| s.uploading)
                            on:click=move |_| {
                                // a second click before the first create settles is dropped
                                let Some(draft) = dispatch
                                    .with_untracked(|s| (!s.uploading).then(|| s.draft.clone()))
                                else {
                                    return;
                                };
                                dispatch.send(UiEvent::SubmitUpload);
                                catalog.create(draft, dispatch);
                            }
                        >
                            {move || {
                                if dispatch.with(|s| s.uploading) { "Uploading..." } else { "Upload" }
                            }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Reads the chosen file into the draft as a data URI.
#[cfg(feature = "hydrate")]
fn read_selected_image(ev: leptos::ev::Event, dispatch: Dispatch, warn_bytes: usize) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    use crate::portfolio::encode_upload;

    let Some(file) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
    else {
        return;
    };
    leptos::task::spawn_local(async move {
        match JsFuture::from(file.array_buffer()).await {
            Ok(buffer) => {
                let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
                let uri = encode_upload(&file.type_(), &bytes, warn_bytes);
                dispatch.send(UiEvent::EditDraft(DraftEdit::Image(uri)));
            }
            Err(err) => log::error!("failed to read selected image: {err:?}"),
        }
    });
}
