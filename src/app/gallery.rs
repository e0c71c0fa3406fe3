use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use super::{upload::UploadDialog, Catalog, Dispatch};
use crate::{
    portfolio::{Category, PortfolioItem},
    state::UiEvent,
};

#[component]
pub fn GallerySection() -> impl IntoView {
    let dispatch = expect_context::<Dispatch>();
    let catalog = expect_context::<Catalog>();
    let is_admin = move || dispatch.with(|s| s.admin_mode);
    let visible = move || catalog.filtered(dispatch.with(|s| s.style));

    view! {
        <Title text="Gallery" />
        <section class="w-full">
            <div class="mb-12 text-center">
                <div class="flex items-center justify-center gap-4 mb-6">
                    <h2 class="text-5xl font-heading font-bold">"Gallery"</h2>
                    <Show when=is_admin>
                        <button
                            class="glass-strong w-10 h-10 rounded-md"
                            aria-label="Add work"
                            on:click=move |_| dispatch.send(UiEvent::OpenUpload)
                        >
                            "+"
                        </button>
                    </Show>
                </div>
                <div class="flex gap-3 justify-center flex-wrap">
                    {Category::ALL
                        .into_iter()
                        .map(move |category| {
                            view! {
                                <button
                                    class=move || {
                                        if dispatch.with(|s| s.style == category) {
                                            "glass-strong px-4 py-2 rounded-md"
                                        } else {
                                            "glass px-4 py-2 rounded-md border"
                                        }
                                    }
                                    on:click=move |_| dispatch.send(UiEvent::SelectStyle(category))
                                >
                                    {category.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            {move || {
                if catalog.is_loading() {
                    Either::Left(view! { <div class="text-center text-muted">"Loading..."</div> })
                } else {
                    Either::Right(
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 animate-fade-in">
                                <For
                                    each=visible
                                    key=|item| item.id
                                    children=move |item| view! { <ItemCard item /> }
                                />
                            </div>
                        },
                    )
                }
            }}
        </section>
        <UploadDialog />
    }
}

#[component]
fn ItemCard(item: PortfolioItem) -> impl IntoView {
    let dispatch = expect_context::<Dispatch>();
    let catalog = expect_context::<Catalog>();
    let id = item.id;
    let is_admin = move || dispatch.with(|s| s.admin_mode);
    let confirming = move || dispatch.with(|s| s.pending_delete == Some(id));
    let description = item.description.clone().filter(|d| !d.is_empty());

    view! {
        <div class="glass overflow-hidden group relative rounded-lg hover:scale-105 transition-transform duration-300">
            <Show when=is_admin>
                <div class="absolute top-2 right-2 z-10">
                    <Show
                        when=confirming
                        fallback=move || {
                            view! {
                                <button
                                    class="bg-red/80 text-white w-8 h-8 rounded-md opacity-0 group-hover:opacity-100 transition-opacity"
                                    aria-label="Delete work"
                                    on:click=move |_| dispatch.send(UiEvent::RequestDelete(id))
                                >
                                    "🗑"
                                </button>
                            }
                        }
                    >
                        <span class="glass-strong rounded-md px-2 py-1 flex items-center gap-2">
                            <span>"Delete?"</span>
                            <button
                                class="text-green"
                                on:click=move |_| {
                                    dispatch.send(UiEvent::ConfirmDelete);
                                    catalog.remove(id, dispatch);
                                }
                            >
                                "✓"
                            </button>
                            <button
                                class="text-red"
                                on:click=move |_| dispatch.send(UiEvent::CancelDelete)
                            >
                                "✗"
                            </button>
                        </span>
                    </Show>
                </div>
            </Show>
            <div class="aspect-square overflow-hidden">
                <img
                    src=item.image_url.clone()
                    alt=item.title.clone()
                    class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-500"
                />
            </div>
            <div class="p-6">
                <span class="inline-block mb-3 glass-strong capitalize rounded-md px-2 py-1 text-sm">
                    {item.category.badge().to_string()}
                </span>
                <h3 class="text-xl font-heading font-semibold">{item.title.clone()}</h3>
                {description.map(|d| view! { <p class="text-sm text-muted mt-2">{d}</p> })}
            </div>
        </div>
    }
}
