mod blog;
mod contact;
mod gallery;
mod homepage;
mod services;
mod upload;

use std::sync::Arc;

use leptos::{either::*, prelude::*, task::spawn_local};
use leptos_meta::*;
use leptos_router::{components::*, path};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::{
    config::StoreConfig,
    portfolio::{Category, NoticeKind, PortfolioDraft, PortfolioItem, PortfolioStore, SiteApi},
    state::{update, Section, UiEvent, ViewState},
};

use blog::BlogSection;
use contact::ContactSection;
use gallery::GallerySection;
use homepage::HomePage;
use services::ServicesSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-body">
                <App />
            </body>
        </html>
    }
}

/// Sends UI events through [`update`].
#[derive(Debug, Clone, Copy)]
pub struct Dispatch(RwSignal<ViewState>);

impl Dispatch {
    pub fn send(&self, event: UiEvent) {
        self.0.update(|state| *state = update(std::mem::take(state), event));
    }

    pub fn with<T>(&self, f: impl FnOnce(&ViewState) -> T) -> T {
        self.0.with(f)
    }

    pub fn with_untracked<T>(&self, f: impl FnOnce(&ViewState) -> T) -> T {
        self.0.with_untracked(f)
    }
}

/// Reactive view of the portfolio store.
#[derive(Clone, Copy)]
pub struct Catalog {
    store: StoredValue<Arc<PortfolioStore<SiteApi>>>,
    items: RwSignal<Vec<PortfolioItem>>,
    loading: RwSignal<bool>,
    image_warn_bytes: usize,
}

impl Catalog {
    fn new(config: &StoreConfig) -> Self {
        Self {
            store: StoredValue::new(Arc::new(PortfolioStore::new(SiteApi::from_config(config)))),
            items: RwSignal::new(Vec::new()),
            // nothing has been fetched until the first list completes
            loading: RwSignal::new(true),
            image_warn_bytes: config.image_warn_bytes,
        }
    }

    /// Items of one category, read from the store whenever the mirror syncs.
    pub fn filtered(&self, category: Category) -> Vec<PortfolioItem> {
        self.items.track();
        self.store.with_value(|store| store.filtered(category))
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn image_warn_bytes(&self) -> usize {
        self.image_warn_bytes
    }

    fn sync(&self, store: &PortfolioStore<SiteApi>) {
        self.items.set(store.items());
        self.loading.set(store.is_loading());
    }

    pub fn refresh(&self) {
        let this = *self;
        spawn_local(async move {
            let store = this.store.get_value();
            store.list().await;
            this.sync(&store);
        });
    }

    pub fn create(&self, draft: PortfolioDraft, dispatch: Dispatch) {
        let this = *self;
        spawn_local(async move {
            let store = this.store.get_value();
            let result = store.create(&draft).await;
            this.sync(&store);
            dispatch.send(UiEvent::UploadFinished(result));
        });
    }

    pub fn remove(&self, id: i64, dispatch: Dispatch) {
        let this = *self;
        spawn_local(async move {
            let store = this.store.get_value();
            let result = store.remove(id).await;
            this.sync(&store);
            dispatch.send(UiEvent::DeleteFinished(result));
        });
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let state = RwSignal::new(ViewState::default());
    let dispatch = Dispatch(state);
    let catalog = Catalog::new(&StoreConfig::from_build_env());
    provide_context(dispatch);
    provide_context(catalog);

    // effects only run in the browser
    Effect::new(move |_| catalog.refresh());

    #[cfg(feature = "hydrate")]
    {
        let (stored_style, set_stored_style, _) = use_local_storage::<Category, JsonSerdeWasmCodec>("gallery_style");
        Effect::watch(
            || (),
            move |_, _, _| dispatch.send(UiEvent::SelectStyle(stored_style.get_untracked())),
            true,
        );
        Effect::watch(
            move || state.with(|s| s.style),
            move |style, _, _| set_stored_style.set(*style),
            false,
        );
    }

    view! {
        <Title formatter=|title| format!("Portfolio - {title}") />
        <Router>
            <Header />
            <main class="flex flex-col flex-grow mx-auto w-full max-w-7xl px-6 pt-32 pb-20">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=Sections />
                </Routes>
            </main>
            <NoticeToast />
        </Router>
    }
}

#[component]
fn Sections() -> impl IntoView {
    let dispatch = expect_context::<Dispatch>();
    move || match dispatch.with(|s| s.section) {
        Section::Home => EitherOf5::A(view! { <HomePage /> }),
        Section::Gallery => EitherOf5::B(view! { <GallerySection /> }),
        Section::Services => EitherOf5::C(view! { <ServicesSection /> }),
        Section::Blog => EitherOf5::D(view! { <BlogSection /> }),
        Section::Contact => EitherOf5::E(view! { <ContactSection /> }),
    }
}

#[component]
fn Header() -> impl IntoView {
    let dispatch = expect_context::<Dispatch>();

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 glass border-b border-white/10">
            <div class="mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-heading font-bold">"PORTFOLIO"</h1>
                    <div class="hidden md:flex gap-8">
                        {Section::ALL
                            .into_iter()
                            .map(move |section| {
                                view! {
                                    <button
                                        class=move || {
                                            if dispatch.with(|s| s.section == section) {
                                                "text-primary font-semibold"
                                            } else {
                                                "text-foreground/70 hover:text-foreground"
                                            }
                                        }
                                        on:click=move |_| dispatch.send(UiEvent::Navigate(section))
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    // display toggle only; the store does its own authorization
                    <button
                        class=move || {
                            if dispatch.with(|s| s.admin_mode) {
                                "px-3 py-2 rounded-md bg-primary/20"
                            } else {
                                "px-3 py-2 rounded-md"
                            }
                        }
                        aria-label="Toggle admin mode"
                        on:click=move |_| dispatch.send(UiEvent::ToggleAdmin)
                    >
                        "⚙"
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NoticeToast() -> impl IntoView {
    let dispatch = expect_context::<Dispatch>();

    move || {
        dispatch.with(|s| s.notice.clone()).map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "border-green/40 text-green",
                NoticeKind::Failure => "border-red/40 text-red",
            };
            view! {
                <div class=format!(
                    "fixed bottom-8 right-8 z-50 glass-strong border rounded-md p-4 max-w-sm {class}",
                )>
                    <div class="flex items-start justify-between gap-4">
                        <div>
                            <p class="font-semibold">{notice.title}</p>
                            <p class="text-sm">{notice.body}</p>
                        </div>
                        <button
                            aria-label="Dismiss"
                            on:click=move |_| dispatch.send(UiEvent::DismissNotice)
                        >
                            "✕"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
