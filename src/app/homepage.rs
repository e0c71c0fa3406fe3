use leptos::prelude::*;
use leptos_meta::Title;

use super::Dispatch;
use crate::state::{Section, UiEvent};

#[component]
pub fn HomePage() -> impl IntoView {
    let dispatch = expect_context::<Dispatch>();

    view! {
        <Title text="Home" />
        <section class="max-w-4xl mx-auto text-center animate-fade-in">
            <span class="inline-block mb-6 glass-strong px-6 py-2 text-sm rounded-full">
                "Graphic designer"
            </span>
            <h2 class="text-6xl md:text-8xl font-heading font-bold mb-6">
                "I create visual stories"
            </h2>
            <p class="text-xl text-muted mb-12 max-w-2xl mx-auto">
                "Turning ideas into memorable design. Minimalism, geometry and typography are my tools."
            </p>
            <div class="flex gap-4 justify-center flex-wrap">
                <button
                    class="glass-strong px-6 py-3 rounded-md hover:scale-105 transition-transform"
                    on:click=move |_| dispatch.send(UiEvent::Navigate(Section::Gallery))
                >
                    "💼 View work"
                </button>
                <button
                    class="glass px-6 py-3 rounded-md border hover:glass-strong transition-all"
                    on:click=move |_| dispatch.send(UiEvent::Navigate(Section::Contact))
                >
                    "✉️ Get in touch"
                </button>
            </div>
        </section>
    }
}
