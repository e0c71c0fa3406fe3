use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::CONTACTS;

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <Title text="Contact" />
        <section class="w-full max-w-2xl mx-auto">
            <h2 class="text-5xl font-heading font-bold mb-16 text-center">"Contact"</h2>
            <div class="glass-strong p-12 rounded-lg space-y-8 animate-fade-in">
                {CONTACTS
                    .iter()
                    .map(|line| {
                        view! {
                            <div class="flex items-center gap-4">
                                <div class="w-14 h-14 rounded-xl flex items-center justify-center text-2xl">
                                    {line.icon}
                                </div>
                                <div>
                                    <p class="text-sm text-muted">{line.label}</p>
                                    <p class="text-lg font-semibold">{line.value}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
