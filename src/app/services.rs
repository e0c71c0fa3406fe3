use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::SERVICES;

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <Title text="Services" />
        <section class="w-full">
            <h2 class="text-5xl font-heading font-bold mb-16 text-center">"Services"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <div class="glass p-8 rounded-lg hover:scale-105 transition-transform duration-300">
                                <div class="w-16 h-16 rounded-2xl flex items-center justify-center mb-6 text-3xl">
                                    {service.icon}
                                </div>
                                <h3 class="text-2xl font-heading font-semibold mb-3">
                                    {service.title}
                                </h3>
                                <p class="text-muted">{service.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
