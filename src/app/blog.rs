use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::BLOG_POSTS;

#[component]
pub fn BlogSection() -> impl IntoView {
    view! {
        <Title text="Blog" />
        <section class="w-full max-w-4xl mx-auto">
            <h2 class="text-5xl font-heading font-bold mb-16 text-center">"Blog"</h2>
            <div class="space-y-6">
                {BLOG_POSTS
                    .iter()
                    .map(|post| {
                        view! {
                            <article class="glass p-8 rounded-lg hover:bg-brightBlack/20 transition-colors duration-200">
                                <div class="flex items-start justify-between gap-6">
                                    <div class="flex-1">
                                        <span class="rounded-md px-2 py-1 glass-strong text-sm">
                                            {post.category}
                                        </span>
                                        <h3 class="text-2xl font-heading font-semibold mt-3 mb-2">
                                            {post.title}
                                        </h3>
                                        <p class="text-muted">{post.display_date()}</p>
                                    </div>
                                    <span class="text-primary text-2xl">"›"</span>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
