//! Numbered page buttons under the listing grid.

use leptos::prelude::*;

/// Renders one button per page; hidden when everything fits on one page.
#[component]
pub fn Pagination(page: RwSignal<usize>, #[prop(into)] total_pages: Signal<usize>) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="pagination" aria-label="Pages">
                {move || {
                    (1..=total_pages.get())
                        .map(|n| {
                            view! {
                                <button
                                    class="pagination__page"
                                    class:pagination__page--active=move || page.get() == n
                                    on:click=move |_| page.set(n)
                                >
                                    {n}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </nav>
        </Show>
    }
}
