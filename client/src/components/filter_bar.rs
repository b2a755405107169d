//! Search box and filter controls shared by the listing and wishlist pages.

use leptos::prelude::*;

use crate::state::catalog::{FUEL_OPTIONS, Filters, FuelFilter, PRICE_OPTIONS, PriceRange, SORT_OPTIONS, SortOrder};

/// Make/model search input bound to `filters.query`.
#[component]
pub fn SearchBox(filters: RwSignal<Filters>, placeholder: &'static str) -> impl IntoView {
    view! {
        <div class="search-box">
            <input
                class="search-box__input"
                type="text"
                placeholder=placeholder
                prop:value=move || filters.get().query
                on:input=move |ev| filters.update(|f| f.query = event_target_value(&ev))
            />
            <Show when=move || !filters.get().query.is_empty()>
                <button
                    class="search-box__clear"
                    title="Clear search"
                    aria-label="Clear search"
                    on:click=move |_| filters.update(|f| f.query.clear())
                >
                    "✕"
                </button>
            </Show>
        </div>
    }
}

/// Price, fuel and sort selects plus a reset button shown once any filter is set.
#[component]
pub fn FilterBar(filters: RwSignal<Filters>) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <label class="filter-bar__field">
                <span class="filter-bar__label">"Price Range"</span>
                <select
                    class="filter-bar__select"
                    prop:value=move || filters.get().price.value()
                    on:change=move |ev| filters.update(|f| f.price = PriceRange::parse(&event_target_value(&ev)))
                >
                    {options(&PRICE_OPTIONS)}
                </select>
            </label>
            <label class="filter-bar__field">
                <span class="filter-bar__label">"Fuel Type"</span>
                <select
                    class="filter-bar__select"
                    prop:value=move || filters.get().fuel.value()
                    on:change=move |ev| filters.update(|f| f.fuel = FuelFilter::parse(&event_target_value(&ev)))
                >
                    {options(&FUEL_OPTIONS)}
                </select>
            </label>
            <label class="filter-bar__field">
                <span class="filter-bar__label">"Sort By"</span>
                <select
                    class="filter-bar__select"
                    prop:value=move || filters.get().sort.value()
                    on:change=move |ev| filters.update(|f| f.sort = SortOrder::parse(&event_target_value(&ev)))
                >
                    {options(&SORT_OPTIONS)}
                </select>
            </label>
            <Show when=move || !filters.with(Filters::is_default)>
                <button class="btn filter-bar__reset" on:click=move |_| filters.set(Filters::default())>
                    "✕ Reset Filters"
                </button>
            </Show>
        </div>
    }
}

fn options(choices: &'static [(&'static str, &'static str)]) -> impl IntoView {
    choices
        .iter()
        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
        .collect_view()
}
