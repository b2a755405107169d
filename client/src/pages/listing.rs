//! Catalog listing page with search, filters, sort and pagination.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing route. Fetches the full catalog once from the browser, then
//! filters, sorts and pages it in memory. Each card manages its own wishlist
//! membership.

use leptos::prelude::*;

use crate::components::car_card::CarCard;
use crate::components::filter_bar::{FilterBar, SearchBox};
use crate::components::pagination::Pagination;
use crate::components::site_header::SiteHeader;
use crate::state::catalog::{CatalogState, Filters, page_count, page_slice};
use crate::util::format;

#[component]
pub fn ListingPage() -> impl IntoView {
    let catalog = RwSignal::new(CatalogState::default());
    let filters = RwSignal::new(Filters::default());
    let page = RwSignal::new(1_usize);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_cars().await {
            Ok(cars) => catalog.update(|s| {
                s.cars = cars;
                s.error = None;
            }),
            Err(e) => {
                leptos::logging::warn!("catalog fetch failed: {e}");
                catalog.update(|s| s.error = Some(e.to_string()));
            }
        }
        catalog.update(|s| s.loading = false);
    });

    // Any filter change starts again from the first page.
    Effect::new(move || {
        filters.track();
        page.set(1);
    });

    let filtered = Memo::new(move |_| catalog.with(|s| filters.with(|f| f.apply(&s.cars))));
    let total_pages = Signal::derive(move || filtered.with(|cars| page_count(cars.len())));
    let visible = move || filtered.with(|cars| page_slice(cars, page.get()));

    view! {
        <div class="listing-page">
            <SiteHeader wishlist_link=true/>
            <Show
                when=move || !catalog.get().loading
                fallback=|| view! { <div class="loading-spinner" aria-label="Loading"></div> }
            >
                <section class="hero">
                    <h2 class="hero__title">"Find Your Dream Car"</h2>
                    <SearchBox filters=filters placeholder="Search by make or model..."/>
                </section>
                <FilterBar filters=filters/>
                <h3 class="listing-page__summary">
                    {move || format::results_label(filtered.with(Vec::len), "found")}
                </h3>
                <Show when=move || catalog.get().error.is_some()>
                    <p class="listing-page__error">{move || catalog.get().error.unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || filtered.with(|cars| !cars.is_empty())
                    fallback=move || {
                        view! {
                            <div class="empty-state">
                                <h3 class="empty-state__title">"No cars found"</h3>
                                <p class="empty-state__body">
                                    "Try adjusting your search criteria or filters to find more cars."
                                </p>
                                <button class="btn" on:click=move |_| filters.set(Filters::default())>
                                    "Reset all filters"
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="car-grid">
                        <For each=visible key=|car| car.id children=|car| view! { <CarCard car=car/> }/>
                    </div>
                    <Pagination page=page total_pages=total_pages/>
                </Show>
            </Show>
        </div>
    }
}
