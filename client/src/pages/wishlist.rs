//! Wishlist page listing the persisted collection.
//!
//! The page loads storage once on mount and keeps its own copy. Cards write
//! through the store themselves; their `on_remove` callback only drops the
//! car from this page's copy.

use leptos::prelude::*;

use crate::components::car_card::CarCard;
use crate::components::filter_bar::{FilterBar, SearchBox};
use crate::components::site_header::SiteHeader;
use crate::net::types::{Car, CarId};
use crate::state::catalog::Filters;
use crate::state::wishlist::remove;
use crate::util::format;
use crate::util::wishlist_store::WishlistStore;

#[component]
pub fn WishlistPage() -> impl IntoView {
    let wishlist = RwSignal::new(Vec::<Car>::new());
    let filters = RwSignal::new(Filters::default());

    Effect::new(move || wishlist.set(WishlistStore::browser().load()));

    let on_remove = Callback::new(move |id: CarId| {
        wishlist.update(|cars| {
            let (rest, _) = remove(std::mem::take(cars), id);
            *cars = rest;
        });
    });

    let filtered = Memo::new(move |_| wishlist.with(|cars| filters.with(|f| f.apply(cars))));

    view! {
        <div class="wishlist-page">
            <SiteHeader back=true/>
            <section class="hero">
                <h2 class="hero__title">"Your Wishlist"</h2>
                <SearchBox filters=filters placeholder="Search your wishlist..."/>
            </section>
            <FilterBar filters=filters/>
            <h3 class="wishlist-page__summary">
                {move || format::results_label(filtered.with(Vec::len), "in your wishlist")}
            </h3>
            <Show
                when=move || filtered.with(|cars| !cars.is_empty())
                fallback=|| {
                    view! {
                        <div class="empty-state">
                            <h3 class="empty-state__title">"Your wishlist is empty"</h3>
                            <p class="empty-state__body">
                                "Start exploring our listings and add cars to your wishlist."
                            </p>
                            <a class="btn" href="/">"Browse Cars"</a>
                        </div>
                    }
                }
            >
                <div class="car-grid">
                    <For
                        each=move || filtered.get()
                        key=|car| car.id
                        children=move |car| view! { <CarCard car=car on_remove=on_remove/> }
                    />
                </div>
            </Show>
        </div>
    }
}
