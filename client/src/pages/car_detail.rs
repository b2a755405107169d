//! Detail page for one car at `/car/{id}`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the wishlist and fetches the car whenever the route id changes. A
//! response for an id the route has since left is dropped. Membership is
//! derived from the car on screen, not the route. The add/remove button is
//! chosen from that local flag, but the mutation runs against a fresh storage
//! read, so a stale flag surfaces as an "already in" / "not in" notice
//! instead of a duplicate write.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::notices::commit_wishlist_intent;
use crate::components::site_header::SiteHeader;
use crate::net::api::parse_car_id;
use crate::net::types::Car;
use crate::state::notice::NoticeState;
use crate::state::wishlist::Membership;
use crate::util::format;
use crate::util::wishlist_store::WishlistStore;

#[component]
pub fn CarDetailPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let params = use_params_map();
    let car_id = Memo::new(move |_| params.with(|p| p.get("id").and_then(|raw| parse_car_id(&raw))));

    let car = RwSignal::new(None::<Car>);
    let loading = RwSignal::new(true);
    let wishlist = RwSignal::new(Vec::<Car>::new());

    Effect::new(move || {
        let id = car_id.get();
        wishlist.set(WishlistStore::browser().load());
        car.set(None);
        let Some(id) = id else {
            loading.set(false);
            return;
        };
        loading.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let fetched = crate::net::api::fetch_car(id).await;
            if !crate::net::api::is_current_fetch(car_id.get_untracked(), id) {
                return;
            }
            match fetched {
                Ok(found) => car.set(Some(found)),
                Err(e) => {
                    leptos::logging::warn!("car fetch failed: {e}");
                    car.set(None);
                }
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let shown_id = Memo::new(move |_| car.with(|c| c.as_ref().map(|c| c.id)));
    let membership = Memo::new(move |_| match shown_id.get() {
        Some(id) => wishlist.with(|collection| Membership::derive(collection, id)),
        None => Membership::NotWishlisted,
    });

    let on_wishlist = move |()| {
        let Some(current) = car.get_untracked() else {
            return;
        };
        let intent = membership.get_untracked().button_intent(&current);
        if let Some((collection, _)) = commit_wishlist_intent(notices, intent) {
            wishlist.set(collection);
        }
    };

    view! {
        <div class="detail-page">
            <SiteHeader back=true/>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading-spinner" aria-label="Loading"></div> }
            >
                {move || match car.get() {
                    None => view! {
                        <div class="empty-state">
                            <p class="empty-state__title">"Car not found."</p>
                            <a class="btn" href="/">"Back to Home"</a>
                        </div>
                    }
                    .into_any(),
                    Some(car) => view! {
                        <CarDetails car=car membership=membership on_wishlist=Callback::new(on_wishlist)/>
                    }
                    .into_any(),
                }}
            </Show>
        </div>
    }
}

#[component]
fn CarDetails(car: Car, membership: Memo<Membership>, on_wishlist: Callback<()>) -> impl IntoView {
    let wishlisted = move || membership.get().is_wishlisted();
    let title = car.title();
    let description = format::description(&car);

    view! {
        <div class="detail-page__heading">
            <h1 class="detail-page__title">{title.clone()}</h1>
            <p class="detail-page__year">{format!("Year: {}", car.year)}</p>
        </div>
        <article class="detail-card">
            <div class="detail-card__media">
                <img class="detail-card__image" src=format::image_src(&car.image).to_owned() alt=title/>
                <span class="detail-card__price">{format::price(car.price)}</span>
            </div>
            <div class="detail-card__body">
                <section class="detail-card__panel">
                    <h3>"Specifications"</h3>
                    <ul class="spec-list">
                        <li><span>"Engine:"</span><span>{car.engine.clone()}</span></li>
                        <li><span>"Fuel Type:"</span><span>{car.fuel_type.clone()}</span></li>
                        <li><span>"Horsepower:"</span><span>{format!("{} HP", car.horsepower)}</span></li>
                        <li><span>"Mileage:"</span><span>{format!("{} km", format::thousands(car.mileage))}</span></li>
                        <li><span>"Transmission:"</span><span>{car.transmission.clone()}</span></li>
                    </ul>
                </section>
                <section class="detail-card__panel">
                    <h3>"Additional Details"</h3>
                    <ul class="spec-list">
                        <li>
                            <span>"Color:"</span>
                            <span>
                                <span class="swatch" style=format::swatch_style(&car.color)></span>
                                {car.color.clone()}
                            </span>
                        </li>
                        <li><span>"Owners:"</span><span>{car.owners}</span></li>
                        <li><span>"Price:"</span><span>{format::price(car.price)}</span></li>
                    </ul>
                </section>
                <section class="detail-card__panel">
                    <h3>"Features"</h3>
                    <div class="feature-tags">
                        {car.features.iter().map(|feature| view! { <span class="feature-tag">{feature.clone()}</span> }).collect_view()}
                    </div>
                </section>
                <section class="detail-card__panel">
                    <h3>"Description"</h3>
                    <p>{description}</p>
                </section>
                <button
                    class="btn detail-card__wishlist"
                    class:detail-card__wishlist--active=wishlisted
                    on:click=move |_| on_wishlist.run(())
                >
                    {move || if wishlisted() { "♥ Remove from Wishlist" } else { "♡ Add to Wishlist" }}
                </button>
            </div>
        </article>
    }
}
