//! Reusable card for a car in the listing and wishlist grids.
//!
//! DESIGN
//! ======
//! Each card derives its own membership from storage on mount and toggles
//! against a fresh load, so cards stay independent of the page that hosts
//! them. Writes made by other cards are only observed on the next mount.

use leptos::prelude::*;

use crate::components::notices::commit_wishlist_intent;
use crate::net::types::{Car, CarId};
use crate::state::notice::NoticeState;
use crate::state::wishlist::{Intent, Membership, Outcome};
use crate::util::format;
use crate::util::wishlist_store::WishlistStore;

/// A clickable card linking to `/car/{id}` with a wishlist heart button.
#[component]
pub fn CarCard(
    car: Car,
    /// Invoked with the car id after a successful removal.
    #[prop(optional)]
    on_remove: Option<Callback<CarId>>,
) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let car_id = car.id;
    let membership = RwSignal::new(Membership::NotWishlisted);

    // Storage is browser-only; effects run after hydration.
    Effect::new(move || {
        let loaded = WishlistStore::browser().load();
        membership.set(Membership::derive(&loaded, car_id));
    });

    let toggle_car = car.clone();
    let on_toggle = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let Some((collection, outcome)) = commit_wishlist_intent(notices, Intent::Toggle(toggle_car.clone())) else {
            return;
        };
        membership.set(Membership::derive(&collection, car_id));
        if outcome == Outcome::Removed {
            if let Some(on_remove) = on_remove.as_ref() {
                on_remove.run(car_id);
            }
        }
    };

    let wishlisted = move || membership.get().is_wishlisted();
    let title = car.title();
    let fuel_class = format!("car-card__fuel {}", format::fuel_class(&car.fuel_type));

    view! {
        <a class="car-card" href=format!("/car/{car_id}")>
            <span class="car-card__media">
                <img class="car-card__image" src=format::image_src(&car.image).to_owned() alt=title.clone()/>
                <span class="car-card__price">{format::price(car.price)}</span>
                <button
                    class="car-card__wishlist"
                    class:car-card__wishlist--active=wishlisted
                    on:click=on_toggle
                    aria-label=move || if wishlisted() { "Remove from wishlist" } else { "Add to wishlist" }
                >
                    {move || if wishlisted() { "♥" } else { "♡" }}
                </button>
                <span class="car-card__year">{car.year}</span>
            </span>
            <span class="car-card__body">
                <span class="car-card__title">{title}</span>
                <span class="car-card__specs">
                    <span class=fuel_class>{car.fuel_type.clone()}</span>
                    <span class="car-card__transmission">{car.transmission.clone()}</span>
                    <span class="car-card__color">
                        <span class="swatch" style=format::swatch_style(&car.color)></span>
                        {car.color.clone()}
                    </span>
                </span>
                <span class="btn car-card__details">"View Details"</span>
            </span>
        </a>
    }
}
