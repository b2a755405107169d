//! Toast stack and the shared wishlist commit helper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every surface that mutates the wishlist funnels through
//! [`commit_wishlist_intent`], which runs the store's read / apply / write
//! cycle and turns the outcome into a notice.

use leptos::prelude::*;

use crate::net::types::Car;
use crate::state::notice::{NOTICE_TTL_MS, NoticeState};
use crate::state::wishlist::{Intent, Outcome};
use crate::util::wishlist_store::WishlistStore;

/// Push a notice and schedule its dismissal.
pub fn raise_notice(notices: RwSignal<NoticeState>, push: impl FnOnce(&mut NoticeState) -> u64) {
    let mut id = 0;
    notices.update(|state| id = push(state));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(NOTICE_TTL_MS))).await;
        notices.update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, NOTICE_TTL_MS);
    }
}

/// Apply `intent` to the persisted wishlist and raise the matching notice.
///
/// Returns the fresh collection and outcome, or `None` when the save failed.
pub fn commit_wishlist_intent(notices: RwSignal<NoticeState>, intent: Intent) -> Option<(Vec<Car>, Outcome)> {
    match WishlistStore::browser().apply(intent) {
        Ok((collection, outcome)) => {
            raise_notice(notices, |state| state.push_outcome(outcome));
            Some((collection, outcome))
        }
        Err(e) => {
            leptos::logging::warn!("wishlist update failed: {e}");
            raise_notice(notices, NoticeState::push_failure);
            None
        }
    }
}

/// Fixed top-right stack of transient notices. Click to dismiss.
#[component]
pub fn NoticeStack() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-stack" role="status" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div
                            class=format!("notice {}", notice.kind.class())
                            on:click=move |_| notices.update(|state| state.dismiss(id))
                        >
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
