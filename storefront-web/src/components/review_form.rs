use i18nrs::yew::use_translation;
use shared::models::{MAX_RATING, MIN_RATING, ReviewRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yewdux::prelude::{use_dispatch, use_selector};

use crate::actions::reviews::{delete_review, save_review};
use crate::api::StorefrontClient;
use crate::models::app_state::AppState;

/// Ratings the form offers, in half-star steps.
pub fn rating_choices() -> impl Iterator<Item = f64> {
    std::iter::successors(Some(MIN_RATING), |rating| {
        let next = rating + 0.5;
        (next <= MAX_RATING).then_some(next)
    })
}

#[derive(Properties, PartialEq)]
pub struct ReviewFormProps {
    /// Product being reviewed.
    pub product_id: i64,
}

/// The signed-in user's review of one product: write, edit or delete it.
#[function_component(ReviewForm)]
pub fn review_form(props: &ReviewFormProps) -> Html {
    let (i18n, ..) = use_translation();
    let dispatch = use_dispatch::<AppState>();
    let reviews = use_selector(|state: &AppState| state.reviews.clone());
    let form = use_state(ReviewRequest::default);
    let product_id = props.product_id;

    let existing = reviews
        .review
        .as_ref()
        .filter(|_| reviews.product_id == Some(product_id))
        .cloned();

    {
        let form = form.clone();
        use_effect_with(existing.clone(), move |existing| {
            form.set(existing.as_ref().map(ReviewRequest::from).unwrap_or_default());
            || ()
        });
    }

    let on_rating = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            let target: HtmlSelectElement = event.target_unchecked_into();
            if let Ok(rating) = target.value().parse() {
                form.set(ReviewRequest {
                    rating,
                    ..(*form).clone()
                });
            }
        })
    };
    let on_comment = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let target: HtmlTextAreaElement = event.target_unchecked_into();
            form.set(ReviewRequest {
                comment: target.value(),
                ..(*form).clone()
            });
        })
    };
    let on_submit = {
        let form = form.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = (*form).clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                save_review(&StorefrontClient::shared(), &dispatch, product_id, &request).await;
            });
        })
    };
    let on_delete = Callback::from(move |_: MouseEvent| {
        let dispatch = dispatch.clone();
        spawn_local(async move {
            delete_review(&StorefrontClient::shared(), &dispatch, product_id).await;
        });
    });

    let busy = reviews.loading || reviews.saving;
    let submit_label = if reviews.saving {
        i18n.t("review.saving")
    } else if existing.is_some() {
        i18n.t("review.update")
    } else {
        i18n.t("review.create")
    };

    html! {
        <form class="card bg-base-200 p-4 space-y-3" onsubmit={on_submit}>
            <h2 class="text-xl font-semibold">{i18n.t("review.title")}</h2>
            if existing.is_none() && !reviews.loading {
                <p class="text-sm opacity-70">{i18n.t("review.none")}</p>
            }
            <label class="form-control">
                <span class="label-text">{i18n.t("review.rating")}</span>
                <select class="select select-bordered select-sm w-32" onchange={on_rating} disabled={busy}>
                    { for rating_choices().map(|rating| html! {
                        <option value={rating.to_string()} selected={(rating - form.rating).abs() < f64::EPSILON}>
                            {format!("{rating:.1} ★")}
                        </option>
                    }) }
                </select>
            </label>
            <label class="form-control">
                <span class="label-text">{i18n.t("review.comment")}</span>
                <textarea
                    class="textarea textarea-bordered"
                    value={form.comment.clone()}
                    oninput={on_comment}
                    disabled={busy}
                />
            </label>
            <div class="flex gap-2">
                <button type="submit" class="btn btn-primary btn-sm" disabled={busy}>{submit_label}</button>
                if existing.is_some() {
                    <button type="button" class="btn btn-outline btn-error btn-sm" onclick={on_delete} disabled={busy}>
                        {i18n.t("review.delete")}
                    </button>
                }
            </div>
        </form>
    }
}
