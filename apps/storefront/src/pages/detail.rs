//! Product detail screen.

use std::time::Duration;

use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use vitrine_commerce::prelude::*;

use crate::api;
use crate::components::{ErrorNotice, ProductDetailSkeleton};
use crate::state::RemoteData;

/// How long the simulated add-to-cart call takes.
const ADD_TO_CART_DELAY: Duration = Duration::from_millis(1000);
/// How long the confirmation toast stays up.
const TOAST_DURATION: Duration = Duration::from_millis(3000);

#[component]
pub fn DetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = Memo::new(move |_| {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<u64>().ok())
    });

    let product: RwSignal<RemoteData<Product>> = RwSignal::new(RemoteData::Loading);
    let quantity = RwSignal::new(Quantity::new());
    let adding = RwSignal::new(false);
    let toast: RwSignal<Option<String>> = RwSignal::new(None);

    // One read per id.
    Effect::new(move |_| {
        let Some(id) = id.get() else {
            product.set(RemoteData::Failed("Product not found".to_string()));
            return;
        };
        product.set(RemoteData::Loading);
        spawn_local(async move {
            let next = match api::fetch_product(id).await {
                Ok(found) => RemoteData::Ready(found),
                Err(e) => {
                    leptos::logging::error!("failed to fetch product {id}: {e}");
                    RemoteData::Failed(e.to_string())
                }
            };
            let _ = product.try_set(next);
        });
    });

    view! {
        <div class="detail-page">
            <div class="back-nav">
                <A href="/">"Back to Products"</A>
            </div>

            {move || match product.get() {
                RemoteData::Loading => view! { <ProductDetailSkeleton/> }.into_any(),
                RemoteData::Failed(message) => view! { <ErrorNotice message/> }.into_any(),
                RemoteData::Ready(found) => {
                    view! { <ProductDetail product=found quantity adding toast/> }.into_any()
                }
            }}

            {move || toast.get().map(|message| view! { <div class="toast">{message}</div> })}
        </div>
    }
}

#[component]
fn ProductDetail(
    product: Product,
    quantity: RwSignal<Quantity>,
    adding: RwSignal<bool>,
    toast: RwSignal<Option<String>>,
) -> impl IntoView {
    let price = product.price;
    let price_label = product.price_display();
    let rating = format!("{:.1}", product.rating_display());
    let reviews = product.review_count_display();
    let title_for_toast = product.title.clone();

    // Simulated cart call: a fixed delay, then a confirmation. No persisted
    // or transmitted side effect. The timer may outlive this screen, so
    // every write through it is non-panicking.
    let add_to_cart = move |_| {
        if adding.get() {
            return;
        }
        adding.set(true);
        let message = format!(
            "{} {} added to cart!",
            quantity.get().get(),
            title_for_toast
        );
        set_timeout(
            move || {
                let _ = adding.try_set(false);
                let _ = toast.try_set(Some(message));
                set_timeout(
                    move || {
                        let _ = toast.try_set(None);
                    },
                    TOAST_DURATION,
                );
            },
            ADD_TO_CART_DELAY,
        );
    };

    view! {
        <div class="detail-layout">
            <div class="detail-image">
                <img src=product.image alt=product.title.clone()/>
            </div>
            <div class="detail-info">
                <span class="category-chip">{product.category.clone()}</span>
                <h1>{product.title.clone()}</h1>
                <span class="rating-badge">"★ " {rating}</span>

                <p class="description">{product.description.clone()}</p>

                <div class="price-block">
                    <div class="price">{price_label}</div>
                    <div class="shipping-note">"+ Free shipping"</div>
                </div>

                <div class="quantity-block">
                    <h3>"Quantity"</h3>
                    <div class="qty-stepper">
                        <button
                            class="qty-btn"
                            disabled=move || quantity.get().at_minimum()
                            on:click=move |_| quantity.update(|q| q.decrement())
                        >
                            "-"
                        </button>
                        <span class="qty-value">{move || quantity.get().to_string()}</span>
                        <button
                            class="qty-btn"
                            on:click=move |_| quantity.update(|q| q.increment())
                        >
                            "+"
                        </button>
                    </div>
                </div>

                <button class="btn add-to-cart" disabled=move || adding.get() on:click=add_to_cart>
                    {move || {
                        if adding.get() {
                            "Adding...".to_string()
                        } else {
                            let subtotal = price * quantity.get().get() as f64;
                            format!("Add to Cart (${subtotal:.2})")
                        }
                    }}
                </button>

                <div class="detail-meta">
                    <div>
                        <h4>"Category"</h4>
                        <p>{product.category}</p>
                    </div>
                    <div>
                        <h4>"Reviews"</h4>
                        <p>{reviews} " reviews"</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
