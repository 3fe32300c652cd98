//! Shared view components.

use leptos::prelude::*;
use leptos_router::components::A;
use vitrine_commerce::Product;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = format!("/product/{}", product.id);
    let price = product.price_display();
    let rating = format!("{:.1}", product.rating_display());

    view! {
        <div class="product-card">
            <A href=href>
                <div class="product-image">
                    <img src=product.image alt=product.title.clone()/>
                    <span class="rating-badge">"★ " {rating}</span>
                </div>
                <div class="product-info">
                    <h3>{product.title}</h3>
                    <p class="description">{product.description}</p>
                    <div class="product-meta">
                        <span class="price">{price}</span>
                        <span class="category-chip">{product.category}</span>
                    </div>
                </div>
            </A>
        </div>
    }
}

/// Generic error panel with a way back to the listing.
#[component]
pub fn ErrorNotice(message: String) -> impl IntoView {
    view! {
        <div class="error-notice">
            <h2>"Oops!"</h2>
            <p>{message}</p>
            <A href="/">"Back to Home"</A>
        </div>
    }
}

// ============================================================================
// Skeletons (Loading States)
// ============================================================================

#[component]
pub fn ProductGridSkeleton() -> impl IntoView {
    view! {
        <div class="products">
            <ProductCardSkeleton/>
            <ProductCardSkeleton/>
            <ProductCardSkeleton/>
            <ProductCardSkeleton/>
        </div>
    }
}

#[component]
fn ProductCardSkeleton() -> impl IntoView {
    view! {
        <div class="product-card">
            <div class="skeleton" style="width: 100%; height: 200px;"></div>
            <div class="product-info">
                <div class="skeleton" style="width: 80%; height: 1.5rem; margin-bottom: 0.5rem;"></div>
                <div class="skeleton" style="width: 40%; height: 1.25rem;"></div>
            </div>
        </div>
    }
}

#[component]
pub fn ProductDetailSkeleton() -> impl IntoView {
    view! {
        <div class="detail-layout">
            <div class="skeleton" style="height: 400px; border-radius: 8px;"></div>
            <div>
                <div class="skeleton" style="width: 60%; height: 2rem; margin-bottom: 1rem;"></div>
                <div class="skeleton" style="width: 30%; height: 2rem; margin-bottom: 2rem;"></div>
                <div class="skeleton" style="width: 100%; height: 4rem; margin-bottom: 1rem;"></div>
                <div class="skeleton" style="width: 150px; height: 3rem;"></div>
            </div>
        </div>
    }
}
