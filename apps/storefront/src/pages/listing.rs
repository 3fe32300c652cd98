//! Product listing screen.

use leptos::prelude::*;
use leptos::task::spawn_local;
use vitrine_commerce::prelude::*;

use crate::api;
use crate::components::{ErrorNotice, ProductCard, ProductGridSkeleton};
use crate::state::RemoteData;

/// Visible products for a screen state and filter. Anything but a loaded
/// collection renders zero cards.
fn visible_products(state: &RemoteData<Vec<Product>>, filter: &CatalogFilter) -> Vec<Product> {
    match state {
        RemoteData::Ready(collection) => filter.apply(collection),
        _ => Vec::new(),
    }
}

#[component]
pub fn ListingPage() -> impl IntoView {
    let products: RwSignal<RemoteData<Vec<Product>>> = RwSignal::new(RemoteData::Loading);
    let query = RwSignal::new(String::new());
    let category = RwSignal::new(CategorySelection::All);

    // One read of the full collection, issued on mount.
    spawn_local(async move {
        let next = match api::fetch_products().await {
            Ok(collection) => RemoteData::Ready(collection),
            Err(e) => {
                leptos::logging::error!("failed to fetch products: {e}");
                RemoteData::Failed(e.to_string())
            }
        };
        let _ = products.try_set(next);
    });

    // Re-derived whenever the collection, query, or category changes.
    let filtered = Memo::new(move |_| {
        let filter = CatalogFilter::new(query.get(), category.get());
        products.with(|state| visible_products(state, &filter))
    });
    let facet_list = Memo::new(move |_| {
        products.with(|state| match state {
            RemoteData::Ready(collection) => facets(collection),
            _ => Vec::new(),
        })
    });

    view! {
        {move || match products.get() {
            RemoteData::Loading => view! { <ProductGridSkeleton/> }.into_any(),
            RemoteData::Failed(message) => {
                view! { <ErrorNotice message=format!("Error: {message}")/> }.into_any()
            }
            RemoteData::Ready(_) => {
                view! { <CatalogView query category filtered facet_list/> }.into_any()
            }
        }}
    }
}

/// The loaded catalog: hero with search, facet pills, result count, grid.
#[component]
fn CatalogView(
    query: RwSignal<String>,
    category: RwSignal<CategorySelection>,
    filtered: Memo<Vec<Product>>,
    facet_list: Memo<Vec<CategoryFacet>>,
) -> impl IntoView {
    view! {
        <div class="hero">
            <h2>"Discover Amazing Products"</h2>
            <p>"Find exactly what you're looking for in our curated collection"</p>
            <input
                type="search"
                class="search-input"
                placeholder="Search for products, categories..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
        </div>

        <div class="facet-pills">
            <button
                class="pill"
                class:active=move || category.get().is_all()
                on:click=move |_| category.set(CategorySelection::All)
            >
                "All Products"
            </button>
            {move || {
                facet_list
                    .get()
                    .into_iter()
                    .map(|facet| {
                        let label = facet.name.clone();
                        let name_for_active = facet.name.clone();
                        let name_for_click = facet.name;
                        view! {
                            <button
                                class="pill"
                                class:active=move || {
                                    category.get().name() == Some(name_for_active.as_str())
                                }
                                on:click=move |_| {
                                    category.set(CategorySelection::Only(name_for_click.clone()))
                                }
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>

        <div class="result-count">
            {move || {
                let count = filtered.get().len();
                if count == 1 {
                    "1 product found".to_string()
                } else {
                    format!("{count} products found")
                }
            }}
        </div>

        {move || {
            let visible = filtered.get();
            if visible.is_empty() {
                view! {
                    <div class="empty-state">
                        <h3>"No products found"</h3>
                        <p>"Try adjusting your search or filter criteria"</p>
                        <button
                            class="btn"
                            on:click=move |_| {
                                query.set(String::new());
                                category.set(CategorySelection::All);
                            }
                        >
                            "Reset Filters"
                        </button>
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <div class="products">
                        {visible
                            .into_iter()
                            .map(|product| view! { <ProductCard product/> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str, category: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: 15.0,
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            rating: None,
        }
    }

    #[test]
    fn test_non_ready_states_render_zero_cards() {
        let filter = CatalogFilter::default();
        assert!(visible_products(&RemoteData::Loading, &filter).is_empty());

        let failed = RemoteData::Failed("Error".to_string());
        assert!(visible_products(&failed, &filter).is_empty());
    }

    #[test]
    fn test_ready_state_applies_the_filter() {
        let state = RemoteData::Ready(vec![
            product(1, "Slim Fit Shirt", "men's clothing"),
            product(2, "Monitor Stand", "electronics"),
            product(3, "Linen Shirt", "men's clothing"),
            product(4, "Bracelet", "jewelery"),
            product(5, "Hard Drive", "electronics"),
        ]);

        let filter = CatalogFilter::new("shirt", CategorySelection::All);
        let visible = visible_products(&state, &filter);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].id, 1);
        assert_eq!(visible[1].id, 3);
    }
}
