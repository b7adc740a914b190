use fabsite_catalog::cart::{Cart, Favorites};
use fabsite_catalog::catalog::{Badge, Product};
use fabsite_catalog::search::{apply, sort, FilterState, Paginator, SortKey};
use fabsite_catalog::ProductId;
use proptest::prelude::*;
use proptest::test_runner::Config;

fn product_strategy() -> impl Strategy<Value = Product> {
    (
        "[a-z]{1,6}",
        prop_oneof![Just("A"), Just("B"), Just("C")],
        prop_oneof![Just("Canon"), Just("Nikon"), Just("ASML")],
        proptest::option::weighted(0.9, 0_i64..20_000),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(name, category, brand, price, hit, new)| {
            let mut p = Product::new(ProductId::generate(), name, 0)
                .with_category(category)
                .with_brand(brand);
            p.price_cents = price;
            if hit {
                p = p.with_badge(Badge::Hit);
            }
            if new {
                p = p.with_badge(Badge::New);
            }
            p
        })
}

fn filter_strategy() -> impl Strategy<Value = FilterState> {
    (
        proptest::collection::btree_set(prop_oneof![Just("A"), Just("B"), Just("C")], 0..3),
        proptest::collection::btree_set(prop_oneof![Just("Canon"), Just("Nikon")], 0..2),
        0_i64..20_000,
        0_i64..20_000,
    )
        .prop_map(|(categories, brands, lo, hi)| {
            let mut state = FilterState::new().with_price_range(lo, hi);
            for c in categories {
                state.set_category(c, true);
            }
            for b in brands {
                state.set_brand(b, true);
            }
            state
        })
}

fn sort_key_strategy() -> impl Strategy<Value = SortKey> {
    proptest::sample::select(SortKey::all().to_vec())
}

fn ids(list: &[Product]) -> Vec<ProductId> {
    list.iter().map(|p| p.id.clone()).collect()
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn filter_is_intersection_of_predicates(
        products in proptest::collection::vec(product_strategy(), 0..30),
        state in filter_strategy(),
    ) {
        let visible = apply(&products, &state);
        let expected: Vec<Product> = products
            .iter()
            .filter(|p| state.categories.is_empty() || state.categories.contains(&p.category))
            .filter(|p| state.brands.is_empty() || state.brands.contains(&p.brand))
            .filter(|p| p.price_cents.is_some_and(|c| c >= state.min_price() && c <= state.max_price()))
            .cloned()
            .collect();
        prop_assert_eq!(ids(&visible), ids(&expected));
    }

    #[test]
    fn empty_facets_keep_every_priced_item_in_range(
        products in proptest::collection::vec(product_strategy(), 0..30),
    ) {
        let visible = apply(&products, &FilterState::new());
        let priced = products.iter().filter(|p| p.price_cents.is_some()).count();
        prop_assert_eq!(visible.len(), priced);
    }

    #[test]
    fn sort_is_idempotent(
        products in proptest::collection::vec(product_strategy(), 0..30),
        key in sort_key_strategy(),
    ) {
        let once = sort(&products, key);
        let twice = sort(&once, key);
        prop_assert_eq!(ids(&once), ids(&twice));
        prop_assert_eq!(once.len(), products.len());
    }

    #[test]
    fn badge_sorts_are_stable_partitions(
        products in proptest::collection::vec(product_strategy(), 0..30),
    ) {
        let sorted = sort(&products, SortKey::Popular);
        let hits: Vec<Product> = products.iter().filter(|p| p.has_badge(&Badge::Hit)).cloned().collect();
        let rest: Vec<Product> = products.iter().filter(|p| !p.has_badge(&Badge::Hit)).cloned().collect();
        let expected: Vec<ProductId> = ids(&hits).into_iter().chain(ids(&rest)).collect();
        prop_assert_eq!(ids(&sorted), expected);
    }

    #[test]
    fn adding_twice_counts_two(id in "[a-z0-9]{1,8}", extra in 0_usize..5) {
        let mut cart = Cart::new();
        for i in 0..extra {
            cart.add(ProductId::new(format!("other-{i}")), "x", "1 ₽", "");
        }
        cart.add(ProductId::new(id.clone()), "x", "1 ₽", "");
        let quantity = cart.add(ProductId::new(id.clone()), "x", "1 ₽", "");
        prop_assert_eq!(quantity, 2);
        prop_assert_eq!(cart.len(), extra + 1);
    }

    #[test]
    fn toggling_favorite_twice_restores_membership(
        existing in proptest::collection::vec("[a-z]{1,4}", 0..6),
        id in "[a-z]{1,4}",
    ) {
        let mut favorites = Favorites::new();
        for e in &existing {
            favorites.toggle(ProductId::new(e.clone()));
        }
        let before = favorites.contains(&ProductId::new(id.clone()));
        favorites.toggle(ProductId::new(id.clone()));
        favorites.toggle(ProductId::new(id.clone()));
        prop_assert_eq!(favorites.contains(&ProductId::new(id)), before);
    }

    #[test]
    fn navigation_stays_within_pages(
        total in 0_usize..60,
        per_page in 1_usize..10,
        target in 0_usize..15,
    ) {
        let mut pager = Paginator::new(per_page);
        let pages = total.div_ceil(per_page).max(1);
        let moved = pager.go_to(target, total);
        prop_assert_eq!(moved, (1..=pages).contains(&target));
        prop_assert!(pager.current_page() >= 1 && pager.current_page() <= pages);
        let items: Vec<usize> = (0..total).collect();
        prop_assert!(pager.slice(&items).len() <= per_page);
    }
}

#[test]
fn twelve_items_third_page() {
    let items: Vec<usize> = (0..12).collect();
    let mut pager = Paginator::new(5);
    assert!(pager.go_to(3, items.len()));
    assert_eq!(pager.slice(&items), vec![10, 11]);
    assert!(!pager.go_to(4, items.len()));
    assert!(!pager.go_to(0, items.len()));
    assert_eq!(pager.current_page(), 3);
}

#[test]
fn worked_example() {
    let products = vec![
        Product::new("a-cheap", "Asher", 2000).with_category("A"),
        Product::new("b", "Bonder", 4000).with_category("B"),
        Product::new("a-mid", "Aligner", 8000).with_category("A"),
        Product::new("a-big", "Annealer", 15000).with_category("A"),
    ];
    let state = FilterState::new()
        .with_category("A")
        .with_price_range(0, 10_000);
    let visible = sort(&apply(&products, &state), SortKey::PriceDesc);
    let names: Vec<&str> = visible.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Aligner", "Asher"]);
}
