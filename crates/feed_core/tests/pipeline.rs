use std::sync::Once;

use feed_core::{
    assemble, combine, present, project, sequential_users, CoreUser, RenderItem, StableHash,
    UiText, VerticalConfig, ViewMapper, ViewState, CHECKSUM_SEED,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(feed_logging::initialize_for_tests);
}

fn users() -> Vec<CoreUser> {
    vec![
        CoreUser::new(40, "Ann", true),
        CoreUser::new(12, "Bob", false),
        CoreUser::new(99, "Cid", true),
    ]
}

#[test]
fn projection_checksum_is_deterministic() {
    init_logging();
    let ann = CoreUser::new(7, "Ann", true);

    let first = project(&ann);
    let second = project(&ann);

    assert_eq!(first, second);
    assert_eq!(first.checksum, 31 + 65985);
    assert_eq!(first.id, 7);
    assert!(first.is_active);
}

#[test]
fn missing_email_does_not_affect_checksum() {
    let mut with_email = CoreUser::new(1, "Ann", true);
    with_email.email = Some("ann@example.com".to_string());

    assert_eq!(
        project(&with_email).checksum,
        project(&CoreUser::new(1, "Ann", true)).checksum
    );
}

#[test]
fn combine_is_order_sensitive() {
    let a = "alpha";
    let b = "beta";
    assert_ne!(a.stable_hash(), b.stable_hash());

    assert_ne!(
        combine(CHECKSUM_SEED, &[&a, &b]),
        combine(CHECKSUM_SEED, &[&b, &a])
    );
}

#[test]
fn combine_with_no_fields_returns_seed() {
    assert_eq!(combine(CHECKSUM_SEED, &[]), CHECKSUM_SEED);
    assert_eq!(combine(42, &[]), 42);
}

#[test]
fn assemble_numbers_items_from_zero_in_order() {
    init_logging();
    let items = assemble(&users());

    let ids: Vec<u64> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    let titles: Vec<&str> = items.iter().map(|item| item.title.as_str()).collect();
    assert_eq!(titles, vec!["User Ann", "User Bob", "User Cid"]);
    assert_eq!(items[0].user_summary.id, 40);
}

#[test]
fn subtitle_follows_activity() {
    let input = users();
    let items = assemble(&input);

    for (entity, item) in input.iter().zip(&items) {
        let expected = if entity.is_active { "Active" } else { "Inactive" };
        assert_eq!(item.subtitle.as_deref(), Some(expected));
    }
}

#[test]
fn empty_input_yields_empty_feed() {
    init_logging();
    let items = assemble::<CoreUser>(&[]);
    assert!(items.is_empty());

    let view = present(&items);
    assert!(view.items().is_empty());
    assert!(!view.is_loading());
    assert_eq!(view.error_message(), None);
    assert!(view.header().contains("(0)"));
}

#[test]
fn empty_state_differs_from_zero_item_feed_only_by_header() {
    let zero = present(&[]);
    let empty = ViewState::empty();

    assert_eq!(zero.items(), empty.items());
    assert_eq!(zero.is_loading(), empty.is_loading());
    assert_eq!(zero.error_message(), empty.error_message());
    assert_eq!(zero.header(), "Feed (0)");
    assert_eq!(empty.header(), "No data");
    assert_ne!(zero, empty);
}

#[test]
fn present_numbers_titles_from_one() {
    let view = present(&assemble(&users()));

    assert_eq!(
        view,
        ViewState::Loaded {
            header: UiText::new("Feed (3)"),
            items: vec![
                RenderItem {
                    id: 0,
                    title: "1. User Ann".to_string(),
                    subtitle: Some("Active".to_string()),
                    selected: true,
                },
                RenderItem {
                    id: 1,
                    title: "2. User Bob".to_string(),
                    subtitle: Some("Inactive".to_string()),
                    selected: false,
                },
                RenderItem {
                    id: 2,
                    title: "3. User Cid".to_string(),
                    subtitle: Some("Active".to_string()),
                    selected: true,
                },
            ],
        }
    );
}

#[test]
fn vertical_prefix_is_prepended_to_header() {
    let config = VerticalConfig {
        header_prefix: Some("Feat11".to_string()),
        ..VerticalConfig::named("feat11")
    };
    let view = ViewMapper::for_vertical(&config).present(&assemble(&users()[..1]));

    assert_eq!(view.header(), "Feat11 Feed (1)");
}

#[test]
fn each_state_sets_at_most_one_signal() {
    let states = vec![
        present(&assemble(&sequential_users(4))),
        present(&[]),
        ViewState::empty(),
        ViewState::loading(),
        ViewState::error("boom"),
    ];

    for state in &states {
        let signals = [
            !state.items().is_empty(),
            state.is_loading(),
            state.error_message().is_some(),
        ];
        assert!(signals.iter().filter(|set| **set).count() <= 1, "{state:?}");
    }

    assert_eq!(ViewState::loading().header(), "Loading...");
    assert!(ViewState::loading().is_loading());
    assert_eq!(ViewState::error("boom").header(), "Error");
    assert_eq!(ViewState::error("boom").error_message(), Some("boom"));
}

#[test]
fn sequential_users_mark_every_third_inactive() {
    let users = sequential_users(4);
    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    let active: Vec<bool> = users.iter().map(|u| u.is_active).collect();

    assert_eq!(names, vec!["User-0", "User-1", "User-2", "User-3"]);
    assert_eq!(active, vec![false, true, true, false]);
}
