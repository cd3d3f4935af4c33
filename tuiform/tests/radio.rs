use tuiform::{FocusState, RadioGroup, RadioItem, Selection};

fn three_options() -> RadioGroup {
    RadioGroup::new("groupname")
        .item(RadioItem::new("Value 1").label("Option 1"))
        .item(RadioItem::new("Value 2").label("Option 2"))
        .item(RadioItem::new("Value 3").label("Option 3"))
}

// ============================================================================
// Selection derivation
// ============================================================================

#[test]
fn test_value_empty_when_nothing_checked() {
    let group = three_options();
    assert_eq!(group.selection(), Selection::None);
    assert_eq!(group.current_value(), "");
}

#[test]
fn test_value_matches_unique_checked_item() {
    let group = RadioGroup::new("groupname")
        .item(RadioItem::new("Value 1"))
        .item(RadioItem::new("Value 2").checked(true))
        .item(RadioItem::new("Value 3"));

    assert_eq!(group.selection(), Selection::One(1));
    assert_eq!(group.current_value(), "Value 2");
}

#[test]
fn test_multiple_checked_items_are_ambiguous() {
    let group = RadioGroup::new("groupname")
        .item(RadioItem::new("Value 1"))
        .item(RadioItem::new("Value 2").checked(true))
        .item(RadioItem::new("Value 3").checked(true));

    assert_eq!(group.selection(), Selection::Ambiguous);
    assert_eq!(group.current_value(), "");
}

#[test]
fn test_ambiguous_never_self_resolves() {
    let mut group = RadioGroup::new("groupname")
        .item(RadioItem::new("Value 1").checked(true))
        .item(RadioItem::new("Value 2").checked(true));

    // Reading state repeatedly must not collapse it
    for _ in 0..3 {
        assert_eq!(group.selection(), Selection::Ambiguous);
        assert_eq!(group.current_value(), "");
    }

    // A click does collapse it
    assert!(group.click_item(0));
    assert_eq!(group.selection(), Selection::One(0));
    assert_eq!(group.current_value(), "Value 1");
}

// ============================================================================
// Item clicks
// ============================================================================

#[test]
fn test_click_item_unchecks_siblings() {
    let mut group = three_options();

    assert!(group.click_item(1));
    assert!(group.items[1].checked);
    assert!(!group.items[0].checked);
    assert!(!group.items[2].checked);
    assert_eq!(group.current_value(), "Value 2");

    assert!(group.click_item(2));
    assert!(group.items[2].checked);
    assert!(!group.items[1].checked);
    assert_eq!(group.current_value(), "Value 3");
}

#[test]
fn test_click_item_on_disabled_item_is_noop() {
    let mut group = three_options();
    group.items[1].disabled = true;

    assert!(!group.click_item(1));
    assert_eq!(group.selection(), Selection::None);
    assert_eq!(group.current_value(), "");
}

#[test]
fn test_click_already_checked_item_is_not_a_change() {
    let mut group = three_options();
    assert!(group.click_item(0));
    assert!(!group.click_item(0));
    assert_eq!(group.current_value(), "Value 1");
}

#[test]
fn test_click_item_out_of_bounds_is_noop() {
    let mut group = three_options();
    assert!(!group.click_item(7));
    assert_eq!(group.selection(), Selection::None);
}

// ============================================================================
// Group click delegation
// ============================================================================

#[test]
fn test_group_click_selects_first_enabled_item() {
    let mut group = three_options();
    assert!(group.click());
    assert_eq!(group.current_value(), "Value 1");
}

#[test]
fn test_group_click_skips_leading_disabled_items() {
    let mut group = three_options();
    group.items[0].disabled = true;

    assert!(group.click());
    assert_eq!(group.current_value(), "Value 2");
}

#[test]
fn test_group_click_is_noop_when_a_selection_exists() {
    let mut group = three_options();
    group.click_item(2);

    assert!(!group.click());
    assert!(group.items[2].checked);
    assert_eq!(group.current_value(), "Value 3");
}

#[test]
fn test_group_click_is_noop_when_ambiguous() {
    let mut group = RadioGroup::new("groupname")
        .item(RadioItem::new("Value 1").checked(true))
        .item(RadioItem::new("Value 2").checked(true));

    assert!(!group.click());
    assert_eq!(group.selection(), Selection::Ambiguous);
}

#[test]
fn test_group_click_with_all_items_disabled_is_noop() {
    let mut group = three_options();
    group.set_disabled(true);

    assert!(!group.click());
    assert_eq!(group.selection(), Selection::None);
}

// ============================================================================
// Programmatic value set
// ============================================================================

#[test]
fn test_set_value_checks_matching_item_and_unchecks_rest() {
    let mut group = three_options();
    group.click_item(0);

    assert!(group.set_value("Value 3"));
    assert!(!group.items[0].checked);
    assert!(group.items[2].checked);
    assert_eq!(group.current_value(), "Value 3");
}

#[test]
fn test_set_value_without_match_leaves_state_untouched() {
    let mut group = three_options();
    group.click_item(1);

    assert!(!group.set_value("nope"));
    assert!(group.items[1].checked);
    assert_eq!(group.current_value(), "Value 2");
}

#[test]
fn test_set_value_collapses_ambiguous_state() {
    let mut group = RadioGroup::new("groupname")
        .item(RadioItem::new("Value 1").checked(true))
        .item(RadioItem::new("Value 2").checked(true))
        .item(RadioItem::new("Value 3"));

    assert!(group.set_value("Value 1"));
    assert_eq!(group.selection(), Selection::One(0));
}

#[test]
fn test_start_value_checks_only_the_matching_item() {
    let group = RadioGroup::new("numbers")
        .item(RadioItem::new("1").label("one"))
        .item(RadioItem::new("2").label("two"))
        .item(RadioItem::new("3").label("three"))
        .item(RadioItem::new("4").label("four"))
        .value("2");

    assert!(!group.items[0].checked);
    assert!(group.items[1].checked);
    assert!(!group.items[2].checked);
    assert!(!group.items[3].checked);
    assert_eq!(group.current_value(), "2");
}

// ============================================================================
// Focus delegation
// ============================================================================

#[test]
fn test_group_focus_targets_first_item() {
    let group = three_options();
    let mut focus = FocusState::new();

    assert!(group.focus(&mut focus));
    assert_eq!(focus.focused(), Some(group.items[0].id.as_str()));
}

#[test]
fn test_group_focus_skips_disabled_leading_items() {
    let mut group = three_options();
    group.items[0].disabled = true;
    let mut focus = FocusState::new();

    assert!(group.focus(&mut focus));
    assert_eq!(focus.focused(), Some(group.items[1].id.as_str()));
}

#[test]
fn test_group_focus_with_all_items_disabled_is_noop() {
    let mut group = three_options();
    group.set_disabled(true);
    let mut focus = FocusState::new();

    assert!(!group.focus(&mut focus));
    assert_eq!(focus.focused(), None);
}

// ============================================================================
// Shared attribute propagation
// ============================================================================

#[test]
fn test_name_is_propagated_to_items() {
    let group = three_options();
    for item in &group.items {
        assert_eq!(item.name, group.name());
    }
}

#[test]
fn test_set_name_re_propagates() {
    let mut group = three_options();
    group.set_name("renamed");

    assert_eq!(group.name(), "renamed");
    for item in &group.items {
        assert_eq!(item.name, "renamed");
    }
}

#[test]
fn test_set_disabled_propagates_to_every_item() {
    let mut group = three_options();
    group.set_disabled(true);

    assert!(group.is_disabled());
    for item in &group.items {
        assert!(item.disabled);
    }

    group.set_disabled(false);
    for item in &group.items {
        assert!(!item.disabled);
    }
}

#[test]
fn test_individually_disabled_item_survives_sync() {
    let mut group = three_options();
    group.items[0].disabled = true;

    // Re-syncing shared attributes must not clear an item's own flag
    group.sync_items();
    assert!(group.items[0].disabled);
    assert!(!group.items[1].disabled);
}

#[test]
fn test_pushed_item_inherits_shared_attributes() {
    let mut group = three_options();
    group.set_disabled(true);
    group.push_item(RadioItem::new("Value 4"));

    let added = &group.items[3];
    assert_eq!(added.name, group.name());
    assert!(added.disabled);
}

// ============================================================================
// View
// ============================================================================

#[test]
fn test_view_exposes_item_state() {
    use tuiform::{find_element, Content};

    let mut group = three_options().id("grp");
    group.click_item(1);
    group.items[2].disabled = true;

    let mut focus = FocusState::new();
    group.focus(&mut focus);
    let root = group.view(&focus);

    assert_eq!(root.id, "grp");
    let first = find_element(&root, &group.items[0].id).unwrap();
    assert!(first.focusable);
    assert!(first.focused);

    let third = find_element(&root, &group.items[2].id).unwrap();
    assert!(third.disabled);
    assert!(!third.clickable);

    // Checked marker on the selected item
    let second = find_element(&root, &group.items[1].id).unwrap();
    let Content::Children(children) = &second.content else {
        panic!("item row should have children");
    };
    let Content::Text(marker) = &children[0].content else {
        panic!("first child should be the marker");
    };
    assert_eq!(marker, "(•)");
}

#[test]
fn test_view_truncates_long_labels() {
    use tuiform::text::display_width;
    use tuiform::{find_element, Content, Size};

    let long_label = "a label far too wide to render in one row of any sane terminal";
    let group = RadioGroup::new("g").item(RadioItem::new("1").label(long_label));

    let focus = FocusState::new();
    let root = group.view(&focus);

    let row = find_element(&root, &group.items[0].id).unwrap();
    let Content::Children(children) = &row.content else {
        panic!("item row should have children");
    };
    let Content::Text(label) = &children[1].content else {
        panic!("second child should be the label");
    };

    assert!(label.ends_with('…'));
    assert!(display_width(label) <= 40);
    // Row width follows the truncated label, not the declared one
    assert_eq!(row.width, Size::Fixed((display_width(label) + 4) as u16));

    // The widget state itself keeps the full label
    assert_eq!(group.items[0].label, long_label);
}

#[test]
fn test_view_keeps_short_labels_intact() {
    use tuiform::{find_element, Content};

    let group = RadioGroup::new("g").item(RadioItem::new("1").label("short"));
    let focus = FocusState::new();
    let root = group.view(&focus);

    let row = find_element(&root, &group.items[0].id).unwrap();
    let Content::Children(children) = &row.content else {
        panic!("item row should have children");
    };
    let Content::Text(label) = &children[1].content else {
        panic!("second child should be the label");
    };
    assert_eq!(label, "short");
}
