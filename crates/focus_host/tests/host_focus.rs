mod common;

use common::{Rig, decimal, id, integer};
use focus_host::{FocusDirection, FocusError, FocusHost, HostConfig, OrderOptions};
use input_core::NumericValue;

fn three_fields(rig: &mut Rig, host: &mut FocusHost) {
    for raw in 1..=3 {
        let handle = rig.mount(raw, integer(4));
        host.register(id(raw), handle, &mut rig.endpoints).unwrap();
    }
    host.set_order([id(1), id(2), id(3)], OrderOptions::default(), &mut rig.endpoints)
        .unwrap();
    rig.clear_journal();
}

#[test]
fn set_active_twice_activates_once() {
    let mut rig = Rig::new();
    let mut host = FocusHost::default();
    three_fields(&mut rig, &mut host);

    host.set_active(Some(id(2)), &mut rig.endpoints).unwrap();
    host.set_active(Some(id(2)), &mut rig.endpoints).unwrap();

    assert_eq!(rig.focus_events(), ["2 become_active"]);
    assert_eq!(host.active_id(), Some(id(2)));
}

#[test]
fn switching_fields_resigns_before_activating() {
    let mut rig = Rig::new();
    let mut host = FocusHost::default();
    three_fields(&mut rig, &mut host);

    host.set_active(Some(id(1)), &mut rig.endpoints).unwrap();
    host.set_active(Some(id(3)), &mut rig.endpoints).unwrap();
    host.set_active(None, &mut rig.endpoints).unwrap();

    assert_eq!(
        rig.focus_events(),
        [
            "1 become_active",
            "1 resign_active",
            "3 become_active",
            "3 resign_active"
        ]
    );
    assert_eq!(host.active_id(), None);
}

#[test]
fn focus_next_walks_the_order_and_dismisses_at_the_end() {
    let mut rig = Rig::new();
    let mut host = FocusHost::default();
    three_fields(&mut rig, &mut host);

    host.focus_next(&mut rig.endpoints);
    assert_eq!(host.active_id(), Some(id(1)));
    host.focus_next(&mut rig.endpoints);
    host.focus_next(&mut rig.endpoints);
    assert_eq!(host.active_id(), Some(id(3)));

    host.focus_next(&mut rig.endpoints);
    assert_eq!(host.active_id(), None);
}

#[test]
fn focus_prev_from_nothing_starts_at_the_last_field() {
    let mut rig = Rig::new();
    let mut host = FocusHost::default();
    three_fields(&mut rig, &mut host);

    host.focus_prev(&mut rig.endpoints);
    assert_eq!(host.active_id(), Some(id(3)));

    host.set_active(Some(id(1)), &mut rig.endpoints).unwrap();
    host.focus_prev(&mut rig.endpoints);
    assert_eq!(host.active_id(), None);
}

#[test]
fn wrap_cycles_instead_of_dismissing() {
    let mut rig = Rig::new();
    let mut host = FocusHost::new(HostConfig {
        wrap: true,
        enforce_order: false,
    });
    three_fields(&mut rig, &mut host);

    host.set_active(Some(id(3)), &mut rig.endpoints).unwrap();
    host.focus_next(&mut rig.endpoints);
    assert_eq!(host.active_id(), Some(id(1)));
    host.move_focus(FocusDirection::Prev, &mut rig.endpoints);
    assert_eq!(host.active_id(), Some(id(3)));
}

#[test]
fn set_order_auto_inserts_missing_active() {
    let mut rig = Rig::new();
    let mut host = FocusHost::default();
    three_fields(&mut rig, &mut host);
    host.set_active(Some(id(1)), &mut rig.endpoints).unwrap();
    rig.clear_journal();

    let options = OrderOptions {
        preserve_active: false,
        auto_insert_active_if_missing: true,
    };
    host.set_order([id(2), id(3)], options, &mut rig.endpoints)
        .unwrap();

    assert_eq!(host.order(), [id(2), id(3), id(1)]);
    assert_eq!(host.active_id(), Some(id(1)));
    assert!(rig.focus_events().is_empty());
}

#[test]
fn set_order_preserve_retargets_to_first_entry() {
    let mut rig = Rig::new();
    let mut host = FocusHost::default();
    three_fields(&mut rig, &mut host);
    host.set_active(Some(id(1)), &mut rig.endpoints).unwrap();
    rig.clear_journal();

    let options = OrderOptions {
        preserve_active: true,
        auto_insert_active_if_missing: false,
    };
    host.set_order([id(3), id(2)], options, &mut rig.endpoints)
        .unwrap();

    assert_eq!(host.active_id(), Some(id(3)));
    assert_eq!(rig.focus_events(), ["1 resign_active", "3 become_active"]);
}

#[test]
fn set_order_without_options_clears_focus() {
    let mut rig = Rig::new();
    let mut host = FocusHost::default();
    three_fields(&mut rig, &mut host);
    host.set_active(Some(id(2)), &mut rig.endpoints).unwrap();

    host.set_order([id(1)], OrderOptions::default(), &mut rig.endpoints)
        .unwrap();
    assert_eq!(host.active_id(), None);

    host.set_active(Some(id(1)), &mut rig.endpoints).unwrap();
    host.set_order(
        [id(1), id(2)],
        OrderOptions::default(),
        &mut rig.endpoints,
    )
    .unwrap();
    assert_eq!(host.active_id(), Some(id(1)));
}

#[test]
fn duplicate_ids_in_order_are_refused() {
    let mut rig = Rig::new();
    let mut host = FocusHost::default();
    three_fields(&mut rig, &mut host);

    let err = host
        .set_order([id(1), id(2), id(1)], OrderOptions::default(), &mut rig.endpoints)
        .unwrap_err();
    assert_eq!(err, FocusError::DuplicateInOrder(id(1)));
    assert_eq!(host.order(), [id(1), id(2), id(3)]);
}

#[test]
fn enforced_order_refuses_outside_ids() {
    let mut rig = Rig::new();
    let mut host = FocusHost::new(HostConfig {
        wrap: false,
        enforce_order: true,
    });
    three_fields(&mut rig, &mut host);
    host.set_active(Some(id(1)), &mut rig.endpoints).unwrap();

    let err = host
        .set_active(Some(id(9)), &mut rig.endpoints)
        .unwrap_err();
    assert_eq!(err, FocusError::NotInOrder(id(9)));
    assert_eq!(err.to_string(), "field#9 is not in the tab order");
    assert_eq!(host.active_id(), Some(id(1)));
}

#[test]
fn unregistering_other_fields_keeps_focus() {
    let mut rig = Rig::new();
    let mut host = FocusHost::default();
    three_fields(&mut rig, &mut host);
    host.set_active(Some(id(2)), &mut rig.endpoints).unwrap();

    assert!(host.unregister(id(1)));
    assert!(host.unregister(id(3)));
    assert!(!host.unregister(id(7)));

    assert_eq!(host.active_id(), Some(id(2)));
    assert!(!host.is_pending());
    assert!(!host.is_registered(id(1)));
}

#[test]
fn activation_waits_for_registration() {
    let mut rig = Rig::new();
    let mut host = FocusHost::default();

    host.set_active(Some(id(5)), &mut rig.endpoints).unwrap();
    assert!(host.is_pending());
    assert!(rig.focus_events().is_empty());

    let handle = rig.mount(5, integer(3));
    host.register(id(5), handle, &mut rig.endpoints).unwrap();
    assert!(!host.is_pending());
    assert_eq!(rig.focus_events(), ["5 become_active"]);
}

#[test]
fn unregistering_active_field_leaves_it_pending() {
    let mut rig = Rig::new();
    let mut host = FocusHost::default();
    three_fields(&mut rig, &mut host);
    host.set_active(Some(id(1)), &mut rig.endpoints).unwrap();
    rig.clear_journal();

    host.unregister(id(1));
    assert_eq!(host.active_id(), Some(id(1)));
    assert!(host.is_pending());

    let remounted = rig.mount(1, integer(4));
    host.register(id(1), remounted, &mut rig.endpoints).unwrap();
    assert_eq!(rig.focus_events(), ["1 become_active"]);
    assert!(!host.is_pending());
}

#[test]
fn registering_stale_handle_is_an_error() {
    let mut rig = Rig::new();
    let mut host = FocusHost::default();
    let handle = rig.mount(1, integer(3));
    rig.endpoints.unmount(handle);

    let err = host
        .register(id(1), handle, &mut rig.endpoints)
        .unwrap_err();
    assert_eq!(err, FocusError::Unmounted(id(1)));
    assert!(!host.is_registered(id(1)));
}

#[test]
fn unmounted_endpoint_defers_activation() {
    let mut rig = Rig::new();
    let mut host = FocusHost::default();
    three_fields(&mut rig, &mut host);
    let handle = rig.mount(4, integer(3));
    host.register(id(4), handle, &mut rig.endpoints).unwrap();
    rig.endpoints.unmount(handle);
    rig.clear_journal();

    host.set_active(Some(id(4)), &mut rig.endpoints).unwrap();
    assert!(host.is_pending());
    assert!(rig.focus_events().is_empty());

    let remounted = rig.mount(4, integer(3));
    host.register(id(4), remounted, &mut rig.endpoints).unwrap();
    assert_eq!(rig.focus_events(), ["4 become_active"]);
}

#[test]
fn resign_finalizes_the_display_value() {
    let mut rig = Rig::new();
    let mut host = FocusHost::default();
    let handle = rig.mount(1, decimal());
    host.register_with_value(id(1), handle, NumericValue::new("4."), &mut rig.endpoints)
        .unwrap();
    host.set_active(Some(id(1)), &mut rig.endpoints).unwrap();

    host.set_active(None, &mut rig.endpoints).unwrap();
    assert_eq!(host.value(id(1)), Some(&NumericValue::new("4")));
    assert_eq!(rig.shown(handle), Some("4"));
}

#[test]
fn registering_seeds_value_once() {
    let mut rig = Rig::new();
    let mut host = FocusHost::default();
    let handle = rig.mount(1, integer(3));
    host.register_with_value(id(1), handle, NumericValue::new("12"), &mut rig.endpoints)
        .unwrap();
    host.register_with_value(id(1), handle, NumericValue::new("99"), &mut rig.endpoints)
        .unwrap();

    assert_eq!(host.value(id(1)).map(|v| v.text.as_str()), Some("12"));
    assert_eq!(rig.shown(handle), Some("12"));
}
