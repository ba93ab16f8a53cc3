//! Tests for the `GreedyScheduler`.

use super::*;
use crate::DEPOT;
use crate::test_support::{close, order, vehicle};
use rstest::rstest;

fn ids(values: &[&str]) -> Vec<RecordId> {
    values.iter().copied().map(RecordId::from).collect()
}

#[rstest]
fn single_feasible_order_is_bound() {
    let mut vehicles = vec![vehicle(1_u64, 10.0, 5.0, 20.0)];
    let mut orders = vec![order("A", 3, 4, 5.0, 1)];

    let outcome = assign(&mut vehicles, &mut orders);

    assert!(outcome.is_complete());
    let [drone] = vehicles.as_slice() else {
        panic!("expected exactly one vehicle");
    };
    assert_eq!(drone.orders(), ids(&["A"]).as_slice());
    assert!(close(drone.remaining_capacity(), 0.0));
    assert!(close(drone.remaining_range(), 6.0));
    assert_eq!(drone.total_distance(), 14);
    assert_eq!(drone.position(), DEPOT);
    assert!(close(drone.travel_time(), 0.7));
}

#[rstest]
fn overweight_order_is_dropped() {
    let mut vehicles = vec![vehicle(1_u64, 10.0, 5.0, 20.0)];
    let mut orders = vec![order("A", 3, 4, 6.0, 1)];

    let outcome = assign(&mut vehicles, &mut orders);

    assert_eq!(outcome.unassigned, ids(&["A"]));
    assert!(vehicles.iter().all(|v| v.orders().is_empty()));
    assert!(vehicles.iter().all(|v| close(v.remaining_capacity(), 5.0)));
}

#[rstest]
fn fastest_feasible_vehicle_wins() {
    let mut vehicles = vec![vehicle(1_u64, 10.0, 5.0, 50.0), vehicle(2_u64, 15.0, 5.0, 50.0)];
    let mut orders = vec![order("A", 1, 1, 1.0, 1)];

    assign(&mut vehicles, &mut orders);

    let [slow, fast] = vehicles.as_slice() else {
        panic!("expected two vehicles");
    };
    assert!(slow.orders().is_empty());
    assert_eq!(fast.orders(), ids(&["A"]).as_slice());
}

#[rstest]
fn equal_speed_keeps_first_listed_vehicle() {
    let mut vehicles = vec![vehicle("first", 12.0, 5.0, 50.0), vehicle("second", 12.0, 5.0, 50.0)];
    let mut orders = vec![order("A", 2, 0, 1.0, 1)];

    assign(&mut vehicles, &mut orders);

    let [first, second] = vehicles.as_slice() else {
        panic!("expected two vehicles");
    };
    assert_eq!(first.orders(), ids(&["A"]).as_slice());
    assert!(second.orders().is_empty());
}

#[rstest]
fn faster_vehicle_is_skipped_when_infeasible() {
    let mut vehicles = vec![
        vehicle(1_u64, 10.0, 5.0, 50.0),
        vehicle(2_u64, 30.0, 5.0, 50.0).with_availability(false),
        vehicle(3_u64, 20.0, 1.0, 50.0),
        vehicle(4_u64, 25.0, 5.0, 4.0),
    ];
    let mut orders = vec![order("A", 2, 2, 3.0, 1)];

    assign(&mut vehicles, &mut orders);

    let assigned: Vec<&RecordId> = vehicles
        .iter()
        .filter(|v| !v.orders().is_empty())
        .map(Vehicle::id)
        .collect();
    assert_eq!(assigned, vec![&RecordId::from(1_u64)]);
}

#[rstest]
fn orders_are_processed_by_deadline() {
    let mut vehicles = vec![vehicle(1_u64, 10.0, 10.0, 100.0)];
    let mut orders = vec![
        order("late", 1, 0, 1.0, 9),
        order("urgent", 2, 0, 1.0, 1),
        order("middle", 3, 0, 1.0, 5),
    ];

    assign(&mut vehicles, &mut orders);

    let deadlines: Vec<u64> = orders.iter().map(Order::deadline).collect();
    assert_eq!(deadlines, vec![1, 5, 9]);
    let [drone] = vehicles.as_slice() else {
        panic!("expected exactly one vehicle");
    };
    assert_eq!(drone.orders(), ids(&["urgent", "middle", "late"]).as_slice());
}

#[rstest]
fn equal_deadlines_keep_input_order() {
    let mut vehicles = vec![vehicle(1_u64, 10.0, 10.0, 100.0)];
    let mut orders = vec![
        order("b", 1, 0, 1.0, 3),
        order("a", 2, 0, 1.0, 3),
        order("c", 3, 0, 1.0, 3),
    ];

    assign(&mut vehicles, &mut orders);

    let [drone] = vehicles.as_slice() else {
        panic!("expected exactly one vehicle");
    };
    assert_eq!(drone.orders(), ids(&["b", "a", "c"]).as_slice());
}

#[rstest]
fn urgent_order_consumes_capacity_before_later_ones() {
    let mut vehicles = vec![vehicle(1_u64, 10.0, 4.0, 100.0)];
    let mut orders = vec![order("later", 1, 0, 3.0, 2), order("sooner", 1, 0, 3.0, 1)];

    let outcome = assign(&mut vehicles, &mut orders);

    assert_eq!(outcome.unassigned, ids(&["later"]));
    let [drone] = vehicles.as_slice() else {
        panic!("expected exactly one vehicle");
    };
    assert_eq!(drone.orders(), ids(&["sooner"]).as_slice());
    assert!(close(drone.remaining_capacity(), 1.0));
}

#[rstest]
fn range_budget_is_charged_per_round_trip() {
    let mut vehicles = vec![vehicle(1_u64, 10.0, 10.0, 20.0)];
    let mut orders = vec![
        order("A", 2, 3, 1.0, 1),
        order("B", 0, 4, 1.0, 2),
        order("C", 1, 0, 1.0, 3),
    ];

    let outcome = assign(&mut vehicles, &mut orders);

    // A costs 10, B costs 8, C would need 2 with 2 remaining.
    assert!(outcome.is_complete());
    let [drone] = vehicles.as_slice() else {
        panic!("expected exactly one vehicle");
    };
    assert_eq!(drone.total_distance(), 20);
    assert!(close(drone.remaining_range(), 0.0));
}

#[rstest]
fn empty_inputs_are_a_no_op() {
    let mut vehicles: Vec<Vehicle> = Vec::new();
    let mut orders = vec![order("A", 1, 1, 1.0, 1)];
    let without_fleet = assign(&mut vehicles, &mut orders);
    assert_eq!(without_fleet.unassigned, ids(&["A"]));

    let mut fleet = vec![vehicle(1_u64, 10.0, 5.0, 20.0)];
    let without_orders = assign(&mut fleet, &mut []);
    assert!(without_orders.is_complete());
    assert!(fleet.iter().all(|v| v.orders().is_empty()));
}

#[rstest]
fn repeated_runs_produce_identical_assignments() {
    let build = || {
        (
            vec![
                vehicle(1_u64, 10.0, 6.0, 40.0),
                vehicle(2_u64, 15.0, 4.0, 30.0),
                vehicle(3_u64, 15.0, 8.0, 60.0),
            ],
            vec![
                order("A", 3, 4, 2.0, 3),
                order("B", -2, 1, 3.0, 1),
                order("C", 5, -5, 4.0, 2),
                order("D", 0, 9, 1.0, 3),
                order("E", 7, 7, 5.0, 4),
            ],
        )
    };
    let (mut first_fleet, mut first_orders) = build();
    let (mut second_fleet, mut second_orders) = build();

    let first = assign(&mut first_fleet, &mut first_orders);
    let second = assign(&mut second_fleet, &mut second_orders);

    assert_eq!(first, second);
    assert_eq!(first_fleet, second_fleet);
}

#[rstest]
#[case::range_just_short(vehicle(1_u64, 10.0, 5.0, 13.5), order("A", 3, 4, 1.0, 1), false)]
#[case::range_with_slack(vehicle(1_u64, 10.0, 5.0, 14.25), order("A", 3, 4, 1.0, 1), true)]
#[case::payload_just_short(vehicle(1_u64, 10.0, 2.4, 20.0), order("A", 3, 4, 2.5, 1), false)]
#[case::payload_exact(vehicle(1_u64, 10.0, 2.5, 20.0), order("A", 3, 4, 2.5, 1), true)]
fn fractional_budgets_decide_feasibility(
    #[case] drone: Vehicle,
    #[case] parcel: Order,
    #[case] placed: bool,
) {
    let mut vehicles = vec![drone];
    let mut orders = vec![parcel];

    let outcome = assign(&mut vehicles, &mut orders);

    assert_eq!(outcome.is_complete(), placed);
    assert!(vehicles.iter().all(|v| v.remaining_capacity() >= 0.0));
}
