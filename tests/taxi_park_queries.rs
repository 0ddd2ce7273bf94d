use std::collections::HashSet;

use taxipark_analytics::ingestion::json::ingest_json_from_str;
use taxipark_analytics::processing::{
    check_pareto_principle, duration_period_of, find_fake_drivers, find_faithful_passengers,
    find_frequent_passengers, find_smart_passengers, find_the_most_frequent_trip_duration_period,
};
use taxipark_analytics::types::{Driver, Passenger, TaxiPark, Trip};

fn fixture_park() -> TaxiPark {
    ingest_json_from_str(include_str!("fixtures/park.json")).unwrap()
}

fn drivers(names: &[&str]) -> HashSet<Driver> {
    names.iter().map(|n| Driver::new(*n)).collect()
}

fn passengers(names: &[&str]) -> HashSet<Passenger> {
    names.iter().map(|n| Passenger::new(*n)).collect()
}

#[test]
fn fake_drivers_are_exactly_those_without_trips() {
    let park = fixture_park();
    let fake = find_fake_drivers(&park);
    assert_eq!(fake, drivers(&["D-3", "D-4"]));

    for d in &park.all_drivers {
        let drove = park.trips.iter().any(|t| &t.driver == d);
        assert_eq!(fake.contains(d), !drove, "driver {d}");
    }
}

#[test]
fn faithful_passengers_by_threshold() {
    let park = fixture_park();
    assert_eq!(find_faithful_passengers(&park, 0), park.all_passengers);
    assert_eq!(
        find_faithful_passengers(&park, 1),
        passengers(&["P-0", "P-1", "P-2", "P-3"])
    );
    assert_eq!(find_faithful_passengers(&park, 2), passengers(&["P-0", "P-1"]));
    assert_eq!(find_faithful_passengers(&park, 3), passengers(&["P-0"]));
    assert!(find_faithful_passengers(&park, 100).is_empty());
}

#[test]
fn frequent_passengers_match_trip_counts() {
    let park = fixture_park();
    assert_eq!(
        find_frequent_passengers(&park, &Driver::new("D-0")),
        passengers(&["P-0"])
    );

    for d in &park.all_drivers {
        let frequent = find_frequent_passengers(&park, d);
        for p in &park.all_passengers {
            let rides = park
                .trips
                .iter()
                .filter(|t| &t.driver == d && t.has_passenger(p))
                .count();
            assert_eq!(frequent.contains(p), rides > 1, "driver {d} passenger {p}");
        }
    }
}

#[test]
fn smart_passengers_have_discount_majority() {
    let park = fixture_park();
    assert_eq!(find_smart_passengers(&park), passengers(&["P-0", "P-1"]));
}

#[test]
fn smart_passengers_two_discounts_vs_one_plain() {
    let trip = |discount: Option<f64>| {
        let t = Trip::new(Driver::new("D-0"), [Passenger::new("P-0")], 10, 10.0);
        match discount {
            Some(d) => t.with_discount(d),
            None => t,
        }
    };

    let park = TaxiPark::builder()
        .driver("D-0")
        .passenger("P-0")
        .trip(trip(Some(0.1)))
        .trip(trip(Some(0.1)))
        .trip(trip(None))
        .build();
    assert_eq!(find_smart_passengers(&park), passengers(&["P-0"]));

    let park = TaxiPark::builder()
        .driver("D-0")
        .passenger("P-0")
        .trip(trip(Some(0.1)))
        .trip(trip(None))
        .build();
    assert!(find_smart_passengers(&park).is_empty());
}

#[test]
fn most_frequent_period_is_a_maximal_bucket() {
    let park = fixture_park();
    assert_eq!(find_the_most_frequent_trip_duration_period(&park), Some(0..=9));

    // Two buckets tie with two trips each; either is acceptable.
    let park = TaxiPark::builder()
        .driver("D-0")
        .passenger("P-0")
        .trip(Trip::new(Driver::new("D-0"), [Passenger::new("P-0")], 11, 1.0))
        .trip(Trip::new(Driver::new("D-0"), [Passenger::new("P-0")], 19, 1.0))
        .trip(Trip::new(Driver::new("D-0"), [Passenger::new("P-0")], 50, 1.0))
        .trip(Trip::new(Driver::new("D-0"), [Passenger::new("P-0")], 55, 1.0))
        .trip(Trip::new(Driver::new("D-0"), [Passenger::new("P-0")], 70, 1.0))
        .build();
    let period = find_the_most_frequent_trip_duration_period(&park).unwrap();
    let in_period = park.trips.iter().filter(|t| period.contains(&t.duration)).count();
    assert_eq!(in_period, 2);
    assert_eq!(duration_period_of(*period.start()), period);
}

#[test]
fn most_frequent_period_of_empty_park_is_absent() {
    let park = TaxiPark::builder().drivers(["D-0"]).build();
    assert_eq!(find_the_most_frequent_trip_duration_period(&park), None);
}

#[test]
fn pareto_principle_on_fixture() {
    // D-0 earns 85 of 100 and is the single top driver out of five.
    assert!(check_pareto_principle(&fixture_park()));
}

#[test]
fn pareto_principle_empty_and_truncated() {
    assert!(check_pareto_principle(&TaxiPark::builder().drivers(["D-0"]).build()));

    // A single driver earning everything still fails: 1 * 20 / 100 truncates to zero.
    let park = TaxiPark::builder()
        .driver("D-0")
        .passenger("P-0")
        .trip(Trip::new(Driver::new("D-0"), [Passenger::new("P-0")], 10, 50.0))
        .build();
    assert!(!check_pareto_principle(&park));
}
