use qomplot::data::scale::{
    extent, nice_domain, nice_extent, tick_decimals, ticks, LinearScale, DEFAULT_DOMAIN,
    TICK_COUNT,
};

#[test]
fn nice_rounds_outward_to_tick_step() {
    assert_eq!(nice_domain([0.3, 9.7], TICK_COUNT), [0.0, 10.0]);
    assert_eq!(nice_domain([1.2, 38.5], TICK_COUNT), [0.0, 40.0]);
    assert_eq!(nice_domain([1.0, 6.0], TICK_COUNT), [1.0, 6.0]);
}

#[test]
fn nice_keeps_reversed_domains_reversed() {
    assert_eq!(nice_domain([9.7, 0.3], TICK_COUNT), [10.0, 0.0]);
}

#[test]
fn degenerate_extents() {
    assert_eq!(nice_extent(None), DEFAULT_DOMAIN);
    assert_eq!(nice_extent(Some([4.0, 4.0])), [3.0, 5.0]);
    assert_eq!(extent(Vec::<f64>::new()), None);
    assert_eq!(extent([3.0, f64::NAN, -1.0, 7.5]), Some([-1.0, 7.5]));
}

#[test]
fn ticks_land_on_round_values() {
    assert_eq!(
        ticks(0.0, 10.0, 10),
        (0..=10).map(f64::from).collect::<Vec<_>>()
    );
    let t = ticks(0.0, 1.0, 10);
    assert_eq!(t.len(), 11);
    assert_eq!(t[2], 0.2);
    assert_eq!(ticks(0.0, 40.0, 10)[1], 5.0);
    assert!(ticks(0.0, 1.0, 0).is_empty());
}

#[test]
fn tick_label_precision_follows_step() {
    assert_eq!(tick_decimals(5.0), 0);
    assert_eq!(tick_decimals(1.0), 0);
    assert_eq!(tick_decimals(0.5), 1);
    assert_eq!(tick_decimals(0.1), 1);
    assert_eq!(tick_decimals(0.05), 2);
}

#[test]
fn forward_and_invert() {
    let x = LinearScale::new([0.0, 10.0], [0.0, 100.0]);
    assert_eq!(x.forward(2.5), 25.0);
    assert_eq!(x.invert(25.0), 2.5);

    // y grows upwards, pixels grow downwards
    let y = LinearScale::new([0.0, 10.0], [480.0, 0.0]);
    assert_eq!(y.forward(0.0), 480.0);
    assert_eq!(y.forward(10.0), 0.0);
    assert_eq!(y.invert(240.0), 5.0);
}

#[test]
fn zero_width_domain_maps_to_range_midpoint() {
    let s = LinearScale::new([2.0, 2.0], [0.0, 100.0]);
    assert_eq!(s.forward(2.0), 50.0);
    assert_eq!(s.forward(-7.0), 50.0);
}
