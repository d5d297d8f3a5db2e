use qomplot::data::transition::Tween;

#[test]
fn tween_reaches_target_after_duration() {
    let t = Tween::new(0.0, 10.0, 1.0, 0.5);
    assert_eq!(t.value_at(1.0), 0.0);
    assert_eq!(t.value_at(1.25), 5.0);
    assert_eq!(t.value_at(1.5), 10.0);
    assert!(!t.is_settled(1.2));
    assert!(t.is_settled(1.5));
}

#[test]
fn retarget_starts_from_current_value() {
    let mut t = Tween::new(0.0, 10.0, 0.0, 1.0);
    t.retarget(20.0, 0.5, 1.0);
    assert_eq!(t.value_at(0.5), 5.0);
    assert_eq!(t.value_at(1.0), 12.5);
    assert_eq!(t.value_at(1.5), 20.0);
    assert_eq!(t.target(), 20.0);
}

#[test]
fn zero_duration_jumps() {
    let mut t = Tween::fixed([1.0, 2.0]);
    t.retarget([3.0, 4.0], 0.0, 0.0);
    assert_eq!(t.value_at(0.0), [3.0, 4.0]);
    assert!(t.is_settled(0.0));
}
