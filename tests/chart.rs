mod common;

use common::{approx, chart_at, sessions, MUSIC_HOURS};
use qomplot::data::interaction::InteractionState;
use qomplot::data::record::Condition;
use qomplot::data::scale::DEFAULT_DOMAIN;
use qomplot::data::scene::{SceneElement, Y_AXIS_LABEL};
use qomplot::events::Hover;
use qomplot::{Chart, ChartError, PointerEvent, QomPlotConfig, SelectionEvent};

const SETTLED: f64 = 10.0;

fn select(chart: &mut Chart, event: SelectionEvent, now: f64) {
    chart.dispatch(event.into(), now).unwrap();
}

fn move_to(chart: &mut Chart, position: [f64; 2]) {
    chart
        .dispatch(
            PointerEvent::Moved {
                position,
                hit_radius: [5.0, 5.0],
            }
            .into(),
            SETTLED,
        )
        .unwrap();
}

#[test]
fn first_update_draws_every_visible_record() {
    let chart = chart_at(0.0);
    assert_eq!(chart.selection().x_variable, MUSIC_HOURS);
    assert_eq!(chart.visible().indices(), [0usize, 1, 2, 5]);
    for c in Condition::ALL {
        assert_eq!(chart.scene().series(c).marks.len(), 4);
        assert!(chart.scene().segment(c).visible);
    }
    assert_eq!(chart.scene().x_axis.label, MUSIC_HOURS);
    assert_eq!(chart.scene().y_axis.label, Y_AXIS_LABEL);
    assert_eq!(chart.scales().x.domain, [1.0, 6.0]);
    assert_eq!(chart.scales().y.domain, [1.0, 12.0]);
}

#[test]
fn fits_follow_visible_subset() {
    let chart = chart_at(0.0);
    let with = chart.fit_for(Condition::WithMusic).defined().unwrap();
    let without = chart.fit_for(Condition::WithoutMusic).defined().unwrap();
    assert!(approx(with.slope, 2.0) && approx(with.intercept, 0.0));
    assert!(approx(without.slope, 1.0) && approx(without.intercept, 0.0));
}

#[test]
fn entering_marks_grow_from_origin() {
    let chart = chart_at(0.0);
    let mark = &chart.scene().series(Condition::WithMusic).marks[0];
    assert_eq!(mark.position.value_at(0.0), [0.0, 0.0]);
    assert_ne!(mark.position.target(), [0.0, 0.0]);
    assert!(chart.is_animating(0.2));
    assert!(!chart.is_animating(SETTLED));
}

#[test]
fn reconcile_reports_enter_update_exit() {
    let mut chart = chart_at(0.0);
    // s3 stays, s5 enters, s1 (twice) and s2 leave; counted over both series.
    let stats = chart.select(SelectionEvent::EyesClosed(true), 1.0).unwrap();
    assert_eq!(chart.visible().indices(), [2usize, 4]);
    assert_eq!(stats.updated, 2);
    assert_eq!(stats.entered, 2);
    assert_eq!(stats.exited, 6);

    let stats = chart.on_selection_change(2.0);
    assert_eq!((stats.entered, stats.updated, stats.exited), (0, 4, 0));
}

#[test]
fn switching_variable_moves_marks_without_recreating_them() {
    let mut chart = chart_at(0.0);
    let keys_before: Vec<_> = chart
        .scene()
        .series(Condition::WithMusic)
        .marks
        .iter()
        .map(|m| m.key.clone())
        .collect();
    select(&mut chart, SelectionEvent::XVariable("Age".into()), 1.0);
    let keys_after: Vec<_> = chart
        .scene()
        .series(Condition::WithMusic)
        .marks
        .iter()
        .map(|m| m.key.clone())
        .collect();
    assert_eq!(keys_before, keys_after);
    assert_eq!(chart.scene().x_axis.label, "Age");
    assert_eq!(chart.scales().x.domain, [20.0, 30.0]);
}

#[test]
fn same_input_gives_same_scene() {
    let a = chart_at(0.0);
    let b = chart_at(0.0);
    assert_eq!(a.scene(), b.scene());

    let mut c = chart_at(0.0);
    let targets = |chart: &Chart| -> Vec<[f64; 2]> {
        chart
            .scene()
            .series
            .iter()
            .flat_map(|s| s.marks.iter().map(|m| m.position.target()))
            .collect()
    };
    let before = targets(&c);
    c.on_selection_change(SETTLED);
    assert_eq!(targets(&c), before);
}

#[test]
fn single_record_hides_regression_lines() {
    let mut chart = chart_at(0.0);
    select(&mut chart, SelectionEvent::KneesLocked(true), 1.0);
    assert_eq!(chart.visible().indices(), [3usize]);
    for c in Condition::ALL {
        assert!(!chart.fit_for(c).is_defined());
        assert!(!chart.scene().segment(c).visible);
        assert_eq!(chart.scene().series(c).marks.len(), 1);
    }
    assert_eq!(chart.scales().x.domain, [3.0, 5.0]);
    assert_eq!(chart.scales().y.domain, [4.0, 8.0]);
}

#[test]
fn empty_selection_clears_the_plot_and_recovers() {
    let mut chart = chart_at(0.0);
    select(&mut chart, SelectionEvent::KneesLocked(true), 1.0);
    select(&mut chart, SelectionEvent::EyesClosed(true), 2.0);
    assert!(chart.visible().is_empty());
    for c in Condition::ALL {
        assert!(chart.scene().series(c).marks.is_empty());
        assert!(!chart.scene().segment(c).visible);
    }
    assert_eq!(chart.scales().x.domain, DEFAULT_DOMAIN);
    assert_eq!(chart.scales().y.domain, DEFAULT_DOMAIN);

    move_to(&mut chart, [100.0, 100.0]);
    assert_eq!(chart.hover(), &Hover::Plot);
    assert_eq!(chart.interaction_state(), InteractionState::Idle);
    assert!(chart.readout().is_none());

    select(&mut chart, SelectionEvent::KneesLocked(false), 3.0);
    assert_eq!(chart.visible().indices(), [2usize, 4]);
    assert!(chart.scene().segment(Condition::WithMusic).visible);
}

#[test]
fn unknown_variable_is_rejected_without_side_effects() {
    let mut chart = chart_at(0.0);
    let scene_before = chart.scene().clone();
    let err = chart
        .dispatch(SelectionEvent::XVariable("Shoe size".into()).into(), 1.0)
        .unwrap_err();
    assert_eq!(err, ChartError::UnknownVariable("Shoe size".into()));
    assert_eq!(chart.selection().x_variable, MUSIC_HOURS);
    assert_eq!(chart.scene(), &scene_before);
}

#[test]
fn missing_default_variable_falls_back_to_first_candidate() {
    let cfg = QomPlotConfig {
        default_x_variable: "Height".into(),
        ..Default::default()
    };
    let chart = Chart::new(sessions(), &cfg, 0.0);
    assert_eq!(chart.selection().x_variable, "Age");
}

#[test]
fn hit_target_is_painted_below_everything() {
    let chart = chart_at(0.0);
    let order = chart.scene().paint_order();
    assert_eq!(order[0], SceneElement::HitTarget);
    let pos = |e: SceneElement| order.iter().position(|o| *o == e).unwrap();
    for c in Condition::ALL {
        assert!(pos(SceneElement::Segment(c)) < pos(SceneElement::Points(c)));
    }
    assert_eq!(order[order.len() - 1], SceneElement::Indicator);
}

// ─────────────────────────────────────────────────────────────────────────────
// Pointer interaction
// ─────────────────────────────────────────────────────────────────────────────

/// Plot area is 770 × 480 with the default geometry; x domain [1, 6].
fn px_for_x(x: f64) -> f64 {
    (x - 1.0) / 5.0 * 770.0
}

#[test]
fn tracking_shows_both_lines_and_their_difference() {
    let mut chart = chart_at(0.0);
    move_to(&mut chart, [px_for_x(3.0), 50.0]);
    assert_eq!(chart.hover(), &Hover::Plot);
    assert!(matches!(
        chart.interaction_state(),
        InteractionState::Tracking { .. }
    ));

    let readout = chart.readout().unwrap();
    let interp = readout.interpolation.unwrap();
    assert!(approx(readout.x, 3.0));
    assert!(approx(interp.y_with, 6.0));
    assert!(approx(interp.y_without, 3.0));
    assert!(approx(interp.difference, 3.0));
    assert!(approx(interp.midpoint, 4.5));
    assert_eq!(
        readout.lines(2),
        ["x: 3.00", "With Music: 6.00", "Without Music: 3.00", "Diff: 3.00"]
    );

    let ind = readout.indicator.unwrap();
    assert!(approx(ind.x, px_for_x(3.0)));
    assert!(ind.y1 < ind.y2, "higher value is drawn higher up");
}

#[test]
fn readout_tracks_refits_after_selection_change() {
    let mut chart = chart_at(0.0);
    move_to(&mut chart, [px_for_x(3.0), 50.0]);
    select(&mut chart, SelectionEvent::KneesLocked(true), SETTLED);
    // single record: both fits undefined
    assert!(chart.readout().is_none());
}

#[test]
fn hovering_a_point_shows_its_tooltip_instead_of_the_readout() {
    let mut chart = chart_at(0.0);
    let mark = chart.scene().series(Condition::WithMusic).marks[2].clone();
    move_to(&mut chart, mark.position.target());

    match chart.hover() {
        Hover::Point(hit) => {
            assert_eq!(hit.condition, Condition::WithMusic);
            assert_eq!(hit.key, mark.key);
        }
        other => panic!("expected point hover, got {other:?}"),
    }
    assert_eq!(chart.interaction_state(), InteractionState::Idle);
    assert!(chart.readout().is_none());

    let tip = chart.tooltip().unwrap();
    assert_eq!(
        tip.lines,
        [
            "Subject: s3",
            "Group: B",
            "Music listening hours/week: 3",
            "Mean QoM With Music: 6.00",
        ]
    );
}

#[test]
fn leaving_the_plot_returns_to_idle() {
    let mut chart = chart_at(0.0);
    move_to(&mut chart, [px_for_x(3.0), 50.0]);
    chart.dispatch(PointerEvent::Left.into(), SETTLED).unwrap();
    assert_eq!(chart.hover(), &Hover::Nothing);
    assert_eq!(chart.interaction_state(), InteractionState::Idle);

    move_to(&mut chart, [-20.0, 50.0]);
    assert_eq!(chart.hover(), &Hover::Nothing);
    assert!(chart.readout().is_none());
}

#[test]
fn constant_fractional_x_hides_both_lines() {
    let csv = "\
Subject,Group,Age,Locked knees?,Eyes open?,Mean QoM w M,Mean QoM w/oM
a,G,0.1,0,0,1.0,3.0
b,G,0.1,0,0,2.7,1.5
c,G,0.1,0,0,3.3,0.2
";
    let ds = qomplot::Dataset::from_reader(csv.as_bytes()).unwrap();
    let chart = Chart::new(ds, &QomPlotConfig::default(), 0.0);
    assert_eq!(chart.selection().x_variable, "Age");
    assert_eq!(chart.visible().len(), 3);
    for c in Condition::ALL {
        assert!(!chart.fit_for(c).is_defined());
        assert!(!chart.scene().segment(c).visible);
        assert_eq!(chart.scene().series(c).marks.len(), 3);
    }
}
