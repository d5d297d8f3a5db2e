mod common;

use common::{sessions, MUSIC_HOURS};
use qomplot::Dataset;
use qomplot::data::filter::{filter, passes};
use qomplot::data::record::SetupFlag;
use qomplot::data::selection::Selection;

fn selection(knees_locked: bool, eyes_closed: bool) -> Selection {
    Selection {
        x_variable: MUSIC_HOURS.to_string(),
        knees_locked,
        eyes_closed,
    }
}

#[test]
fn toggles_select_matching_sessions() {
    let ds = sessions();
    let cases: [((bool, bool), Vec<usize>); 4] = [
        ((false, false), vec![0, 1, 2, 5]),
        ((true, false), vec![3]),
        ((false, true), vec![2, 4]),
        ((true, true), vec![]),
    ];
    for ((knees, eyes), expected) in cases {
        let subset = filter(ds.records(), &selection(knees, eyes));
        assert_eq!(subset.indices(), expected.as_slice(), "knees={knees} eyes={eyes}");
    }
}

#[test]
fn either_flag_is_visible_under_both_toggle_states() {
    let ds = sessions();
    // s3 has "Eyes open?" = 0.5
    for eyes in [false, true] {
        assert!(passes(&ds.records()[2], &selection(false, eyes)));
    }
}

#[test]
fn visible_records_always_match_the_toggles() {
    let ds = sessions();
    for knees in [false, true] {
        for eyes in [false, true] {
            let subset = filter(ds.records(), &selection(knees, eyes));
            for r in subset.records(&ds) {
                let k = r.locked_knees.unwrap();
                let e = r.eyes_open.unwrap();
                assert!(k == SetupFlag::Either || (k == SetupFlag::Yes) == knees);
                assert!(e == SetupFlag::Either || (e == SetupFlag::Yes) == eyes);
            }
        }
    }
}

#[test]
fn records_missing_the_x_variable_are_hidden() {
    let ds = Dataset::from_reader(
        "\
Subject,Group,Age,Locked knees?,Eyes open?,Mean QoM w M,Mean QoM w/oM
a,G,,0,0,1,1
b,G,30,0,0,2,2
"
        .as_bytes(),
    )
    .unwrap();
    let sel = Selection {
        x_variable: "Age".into(),
        knees_locked: false,
        eyes_closed: false,
    };
    assert_eq!(filter(ds.records(), &sel).indices(), [1usize]);
}

#[test]
fn records_missing_either_response_are_hidden() {
    let ds = Dataset::from_reader(
        "\
Subject,Group,Age,Locked knees?,Eyes open?,Mean QoM w M,Mean QoM w/oM
a,G,20,0,0,,1
b,G,25,0,0,2,
c,G,30,0,0,3,3
"
        .as_bytes(),
    )
    .unwrap();
    let sel = Selection {
        x_variable: "Age".into(),
        knees_locked: false,
        eyes_closed: false,
    };
    assert!(!passes(&ds.records()[0], &sel));
    assert!(!passes(&ds.records()[1], &sel));
    assert_eq!(filter(ds.records(), &sel).indices(), [2usize]);
}

#[test]
fn locked_knees_with_open_eyes_needs_both_toggles() {
    let ds = Dataset::from_reader(
        "\
Subject,Group,Age,Locked knees?,Eyes open?,Mean QoM w M,Mean QoM w/oM
a,G,20,1,1,2,1
b,G,25,1,0,4,2
"
        .as_bytes(),
    )
    .unwrap();
    let sel = |knees_locked, eyes_closed| Selection {
        x_variable: "Age".into(),
        knees_locked,
        eyes_closed,
    };
    assert_eq!(filter(ds.records(), &sel(true, false)).indices(), [1usize]);
    assert_eq!(filter(ds.records(), &sel(true, true)).indices(), [0usize]);
    assert!(filter(ds.records(), &sel(false, false)).is_empty());
    assert!(filter(ds.records(), &sel(false, true)).is_empty());
}
