#![allow(dead_code)]

use qomplot::{Chart, Dataset, QomPlotConfig};

/// Six sessions, subject `s1` recorded twice.
///
/// | knees \ eyes | unchecked         | checked  |
/// |--------------|-------------------|----------|
/// | unchecked    | s1, s2, s3, s1    | s3, s5   |
/// | checked      | s4                | (none)   |
pub const SESSIONS_CSV: &str = "\
Subject,Group,Age,Music listening hours/week,Locked knees?,Eyes open?,Mean QoM w M,Mean QoM w/oM
s1,A,20,1,0,0,2,1
s2,A,25,2,0,0,4,2
s3,B,30,3,0,0.5,6,3
s4,B,35,4,1,0,8,4
s5,C,40,5,0,1,10,5
s1,A,21,6,0,0,12,6
";

pub const MUSIC_HOURS: &str = "Music listening hours/week";

pub fn sessions() -> Dataset {
    Dataset::from_reader(SESSIONS_CSV.as_bytes()).expect("fixture parses")
}

pub fn chart_at(now: f64) -> Chart {
    Chart::new(sessions(), &QomPlotConfig::default(), now)
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
