use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// Writes `contents` to a fresh file in the temp directory and returns its path.
pub fn write_fixture(contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("lot-{}.txt", Uuid::new_v4()));
    fs::write(&path, contents).expect("Could not write lot fixture.");
    path
}

/// Builds a lot description from design rows and parking records.
pub fn lot_text(design: &[&str], parked: &[&str]) -> String {
    let mut text = design.join("\n");
    text.push_str("\n###\n");
    for record in parked {
        text.push_str(record);
        text.push('\n');
    }
    text
}

#[macro_export]
macro_rules! assert_parked (
    ($l:expr, $r:expr, $c:expr, $p:expr) => {{
        match $l.vehicle_at($r, $c) {
            Some(vehicle) => assert_eq!($p, vehicle.plate(), "Wrong car parked at ({}, {}).", $r, $c),
            None => panic!("Expected {} to be parked at ({}, {}), spot is empty.", $p, $r, $c),
        }
    }};
);

#[macro_export]
macro_rules! assert_unoccupied (
    ($l:expr, $r:expr, $c:expr) => {{
        if let Some(vehicle) = $l.vehicle_at($r, $c) {
            panic!("Expected ({}, {}) to be empty, found {}.", $r, $c, vehicle);
        }
    }};
);
