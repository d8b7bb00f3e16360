use std::path::PathBuf;

use assert_approx_eq::assert_approx_eq;
use cost_spline::{table::CostTable, Spline, SplineError};

fn sdm632() -> CostTable {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/sdm632.json");
    CostTable::load(path).unwrap()
}

#[test]
fn sdm632_report() {
    let expected = "\
Little cluster
 633600 8
 902400 14
1113600 20
1401600 29
1536000 35
1612800 39


Big cluster
1113600 135
1401600 193
1747200 272
1804800 292";

    assert_eq!(expected, sdm632().render().unwrap());
}

#[test]
fn sdm632_big_cluster_costs() {
    let table = sdm632();
    let points = table.clusters[1].interpolate().unwrap();

    assert_approx_eq!(points[0].cost, 135.0945447640087, 1e-9);
    assert_eq!(points[1].cost, 193.0);
    assert_approx_eq!(points[2].cost, 272.1442135300694, 1e-9);
    assert_eq!(points[3].cost, 292.0);
}

#[test]
fn sdm632_samples_are_reproduced() {
    for cluster in sdm632().clusters {
        let spline = Spline::new(cluster.samples.clone()).unwrap();
        let x: Vec<f64> = cluster.samples.iter().map(|s| s.get_x()).collect();
        let y: Vec<f64> = cluster.samples.iter().map(|s| s.get_y()).collect();

        assert_eq!(y, spline.batch_evaluate(&x).unwrap());
    }
}

#[test]
fn rejects_short_and_unordered_sets() {
    assert!(matches!(
        Spline::from_xy(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]),
        Err(SplineError::InsufficientSamples { got: 3, required: 4 })
    ));
    assert!(matches!(
        Spline::from_xy(&[1.0, 1.0, 2.0], &[1.0, 2.0, 3.0]),
        Err(SplineError::NonMonotonicInput { .. })
    ));
}

#[test]
fn missing_table_file() {
    let result = CostTable::load("demos/does-not-exist.json");

    assert!(matches!(result, Err(cost_spline::TableError::Io(_))));
}
