//! Property tests for the mixing-length kernel.
//!
//! A multi-column monotone fixture verifies that 1) the mixing length
//! increases with height given buoyancy frequency and TKE constant with
//! height, and 2) columns with larger TKE values produce a larger length
//! scale value.

use shoc_mix::verify::{
    check_inputs, check_mix_column_ordering, check_mix_height_ordering, check_mix_positive,
    PropertyCase, VerifyError,
};
use shoc_mix::{compute_shoc_mix_length, ColumnIndex, LevelIndex};

/// The canonical scenario: 3 columns, 5 levels, heights
/// {5000, 3000, 2000, 1000, 500} m, TKE = (column + 1) * 0.1 m2/s2,
/// brunt = 0.001 s-1, l_inf = 100 m, tscale = 300 s.
#[test]
fn test_property_concrete_scenario() {
    let case = PropertyCase::default();
    assert_eq!(case.shcol, 3);
    assert_eq!(case.zt_grid.len(), 5);
    // The cross-column checks need at least two columns
    assert!(case.shcol > 1);

    let mut d = case.fixture();
    assert!(check_inputs(&d).is_ok());

    compute_shoc_mix_length(
        d.shcol(),
        d.nlev(),
        &d.tke,
        &d.brunt,
        &d.tscale,
        &d.zt_grid,
        &d.l_inf,
        &mut d.shoc_mix,
    );

    // Mixing length greater than zero everywhere
    for s in 0..d.shcol() {
        for k in 0..d.nlev() {
            let offset = d.offset(ColumnIndex::new(s), LevelIndex::new(k));
            assert!(
                d.shoc_mix[offset] > 0.0,
                "non-positive mixing length at column {}, level {}",
                s,
                k
            );
        }
    }

    // Mixing length increases column by column with the TKE increase
    for s in 0..d.shcol() - 1 {
        for k in 0..d.nlev() {
            let lev = LevelIndex::new(k);
            let here = d.shoc_mix[d.offset(ColumnIndex::new(s), lev)];
            let next = d.shoc_mix[d.offset(ColumnIndex::new(s + 1), lev)];
            assert!(
                here < next,
                "mixing length did not grow with TKE at level {}: {} vs {}",
                k,
                here,
                next
            );
        }
    }

    // Mixing length increases upward, mirroring the height grid
    for s in 0..d.shcol() {
        let col = ColumnIndex::new(s);
        for k in 0..d.nlev() - 1 {
            let upper = d.shoc_mix[d.offset(col, LevelIndex::new(k))];
            let lower = d.shoc_mix[d.offset(col, LevelIndex::new(k + 1))];
            assert!(
                lower < upper,
                "mixing length did not grow with height in column {}: {} vs {}",
                s,
                lower,
                upper
            );
        }
    }

    // The harness checks agree with the inline loops above
    assert!(check_mix_positive(&d).is_ok());
    assert!(check_mix_column_ordering(&d).is_ok());
    assert!(check_mix_height_ordering(&d).is_ok());
}

#[test]
fn test_property_via_harness() {
    assert_eq!(PropertyCase::default().run(), Ok(()));
}

#[test]
fn test_property_wider_and_deeper_grid() {
    let case = PropertyCase {
        shcol: 6,
        zt_grid: vec![9000.0, 7000.0, 5000.0, 3500.0, 2000.0, 1200.0, 700.0, 300.0],
        tke_cons: 0.05,
        brunt_cons: 0.002,
        l_inf: 150.0,
        tscale: 400.0,
    };
    assert_eq!(case.run(), Ok(()));
}

#[test]
fn test_malformed_height_grid_is_reported_not_computed() {
    let case = PropertyCase {
        // Heights must decrease with level index; level 2 breaks that
        zt_grid: vec![5000.0, 3000.0, 4000.0, 1000.0, 500.0],
        ..PropertyCase::default()
    };
    let err = case.run().unwrap_err();
    assert!(matches!(
        err,
        VerifyError::LevelOrdering {
            field: "zt_grid",
            ..
        }
    ));
}
