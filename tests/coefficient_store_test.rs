mod common;

use approx::assert_relative_eq;
use common::{igrf13_store, DGRF_2015, IGRF13_SV_2020, IGRF_2020};
use geomag::coefficients::{DegreeTransition, EpochRecord};
use geomag::{CoefficientStore, GeomagError};

#[test]
fn test_predictive_epoch() {
    let store = igrf13_store();
    assert_eq!(store.len(), 3);
    assert_eq!(store.interval(), 5);
    assert_eq!((store.min_epoch(), store.max_epoch()), (2015, 2025));

    let predictive = store.record(2025).unwrap();
    assert_eq!(predictive.max_degree, 8);
    assert_eq!(predictive.coefficients.len(), 80);
    assert_relative_eq!(predictive.coefficients[0], -29376.3, epsilon = 1e-9);
    for (i, &value) in predictive.coefficients.iter().enumerate() {
        assert_relative_eq!(value, IGRF_2020[i] + 5.0 * IGRF13_SV_2020[i], epsilon = 1e-9);
    }
}

#[test]
fn test_published_epochs_returned_verbatim() {
    let store = igrf13_store();
    let resolved = store.resolve(2015.0).unwrap();
    assert_eq!(resolved.now, DGRF_2015.to_vec());
    assert_eq!(resolved.max_degree, 13);

    let resolved = store.resolve(2020.0).unwrap();
    assert_eq!(resolved.now, IGRF_2020.to_vec());
    assert_eq!(resolved.bracket, (2020, 2025));
}

#[test]
fn test_freeze_across_degree_drop() {
    let store = igrf13_store();
    let resolved = store.resolve(2022.5).unwrap();

    assert_eq!(resolved.transition, DegreeTransition::Freeze);
    assert_eq!(resolved.max_degree, 13);
    assert_eq!(resolved.now.len(), 195);
    assert!(!resolved.future_extrapolated);

    // 2022.5 is exactly half of the 2020-2025 bracket in calendar seconds
    assert_relative_eq!(resolved.now[0], -29390.55, epsilon = 1e-9);
    assert_relative_eq!(resolved.now[79], IGRF_2020[79] + 2.5 * IGRF13_SV_2020[79], epsilon = 1e-9);
    // degrees 9 to 13 keep their 2020 values
    assert_eq!(resolved.now[80..], IGRF_2020[80..]);
    assert_eq!(resolved.future[80..], IGRF_2020[80..]);
}

#[test]
fn test_lookahead_extrapolated_near_the_end() {
    let store = igrf13_store();

    let resolved = store.resolve(2023.9).unwrap();
    assert!(!resolved.future_extrapolated);

    let resolved = store.resolve(2024.5).unwrap();
    assert!(resolved.future_extrapolated);
    assert_relative_eq!(resolved.future[0], -29404.8 + 5.5 * 5.7, epsilon = 1e-9);
    assert_eq!(resolved.future[120], IGRF_2020[120]);

    let resolved = store.resolve(2025.0).unwrap();
    assert_eq!(resolved.bracket, (2020, 2025));
    assert!(resolved.future_extrapolated);
    assert_eq!(resolved.max_degree, 13);
}

#[test]
fn test_mismatched_final_bracket() {
    // without the degree drop the final bracket cannot be extrapolated
    let store = CoefficientStore::new(vec![
        EpochRecord::new(2015, 13, DGRF_2015.to_vec()),
        EpochRecord::new(2020, 13, IGRF_2020.to_vec()),
    ])
    .unwrap();

    assert!(store.resolve(2018.5).is_ok());
    assert_eq!(
        store.resolve(2019.5).unwrap_err(),
        GeomagError::DegreeMismatch {
            start_degree: 13,
            end_degree: 13,
        }
    );
}

#[test]
fn test_rejects_malformed_tables() {
    let short = EpochRecord::new(2020, 13, IGRF_2020[..194].to_vec());
    assert!(matches!(
        CoefficientStore::new(vec![EpochRecord::new(2015, 13, DGRF_2015.to_vec()), short]),
        Err(GeomagError::InvalidCoefficientTable(_))
    ));

    let unsorted = vec![
        EpochRecord::new(2020, 13, IGRF_2020.to_vec()),
        EpochRecord::new(2015, 13, DGRF_2015.to_vec()),
    ];
    assert!(matches!(
        CoefficientStore::new(unsorted),
        Err(GeomagError::InvalidCoefficientTable(_))
    ));

    let published = vec![
        EpochRecord::new(2015, 13, DGRF_2015.to_vec()),
        EpochRecord::new(2020, 13, IGRF_2020.to_vec()),
    ];
    assert!(matches!(
        CoefficientStore::with_secular_variation(published, 8, &IGRF13_SV_2020[..79]),
        Err(GeomagError::InvalidCoefficientTable(_))
    ));
}
