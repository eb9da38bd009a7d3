//! End-to-end validation of the construction checksum against known-good
//! register values
//!
//! The scenario deliberately uses materials whose three properties sum to
//! the same total (5000), so a naive unweighted sum would collide. The
//! prime-and-layer weighting must keep every fingerprint distinct.

use construction_checksum_core::{checksum, Construction, Material, REGISTER_WIDTH};
use std::collections::HashSet;

/// Golden register for a two-layer construction of (10, 1000, 3990) over
/// (20, 990, 3990) at precision 1e9
const GOLDEN_TWO_LAYER: &str = "0000000000010111010100111000000101111000011000110011100000000000";

#[test]
fn test_two_layer_golden_checksum() {
    let c = Construction::from_materials(vec![
        Material::new(10.0, 1000.0, 3990.0),
        Material::new(20.0, 990.0, 3990.0),
    ]);
    let cs = checksum(&c);
    assert_eq!(cs.len(), REGISTER_WIDTH as usize);
    assert_eq!(cs.as_bits(), GOLDEN_TWO_LAYER);
}

#[test]
fn test_equal_sum_constructions_stay_distinct() {
    // Four materials whose property sums all equal 5000; the last two differ
    // from the second only in the ninth fractional digit
    let m1 = Material::new(10.0, 1000.0, 3990.0);
    let m2 = Material::new(20.0, 990.0, 3990.0);
    let m3 = Material::new(20.000000001, 990.0, 3989.999999999);
    let m4 = Material::new(20.0, 990.000000001, 3989.999999999);

    let constructions = [
        Construction::from_materials(vec![m1, m2]),
        Construction::from_materials(vec![m2, m1]),
        Construction::from_resistance(5000.0),
        Construction::from_materials(vec![m3, m4]),
        Construction::from_materials(vec![m4, m3]),
    ];

    let checksums: Vec<_> = constructions.iter().map(checksum).collect();
    let unique: HashSet<_> = checksums.iter().collect();
    assert_eq!(
        unique.len(),
        constructions.len(),
        "every construction must fingerprint differently: {checksums:#?}"
    );
}

#[test]
fn test_checksum_is_referentially_transparent() {
    let c = Construction::from_materials(vec![Material::concrete(), Material::gypsum_board()]);
    let first = checksum(&c);
    let second = checksum(&c.clone());
    assert_eq!(first, second);
}
