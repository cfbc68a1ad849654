// aquaguard-core/src/domain/potability/range_rule.rs
//
// The human-auditable half of the verdict: a fixed-range membership test
// over all nine readings. Both endpoints are inclusive.

use crate::domain::sample::WaterSample;

/// One ideal closed interval, paired with its canonical column name and unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealRange {
    pub column: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
}

impl IdealRange {
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// The nine ideal safe ranges, in canonical feature order.
pub const IDEAL_RANGES: [IdealRange; 9] = [
    IdealRange { column: "ph", unit: "", min: 6.5, max: 8.5 },
    IdealRange { column: "Hardness", unit: "mg/L", min: 120.0, max: 220.0 },
    IdealRange { column: "Solids", unit: "ppm", min: 5000.0, max: 25000.0 },
    IdealRange { column: "Chloramines", unit: "ppm", min: 6.0, max: 9.0 },
    IdealRange { column: "Sulfate", unit: "mg/L", min: 250.0, max: 400.0 },
    IdealRange { column: "Conductivity", unit: "µS/cm", min: 400.0, max: 700.0 },
    IdealRange { column: "Organic_carbon", unit: "mg/L", min: 8.0, max: 15.0 },
    IdealRange { column: "Trihalomethanes", unit: "µg/L", min: 50.0, max: 90.0 },
    IdealRange { column: "Turbidity", unit: "NTU", min: 2.0, max: 4.0 },
];

/// One reading that fell outside its ideal interval.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeViolation {
    pub range: IdealRange,
    pub value: f64,
}

/// Every reading outside its ideal closed interval, in canonical order.
/// Empty result means the rule passes.
pub fn violations(sample: &WaterSample) -> Vec<RangeViolation> {
    let features = sample.as_features();
    IDEAL_RANGES
        .iter()
        .zip(features)
        .filter(|(range, value)| !range.contains(*value))
        .map(|(range, value)| RangeViolation { range: *range, value })
        .collect()
}

/// `true` iff all nine readings sit inside their ideal ranges (inclusive on
/// both ends). A single out-of-range reading fails the whole record.
pub fn is_in_safe_range(sample: &WaterSample) -> bool {
    violations(sample).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample::typical_sample;

    #[test]
    fn test_typical_sample_passes_rule() {
        assert!(is_in_safe_range(&typical_sample()));
        assert!(violations(&typical_sample()).is_empty());
    }

    #[test]
    fn test_single_out_of_range_field_fails_record() {
        let mut s = typical_sample();
        s.ph = 2.0;
        assert!(!is_in_safe_range(&s));
        let v = violations(&s);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].range.column, "ph");
        assert_eq!(v[0].value, 2.0);
    }

    #[test]
    fn test_boundary_endpoints_are_inclusive() {
        let mut s = typical_sample();
        s.ph = 6.5;
        assert!(is_in_safe_range(&s));
        s.ph = 8.5;
        assert!(is_in_safe_range(&s));
        // Just past the endpoint flips the rule
        s.ph = 8.5000001;
        assert!(!is_in_safe_range(&s));
    }

    #[test]
    fn test_every_range_boundary_is_inclusive() {
        for (idx, range) in IDEAL_RANGES.iter().enumerate() {
            let mut feats = typical_sample().as_features();
            feats[idx] = range.min;
            assert!(range.contains(feats[idx]), "{} min", range.column);
            feats[idx] = range.max;
            assert!(range.contains(feats[idx]), "{} max", range.column);
        }
    }

    #[test]
    fn test_violations_preserve_canonical_order() {
        let mut s = typical_sample();
        s.turbidity = 9.0;
        s.hardness = 10.0;
        let v = violations(&s);
        assert_eq!(v.len(), 2);
        assert_eq!(v[0].range.column, "Hardness");
        assert_eq!(v[1].range.column, "Turbidity");
    }
}
