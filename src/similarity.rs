
use crate::error::{Result, SynonymError};
use crate::vectors::SparseVector;

use std::fmt::Display;
use std::str::FromStr;


/// A similarity measure between two descriptors: higher means more similar.
pub trait Similarity {
    fn name(&self) -> &str;
    fn score(&self, a: &SparseVector, b: &SparseVector) -> Result<f64>;
}

/// Fails with `UndefinedSimilarity` when either vector has norm 0.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> Result<f64> {

    let norms = a.norm() * b.norm();
    if norms == 0.0 {
        return Err(SynonymError::UndefinedSimilarity);
    }
    Ok(a.dot(b) / norms)
}

/// Negative euclidean distance. Defined for any pair, identical vectors give 0.0.
pub fn negative_euclidean_similarity(a: &SparseVector, b: &SparseVector) -> Result<f64> {

    let distance = a.subtract(b).norm();
    if distance == 0.0 {
        // no negative zero
        return Ok(0.0);
    }
    Ok(-distance)
}

/// Negative euclidean distance between unit-length copies of both vectors.
pub fn normalized_negative_euclidean_similarity(a: &SparseVector, b: &SparseVector) -> Result<f64> {

    let mut a = a.clone();
    let mut b = b.clone();
    a.normalize();
    b.normalize();
    negative_euclidean_similarity(&a, &b)
}


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Cosine,
    Euclidean,
    NormalizedEuclidean,
}

impl Metric {

    pub const ALL: [Metric; 3] = [Metric::Cosine, Metric::Euclidean, Metric::NormalizedEuclidean];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Cosine => "cosine",
            Metric::Euclidean => "euclidean",
            Metric::NormalizedEuclidean => "norm_euclidean",
        }
    }
}

impl Similarity for Metric {

    fn name(&self) -> &str {
        self.as_str()
    }

    fn score(&self, a: &SparseVector, b: &SparseVector) -> Result<f64> {
        match self {
            Metric::Cosine => cosine_similarity(a, b),
            Metric::Euclidean => negative_euclidean_similarity(a, b),
            Metric::NormalizedEuclidean => normalized_negative_euclidean_similarity(a, b),
        }
    }
}

impl FromStr for Metric {
    type Err = SynonymError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cosine" => Ok(Metric::Cosine),
            "euclidean" => Ok(Metric::Euclidean),
            "norm_euclidean" => Ok(Metric::NormalizedEuclidean),
            _ => Err(SynonymError::UnknownMetric(s.to_string()))
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}


#[cfg(test)]
mod tests {

    use super::*;

    const TOLERANCE: f64 = 1e-4;

    fn vector(pairs: &[(&str, f64)]) -> SparseVector {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn cosine_of_known_vectors() {

        let a = vector(&[("a", 1.0), ("b", 2.0), ("c", 3.0)]);
        let b = vector(&[("b", 4.0), ("c", 0.5), ("d", 8.0)]);
        let expected = 9.5 / (14.0_f64.sqrt() * 80.25_f64.sqrt());
        assert!((cosine_similarity(&a, &b).unwrap() - expected).abs() < TOLERANCE);

        // orthogonal
        let c = vector(&[("z", 2.0)]);
        assert_eq!(cosine_similarity(&a, &c).unwrap(), 0.0);
    }

    #[test]
    fn cosine_of_zero_vector_fails() {

        let a = vector(&[("a", 1.0)]);
        let empty = SparseVector::new();
        assert!(matches!(cosine_similarity(&a, &empty), Err(SynonymError::UndefinedSimilarity)));
        assert!(matches!(cosine_similarity(&empty, &empty), Err(SynonymError::UndefinedSimilarity)));
        assert!(matches!(Metric::Cosine.score(&empty, &a), Err(SynonymError::UndefinedSimilarity)));
    }

    #[test]
    fn euclidean_of_known_vectors() {

        let a = vector(&[("a", 1.0), ("b", 2.0), ("c", 3.0)]);
        let b = vector(&[("a", 2.0), ("b", 4.0), ("c", 6.0)]);
        let score = negative_euclidean_similarity(&a, &b).unwrap();
        assert!((score + 14.0_f64.sqrt()).abs() < TOLERANCE);
    }

    #[test]
    fn euclidean_never_fails_and_has_no_negative_zero() {

        let empty = SparseVector::new();
        let score = negative_euclidean_similarity(&empty, &empty).unwrap();
        assert_eq!(score, 0.0);
        assert!(score.is_sign_positive());

        let a = vector(&[("a", 3.0), ("b", 4.0)]);
        assert_eq!(negative_euclidean_similarity(&a, &empty).unwrap(), -5.0);
        assert_eq!(negative_euclidean_similarity(&a, &a).unwrap(), 0.0);
    }

    #[test]
    fn normalized_euclidean_ignores_magnitude() {

        let a = vector(&[("a", 1.0), ("b", 2.0), ("c", 3.0)]);
        let b = vector(&[("a", 2.0), ("b", 4.0), ("c", 6.0)]);
        let score = normalized_negative_euclidean_similarity(&a, &b).unwrap();
        assert!(score.abs() < TOLERANCE);

        // inputs are not normalized in place
        assert_eq!(a.get("c"), Some(3.0));
    }

    #[test]
    fn normalized_euclidean_handles_zero_vectors() {

        let empty = SparseVector::new();
        let a = vector(&[("a", 3.0), ("b", 4.0)]);
        assert_eq!(normalized_negative_euclidean_similarity(&empty, &empty).unwrap(), 0.0);
        assert!((normalized_negative_euclidean_similarity(&a, &empty).unwrap() + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn metric_names_round_trip() {

        for metric in Metric::ALL {
            assert_eq!(metric.name().parse::<Metric>().unwrap(), metric);
        }
        assert!(matches!("manhattan".parse::<Metric>(), Err(SynonymError::UnknownMetric(_))));
    }
}
