
use std::collections::HashMap;
use std::ops::Neg;

/// A sparse vector keyed by token.
///
/// Entries equal to zero are never stored: every operation that can produce a
/// zero component drops the key instead, so the stored keys are exactly the
/// support of the vector.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SparseVector {
    entries: HashMap<String, f64>,
}

impl SparseVector {

    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    pub fn get(&self, token: &str) -> Option<f64> {
        self.entries.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Increments a single component, removing it if it cancels out.
    pub fn increment(&mut self, token: &str, value: f64) {

        if value == 0.0 {
            return;
        }

        match self.entries.get_mut(token) {
            Some(current) => {
                *current += value;
                if *current == 0.0 {
                    self.entries.remove(token);
                }
            },
            None => {
                self.entries.insert(token.to_owned(), value);
            }
        }
    }

    /// Adds `other` into `self` component-wise. `other` is left untouched.
    pub fn add(&mut self, other: &SparseVector) {
        for (token, value) in &other.entries {
            self.increment(token, *value);
        }
    }

    /// Returns `self - other` as a new vector, missing entries counting as 0.
    pub fn subtract(&self, other: &SparseVector) -> SparseVector {

        let mut result = self.clone();
        for (token, value) in &other.entries {
            result.increment(token, -value);
        }
        result
    }

    /// Sum of products over the keys both vectors share.
    pub fn dot(&self, other: &SparseVector) -> f64 {

        // iterate the smaller support, lookups go to the larger one
        let (small, large) = if self.len() <= other.len() { (self, other) } else { (other, self) };
        small
            .entries
            .iter()
            .filter_map(|(token, a)| large.entries.get(token).map(|b| a * b))
            .sum()
    }

    pub fn norm(&self) -> f64 {
        self.entries.values().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Scales the vector to unit length. A zero vector is left as it is.
    pub fn normalize(&mut self) {

        let norm = self.norm();
        if norm == 0.0 {
            return;
        }

        for value in self.entries.values_mut() {
            *value /= norm;
        }
    }
}

impl Neg for SparseVector {
    type Output = SparseVector;

    fn neg(self) -> Self::Output {
        let entries = self.entries.into_iter().map(|(k, v)| (k, -v)).collect();
        SparseVector { entries }
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for SparseVector {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut vector = SparseVector::new();
        for (token, value) in iter {
            let token: String = token.into();
            vector.increment(&token, value);
        }
        vector
    }
}

/// Free-function forms of the vector operations, for callers that prefer them.
pub fn add(target: &mut SparseVector, other: &SparseVector) {
    target.add(other)
}

pub fn subtract(a: &SparseVector, b: &SparseVector) -> SparseVector {
    a.subtract(b)
}

pub fn dot_product(a: &SparseVector, b: &SparseVector) -> f64 {
    a.dot(b)
}

pub fn norm(v: &SparseVector) -> f64 {
    v.norm()
}

pub fn normalize(v: &mut SparseVector) {
    v.normalize()
}


#[cfg(test)]
mod tests {

    use super::*;

    fn vector(pairs: &[(&str, f64)]) -> SparseVector {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn add_mutates_target_only() {

        let mut a = vector(&[("a", 1.0), ("b", 2.0)]);
        let b = vector(&[("a", 2.0), ("c", 5.0)]);
        add(&mut a, &b);

        assert_eq!(a, vector(&[("a", 3.0), ("b", 2.0), ("c", 5.0)]));
        assert_eq!(b, vector(&[("a", 2.0), ("c", 5.0)]));
    }

    #[test]
    fn add_removes_cancelled_entries() {

        let mut a = vector(&[("a", 1.0), ("b", 2.0)]);
        let b = vector(&[("a", -1.0), ("b", 1.0)]);
        a.add(&b);

        assert!(!a.contains("a"));
        assert_eq!(a.get("b"), Some(3.0));
        assert!(a.iter().all(|(_, v)| v != 0.0));
    }

    #[test]
    fn zeros_are_never_stored() {

        let v = vector(&[("a", 0.0), ("b", 1.0)]);
        assert_eq!(v.len(), 1);

        let mut w = SparseVector::new();
        w.increment("x", 0.0);
        assert!(w.is_empty());
    }

    #[test]
    fn subtract_is_antisymmetric_and_reconstructs() {

        let a = vector(&[("a", 1.0), ("b", 2.0), ("c", 3.0)]);
        let b = vector(&[("a", 1.0), ("c", 5.0), ("d", 4.0)]);

        let a_minus_b = subtract(&a, &b);
        assert_eq!(a_minus_b, vector(&[("b", 2.0), ("c", -2.0), ("d", -4.0)]));
        assert_eq!(-a_minus_b.clone(), subtract(&b, &a));

        let mut rebuilt = b.clone();
        rebuilt.add(&a_minus_b);
        assert_eq!(rebuilt, a);

        // inputs are untouched
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn dot_product_over_shared_keys() {

        let a = vector(&[("a", 1.0), ("b", 2.0), ("c", 3.0)]);
        let b = vector(&[("b", 4.0), ("c", 1.0), ("z", 7.0)]);

        assert_eq!(dot_product(&a, &b), 11.0);
        assert_eq!(dot_product(&a, &b), dot_product(&b, &a));
        assert_eq!(dot_product(&a, &SparseVector::new()), 0.0);
        assert_eq!(dot_product(&vector(&[("q", 1.0)]), &b), 0.0);
    }

    #[test]
    fn norm_of_vectors() {

        assert_eq!(norm(&vector(&[("a", 3.0), ("b", -4.0)])), 5.0);
        assert_eq!(norm(&SparseVector::new()), 0.0);
    }

    #[test]
    fn normalize_unit_length_and_zero_noop() {

        let mut v = vector(&[("a", 1.0), ("b", 2.0), ("c", 2.0)]);
        normalize(&mut v);
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert!((v.get("a").unwrap() - 1.0 / 3.0).abs() < 1e-12);

        let mut empty = SparseVector::new();
        normalize(&mut empty);
        assert_eq!(empty, SparseVector::new());
    }

    #[test]
    fn copies_are_independent() {

        let original = vector(&[("a", 1.0), ("b", 2.0)]);
        let mut copy = original.clone();
        copy.increment("a", 10.0);
        copy.normalize();

        assert_eq!(original, vector(&[("a", 1.0), ("b", 2.0)]));
        assert_ne!(original, copy);
    }
}
