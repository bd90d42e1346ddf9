//! Ordered collections of geohashes and inclusive geohash ranges.
//!
//! A [`GeohashSet`] is the output format of region building: every entry is
//! either a single code or a `[first, last]` range of same-length codes,
//! ready to be used as prefix or range-scan keys against a sorted store.

use crate::error::Result;
use crate::hash;
use geocircle_types::Point;
use serde::{Deserialize, Serialize};

/// One member of a [`GeohashSet`].
///
/// Serializes as a bare string for `Single` and as a two element array for
/// `Range`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HashEntry {
    Single(String),
    /// Inclusive lexical range; both ends share the same length.
    Range(String, String),
}

impl HashEntry {
    pub fn single(code: impl Into<String>) -> Self {
        HashEntry::Single(code.into())
    }

    pub fn range(first: impl Into<String>, last: impl Into<String>) -> Self {
        HashEntry::Range(first.into(), last.into())
    }

    /// Returns true if the point lies in this code, or in any code of this
    /// range.
    pub fn contains(&self, point: &Point) -> Result<bool> {
        match self {
            HashEntry::Single(code) => hash::contains(code, point),
            HashEntry::Range(first, last) => {
                let mut current = Some(first.clone());
                while let Some(code) = current {
                    if code.as_str() > last.as_str() {
                        break;
                    }
                    if hash::contains(&code, point)? {
                        return Ok(true);
                    }
                    current = hash::increment(&code)?;
                }
                Ok(false)
            }
        }
    }
}

/// An append-only list of geohashes and geohash ranges.
///
/// No uniqueness or ordering is enforced; entries come back out in the
/// order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeohashSet {
    entries: Vec<HashEntry>,
}

impl GeohashSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, code: impl Into<String>) {
        self.entries.push(HashEntry::Single(code.into()));
    }

    pub fn add_range(&mut self, first: impl Into<String>, last: impl Into<String>) {
        self.entries.push(HashEntry::Range(first.into(), last.into()));
    }

    /// Appends every entry of `other`.
    pub fn add_set(&mut self, other: GeohashSet) {
        self.entries.extend(other.entries);
    }

    /// Returns true if any entry contains the point.
    ///
    /// ```rust
    /// use geocircle::{GeohashSet, Point};
    ///
    /// let mut set = GeohashSet::new();
    /// set.add_range("drt2h", "drt2z");
    /// assert!(set.contains(&Point::new(-71.047656, 42.350072))?);
    /// assert!(!set.contains(&Point::new(0.0, 0.0))?);
    /// # Ok::<(), geocircle::GeoError>(())
    /// ```
    pub fn contains(&self, point: &Point) -> Result<bool> {
        for entry in &self.entries {
            if entry.contains(point)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn export(&self) -> &[HashEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HashEntry> {
        self.entries.iter()
    }

    /// JSON array of strings and `[first, last]` pairs.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl IntoIterator for GeohashSet {
    type Item = HashEntry;
    type IntoIter = std::vec::IntoIter<HashEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a GeohashSet {
    type Item = &'a HashEntry;
    type IntoIter = std::slice::Iter<'a, HashEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Extend<HashEntry> for GeohashSet {
    fn extend<I: IntoIterator<Item = HashEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl FromIterator<HashEntry> for GeohashSet {
    fn from_iter<I: IntoIterator<Item = HashEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_only_keeps_order_and_duplicates() {
        let mut set = GeohashSet::new();
        assert!(set.is_empty());

        set.add("9q8yy");
        set.add_range("9q8z0", "9q8z7");
        set.add("9q8yy");

        let mut other = GeohashSet::new();
        other.add("dr5ru");
        set.add_set(other);

        assert_eq!(set.len(), 4);
        assert_eq!(
            set.export(),
            &[
                HashEntry::single("9q8yy"),
                HashEntry::range("9q8z0", "9q8z7"),
                HashEntry::single("9q8yy"),
                HashEntry::single("dr5ru"),
            ]
        );
    }

    #[test]
    fn test_range_containment() {
        // children of a one character hash lead with a latitude bit, so
        // "dh".."dz" is the northern half of "d"
        let mut set = GeohashSet::new();
        set.add_range("dh", "dz");

        let boston = Point::new(-71.047656, 42.350072);
        let washington = Point::new(-77.036541, 38.898632);
        assert!(set.contains(&boston).unwrap());
        assert!(set.contains(&washington).unwrap());

        let mut south = GeohashSet::new();
        south.add_range("d0", "dg");
        assert!(!south.contains(&boston).unwrap());
        assert!(south.contains(&Point::new(-80.0, 20.0)).unwrap());
    }

    #[test]
    fn test_range_of_length_three() {
        let mut set = GeohashSet::new();
        set.add_range("drs", "drv");
        // "drt" lies strictly inside the range
        assert!(set.contains(&Point::new(-71.047656, 42.350072)).unwrap());
        assert!(!set.contains(&Point::new(-77.036541, 38.898632)).unwrap());
    }

    #[test]
    fn test_empty_and_reversed_ranges_contain_nothing() {
        let point = Point::new(-71.047656, 42.350072);
        assert!(!GeohashSet::new().contains(&point).unwrap());

        let mut reversed = GeohashSet::new();
        reversed.add_range("drz", "drt");
        assert!(!reversed.contains(&point).unwrap());
    }

    #[test]
    fn test_range_ending_in_last_code() {
        let mut set = GeohashSet::new();
        set.add_range("zy", "zz");
        assert!(set.contains(&Point::new(180.0, 90.0)).unwrap());
        assert!(!set.contains(&Point::new(0.0, 0.0)).unwrap());
    }

    #[test]
    fn test_invalid_member_is_an_error() {
        let mut set = GeohashSet::new();
        set.add("dra");
        assert!(set.contains(&Point::new(0.0, 0.0)).is_err());
    }

    #[test]
    fn test_json_shape() {
        let set: GeohashSet = vec![
            HashEntry::single("9q8yy"),
            HashEntry::range("9q8z0", "9q8z7"),
        ]
        .into_iter()
        .collect();

        let json = set.to_json().unwrap();
        assert_eq!(json, r#"["9q8yy",["9q8z0","9q8z7"]]"#);
        assert_eq!(GeohashSet::from_json(&json).unwrap(), set);
    }

    #[test]
    fn test_iteration() {
        let mut set = GeohashSet::new();
        set.extend([HashEntry::single("u"), HashEntry::range("s0", "s7")]);

        let singles = set
            .iter()
            .filter(|entry| matches!(entry, HashEntry::Single(_)))
            .count();
        assert_eq!(singles, 1);
        assert_eq!((&set).into_iter().count(), 2);
        assert_eq!(set.into_iter().last(), Some(HashEntry::range("s0", "s7")));
    }
}
