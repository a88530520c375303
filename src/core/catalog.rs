use crate::core::Item;
use crate::utils::error::{DrawError, Result};

/// Smallest prize pool accepted by [`Catalog::from_records`].
pub const MIN_RECORDS: usize = 3;

/// Prize pool ordered by descending weight.
///
/// Equal weights keep their input order. The order matters: the sampler walks
/// the items in this order when accumulating weights.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog from `"<id> <name> <weight>"` records.
    ///
    /// Fails fast on the first bad record; no partial catalog is produced.
    pub fn from_records<I, S>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let records: Vec<S> = records.into_iter().collect();
        if records.len() < MIN_RECORDS {
            return Err(DrawError::InsufficientRecordsError {
                required: MIN_RECORDS,
                actual: records.len(),
            });
        }

        let mut items = records
            .iter()
            .map(|record| record.as_ref().parse::<Item>())
            .collect::<Result<Vec<_>>>()?;

        // sort_by is stable
        items.sort_by(|a, b| b.weight.cmp(&a.weight));

        tracing::debug!(
            "Built catalog with {} items, total weight {}",
            items.len(),
            items.iter().map(|item| u64::from(item.weight)).sum::<u64>()
        );

        Ok(Self { items })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_weight(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.weight)).sum()
    }

    /// Each item with its selection probability.
    pub fn odds(&self) -> Vec<(&Item, f64)> {
        let total = self.total_weight() as f64;
        self.items
            .iter()
            .map(|item| (item, f64::from(item.weight) / total))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_records() -> Vec<&'static str> {
        vec![
            "1 Constructor 20",
            "2 Robot 15",
            "3 Doll 30",
            "4 Car 25",
            "5 Puzzle 10",
        ]
    }

    #[test]
    fn test_catalog_is_ordered_by_descending_weight() {
        let catalog = Catalog::from_records(toy_records()).unwrap();

        let names: Vec<&str> = catalog.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Doll", "Car", "Constructor", "Robot", "Puzzle"]);
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.total_weight(), 100);
    }

    #[test]
    fn test_equal_weights_keep_input_order() {
        let catalog = Catalog::from_records(["1 Ball 10", "2 Kite 40", "3 Yoyo 10", "4 Top 10"])
            .unwrap();

        let ids: Vec<i64> = catalog.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_fewer_than_three_records_is_rejected() {
        let err = Catalog::from_records(["1 Doll 30", "2 Car 25"]).unwrap_err();
        assert!(matches!(
            err,
            DrawError::InsufficientRecordsError {
                required: 3,
                actual: 2
            }
        ));

        let empty: [&str; 0] = [];
        assert!(Catalog::from_records(empty).is_err());
    }

    #[test]
    fn test_one_malformed_record_rejects_whole_catalog() {
        let err = Catalog::from_records(["1 Doll 30", "1 OnlyTwoTokens", "3 Car 25"]).unwrap_err();
        assert!(err.is_configuration_error());
        assert!(matches!(err, DrawError::MalformedRecordError { ref record, .. } if record == "1 OnlyTwoTokens"));
    }

    #[test]
    fn test_odds_sum_to_one() {
        let catalog = Catalog::from_records(toy_records()).unwrap();
        let odds = catalog.odds();

        assert_eq!(odds[0].0.name, "Doll");
        assert!((odds[0].1 - 0.30).abs() < 1e-9);
        let sum: f64 = odds.iter().map(|(_, p)| p).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }
}
