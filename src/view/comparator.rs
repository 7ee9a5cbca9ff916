//! Comparators producing a total order for a sort key and direction

use super::criteria::SortOrder;
use crate::core::FieldValue;
use std::cmp::Ordering;

/// Compare two field values in the given direction
///
/// `Desc` is the exact reverse of `Asc`, so ties stay `Equal` either way and
/// a stable sort keeps tied items in input order for both directions.
pub fn compare_values(a: &FieldValue, b: &FieldValue, order: SortOrder) -> Ordering {
    let ascending = a.compare(b);
    match order {
        SortOrder::Asc => ascending,
        SortOrder::Desc => ascending.reverse(),
    }
}

/// Build an item comparator from a field extractor
pub fn compare_by<T, F>(extract: F, order: SortOrder) -> impl Fn(&T, &T) -> Ordering
where
    F: Fn(&T) -> FieldValue,
{
    move |a, b| compare_values(&extract(a), &extract(b), order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amounts() -> Vec<FieldValue> {
        vec![
            FieldValue::Float(10.0),
            FieldValue::Integer(50),
            FieldValue::Null,
            FieldValue::Float(10.0),
            FieldValue::String("n/a".into()),
        ]
    }

    #[test]
    fn test_desc_is_exact_inverse_of_asc() {
        let values = amounts();
        for a in &values {
            for b in &values {
                assert_eq!(
                    compare_values(a, b, SortOrder::Desc),
                    compare_values(a, b, SortOrder::Asc).reverse()
                );
            }
        }
    }

    #[test]
    fn test_ties_stay_equal_in_both_directions() {
        let a = FieldValue::Float(10.0);
        let b = FieldValue::Integer(10);
        assert_eq!(compare_values(&a, &b, SortOrder::Asc), Ordering::Equal);
        assert_eq!(compare_values(&a, &b, SortOrder::Desc), Ordering::Equal);
    }

    #[test]
    fn test_compare_by_sorts_stably_descending() {
        let mut rows = vec![(10, 'a'), (50, 'b'), (10, 'c'), (30, 'd')];
        rows.sort_by(compare_by(|r: &(i64, char)| FieldValue::Integer(r.0), SortOrder::Desc));
        assert_eq!(rows, vec![(50, 'b'), (30, 'd'), (10, 'a'), (10, 'c')]);
    }

    #[test]
    fn test_missing_values_sort_first_ascending() {
        let mut rows = vec![Some(3), None, Some(1)];
        rows.sort_by(compare_by(|r: &Option<i64>| FieldValue::from(*r), SortOrder::Asc));
        assert_eq!(rows, vec![None, Some(1), Some(3)]);
    }
}
