//! Word frequency counting and corpus merging

use super::types::FrequencyMap;

/// Count token occurrences into a frequency map
pub fn count_tokens<I>(tokens: I) -> FrequencyMap
where
    I: IntoIterator<Item = String>,
{
    let mut frequencies = FrequencyMap::new();
    for token in tokens {
        *frequencies.entry(token).or_insert(0) += 1;
    }

    frequencies
}

/// Merge two frequency maps, summing counts for words present in both
pub fn merge(first: &FrequencyMap, second: &FrequencyMap) -> FrequencyMap {
    let mut merged = first.clone();
    for (word, count) in second {
        *merged.entry(word.clone()).or_insert(0) += count;
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, u32)]) -> FrequencyMap {
        entries
            .iter()
            .map(|(word, count)| (word.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_count_tokens_counts_repeats() {
        let tokens = ["the", "the", "cat"].iter().map(|t| t.to_string());
        let frequencies = count_tokens(tokens);

        assert_eq!(frequencies, map(&[("the", 2), ("cat", 1)]));
    }

    #[test]
    fn test_count_tokens_empty_input() {
        let frequencies = count_tokens(Vec::new());
        assert!(frequencies.is_empty());
    }

    #[test]
    fn test_merge_sums_shared_words() {
        let first = map(&[("free", 2), ("cash", 1)]);
        let second = map(&[("free", 3), ("win", 4)]);

        let merged = merge(&first, &second);
        assert_eq!(merged, map(&[("free", 5), ("cash", 1), ("win", 4)]));
    }

    #[test]
    fn test_merge_with_empty_map() {
        let first = map(&[("hello", 7)]);
        let empty = FrequencyMap::new();

        assert_eq!(merge(&first, &empty), first);
        assert_eq!(merge(&empty, &first), first);
    }

    #[test]
    fn test_merge_commutative() {
        let first = map(&[("a", 1), ("b", 2)]);
        let second = map(&[("b", 3), ("c", 4)]);

        assert_eq!(merge(&first, &second), merge(&second, &first));
    }

    #[test]
    fn test_merge_associative() {
        let first = map(&[("a", 1)]);
        let second = map(&[("a", 2), ("b", 1)]);
        let third = map(&[("b", 5), ("c", 1)]);

        assert_eq!(
            merge(&merge(&first, &second), &third),
            merge(&first, &merge(&second, &third))
        );
    }

    #[test]
    fn test_merge_commutative_property() {
        use proptest::prelude::*;

        let maps = prop::collection::hash_map("[a-z]{1,6}", 0u32..1_000, 0..16);

        proptest::proptest!(|(first in maps.clone(), second in maps.clone())| {
            prop_assert_eq!(merge(&first, &second), merge(&second, &first));
        });
    }

    #[test]
    fn test_merge_associative_property() {
        use proptest::prelude::*;

        let maps = prop::collection::hash_map("[a-z]{1,6}", 0u32..1_000, 0..16);

        proptest::proptest!(|(first in maps.clone(), second in maps.clone(), third in maps.clone())| {
            prop_assert_eq!(
                merge(&merge(&first, &second), &third),
                merge(&first, &merge(&second, &third))
            );
        });
    }
}
