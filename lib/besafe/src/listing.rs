/// Sorts station or magnitude codes.
///
/// If every code is an integer, the codes are sorted numerically (`8` before `11`).
/// Otherwise the whole list is sorted lexicographically. Duplicates are removed.
pub fn sort_codes(codes: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut codes: Vec<String> = codes.into_iter().collect();
    let numbers: Option<Vec<i64>> = codes.iter().map(|code| code.trim().parse().ok()).collect();
    match numbers {
        Some(numbers) => {
            let mut keyed: Vec<_> = numbers.into_iter().zip(codes).collect();
            keyed.sort();
            codes = keyed.into_iter().map(|(_, code)| code).collect();
        }
        None => codes.sort(),
    }
    codes.dedup();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    #[test]
    fn numeric_codes_sort_numerically() {
        assert_eq!(
            sort_codes(codes(&["36", "8", "11", "102"])),
            codes(&["8", "11", "36", "102"])
        );
    }

    #[test]
    fn one_non_numeric_code_sorts_everything_lexicographically() {
        assert_eq!(
            sort_codes(codes(&["36", "8", "11", "N/A"])),
            codes(&["11", "36", "8", "N/A"])
        );
    }

    #[test]
    fn duplicates_collapse() {
        assert_eq!(sort_codes(codes(&["8", "11", "8"])), codes(&["8", "11"]));
    }

    #[test]
    fn sorting_is_idempotent() {
        let sorted = sort_codes(codes(&["14", "8", "12"]));
        assert_eq!(sort_codes(sorted.clone()), sorted);
        assert!(sort_codes(Vec::new()).is_empty());
    }
}
