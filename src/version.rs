// src/version.rs

//! Orders tag names by the numbers embedded in them.
//!
//! Every maximal run of ASCII digits is one version component. Everything
//! else (`release/`, `v`, dots, suffixes) is a separator. Components are
//! compared as integers, left to right. When one tag runs out of components
//! first, the shorter tag sorts first, so `1.2` < `1.2.0`.

use std::cmp::Ordering;

/// One numeric component, borrowed from the tag. Compared by integer value
/// without parsing, so arbitrarily long digit runs never overflow.
#[derive(Debug, Clone, Copy)]
pub struct Component<'a>(&'a str);

impl<'a> Component<'a> {
    fn significant(&self) -> &'a str {
        let trimmed = self.0.trim_start_matches('0');
        if trimmed.is_empty() {
            "0"
        } else {
            trimmed
        }
    }
}

impl Ord for Component<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.significant(), other.significant());
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    }
}

impl PartialEq for Component<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Component<'_> {}

impl PartialOrd for Component<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Splits a tag into its digit runs, in order of appearance.
pub fn components(tag: &str) -> Vec<Component<'_>> {
    let mut out = Vec::new();
    let mut start = None;
    for (i, c) in tag.char_indices() {
        match (c.is_ascii_digit(), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                out.push(Component(&tag[s..i]));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        out.push(Component(&tag[s..]));
    }
    out
}

/// Total order over tag names. Slice ordering already gives the
/// shorter-prefix-first rule.
pub fn compare_tags(a: &str, b: &str) -> Ordering {
    components(a).cmp(&components(b))
}

/// Stable sort, so tags with equal components keep their input order.
pub fn sort_tags<S: AsRef<str>>(tags: &mut [S]) {
    tags.sort_by(|a, b| compare_tags(a.as_ref(), b.as_ref()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(tag: &str) -> Vec<&str> {
        components(tag).into_iter().map(|c| c.0).collect()
    }

    #[test]
    fn extracts_digit_runs_and_ignores_separators() {
        assert_eq!(values("release/1.28.0"), vec!["1", "28", "0"]);
        assert_eq!(values("v2-rc10"), vec!["2", "10"]);
        assert_eq!(values("12"), vec!["12"]);
        assert!(values("stable").is_empty());
    }

    #[test]
    fn compares_numerically_not_lexically() {
        assert_eq!(compare_tags("v9", "v10"), Ordering::Less);
        assert_eq!(compare_tags("release/1.2.4", "release/1.3.4"), Ordering::Less);
        assert_eq!(compare_tags("release/1.3.4", "release/1.28.0"), Ordering::Less);
        assert_eq!(compare_tags("release/1.28.0", "release/1.29.0"), Ordering::Less);
        assert_eq!(compare_tags("release/1.2.3", "release/1.2.4"), Ordering::Less);
    }

    #[test]
    fn leading_zeros_are_ignored() {
        assert_eq!(compare_tags("v01.2", "v1.2"), Ordering::Equal);
        assert_eq!(compare_tags("v1.00", "v1.0"), Ordering::Equal);
        assert_eq!(compare_tags("v1.09", "v1.10"), Ordering::Less);
    }

    #[test]
    fn huge_components_do_not_overflow() {
        let big = "v1.99999999999999999999999999";
        let bigger = "v1.100000000000000000000000000";
        assert_eq!(compare_tags(big, bigger), Ordering::Less);
    }

    #[test]
    fn fewer_components_sort_first() {
        assert_eq!(compare_tags("1.2", "1.2.0"), Ordering::Less);
        assert_eq!(compare_tags("1.2.0", "1.2"), Ordering::Greater);
        assert_eq!(compare_tags("nightly", "v0"), Ordering::Less);
        assert_eq!(compare_tags("nightly", "stable"), Ordering::Equal);
    }

    #[test]
    fn is_irreflexive_and_transitive() {
        let tags = ["v1", "v1.0", "1.2.3", "nightly", "v10", "v9.9.9", "r2/4", "v01"];
        for a in tags {
            assert_ne!(compare_tags(a, a), Ordering::Less, "{a} < {a}");
            for b in tags {
                assert_eq!(compare_tags(a, b), compare_tags(b, a).reverse());
                for c in tags {
                    if compare_tags(a, b) == Ordering::Less && compare_tags(b, c) == Ordering::Less {
                        assert_eq!(compare_tags(a, c), Ordering::Less, "{a} < {b} < {c}");
                    }
                }
            }
        }
    }

    #[test]
    fn sorts_release_tags() {
        let mut tags = vec![
            "release/1.2.4",
            "release/1.3.4",
            "release/1.2.3",
            "release/1.29.0",
            "release/1.28.0",
        ];
        sort_tags(&mut tags);
        assert_eq!(
            tags,
            vec![
                "release/1.2.3",
                "release/1.2.4",
                "release/1.3.4",
                "release/1.28.0",
                "release/1.29.0",
            ]
        );
    }

    #[test]
    fn numberless_tags_keep_input_order_ahead_of_versions() {
        let mut tags = vec!["v2".to_string(), "stable".to_string(), "v1".to_string(), "beta".to_string()];
        sort_tags(&mut tags);
        assert_eq!(tags, vec!["stable", "beta", "v1", "v2"]);
    }
}
