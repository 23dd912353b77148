/// Version ordering and preference policy
///
/// This module handles:
/// - Natural ("1.10" > "1.9") ordering of dotted version strings
/// - Choosing the preferred version among a package's version entries
use crate::package::VersionEntry;
use std::cmp::Ordering;

/// One chunk of a version string: a run of digits or a run of letters.
#[derive(Debug, PartialEq, Eq)]
enum Chunk<'a> {
    Num(u64),
    Alpha(&'a str),
}

fn chunks(version: &str) -> Vec<Chunk<'_>> {
    let mut out = Vec::new();
    let mut rest = version;
    while let Some(first) = rest.chars().next() {
        if first.is_ascii_digit() {
            let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
            // Oversized numeric runs compare as their text form
            match rest[..end].parse::<u64>() {
                Ok(n) => out.push(Chunk::Num(n)),
                Err(_) => out.push(Chunk::Alpha(&rest[..end])),
            }
            rest = &rest[end..];
        } else if first.is_ascii_alphabetic() {
            let end = rest.find(|c: char| !c.is_ascii_alphabetic()).unwrap_or(rest.len());
            out.push(Chunk::Alpha(&rest[..end]));
            rest = &rest[end..];
        } else {
            // Separator (., -, _, anything else): chunk boundary only
            rest = &rest[first.len_utf8()..];
        }
    }
    out
}

/// Natural comparison of two version strings.
///
/// Numeric chunks compare numerically, alphabetic chunks
/// lexicographically, and a numeric chunk sorts after an alphabetic one
/// at the same position ("1.2" > "1.2rc1" is not modeled; "1.10" > "1.9" is).
/// A version that is a strict chunk-prefix of another sorts first.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let (ca, cb) = (chunks(a), chunks(b));
    for (x, y) in ca.iter().zip(cb.iter()) {
        let ord = match (x, y) {
            (Chunk::Num(m), Chunk::Num(n)) => m.cmp(n),
            (Chunk::Alpha(s), Chunk::Alpha(t)) => s.cmp(t),
            (Chunk::Num(_), Chunk::Alpha(_)) => Ordering::Greater,
            (Chunk::Alpha(_), Chunk::Num(_)) => Ordering::Less,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    ca.len().cmp(&cb.len()).then_with(|| a.cmp(b))
}

/// Choose the preferred version entry.
///
/// An entry explicitly flagged `preferred` wins; otherwise the highest
/// non-deprecated version; otherwise the highest version overall.
pub fn preferred_version(versions: &[VersionEntry]) -> Option<&VersionEntry> {
    if let Some(flagged) = versions.iter().find(|v| v.preferred) {
        return Some(flagged);
    }
    let highest_safe = versions
        .iter()
        .filter(|v| !v.deprecated)
        .max_by(|a, b| compare_versions(&a.version, &b.version));
    highest_safe.or_else(|| versions.iter().max_by(|a, b| compare_versions(&a.version, &b.version)))
}

/// Sort version entries most-recent-first.
pub fn sort_descending<'a>(entries: impl Iterator<Item = &'a VersionEntry>) -> Vec<&'a VersionEntry> {
    let mut out: Vec<&VersionEntry> = entries.collect();
    out.sort_by(|a, b| compare_versions(&b.version, &a.version));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(version: &str, deprecated: bool, preferred: bool) -> VersionEntry {
        VersionEntry { version: version.to_string(), url: None, deprecated, preferred }
    }

    #[test]
    fn test_numeric_chunks_compare_numerically() {
        assert_eq!(compare_versions("1.10", "1.9"), Ordering::Greater);
        assert_eq!(compare_versions("1.2.1", "1.2"), Ordering::Greater);
        assert_eq!(compare_versions("2021.05", "3.1"), Ordering::Greater);
        assert_eq!(compare_versions("1.2", "1.2"), Ordering::Equal);
    }

    #[test]
    fn test_alpha_chunks_compare_lexicographically() {
        assert_eq!(compare_versions("1.2a", "1.2b"), Ordering::Less);
        assert_eq!(compare_versions("develop", "main"), Ordering::Less);
    }

    #[test]
    fn test_numeric_sorts_after_alphabetic() {
        assert_eq!(compare_versions("1.2", "1.beta"), Ordering::Greater);
    }

    #[test]
    fn test_preferred_flag_wins() {
        let versions = vec![entry("2.0", false, false), entry("1.5", false, true)];
        assert_eq!(preferred_version(&versions).unwrap().version, "1.5");
    }

    #[test]
    fn test_preferred_skips_deprecated() {
        let versions = vec![entry("2.0", true, false), entry("1.5", false, false)];
        assert_eq!(preferred_version(&versions).unwrap().version, "1.5");
    }

    #[test]
    fn test_preferred_falls_back_when_all_deprecated() {
        let versions = vec![entry("1.0", true, false), entry("2.0", true, false)];
        assert_eq!(preferred_version(&versions).unwrap().version, "2.0");
    }

    #[test]
    fn test_preferred_none_for_empty() {
        assert!(preferred_version(&[]).is_none());
    }

    #[test]
    fn test_sort_descending() {
        let versions = vec![entry("1.9", false, false), entry("1.10", false, false), entry("1.2", false, false)];
        let sorted: Vec<&str> = sort_descending(versions.iter()).iter().map(|v| v.version.as_str()).collect();
        assert_eq!(sorted, vec!["1.10", "1.9", "1.2"]);
    }
}
