//! Integration tests for version parsing, ordering and extraction.

use hostcheck::version::compare::is_at_least;
use hostcheck::version::{extract_version, Version};
use std::cmp::Ordering;

const SAMPLES: &[&str] = &[
    "0", "1", "1.0", "1.0.0", "2.5", "2.5.0", "2.5.1", "2.5.1a", "2.5.1b", "2.13.1", "4.10",
    "4.9", "5.4", "5.10", "6.1.0", "8.32",
];

#[test]
fn every_version_satisfies_itself() {
    for raw in SAMPLES {
        assert!(is_at_least(raw, raw), "{} should satisfy itself", raw);
    }
}

#[test]
fn ordering_is_antisymmetric() {
    for a in SAMPLES {
        for b in SAMPLES {
            let forward = Version::parse(a).compare(&Version::parse(b));
            let backward = Version::parse(b).compare(&Version::parse(a));
            assert_eq!(forward, backward.reverse(), "{} vs {}", a, b);
        }
    }
}

#[test]
fn suffix_free_versions_order_like_integer_lists() {
    let plain: Vec<&str> = SAMPLES
        .iter()
        .copied()
        .filter(|raw| Version::parse(raw).suffix.is_empty())
        .collect();

    for a in &plain {
        for b in &plain {
            let va = Version::parse(a);
            let vb = Version::parse(b);
            if va.components.len() == vb.components.len() {
                assert_eq!(va.compare(&vb), va.components.cmp(&vb.components), "{} vs {}", a, b);
            }
        }
    }
}

#[test]
fn trailing_zeros_do_not_matter() {
    assert_eq!(Version::parse("2.5").compare(&Version::parse("2.5.0")), Ordering::Equal);
    assert_eq!(Version::parse("1").compare(&Version::parse("1.0.0")), Ordering::Equal);
    assert!(is_at_least("2.5", "2.5.0"));
    assert!(is_at_least("2.5.0", "2.5"));
}

#[test]
fn bare_version_is_older_than_suffixed() {
    assert!(!is_at_least("2.5.1", "2.5.1a"));
    assert!(is_at_least("2.5.1a", "2.5.1"));
    assert!(is_at_least("2.5.1b", "2.5.1a"));
}

#[test]
fn numeric_fields_beat_suffixes() {
    assert!(is_at_least("2.6", "2.5.1a"));
    assert!(!is_at_least("2.5.0z", "2.5.1"));
}

#[test]
fn minimums_from_the_builtin_table() {
    assert!(is_at_least("5.2.15", "3.2"));
    assert!(is_at_least("4.3", "4.0"));
    assert!(!is_at_least("3.81", "4.0"));
    assert!(is_at_least("6.1.0", "5.4"));
    assert!(!is_at_least("4.19.0", "5.4"));
}

#[test]
fn extraction_from_real_banners() {
    let cases = [
        ("sort (GNU coreutils) 8.32\nCopyright (C) 2020", Some("8.32")),
        ("GNU bash, version 5.2.15(1)-release (x86_64-pc-linux-gnu)", Some("5.2.15")),
        ("GNU ld (GNU Binutils for Debian) 2.40", Some("2.40")),
        ("grep (GNU grep) 2.5.1a", Some("2.5.1a")),
        ("version='5.36.0';", Some("5.36.0")),
        ("Python 3.11.2", Some("3.11.2")),
        ("6.1.0-13-amd64", Some("6.1.0")),
        ("bash: make: command not found", None),
        ("build 42 ready", None),
        ("", None),
    ];

    for (text, expected) in cases {
        assert_eq!(extract_version(text), expected, "extracting from {:?}", text);
    }
}

#[test]
fn extract_then_compare() {
    let actual = Version::extract("GNU Make 4.3\nBuilt for x86_64-pc-linux-gnu").unwrap();
    assert!(actual.is_at_least(&Version::parse("4.0")));
    assert_eq!(actual.to_string(), "4.3");
}
