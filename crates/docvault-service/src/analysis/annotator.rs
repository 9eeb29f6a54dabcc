//! Canned annotation text for a document version.
//!
//! The size phrase is derived from the file size. The version phrase is a
//! uniform draw from three slots, so annotating the same version twice may
//! give different text.

use std::fmt;

use rand::Rng;

const KIB: f64 = 1024.0;

/// Coarse size bucket, measured in KiB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    /// Under 100 KiB.
    Small,
    /// 100 KiB up to (not including) 1000 KiB.
    Medium,
    /// 1000 KiB and above.
    Large,
}

impl SizeClass {
    /// Classify a size given in KiB.
    pub fn from_kb(size_kb: f64) -> Self {
        if size_kb < 100.0 {
            Self::Small
        } else if size_kb < 1000.0 {
            Self::Medium
        } else {
            Self::Large
        }
    }

    /// Classify a size given in bytes.
    pub fn from_bytes(size_bytes: i64) -> Self {
        Self::from_kb(size_bytes as f64 / KIB)
    }

    /// The phrase used in annotation text.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn version_phrase<R: Rng + ?Sized>(version_number: i64, rng: &mut R) -> &'static str {
    match rng.gen_range(0..3) {
        0 => "appears minor",
        1 => "substantial changes",
        _ if version_number == 1 => "first version",
        _ => "routine update",
    }
}

/// Build the annotation text for one version.
pub fn annotate<R: Rng + ?Sized>(
    logical_name: &str,
    size_bytes: i64,
    version_number: i64,
    rng: &mut R,
) -> String {
    let size_kb = size_bytes as f64 / KIB;
    let size = SizeClass::from_kb(size_kb);
    let phrase = version_phrase(version_number, rng);

    format!(
        "{size}, {phrase}. Document '{logical_name}' version {version_number} has size {size_kb:.2} KB."
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_size_classes() {
        assert_eq!(SizeClass::from_bytes(51_200), SizeClass::Small);
        assert_eq!(SizeClass::from_bytes(102_399), SizeClass::Small);
        assert_eq!(SizeClass::from_bytes(102_400), SizeClass::Medium);
        assert_eq!(SizeClass::from_bytes(512_000), SizeClass::Medium);
        assert_eq!(SizeClass::from_bytes(1_024_000), SizeClass::Large);
        assert_eq!(SizeClass::from_bytes(2_000_000_000), SizeClass::Large);
        assert_eq!(SizeClass::from_bytes(0), SizeClass::Small);
    }

    #[test]
    fn test_text_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let text = annotate("report.pdf", 2048, 2, &mut rng);

        assert!(text.starts_with("small, "), "{text}");
        assert!(
            text.ends_with(". Document 'report.pdf' version 2 has size 2.00 KB."),
            "{text}"
        );
    }

    #[test]
    fn test_two_decimal_places() {
        let mut rng = StdRng::seed_from_u64(1);
        let text = annotate("a.bin", 1500, 1, &mut rng);
        assert!(text.ends_with("has size 1.46 KB."), "{text}");

        let text = annotate("big.iso", 2_000_000_000, 3, &mut rng);
        assert!(text.starts_with("large, "), "{text}");
        assert!(text.ends_with("has size 1953125.00 KB."), "{text}");
    }

    #[test]
    fn test_version_phrases() {
        let mut rng = StdRng::seed_from_u64(42);

        let first: HashSet<_> = (0..200)
            .map(|_| version_phrase(1, &mut rng))
            .collect();
        assert_eq!(
            first,
            HashSet::from(["appears minor", "substantial changes", "first version"])
        );

        let later: HashSet<_> = (0..200)
            .map(|_| version_phrase(5, &mut rng))
            .collect();
        assert_eq!(
            later,
            HashSet::from(["appears minor", "substantial changes", "routine update"])
        );
    }

    #[test]
    fn test_same_seed_same_text() {
        let a = annotate("x.txt", 10, 1, &mut StdRng::seed_from_u64(99));
        let b = annotate("x.txt", 10, 1, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
