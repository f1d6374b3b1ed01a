use std::collections::BTreeMap;

/// Lexical similarity between two preprocessed texts, in [0, 1].
///
/// Builds a TF-IDF vector space whose corpus is exactly the two texts being
/// compared, then takes the cosine of the two vectors. The IDF weights are
/// therefore local to this single comparison and are not comparable across
/// different pairs. Smoothed IDF: ln((1 + n) / (1 + df)) + 1, with n = 2.
///
/// Returns 0.0 when either text is empty or the vectors share no terms.
/// Symmetric and deterministic down to the bit: terms are accumulated in
/// sorted order, so neither swapping the arguments nor repeating the call
/// can move a score across the award threshold. The result is unrounded.
pub fn similarity(reference: &str, candidate: &str) -> f64 {
    let ref_terms: Vec<&str> = reference.split_whitespace().collect();
    let cand_terms: Vec<&str> = candidate.split_whitespace().collect();

    if ref_terms.is_empty() || cand_terms.is_empty() {
        return 0.0;
    }

    let ref_tf = term_frequencies(&ref_terms);
    let cand_tf = term_frequencies(&cand_terms);

    // Smoothed IDF over the 2-document corpus: terms in both docs weigh
    // ln(3/3)+1 = 1, terms in one doc weigh ln(3/2)+1.
    let idf = |term: &str| -> f64 {
        let df = ref_tf.contains_key(term) as u32 + cand_tf.contains_key(term) as u32;
        ((1.0 + 2.0) / (1.0 + df as f64)).ln() + 1.0
    };

    let mut dot = 0.0;
    for (term, &tf) in &ref_tf {
        if let Some(&cand_count) = cand_tf.get(term) {
            let w = idf(term);
            dot += (tf as f64 * w) * (cand_count as f64 * w);
        }
    }
    if dot == 0.0 {
        return 0.0;
    }

    let norm = |tf: &BTreeMap<&str, u32>| -> f64 {
        tf.iter()
            .map(|(term, &count)| {
                let w = count as f64 * idf(term);
                w * w
            })
            .sum::<f64>()
            .sqrt()
    };

    (dot / (norm(&ref_tf) * norm(&cand_tf))).clamp(0.0, 1.0)
}

// BTreeMap so summation order is fixed: float addition is not associative,
// and a HashMap's per-instance iteration order would make equal inputs
// disagree in the last ulp.
fn term_frequencies<'a>(terms: &[&'a str]) -> BTreeMap<&'a str, u32> {
    let mut tf = BTreeMap::new();
    for term in terms {
        *tf.entry(*term).or_insert(0) += 1;
    }
    tf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_score_one() {
        let s = similarity("mitochondria produce energy", "mitochondria produce energy");
        assert!((s - 1.0).abs() < 1e-12, "got {}", s);
    }

    #[test]
    fn test_single_term_identical() {
        let s = similarity("energy", "energy");
        assert!((s - 1.0).abs() < 1e-12, "got {}", s);
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        assert_eq!(similarity("water boil 100 degree", "rock heavy"), 0.0);
    }

    #[test]
    fn test_empty_texts_score_zero() {
        assert_eq!(similarity("", ""), 0.0);
        assert_eq!(similarity("water", ""), 0.0);
        assert_eq!(similarity("", "water"), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            ("water boil 100 degree", "water freeze 0 degree"),
            ("mitochondria produce energy", "energy"),
            ("a b c", "c b a"),
        ];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a), "asymmetric for {:?}", (a, b));
        }
    }

    #[test]
    fn test_symmetry_and_determinism_are_exact() {
        // Long texts with many overlapping multi-count terms, so any
        // order-dependent float accumulation would show up in the last ulp.
        let a = "cell membrane controls what enters and leaves the cell while \
                 the nucleus stores genetic material and ribosomes make \
                 protein from amino acid chains inside the cytoplasm";
        let b = "the nucleus of the cell stores genetic material while the \
                 membrane controls transport and protein synthesis happens \
                 at ribosomes using amino acid chains";
        let reference = similarity(a, b);
        for _ in 0..100 {
            assert_eq!(similarity(a, b).to_bits(), reference.to_bits());
            assert_eq!(similarity(b, a).to_bits(), reference.to_bits());
        }
    }

    #[test]
    fn test_partial_overlap_value() {
        // Shared term "water" (idf 1), unshared terms idf ln(1.5)+1.
        // dot = 1, norms = sqrt(1 + 3*idf^2) and sqrt(1 + idf^2).
        let s = similarity("water boil 100 degree", "water freeze");
        let idf: f64 = (1.5f64).ln() + 1.0;
        let expected = 1.0 / ((1.0 + 3.0 * idf * idf).sqrt() * (1.0 + idf * idf).sqrt());
        assert!((s - expected).abs() < 1e-12, "got {}, expected {}", s, expected);
    }

    #[test]
    fn test_term_frequency_affects_score() {
        // Same vocabulary but different term counts is close to, yet below,
        // an exact match: vectors (2,1) vs (1,1) -> 3/(sqrt(5)*sqrt(2)).
        let s = similarity("energy energy store", "energy store");
        let expected = 3.0 / (5.0f64.sqrt() * 2.0f64.sqrt());
        assert!((s - expected).abs() < 1e-12, "got {}", s);
        assert!(s < 1.0);
    }

    #[test]
    fn test_bounded() {
        let texts = ["water", "water water boil", "boil degree", ""];
        for a in texts {
            for b in texts {
                let s = similarity(a, b);
                assert!((0.0..=1.0).contains(&s), "{} out of range for {:?}", s, (a, b));
            }
        }
    }

    #[test]
    fn test_word_order_does_not_matter() {
        let s = similarity("energy produce mitochondria", "mitochondria produce energy");
        assert!((s - 1.0).abs() < 1e-12, "got {}", s);
    }
}
