use crate::lines::trimmed_lines;
use crate::words::{as_lowercase_words, shingle};
use simtext_core::{intersection, jaccard_index, set_difference, Result, SimilarityReport};
use std::collections::HashSet;

fn shingle_set(text: &str, k: usize) -> Result<HashSet<String>> {
    shingle(&as_lowercase_words(text), k)
}

/// Jaccard index of the trimmed line sets of two texts.
pub fn line_similarity(text1: &str, text2: &str) -> f64 {
    let a = trimmed_lines(text1);
    let b = trimmed_lines(text2);
    let score = jaccard_index(&a, &b);
    tracing::debug!(lines1 = a.len(), lines2 = b.len(), score, "line similarity");
    score
}

/// Line similarity after dropping every line that also appears in `template`.
///
/// Removal happens on trimmed lines: a line that only partially matches a
/// template line stays.
pub fn line_similarity_with_template(text1: &str, text2: &str, template: &str) -> f64 {
    let t = trimmed_lines(template);
    let a = set_difference(&trimmed_lines(text1), &t);
    let b = set_difference(&trimmed_lines(text2), &t);
    let score = jaccard_index(&a, &b);
    tracing::debug!(
        lines1 = a.len(),
        lines2 = b.len(),
        template_lines = t.len(),
        score,
        "line similarity (template removed)"
    );
    score
}

/// Jaccard index of the `k`-shingle sets of two texts, minus the template's shingles.
///
/// Texts are tokenized with [`as_lowercase_words`] first; the template is
/// removed after shingling, so a template phrase only cancels shingles it
/// produces itself.
pub fn shingle_similarity(text1: &str, text2: &str, template: &str, k: usize) -> Result<f64> {
    let t = shingle_set(template, k)?;
    let a = set_difference(&shingle_set(text1, k)?, &t);
    let b = set_difference(&shingle_set(text2, k)?, &t);
    let score = jaccard_index(&a, &b);
    tracing::debug!(
        shingles1 = a.len(),
        shingles2 = b.len(),
        template_shingles = t.len(),
        k,
        score,
        "shingle similarity"
    );
    Ok(score)
}

/// Computes every measure for one pair of texts.
///
/// An empty `template` makes `line_excluding_template` equal to `line`.
pub fn compare(text1: &str, text2: &str, template: &str, k: usize) -> Result<SimilarityReport> {
    let shingle = shingle_similarity(text1, text2, template, k)?;

    let a = trimmed_lines(text1);
    let b = trimmed_lines(text2);
    let t = trimmed_lines(template);
    let a_rest = set_difference(&a, &t);
    let b_rest = set_difference(&b, &t);

    let mut shared_lines = intersection(&a_rest, &b_rest)
        .into_iter()
        .collect::<Vec<_>>();
    shared_lines.sort();

    Ok(SimilarityReport {
        line: jaccard_index(&a, &b),
        line_excluding_template: jaccard_index(&a_rest, &b_rest),
        shingle,
        shingle_length: k,
        shared_lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use simtext_core::Error;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn line_similarity_one_shared_of_three() {
        assert!(close(line_similarity("a\nb", "b\nc"), 1.0 / 3.0));
    }

    #[test]
    fn line_similarity_ignores_surrounding_whitespace() {
        assert_eq!(line_similarity("  x = 1;\n\ty = 2;", "y = 2;\nx = 1;   "), 1.0);
    }

    #[test]
    fn template_lines_are_removed_from_both_sides() {
        assert_eq!(
            line_similarity_with_template("a\nb\nc", "b\nc\nd", "b\nc"),
            0.0
        );
        assert_eq!(
            line_similarity_with_template("header\nmine", "header\nmine", "header"),
            1.0
        );
    }

    #[test]
    fn template_removal_needs_an_exact_trimmed_match() {
        // "// TODO: fill in" only partially overlaps the template line.
        let s = line_similarity_with_template(
            "// TODO\n// TODO: fill in",
            "// TODO\n// TODO: fill in",
            "  // TODO  ",
        );
        assert_eq!(s, 1.0);
        let s = line_similarity_with_template("// TODO: fill in", "x", "// TODO");
        assert_eq!(s, 0.0);
    }

    #[test]
    fn empty_texts() {
        assert_eq!(line_similarity("", ""), 1.0);
        assert_eq!(line_similarity("", "a"), 0.0);
        assert_eq!(line_similarity_with_template("t", "", "t"), 1.0);
        assert_eq!(line_similarity_with_template("t\nu", "", "t"), 0.0);
        assert_eq!(shingle_similarity("", "", "", 2).unwrap(), 1.0);
        assert_eq!(shingle_similarity("one two", "", "", 2).unwrap(), 0.0);
    }

    #[test]
    fn shingle_similarity_cat_example() {
        let s = shingle_similarity("the cat sat", "the cat ran", "", 2).unwrap();
        assert!(close(s, 1.0 / 3.0), "s={s}");
    }

    #[test]
    fn shingle_similarity_is_case_and_punctuation_insensitive() {
        let s = shingle_similarity("The CAT, sat.", "the cat sat", "", 2).unwrap();
        assert_eq!(s, 1.0);
    }

    #[test]
    fn shingle_template_cancels_its_own_shingles() {
        // Shared boilerplate "the cat" is discounted; only catsat vs catran remain.
        let s = shingle_similarity("the cat sat", "the cat ran", "The cat!", 2).unwrap();
        assert_eq!(s, 0.0);
    }

    #[test]
    fn shingle_length_longer_than_texts() {
        assert_eq!(shingle_similarity("a b", "c d", "", 5).unwrap(), 1.0);
        assert_eq!(
            shingle_similarity("a b c d e", "c d", "", 5).unwrap(),
            0.0
        );
    }

    #[test]
    fn zero_shingle_length_is_an_error() {
        assert_eq!(
            shingle_similarity("a", "a", "", 0),
            Err(Error::InvalidShingleLength(0))
        );
        assert!(compare("a", "a", "", 0).is_err());
    }

    #[test]
    fn compare_reports_all_measures() {
        let text1 = "int main() {\n  return 0;\n}\nfoo();\n";
        let text2 = "int main() {\n  return 1;\n}\nfoo();\n";
        let template = "int main() {\n}\n";
        let r = compare(text1, text2, template, 2).unwrap();
        assert!(close(r.line, 3.0 / 5.0), "line={}", r.line);
        assert!(
            close(r.line_excluding_template, 1.0 / 3.0),
            "line_excluding_template={}",
            r.line_excluding_template
        );
        assert_eq!(r.shared_lines, vec!["foo();".to_string()]);
        assert_eq!(r.shingle_length, 2);
        assert_eq!(
            r.shingle,
            shingle_similarity(text1, text2, template, 2).unwrap()
        );
    }

    #[test]
    fn compare_without_template_matches_plain_line_similarity() {
        let r = compare("a\nb\nc", "c\nb\nz", "", 3).unwrap();
        assert_eq!(r.line, r.line_excluding_template);
        assert_eq!(r.line, line_similarity("a\nb\nc", "c\nb\nz"));
        assert_eq!(r.shared_lines, vec!["b".to_string(), "c".to_string()]);
    }

    proptest! {
        #[test]
        fn identical_texts_score_one(
            text in "[a-zA-Z0-9 ,.\n]{0,80}",
            template in "[a-z \n]{0,20}",
            k in 1usize..5,
        ) {
            prop_assert_eq!(line_similarity(&text, &text), 1.0);
            prop_assert_eq!(line_similarity_with_template(&text, &text, &template), 1.0);
            prop_assert_eq!(shingle_similarity(&text, &text, &template, k).unwrap(), 1.0);
        }

        #[test]
        fn measures_are_symmetric_and_bounded(
            a in "[a-d \n]{0,60}",
            b in "[a-d \n]{0,60}",
            template in "[a-d \n]{0,20}",
            k in 1usize..4,
        ) {
            let r1 = compare(&a, &b, &template, k).unwrap();
            let r2 = compare(&b, &a, &template, k).unwrap();
            prop_assert_eq!(r1.line, r2.line);
            prop_assert_eq!(r1.line_excluding_template, r2.line_excluding_template);
            prop_assert_eq!(r1.shingle, r2.shingle);
            prop_assert_eq!(&r1.shared_lines, &r2.shared_lines);
            for s in [r1.line, r1.line_excluding_template, r1.shingle] {
                prop_assert!((0.0..=1.0).contains(&s));
            }
        }
    }
}
