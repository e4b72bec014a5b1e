use crate::core::classify::{classify, UNCLASSIFIED_COLOR};
use crate::core::format;

/// Classified (color, label) pair for an optional score, with the neutral
/// fallback applied. Shared by cards, the detail panel, and the comparison
/// grid so every surface renders the same badge for the same score.
pub(crate) fn classified(score: Option<f64>) -> (&'static str, &'static str) {
    match score.and_then(classify) {
        Some(classification) => (classification.color, classification.category.label()),
        None => (UNCLASSIFIED_COLOR, format::SENTINEL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classified_pairs_color_and_label() {
        assert_eq!(classified(Some(0.9)), ("#22c55e", "Excelente"));
        assert_eq!(classified(Some(0.05)), ("#000000", "Crítico"));
    }

    #[test]
    fn missing_scores_get_the_neutral_pair() {
        assert_eq!(classified(None), (UNCLASSIFIED_COLOR, "--"));
        assert_eq!(classified(Some(f64::NAN)), (UNCLASSIFIED_COLOR, "--"));
    }
}
