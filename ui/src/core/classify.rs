//! Score classification for the Ecological Health Index.
//!
//! The bracket table is fixed and shared with the server: labels must match
//! the `categoria` strings it reports byte-for-byte, so the client recomputes
//! the classification from the raw score instead of trusting payload fields.

/// Display category for a classified score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Excelente,
    Bueno,
    Regular,
    Pobre,
    Critico,
}

impl Category {
    /// All categories, ordered from healthiest to most degraded. Drives the
    /// category filter dropdown and the statistics breakdown.
    pub const ALL: [Category; 5] = [
        Category::Excelente,
        Category::Bueno,
        Category::Regular,
        Category::Pobre,
        Category::Critico,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Excelente => "Excelente",
            Category::Bueno => "Bueno",
            Category::Regular => "Regular",
            Category::Pobre => "Pobre",
            Category::Critico => "Crítico",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Category::Excelente => "#22c55e",
            Category::Bueno => "#eab308",
            Category::Regular => "#f97316",
            Category::Pobre => "#ef4444",
            Category::Critico => "#000000",
        }
    }
}

/// The (color, category) pair derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub color: &'static str,
    pub category: Category,
}

/// Neutral badge color for values that cannot be classified.
pub const UNCLASSIFIED_COLOR: &str = "#9ca3af";

/// Classify a score into its display bracket.
///
/// Boundary values belong to the upper bracket; only the top bracket is
/// strict (`> 0.76`). Finite scores below 0.11 land in `Critico`, including
/// negative ones. Non-finite input has no bracket and yields `None`.
pub fn classify(score: f64) -> Option<Classification> {
    if !score.is_finite() {
        return None;
    }

    let category = if score > 0.76 {
        Category::Excelente
    } else if score >= 0.51 {
        Category::Bueno
    } else if score >= 0.26 {
        Category::Regular
    } else if score >= 0.11 {
        Category::Pobre
    } else {
        Category::Critico
    };

    Some(Classification {
        color: category.color(),
        category,
    })
}

/// Bar/badge color for an optional score, falling back to the neutral color
/// when the value is missing or unclassifiable.
pub fn color_for(score: Option<f64>) -> &'static str {
    score
        .and_then(classify)
        .map(|classification| classification.color)
        .unwrap_or(UNCLASSIFIED_COLOR)
}
