//! Grocery category classification
//!
//! Maps a free-text ingredient name onto a store-aisle category via
//! case-insensitive substring matching against fixed keyword lists. The
//! lists are checked in a fixed priority order and the first match wins;
//! anything unmatched lands in Other. Classification never fails.

use serde::{Deserialize, Serialize};

/// Grocery-store aisle category, used purely for display grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Produce,
    Dairy,
    Protein,
    Grains,
    Pantry,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Produce => "produce",
            Category::Dairy => "dairy",
            Category::Protein => "protein",
            Category::Grains => "grains",
            Category::Pantry => "pantry",
            Category::Other => "other",
        }
    }

    /// All categories in display order (matching the match priority)
    pub const ALL: [Category; 6] = [
        Category::Produce,
        Category::Dairy,
        Category::Protein,
        Category::Grains,
        Category::Pantry,
        Category::Other,
    ];
}

// Keyword lists per category. Matching is substring-based, so keywords stay
// in singular/stem form where that catches plurals too ("carrot" matches
// "carrots"). Priority order is produce, dairy, protein, grains, pantry.

const PRODUCE_KEYWORDS: &[&str] = &[
    "berries", "fruit", "vegetable", "lettuce", "tomato", "onion", "carrot",
    "pepper", "spinach", "apple", "banana", "orange", "lemon", "lime",
    "avocado", "broccoli", "cucumber", "zucchini", "eggplant", "garlic",
    "potato", "mushroom", "celery", "kale", "cabbage", "herb", "cilantro",
    "parsley", "basil", "ginger", "grape", "mango", "melon",
];

const DAIRY_KEYWORDS: &[&str] = &[
    "milk", "cheese", "yogurt", "butter", "cream", "mozzarella", "parmesan",
    "cheddar", "feta", "ricotta",
];

const PROTEIN_KEYWORDS: &[&str] = &[
    "chicken", "beef", "pork", "turkey", "lamb", "fish", "salmon", "tuna",
    "shrimp", "egg", "tofu", "tempeh", "bean", "lentil", "chickpea",
    "sausage", "bacon", "ham",
];

const GRAINS_KEYWORDS: &[&str] = &[
    "rice", "pasta", "bread", "quinoa", "oat", "flour", "tortilla",
    "noodle", "cereal", "couscous", "barley", "cracker", "bagel",
];

const PANTRY_KEYWORDS: &[&str] = &[
    "oil", "vinegar", "salt", "sugar", "spice", "sauce", "stock", "broth",
    "honey", "mustard", "soy", "paste", "syrup", "mayonnaise", "ketchup",
    "canned", "nut", "seed", "cumin", "paprika", "cinnamon", "oregano",
];

const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Produce, PRODUCE_KEYWORDS),
    (Category::Dairy, DAIRY_KEYWORDS),
    (Category::Protein, PROTEIN_KEYWORDS),
    (Category::Grains, GRAINS_KEYWORDS),
    (Category::Pantry, PANTRY_KEYWORDS),
];

/// Classify an ingredient name into a grocery category
pub fn categorize(name: &str) -> Category {
    let lower = name.to_lowercase();

    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return *category;
        }
    }

    Category::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_dairy() {
        assert_eq!(categorize("Whole Milk"), Category::Dairy);
        assert_eq!(categorize("greek yogurt"), Category::Dairy);
        assert_eq!(categorize("Unsalted Butter"), Category::Dairy);
    }

    #[test]
    fn test_categorize_protein() {
        assert_eq!(categorize("Chicken Breast"), Category::Protein);
        assert_eq!(categorize("Ground beef"), Category::Protein);
        assert_eq!(categorize("eggs"), Category::Protein);
    }

    #[test]
    fn test_categorize_produce() {
        assert_eq!(categorize("Roma Tomatoes"), Category::Produce);
        assert_eq!(categorize("baby spinach"), Category::Produce);
        assert_eq!(categorize("Red Bell Pepper"), Category::Produce);
    }

    #[test]
    fn test_categorize_grains() {
        assert_eq!(categorize("Quinoa"), Category::Grains);
        assert_eq!(categorize("whole wheat bread"), Category::Grains);
    }

    #[test]
    fn test_categorize_pantry() {
        assert_eq!(categorize("Olive Oil"), Category::Pantry);
        assert_eq!(categorize("soy sauce"), Category::Pantry);
    }

    #[test]
    fn test_categorize_unmatched_is_other() {
        assert_eq!(categorize("Xylophone"), Category::Other);
        assert_eq!(categorize(""), Category::Other);
    }

    #[test]
    fn test_priority_order_first_match_wins() {
        // "butter" is dairy, but produce is checked first: a name containing
        // a produce keyword wins even if a later list also matches.
        assert_eq!(categorize("Tomato Butter"), Category::Produce);
        // Eggplant matches produce before the protein list ever sees "egg"
        assert_eq!(categorize("Eggplant"), Category::Produce);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(categorize("CHICKEN THIGHS"), Category::Protein);
        assert_eq!(categorize("oLiVe OiL"), Category::Pantry);
    }
}
