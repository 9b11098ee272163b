// ABOUTME: Curated word lists driving the food/non-food keyword heuristic
// ABOUTME: Vocabulary is immutable configuration injected into the classifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

//! # Vocabulary
//!
//! The classifier is an allow/deny heuristic over these lists, not a language
//! model. It false-positives on food words missing from the lists and
//! false-negatives on disallowed content phrased only with listed tokens.
//! Deployments extend the lists through the `with_*` builders instead of
//! mutating them at runtime.

use std::collections::HashSet;

/// Staples, proteins, dairy, produce, spices, condiments, and dish names
pub const FOOD_KEYWORDS: &[&str] = &[
    // Grains and staples
    "rice", "wheat", "flour", "bread", "pasta", "spaghetti", "macaroni", "noodle", "noodles",
    "oats", "oatmeal", "quinoa", "millet", "barley", "corn", "maize", "semolina", "couscous",
    "dough", "atta", "maida", "rava", "suji", "poha", "cornflour", "cornstarch", "breadcrumbs",
    "tortilla", "tortillas", "cereal", "granola", "basmati",
    // Proteins
    "chicken", "mutton", "lamb", "beef", "pork", "fish", "salmon", "tuna", "cod", "prawn",
    "prawns", "shrimp", "shrimps", "crab", "lobster", "egg", "eggs", "tofu", "paneer", "tempeh",
    "lentil", "lentils", "dal", "dhal", "chickpea", "chickpeas", "bean", "beans", "rajma",
    "chana", "soy", "soya", "meat", "bacon", "ham", "sausage", "sausages", "turkey", "duck",
    "mince", "keema",
    // Dairy
    "milk", "cream", "butter", "ghee", "cheese", "mozzarella", "cheddar", "parmesan", "yogurt",
    "yoghurt", "curd", "buttermilk", "khoya",
    // Vegetables
    "tomato", "tomatoes", "onion", "onions", "potato", "potatoes", "carrot", "carrots",
    "garlic", "ginger", "spinach", "palak", "cabbage", "cauliflower", "broccoli", "capsicum",
    "chili", "chilli", "chilies", "chillies", "peas", "cucumber", "lettuce", "kale",
    "mushroom", "mushrooms", "eggplant", "brinjal", "zucchini", "pumpkin", "okra", "bhindi",
    "beetroot", "beet", "radish", "celery", "leek", "leeks", "asparagus", "artichoke",
    "shallot", "shallots", "scallion", "scallions", "gourd", "yam", "turnip", "sprouts",
    "vegetable", "vegetables", "veggies", "greens",
    // Fruits
    "apple", "apples", "banana", "bananas", "mango", "mangoes", "orange", "oranges", "lemon",
    "lemons", "lime", "limes", "grape", "grapes", "berries", "strawberry", "strawberries",
    "blueberry", "blueberries", "raspberry", "raspberries", "pineapple", "papaya",
    "watermelon", "melon", "kiwi", "peach", "peaches", "pear", "pears", "plum", "plums",
    "cherry", "cherries", "pomegranate", "guava", "coconut", "dates", "fig", "figs", "raisins",
    "apricot", "apricots", "avocado", "avocados", "olive", "olives", "fruit", "fruits",
    // Nuts and seeds
    "almond", "almonds", "cashew", "cashews", "walnut", "walnuts", "peanut", "peanuts",
    "pistachio", "pistachios", "nuts", "seeds", "sesame", "flax", "flaxseed", "chia",
    "sunflower",
    // Spices and herbs
    "salt", "pepper", "peppers", "turmeric", "haldi", "cumin", "jeera", "coriander", "cilantro",
    "cardamom", "cinnamon", "clove", "cloves", "nutmeg", "paprika", "oregano", "basil",
    "thyme", "rosemary", "parsley", "mint", "dill", "saffron", "masala", "garam", "mustard",
    "fenugreek", "methi", "bay", "vanilla", "curry", "asafoetida", "hing", "herbs", "spices",
    "spice", "seasoning", "powder",
    // Condiments, liquids, and baking
    "oil", "vinegar", "sauce", "ketchup", "mayonnaise", "mayo", "honey", "sugar", "jaggery",
    "syrup", "jam", "stock", "broth", "water", "wine", "chocolate", "cocoa", "coffee", "tea",
    "juice", "yeast", "soda", "tamarind", "pesto", "salsa", "chutney", "pickle",
    // Dishes and meals
    "soup", "salad", "stew", "sandwich", "pizza", "burger", "biryani", "pulao", "khichdi",
    "roti", "chapati", "paratha", "naan", "dosa", "idli", "sambar", "rasam", "upma", "omelette",
    "omelet", "pancake", "pancakes", "smoothie", "cake", "cookie", "cookies", "muffin",
    "muffins", "pie", "tart", "pudding", "kheer", "halwa", "ladoo", "dish", "meal", "recipe",
    "breakfast", "lunch", "dinner", "snack", "dessert", "stir-fry", "fries", "wrap", "taco",
    "tacos", "burrito", "risotto", "sushi", "gravy", "dip", "food",
];

/// Action words that signal a cooking instruction
pub const COOKING_VERBS: &[&str] = &[
    "boil", "boiled", "boiling", "fry", "fried", "frying", "deep-fry", "stir", "stirred",
    "stirring", "chop", "chopped", "chopping", "bake", "baked", "baking", "roast", "roasted",
    "roasting", "grill", "grilled", "saute", "sauteed", "simmer", "simmering", "steam",
    "steamed", "mix", "mixed", "whisk", "whisked", "blend", "blended", "knead", "marinate",
    "marinated", "season", "seasoned", "slice", "sliced", "dice", "diced", "minced", "peel",
    "peeled", "grate", "grated", "heat", "heated", "cook", "cooked", "cooking", "serve",
    "served", "garnish", "garnished", "add", "pour", "combine", "drain", "rinse", "wash",
    "soak", "soaked", "toast", "toasted", "melt", "melted", "preheat", "cover", "sprinkle",
    "spread", "fold", "beat", "cut", "cube", "cubed", "mash", "mashed", "stuff", "stuffed",
    "strain", "reduce", "temper", "roll", "layer", "refrigerate", "chill", "chilled",
    "freeze", "microwave", "squeeze", "crush", "crushed", "caramelize", "deglaze", "poach",
    "poached", "braise", "steep", "sieve", "ferment", "sear", "seared", "flip", "toss",
    "tossed", "coat", "drizzle", "shred", "shredded", "julienne", "puree", "pureed", "brush",
];

/// Tokens that are always reported, whatever their length
pub const NON_FOOD_BLOCKLIST: &[&str] = &[
    "laptop", "tyre", "tire", "tyres", "tires", "phone", "mobile", "computer", "keyboard",
    "mouse", "plastic", "metal", "steel", "glass", "paper", "cardboard", "rubber", "petrol",
    "diesel", "gasoline", "cement", "concrete", "brick", "bricks", "stone", "stones", "sand",
    "soap", "detergent", "shampoo", "bleach", "poison", "glue", "paint", "battery", "charger",
    "cable", "wire", "screw", "screws", "nail", "nails", "hammer", "car", "bike", "bicycle",
    "engine", "shoe", "shoes", "sock", "socks", "shirt", "gun", "pen", "pencil", "cigarette",
    "drug", "drugs", "toy",
];

/// Descriptive and kitchen words that are neither food nor suspicious
pub const ALLOWED_DESCRIPTIVE: &[&str] = &[
    // Taste and texture
    "tasty", "delicious", "homemade", "healthy", "fresh", "quick", "easy", "simple", "spicy",
    "sweet", "sour", "savory", "savoury", "tangy", "crispy", "crunchy", "creamy", "soft",
    "tender", "golden", "brown", "smooth", "thick", "thin", "juicy", "fluffy", "rich", "light",
    "mild", "hot", "warm", "cold", "cool", "raw", "ripe", "dry",
    // Manner
    "finely", "thinly", "roughly", "lightly", "gently", "evenly", "quickly", "slowly",
    "well", "together", "aside", "completely", "slightly", "occasionally", "continuously",
    // Non-cooking instruction verbs
    "bring", "keep", "place", "leave", "allow", "wait", "rest", "sit", "transfer", "remove",
    "check", "turn", "start", "continue", "repeat", "enjoy", "store", "prepare", "arrange",
    "divide", "adjust", "whistle", "whistles",
    // Quantities and time
    "minutes", "minute", "mins", "hours", "hour", "hrs", "seconds", "large", "small",
    "medium", "whole", "half", "pieces", "piece", "pinch", "handful", "cups", "teaspoon",
    "teaspoons", "tablespoon", "tablespoons", "grams", "litre", "liter", "taste", "serving",
    "servings", "portion", "portions", "inch",
    // Diets and styles
    "vegetarian", "vegan", "gluten-free", "low-carb", "keto", "protein", "fiber", "fibre",
    "comfort", "traditional", "classic", "authentic", "indian", "italian", "mexican",
    "chinese", "summer", "winter", "family", "party", "kids", "lowfat", "mood", "boost",
    "energy", "calming",
    // Kitchen
    "bowl", "pan", "pot", "oven", "plate", "skillet", "wok", "tray", "lid", "spoon", "knife",
    "kadai", "tawa", "cooker", "blender", "grater", "mixture", "batter", "paste", "flame",
    "table", "kitchen", "pressure", "temperature", "degrees", "side", "sides", "top",
    "bottom", "edges", "center", "centre", "layers", "surface",
    // Colours, cuts and varieties
    "green", "red", "black", "white", "yellow", "purple", "bell", "breast", "breasts", "thigh",
    "thighs", "fillet", "fillets", "whites", "yolk", "yolks", "leaf", "leaves", "all-purpose",
    "boneless", "skinless", "extra", "virgin", "ground", "dried", "frozen", "unsalted", "baby",
    "florets", "sprig", "sprigs", "zest",
];

/// Common English function words
pub const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "of", "in", "on", "to", "with", "for", "it", "its", "is",
    "are", "be", "then", "them", "they", "this", "that", "these", "those", "into", "onto",
    "over", "under", "until", "till", "from", "by", "at", "as", "about", "after", "before",
    "while", "when", "each", "all", "some", "more", "less", "very", "your", "you", "our",
    "we", "my", "i", "me", "up", "down", "out", "off", "if", "so", "but", "not", "no", "can",
    "will", "should", "let", "once", "again", "also", "just", "too", "per", "other",
    "another", "any", "both", "few", "through", "during", "now", "make", "makes", "made",
    "get", "use", "used", "using", "take", "what", "which", "where",
    "how", "there", "here", "their", "has", "have", "had", "was", "were", "been", "being",
    "do", "does", "done", "one", "two", "three", "four", "five", "first", "next", "finally",
    "lastly", "step", "steps", "like", "than", "such", "only", "much", "many", "most",
    "every", "enough", "around", "without", "within", "along", "across", "between",
];

/// Immutable word lists consulted by the keyword classifier
#[derive(Debug, Clone)]
pub struct Vocabulary {
    food_keywords: HashSet<String>,
    cooking_verbs: HashSet<String>,
    non_food_blocklist: HashSet<String>,
    allowed_descriptive: HashSet<String>,
    stopwords: HashSet<String>,
}

impl Vocabulary {
    /// The curated MoodBites lists
    #[must_use]
    pub fn curated() -> Self {
        Self {
            food_keywords: to_set(FOOD_KEYWORDS),
            cooking_verbs: to_set(COOKING_VERBS),
            non_food_blocklist: to_set(NON_FOOD_BLOCKLIST),
            allowed_descriptive: to_set(ALLOWED_DESCRIPTIVE),
            stopwords: to_set(STOPWORDS),
        }
    }

    /// Empty lists; useful as a base for fully custom vocabularies
    #[must_use]
    pub fn empty() -> Self {
        Self {
            food_keywords: HashSet::new(),
            cooking_verbs: HashSet::new(),
            non_food_blocklist: HashSet::new(),
            allowed_descriptive: HashSet::new(),
            stopwords: HashSet::new(),
        }
    }

    /// Add food keywords
    #[must_use]
    pub fn with_food_keywords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        extend(&mut self.food_keywords, words);
        self
    }

    /// Add cooking verbs
    #[must_use]
    pub fn with_cooking_verbs<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        extend(&mut self.cooking_verbs, words);
        self
    }

    /// Add blocklisted tokens
    #[must_use]
    pub fn with_blocklist<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        extend(&mut self.non_food_blocklist, words);
        self
    }

    /// Add allowed descriptive words
    #[must_use]
    pub fn with_allowed_descriptive<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        extend(&mut self.allowed_descriptive, words);
        self
    }

    /// Add stopwords
    #[must_use]
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        extend(&mut self.stopwords, words);
        self
    }

    /// Token is a known food term
    #[must_use]
    pub fn is_food(&self, token: &str) -> bool {
        self.food_keywords.contains(token)
    }

    /// Token is a cooking verb
    #[must_use]
    pub fn is_cooking_verb(&self, token: &str) -> bool {
        self.cooking_verbs.contains(token)
    }

    /// Token is explicitly disallowed
    #[must_use]
    pub fn is_blocked(&self, token: &str) -> bool {
        self.non_food_blocklist.contains(token)
    }

    /// Token is a harmless descriptive or kitchen word
    #[must_use]
    pub fn is_allowed_descriptive(&self, token: &str) -> bool {
        self.allowed_descriptive.contains(token)
    }

    /// Token is a stopword
    #[must_use]
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Number of food keywords, mostly for diagnostics
    #[must_use]
    pub fn food_keyword_count(&self) -> usize {
        self.food_keywords.len()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::curated()
    }
}

fn to_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|word| (*word).to_owned()).collect()
}

fn extend<I, S>(set: &mut HashSet<String>, words: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    set.extend(words.into_iter().map(|word| word.as_ref().trim().to_lowercase()));
}
