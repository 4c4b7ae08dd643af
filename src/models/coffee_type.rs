use serde::{Deserialize, Serialize};

/// Built-in catalog: (id, title).
const CATALOG: &[(&str, &str)] = &[
    ("espresso", "Espresso"),
    ("americano", "Americano"),
    ("cappuccino", "Cappuccino"),
    ("latte", "Latte"),
    ("macchiato", "Macchiato"),
    ("mocha", "Mocha"),
    ("flat-white", "Flat White"),
    ("cold-brew", "Cold Brew"),
    ("filter", "Filter Coffee"),
];

/// A kind of coffee. Log entries embed it by value, so an entry keeps
/// its title even if the catalog changes later.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoffeeType {
    pub id: String,
    pub title: String,
}

impl CoffeeType {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
        }
    }

    /// All catalog entries, in display order.
    pub fn catalog() -> Vec<CoffeeType> {
        CATALOG
            .iter()
            .map(|(id, title)| CoffeeType::new(id, title))
            .collect()
    }

    /// Helper: resolve user input (id or title, any case) to a catalog entry
    pub fn from_code(code: &str) -> Option<Self> {
        let wanted = code.trim().to_lowercase();
        CATALOG
            .iter()
            .find(|(id, title)| *id == wanted || title.to_lowercase() == wanted)
            .map(|(id, title)| CoffeeType::new(id, title))
    }
}
