//! The fixed recipe catalog.

/// Resources consumed and money earned by one drink. Every drink also takes one cup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    pub water: u32,
    pub milk: u32,
    pub beans: u32,
    pub cost: u32,
}

impl Recipe {
    pub const ESPRESSO: Recipe = Recipe::new(250, 0, 16, 4);
    pub const LATTE: Recipe = Recipe::new(350, 75, 20, 7);
    pub const CAPPUCCINO: Recipe = Recipe::new(200, 100, 12, 6);

    pub const fn new(water: u32, milk: u32, beans: u32, cost: u32) -> Self {
        Self {
            water,
            milk,
            beans,
            cost,
        }
    }
}

/// The drinks the machine knows how to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Drink {
    Espresso,
    Latte,
    Cappuccino,
}

impl Drink {
    pub const ALL: [Drink; 3] = [Drink::Espresso, Drink::Latte, Drink::Cappuccino];

    pub const fn recipe(self) -> Recipe {
        match self {
            Drink::Espresso => Recipe::ESPRESSO,
            Drink::Latte => Recipe::LATTE,
            Drink::Cappuccino => Recipe::CAPPUCCINO,
        }
    }

    /// Maps a buy sub-menu token (`1`, `2`, `3`) to a drink.
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Drink::Espresso),
            "2" => Some(Drink::Latte),
            "3" => Some(Drink::Cappuccino),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choices() {
        assert_eq!(Drink::from_menu_choice("1"), Some(Drink::Espresso));
        assert_eq!(Drink::from_menu_choice("2"), Some(Drink::Latte));
        assert_eq!(Drink::from_menu_choice("3"), Some(Drink::Cappuccino));
        assert_eq!(Drink::from_menu_choice("back"), None);
        assert_eq!(Drink::from_menu_choice(""), None);
    }

    #[test]
    fn test_catalog_values() {
        assert_eq!(Drink::Espresso.recipe(), Recipe::new(250, 0, 16, 4));
        assert_eq!(Drink::Latte.recipe(), Recipe::new(350, 75, 20, 7));
        assert_eq!(Drink::Cappuccino.recipe(), Recipe::new(200, 100, 12, 6));
    }
}
