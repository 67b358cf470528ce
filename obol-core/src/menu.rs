//! The drink menu
//!
//! The selection of drinks and their prices is fixed at build time. Prices
//! are in minor currency units (pence) throughout.

/// Available drinks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Drink {
    #[default]
    Cola,
    Lemonade,
    OrangeJuice,
    Water,
}

impl Drink {
    /// Number of drinks on the menu
    pub const COUNT: u8 = 4;

    /// Price in minor currency units
    pub const fn price(self) -> u16 {
        match self {
            Drink::Cola => 80,
            Drink::Lemonade => 80,
            Drink::OrangeJuice => 60,
            Drink::Water => 50,
        }
    }

    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            Drink::Cola => "Cola",
            Drink::Lemonade => "Lemonade",
            Drink::OrangeJuice => "Orange Juice",
            Drink::Water => "Water",
        }
    }

    /// Menu position (0-based)
    pub const fn index(self) -> u8 {
        match self {
            Drink::Cola => 0,
            Drink::Lemonade => 1,
            Drink::OrangeJuice => 2,
            Drink::Water => 3,
        }
    }

    /// Look up a drink by menu position
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Drink::Cola),
            1 => Some(Drink::Lemonade),
            2 => Some(Drink::OrangeJuice),
            3 => Some(Drink::Water),
            _ => None,
        }
    }

    /// The next drink in menu order, wrapping back to the first
    pub const fn next(self) -> Self {
        match self {
            Drink::Cola => Drink::Lemonade,
            Drink::Lemonade => Drink::OrangeJuice,
            Drink::OrangeJuice => Drink::Water,
            Drink::Water => Drink::Cola,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prices() {
        assert_eq!(Drink::Cola.price(), 80);
        assert_eq!(Drink::Lemonade.price(), 80);
        assert_eq!(Drink::OrangeJuice.price(), 60);
        assert_eq!(Drink::Water.price(), 50);
    }

    #[test]
    fn test_cycling_wraps() {
        let mut drink = Drink::Cola;
        for _ in 0..Drink::COUNT {
            drink = drink.next();
        }
        assert_eq!(drink, Drink::Cola);
    }

    #[test]
    fn test_index_round_trip() {
        for i in 0..Drink::COUNT {
            let drink = Drink::from_index(i).unwrap();
            assert_eq!(drink.index(), i);
        }
        assert!(Drink::from_index(Drink::COUNT).is_none());
    }

    #[test]
    fn test_default_is_first_menu_entry() {
        assert_eq!(Drink::default().index(), 0);
    }
}
