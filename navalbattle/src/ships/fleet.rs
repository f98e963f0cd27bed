use crate::ships::ShipClass;

/// The ships each player has to place before shooting starts, as an ordered list of
/// `(class, count)` pairs. Setup asks for ships in list order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FleetComposition(Vec<(ShipClass, usize)>);

impl FleetComposition {
    /// Build a composition from an explicit list. Panics if the list contains no ships.
    pub fn new(entries: Vec<(ShipClass, usize)>) -> Self {
        assert!(entries.iter().any(|&(_, count)| count > 0));
        FleetComposition(entries)
    }

    /// The classic fleet: one battleship, two cruisers, three destroyers and four
    /// submarines.
    pub fn standard() -> Self {
        Self::new(vec![
            (ShipClass::Battleship, 1),
            (ShipClass::Cruiser, 2),
            (ShipClass::Destroyer, 3),
            (ShipClass::Submarine, 4),
        ])
    }

    /// Get an iterator over every ship to place, one item per ship, in setup order.
    pub fn iter_ships(&self) -> impl '_ + Iterator<Item = ShipClass> {
        self.0
            .iter()
            .flat_map(|&(class, count)| std::iter::repeat(class).take(count))
    }

    /// The class of the `index`-th ship in setup order.
    pub fn nth_ship(&self, index: usize) -> Option<ShipClass> {
        self.iter_ships().nth(index)
    }

    /// Number of ships in the fleet.
    pub fn total_ships(&self) -> usize {
        self.0.iter().map(|&(_, count)| count).sum()
    }

    /// Number of cells the whole fleet covers.
    pub fn total_cells(&self) -> usize {
        self.0.iter().map(|&(class, count)| class.len() * count).sum()
    }
}

impl Default for FleetComposition {
    fn default() -> Self {
        Self::standard()
    }
}
