/// Item to be loaded, representing `quantity` identical rectangular units.
///
/// Plain value type: every concurrent algorithm run receives its own owned
/// copy of the item list, so no two runs ever observe the same instances.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: usize,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// Number of identical units requested
    pub quantity: usize,
}

impl Item {
    pub fn new(id: usize, length: f64, width: f64, height: f64, quantity: usize) -> Self {
        Self {
            id,
            length,
            width,
            height,
            quantity,
        }
    }

    /// The volume of a single unit of this item.
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    /// A copy of this item with a different quantity, used by the capacity search.
    pub fn with_quantity(&self, quantity: usize) -> Self {
        Self { quantity, ..*self }
    }

    /// A single unit of this item (quantity 1).
    pub fn unit(&self) -> Self {
        self.with_quantity(1)
    }
}
