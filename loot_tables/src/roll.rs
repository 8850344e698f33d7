/// Result of rolling a loot table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LootRoll {
    /// Gold sampled from the table's range
    pub gold: u64,
    /// Item ids that passed their drop check, in table order
    pub items: Vec<String>,
}

impl LootRoll {
    /// Nothing dropped at all
    pub fn is_empty(&self) -> bool {
        self.gold == 0 && self.items.is_empty()
    }
}
