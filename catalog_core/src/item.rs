use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog item. Immutable once defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique catalog id (e.g. `iron-sword`)
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rarity: Rarity,
    /// Monetary value in gold
    #[serde(default)]
    pub value: u64,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Slot this item occupies when equipped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<EquipmentSlot>,
    /// Stat bonus while equipped
    #[serde(default, rename = "stats", skip_serializing_if = "Option::is_none")]
    pub bonus: Option<StatBonus>,
}

impl Item {
    /// Create an equipment item for the given slot
    pub fn equipment(
        id: impl Into<String>,
        name: impl Into<String>,
        slot: EquipmentSlot,
        bonus: StatBonus,
    ) -> Self {
        Item {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            rarity: Rarity::Common,
            value: 0,
            kind: ItemKind::Equipment,
            slot: Some(slot),
            bonus: Some(bonus),
        }
    }

    /// Create a consumable item
    pub fn consumable(id: impl Into<String>, name: impl Into<String>) -> Self {
        Item {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            rarity: Rarity::Common,
            value: 0,
            kind: ItemKind::Consumable,
            slot: None,
            bonus: None,
        }
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn with_value(mut self, value: u64) -> Self {
        self.value = value;
        self
    }

    /// The slot this item can be equipped into, if it is equipment at all
    pub fn equip_slot(&self) -> Option<EquipmentSlot> {
        match self.kind {
            ItemKind::Equipment => self.slot,
            ItemKind::Consumable => None,
        }
    }

    /// Stat contribution while equipped (zero for items without a bonus)
    pub fn bonus_stats(&self) -> Stats {
        self.bonus.map(|b| b.as_stats()).unwrap_or_default()
    }

    /// Check the item's own shape: equipment needs a slot, consumables must not have one
    pub(crate) fn shape_error(&self) -> Option<String> {
        match (self.kind, self.slot) {
            (ItemKind::Equipment, None) => {
                Some(format!("equipment item '{}' has no slot", self.id))
            }
            (ItemKind::Consumable, Some(slot)) => Some(format!(
                "consumable item '{}' declares slot '{}'",
                self.id, slot
            )),
            _ => None,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "══ {} ══", self.name)?;
        match self.slot {
            Some(slot) => writeln!(f, "{} ({})", slot, self.rarity)?,
            None => writeln!(f, "consumable ({})", self.rarity)?,
        }

        if let Some(bonus) = self.bonus {
            let mut parts = Vec::new();
            for (label, value) in [
                ("Strength", bonus.strength),
                ("Intelligence", bonus.intelligence),
                ("Dexterity", bonus.dexterity),
                ("Constitution", bonus.constitution),
            ] {
                if let Some(v) = value {
                    parts.push(format!("+{} {}", v, label));
                }
            }
            if !parts.is_empty() {
                writeln!(f)?;
                for part in parts {
                    writeln!(f, "  {}", part)?;
                }
            }
        }

        write!(f, "Value: {} gold", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item() {
        let toml = r#"
id = "iron-sword"
name = "Iron Sword"
description = "A basic sword"
rarity = "Common"
value = 100
type = "equipment"
slot = "weapon"

[stats]
strength = 5
"#;
        let item: Item = toml::from_str(toml).unwrap();
        assert_eq!(item.equip_slot(), Some(EquipmentSlot::Weapon));
        assert_eq!(item.bonus_stats(), Stats::new(5, 0, 0, 0));
        assert!(item.shape_error().is_none());
    }

    #[test]
    fn test_consumable_has_no_equip_slot() {
        let potion = Item::consumable("health-potion", "Health Potion");
        assert_eq!(potion.equip_slot(), None);
        assert_eq!(potion.bonus_stats(), Stats::default());
    }

    #[test]
    fn test_shape_errors() {
        let mut sword = Item::equipment(
            "sword",
            "Sword",
            EquipmentSlot::Weapon,
            StatBonus::default(),
        );
        sword.slot = None;
        assert!(sword.shape_error().is_some());

        let mut potion = Item::consumable("potion", "Potion");
        potion.slot = Some(EquipmentSlot::Ring1);
        assert!(potion.shape_error().is_some());
    }

    #[test]
    fn test_display() {
        let ring = Item::equipment(
            "strength-ring",
            "Ring of Strength",
            EquipmentSlot::Ring1,
            StatBonus {
                strength: Some(3),
                ..StatBonus::default()
            },
        )
        .with_rarity(Rarity::Rare)
        .with_value(300);

        let text = ring.to_string();
        assert!(text.contains("Ring of Strength"));
        assert!(text.contains("ring1 (Rare)"));
        assert!(text.contains("+3 Strength"));
        assert!(text.ends_with("Value: 300 gold"));
    }
}
