//! Terrain surrounding a town and the item needed to cross it.

use crate::hunter::Hunter;
use crate::item::Item;
use rand::Rng;
use std::fmt;

/// The six kinds of terrain a town can be surrounded by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerrainKind {
    Mountains,
    Ocean,
    Plains,
    Desert,
    Jungle,
    Marsh,
}

impl TerrainKind {
    /// All kinds in roll order.
    pub const ALL: [TerrainKind; 6] = [
        TerrainKind::Mountains,
        TerrainKind::Ocean,
        TerrainKind::Plains,
        TerrainKind::Desert,
        TerrainKind::Jungle,
        TerrainKind::Marsh,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TerrainKind::Mountains => "Mountains",
            TerrainKind::Ocean => "Ocean",
            TerrainKind::Plains => "Plains",
            TerrainKind::Desert => "Desert",
            TerrainKind::Jungle => "Jungle",
            TerrainKind::Marsh => "Marsh",
        }
    }

    /// The one item that gets a hunter across this terrain. The pairing
    /// is fixed; there is no other way to build a crossing requirement.
    pub fn needed_item(&self) -> Item {
        match self {
            TerrainKind::Mountains => Item::Rope,
            TerrainKind::Ocean => Item::Boat,
            TerrainKind::Plains => Item::Horse,
            TerrainKind::Desert => Item::Water,
            TerrainKind::Jungle => Item::Machete,
            TerrainKind::Marsh => Item::Boots,
        }
    }
}

impl fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable terrain value, assigned to a town once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terrain {
    kind: TerrainKind,
}

impl Terrain {
    pub fn new(kind: TerrainKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> TerrainKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn needed_item(&self) -> Item {
        self.kind.needed_item()
    }

    /// Whether the hunter's kit contains the crossing item.
    pub fn can_cross(&self, hunter: &Hunter) -> bool {
        hunter.has_item(self.needed_item())
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rolls the terrain for a new town.
///
/// Draws uniformly in [0, 1.5) and partitions into six 0.25-wide buckets,
/// so each kind comes up 1 in 6.
pub fn roll_terrain(rng: &mut impl Rng) -> Terrain {
    let roll: f64 = rng.gen_range(0.0..1.5);
    let kind = if roll < 0.25 {
        TerrainKind::Mountains
    } else if roll < 0.50 {
        TerrainKind::Ocean
    } else if roll < 0.75 {
        TerrainKind::Plains
    } else if roll < 1.0 {
        TerrainKind::Desert
    } else if roll < 1.25 {
        TerrainKind::Jungle
    } else {
        TerrainKind::Marsh
    };
    Terrain::new(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_needed_item_table() {
        assert_eq!(TerrainKind::Mountains.needed_item(), Item::Rope);
        assert_eq!(TerrainKind::Ocean.needed_item(), Item::Boat);
        assert_eq!(TerrainKind::Plains.needed_item(), Item::Horse);
        assert_eq!(TerrainKind::Desert.needed_item(), Item::Water);
        assert_eq!(TerrainKind::Jungle.needed_item(), Item::Machete);
        assert_eq!(TerrainKind::Marsh.needed_item(), Item::Boots);
    }

    #[test]
    fn test_roll_terrain_returns_valid_kinds() {
        let mut rng = create_test_rng();
        for _ in 0..1000 {
            let terrain = roll_terrain(&mut rng);
            assert!(TerrainKind::ALL.contains(&terrain.kind()));
        }
    }

    #[test]
    fn test_roll_terrain_hits_every_kind() {
        let mut rng = create_test_rng();
        let mut counts = [0u32; 6];
        for _ in 0..6000 {
            let terrain = roll_terrain(&mut rng);
            let idx = TerrainKind::ALL
                .iter()
                .position(|k| *k == terrain.kind())
                .unwrap();
            counts[idx] += 1;
        }
        // Each kind is 1/6 likely; with 6000 rolls every bucket should be
        // populated and roughly even.
        for (idx, count) in counts.iter().enumerate() {
            assert!(
                *count > 700 && *count < 1300,
                "{} rolled {} times out of 6000",
                TerrainKind::ALL[idx],
                count
            );
        }
    }

    #[test]
    fn test_can_cross_requires_needed_item() {
        let terrain = Terrain::new(TerrainKind::Desert);
        let mut hunter = Hunter::new("Tester", 10);
        assert!(!terrain.can_cross(&hunter));

        hunter.add_item(Item::Water);
        assert!(terrain.can_cross(&hunter));

        // Any other item does not help.
        let mut other = Hunter::new("Other", 10);
        other.add_item(Item::Boat);
        assert!(!terrain.can_cross(&other));
    }

    #[test]
    fn test_terrain_display_uses_name() {
        assert_eq!(Terrain::new(TerrainKind::Jungle).to_string(), "Jungle");
    }
}
