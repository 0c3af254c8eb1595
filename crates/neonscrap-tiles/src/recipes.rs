//! Crafting rules. Panels that list and trigger these live in the host.

use crate::inventory::Inventory;
use crate::kind::TileKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Recipe {
    pub result: TileKind,
    pub yield_count: u32,
    pub ingredients: &'static [(TileKind, u32)],
}

use TileKind::*;

/// Recipes available from the inventory panel.
pub const STANDARD_RECIPES: &[Recipe] = &[
    Recipe {
        result: AdvancedPickaxe,
        yield_count: 1,
        ingredients: &[(Pickaxe, 1), (NeonOrePink, 10), (CircuitScrap, 5), (RustedMetal, 20)],
    },
    Recipe {
        result: Workbench,
        yield_count: 1,
        ingredients: &[(RustedMetal, 10), (CircuitScrap, 5), (Concrete, 5)],
    },
    Recipe {
        result: DoorClosed,
        yield_count: 1,
        ingredients: &[(RustedMetal, 4), (CircuitScrap, 1)],
    },
    Recipe {
        result: Luminary,
        yield_count: 2,
        ingredients: &[(GlassPane, 1), (CircuitScrap, 1), (NeonOreBlue, 1)],
    },
    Recipe {
        result: AmmoPack,
        yield_count: 20,
        ingredients: &[(RustedMetal, 2), (NeonOreBlue, 1)],
    },
    Recipe {
        result: CyberWall,
        yield_count: 4,
        ingredients: &[(Concrete, 2), (RustedMetal, 1)],
    },
    Recipe {
        result: GlassPane,
        yield_count: 2,
        ingredients: &[(NeonOreBlue, 1)],
    },
    Recipe {
        result: ReactorCore,
        yield_count: 1,
        ingredients: &[(RustedMetal, 5), (CircuitScrap, 2), (NeonOrePink, 2)],
    },
    Recipe {
        result: Ladder,
        yield_count: 3,
        ingredients: &[(RustedMetal, 2)],
    },
    Recipe {
        result: PipeRusty,
        yield_count: 2,
        ingredients: &[(RustedMetal, 2)],
    },
    Recipe {
        result: SkyscraperFrame,
        yield_count: 10,
        ingredients: &[(Concrete, 5), (RustedMetal, 5)],
    },
];

/// Heavy recipes, only offered at a placed workbench.
pub const WORKBENCH_RECIPES: &[Recipe] = &[
    Recipe {
        result: MechSuit,
        yield_count: 1,
        ingredients: &[
            (SkyscraperFrame, 20),
            (CyberWall, 10),
            (ReactorCore, 1),
            (CircuitScrap, 20),
            (NeonOreBlue, 10),
        ],
    },
    Recipe {
        result: ReactorCore,
        yield_count: 1,
        ingredients: &[(NeonOrePink, 5), (CircuitScrap, 5), (RustedMetal, 10)],
    },
];

impl Recipe {
    pub fn can_craft(&self, inv: &Inventory, god_mode: bool) -> bool {
        god_mode || self.ingredients.iter().all(|(k, n)| inv.has(*k, *n))
    }

    /// Inventory deltas for one craft, or `None` when ingredients are short.
    /// God mode skips ingredient consumption.
    pub fn craft(&self, inv: &Inventory, god_mode: bool) -> Option<Vec<(TileKind, i32)>> {
        if !self.can_craft(inv, god_mode) {
            return None;
        }
        let mut deltas = Vec::with_capacity(self.ingredients.len() + 1);
        if !god_mode {
            deltas.extend(self.ingredients.iter().map(|(k, n)| (*k, -(*n as i32))));
        }
        deltas.push((self.result, self.yield_count as i32));
        Some(deltas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn craft_consumes_ingredients() {
        let mut inv = Inventory::new();
        inv.apply(RustedMetal, 3);
        let recipe = STANDARD_RECIPES.iter().find(|r| r.result == Ladder).unwrap();
        let deltas = recipe.craft(&inv, false).unwrap();
        for (k, d) in deltas {
            inv.apply(k, d);
        }
        assert_eq!(inv.count(RustedMetal), 1);
        assert_eq!(inv.count(Ladder), 3);
    }

    #[test]
    fn short_ingredients_rejected() {
        let inv = Inventory::new();
        let recipe = &WORKBENCH_RECIPES[0];
        assert!(recipe.craft(&inv, false).is_none());
    }

    #[test]
    fn god_mode_is_free() {
        let inv = Inventory::new();
        let recipe = &WORKBENCH_RECIPES[0];
        assert_eq!(recipe.craft(&inv, true), Some(vec![(MechSuit, 1)]));
    }

    #[test]
    fn no_recipe_produces_air() {
        for r in STANDARD_RECIPES.iter().chain(WORKBENCH_RECIPES) {
            assert!(!r.result.is_air());
            assert!(r.yield_count > 0);
        }
    }
}
