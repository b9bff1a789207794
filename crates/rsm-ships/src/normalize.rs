//! Block filtering and fleet assembly.
//!
//! Both passes return new values; the input is never modified.

use log::debug;

use crate::model::{Block, Fleet, Ship};

/// Copy of `ship` without the blocks whose ident is absent or `null`.
///
/// Leaving and re-entering the sandbox can leave ident-less square blocks
/// next to launchers; they never carry meaning. Order is preserved and
/// duplicate idents are kept.
pub fn remove_nil_ids(ship: &Ship) -> Ship {
    let blocks: Vec<Block> = ship.blocks.iter().filter(|b| b.has_id()).cloned().collect();
    log_dropped(&ship.data.name, ship.blocks.len() - blocks.len());
    Ship {
        angle: ship.angle,
        position: ship.position,
        data: ship.data.clone(),
        blocks,
    }
}

/// Copy of `template` whose blueprints are `ships`.
///
/// Colors, faction and name come from `template` unchanged. Ship command
/// factions are not reconciled with the fleet faction.
pub fn assemble_fleet(template: &Fleet, ships: Vec<Ship>) -> Fleet {
    Fleet {
        blueprints: ships,
        color0: template.color0.clone(),
        color1: template.color1.clone(),
        color2: template.color2.clone(),
        faction: template.faction,
        name: template.name.clone(),
    }
}

/// Copy of `fleet` with [`remove_nil_ids`] applied to every blueprint.
pub fn normalize_fleet(fleet: &Fleet) -> Fleet {
    assemble_fleet(fleet, fleet.blueprints.iter().map(remove_nil_ids).collect())
}

fn log_dropped(name: &str, dropped: usize) {
    if dropped > 0 {
        debug!("dropped {dropped} block(s) without ident from ship {name:?}");
    }
}

impl Ship {
    /// See [`remove_nil_ids`].
    pub fn remove_nil_ids(&self) -> Ship {
        remove_nil_ids(self)
    }

    /// Owned form of [`remove_nil_ids`], no block is cloned.
    pub fn into_normalized(mut self) -> Ship {
        let before = self.blocks.len();
        self.blocks.retain(Block::has_id);
        log_dropped(&self.data.name, before - self.blocks.len());
        self
    }
}

impl Fleet {
    /// See [`assemble_fleet`].
    pub fn with_blueprints(&self, ships: impl IntoIterator<Item = Ship>) -> Fleet {
        assemble_fleet(self, ships.into_iter().collect())
    }
}
