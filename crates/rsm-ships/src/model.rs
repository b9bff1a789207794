//! Blueprint records: commands, blocks, ships and fleets.
//!
//! Field names follow the game's JSON keys. Fields whose type the game does
//! not keep stable are [`OpaqueValue`]s. Any key not modelled here is
//! dropped on decode; block records in particular carry many per-instance
//! fields that are intentionally purged.

use std::fmt;

use rsm_json::{JsonError, OpaqueValue};
use serde::de::{IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{BlueprintError, Result};

fn is_zero_int(value: &i64) -> bool {
    *value == 0
}

fn is_zero_float(value: &f64) -> bool {
    *value == 0.0
}

fn finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(BlueprintError::NonFinite { field })
    }
}

/// AI command attached to a command block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// `ALWAYS_MANEUVER`, `AI_BINDING`, ... The game writes a bare string
    /// when only one flag is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<OpaqueValue>,
    /// `0` means unset and is left out of the output.
    #[serde(default, skip_serializing_if = "is_zero_int")]
    pub faction: i64,
}

impl Command {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flags(mut self, flags: OpaqueValue) -> Self {
        self.flags = Some(flags);
        self
    }

    pub fn with_faction(mut self, faction: i64) -> Self {
        self.faction = faction;
        self
    }

    /// Flag names, whether stored as a single string or an array.
    pub fn flag_names(&self) -> std::result::Result<Vec<String>, JsonError> {
        match &self.flags {
            Some(flags) if !flags.is_null() => flags.decode_one_or_many(),
            _ => Ok(Vec::new()),
        }
    }
}

/// One block of a ship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Block ident, decimal or hex. Absent or `null` marks a leftover
    /// artifact, see [`crate::normalize::remove_nil_ids`].
    #[serde(rename = "ident", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OpaqueValue>,
    /// Offset of the block centroid from the ship origin.
    #[serde(default)]
    pub offset: [f64; 2],
    #[serde(default)]
    pub angle: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
    /// `0` means unbound and is left out of the output.
    #[serde(rename = "bindingId", default, skip_serializing_if = "is_zero_int")]
    pub binding_id: i64,
}

impl Block {
    /// Fails on a NaN or infinite offset or angle, which JSON cannot carry.
    pub fn new(id: OpaqueValue, offset: [f64; 2], angle: f64) -> Result<Self> {
        Ok(Self {
            id: Some(id),
            offset: [finite("offset", offset[0])?, finite("offset", offset[1])?],
            angle: finite("angle", angle)?,
            command: None,
            binding_id: 0,
        })
    }

    pub fn with_command(mut self, command: Command) -> Self {
        self.command = Some(command);
        self
    }

    pub fn with_binding_id(mut self, binding_id: i64) -> Self {
        self.binding_id = binding_id;
        self
    }

    /// `true` when the ident is present and not `null`.
    pub fn has_id(&self) -> bool {
        self.id.as_ref().is_some_and(|id| !id.is_null())
    }
}

/// Weapon binding group, the index into [`ShipData::wgroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaponGroup {
    Primary = 0,
    Secondary = 1,
    Tertiary = 2,
    Autofire = 3,
}

/// Firing cadence of a weapon group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FireMode {
    /// Game default, currently the same as fire all.
    Default = 0,
    /// Every weapon fires at its own rate.
    FireAll = 1,
    /// Weapons fire one after another.
    RippleFire = 2,
}

impl FireMode {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(FireMode::Default),
            1 => Some(FireMode::FireAll),
            2 => Some(FireMode::RippleFire),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        self as i64
    }
}

/// The `data` object of a ship: name, author, colors and weapon groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color0: Option<OpaqueValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color1: Option<OpaqueValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color2: Option<OpaqueValue>,
    /// Fire mode codes for primary, secondary, tertiary and autofire groups.
    /// Codes outside `0..=2` are kept as written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wgroup: Option<[i64; 4]>,
}

impl ShipData {
    pub fn new(name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            ..Self::default()
        }
    }

    pub fn with_colors(
        mut self,
        color0: Option<OpaqueValue>,
        color1: Option<OpaqueValue>,
        color2: Option<OpaqueValue>,
    ) -> Self {
        self.color0 = color0;
        self.color1 = color1;
        self.color2 = color2;
        self
    }

    pub fn with_wgroup(mut self, wgroup: [i64; 4]) -> Self {
        self.wgroup = Some(wgroup);
        self
    }

    /// Fire mode of `group`, `None` when unset or when the code is unknown.
    pub fn fire_mode(&self, group: WeaponGroup) -> Option<FireMode> {
        self.wgroup
            .and_then(|codes| FireMode::from_code(codes[group as usize]))
    }
}

/// A single ship blueprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    /// Spawn angle in radians, left out of the output when `0`.
    #[serde(default, skip_serializing_if = "is_zero_float")]
    pub angle: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<[f64; 2]>,
    pub data: ShipData,
    pub blocks: Vec<Block>,
}

impl Ship {
    pub fn new(data: ShipData, blocks: Vec<Block>) -> Self {
        Self {
            angle: 0.0,
            position: None,
            data,
            blocks,
        }
    }

    pub fn with_angle(mut self, angle: f64) -> Result<Self> {
        self.angle = finite("angle", angle)?;
        Ok(self)
    }

    pub fn with_position(mut self, position: [f64; 2]) -> Result<Self> {
        self.position = Some([
            finite("position", position[0])?,
            finite("position", position[1])?,
        ]);
        Ok(self)
    }

    /// Number of blocks that normalization would drop.
    pub fn nil_id_count(&self) -> usize {
        self.blocks.iter().filter(|block| !block.has_id()).count()
    }
}

/// A fleet of ships, as used for tournaments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fleet {
    pub blueprints: Vec<Ship>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color0: Option<OpaqueValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color1: Option<OpaqueValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color2: Option<OpaqueValue>,
    /// Faction given to every command on import.
    #[serde(default)]
    pub faction: i64,
    pub name: String,
}

impl Fleet {
    /// Empty fleet; add ships with [`Fleet::with_blueprints`].
    pub fn new(name: impl Into<String>, faction: i64) -> Self {
        Self {
            blueprints: Vec::new(),
            color0: None,
            color1: None,
            color2: None,
            faction,
            name: name.into(),
        }
    }

    pub fn with_colors(
        mut self,
        color0: Option<OpaqueValue>,
        color1: Option<OpaqueValue>,
        color2: Option<OpaqueValue>,
    ) -> Self {
        self.color0 = color0;
        self.color1 = color1;
        self.color2 = color2;
        self
    }
}

/// Minimal shape used to tell fleet files from ship files.
///
/// Fleets have a top-level `name` key; ships keep theirs under `data`.
/// Only object keys count: an array never yields a `name`, and a key
/// holding `null` is still present.
#[derive(Debug, Default)]
pub struct FormatProbe {
    pub name: Option<OpaqueValue>,
}

impl FormatProbe {
    pub fn is_fleet(&self) -> bool {
        self.name.is_some()
    }
}

impl<'de> Deserialize<'de> for FormatProbe {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ProbeVisitor)
    }
}

struct ProbeVisitor;

impl<'de> Visitor<'de> for ProbeVisitor {
    type Value = FormatProbe;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a blueprint object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<FormatProbe, A::Error> {
        let mut probe = FormatProbe::default();
        while let Some(key) = map.next_key::<String>()? {
            if key == "name" {
                probe.name = Some(map.next_value()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(probe)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<FormatProbe, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(FormatProbe::default())
    }
}

/// Either kind of blueprint file.
#[derive(Debug, Clone, PartialEq)]
pub enum Blueprint {
    Ship(Ship),
    Fleet(Fleet),
}

impl Blueprint {
    pub fn is_fleet(&self) -> bool {
        matches!(self, Blueprint::Fleet(_))
    }

    pub fn name(&self) -> &str {
        match self {
            Blueprint::Ship(ship) => &ship.data.name,
            Blueprint::Fleet(fleet) => &fleet.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque(text: &str) -> OpaqueValue {
        OpaqueValue::from_raw(text).unwrap()
    }

    #[test]
    fn flag_names_accept_scalar_and_array() {
        let single = Command::new().with_flags(opaque(r#""ALWAYS_KITE""#));
        let many = Command::new().with_flags(opaque(r#"["ALWAYS_KITE","AI_BINDING"]"#));
        assert_eq!(single.flag_names().unwrap(), vec!["ALWAYS_KITE"]);
        assert_eq!(many.flag_names().unwrap(), vec!["ALWAYS_KITE", "AI_BINDING"]);
        assert!(Command::new().flag_names().unwrap().is_empty());
    }

    #[test]
    fn fire_modes() {
        let data = ShipData::new("a", "b").with_wgroup([0, 1, 2, 7]);
        assert_eq!(data.fire_mode(WeaponGroup::Primary), Some(FireMode::Default));
        assert_eq!(data.fire_mode(WeaponGroup::Secondary), Some(FireMode::FireAll));
        assert_eq!(data.fire_mode(WeaponGroup::Tertiary), Some(FireMode::RippleFire));
        assert_eq!(data.fire_mode(WeaponGroup::Autofire), None);
        assert_eq!(data.wgroup, Some([0, 1, 2, 7]));
        assert_eq!(ShipData::new("a", "b").fire_mode(WeaponGroup::Primary), None);
        assert_eq!(FireMode::RippleFire.code(), 2);
    }

    #[test]
    fn has_id_treats_explicit_null_as_missing() {
        assert!(Block::new(opaque("0x1"), [0.0, 0.0], 0.0).unwrap().has_id());
        assert!(!Block::new(opaque("null"), [0.0, 0.0], 0.0).unwrap().has_id());
    }

    #[test]
    fn builders_reject_non_finite_floats() {
        let err = Block::new(opaque("1"), [f64::NAN, 0.0], 0.0).unwrap_err();
        assert!(matches!(err, BlueprintError::NonFinite { field: "offset" }));
        let err = Block::new(opaque("1"), [0.0, 0.0], f64::INFINITY).unwrap_err();
        assert!(matches!(err, BlueprintError::NonFinite { field: "angle" }));

        let ship = Ship::new(ShipData::new("s", "a"), vec![]);
        assert!(ship.clone().with_angle(f64::NEG_INFINITY).is_err());
        assert!(ship.clone().with_position([0.0, f64::NAN]).is_err());
        assert_eq!(ship.with_angle(-1.5).unwrap().angle, -1.5);
    }

    #[test]
    fn nil_id_count() {
        let mut blank = Block::new(opaque("1"), [1.0, 0.0], 0.0).unwrap();
        blank.id = None;
        let ship = Ship::new(
            ShipData::new("s", "a"),
            vec![Block::new(opaque("1"), [0.0, 0.0], 0.0).unwrap(), blank],
        );
        assert_eq!(ship.nil_id_count(), 1);
    }

    #[test]
    fn blueprint_name() {
        let ship = Blueprint::Ship(Ship::new(ShipData::new("Viper", "x"), vec![]));
        let fleet = Blueprint::Fleet(Fleet::new("Red Fleet", 1));
        assert_eq!(ship.name(), "Viper");
        assert!(!ship.is_fleet());
        assert_eq!(fleet.name(), "Red Fleet");
        assert!(fleet.is_fleet());
    }
}
