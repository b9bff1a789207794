#![allow(dead_code)]

use rsm_ships::{Block, Command, Fleet, OpaqueValue, Ship, ShipData};

/// A ship as exported by the game: hex idents and colors, a single-flag
/// command, a leftover block without ident and per-instance keys that the
/// model drops.
pub const INTERCEPTOR: &str = r#"{
  "angle": 0,
  "position": [120.5, -40],
  "data": {
    "name": "Interceptor",
    "author": "nuke",
    "color0": 0x2a4d6b,
    "color1": 0xffffff,
    "color2": 0x0,
    "wgroup": [0, 1, 2, 0]
  },
  "blocks": [
    {"ident": 0x2d, "offset": [0, 0], "angle": 0, "command": {"flags": "ALWAYS_MANEUVER", "faction": 8}},
    {"ident": 17, "offset": [5, 0], "angle": 1.5707963, "bindingId": 1, "health": 40},
    {"offset": [20, 20], "angle": 0},
    {"ident": 0x1F, "offset": [-5, 0], "angle": -1.5707963, "bindingId": 2}
  ]
}"#;

pub const RED_FLEET: &str = r#"{"name":"Red Fleet","blueprints":[],"faction":1}"#;

pub const BARE_SHIP: &str = r#"{"angle":0,"data":{"name":"x","author":"y"},"blocks":[]}"#;

pub fn opaque(text: &str) -> OpaqueValue {
    OpaqueValue::from_raw(text).unwrap()
}

pub fn block(id: Option<&str>, x: f64) -> Block {
    Block {
        id: id.map(opaque),
        offset: [x, 0.0],
        angle: 0.0,
        command: None,
        binding_id: 0,
    }
}

pub fn ship(name: &str, blocks: Vec<Block>) -> Ship {
    Ship::new(ShipData::new(name, "tester"), blocks)
}

pub fn flagship() -> Ship {
    Ship::new(
        ShipData::new("Flagship", "tester")
            .with_colors(Some(opaque("0xff0000")), None, Some(opaque("255")))
            .with_wgroup([1, 1, 2, 0]),
        vec![
            Block::new(opaque("0x10d"), [0.0, 0.0], 0.0)
                .unwrap()
                .with_command(
                    Command::new()
                        .with_flags(opaque(r#"["ALWAYS_RUSH","AI_BINDING"]"#))
                        .with_faction(100),
                ),
            Block::new(opaque("3"), [4.0, 0.0], 0.0)
                .unwrap()
                .with_binding_id(5),
        ],
    )
    .with_angle(0.25)
    .unwrap()
    .with_position([1.0, 2.0])
    .unwrap()
}

pub fn tournament_fleet() -> Fleet {
    Fleet::new("Blue Team", 101)
        .with_colors(Some(opaque("0x0000ff")), Some(opaque("0x00ff00")), None)
        .with_blueprints([flagship(), ship("Escort", vec![block(Some("1"), 0.0)])])
}
