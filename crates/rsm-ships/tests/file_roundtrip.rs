//! File helpers against a temporary directory.

mod common;

use std::fs;

use common::*;
use rsm_ships::fs::{
    is_fleet_file, read_blueprint, read_fleet, read_ship, write_fleet, write_fleet_gzip,
    write_ship,
};
use rsm_ships::{Blueprint, BlueprintError, Fleet, Gzip};
use tempfile::TempDir;

#[test]
fn ship_file_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("interceptor.json");
    fs::write(&path, INTERCEPTOR).unwrap();

    let ship = read_ship(&path).unwrap();
    assert!(!is_fleet_file(&path).unwrap());
    assert_eq!(ship.blocks.len(), 3);

    let out = dir.path().join("copy.json");
    write_ship(&out, &ship).unwrap();
    assert_eq!(read_ship(&out).unwrap(), ship);
}

#[test]
fn plain_and_gzip_fleet_files() {
    let dir = TempDir::new().unwrap();
    let fleet = tournament_fleet();

    let plain = dir.path().join("fleet.json");
    write_fleet(&plain, &fleet).unwrap();
    assert!(is_fleet_file(&plain).unwrap());
    assert_eq!(read_fleet(&plain).unwrap(), fleet);

    let packed = dir.path().join("fleet.json.gz");
    write_fleet_gzip(&packed, &fleet).unwrap();
    assert!(Gzip::is_gzip(&fs::read(&packed).unwrap()));
    assert_eq!(read_fleet(&packed).unwrap(), fleet);
    assert_eq!(read_blueprint(&packed).unwrap(), Blueprint::Fleet(fleet));
}

#[test]
fn writes_truncate_existing_files() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fleet.json");
    fs::write(&path, "x".repeat(64 * 1024)).unwrap();
    write_fleet(&path, &Fleet::new("Small", 0)).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        r#"{"blueprints":[],"faction":0,"name":"Small"}"#
    );
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = read_ship(dir.path().join("absent.json")).unwrap_err();
    match err {
        BlueprintError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected I/O error, got {other:?}"),
    }
}

#[test]
fn malformed_file_is_decode_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"data\":").unwrap();
    assert!(read_ship(&path).unwrap_err().is_decode());
    assert!(read_blueprint(&path).unwrap_err().is_decode());
}
