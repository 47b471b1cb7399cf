use std::fs;

use boatyard::{billing, codec, BoatyardError, FleetRepository, LocalStorage};
use tempfile::TempDir;

fn data_file(temp_dir: &TempDir, contents: &str) -> String {
    let path = temp_dir.path().join("boats.csv");
    fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_end_to_end_monthly_billing_cycle() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(&temp_dir, "Alice,20,slip,5,100.00\n");

    let repository = FleetRepository::new(LocalStorage, path.clone());
    let mut fleet = repository.load();

    assert_eq!(fleet.len(), 1);
    assert_eq!(
        fleet.vessels()[0].to_string(),
        "Alice                 20'     slip   #  5   Owes $ 100.00"
    );

    // One month of slip charges: 20 ft at $12.50/ft.
    billing::apply_monthly_charges(&mut fleet);
    assert_eq!(fleet.get("Alice").unwrap().outstanding_fees, 350.0);

    billing::record_payment(&mut fleet, "Alice", 200.0).unwrap();
    assert_eq!(fleet.get("Alice").unwrap().outstanding_fees, 150.0);

    repository.save(&fleet).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "Alice,20,slip,5,150.00\n");
}

#[test]
fn test_load_missing_file_starts_with_empty_fleet() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nonexistent.csv");

    let repository = FleetRepository::new(LocalStorage, path.to_str().unwrap());
    let fleet = repository.load();

    assert!(fleet.is_empty());
    // Loading must not create the file.
    assert!(!path.exists());
}

#[test]
fn test_save_and_reload_preserves_every_category() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(
        &temp_dir,
        "zephyr,40,storage,12,10.00\nClipper,36,trailor,ABC123,0.00\nAlbatross,28,slip,3,150.00\nmariner,33,land,B,75.25\n",
    );

    let repository = FleetRepository::new(LocalStorage, path.clone());
    let fleet = repository.load();
    repository.save(&fleet).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Albatross,28,slip,3,150.00\n\
         Clipper,36,trailor,ABC123,0.00\n\
         mariner,33,land,B,75.25\n\
         zephyr,40,storage,12,10.00\n"
    );

    let reloaded = repository.load();
    assert_eq!(fleet.vessels(), reloaded.vessels());
}

#[test]
fn test_add_from_raw_csv_line_lands_in_sorted_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(
        &temp_dir,
        "Albatross,28,slip,3,150.00\nzephyr,40,storage,12,10.00\n",
    );

    let repository = FleetRepository::new(LocalStorage, path.clone());
    let mut fleet = repository.load();

    let vessel = codec::parse("Mariner,33,land,B,0.00").unwrap();
    fleet.insert(vessel).unwrap();

    repository.save(&fleet).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Albatross,28,slip,3,150.00\nMariner,33,land,B,0.00\nzephyr,40,storage,12,10.00\n"
    );
}

#[test]
fn test_save_failure_reports_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no_such_dir").join("boats.csv");

    let repository = FleetRepository::new(LocalStorage, path.to_str().unwrap());
    let mut fleet = boatyard::Fleet::new();
    fleet
        .insert(codec::parse("Alice,20,slip,5,100.00").unwrap())
        .unwrap();

    let result = repository.save(&fleet);
    assert!(matches!(result, Err(BoatyardError::Io(_))));
    assert!(!path.exists());
}

#[test]
fn test_removal_then_save_drops_the_record() {
    let temp_dir = TempDir::new().unwrap();
    let path = data_file(
        &temp_dir,
        "Albatross,28,slip,3,150.00\nMariner,33,land,B,0.00\n",
    );

    let repository = FleetRepository::new(LocalStorage, path.clone());
    let mut fleet = repository.load();

    fleet.remove("ALBATROSS").unwrap();
    repository.save(&fleet).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Mariner,33,land,B,0.00\n"
    );
}
