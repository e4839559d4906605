use hms::codec::{decode_line, encode_record};
use hms::commands::{dispensary, staff};
use hms::config::HmsConfig;
use hms::entry::Entry;
use hms::error::HmsError;
use hms::model::{ContactInformation, Drug, Gender, ReplenishmentRequest, RequestStatus, Role, Staff};
use hms::store::Store;
use hms::table::Table;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, Table<Drug>) {
    let dir = TempDir::new().unwrap();
    let table = Table::with_file_path(dir.path().join("drugs.csv"));
    (dir, table)
}

#[test]
fn test_save_writes_raw_header_and_encoded_rows() {
    let (dir, mut table) = setup();
    table.add_entry(Drug::new(1, "Aspirin", 40, 10)).unwrap();
    table
        .add_entry(Drug::new(2, "\"Ass\"p,i\"rin", 5, 10))
        .unwrap();
    table.save_to_file(None).unwrap();

    let on_disk = fs::read_to_string(dir.path().join("drugs.csv")).unwrap();
    assert_eq!(
        on_disk,
        "id,name,stock,lowStockAlert\n1,Aspirin,40,10\n2,\"\"\"Ass\"\"p,i\"\"rin\",5,10\n"
    );
}

#[test]
fn test_save_then_load_restores_entries_in_order() {
    let (_dir, mut table) = setup();
    for (id, name) in [(9, "Zinc, 25mg"), (2, "\"Quoted\""), (5, "")] {
        table.add_entry(Drug::new(id, name, id * 3, 1)).unwrap();
    }
    table.save_to_file(None).unwrap();

    let mut reloaded: Table<Drug> = Table::with_file_path(table.file_path().unwrap());
    reloaded.load_from_file(None).unwrap();
    assert_eq!(reloaded.entries(), table.entries());
}

#[test]
fn test_override_path_wins_over_table_path() {
    let (dir, mut table) = setup();
    table.add_entry(Drug::new(1, "Aspirin", 40, 10)).unwrap();
    let backup = dir.path().join("backup.csv");
    table.save_to_file(Some(&backup)).unwrap();

    assert!(backup.exists());
    assert!(!dir.path().join("drugs.csv").exists());

    let mut other: Table<Drug> = Table::new();
    other.load_from_file(Some(&backup)).unwrap();
    assert_eq!(other.len(), 1);
}

#[test]
fn test_load_replaces_existing_entries() {
    let (dir, mut table) = setup();
    fs::write(
        dir.path().join("drugs.csv"),
        "id,name,stock,lowStockAlert\n7,Insulin,12,4\n",
    )
    .unwrap();
    table.add_entry(Drug::new(1, "Stale", 0, 0)).unwrap();
    table.load_from_file(None).unwrap();

    assert_eq!(table.entries(), vec![Drug::new(7, "Insulin", 12, 4)]);
}

#[test]
fn test_header_is_skipped_whatever_it_says() {
    let (dir, mut table) = setup();
    fs::write(dir.path().join("drugs.csv"), "not,a,real,header,at,all\n").unwrap();
    table.load_from_file(None).unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_bad_row_aborts_whole_load() {
    let (dir, mut table) = setup();
    table.add_entry(Drug::new(1, "Keep me", 1, 1)).unwrap();
    fs::write(
        dir.path().join("drugs.csv"),
        "id,name,stock,lowStockAlert\n2,Fine,1,1\n3,Broken,1\n4,Never read,1,1\n",
    )
    .unwrap();

    let err = table.load_from_file(None).unwrap_err();
    match err {
        HmsError::Row { line, source, .. } => {
            assert_eq!(line, 3);
            assert!(matches!(*source, HmsError::MalformedRecord { .. }));
        }
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(table.entries(), vec![Drug::new(1, "Keep me", 1, 1)]);
}

#[test]
fn test_bad_enum_aborts_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("requests.csv");
    fs::write(
        &path,
        "id,drugName,quantity,status\n1,\"Asp,irin\",10,PENDING\n2,Aspirin,5,LOST\n",
    )
    .unwrap();

    let mut table: Table<ReplenishmentRequest> = Table::with_file_path(&path);
    let err = table.load_from_file(None).unwrap_err();
    assert!(err.to_string().contains("LOST"));
    assert!(table.is_empty());
}

#[test]
fn test_missing_file_is_io_error() {
    let (_dir, mut table) = setup();
    assert!(matches!(
        table.load_from_file(None),
        Err(HmsError::Io(_))
    ));
}

#[test]
fn test_quoted_request_row_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("requests.csv");
    fs::write(&path, "id,drugName,quantity,status\n1,\"Asp,irin\",10,PENDING\n").unwrap();

    let mut table: Table<ReplenishmentRequest> = Table::with_file_path(&path);
    table.load_from_file(None).unwrap();
    let request = table.get_entry(1).unwrap();
    assert_eq!(request.drug_name, "Asp,irin");
    assert_eq!(request.status, RequestStatus::Pending);
}

#[test]
fn test_every_staff_row_round_trips_through_codec() {
    let rows = [
        "1,\"Dr. Lim, Jr.\",DOCTOR,MALE,61",
        "2,\"\"Nick\"\" Ng,PHARMACIST,OTHER,27",
        "3,Siti,ADMINISTRATOR,FEMALE,44",
    ];
    for line in rows {
        let staff = Staff::from_row(&decode_line(line)).unwrap();
        assert_eq!(encode_record(&staff.to_row()), line);
    }
}

#[test]
fn test_crlf_file_keeps_last_column() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.csv");
    fs::write(&path, "id,phone,email\r\n1,8123 4567,lim@example.com\r\n").unwrap();

    let mut table: Table<ContactInformation> = Table::with_file_path(&path);
    table.load_from_file(None).unwrap();
    assert_eq!(table.get_entry(1).unwrap().email, "lim@example.com");
}

#[test]
fn test_line_break_input_never_reaches_disk() {
    let dir = TempDir::new().unwrap();
    let config = HmsConfig::default();
    let mut store = Store::open(dir.path(), &config).unwrap();

    dispensary::add_drug(&mut store, "Aspirin", 40, 10).unwrap();
    assert!(dispensary::add_drug(&mut store, "Para\ncetamol", 10, 1).is_err());
    assert!(
        staff::add_staff(&mut store, "Tan\r", Role::Doctor, Gender::Female, 50).is_err()
    );

    let reopened = Store::open(dir.path(), &config).unwrap();
    assert_eq!(reopened.drugs.len(), 1);
    assert!(reopened.staff.is_empty());
}
