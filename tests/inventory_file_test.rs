use shoe_stock::{FileSource, InventoryError, InventoryStore, ShoeRecord};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HEADER: &str = "Country,Code,Product,Cost,Quantity";

fn write_inventory(dir: &TempDir, lines: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join("inventory.txt");
    let mut text = String::from(HEADER);
    text.push('\n');
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    fs::write(&path, text).unwrap();
    path
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_load_valid_file_preserves_order() {
    let dir = TempDir::new().unwrap();
    let path = write_inventory(
        &dir,
        &[
            "South Africa,SKU44386,Air Max 90,2300,20",
            "China,SKU90000,Jordan 1,3200,50",
            "Vietnam,SKU63221,Blazer,1700,19",
        ],
    );

    let (store, report) = InventoryStore::load(FileSource::new(&path)).unwrap();
    assert!(report.is_clean());
    let codes: Vec<&str> = store.list_all().iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["SKU44386", "SKU90000", "SKU63221"]);
}

#[test]
fn test_load_skips_only_the_malformed_line() {
    let dir = TempDir::new().unwrap();
    let path = write_inventory(
        &dir,
        &[
            "South Africa,SKU44386,Air Max 90,2300,20",
            "China,SKU90000,Jordan 1,lots,50",
            "Vietnam,SKU63221,Blazer,1700,19",
        ],
    );

    let (store, report) = InventoryStore::load(FileSource::new(&path)).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(report.skipped_lines(), 1);
    assert!(matches!(
        report.issues[0],
        InventoryError::MalformedLine { line: 3, .. }
    ));
}

#[test]
fn test_load_absent_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.txt");

    let (store, report) = InventoryStore::load(FileSource::new(&path)).unwrap();
    assert!(store.is_empty());
    assert!(report.source_missing());
    assert!(!path.exists());
}

#[test]
fn test_append_adds_one_line_and_keeps_prior_lines() {
    let dir = TempDir::new().unwrap();
    let path = write_inventory(&dir, &["South Africa,SKU44386,Air Max 90,2300,20"]);
    let before = read_lines(&path);

    let (mut store, _) = InventoryStore::load(FileSource::new(&path)).unwrap();
    store
        .append(ShoeRecord::new("Italy", "SKU11111", "Loafer", 900, 4))
        .unwrap();

    let after = read_lines(&path);
    assert_eq!(store.len(), 2);
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..before.len()], &before[..]);
    assert_eq!(after.last().unwrap(), "Italy,SKU11111,Loafer,900,4");
}

#[test]
fn test_capture_with_non_integer_cost_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = write_inventory(&dir, &["South Africa,SKU44386,Air Max 90,2300,20"]);
    let before = fs::read_to_string(&path).unwrap();

    let (mut store, _) = InventoryStore::load(FileSource::new(&path)).unwrap();
    let err = store
        .capture("Italy", "SKU11111", "Loafer", "nine hundred", "4")
        .unwrap_err();

    assert!(matches!(err, InventoryError::InvalidInput { .. }));
    assert_eq!(store.len(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_appended_record_survives_reload() {
    let dir = TempDir::new().unwrap();
    let path = write_inventory(&dir, &["USA,AB12,Boot,10,3"]);

    {
        let (mut store, _) = InventoryStore::load(FileSource::new(&path)).unwrap();
        store.capture("UK", "CD34", "Sandal", "7", "0").unwrap();
    }

    let (store, report) = InventoryStore::load(FileSource::new(&path)).unwrap();
    assert!(report.is_clean());
    assert_eq!(store.len(), 2);
    assert_eq!(store.find_by_code("cd34").unwrap().product, "Sandal");
    assert_eq!(store.find_by_code("ab12").unwrap().code, "AB12");
}

#[test]
fn test_restock_lowest_rewrites_file() {
    for atomic in [false, true] {
        let dir = TempDir::new().unwrap();
        let path = write_inventory(
            &dir,
            &["USA,A1,Boot,10,5", "UK,B2,Loafer,12,9", "Peru,C3,Clog,4,2"],
        );

        let source = FileSource::new(&path).with_atomic_rewrite(atomic);
        let (mut store, _) = InventoryStore::load(source).unwrap();
        let updated = store.restock_lowest(3).unwrap();
        assert_eq!(updated.code, "C3");
        assert_eq!(updated.quantity, 5);

        assert_eq!(
            read_lines(&path),
            vec![
                HEADER,
                "USA,A1,Boot,10,5",
                "UK,B2,Loafer,12,9",
                "Peru,C3,Clog,4,5",
            ]
        );
    }
}

#[test]
fn test_restock_rejects_non_positive_without_touching_file() {
    let dir = TempDir::new().unwrap();
    let path = write_inventory(&dir, &["USA,A1,Boot,10,5", "Peru,C3,Clog,4,2"]);
    let before = fs::read_to_string(&path).unwrap();

    let (mut store, _) = InventoryStore::load(FileSource::new(&path)).unwrap();
    assert!(matches!(
        store.restock_lowest(0),
        Err(InventoryError::InvalidInput { .. })
    ));
    assert!(matches!(
        store.restock_lowest(-2),
        Err(InventoryError::InvalidInput { .. })
    ));

    assert_eq!(store.lowest_quantity().unwrap().quantity, 2);
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_highest_quantity_and_values() {
    let dir = TempDir::new().unwrap();
    let path = write_inventory(
        &dir,
        &["USA,A1,Boot,10,3", "UK,B2,Loafer,7,0", "Peru,C3,Clog,4,3"],
    );

    let (store, _) = InventoryStore::load(FileSource::new(&path)).unwrap();
    assert_eq!(store.highest_quantity().unwrap().code, "A1");

    let values: Vec<u64> = store.value_per_item().iter().map(|v| v.value).collect();
    assert_eq!(values, vec![30, 0, 12]);
}
