use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{TWO_RECORDS, rcl, setup_test_config, shell, temp_out};

#[test]
fn test_add_and_list() {
    let cfg = setup_test_config("add_and_list");
    let mut lines = TWO_RECORDS.to_vec();
    lines.push("list");

    shell(&cfg, &lines)
        .assert()
        .success()
        .stdout(contains("Container entry added successfully! (#0)"))
        .stdout(contains("Container entry added successfully! (#1)"))
        .stdout(contains("Container Number"))
        .stdout(contains("2025-09-01 Ålesund C1"))
        .stdout(contains("2025-09-01 Molde   C2"));
}

#[test]
fn test_list_empty_store() {
    let cfg = setup_test_config("list_empty");

    shell(&cfg, &["list"])
        .assert()
        .success()
        .stdout(contains("No container entries yet"));
}

#[test]
fn test_empty_container_is_skipped() {
    let cfg = setup_test_config("empty_container");

    shell(&cfg, &["add --port Molde --container '   '", "list"])
        .assert()
        .success()
        .stdout(contains("Entry not added"))
        .stdout(contains("No container entries yet"));
}

#[test]
fn test_strict_flag_reports_empty_container() {
    let cfg = setup_test_config("strict_empty");

    rcl()
        .args(["--config", &cfg, "--strict", "shell", "--no-color"])
        .write_stdin("add --port Molde\nlist\n")
        .assert()
        .success()
        .stderr(contains("Container number must not be empty"))
        .stdout(contains("No container entries yet"));
}

#[test]
fn test_invalid_port_is_rejected() {
    let cfg = setup_test_config("invalid_port");

    shell(&cfg, &["add --port Bergen --container C1", "list"])
        .assert()
        .success()
        .stderr(contains("Invalid port"))
        .stdout(contains("No container entries yet"));
}

#[test]
fn test_delete_then_edit_scenario() {
    let cfg = setup_test_config("delete_then_edit");
    let mut lines = TWO_RECORDS.to_vec();
    lines.extend(["del 0 -y", "edit 0", "save --comment checked", "list", "show"]);

    shell(&cfg, &lines)
        .assert()
        .success()
        .stdout(contains("Entry deleted successfully! (#0)"))
        .stdout(contains("Edit Container Entry #0"))
        .stdout(contains("Entry updated successfully! (#0)"))
        .stdout(contains("0 2025-09-01 Molde C2               ADR    09:15        checked"))
        .stdout(contains("Ålesund C1").not())
        .stdout(contains("Last operation: save: ok"));
}

#[test]
fn test_cancel_keeps_record() {
    let cfg = setup_test_config("cancel_edit");
    let mut lines = TWO_RECORDS.to_vec();
    lines.extend(["edit 1", "set --container CHANGED", "cancel", "list"]);

    shell(&cfg, &lines)
        .assert()
        .success()
        .stdout(contains("Edit cancelled."))
        .stdout(contains("Molde   C2"));
}

#[test]
fn test_delete_asks_confirmation() {
    let cfg = setup_test_config("delete_confirm");
    let mut lines = TWO_RECORDS.to_vec();
    lines.extend(["del 1", "n", "del 0", "y", "list"]);

    shell(&cfg, &lines)
        .assert()
        .success()
        .stdout(contains("Delete entry #1? This action is irreversible."))
        .stdout(contains("Operation cancelled."))
        .stdout(contains("Entry deleted successfully! (#0)"))
        .stdout(contains("Ålesund C1").not())
        .stdout(contains("Molde C2"));
}

#[test]
fn test_deleting_edited_record_discards_edit() {
    let cfg = setup_test_config("delete_edited");
    let mut lines = TWO_RECORDS.to_vec();
    lines.extend(["edit 1", "del 1 -y", "save --comment late"]);

    shell(&cfg, &lines)
        .assert()
        .success()
        .stdout(contains("edit discarded"))
        .stderr(contains("No record is currently being edited"));
}

#[test]
fn test_out_of_range_index() {
    let cfg = setup_test_config("out_of_range");
    let mut lines = TWO_RECORDS.to_vec();
    lines.extend(["edit 7", "del 2 -y", "list"]);

    shell(&cfg, &lines)
        .assert()
        .success()
        .stderr(contains("Index 7 is out of range (records: 2)"))
        .stderr(contains("Index 2 is out of range (records: 2)"))
        .stdout(contains("Molde   C2"));
}

#[test]
fn test_croatian_labels() {
    let cfg = setup_test_config("croatian");
    let mut lines = TWO_RECORDS.to_vec();
    lines.push("list");

    rcl()
        .args(["--config", &cfg, "--lang", "hr", "shell", "--no-color"])
        .write_stdin(format!("{}\n", lines.join("\n")))
        .assert()
        .success()
        .stdout(contains("Zapis je dodan."))
        .stdout(contains("Vrijeme dolaska"))
        .stdout(contains("Kontejner"));
}

#[test]
fn test_log_records_operations() {
    let cfg = setup_test_config("journal");
    let mut lines = TWO_RECORDS.to_vec();
    lines.extend(["edit 1", "del 0 -y", "cancel", "log"]);

    shell(&cfg, &lines)
        .assert()
        .success()
        .stdout(contains("Internal log:"))
        .stdout(contains("add"))
        .stdout(contains("edit_repointed"))
        .stdout(contains("cancel"));
}

#[test]
fn test_export_csv_and_json() {
    let cfg = setup_test_config("export");
    let csv_out = temp_out("export", "csv");
    let json_out = temp_out("export", "json");

    let export_csv = format!("export --format csv --file {csv_out}");
    let export_json = format!("export --format json --file {json_out}");
    let mut lines = TWO_RECORDS.to_vec();
    lines.extend([export_csv.as_str(), export_json.as_str()]);

    shell(&cfg, &lines)
        .assert()
        .success()
        .stdout(contains("CSV export completed"))
        .stdout(contains("JSON export completed"));

    let csv = std::fs::read_to_string(&csv_out).expect("csv written");
    assert!(csv.starts_with("index,date,port,container_number,status,arrival_time,comment"));
    assert!(csv.contains("1,2025-09-01,Molde,C2,ADR,09:15,"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_out).expect("json written")).unwrap();
    assert_eq!(json[0]["port"], "Ålesund");
    assert_eq!(json[1]["container_number"], "C2");
}

#[test]
fn test_script_file_and_quit() {
    let cfg = setup_test_config("script");
    let script = temp_out("script", "rcl");
    std::fs::write(
        &script,
        "# morning arrivals\nadd -p Trondheim -c C9 -s lastcast -t 06:30\nquit\nadd -p Molde -c C10\n",
    )
    .unwrap();

    rcl()
        .args(["--config", &cfg, "shell", "--no-color", "--script", &script])
        .assert()
        .success()
        .stdout(contains("(#0)"))
        .stdout(contains("(#1)").not());
}

#[test]
fn test_init_and_print_config() {
    let cfg = setup_test_config("init_print");

    rcl()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("Config file:"));

    rcl()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("language: en"))
        .stdout(contains("default_port: Ålesund"))
        .stdout(contains("strict_validation: false"));

    rcl()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("already exists"));
}

#[test]
fn test_config_file_defaults_are_used() {
    let cfg = setup_test_config("config_defaults");
    std::fs::write(
        &cfg,
        "default_port: Haugesund\ndefault_status: T\nconfirm_delete: false\n",
    )
    .unwrap();

    shell(&cfg, &["add -c C5 -t 10:00 --date 2025-09-02", "del 0", "add -c C6 -t 10:05 --date 2025-09-02", "list"])
        .assert()
        .success()
        .stdout(contains("Entry deleted successfully! (#0)"))
        .stdout(contains("Haugesund C6"))
        .stdout(contains("Delete entry").not());
}
