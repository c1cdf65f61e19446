//! Integration tests for the gantry binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A minimal two-entity symbol table: Order ↔ OrderLine.
const ORDERS_TABLE: &str = r#"[
  {
    "name": "Order",
    "namespace": "Domain.Orders",
    "full_name": "Domain.Orders.Order",
    "base_types": ["Domain.Common.EntityBase"],
    "properties": [
      { "name": "Number", "type_name": "string", "order": 1, "is_setter_public": true },
      {
        "name": "Lines", "type_name": "List<OrderLine>", "order": 2, "is_setter_public": true,
        "semantic": {
          "full_name": "System.Collections.Generic.List<Domain.Orders.OrderLine>",
          "implements_enumerable": true,
          "generic_args": ["Domain.Orders.OrderLine"]
        }
      }
    ]
  },
  {
    "name": "OrderLine",
    "namespace": "Domain.Orders",
    "full_name": "Domain.Orders.OrderLine",
    "base_types": ["Domain.Common.EntityBase"],
    "properties": [
      { "name": "Quantity", "type_name": "int", "order": 1, "is_setter_public": true },
      {
        "name": "Order", "type_name": "Order", "order": 2, "is_setter_public": true,
        "semantic": { "full_name": "Domain.Orders.Order" }
      }
    ]
  }
]"#;

fn fixture_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("orders.symbols.json"), ORDERS_TABLE).unwrap();
    temp
}

#[test]
fn help_flag() {
    let mut cmd = Command::cargo_bin("gantry").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("inspect"));
}

#[test]
fn version_flag() {
    let mut cmd = Command::cargo_bin("gantry").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_arguments_exit_with_user_error() {
    let mut cmd = Command::cargo_bin("gantry").unwrap();
    cmd.arg("generate").assert().failure().code(2);
}

#[test]
fn generate_writes_artifacts_for_the_whole_graph() {
    let temp = fixture_project();
    let mut cmd = Command::cargo_bin("gantry").unwrap();

    cmd.args(["generate"])
        .arg(temp.path())
        .args(["Order", "--no-color", "-q"])
        .assert()
        .success();

    for artifact in [
        "Infrastructure/Configurations/OrderConfiguration.cs",
        "Infrastructure/Configurations/OrderLineConfiguration.cs",
        "Contracts/Orders/Commands/OrderBaseCommand.cs",
        "Contracts/Orders/Commands/CreateOrderCommand.cs",
        "Contracts/Orders/Commands/UpdateOrderCommand.cs",
        "Contracts/Orders/Commands/CreateOrderCommandHandler.cs",
        "Queries/Orders/OrderResponse.cs",
        "Queries/OrderLines/OrderLineResponse.cs",
    ] {
        assert!(
            temp.path().join(artifact).exists(),
            "missing artifact: {artifact}"
        );
    }
}

#[test]
fn generate_honors_the_target_filter_and_out_dir() {
    let temp = fixture_project();
    let out = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("gantry").unwrap();

    cmd.args(["generate"])
        .arg(temp.path())
        .args(["Order", "--target", "configuration", "-q", "--out"])
        .arg(out.path())
        .assert()
        .success();

    assert!(out
        .path()
        .join("Infrastructure/Configurations/OrderConfiguration.cs")
        .exists());
    assert!(!out.path().join("Contracts").exists());
    assert!(!temp.path().join("Infrastructure").exists());
}

#[test]
fn unknown_seed_exits_with_not_found() {
    let temp = fixture_project();
    let mut cmd = Command::cargo_bin("gantry").unwrap();

    cmd.args(["generate"])
        .arg(temp.path())
        .args(["Nonexistent", "-q"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Nonexistent"));
}

#[test]
fn inspect_prints_metadata_json() {
    let temp = fixture_project();
    let mut cmd = Command::cargo_bin("gantry").unwrap();

    cmd.args(["inspect"])
        .arg(temp.path())
        .args(["Order", "--target", "get-query"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Order\""))
        .stdout(predicate::str::contains("\"OrderLine\""));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("gantry.toml");

    let mut cmd = Command::cargo_bin("gantry").unwrap();
    cmd.current_dir(temp.path())
        .args(["init", "--path"])
        .arg(&config_path)
        .assert()
        .success();
    assert!(config_path.exists());

    let mut cmd = Command::cargo_bin("gantry").unwrap();
    cmd.current_dir(temp.path())
        .args(["init", "--path"])
        .arg(&config_path)
        .assert()
        .failure()
        .code(2);

    let mut cmd = Command::cargo_bin("gantry").unwrap();
    cmd.current_dir(temp.path())
        .args(["init", "--force", "--path"])
        .arg(&config_path)
        .assert()
        .success();
}

#[test]
fn completions_emit_a_script() {
    let mut cmd = Command::cargo_bin("gantry").unwrap();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gantry"));
}
