use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::tempdir;

mod common;

#[test]
fn test_full_payment_end_to_end() {
    let dir = tempdir().unwrap();

    common::feedesk()
        .args(["pay", "--roll", "23UCS001", "--password", "sec@2025"])
        .args(["--amount", "55000", "--method", "phonepe"])
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Payment Successful!"))
        .stdout(predicate::str::contains("Amount Paid: ₹55,000 via PhonePe"))
        .stdout(predicate::str::contains(
            "Congratulations, all your dues have been cleared.",
        ))
        .stdout(predicate::str::contains("Status: Paid"))
        .stdout(predicate::str::contains("Balance Due: ₹0"));

    assert_eq!(common::pdf_pages(&dir.path().join("SEC-Receipt-23UCS001.pdf")), 1);
    assert_eq!(common::pdf_pages(&dir.path().join("SEC-Admin-Slip-23UCS001.pdf")), 1);
}

#[test]
fn test_partial_payment_writes_receipt_only() {
    let dir = tempdir().unwrap();

    common::feedesk()
        .args(["pay", "--roll", "23UCS002", "--password", "sec@2025"])
        .args(["--amount", "12000"])
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("via Google Pay"))
        .stdout(predicate::str::contains("Status: Partial"))
        .stdout(predicate::str::contains("Balance Due: ₹20,000"))
        .stdout(predicate::str::contains("Congratulations").not());

    assert_eq!(common::pdf_pages(&dir.path().join("SEC-Receipt-23UCS002.pdf")), 1);
    assert!(!dir.path().join("SEC-Admin-Slip-23UCS002.pdf").exists());
}

#[test]
fn test_default_amount_is_full_due() {
    let dir = tempdir().unwrap();

    common::feedesk()
        .args(["pay", "--roll", "23UCS008", "--password", "sec@2025"])
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Amount Paid: ₹27,500"))
        .stdout(predicate::str::contains("Status: Paid"));
}

#[test]
fn test_card_payment() {
    let dir = tempdir().unwrap();

    common::feedesk()
        .args(["pay", "--roll", "23UCS004", "--password", "sec@2025"])
        .args(["--amount", "500", "--method", "card"])
        .args(["--card-number", "4111 1111 1111 1111"])
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("via Credit Card"));
}

#[test]
fn test_card_payment_needs_sixteen_digits() {
    let dir = tempdir().unwrap();

    common::feedesk()
        .args(["pay", "--roll", "23UCS004", "--password", "sec@2025"])
        .args(["--method", "card", "--card-number", "4111 1111"])
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please enter a valid 16-digit credit card number.",
        ));
}

#[test]
fn test_amount_above_due_rejected() {
    let dir = tempdir().unwrap();

    common::feedesk()
        .args(["pay", "--roll", "23UCS001", "--password", "sec@2025"])
        .args(["--amount", "60000"])
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please enter an amount between ₹1 and ₹55000",
        ));

    assert!(!dir.path().join("SEC-Receipt-23UCS001.pdf").exists());
}

#[test]
fn test_nothing_to_pay() {
    common::feedesk()
        .args(["pay", "--roll", "23UCS003", "--password", "sec@2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No fees are due."));
}

#[test]
fn test_admin_slip_for_paid_student() {
    let dir = tempdir().unwrap();

    common::feedesk()
        .args(["slip", "--roll", "23UCS006", "--password", "sec@2025"])
        .arg("--output-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Admin slip written to"));

    assert_eq!(common::pdf_pages(&dir.path().join("SEC-Admin-Slip-23UCS006.pdf")), 1);
}

#[test]
fn test_admin_slip_refused_with_dues() {
    common::feedesk()
        .args(["slip", "--roll", "23UCS001", "--password", "sec@2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Fees of ₹55,000 are still due."));
}
