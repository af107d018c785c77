use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("bankform"));
    cmd.arg("tests/fixtures/events.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "session,phase,processing,bank_name,last4,promo,promo_eligible,disclaimer,mandate,error",
        ))
        // Session 1 linked with an eligible account
        .stdout(predicate::str::contains(
            "1,linked,false,Test Bank,6789,10 OFF,true,Get 10 OFF off your payment when you pay with your bank.,New mandate,",
        ))
        // Session 2 failed and starts over
        .stdout(predicate::str::contains("2,idle,false,,,,,,,Linking failed"))
        // Session 3 shows the setup disclaimer before any link
        .stdout(predicate::str::contains(
            "3,idle,false,,,,,Get $5 off your first payment when you save your bank.,,",
        ));

    Ok(())
}

#[test]
fn test_cli_missing_input_fails() {
    let mut cmd = Command::new(cargo_bin!("bankform"));
    cmd.arg("tests/fixtures/does_not_exist.csv");

    cmd.assert().failure();
}
