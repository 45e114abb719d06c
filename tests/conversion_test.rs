//! Conversion behavior tests driving the library directly.

use std::io::Cursor;

use mintos2parqet::{HoldingId, StatementConverter};

const HOLDING_URL: &str = "https://app.parqet.com/p/PORT1/h/HOLD9";

fn run_csv(csv: &str) -> String {
    let holding = HoldingId::from_url(HOLDING_URL).unwrap();
    let mut converter = StatementConverter::new(holding);
    converter.process_csv(Cursor::new(csv)).unwrap();

    let mut output = Vec::new();
    converter.write_output(&mut output).unwrap();
    String::from_utf8(output).unwrap()
}

fn data_lines(output: &str) -> Vec<&str> {
    output.lines().skip(1).collect()
}

// ==================== WITHDRAWALS ====================

#[test]
fn test_negative_withdrawal_emits_unsigned_magnitude() {
    let csv = "2021-01-05 10:00:00,x,Loan repayment (Loan ABC) principal,-12.5,87.50,EUR,Withdrawal\n";
    let output = run_csv(csv);

    assert_eq!(
        data_lines(&output),
        vec!["2021-01-05;10:00:00;12.500000;0;0;TransferOut;HOLD9"]
    );
}

#[test]
fn test_positive_withdrawal_passes_through() {
    let csv = "2021-01-05 10:00:00,x,Withdraw funds,40,60.00,EUR,Withdrawal\n";
    let output = run_csv(csv);

    assert_eq!(
        data_lines(&output),
        vec!["2021-01-05;10:00:00;40.000000;0;0;TransferOut;HOLD9"]
    );
}

// ==================== DEPOSITS ====================

#[test]
fn test_deposit_becomes_transfer_in() {
    let csv = "2021-02-01 09:30:00,x,Deposit via bank transfer,100,100.00,EUR,Deposits\n";
    let output = run_csv(csv);

    assert_eq!(
        data_lines(&output),
        vec!["2021-02-01;09:30:00;100.000000;0;0;TransferIn;HOLD9"]
    );
}

// ==================== INTEREST & TAX WITHHOLDING ====================

#[test]
fn test_zero_interest_produces_no_row() {
    let csv = "2021-01-05 10:00:00,x,Interest income (Loan A) payout,0,100.00,EUR,Interest received\n";
    assert!(data_lines(&run_csv(csv)).is_empty());
}

#[test]
fn test_zero_tax_withholding_produces_no_row() {
    let csv = "2021-01-05 10:00:00,x,Tax withheld (Loan A),0,100.00,EUR,Tax withholding\n";
    assert!(data_lines(&run_csv(csv)).is_empty());
}

#[test]
fn test_nonzero_tax_withholding_reported_as_interest() {
    let csv = "2021-01-05 10:00:00,x,Tax withheld (Loan A),-0.03,99.97,EUR,Tax withholding\n";
    let result = run_csv(csv);
    let lines = data_lines(&result);
    let output = lines.join("\n");

    assert_eq!(lines.len(), 1);
    assert!(output.contains(";Interest;"));
    // tax column stays literal 0, the amount goes through the interest column
    assert!(output.contains(";-0.030000;0;0;"));
}

// ==================== ROW FILTERING ====================

#[test]
fn test_header_row_produces_no_row_and_no_error() {
    let csv = "Date,Transaction ID,Details,Turnover,Balance,Currency,Payment Type\n";
    assert!(data_lines(&run_csv(csv)).is_empty());
}

#[test]
fn test_unknown_payment_type_produces_no_row() {
    let csv = "2021-01-05 10:00:00,x,Investment (Loan A) principal,-25,75.00,EUR,Investment principal increase\n";
    assert!(data_lines(&run_csv(csv)).is_empty());
}

// ==================== ORDERING & HOLDING ====================

#[test]
fn test_output_ordered_by_date_then_time() {
    let csv = "\
2021-03-01 00:00:01,x,Interest income (Loan C) payout,0.3,103.00,EUR,Interest received
2021-01-02 23:59:59,x,Deposit via bank transfer,100,100.00,EUR,Deposits
2021-01-02 06:00:00,x,Interest income (Loan A) payout,0.1,100.10,EUR,Interest received
2021-02-15 12:30:00,x,Loan repayment (Loan A) principal,-50,50.00,EUR,Withdrawal
";
    let output = run_csv(csv);

    let keys: Vec<String> = data_lines(&output)
        .iter()
        .map(|line| {
            let parts: Vec<&str> = line.split(';').collect();
            format!("{}{}", parts[0], parts[1])
        })
        .collect();

    assert_eq!(keys.len(), 4);
    for pair in keys.windows(2) {
        assert!(pair[0] <= pair[1], "rows out of order: {:?}", pair);
    }
}

#[test]
fn test_every_row_carries_the_holding_id() {
    let csv = "\
2021-01-02 06:00:00,x,Interest income (Loan A) payout,0.1,100.10,EUR,Interest received
2021-01-03 06:00:00,x,Deposit via bank transfer,100,200.10,EUR,Deposits
2021-01-04 06:00:00,x,Loan repayment (Loan B) principal,-50,150.10,EUR,Withdrawal
";
    let output = run_csv(csv);

    for line in data_lines(&output) {
        assert!(line.ends_with(";HOLD9"), "missing holding id: {}", line);
    }
}

#[test]
fn test_amounts_are_nonnegative_fixed_point() {
    let csv = "\
2021-01-02 06:00:00,x,Interest income (Loan A) payout,0.1,100.10,EUR,Interest received
2021-01-03 06:00:00,x,Deposit via bank transfer,100,200.10,EUR,Deposits
2021-01-04 06:00:00,x,Loan repayment (Loan B) principal,-50.25,149.85,EUR,Withdrawal
";
    let output = run_csv(csv);

    for line in data_lines(&output) {
        let amount = line.split(';').nth(2).unwrap();
        assert!(!amount.starts_with('-'), "negative amount in: {}", line);
        let (_, frac) = amount.split_once('.').unwrap();
        assert_eq!(frac.len(), 6, "expected 6 decimals in: {}", line);
    }
}

// ==================== ERRORS ====================

#[test]
fn test_non_numeric_amount_is_an_error() {
    let csv = "2021-01-05 10:00:00,x,Deposit via bank transfer,12.34.56,100.00,EUR,Deposits\n";
    let holding = HoldingId::from_url(HOLDING_URL).unwrap();
    let mut converter = StatementConverter::new(holding);
    assert!(converter.process_csv(Cursor::new(csv)).is_err());
}
