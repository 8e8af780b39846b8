//! End-to-end tests for the payroll engine.
//!
//! These exercise the library the way the console session drives it: a
//! master file and pay files living in a temp directory, ingestion with
//! replace decisions supplied by closures, and reporting over the
//! resulting ledger. Covered scenarios:
//! - master-file load (duplicates, malformed lines)
//! - fresh ingestion and the worked tax example
//! - duplicate-month decline and replace
//! - unknown-ID error recording and the error-log format
//! - missing pay files
//! - totals across months and ranked reports
//! - the per-month output file

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use tempfile::TempDir;

use payroll_engine::config::TaxPolicy;
use payroll_engine::ingest::{ErrorLog, ingest_pay_file};
use payroll_engine::ledger::PayrollLedger;
use payroll_engine::models::{IngestionOutcome, IngestionReport, MonthCode, ReplaceDecision};
use payroll_engine::report::{
    RankCriterion, employee_breakdown, month_summary, rank_employees, write_month_output,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

struct Fixture {
    dir: TempDir,
    ledger: PayrollLedger,
    log: ErrorLog,
}

impl Fixture {
    /// Builds a ledger from the given master-file content inside a fresh
    /// temp directory.
    fn new(master: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let master_path = dir.path().join("employees.txt");
        fs::write(&master_path, master).unwrap();
        let ledger = PayrollLedger::load_master_file(&master_path).unwrap();
        let log = ErrorLog::new(dir.path().join("errors.txt"));
        Self { dir, ledger, log }
    }

    fn write_pay_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Ingests a pay file that must not trigger a replace prompt.
    fn ingest(&mut self, name: &str, content: &str) -> IngestionReport {
        let path = self.write_pay_file(name, content);
        ingest_pay_file(&mut self.ledger, &path, &self.log, |month| {
            panic!("unexpected replace prompt for {month}")
        })
        .unwrap()
    }

    /// Ingests a pay file answering the replace prompt with `decision`.
    fn ingest_answering(
        &mut self,
        name: &str,
        content: &str,
        decision: ReplaceDecision,
    ) -> IngestionReport {
        let path = self.write_pay_file(name, content);
        ingest_pay_file(&mut self.ledger, &path, &self.log, |_| decision).unwrap()
    }

    fn error_log_lines(&self) -> Vec<String> {
        fs::read_to_string(self.log.path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn standard_fixture() -> Fixture {
    Fixture::new("E001 Alice 15.00\nE002 Bob 9.50\nE003 Cara 22.00\n")
}

// =============================================================================
// Ingestion and calculation
// =============================================================================

#[test]
fn ingest_then_summarize_matches_worked_example() {
    let mut fixture = standard_fixture();
    fixture.ingest("jan25.txt", "E001 160\nE002 0\n");

    let month = MonthCode::new("JAN25");
    let rows = month_summary(&fixture.ledger, &month, &TaxPolicy::default());

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, "E001");
    assert_eq!(rows[0].gross, dec("2400"));
    assert_eq!(rows[0].tax, dec("270.50"));
    assert_eq!(rows[0].net, dec("2129.50"));

    // Zero hours: zero gross, zero tax, zero net, for any rate.
    assert_eq!(rows[1].id, "E002");
    assert_eq!(rows[1].gross, Decimal::ZERO);
    assert_eq!(rows[1].tax, Decimal::ZERO);
    assert_eq!(rows[1].net, Decimal::ZERO);
}

#[test]
fn processed_months_keep_insertion_order() {
    let mut fixture = standard_fixture();
    fixture.ingest("mar25.txt", "E001 10\n");
    fixture.ingest("jan25.txt", "E001 20\n");

    let months: Vec<&str> = fixture
        .ledger
        .processed_months()
        .iter()
        .map(MonthCode::as_str)
        .collect();
    assert_eq!(months, vec!["MAR25", "JAN25"]);
}

#[test]
fn totals_are_the_sum_of_monthly_nets() {
    let mut fixture = standard_fixture();
    fixture.ingest("jan25.txt", "E001 160\n");
    fixture.ingest("feb25.txt", "E001 140\n");
    fixture.ingest("mar25.txt", "E001 0\n");

    let policy = TaxPolicy::default();
    let breakdown = employee_breakdown(&fixture.ledger, "E001", &policy).unwrap();
    let expected_net: Decimal = breakdown.iter().map(|row| row.net).sum();
    let expected_gross: Decimal = breakdown.iter().map(|row| row.gross).sum();
    let expected_tax: Decimal = breakdown.iter().map(|row| row.tax).sum();

    let totals = fixture.ledger.employee_totals("E001", &policy).unwrap();
    assert_eq!(totals.net, expected_net);
    assert_eq!(totals.gross, expected_gross);
    assert_eq!(totals.tax, expected_tax);
    assert_eq!(totals.net, totals.gross - totals.tax);
}

#[test]
fn master_file_duplicate_id_keeps_last_record() {
    let fixture = Fixture::new("E001 Alice 15.00\nE001 Alicia 20.00\n");
    let employee = fixture.ledger.employee("E001").unwrap();
    assert_eq!(employee.name, "Alicia");
    assert_eq!(employee.hourly_rate, dec("20.00"));
    assert_eq!(fixture.ledger.employee_count(), 1);
}

// =============================================================================
// Duplicate months
// =============================================================================

#[test]
fn reingest_declined_leaves_prior_data_unchanged() {
    let mut fixture = standard_fixture();
    fixture.ingest("jan25.txt", "E001 160\n");

    let report = fixture.ingest_answering("jan25.txt", "E001 999\n", ReplaceDecision::Keep);

    assert_eq!(report.outcome, IngestionOutcome::Declined);
    let month = MonthCode::new("JAN25");
    assert_eq!(
        fixture.ledger.employee("E001").unwrap().hours_for(&month),
        Some(dec("160"))
    );
    assert_eq!(fixture.ledger.processed_months().len(), 1);
}

#[test]
fn reingest_with_replace_clears_old_month_completely() {
    let mut fixture = standard_fixture();
    fixture.ingest("jan25.txt", "E001 160\nE002 120\n");

    // The replacement no longer mentions E002: its old entry must go.
    let report = fixture.ingest_answering("jan25.txt", "E001 150\n", ReplaceDecision::Replace);

    assert_eq!(report.outcome, IngestionOutcome::Replaced);
    let month = MonthCode::new("JAN25");
    assert_eq!(
        fixture.ledger.employee("E001").unwrap().hours_for(&month),
        Some(dec("150"))
    );
    assert!(!fixture.ledger.employee("E002").unwrap().worked_in(&month));
    assert_eq!(fixture.ledger.processed_months().len(), 1);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn unknown_id_is_logged_once_and_creates_no_employee() {
    let mut fixture = standard_fixture();
    let report = fixture.ingest("jan25.txt", "E001 160\nE999 40\n");

    assert_eq!(report.outcome, IngestionOutcome::Ingested);
    assert_eq!(report.errors.len(), 1);
    assert!(fixture.ledger.employee("E999").is_none());
    assert_eq!(fixture.ledger.employee_count(), 3);

    let lines = fixture.error_log_lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("jan25.txt"));
    assert_eq!(lines[1], "E999 is not a valid employee ID number.");
}

#[test]
fn error_log_accumulates_across_ingestions() {
    let mut fixture = standard_fixture();
    fixture.ingest("jan25.txt", "E998 10\n");
    fixture.ingest("feb25.txt", "E999 20\n");

    let lines = fixture.error_log_lines();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("E998"));
    assert!(lines[3].starts_with("E999"));
}

#[test]
fn missing_pay_file_reports_not_found_and_registers_nothing() {
    let mut fixture = standard_fixture();
    let missing = fixture.dir.path().join("jan25.txt");

    let report = ingest_pay_file(&mut fixture.ledger, &missing, &fixture.log, |month| {
        panic!("unexpected replace prompt for {month}")
    })
    .unwrap();

    assert_eq!(report.outcome, IngestionOutcome::FileNotFound);
    assert!(fixture.ledger.processed_months().is_empty());

    let lines = fixture.error_log_lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("could not be found."));

    // Reporting still works over the untouched store.
    let rows = month_summary(&fixture.ledger, &report.month, &TaxPolicy::default());
    assert!(rows.is_empty());
}

#[test]
fn month_with_only_invalid_lines_is_still_registered() {
    let mut fixture = standard_fixture();
    let report = fixture.ingest("jan25.txt", "E999 40\nnot a line\n");

    assert!(report.outcome.is_success());
    assert_eq!(report.lines_applied, 0);
    assert!(fixture.ledger.is_month_processed(&MonthCode::new("JAN25")));
}

// =============================================================================
// Ranking
// =============================================================================

#[test]
fn rank_by_net_pay_descends_with_documented_tie_break() {
    // Flat rate 1 and an untaxing policy make net pay equal hours, so the
    // ranked values can be read straight from the pay file.
    let mut fixture = Fixture::new("E001 Ana 1\nE002 Ben 1\nE003 Cal 1\nE004 Dee 1\n");
    fixture.ingest("jan25.txt", "E001 100\nE002 250\nE003 250\nE004 50\n");

    let policy = TaxPolicy {
        tax_free_allowance: Decimal::ZERO,
        tax_rate: Decimal::ZERO,
        months_in_year: 12,
    };
    let rows = rank_employees(
        &fixture.ledger,
        &MonthCode::new("JAN25"),
        RankCriterion::NetPay,
        &policy,
    );

    let nets: Vec<Decimal> = rows.iter().map(|row| row.net).collect();
    assert_eq!(nets, vec![dec("250"), dec("250"), dec("100"), dec("50")]);
    // The 250 tie resolves by ascending employee ID.
    assert_eq!(rows[0].id, "E002");
    assert_eq!(rows[1].id, "E003");
}

#[test]
fn rank_excludes_employees_without_hours_for_the_month() {
    let mut fixture = standard_fixture();
    fixture.ingest("jan25.txt", "E001 160\nE003 80\n");

    let rows = rank_employees(
        &fixture.ledger,
        &MonthCode::new("JAN25"),
        RankCriterion::HourlyRate,
        &TaxPolicy::default(),
    );

    let ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids, vec!["E003", "E001"]);
}

// =============================================================================
// Output file
// =============================================================================

#[test]
fn month_output_file_has_header_and_two_decimal_rows() {
    let mut fixture = standard_fixture();
    fixture.ingest("jan25.txt", "E001 160\n");

    let path = write_month_output(
        &fixture.ledger,
        &MonthCode::new("JAN25"),
        &TaxPolicy::default(),
        fixture.dir.path(),
    )
    .unwrap();

    assert_eq!(path.file_name().unwrap(), "jan25_output.txt");
    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("ID"));
    assert!(lines[1].starts_with("E001"));
    for figure in ["15.00", "160.00", "2400.00", "270.50", "2129.50"] {
        assert!(lines[1].contains(figure), "missing {figure} in {}", lines[1]);
    }
}
