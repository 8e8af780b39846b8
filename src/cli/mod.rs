//! Interactive console session.
//!
//! The session is a thin wrapper around the core: it renders menus, runs
//! the read-until-valid retry loops over the pure validators in [`input`],
//! and hands typed values to the ledger, ingester, and report engine. No
//! payroll logic lives here.

mod input;

pub use input::{
    InputRejection, MenuChoice, parse_index_selection, parse_menu_choice, parse_rank_criterion,
    parse_yes_no,
};

use std::io::{self, Write};
use std::path::PathBuf;

use tracing::info;
use uuid::Uuid;

use crate::config::TaxPolicy;
use crate::error::EngineResult;
use crate::ingest::{ErrorLog, ingest_pay_file};
use crate::ledger::PayrollLedger;
use crate::models::{IngestionOutcome, MonthCode, ReplaceDecision};
use crate::report::{
    employee_breakdown, month_summary, rank_employees, table_header, table_row,
    write_month_output,
};

const HEADER_WIDTH: usize = 70;
const MENU_WIDTH: usize = 50;

/// One interactive payroll session over stdin/stdout.
pub struct Session {
    ledger: PayrollLedger,
    policy: TaxPolicy,
    error_log: ErrorLog,
    output_dir: PathBuf,
}

impl Session {
    /// Creates a session over a loaded ledger.
    pub fn new(
        ledger: PayrollLedger,
        policy: TaxPolicy,
        error_log: ErrorLog,
        output_dir: PathBuf,
    ) -> Self {
        Self {
            ledger,
            policy,
            error_log,
            output_dir,
        }
    }

    /// Runs the main menu loop until the user quits or stdin is exhausted.
    ///
    /// Failures inside one menu action (an unwritable output file, say) are
    /// printed and the menu continues; they never end the session.
    pub fn run(&mut self) {
        println!("Welcome to the Payroll System");
        loop {
            self.print_menu();
            let Some(line) = read_line("Enter choice: ") else {
                break;
            };
            let choice = match parse_menu_choice(&line) {
                Ok(choice) => choice,
                Err(rejection) => {
                    println!("{rejection}");
                    continue;
                }
            };
            let result = match choice {
                MenuChoice::Quit => {
                    println!("Goodbye!");
                    break;
                }
                MenuChoice::ProcessPayFile => self.process_pay_files(),
                MenuChoice::ViewMonthlySummaries => self.view_monthly_summaries(),
                MenuChoice::ViewEmployeeDetails => self.view_employee_details(),
                MenuChoice::RankEmployees => self.rank_employees_menu(),
                MenuChoice::ViewEmployeeTotals => self.view_employee_totals(),
            };
            if let Err(error) = result {
                eprintln!("error: {error}");
            }
        }
    }

    fn print_menu(&self) {
        println!("{}", "=".repeat(MENU_WIDTH));
        println!("Main Menu:");
        println!("{}", "-".repeat(MENU_WIDTH));
        println!("1. Process Pay File");
        println!("2. View All Salary Details");
        println!("3. View Individual Employee Details");
        println!("4. Sort Employees");
        println!("5. View Employee Totals");
        println!("0. Quit");
        println!("{}", "-".repeat(MENU_WIDTH));
    }

    fn process_pay_files(&mut self) -> EngineResult<()> {
        loop {
            let Some(line) =
                read_line("Enter pay file to process (e.g., jan25.txt), or '0' to return: ")
            else {
                return Ok(());
            };
            let file_name = line.trim().to_string();
            if file_name == "0" {
                return Ok(());
            }
            if file_name.is_empty() {
                continue;
            }

            let path = PathBuf::from(&file_name);
            let run_id = Uuid::new_v4();
            info!(run_id = %run_id, file = %path.display(), "processing pay file");

            let report =
                ingest_pay_file(&mut self.ledger, &path, &self.error_log, confirm_replace)?;
            match report.outcome {
                IngestionOutcome::Ingested | IngestionOutcome::Replaced => {
                    println!(
                        "File {} processed successfully as month {}.",
                        file_name, report.month
                    );
                    let output = write_month_output(
                        &self.ledger,
                        &report.month,
                        &self.policy,
                        &self.output_dir,
                    )?;
                    println!("Wrote pay details to {}", output.display());
                }
                IngestionOutcome::Declined => {
                    println!("Kept the existing data for {}.", report.month);
                }
                IngestionOutcome::FileNotFound => {
                    for error in &report.errors {
                        eprintln!("{}", error.message());
                    }
                }
            }
        }
    }

    fn view_monthly_summaries(&self) -> EngineResult<()> {
        loop {
            let Some(month) = self.select_month("Enter number to view details, or 0 to return: ")
            else {
                return Ok(());
            };

            println!();
            println!("{}", "=".repeat(HEADER_WIDTH));
            println!("Monthly Summary: {month}");
            println!("{}", "-".repeat(HEADER_WIDTH));
            println!("{}", table_header());
            println!("{}", "-".repeat(HEADER_WIDTH));
            for row in month_summary(&self.ledger, &month, &self.policy) {
                println!("{}", table_row(&row));
            }
            println!("{}", "=".repeat(HEADER_WIDTH));
        }
    }

    fn view_employee_details(&self) -> EngineResult<()> {
        let Some(id) = self.select_employee() else {
            return Ok(());
        };
        let Some(employee) = self.ledger.employee(&id) else {
            return Ok(());
        };
        let rows = employee_breakdown(&self.ledger, &id, &self.policy)?;
        let totals = self.ledger.employee_totals(&id, &self.policy)?;

        println!();
        println!("{}", "=".repeat(HEADER_WIDTH));
        println!("Details for {} ({})", employee.id, employee.name);
        println!("{}", "-".repeat(HEADER_WIDTH));
        println!(
            "{:<12}{:>8}{:>13}{:>12}{:>13}",
            "Month", "Hours", "Gross", "Tax", "Net"
        );
        println!("{}", "-".repeat(HEADER_WIDTH));
        for row in &rows {
            println!(
                "{:<12}{:>8.2}{:>13.2}{:>12.2}{:>13.2}",
                row.month, row.hours, row.gross, row.tax, row.net
            );
        }
        println!("{}", "-".repeat(HEADER_WIDTH));
        println!(
            "{:<12}{:>8}{:>13.2}{:>12.2}{:>13.2}",
            "Totals:", "", totals.gross, totals.tax, totals.net
        );
        println!("{}", "=".repeat(HEADER_WIDTH));
        Ok(())
    }

    fn rank_employees_menu(&self) -> EngineResult<()> {
        let Some(month) = self.select_month("Enter number (or 0 to return): ") else {
            return Ok(());
        };

        println!("Sort by:");
        println!("1. Hourly Rate");
        println!("2. Hours Worked");
        println!("3. Net Pay");
        let Some(criterion) = prompt("Enter choice: ", parse_rank_criterion) else {
            return Ok(());
        };

        println!("{}", "-".repeat(HEADER_WIDTH));
        println!("{}", table_header());
        println!("{}", "-".repeat(HEADER_WIDTH));
        for row in rank_employees(&self.ledger, &month, criterion, &self.policy) {
            println!("{}", table_row(&row));
        }
        println!("{}", "=".repeat(HEADER_WIDTH));
        Ok(())
    }

    fn view_employee_totals(&self) -> EngineResult<()> {
        let Some(id) = self.select_employee() else {
            return Ok(());
        };
        let Some(employee) = self.ledger.employee(&id) else {
            return Ok(());
        };
        let totals = self.ledger.employee_totals(&id, &self.policy)?;

        println!("{}", "=".repeat(MENU_WIDTH));
        println!("Totals for {} ({}):", employee.id, employee.name);
        println!("{}", "-".repeat(MENU_WIDTH));
        println!("{:<16}{:.2}", "Total Gross:", totals.gross);
        println!("{:<16}{:.2}", "Total Tax:", totals.tax);
        println!("{:<16}{:.2}", "Total Net:", totals.net);
        println!("{}", "=".repeat(MENU_WIDTH));
        Ok(())
    }

    /// Lists the processed months and asks the user to pick one. Returns
    /// `None` on 0, EOF, or when no month has been ingested yet.
    fn select_month(&self, question: &str) -> Option<MonthCode> {
        let months = self.ledger.processed_months();
        if months.is_empty() {
            println!("No pay files processed yet.");
            return None;
        }

        println!("Processed months:");
        for (index, month) in months.iter().enumerate() {
            println!("{:>3}. {month}", index + 1);
        }
        let selection = prompt(question, |line| parse_index_selection(line, months.len()))??;
        Some(months[selection].clone())
    }

    /// Lists all employees and asks the user to pick one. Returns `None`
    /// on 0 or EOF.
    fn select_employee(&self) -> Option<String> {
        println!("{}", "-".repeat(MENU_WIDTH));
        println!("Select Employee");
        println!("{}", "-".repeat(MENU_WIDTH));
        let ids: Vec<&str> = self.ledger.employees().map(|e| e.id.as_str()).collect();
        for (index, employee) in self.ledger.employees().enumerate() {
            println!("{:>3}. {} ({})", index + 1, employee.id, employee.name);
        }
        println!("{}", "-".repeat(MENU_WIDTH));

        let selection = prompt("Select employee by number (or 0 to return): ", |line| {
            parse_index_selection(line, ids.len())
        })??;
        Some(ids[selection].to_string())
    }
}

/// Asks whether an already-processed month should be replaced. EOF counts
/// as keeping the existing data.
fn confirm_replace(month: &MonthCode) -> ReplaceDecision {
    println!("{month} has already been processed.");
    prompt("Do you want to replace it? (y/n): ", parse_yes_no)
        .unwrap_or(ReplaceDecision::Keep)
}

/// Prints a prompt and reads one line. Returns `None` on EOF or a broken
/// stdin.
fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    io::stdout().flush().ok()?;

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}

/// Reads lines until one passes the validator, echoing each rejection.
/// Returns `None` on EOF.
fn prompt<T>(
    question: &str,
    parse: impl Fn(&str) -> Result<T, InputRejection>,
) -> Option<T> {
    loop {
        let line = read_line(question)?;
        match parse(&line) {
            Ok(value) => return Some(value),
            Err(rejection) => println!("{rejection}"),
        }
    }
}
