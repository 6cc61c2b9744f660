use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::application::Session;
use crate::domain::{CANONICAL_CATEGORIES, Settlement, format_usd};
use crate::io::ImportResult;

/// Settled - two-person shared expense tracker
#[derive(Parser)]
#[command(name = "settled")]
#[command(about = "Track shared expenses between H and M and settle who owes whom")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (per-line import diagnostics)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive expense-entry session
    Session {
        /// Pre-load expenses from a CSV or JSON snapshot file
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Compute the settlement for an expense file
    Settle {
        /// Expense CSV file (Category,Amount,Payer,Consumer)
        #[arg(short, long)]
        input: String,
    },

    /// Export an expense file as a spreadsheet-formula CSV
    Export {
        /// Expense CSV file (Category,Amount,Payer,Consumer)
        #[arg(short, long)]
        input: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List the canonical expense categories
    Categories,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Session { input } => {
                let mut session = Session::new();
                if let Some(path) = &input {
                    load_into_session(&mut session, path, self.verbose)?;
                }
                run_session_loop(&mut session)?;
            }

            Commands::Settle { input } => {
                let mut session = Session::new();
                load_into_session(&mut session, &input, self.verbose)?;
                print_settlement(&session.settlement());
            }

            Commands::Export { input, output } => {
                let mut session = Session::new();
                load_into_session(&mut session, &input, self.verbose)?;
                let exporter = session.exporter();
                match output {
                    Some(path) => {
                        let file = File::create(&path)
                            .with_context(|| format!("Cannot create output file '{}'", path))?;
                        exporter.export_ledger_csv(file)?;
                        println!("Exported {} expense(s) to {}", session.len(), path);
                    }
                    None => {
                        exporter.export_ledger_csv(io::stdout().lock())?;
                    }
                }
            }

            Commands::Categories => {
                for category in CANONICAL_CATEGORIES {
                    println!("{}", category);
                }
            }
        }

        Ok(())
    }
}

/// Load a CSV expense file or a JSON session snapshot, picked by extension
fn load_into_session(session: &mut Session, path: &str, verbose: bool) -> Result<()> {
    let file =
        File::open(path).with_context(|| format!("Cannot open expense file '{}'", path))?;

    if Path::new(path).extension().is_some_and(|e| e == "json") {
        let snapshot = session.load_snapshot(file)?;
        if verbose {
            eprintln!(
                "Loaded {} expense(s) from snapshot (exported {})",
                snapshot.expenses.len(),
                snapshot.exported_at
            );
        }
        return Ok(());
    }

    let result = session.load_csv(file)?;
    report_import(&result, verbose);
    Ok(())
}

fn report_import(result: &ImportResult, verbose: bool) {
    if result.skipped > 0 {
        eprintln!(
            "Warning: skipped {} malformed row(s) ({} imported)",
            result.skipped,
            result.imported()
        );
        if verbose {
            for error in &result.errors {
                match &error.field {
                    Some(field) => eprintln!("  line {}, {}: {}", error.line, field, error.error),
                    None => eprintln!("  line {}: {}", error.line, error.error),
                }
            }
        }
    }
}

fn print_settlement(settlement: &Settlement) {
    println!("Total Paid by H: {}", format_usd(settlement.total_paid_h));
    println!("Total Paid by M: {}", format_usd(settlement.total_paid_m));
    println!("Cost to H:       {}", format_usd(settlement.cost_h));
    println!("Cost to M:       {}", format_usd(settlement.cost_m));
    println!("{}", settlement.status());
}

fn print_expenses(session: &Session) {
    if session.is_empty() {
        println!("No expenses recorded yet.");
        return;
    }
    println!("{:<4} {:<26} {:>10}  {:<5} {:<8}", "#", "Category", "Amount", "Paid", "Used");
    for (i, expense) in session.expenses().iter().enumerate() {
        println!(
            "{:<4} {:<26} {:>10}  {:<5} {:<8}",
            i,
            expense.category,
            format_usd(expense.amount),
            expense.payer,
            expense.consumer,
        );
    }
}

const SESSION_HELP: &str = "\
Commands:
  add <category> <amount> <payer> <consumer>
        Record an expense. Payer is H or M; consumer is split, h or m.
        Example: add Eating Out 42.50 H split
  list              Show all recorded expenses
  remove <n>        Remove expense number <n> (from list)
  settle            Show who owes whom
  export <file>     Write the formula CSV to <file>
  save <file>       Save the session as a JSON snapshot
  help              Show this help
  quit              End the session (state is not saved automatically)";

/// Interactive line-oriented session. State is purely in memory and dies
/// with the process unless explicitly saved.
fn run_session_loop(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("settled - interactive session. Type 'help' for commands.");
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "add" => match parse_add_args(rest) {
                Some((category, amount, payer, consumer)) => {
                    match session.add_fields(category, amount, payer, consumer) {
                        Ok(expense) => println!(
                            "Added {} to {}",
                            format_usd(expense.amount),
                            expense.category
                        ),
                        Err(e) => eprintln!("Error: {}", e),
                    }
                }
                None => eprintln!("Usage: add <category> <amount> <payer> <consumer>"),
            },
            "list" => print_expenses(session),
            "remove" => match rest.parse::<usize>() {
                Ok(index) => match session.remove(index) {
                    Ok(expense) => println!(
                        "Removed {} ({})",
                        expense.category,
                        format_usd(expense.amount)
                    ),
                    Err(e) => eprintln!("Error: {}", e),
                },
                Err(_) => eprintln!("Usage: remove <n>"),
            },
            "settle" => print_settlement(&session.settlement()),
            "export" => {
                if rest.is_empty() {
                    eprintln!("Usage: export <file>");
                    continue;
                }
                match File::create(rest) {
                    Ok(file) => match session.exporter().export_ledger_csv(file) {
                        Ok(rows) => println!("Wrote {} category row(s) to {}", rows, rest),
                        Err(e) => eprintln!("Error: {}", e),
                    },
                    Err(e) => eprintln!("Error: cannot create '{}': {}", rest, e),
                }
            }
            "save" => {
                if rest.is_empty() {
                    eprintln!("Usage: save <file>");
                    continue;
                }
                match File::create(rest) {
                    Ok(file) => match session.exporter().export_session_json(file) {
                        Ok(snapshot) => {
                            println!("Saved {} expense(s) to {}", snapshot.expenses.len(), rest)
                        }
                        Err(e) => eprintln!("Error: {}", e),
                    },
                    Err(e) => eprintln!("Error: cannot create '{}': {}", rest, e),
                }
            }
            "help" => println!("{}", SESSION_HELP),
            "quit" | "exit" => break,
            other => eprintln!("Unknown command '{}'. Type 'help' for commands.", other),
        }
    }

    Ok(())
}

/// Split `add` arguments: the last three whitespace-separated tokens are
/// amount, payer and consumer; everything before them is the category, which
/// may itself contain spaces ("Eating Out 42.50 H split").
fn parse_add_args(rest: &str) -> Option<(&str, &str, &str, &str)> {
    let (head, consumer) = rest.rsplit_once(char::is_whitespace)?;
    let (head, payer) = head.trim_end().rsplit_once(char::is_whitespace)?;
    let (category, amount) = head.trim_end().rsplit_once(char::is_whitespace)?;
    let category = category.trim();
    if category.is_empty() {
        return None;
    }
    Some((category, amount, payer, consumer))
}
