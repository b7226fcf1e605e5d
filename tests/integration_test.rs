use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use anyhow::Result;
use tempfile::{tempdir, TempDir};

const HEADER: &str = "InvoiceNo,StockCode,Description,Quantity,InvoiceDate,UnitPrice,CustomerID,Country";

fn create_working_directory(csv_content: Option<&str>) -> Result<TempDir> {
    let directory = tempdir()?;

    if let Some(content) = csv_content {
        let data_directory = directory.path().join("Data");
        fs::create_dir_all(&data_directory)?;
        fs::write(data_directory.join("Online-Retail.csv"), content)?;
    }

    Ok(directory)
}

fn run_in(directory: &Path) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_retail-csv-reader");

    Ok(Command::new(binary_path).current_dir(directory).output()?)
}

#[test]
fn test_cli_prints_single_record_in_both_sections() -> Result<()> {
    let content = format!("{HEADER}\n536365,85123A,WHITE HANGING HEART,6,2010-12-01 08:26,2.55,17850,United Kingdom\n");
    let directory = create_working_directory(Some(&content))?;

    let output = run_in(directory.path())?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let expected_line = "InvoiceNo: 536365, StockCode: 85123A, Description: WHITE HANGING HEART, Quantity: 6, \
                         InvoiceDate: 12/01/2010 08:26:00, UnitPrice: 2.55, CustomerID: 17850, Country: United Kingdom";

    assert_eq!(stdout, format!("Primeiras 10 linhas:\n{expected_line}\n\nÚltimas 10 linhas:\n{expected_line}\n"));

    Ok(())
}

#[test]
fn test_cli_prints_first_and_last_ten_of_larger_file() -> Result<()> {
    let mut content = format!("{HEADER}\n");

    for invoice in 1..=30 {
        content.push_str(&format!("{invoice},SKU,ITEM,,12/1/2010 8:26,1.5,,France\n"));
    }

    let directory = create_working_directory(Some(&content))?;
    let output = run_in(directory.path())?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    let invoices: Vec<&str> = lines.iter()
        .filter_map(|line| line.strip_prefix("InvoiceNo: "))
        .filter_map(|rest| rest.split(',').next())
        .collect();
    let expected: Vec<String> = (1..=10).chain(21..=30).map(|invoice| invoice.to_string()).collect();

    assert_eq!(lines.len(), 23);
    assert_eq!(invoices, expected);
    assert!(lines[1].contains("Quantity: 0, "));
    assert!(lines[1].contains("CustomerID: 0, "));

    Ok(())
}

#[test]
fn test_cli_reports_missing_file_without_failing() -> Result<()> {
    let directory = create_working_directory(None)?;

    let output = run_in(directory.path())?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Erro ao ler o arquivo: "));
    assert!(!stdout.contains("InvoiceNo: "));

    Ok(())
}

#[test]
fn test_cli_prints_nothing_but_the_error_for_malformed_rows() -> Result<()> {
    let content = format!(
        "{HEADER}\n\
         536365,85123A,WHITE HANGING HEART,6,2010-12-01 08:26,2.55,17850,United Kingdom\n\
         536366,22633,HAND WARMER,6,not a date,1.85,17850,United Kingdom\n"
    );
    let directory = create_working_directory(Some(&content))?;

    let output = run_in(directory.path())?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("Erro ao ler o arquivo: "));
    assert!(stdout.contains("InvoiceDate"));

    Ok(())
}

#[test]
fn test_cli_reads_bundled_sample() -> Result<()> {
    let output = run_in(Path::new(env!("CARGO_MANIFEST_DIR")))?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let mut lines = stdout.lines();

    assert_eq!(lines.next(), Some("Primeiras 10 linhas:"));
    assert_eq!(
        lines.next(),
        Some("InvoiceNo: 536365, StockCode: 85123A, Description: WHITE HANGING HEART T-LIGHT HOLDER, Quantity: 6, \
              InvoiceDate: 12/01/2010 08:26:00, UnitPrice: 2.55, CustomerID: 17850, Country: United Kingdom")
    );
    assert!(stdout.contains("InvoiceNo: 536414, StockCode: 22139, Description: , Quantity: 56, "));
    assert!(stdout.contains("CustomerID: 0, Country: United Kingdom"));
    assert!(stdout.trim_end().ends_with("UnitPrice: 4.95, CustomerID: 12680, Country: France"));

    Ok(())
}
