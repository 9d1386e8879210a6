use std::io::Write;
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context};
use cbr_converter_core::{ConverterState, CurrencyCatalog};
use tokio::sync::broadcast;

use crate::cli::Command;

pub async fn run(command: &Command, state: &ConverterState) -> anyhow::Result<ExitCode> {
    let mut stdout = std::io::stdout().lock();
    execute(command, state, &mut stdout).await
}

async fn execute(
    command: &Command,
    state: &ConverterState,
    out: &mut impl Write,
) -> anyhow::Result<ExitCode> {
    load_catalog(state).await?;
    let catalog = state.catalog();

    match command {
        Command::Currencies { json } => {
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(catalog.as_ref())?)?;
            } else {
                print_table(&catalog, out)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Rate { from, to } => {
            let base = resolve_selector(&catalog, from)?;
            let quoted = resolve_selector(&catalog, to)?;
            state.update_conversion_rate(base, quoted);

            let rate = state.conversion_rate().borrow().clone();
            match rate {
                Some(text) => {
                    writeln!(out, "{}", text)?;
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    tracing::warn!("No rate for {}/{}", from, to);
                    eprintln!("{}", state.messages().conversion_error);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Convert { amount, from, to } => {
            let base = resolve_selector(&catalog, from)?;
            let quoted = resolve_selector(&catalog, to)?;
            let mut errors = state.errors();
            state.convert(base, quoted, Some(amount));

            if let Some(message) = next_error(&mut errors) {
                tracing::warn!("Could not convert {:?} {}/{}", amount, from, to);
                eprintln!("{}", message);
                return Ok(ExitCode::FAILURE);
            }
            let text = state
                .converted_text()
                .borrow()
                .clone()
                .context("conversion produced no text")?;
            writeln!(out, "{}", text)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Runs one load and fails with the user-facing message if it signalled one.
async fn load_catalog(state: &ConverterState) -> anyhow::Result<()> {
    let mut errors = state.errors();
    state.load_currencies().await?;
    if let Some(message) = next_error(&mut errors) {
        bail!(message);
    }
    tracing::debug!("Catalog ready with {} currencies", state.catalog().len());
    Ok(())
}

fn next_error(errors: &mut broadcast::Receiver<String>) -> Option<String> {
    errors.try_recv().ok()
}

/// A selector is either a catalog index or a currency code.
fn resolve_selector(catalog: &CurrencyCatalog, selector: &str) -> anyhow::Result<usize> {
    if let Ok(index) = selector.parse::<usize>() {
        return Ok(index);
    }
    catalog
        .position_of_code(selector)
        .ok_or_else(|| anyhow!("unknown currency '{}'", selector))
}

fn print_table(catalog: &CurrencyCatalog, out: &mut impl Write) -> std::io::Result<()> {
    for (index, currency) in catalog.iter().enumerate() {
        writeln!(
            out,
            "{:>3}  {:<4} {:>6}  {:<12} {}",
            index, currency.code, currency.nominal, currency.rate, currency.name
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::main_lib::build_state;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    const DAILY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ValCurs Date="17.10.2026" name="Foreign Currency Market">
  <Valute ID="R01235"><NumCode>840</NumCode><CharCode>USD</CharCode><Nominal>1</Nominal><Name>US Dollar</Name><Value>92,2573</Value></Valute>
  <Valute ID="R01820"><NumCode>392</NumCode><CharCode>JPY</CharCode><Nominal>100</Nominal><Name>Japanese Yen</Name><Value>61,8723</Value></Valute>
</ValCurs>"#;

    fn state_for(contents: &str) -> (ConverterState, NamedTempFile) {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        let config = Config {
            feed_url: "http://127.0.0.1:9".to_string(),
            feed_file: Some(file.path().to_path_buf()),
            log_format: "text".to_string(),
        };
        (build_state(&config), file)
    }

    async fn output_of(command: Command, contents: &str) -> (ExitCode, String) {
        let (state, _file) = state_for(contents);
        let mut out = Vec::new();
        let code = execute(&command, &state, &mut out).await.unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_rate_by_code() {
        let (code, out) = output_of(
            Command::Rate {
                from: "usd".to_string(),
                to: "JPY".to_string(),
            },
            DAILY,
        )
        .await;
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(out.trim(), "149.10921 USD/JPY");
    }

    #[tokio::test]
    async fn test_convert_to_ruble_by_index() {
        let (code, out) = output_of(
            Command::Convert {
                amount: "1.5".to_string(),
                from: "USD".to_string(),
                to: "0".to_string(),
            },
            DAILY,
        )
        .await;
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(out.trim(), "You will get 138.39 RUB");
    }

    #[tokio::test]
    async fn test_convert_bad_amount_fails() {
        let (code, out) = output_of(
            Command::Convert {
                amount: "abc".to_string(),
                from: "USD".to_string(),
                to: "RUB".to_string(),
            },
            DAILY,
        )
        .await;
        assert_eq!(code, ExitCode::FAILURE);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_rate_out_of_range_fails() {
        let (code, _) = output_of(
            Command::Rate {
                from: "0".to_string(),
                to: "7".to_string(),
            },
            DAILY,
        )
        .await;
        assert_eq!(code, ExitCode::FAILURE);
    }

    #[tokio::test]
    async fn test_currencies_table_lists_ruble_first() {
        let (code, out) = output_of(Command::Currencies { json: false }, DAILY).await;
        let codes: Vec<&str> = out
            .lines()
            .filter_map(|line| line.split_whitespace().nth(1))
            .collect();
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(codes, vec!["RUB", "USD", "JPY"]);
    }

    #[tokio::test]
    async fn test_currencies_json() {
        let (_, out) = output_of(Command::Currencies { json: true }, DAILY).await;
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[1]["code"], "USD");
        assert_eq!(value[1]["rate"], "92.2573");
        assert_eq!(value[0]["id"], "rub_id");
    }

    #[tokio::test]
    async fn test_unknown_code_is_error() {
        let (state, _file) = state_for(DAILY);
        let mut out = Vec::new();
        let command = Command::Rate {
            from: "XXX".to_string(),
            to: "USD".to_string(),
        };
        let err = execute(&command, &state, &mut out).await.unwrap_err();
        assert!(err.to_string().contains("unknown currency 'XXX'"));
    }

    #[tokio::test]
    async fn test_load_failure_reports_message() {
        let (state, _file) = state_for("");
        let mut out = Vec::new();
        let err = execute(&Command::Currencies { json: false }, &state, &mut out)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to load currencies");
    }
}
