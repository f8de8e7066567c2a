//! Output helpers shared by every command.

use serde::Serialize;

/// Envelope for `--json` output
#[derive(Serialize)]
pub struct JsonOut<'a, T: Serialize> {
    pub ok: bool,
    pub data: &'a T,
}

/// Print `data` as pretty JSON, or as the text produced by `text`
pub fn emit<T: Serialize>(json: bool, data: &T, text: impl Fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        print!("{}", text(data));
    }
    Ok(())
}

/// Format a USD amount, dropping cents when they are zero
pub fn usd(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${:.0}", amount)
    } else {
        format!("${:.2}", amount)
    }
}
