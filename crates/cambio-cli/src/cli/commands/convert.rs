//! `cambio convert` – convert the amount of a URL.

use anyhow::{Context, Result};
use cambio_core::report::format_amount;
use cambio_core::{convert, CambioUrl, ConversionRequest};

pub(crate) fn render_convert(raw: &str, rate: f64) -> Result<String> {
    let url = CambioUrl::new(raw)?;
    let request = ConversionRequest::from_url(&url).context("cannot read conversion parameters")?;
    let conversion = convert(&request, rate)?;
    Ok(format!(
        "O valor da moeda origem é:  {}\nO valor da moeda destino é:  {}",
        format_amount(conversion.amount),
        format_amount(conversion.converted)
    ))
}

pub fn run_convert(raw: &str, rate: f64) -> Result<()> {
    println!("{}", render_convert(raw, rate)?);
    Ok(())
}
