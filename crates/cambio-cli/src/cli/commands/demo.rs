//! `cambio demo` – the reference scenario report.

use anyhow::{Context, Result};
use cambio_core::config::CambioConfig;
use cambio_core::report::{Report, REFERENCE_URL};
use cambio_core::{convert, CambioUrl, ConversionRequest};

/// Builds the report for `raw`, comparing it with a second record of the same text.
pub(crate) fn render_demo(raw: &str, rate: f64) -> Result<String> {
    let url = CambioUrl::new(raw).with_context(|| format!("invalid demo url {raw:?}"))?;
    let copy = CambioUrl::new(raw)?;
    let request = ConversionRequest::from_url(&url)?;
    let conversion = convert(&request, rate)?;

    let report = Report {
        url: &url,
        same_as_copy: url == copy,
        conversion,
    };
    Ok(report.render())
}

pub fn run_demo(cfg: &CambioConfig) -> Result<()> {
    let raw = cfg.default_url.as_deref().unwrap_or(REFERENCE_URL);
    println!("{}", render_demo(raw, cfg.dollar_rate)?);
    Ok(())
}
