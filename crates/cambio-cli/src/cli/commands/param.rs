//! `cambio param` – print one parameter value.

use anyhow::Result;
use cambio_core::CambioUrl;

pub(crate) fn render_param(raw: &str, name: &str) -> Result<String> {
    let url = CambioUrl::new(raw)?;
    Ok(url.parameter(name)?.to_string())
}

pub fn run_param(raw: &str, name: &str) -> Result<()> {
    println!("{}", render_param(raw, name)?);
    Ok(())
}
