//! `cambio inspect` – show the parts of a URL.

use anyhow::Result;
use cambio_core::CambioUrl;
use serde_json::{json, Map, Value};

pub(crate) fn render_inspect(raw: &str, as_json: bool) -> Result<String> {
    let url = CambioUrl::new(raw)?;
    if !as_json {
        return Ok(format!("{url}\nTamanho: {}", url.len()));
    }

    let parameters: Map<String, Value> = url
        .parameters()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect();
    let value = json!({
        "url": url.as_str(),
        "base": url.base(),
        "query": url.query_string(),
        "size": url.len(),
        "parameters": parameters,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

pub fn run_inspect(raw: &str, as_json: bool) -> Result<()> {
    println!("{}", render_inspect(raw, as_json)?);
    Ok(())
}
