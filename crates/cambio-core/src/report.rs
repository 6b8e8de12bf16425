//! Fixed-format console report for the câmbio demo scenario.

use crate::conversion::Conversion;
use crate::url_model::CambioUrl;

/// Built-in URL used when no other is configured.
pub const REFERENCE_URL: &str =
    "bytebank.com/cambio?quantidade=100&moedaOrigem=dolar&moedaDestino=real";

/// Everything the demo report prints.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    pub url: &'a CambioUrl,
    /// Result of comparing `url` with a second record built from the same text.
    pub same_as_copy: bool,
    pub conversion: Conversion,
}

impl Report<'_> {
    /// Report lines in print order. The display line itself spans three lines.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("O tamanho da URL é:  {}", self.url.len()),
            format!("URL completa:  {}", self.url),
            format!("extrator_url == extrator_url_2?  {}", self.same_as_copy),
            format!(
                "O valor da moeda origem é:  {}",
                format_amount(self.conversion.amount)
            ),
            format!(
                "O valor da moeda destino é:  {}",
                format_amount(self.conversion.converted)
            ),
        ]
    }

    pub fn render(&self) -> String {
        self.lines().join("\n")
    }
}

/// Shortest round-trip decimal text for `value`, always with a fractional
/// part or an exponent: `100.0`, `18.181818181818183`, `1e+20`, `1.5e-05`.
///
/// The exponent carries an explicit sign and at least two digits.
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let text = format!("{value:?}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}
