use tera::Tera;

use crate::config::SiteConfig;
use crate::error::AppError;

/// Default number of decimal places for the percent filter
const DEFAULT_PERCENT_PRECISION: usize = 2;

/// Initialize the Tera template engine
pub fn init_templates(site: &SiteConfig) -> Result<Tera, AppError> {
    let mut tera = Tera::new(&site.template_glob())?;

    // Add custom filters
    tera.register_filter("percent", percent_filter);

    Ok(tera)
}

/// Format a fraction as a percentage string, e.g. `0.0117` becomes `"1.17%"`.
///
/// Takes an optional `precision` argument for the number of decimal places
/// (default 2). Lesson templates use this to render Pokemon encounter and
/// shiny odds without repeating the formatting inline.
fn percent_filter(
    value: &tera::Value,
    args: &std::collections::HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let fraction = value
        .as_f64()
        .ok_or_else(|| tera::Error::msg("percent filter expects a number"))?;

    let precision = args
        .get("precision")
        .and_then(|v| v.as_u64())
        .unwrap_or(DEFAULT_PERCENT_PRECISION as u64) as usize;

    Ok(tera::Value::String(format!(
        "{:.*}%",
        precision,
        fraction * 100.0
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn apply_percent(value: tera::Value, args: HashMap<String, tera::Value>) -> String {
        percent_filter(&value, &args)
            .unwrap()
            .as_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn percent_formats_fraction_with_default_precision() {
        let result = apply_percent(tera::Value::from(0.0117), HashMap::new());
        assert_eq!(result, "1.17%");
    }

    #[test]
    fn percent_honors_precision_argument() {
        let mut args = HashMap::new();
        args.insert("precision".to_string(), tera::Value::from(0u64));
        let result = apply_percent(tera::Value::from(0.5), args);
        assert_eq!(result, "50%");
    }

    #[test]
    fn percent_handles_whole_numbers() {
        let result = apply_percent(tera::Value::from(1.0), HashMap::new());
        assert_eq!(result, "100.00%");
    }

    #[test]
    fn percent_rejects_non_numbers() {
        let result = percent_filter(&tera::Value::from("not a number"), &HashMap::new());
        assert!(result.is_err());
    }
}
