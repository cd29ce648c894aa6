use serde_json::Value;

const PORTFOLIO_SCHEMA: &str = include_str!("../schema/portfolio.schema.json");

/// The JSON Schema every portfolio document must satisfy.
pub fn portfolio_schema() -> Result<Value, serde_json::Error> {
    serde_json::from_str(PORTFOLIO_SCHEMA)
}

/// Validate data against JSON Schema
/// Returns Ok(()) if valid, Err with every violation (and where it occurred) if invalid
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let compiled = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("Schema compilation error: {}", e)])?;

    let errors: Vec<String> = compiled
        .iter_errors(data)
        .map(|error| {
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            format!("{} at {}", error, location)
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
