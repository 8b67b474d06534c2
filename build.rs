use std::fs;

/// Sections and keys of `Config`, with the TOML type each key must have.
const SCHEMA: &[(&str, &[(&str, &str)])] = &[
    ("document", &[("wrap", "boolean"), ("class", "string")]),
    ("links", &[("new_tab", "boolean"), ("rel", "string")]),
    (
        "code",
        &[
            ("class_prefix", "string"),
            ("lowercase_language", "boolean"),
            ("data_attribute", "boolean"),
        ],
    ),
];

fn main() {
    // Validate default config at compile time
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    if let Err(e) = check_schema(&table) {
        panic!("Invalid default_config.toml: {}", e);
    }
}

fn check_schema(table: &toml::Table) -> Result<(), String> {
    for (section, value) in table {
        let Some((_, keys)) = SCHEMA.iter().find(|(name, _)| name == section) else {
            return Err(format!("unknown section [{section}]"));
        };
        let Some(entries) = value.as_table() else {
            return Err(format!("[{section}] must be a table"));
        };
        for (key, value) in entries {
            let Some((_, expected)) = keys.iter().find(|(name, _)| name == key) else {
                return Err(format!("unknown key {section}.{key}"));
            };
            if value.type_str() != *expected {
                return Err(format!(
                    "{section}.{key} must be a {expected}, found {}",
                    value.type_str()
                ));
            }
        }
    }
    Ok(())
}
