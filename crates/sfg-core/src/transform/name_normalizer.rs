use heck::ToPascalCase;

use crate::config::NamingTables;

/// Convert a wire-style identifier (snake or lower-camel) to an exported
/// property name, fixing acronym casing from the configured table.
pub fn to_property_name(name: &str, tables: &NamingTables) -> String {
    apply_acronyms(&name.to_pascal_case(), tables)
}

/// Replace every occurrence of every acronym-table key with its canonical
/// casing, in table order.
pub fn apply_acronyms(s: &str, tables: &NamingTables) -> String {
    let mut out = s.to_string();
    for (miscased, canonical) in &tables.acronyms {
        if out.contains(miscased.as_str()) {
            out = out.replace(miscased.as_str(), canonical);
        }
    }
    out
}
