//! Structural checks for decoded data packages.
//!
//! [`validate`] inspects an untyped JSON tree and lists every defect it finds;
//! [`narrow`] additionally converts an accepted tree into a [`ProjectRecord`].

use serde_json::Value;

use crate::model::{ProjectRecord, RegionKind};

const PREFIX: &str = "Invalid data package";

/// Returns the defects found in `data`. An empty list means the package is acceptable.
///
/// A non-object top level or a missing/empty `drawnAreas` list stops the
/// inspection with a single defect. Past that point every region is checked
/// and all defects are reported together.
pub fn validate(data: &Value) -> Vec<String> {
    if !data.is_object() {
        return vec![format!("{PREFIX}; missing data")];
    }

    let regions = match data.get("drawnAreas").and_then(Value::as_array) {
        Some(regions) if !regions.is_empty() => regions,
        _ => return vec![format!("{PREFIX}; missing or corrupt drawnAreas")],
    };

    let mut defects = Vec::new();
    for region in regions {
        check_region(region, &mut defects);
    }
    defects
}

/// Validates `data` and, when it is acceptable, deserialises it into a typed record.
pub fn narrow(data: Value) -> Result<ProjectRecord, Vec<String>> {
    let defects = validate(&data);
    if !defects.is_empty() {
        return Err(defects);
    }

    // Covers what the structural pass does not look at, such as dates and locations.
    serde_json::from_value(data).map_err(|err| vec![format!("{PREFIX}; {err}")])
}

fn check_region(region: &Value, defects: &mut Vec<String>) {
    let label = display_value(region.get("id"));

    if !is_number(region.get("id")) {
        defects.push(format!(
            "{PREFIX}; missing or corrupt id in polygon {label}"
        ));
    }

    if !is_number(region.get("area")) {
        defects.push(format!(
            "{PREFIX}; missing or corrupt area in polygon {label}"
        ));
    }

    match non_empty_array(region.get("paths")) {
        None => defects.push(format!(
            "{PREFIX}; missing or corrupt polygon object in polygon {label}"
        )),
        Some(paths) => {
            for path in paths {
                let Some(points) = non_empty_array(Some(path)) else {
                    defects.push(format!(
                        "{PREFIX}; missing or corrupt path in polygon {label}"
                    ));
                    continue;
                };
                for point in points {
                    if !is_number(point.get("lat")) || !is_number(point.get("lng")) {
                        defects.push(format!(
                            "{PREFIX}; missing or corrupt lat/lng in polygon {label}"
                        ));
                    }
                }
            }
        }
    }

    let kind = region.get("type");
    let known = kind
        .and_then(Value::as_str)
        .is_some_and(|tag| RegionKind::ALL.iter().any(|candidate| candidate.as_str() == tag));
    if !known {
        defects.push(format!(
            "{PREFIX}; invalid type in polygon {label} ({})",
            display_value(kind)
        ));
    }
}

fn is_number(value: Option<&Value>) -> bool {
    value.is_some_and(Value::is_number)
}

fn non_empty_array(value: Option<&Value>) -> Option<&Vec<Value>> {
    value
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
}

/// Renders a field for inclusion in a defect message. Absent fields read as `undefined`.
fn display_value(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_values_render_as_undefined() {
        assert_eq!(display_value(None), "undefined");
        assert_eq!(display_value(Some(&Value::Null)), "null");
        assert_eq!(display_value(Some(&json!(7))), "7");
        assert_eq!(display_value(Some(&json!("seven"))), "seven");
        assert_eq!(display_value(Some(&json!([1, null, "a"]))), "1,,a");
        assert_eq!(display_value(Some(&json!({"a": 1}))), "[object Object]");
    }
}
