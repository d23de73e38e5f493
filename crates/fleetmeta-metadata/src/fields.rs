//! Named-field access and selective marshaling for catalog entities.
//!
//! Every kind declares its fields as a `const` table of [`FieldDef`]; get,
//! set and projection validate field names and value types against that
//! table instead of probing the model at runtime. Models only need to be
//! `Serialize + DeserializeOwned`; application goes through a `serde_json`
//! object so the same code serves all kinds.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use fleetmeta_common::MetaError;

/// One declared field of a catalog kind.
#[derive(Clone, Copy, Debug)]
pub struct FieldDef {
    /// Wire and column name.
    pub name: &'static str,
    pub kind: FieldKind,
    /// Must be supplied on create.
    pub required: bool,
    /// Writable through `apply_fields`. Identity and timestamps are
    /// store-assigned and read-only to the application.
    pub settable: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    OptionalInt,
    Text,
    Timestamp,
}

impl FieldKind {
    fn expected(self) -> &'static str {
        match self {
            FieldKind::Int => "an integer",
            FieldKind::OptionalInt => "an integer or null",
            FieldKind::Text => "a string",
            FieldKind::Timestamp => "a timestamp string",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            FieldKind::Int => value.as_i64().is_some(),
            FieldKind::OptionalInt => value.is_null() || value.as_i64().is_some(),
            FieldKind::Text => value.is_string(),
            FieldKind::Timestamp => value.is_string(),
        }
    }
}

fn find_def(
    kind: &'static str,
    defs: &'static [FieldDef],
    name: &str,
) -> Result<&'static FieldDef, MetaError> {
    defs.iter()
        .find(|def| def.name == name)
        .ok_or(MetaError::FieldNotExists {
            kind,
            names: name.to_string(),
        })
}

fn to_object<M: Serialize>(model: &M) -> Result<Map<String, Value>, MetaError> {
    match serde_json::to_value(model)? {
        Value::Object(object) => Ok(object),
        // entity models are plain structs and always serialize to objects
        _ => Err(MetaError::FieldNotExists {
            kind: "entity",
            names: "<non-object model>".to_string(),
        }),
    }
}

/// Read one declared field of `model` by name.
pub fn field_value<M: Serialize>(
    kind: &'static str,
    defs: &'static [FieldDef],
    model: &M,
    name: &str,
) -> Result<Value, MetaError> {
    let def = find_def(kind, defs, name)?;
    let object = to_object(model)?;
    Ok(object.get(def.name).cloned().unwrap_or(Value::Null))
}

/// Apply a named-field map to `model`, returning the modified copy.
///
/// Unknown field names, read-only fields and type-incompatible values are
/// errors; the first error aborts the whole application, so the caller's
/// model is never partially updated.
pub fn apply_fields<M: Serialize + DeserializeOwned>(
    kind: &'static str,
    defs: &'static [FieldDef],
    model: &M,
    fields: &Map<String, Value>,
) -> Result<M, MetaError> {
    let mut object = to_object(model)?;

    for (name, supplied) in fields {
        let def = find_def(kind, defs, name)?;
        if !def.settable {
            return Err(MetaError::FieldNotSettable {
                kind,
                name: def.name,
            });
        }
        if !def.kind.accepts(supplied) {
            return Err(MetaError::FieldTypeMismatch {
                kind,
                name: def.name,
                expected: def.kind.expected(),
            });
        }
        object.insert(def.name.to_string(), supplied.clone());
    }

    Ok(serde_json::from_value(Value::Object(object))?)
}

/// Required field names declared by `defs` but absent from `fields`.
pub fn missing_required(
    defs: &'static [FieldDef],
    fields: &Map<String, Value>,
) -> Vec<&'static str> {
    defs.iter()
        .filter(|def| def.required && !fields.contains_key(def.name))
        .map(|def| def.name)
        .collect()
}

/// Flip the soft-delete flag on an in-memory entity. Idempotent.
pub fn mark_deleted<M: Serialize + DeserializeOwned>(
    kind: &'static str,
    defs: &'static [FieldDef],
    model: &M,
) -> Result<M, MetaError> {
    let mut fields = Map::new();
    fields.insert("del_flag".to_string(), Value::from(1));
    apply_fields(kind, defs, model, &fields)
}

/// Full JSON serialization of one entity.
pub fn marshal<M: Serialize>(model: &M) -> Result<Vec<u8>, MetaError> {
    Ok(serde_json::to_vec(model)?)
}

/// JSON object containing exactly the named fields of `model`, each under
/// its wire name.
pub fn marshal_with_fields<M: Serialize>(
    kind: &'static str,
    defs: &'static [FieldDef],
    model: &M,
    names: &[&str],
) -> Result<Vec<u8>, MetaError> {
    let object = to_object(model)?;
    let mut projected = Map::new();
    for name in names {
        let def = find_def(kind, defs, name)?;
        projected.insert(
            def.name.to_string(),
            object.get(def.name).cloned().unwrap_or(Value::Null),
        );
    }
    Ok(serde_json::to_vec(&Value::Object(projected))?)
}
