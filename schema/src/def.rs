use serde::{Deserialize, Serialize};

/// A batch of definitions, the JSON envelope handed to the resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub apps: Vec<Definition>,
}

/// One record type: a display name, a machine identifier unique within the
/// batch, and its fields in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub name:       String,
    pub identifier: String,
    #[serde(default)]
    pub fields:     Vec<FieldSpec>,
}

impl Definition {
    /// Identifiers of other definitions this one looks up.
    /// Self-references carry no ordering constraint and are skipped.
    pub fn lookup_targets(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|field| field.kind == FieldKind::AppLookup)
            .filter_map(|field| field.reference.as_deref())
            .filter(|target| *target != self.identifier)
            .collect()
    }
}

/// One field of a definition.
///
/// `options` is only meaningful for `Select` fields (the enumeration keys, in
/// declaration order); `reference` only for `AppLookup` fields (the target
/// definition's identifier).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name:      String,
    #[serde(rename = "fulltype")]
    pub kind:      FieldKind,
    pub label:     String,
    #[serde(default)]
    pub required:  bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options:   Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// The closed set of field kinds the generator understands.
///
/// Wire tags it does not recognize land in `Other` with the raw tag kept
/// as-is; parsing never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Text,
    Number,
    Bool,
    Date,
    DateTime,
    Select,
    AppLookup,
    Other(String),
}

impl From<&str> for FieldKind {
    fn from(tag: &str) -> Self {
        match tag {
            "string/text"          => FieldKind::Text,
            "number"               => FieldKind::Number,
            "bool"                 => FieldKind::Bool,
            "date/date"            => FieldKind::Date,
            "date/datetimeminute"  => FieldKind::DateTime,
            "lookup/select"        => FieldKind::Select,
            other if other.contains("applookup") => FieldKind::AppLookup,
            other => FieldKind::Other(other.to_owned()),
        }
    }
}

impl From<String> for FieldKind {
    fn from(tag: String) -> Self {
        FieldKind::from(tag.as_str())
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text       => "string/text".to_owned(),
            FieldKind::Number     => "number".to_owned(),
            FieldKind::Bool       => "bool".to_owned(),
            FieldKind::Date       => "date/date".to_owned(),
            FieldKind::DateTime   => "date/datetimeminute".to_owned(),
            FieldKind::Select     => "lookup/select".to_owned(),
            FieldKind::AppLookup  => "applookup/select".to_owned(),
            FieldKind::Other(raw) => raw,
        }
    }
}
