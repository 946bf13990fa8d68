//! A minimal TypeScript declaration tree.
//!
//! The generators build a `Document` out of structured items and render it
//! through one formatter, so both generated files share a single indentation
//! and quoting policy and regeneration stays byte-stable.

/// The scalar types a record field can surface as.
#[derive(Debug, Clone, PartialEq)]
pub enum TsType {
    Number,
    Boolean,
    String,
    StringOrNull,
    /// A closed union of string literals, e.g. `'small' | 'large'`.
    Union(Vec<String>),
}

impl TsType {
    fn render(&self) -> String {
        match self {
            TsType::Number => "number".to_owned(),
            TsType::Boolean => "boolean".to_owned(),
            TsType::String => "string".to_owned(),
            TsType::StringOrNull => "string | null".to_owned(),
            TsType::Union(keys) => keys
                .iter()
                .map(|key| format!("'{}'", key))
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }
}

/// One property inside a record interface's `fields` block.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name:     String,
    pub ty:       TsType,
    pub optional: bool,
    pub note:     Option<String>,
}

/// A generated record interface. The envelope (`recordId`, `createdAt`,
/// `updatedAt`) is identical for every record type, so the tree only carries
/// the per-definition `fields` block.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordInterface {
    pub name:   String,
    pub fields: Vec<Property>,
}

/// A free-standing function in the service document. Bodies are statement
/// lines carrying their own relative indentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub exported:    bool,
    pub is_async:    bool,
    pub name:        String,
    pub params:      String,
    pub return_type: Option<String>,
    pub body:        Vec<String>,
}

/// A `static async` accessor method on the service class.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub name:        String,
    pub params:      String,
    pub return_type: Option<String>,
    pub body:        Vec<String>,
}

/// The methods generated for one definition, under a section comment.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodGroup {
    pub heading: String,
    pub methods: Vec<Method>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceClass {
    pub name:   String,
    pub groups: Vec<MethodGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Comment(String),
    Blank,
    Import {
        type_only: bool,
        names:     Vec<String>,
        from:      String,
    },
    /// `const NAME = 'value';`
    ConstString { name: String, value: String },
    Interface(RecordInterface),
    /// `export const NAME = { KEY: 'value', ... } as const;`
    ConstTable {
        name:    String,
        entries: Vec<(String, String)>,
    },
    /// `export type Name = Target;`
    TypeAlias { name: String, target: String },
    Function(Function),
    Class(ServiceClass),
}

#[derive(Debug, Default)]
pub struct Document {
    items: Vec<Item>,
}

const INDENT: &str = "  ";

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Render the whole tree. Output is deterministic for a given tree and
    /// always ends in exactly one newline.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for item in &self.items {
            render_item(&mut out, item);
        }
        out
    }
}

fn line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}

fn render_item(out: &mut String, item: &Item) {
    match item {
        Item::Comment(text) => line(out, 0, &format!("// {}", text)),
        Item::Blank => out.push('\n'),
        Item::Import { type_only, names, from } => {
            let keyword = if *type_only { "import type" } else { "import" };
            line(
                out,
                0,
                &format!("{} {{ {} }} from '{}';", keyword, names.join(", "), from),
            );
        }
        Item::ConstString { name, value } => {
            line(out, 0, &format!("const {} = '{}';", name, value));
        }
        Item::Interface(interface) => render_interface(out, interface),
        Item::ConstTable { name, entries } => {
            line(out, 0, &format!("export const {} = {{", name));
            for (key, value) in entries {
                line(out, 1, &format!("{}: '{}',", key, value));
            }
            line(out, 0, "} as const;");
        }
        Item::TypeAlias { name, target } => {
            line(out, 0, &format!("export type {} = {};", name, target));
        }
        Item::Function(function) => render_function(out, function),
        Item::Class(class) => render_class(out, class),
    }
}

fn render_interface(out: &mut String, interface: &RecordInterface) {
    line(out, 0, &format!("export interface {} {{", interface.name));
    line(out, 1, "recordId: string;");
    line(out, 1, "createdAt: string;");
    line(out, 1, "updatedAt: string | null;");
    line(out, 1, "fields: {");
    for property in &interface.fields {
        let marker = if property.optional { "?" } else { "" };
        let note = match &property.note {
            Some(note) => format!(" // {}", note),
            None => String::new(),
        };
        line(
            out,
            2,
            &format!("{}{}: {};{}", property.name, marker, property.ty.render(), note),
        );
    }
    line(out, 1, "};");
    line(out, 0, "}");
}

fn render_function(out: &mut String, function: &Function) {
    let export = if function.exported { "export " } else { "" };
    let asyncness = if function.is_async { "async " } else { "" };
    let return_type = match &function.return_type {
        Some(ty) => format!(": {}", ty),
        None => String::new(),
    };
    line(
        out,
        0,
        &format!(
            "{}{}function {}({}){} {{",
            export, asyncness, function.name, function.params, return_type
        ),
    );
    for stmt in &function.body {
        line(out, 1, stmt);
    }
    line(out, 0, "}");
}

fn render_class(out: &mut String, class: &ServiceClass) {
    line(out, 0, &format!("export class {} {{", class.name));
    for group in &class.groups {
        line(out, 1, &format!("// --- {} ---", group.heading));
        for method in &group.methods {
            let return_type = match &method.return_type {
                Some(ty) => format!(": {}", ty),
                None => String::new(),
            };
            line(
                out,
                1,
                &format!("static async {}({}){} {{", method.name, method.params, return_type),
            );
            for stmt in &method.body {
                line(out, 2, stmt);
            }
            line(out, 1, "}");
        }
        out.push('\n');
    }
    line(out, 0, "}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_interface_with_notes() {
        let mut doc = Document::new();
        doc.push(Item::Interface(RecordInterface {
            name: "Workouts".to_owned(),
            fields: vec![
                Property {
                    name: "title".to_owned(),
                    ty: TsType::String,
                    optional: true,
                    note: None,
                },
                Property {
                    name: "intensity".to_owned(),
                    ty: TsType::Union(vec!["low".to_owned(), "high".to_owned()]),
                    optional: true,
                    note: Some("pick one".to_owned()),
                },
            ],
        }));

        assert_eq!(
            doc.render(),
            "export interface Workouts {\n\
             \x20\x20recordId: string;\n\
             \x20\x20createdAt: string;\n\
             \x20\x20updatedAt: string | null;\n\
             \x20\x20fields: {\n\
             \x20\x20\x20\x20title?: string;\n\
             \x20\x20\x20\x20intensity?: 'low' | 'high'; // pick one\n\
             \x20\x20};\n\
             }\n"
        );
    }

    #[test]
    fn test_render_const_table() {
        let mut doc = Document::new();
        doc.push(Item::ConstTable {
            name: "RECORD_TYPE_IDS".to_owned(),
            entries: vec![("WORKOUTS".to_owned(), "W1".to_owned())],
        });

        assert_eq!(
            doc.render(),
            "export const RECORD_TYPE_IDS = {\n\x20\x20WORKOUTS: 'W1',\n} as const;\n"
        );
    }

    #[test]
    fn test_render_ends_in_single_newline() {
        let mut doc = Document::new();
        doc.push(Item::Comment("header".to_owned()));
        doc.push(Item::TypeAlias {
            name: "A".to_owned(),
            target: "B['fields']".to_owned(),
        });
        let text = doc.render();
        assert!(text.ends_with(";\n"));
        assert!(!text.ends_with("\n\n"));
    }
}
