use recordgen_schema::MaterializedDefinition;

use crate::doc::{Document, Function, Item, Method, MethodGroup, ServiceClass};
use crate::error::CompileError;
use crate::names;

pub const SERVICE_HEADER: &str = "AUTOMATICALLY GENERATED SERVICE - DO NOT EDIT";

/// Knobs baked into the generated service document.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceOptions {
    /// Base URL of the remote record service.
    pub base_url:     String,
    /// Module path the service imports the generated types from.
    pub types_module: String,
    /// Name of the exported service class.
    pub class_name:   String,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        ServiceOptions {
            base_url:     "https://records.example.com/rest".to_owned(),
            types_module: "@/types/records".to_owned(),
            class_name:   "RecordService".to_owned(),
        }
    }
}

/// Compiles the batch into the service document: shared helpers plus five
/// accessors per definition (list, get, create, update, delete), all thin
/// wrappers over one `callApi` helper.
pub fn compile_service(
    batch: &[MaterializedDefinition],
    options: &ServiceOptions,
) -> Result<String, CompileError> {
    if batch.is_empty() {
        return Err(CompileError::EmptyBatch);
    }

    let mut doc = Document::new();
    doc.push(Item::Comment(SERVICE_HEADER.to_owned()));
    doc.push(Item::Import {
        type_only: false,
        names:     vec!["RECORD_TYPE_IDS".to_owned()],
        from:      options.types_module.clone(),
    });
    doc.push(Item::Import {
        type_only: true,
        names:     batch.iter().map(|def| names::type_name(&def.identifier)).collect(),
        from:      options.types_module.clone(),
    });
    doc.push(Item::Blank);

    doc.push(Item::Comment("Base configuration".to_owned()));
    doc.push(Item::ConstString {
        name:  "API_BASE_URL".to_owned(),
        value: options.base_url.clone(),
    });
    doc.push(Item::Blank);

    doc.push(Item::Comment("--- HELPER FUNCTIONS ---".to_owned()));
    doc.push(Item::Function(extract_record_id()));
    doc.push(Item::Blank);
    doc.push(Item::Function(create_record_url()));
    doc.push(Item::Blank);
    doc.push(Item::Function(call_api()));
    doc.push(Item::Blank);

    doc.push(Item::Class(ServiceClass {
        name:   options.class_name.clone(),
        groups: batch.iter().map(accessor_group).collect(),
    }));

    Ok(doc.render())
}

/// Record ids are the trailing 24 hex characters of a record URL.
fn extract_record_id() -> Function {
    Function {
        exported:    true,
        is_async:    false,
        name:        "extractRecordId".to_owned(),
        params:      "url: string | null | undefined".to_owned(),
        return_type: Some("string | null".to_owned()),
        body:        vec![
            "if (!url) return null;".to_owned(),
            "const match = url.match(/([a-f0-9]{24})$/i);".to_owned(),
            "return match ? match[1] : null;".to_owned(),
        ],
    }
}

fn create_record_url() -> Function {
    Function {
        exported:    true,
        is_async:    false,
        name:        "createRecordUrl".to_owned(),
        params:      "recordTypeId: string, recordId: string".to_owned(),
        return_type: Some("string".to_owned()),
        body:        vec![
            "return `${API_BASE_URL}/apps/${recordTypeId}/records/${recordId}`;".to_owned(),
        ],
    }
}

/// The one transport helper every accessor goes through. Non-ok responses
/// throw with the raw body; DELETE skips JSON parsing because some backends
/// answer it with an empty body.
fn call_api() -> Function {
    Function {
        exported:    false,
        is_async:    true,
        name:        "callApi".to_owned(),
        params:      "method: string, endpoint: string, data?: unknown".to_owned(),
        return_type: None,
        body:        vec![
            "const response = await fetch(`${API_BASE_URL}${endpoint}`, {".to_owned(),
            "  method,".to_owned(),
            "  headers: { 'Content-Type': 'application/json' },".to_owned(),
            "  credentials: 'include',".to_owned(),
            "  body: data ? JSON.stringify(data) : undefined".to_owned(),
            "});".to_owned(),
            "if (!response.ok) throw new Error(await response.text());".to_owned(),
            "if (method === 'DELETE') return true;".to_owned(),
            "return response.json();".to_owned(),
        ],
    }
}

/// The five accessors for one definition. The collection payload maps record
/// ids to record bodies; both GET shapes spread the id into `recordId`.
fn accessor_group(def: &MaterializedDefinition) -> MethodGroup {
    let plural = names::type_name(&def.identifier);
    let singular = names::singular_method_name(&plural);
    let constant = names::constant_name(&def.identifier);

    let collection = format!("`/apps/${{RECORD_TYPE_IDS.{}}}/records`", constant);
    let item = format!("`/apps/${{RECORD_TYPE_IDS.{}}}/records/${{id}}`", constant);

    MethodGroup {
        heading: constant,
        methods: vec![
            Method {
                name:        format!("get{}", plural),
                params:      String::new(),
                return_type: Some(format!("Promise<{}[]>", plural)),
                body:        vec![
                    format!("const data = await callApi('GET', {});", collection),
                    "return Object.entries(data).map(([id, rec]: [string, any]) => ({".to_owned(),
                    "  recordId: id, ...rec".to_owned(),
                    "}));".to_owned(),
                ],
            },
            Method {
                name:        format!("get{}", singular),
                params:      "id: string".to_owned(),
                return_type: Some(format!("Promise<{} | undefined>", plural)),
                body:        vec![
                    format!("const data = await callApi('GET', {});", item),
                    "return { recordId: data.id, ...data };".to_owned(),
                ],
            },
            Method {
                name:        format!("create{}", singular),
                params:      format!("fields: {}['fields']", plural),
                return_type: None,
                body:        vec![format!(
                    "return callApi('POST', {}, {{ fields }});",
                    collection
                )],
            },
            Method {
                name:        format!("update{}", singular),
                params:      format!("id: string, fields: Partial<{}['fields']>", plural),
                return_type: None,
                body:        vec![format!("return callApi('PATCH', {}, {{ fields }});", item)],
            },
            Method {
                name:        format!("delete{}", singular),
                params:      "id: string".to_owned(),
                return_type: None,
                body:        vec![format!("return callApi('DELETE', {});", item)],
            },
        ],
    }
}
