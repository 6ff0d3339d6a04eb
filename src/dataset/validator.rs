use serde_json::{Map, Value};
use tracing::debug;

use super::record::{Record, RecordContext};

const RECORD_FIELDS: [&str; 3] = ["input", "output", "task"];
const CONTEXT_FIELDS: [&str; 2] = ["content", "title"];

/// Returns `true` iff `raw` is an array whose every element is a well-formed record.
///
/// Extra keys on a record are tolerated. Validation is all-or-nothing: the
/// first non-conforming element fails the whole dataset.
pub fn validate(raw: &Value) -> bool {
    let Some(items) = raw.as_array() else {
        debug!("dataset root is not an array");
        return false;
    };

    items.iter().enumerate().all(|(index, item)| {
        let ok = decode_record(item).is_some();
        if !ok {
            debug!(index, "record failed schema check");
        }
        ok
    })
}

/// Schema-checked decode into typed records.
///
/// Returns `None` when [`validate`] would return `false`.
pub fn decode(raw: &Value) -> Option<Vec<Record>> {
    raw.as_array()?.iter().map(decode_record).collect()
}

fn decode_record(item: &Value) -> Option<Record> {
    let object = item.as_object()?;
    let [input, output, task] = RECORD_FIELDS.map(|key| text_field(object, key));

    let context = object.get("context")?.as_object()?;
    let [content, title] = CONTEXT_FIELDS.map(|key| text_field(context, key));

    Some(Record {
        input: input?,
        output: output?,
        task: task?,
        context: RecordContext {
            content: content?,
            title: title?,
        },
    })
}

fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key)?.as_str().map(str::to_owned)
}
