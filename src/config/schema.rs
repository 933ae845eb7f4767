use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "command": {
                "type": "object",
                "required": ["program"],
                "properties": {
                    "program": { "type": "string", "minLength": 1 },
                    "args": { "type": "array", "items": { "type": "string" } },
                    "working_dir": { "type": "string" }
                },
                "additionalProperties": false
            },
            "capture": {
                "type": "object",
                "properties": {
                    "timeout_secs": { "type": "integer", "minimum": 1 }
                },
                "additionalProperties": false
            },
            "output": {
                "type": "object",
                "properties": {
                    "directory": { "type": "string" },
                    "snapshot": { "type": "string" },
                    "report": { "type": "string" }
                },
                "additionalProperties": false
            }
        },
        "additionalProperties": false
    })
});
