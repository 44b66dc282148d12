//! The default configuration template.

use std::sync::OnceLock;

use serde_json::{json, Value};

static DEFAULT_CONFIG: OnceLock<Value> = OnceLock::new();

/// Returns the immutable default configuration tree.
///
/// Built once and shared by reference; [`crate::merge`] always clones into
/// a fresh result, so the template is never mutated. The values are the
/// chart's historical defaults: a 960x136 panel of 17px cells, a 5-bucket
/// quantize scale over `[1, 5]`, and the single year 2016.
pub fn default_config() -> &'static Value {
    DEFAULT_CONFIG.get_or_init(|| {
        json!({
            "data": {
                "scheme": { "date": "YYYY-MM-DD" },
                "data": []
            },
            "options": {
                "size": { "width": 960.0, "height": 136.0, "cell_size": 17.0 },
                "scales": {
                    "value": { "type": "quantize", "domain": [1.0, 5.0], "range": 5 },
                    "time": { "type": "range", "start": 2016, "stop": 2017 }
                }
            }
        })
    })
}
