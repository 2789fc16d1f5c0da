//! WASM bindings for the tagcloud-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.

use serde::Deserialize;
use serde_json::to_string;
use wasm_bindgen::prelude::*;

use crate::layout::{CircularCloudLayouter, LayoutConfig, PointI, SizeI};
use crate::output::{CloudOutput, ErrorInfo};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    pub fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

/// Request shape accepted by the layout entry points.
#[derive(Debug, Clone, Deserialize)]
struct CloudRequest {
    center: PointI,
    tags: Vec<SizeI>,
    /// Overrides the default spiral step when present.
    #[serde(default)]
    spiral_step: Option<f64>,
    /// Caps spiral candidates per tag when present.
    #[serde(default)]
    max_attempts: Option<usize>,
}

fn build_layouter(request: &CloudRequest) -> CircularCloudLayouter {
    let mut cfg = LayoutConfig::default();
    if let Some(step) = request.spiral_step {
        cfg.spiral_step = step;
    }
    if request.max_attempts.is_some() {
        cfg.max_attempts = request.max_attempts;
    }
    CircularCloudLayouter::with_config(request.center, &cfg)
}

/// Place every requested tag and shape the result for the frontend.
/// Placement stops at the first failing tag; what was placed so far is
/// still returned, alongside the error.
fn execute(request: &CloudRequest) -> CloudOutput {
    let mut layouter = build_layouter(request);
    let mut error = None;

    for (index, &size) in request.tags.iter().enumerate() {
        if let Err(e) = layouter.place_next_tag(size) {
            error = Some(ErrorInfo {
                message: e.to_string(),
                tag_index: Some(index),
            });
            break;
        }
    }

    CloudOutput {
        center: layouter.center(),
        tags: layouter.tags().to_vec(),
        bounds: layouter.bounding_size(),
        error,
    }
}

fn parse_error_output(e: &serde_json::Error) -> CloudOutput {
    CloudOutput {
        center: PointI { x: 0, y: 0 },
        tags: vec![],
        bounds: SizeI::EMPTY,
        error: Some(ErrorInfo {
            message: e.to_string(),
            tag_index: None,
        }),
    }
}

#[wasm_bindgen]
pub fn layout_cloud(input: &str) -> String {
    let request: CloudRequest = match serde_json::from_str(input) {
        Ok(request) => request,
        Err(e) => {
            console_error(&format!("Error parsing cloud request: {:?}", e));
            return to_string(&parse_error_output(&e)).unwrap();
        }
    };

    let output = execute(&request);
    if let Some(err) = &output.error {
        console_error(&format!("Error placing tags: {}", err.message));
    }
    to_string(&output).unwrap()
}

/// Bounding size only, for callers sizing a canvas before rendering.
/// Runs the same placement as `layout_cloud`.
#[wasm_bindgen]
pub fn cloud_bounds(input: &str) -> String {
    let request: CloudRequest = match serde_json::from_str(input) {
        Ok(request) => request,
        Err(e) => {
            console_error(&format!("Error parsing cloud request: {:?}", e));
            return to_string(&SizeI::EMPTY).unwrap();
        }
    };

    let output = execute(&request);
    to_string(&output.bounds).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_execute_places_every_tag() {
        let request: CloudRequest = serde_json::from_str(
            r#"{"center":{"x":350,"y":350},"tags":[{"w":30,"h":12},{"w":40,"h":20},{"w":25,"h":10}]}"#,
        )
        .unwrap();

        let output = execute(&request);

        assert_eq!(output.tags.len(), 3);
        assert!(output.error.is_none());
        assert_eq!(output.center, PointI { x: 350, y: 350 });
    }

    #[test]
    fn test_execute_surfaces_invalid_dimensions() {
        let request: CloudRequest = serde_json::from_str(
            r#"{"center":{"x":0,"y":0},"tags":[{"w":30,"h":12},{"w":0,"h":5},{"w":25,"h":10}]}"#,
        )
        .unwrap();

        let output = execute(&request);

        // The bad tag stops the run; the first tag is kept.
        assert_eq!(output.tags.len(), 1);
        let error = output.error.unwrap();
        assert_eq!(error.tag_index, Some(1));
        assert!(error.message.contains("positive"));
    }

    #[test]
    fn test_layout_cloud_emits_well_formed_json() {
        let out = layout_cloud(r#"{"center":{"x":0,"y":0},"tags":[{"w":30,"h":12}]}"#);
        let value: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["tags"].as_array().unwrap().len(), 1);
        assert_eq!(value["bounds"]["w"], 30);
        assert_eq!(value["bounds"]["h"], 12);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_request_options_are_honored() {
        let request: CloudRequest = serde_json::from_str(
            r#"{"center":{"x":0,"y":0},"spiral_step":0.05,"max_attempts":1,"tags":[{"w":50,"h":25},{"w":50,"h":25}]}"#,
        )
        .unwrap();

        let output = execute(&request);

        assert_eq!(output.tags.len(), 1);
        let error = output.error.unwrap();
        assert_eq!(error.tag_index, Some(1));
        assert!(error.message.contains("spiral candidates"));
    }
}
