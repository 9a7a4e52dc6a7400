//! HTTP span helpers.

/// Static routes nested under an id-bearing collection.
const STATIC_CHILDREN: [(&str, &[&str]); 3] = [
    ("products", &["load", "next", "select", "view"]),
    ("users", &[]),
    ("orders", &[]),
];

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) otel_path: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let otel_path = normalise_path_for_span_name(path);
    let otel_span_name = format!("{method} {otel_path}");

    RequestSpanName {
        otel_path,
        otel_span_name,
    }
}

/// Replace gateway ids with `{id}` so routes stay low-cardinality.
fn normalise_path_for_span_name(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut normalised = String::from("/");
    let mut previous: Option<&str> = None;

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            normalised.push('/');
        }

        if is_id_segment(previous, segment) {
            normalised.push_str("{id}");
        } else {
            normalised.push_str(segment);
        }

        previous = Some(segment);
    }

    normalised
}

fn is_id_segment(previous: Option<&str>, segment: &str) -> bool {
    let Some(previous) = previous else {
        return false;
    };

    STATIC_CHILDREN
        .iter()
        .find(|(collection, _)| *collection == previous)
        .is_some_and(|(_, children)| !segment.is_empty() && !children.contains(&segment))
}
