const STRIPPED_CHARS: [char; 4] = ['(', ')', ',', ' '];
const CONTROLLER_SUFFIX: &str = "_Controller";

// Only ( ) , and space are dropped; distinct descriptions can collapse onto one identifier.
pub fn sanitize_identifier(description: &str) -> String {
    description
        .chars()
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .collect()
}

pub fn leaf_name(shader: &str) -> &str {
    shader.rsplit('/').next().unwrap_or(shader)
}

pub fn controller_class_name(shader: &str) -> String {
    format!("{}{}", leaf_name(shader), CONTROLLER_SUFFIX)
}
