use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Scalar,
    Range,
    Vector,
    Color,
    Texture,
    // raw keyword, no type mapping
    Unrecognized(String),
}

impl PropertyKind {
    pub fn from_keyword(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "float" | "scalar" => Self::Scalar,
            "range" => Self::Range,
            "vector" => Self::Vector,
            "color" => Self::Color,
            "texture" | "texenv" | "2d" | "3d" | "cube" | "2darray" | "cubearray" => {
                Self::Texture
            }
            _ => Self::Unrecognized(input.trim().to_string()),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShaderProperty {
    pub name: String,
    pub kind: PropertyKind,
    pub description: String,
    pub index: usize,
}

impl ShaderProperty {
    pub fn new(name: &str, kind: PropertyKind, description: &str, index: usize) -> Self {
        Self {
            name: name.to_string(),
            kind,
            description: description.to_string(),
            index,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PropertyReport {
    pub index: usize,
    pub name: String,
    pub description: String,
    pub kind: PropertyKind,
    pub identifier: String,
    pub declared_type: String,
    pub setter: String,
}

#[derive(Debug, Serialize)]
pub struct InspectOutput {
    pub shader: String,
    pub class_name: String,
    pub property_count: usize,
    pub unrecognized_count: usize,
    pub properties: Vec<PropertyReport>,
}

#[derive(Debug, Serialize)]
pub struct GenerationReport {
    pub shader: String,
    pub class_name: String,
    pub output_path: String,
    pub properties: usize,
    pub lines: usize,
    pub written: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_map_to_kinds() {
        assert_eq!(PropertyKind::from_keyword("Float"), PropertyKind::Scalar);
        assert_eq!(PropertyKind::from_keyword(" range "), PropertyKind::Range);
        assert_eq!(PropertyKind::from_keyword("2D"), PropertyKind::Texture);
        assert_eq!(PropertyKind::from_keyword("TexEnv"), PropertyKind::Texture);
        assert_eq!(
            PropertyKind::from_keyword("Int"),
            PropertyKind::Unrecognized("Int".to_string())
        );
        assert!(!PropertyKind::from_keyword("Int").is_recognized());
    }
}
