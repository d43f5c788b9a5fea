use crate::error::GenError;
use crate::method_block::SERIALIZE_ATTR;
use std::fs;
use std::path::Path;

pub const SCRIPT_NAME_TOKEN: &str = "#SCRIPTNAME#";
pub const NOTRIM_TOKEN: &str = "#NOTRIM#";
pub const CLASS_NAME_LINE: usize = 5;
pub const NOTRIM_LINES: [usize; 2] = [10, 16];
pub const MIN_TEMPLATE_LINES: usize = 17;

const BUILTIN_TEMPLATE: &str = include_str!("../templates/ShaderController.cs.txt");

const RESOURCE_FIELDS: [&str; 2] = [
    "    private MeshRenderer meshRenderer;",
    "    private MeshFilter meshFilter;",
];

#[derive(Debug, Clone)]
pub struct Template {
    lines: Vec<String>,
}

impl Template {
    pub fn builtin() -> Self {
        Self::from_text(BUILTIN_TEMPLATE)
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, GenError> {
        let text = fs::read_to_string(path).map_err(|source| GenError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(&text))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn splice(&self, blocks: &[Vec<String>], class_name: &str) -> Result<Vec<String>, GenError> {
        splice(&self.lines, blocks, class_name)
    }
}

pub fn apply_fixed_substitutions(lines: &mut [String], class_name: &str) -> Result<(), GenError> {
    let len = lines.len();
    let line = lines
        .get_mut(CLASS_NAME_LINE)
        .ok_or(GenError::LineOutOfRange {
            index: CLASS_NAME_LINE,
            len,
        })?;
    *line = line.replace(SCRIPT_NAME_TOKEN, class_name);

    for index in NOTRIM_LINES {
        let line = lines
            .get_mut(index)
            .ok_or(GenError::LineOutOfRange { index, len })?;
        *line = line.replace(NOTRIM_TOKEN, "");
    }
    Ok(())
}

pub fn splice(
    template_lines: &[String],
    blocks: &[Vec<String>],
    class_name: &str,
) -> Result<Vec<String>, GenError> {
    let block_lines: usize = blocks.iter().map(Vec::len).sum();
    let mut out = Vec::with_capacity(template_lines.len() + 2 * RESOURCE_FIELDS.len() + block_lines + 1);
    out.extend_from_slice(template_lines);

    // The template's closing brace would otherwise sit above the appended members.
    match out.last_mut() {
        Some(last) => last.clear(),
        None => return Err(GenError::LineOutOfRange { index: 0, len: 0 }),
    }

    // Substitution indices only ever address template lines, never appended ones.
    apply_fixed_substitutions(&mut out, class_name)?;

    for field in RESOURCE_FIELDS {
        out.push(SERIALIZE_ATTR.to_string());
        out.push(field.to_string());
    }
    for block in blocks {
        out.extend(block.iter().cloned());
    }
    out.push("}".to_string());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method_block::generate_method_block;
    use crate::types::{PropertyKind, ShaderProperty};

    fn seventeen_line_template() -> Vec<String> {
        (0..MIN_TEMPLATE_LINES)
            .map(|i| match i {
                CLASS_NAME_LINE => format!("public class {} : MonoBehaviour", SCRIPT_NAME_TOKEN),
                10 | 16 => NOTRIM_TOKEN.to_string(),
                _ => format!("// line {}", i),
            })
            .collect()
    }

    #[test]
    fn splices_single_scalar_property() {
        let template = seventeen_line_template();
        let prop = ShaderProperty::new("_Cutoff", PropertyKind::Scalar, "Alpha Cutoff", 0);
        let block = generate_method_block(&prop, false, true);
        let out = splice(&template, &[block.clone()], "Standard_Controller").unwrap();

        assert_eq!(out.len(), 17 + 4 + block.len() + 1);
        assert_eq!(out.last().map(String::as_str), Some("}"));
        assert_eq!(out[5], "public class Standard_Controller : MonoBehaviour");
        assert_eq!(out[10], "");
        assert_eq!(out[16], "");
        assert!(!out.iter().any(|l| l.contains(SCRIPT_NAME_TOKEN) || l.contains(NOTRIM_TOKEN)));
        assert_eq!(out[17], SERIALIZE_ATTR);
        assert_eq!(out[18], "    private MeshRenderer meshRenderer;");
        assert_eq!(out[20], "    private MeshFilter meshFilter;");
        assert_eq!(&out[21..21 + block.len()], block.as_slice());
    }

    #[test]
    fn clears_last_template_line() {
        let mut template = seventeen_line_template();
        template.push("}".to_string());
        let out = splice(&template, &[], "X_Controller").unwrap();
        assert_eq!(out[17], "");
        assert_eq!(out.len(), 18 + 4 + 1);
        assert_eq!(out.iter().filter(|l| l.as_str() == "}").count(), 1);
    }

    #[test]
    fn replaces_every_placeholder_on_class_line() {
        let mut template = seventeen_line_template();
        template[5] = "class #SCRIPTNAME# /* #SCRIPTNAME# */".to_string();
        template[3] = "// #SCRIPTNAME# stays here".to_string();
        let out = splice(&template, &[], "Glow_Controller").unwrap();
        assert_eq!(out[5], "class Glow_Controller /* Glow_Controller */");
        assert_eq!(out[3], "// #SCRIPTNAME# stays here");
    }

    #[test]
    fn missing_markers_are_ignored() {
        let template: Vec<String> = (0..20).map(|i| format!("line {}", i)).collect();
        let out = splice(&template, &[], "A_Controller").unwrap();
        assert_eq!(out[5], "line 5");
        assert_eq!(out[10], "line 10");
    }

    #[test]
    fn blocks_keep_input_order() {
        let a = vec!["a1".to_string(), "a2".to_string()];
        let b = vec!["b1".to_string()];
        let out = splice(&seventeen_line_template(), &[a, b], "C").unwrap();
        let tail: Vec<&str> = out[21..].iter().map(String::as_str).collect();
        assert_eq!(tail, vec!["a1", "a2", "b1", "}"]);
    }

    #[test]
    fn short_template_is_out_of_range() {
        let template: Vec<String> = (0..12).map(|i| format!("line {}", i)).collect();
        let err = splice(&template, &[], "C").unwrap_err();
        assert!(matches!(err, GenError::LineOutOfRange { index: 16, len: 12 }));

        let err = splice(&[], &[], "C").unwrap_err();
        assert!(matches!(err, GenError::LineOutOfRange { .. }));
    }

    #[test]
    fn from_text_handles_crlf() {
        let t = Template::from_text("a\r\nb\r\n\r\nc");
        assert_eq!(t.lines(), &["a", "b", "", "c"]);
    }

    #[test]
    fn builtin_template_has_markers_in_place() {
        let t = Template::builtin();
        assert!(t.lines().len() >= MIN_TEMPLATE_LINES);
        assert!(t.lines()[CLASS_NAME_LINE].contains(SCRIPT_NAME_TOKEN));
        for index in NOTRIM_LINES {
            assert!(t.lines()[index].contains(NOTRIM_TOKEN));
        }
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Template::load(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, GenError::TemplateRead { .. }));
    }
}
