use crate::naming::sanitize_identifier;
use crate::property_table::lookup;
use crate::types::ShaderProperty;

pub const INDENT: &str = "    ";
pub const BODY_INDENT: &str = "        ";
pub const SERIALIZE_ATTR: &str = "    [SerializeField]";
pub const RPC_ATTR: &str = "    [PunRPC]";
const OPEN_BRACE: &str = "    {";
const CLOSE_BRACE: &str = "    }";

pub fn generate_method_block(
    property: &ShaderProperty,
    emit_rpc: bool,
    emit_change_notify: bool,
) -> Vec<String> {
    let mapping = lookup(&property.kind);
    let name = sanitize_identifier(&property.description);
    let apply_method = format!("Set_{}_Shader", name);

    let mut lines = Vec::with_capacity(15);

    lines.push(SERIALIZE_ATTR.to_string());
    if emit_change_notify {
        lines.push(format!("{}[OnValueChanged(\"{}\")]", INDENT, apply_method));
    }
    lines.push(format!("{}public {} {};", INDENT, mapping.declared_type, name));

    if emit_rpc {
        lines.push(RPC_ATTR.to_string());
    }
    lines.push(format!(
        "{}public void Set_{}({})",
        INDENT, name, mapping.argument_type
    ));
    lines.push(OPEN_BRACE.to_string());
    lines.push(format!("{}{} = value;", BODY_INDENT, name));
    lines.push(CLOSE_BRACE.to_string());
    lines.push(String::new());

    if emit_rpc {
        lines.push(RPC_ATTR.to_string());
    }
    lines.push(format!("{}public void {}()", INDENT, apply_method));
    lines.push(OPEN_BRACE.to_string());
    lines.push(format!(
        "{}meshRenderer.sharedMaterial.{}(\"{}\", {});",
        BODY_INDENT, mapping.setter_name, property.name, name
    ));
    lines.push(CLOSE_BRACE.to_string());
    lines.push(String::new());

    lines
}
