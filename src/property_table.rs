use crate::types::PropertyKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapping {
    pub declared_type: &'static str,
    pub setter_name: &'static str,
    pub argument_type: &'static str,
}

impl TypeMapping {
    const EMPTY: Self = Self {
        declared_type: "",
        setter_name: "",
        argument_type: "",
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

pub fn lookup(kind: &PropertyKind) -> TypeMapping {
    match kind {
        PropertyKind::Scalar | PropertyKind::Range => TypeMapping {
            declared_type: "float",
            setter_name: "SetFloat",
            argument_type: "float value",
        },
        PropertyKind::Vector => TypeMapping {
            declared_type: "Vector4",
            setter_name: "SetVector",
            argument_type: "Vector4 value",
        },
        PropertyKind::Color => TypeMapping {
            declared_type: "Color",
            setter_name: "SetColor",
            argument_type: "Color value",
        },
        PropertyKind::Texture => TypeMapping {
            declared_type: "Texture",
            setter_name: "SetTexture",
            argument_type: "Texture2D value",
        },
        PropertyKind::Unrecognized(_) => TypeMapping::EMPTY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(kind: PropertyKind) -> (&'static str, &'static str, &'static str) {
        let m = lookup(&kind);
        (m.declared_type, m.setter_name, m.argument_type)
    }

    #[test]
    fn maps_recognized_kinds() {
        assert_eq!(triple(PropertyKind::Scalar), ("float", "SetFloat", "float value"));
        assert_eq!(triple(PropertyKind::Range), ("float", "SetFloat", "float value"));
        assert_eq!(
            triple(PropertyKind::Vector),
            ("Vector4", "SetVector", "Vector4 value")
        );
        assert_eq!(triple(PropertyKind::Color), ("Color", "SetColor", "Color value"));
        assert_eq!(
            triple(PropertyKind::Texture),
            ("Texture", "SetTexture", "Texture2D value")
        );
    }

    #[test]
    fn unrecognized_kind_is_empty() {
        let m = lookup(&PropertyKind::Unrecognized("Int".to_string()));
        assert!(m.is_empty());
        assert_eq!(triple(PropertyKind::Unrecognized(String::new())), ("", "", ""));
    }
}
