use std::fmt;

include!("generated_type_tags.rs");

/// Coarse grouping of the type vocabulary
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeClass {
    Floating,
    Integer,
    Boolean,
    Quantized,
}

impl TypeClass {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeClass::Floating  => "floating",
            TypeClass::Integer   => "integer",
            TypeClass::Boolean   => "boolean",
            TypeClass::Quantized => "quantized",
        }
    }
}

impl TypeTag {
    /// Membership check against the vocabulary (case-sensitive)
    pub fn from_tag(tag: &str) -> Option<TypeTag> {
        TypeTag::ALL.iter().copied().find(|t| t.as_str() == tag)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Device a kernel is registered for.
///
/// The generator only targets the CPU for now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    #[default]
    Cpu,
}

impl Device {
    /// Constant passed to the kernel builder's `Device(..)` clause
    pub fn macro_constant(self) -> &'static str {
        match self {
            Device::Cpu => "DEVICE_CPU",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.macro_constant())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_matches_tags() {
        assert_eq!(ALLOWED_TYPE_TAGS.len(), 17);
        assert_eq!(TypeTag::ALL.len(), ALLOWED_TYPE_TAGS.len());
        for (tag, name) in TypeTag::ALL.iter().zip(ALLOWED_TYPE_TAGS) {
            assert_eq!(tag.as_str(), *name);
            assert_eq!(TypeTag::from_tag(name), Some(*tag));
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(TypeTag::from_tag("int32"), Some(TypeTag::Int32));
        assert_eq!(TypeTag::from_tag("Int32"), None);
        assert_eq!(TypeTag::from_tag("FLOAT"), None);
        assert_eq!(TypeTag::from_tag("int"), None);
        assert_eq!(TypeTag::from_tag("string"), None);
        assert_eq!(TypeTag::from_tag(""), None);
    }

    #[test]
    fn classes() {
        assert_eq!(TypeTag::Half.class(), TypeClass::Floating);
        assert_eq!(TypeTag::UInt16.class(), TypeClass::Integer);
        assert_eq!(TypeTag::Bool.class(), TypeClass::Boolean);
        assert_eq!(TypeTag::QUInt32.class(), TypeClass::Quantized);
    }

    #[test]
    fn device_constant() {
        assert_eq!(Device::default(), Device::Cpu);
        assert_eq!(Device::Cpu.to_string(), "DEVICE_CPU");
    }
}
