/// Type tags accepted in attribute declarations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Float,
    Double,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    Bool,
    QInt8,
    QInt16,
    QInt32,
    QUInt8,
    QUInt16,
    QUInt32,
    BFloat16,
    Half,
}

/// The allowed type vocabulary, as written in registration clauses
pub const ALLOWED_TYPE_TAGS: &[&str] = &[
    "float",
    "double",
    "int8",
    "int16",
    "int32",
    "int64",
    "uint8",
    "uint16",
    "bool",
    "qint8",
    "qint16",
    "qint32",
    "quint8",
    "quint16",
    "quint32",
    "bfloat16",
    "half",
];

impl TypeTag {
    /// Every tag, in vocabulary order
    pub const ALL: &'static [TypeTag] = &[
        TypeTag::Float,
        TypeTag::Double,
        TypeTag::Int8,
        TypeTag::Int16,
        TypeTag::Int32,
        TypeTag::Int64,
        TypeTag::UInt8,
        TypeTag::UInt16,
        TypeTag::Bool,
        TypeTag::QInt8,
        TypeTag::QInt16,
        TypeTag::QInt32,
        TypeTag::QUInt8,
        TypeTag::QUInt16,
        TypeTag::QUInt32,
        TypeTag::BFloat16,
        TypeTag::Half,
    ];

    /// Tag as written in a registration clause
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Float => "float",
            TypeTag::Double => "double",
            TypeTag::Int8 => "int8",
            TypeTag::Int16 => "int16",
            TypeTag::Int32 => "int32",
            TypeTag::Int64 => "int64",
            TypeTag::UInt8 => "uint8",
            TypeTag::UInt16 => "uint16",
            TypeTag::Bool => "bool",
            TypeTag::QInt8 => "qint8",
            TypeTag::QInt16 => "qint16",
            TypeTag::QInt32 => "qint32",
            TypeTag::QUInt8 => "quint8",
            TypeTag::QUInt16 => "quint16",
            TypeTag::QUInt32 => "quint32",
            TypeTag::BFloat16 => "bfloat16",
            TypeTag::Half => "half",
        }
    }

    pub fn class(self) -> TypeClass {
        match self {
            TypeTag::Float => TypeClass::Floating,
            TypeTag::Double => TypeClass::Floating,
            TypeTag::Int8 => TypeClass::Integer,
            TypeTag::Int16 => TypeClass::Integer,
            TypeTag::Int32 => TypeClass::Integer,
            TypeTag::Int64 => TypeClass::Integer,
            TypeTag::UInt8 => TypeClass::Integer,
            TypeTag::UInt16 => TypeClass::Integer,
            TypeTag::Bool => TypeClass::Boolean,
            TypeTag::QInt8 => TypeClass::Quantized,
            TypeTag::QInt16 => TypeClass::Quantized,
            TypeTag::QInt32 => TypeClass::Quantized,
            TypeTag::QUInt8 => TypeClass::Quantized,
            TypeTag::QUInt16 => TypeClass::Quantized,
            TypeTag::QUInt32 => TypeClass::Quantized,
            TypeTag::BFloat16 => TypeClass::Floating,
            TypeTag::Half => TypeClass::Floating,
        }
    }
}