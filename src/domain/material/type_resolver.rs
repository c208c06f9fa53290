use super::entity::MaterialType;

/// Kind used when an upload names a type we do not know
pub const FALLBACK_MATERIAL_TYPE: MaterialType = MaterialType::Pdf;

/// Outcome of resolving an untrusted type name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeResolution {
    pub material_type: MaterialType,

    /// True when the input matched nothing and the fallback was used
    pub fell_back: bool,
}

impl MaterialType {
    /// Resolve a user-supplied type name.
    ///
    /// The input is upper-cased and matched against the enumeration names.
    /// Nothing else is normalized: `" pdf"` does not match. This never fails;
    /// callers decide whether `fell_back` deserves a warning.
    pub fn resolve(raw: &str) -> TypeResolution {
        let upper = raw.to_uppercase();
        match MaterialType::ALL.into_iter().find(|t| t.as_str() == upper) {
            Some(material_type) => TypeResolution {
                material_type,
                fell_back: false,
            },
            None => TypeResolution {
                material_type: FALLBACK_MATERIAL_TYPE,
                fell_back: true,
            },
        }
    }
}
