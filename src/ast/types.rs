/// Types are represented in normalized target form: a primitive name or a
/// recursively-rendered `mapping(<K> => <V>)`. There is no separate
/// type-checking pass, so this is purely a syntactic carrier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Primitive(String),
    Mapping(Box<Type>, Box<Type>),
}

impl Type {
    /// Render this type the way the emitter would, recursively. Exposed on
    /// `Type` itself (rather than only from the emitter) because the parser
    /// also needs it to normalize a parsed type before storing it on an AST
    /// node.
    pub fn render(&self) -> String {
        match self {
            Type::Primitive(name) => name.clone(),
            Type::Mapping(key, value) => {
                format!("mapping({} => {})", key.render(), value.render())
            }
        }
    }
}
