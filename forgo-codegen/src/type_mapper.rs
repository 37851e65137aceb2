//! Go type rendering.

use forgo_syntax::TypeRef;

/// Render a [`TypeRef`] the way it appears in Go source.
///
/// [`TypeRef::Other`] renders as its grammar kind tag. That output is not
/// valid Go, but it keeps rendering total and makes the odd field easy to
/// spot and fix by hand in the generated file.
pub fn go_type(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Named(name) => name.clone(),
        TypeRef::Slice(element) => format!("[]{}", go_type(element)),
        TypeRef::Pointer(referent) => format!("*{}", go_type(referent)),
        TypeRef::Qualified { package, name } => format!("{}.{}", go_type(package), name),
        TypeRef::Other(kind) => kind.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_types() {
        assert_eq!(go_type(&TypeRef::named("string")), "string");
        assert_eq!(go_type(&TypeRef::named("Person")), "Person");
    }

    #[test]
    fn test_slice_types() {
        assert_eq!(go_type(&TypeRef::slice(TypeRef::named("string"))), "[]string");
        assert_eq!(
            go_type(&TypeRef::slice(TypeRef::slice(TypeRef::named("byte")))),
            "[][]byte"
        );
    }

    #[test]
    fn test_pointer_types() {
        assert_eq!(go_type(&TypeRef::pointer(TypeRef::named("Person"))), "*Person");
    }

    #[test]
    fn test_qualified_types() {
        assert_eq!(
            go_type(&TypeRef::qualified(TypeRef::named("time"), "Time")),
            "time.Time"
        );
    }

    #[test]
    fn test_composite_types() {
        // []*Person
        let slice_of_pointers = TypeRef::slice(TypeRef::pointer(TypeRef::named("Person")));
        assert_eq!(go_type(&slice_of_pointers), "[]*Person");

        // *[]time.Time
        let pointer_to_slice = TypeRef::pointer(TypeRef::slice(TypeRef::qualified(
            TypeRef::named("time"),
            "Time",
        )));
        assert_eq!(go_type(&pointer_to_slice), "*[]time.Time");
    }

    #[test]
    fn test_other_renders_its_tag() {
        assert_eq!(go_type(&TypeRef::Other("map_type".into())), "map_type");
    }
}
