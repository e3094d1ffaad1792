//! GraphQL fragment generation for model types

use super::naming::snake_case_to_camel_case;

/// A named GraphQL fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphQLFragment {
    pub name: String,
    pub body: String,
}

/// A field selected by a model's fragment
#[derive(Debug, Clone, Copy)]
pub enum FragmentField {
    /// Leaf value, selected by name
    Scalar(&'static str),
    /// Nested model (single value or list), selected through the model's own fragment
    Nested {
        name: &'static str,
        fragments: fn() -> Vec<GraphQLFragment>,
    },
}

impl FragmentField {
    pub fn nested<T: GraphQLFragmentMixin>(name: &'static str) -> Self {
        FragmentField::Nested {
            name,
            fragments: T::gql_fragments,
        }
    }
}

/// Model types that can be selected with GraphQL fragments
///
/// Implementors list their fields in snake_case; fragments select them in camelCase.
pub trait GraphQLFragmentMixin {
    /// GraphQL type name the fragment applies to
    fn gql_model_name() -> &'static str;

    fn gql_fields() -> Vec<FragmentField>;

    fn gql_fragment_name() -> String {
        format!("fragment{}", Self::gql_model_name())
    }

    /// This model's fragment first, followed by the fragments of every nested
    /// model it selects, each listed once.
    fn gql_fragments() -> Vec<GraphQLFragment> {
        let name = Self::gql_fragment_name();
        let mut body = format!("fragment {} on {} {{", name, Self::gql_model_name());
        let mut dependencies = Vec::new();

        for field in Self::gql_fields() {
            match field {
                FragmentField::Scalar(field_name) => {
                    body.push(' ');
                    body.push_str(&snake_case_to_camel_case(field_name));
                }
                FragmentField::Nested { name: field_name, fragments } => {
                    let nested = fragments();
                    let Some(head) = nested.first() else {
                        continue;
                    };
                    body.push_str(&format!(
                        " {} {{ ...{} }}",
                        snake_case_to_camel_case(field_name),
                        head.name
                    ));
                    dependencies.extend(nested);
                }
            }
        }
        body.push_str(" }");

        let mut fragments = vec![GraphQLFragment {
            name,
            body: normalize_query(&body),
        }];
        for fragment in dependencies {
            if !fragments.contains(&fragment) {
                fragments.push(fragment);
            }
        }
        fragments
    }
}

/// Collapse all whitespace runs in a query to single spaces
pub fn normalize_query(query: &str) -> String {
    query.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct A;
    struct B;

    impl GraphQLFragmentMixin for A {
        fn gql_model_name() -> &'static str {
            "A"
        }
        fn gql_fields() -> Vec<FragmentField> {
            vec![FragmentField::Scalar("foo_bar")]
        }
    }

    impl GraphQLFragmentMixin for B {
        fn gql_model_name() -> &'static str {
            "B"
        }
        fn gql_fields() -> Vec<FragmentField> {
            vec![
                FragmentField::Scalar("hello_world"),
                FragmentField::Scalar("baz"),
                FragmentField::nested::<A>("a"),
                FragmentField::nested::<A>("many_a"),
            ]
        }
    }

    #[test]
    fn test_single_fragment() {
        let fragments = A::gql_fragments();
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].name, "fragmentA");
        assert_eq!(
            fragments[0].body,
            normalize_query(
                "
                fragment fragmentA on A {
                    fooBar
                }
                "
            )
        );
    }

    #[test]
    fn test_nested_fragments_deduplicated() {
        let fragments = B::gql_fragments();
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].name, "fragmentB");
        assert_eq!(
            fragments[0].body,
            normalize_query(
                "
                fragment fragmentB on B {
                    helloWorld
                    baz
                    a {
                        ...fragmentA
                    }
                    manyA {
                        ...fragmentA
                    }
                }
                "
            )
        );
        assert_eq!(fragments[1], A::gql_fragments()[0]);
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  a {\n\t b\n }  "), "a { b }");
    }
}
