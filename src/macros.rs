#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a catalog [`Atom`](crate::Atom) from a literal name and rule.
///
/// ```text
/// atom!("Virga", regex: r"\bVIRGA\b")
/// atom!("Aircraft Mishap", literal: "ACFT MSHP")
/// ```
#[macro_export]
macro_rules! atom {
    ($name:literal, regex: $pat:literal $(,)?) => {
        $crate::Atom::builtin($name, $crate::MatchRule::Regex($crate::regex!($pat).clone()))
    };
    ($name:literal, literal: $text:literal $(,)?) => {
        $crate::Atom::builtin($name, $crate::MatchRule::Literal($text.to_string()))
    };
}

/// Build a [`Handler`](crate::Handler) whose translator decodes the atom's
/// named fields first.
///
/// The body receives the decoded [`Fields`](crate::Fields) and must return
/// `Result<String, TranslationError>`.
#[macro_export]
macro_rules! handler {
    (
        atom: $atom:expr,
        translate: |$fields:ident| $body:block
        $(,)?
    ) => {{
        $crate::Handler::with_atom_fn($atom, move |atom: &$crate::Atom, input: &str| {
            let $fields = atom.decode(input);
            let result: ::std::result::Result<String, $crate::TranslationError> = $body;
            result
        })
    }};
}
