use derive_more::{Display, Error};

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum CodeKind {
    #[display("braid word")]
    Braid,
    #[display("Gauss code")]
    Gauss,
    #[display("DT code")]
    Dt,
}

#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum LinkError {
    #[display("no input: one of braid word, Gauss code or DT code is required")]
    NoInput,

    #[display("ambiguous input: give exactly one of braid word, Gauss code or DT code")]
    AmbiguousInput,

    #[display("invalid {kind}: {reason}")]
    InvalidCode { kind: CodeKind, reason: String },

    #[display("{op} is not supported for a link given by its {from}")]
    Unsupported { op: &'static str, from: CodeKind },

    #[display("{op} is only defined for a single-component braid closure")]
    MultiComponent { op: &'static str },

    #[display("{op} is only defined for knots, got a link of {components} components")]
    NotKnot { op: &'static str, components: usize },

    #[display("no Seifert rule applies at ({i}, {j})")]
    Inconsistent { i: usize, j: usize },
}

impl LinkError {
    pub(crate) fn invalid<S>(kind: CodeKind, reason: S) -> Self
    where S: Into<String> {
        Self::InvalidCode { kind, reason: reason.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = LinkError::invalid(CodeKind::Dt, "odd entry 3");
        assert_eq!(e.to_string(), "invalid DT code: odd entry 3");

        let e = LinkError::NotKnot { op: "determinant", components: 2 };
        assert_eq!(e.to_string(), "determinant is only defined for knots, got a link of 2 components");

        let e = LinkError::Unsupported { op: "braid word", from: CodeKind::Gauss };
        assert_eq!(e.to_string(), "braid word is not supported for a link given by its Gauss code");
    }

    #[test]
    fn is_error() {
        let e: Box<dyn std::error::Error> = Box::new(LinkError::NoInput);
        assert!(e.to_string().starts_with("no input"));
    }
}
