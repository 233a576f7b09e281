//! Closed vocabularies for flags that accept one of a fixed set of tokens.
//!
//! Every choice type is a plain enum, so an out-of-set value cannot be
//! constructed. Parsing from text goes through `FromStr`, which rejects
//! unknown tokens with [`DomainError::InvalidChoice`].

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::domain::error::DomainError;

macro_rules! choice {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// All legal values, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Token passed to camelot.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|choice| choice.as_str() == s)
                    .ok_or_else(|| DomainError::InvalidChoice {
                        kind: $kind,
                        value: s.to_string(),
                        expected: Self::ALL.iter().map(|c| c.as_str()).join(", "),
                    })
            }
        }
    };
}

choice! {
    /// Output file format (`--format`).
    OutputFormat, "output format" {
        Csv => "csv",
        Excel => "excel",
        Html => "html",
        Json => "json",
        Markdown => "markdown",
        Sqlite => "sqlite",
    }
}

choice! {
    /// Direction in which text in a spanning cell is copied (`--copy_text`).
    CopyDirection, "copy direction" {
        Horizontal => "h",
        Vertical => "v",
    }
}

choice! {
    /// Direction in which text in a spanning cell flows (`--shift_text`).
    ShiftDirection, "shift direction" {
        Left => "l",
        Right => "r",
        Top => "t",
        Bottom => "b",
    }
}

choice! {
    /// Debug plot kinds understood by `lattice`.
    LatticePlotType, "lattice plot type" {
        Text => "text",
        Grid => "grid",
        Contour => "contour",
        Joint => "joint",
        Line => "line",
    }
}

choice! {
    /// Debug plot kinds understood by `stream`.
    StreamPlotType, "stream plot type" {
        Text => "text",
        Grid => "grid",
        Contour => "contour",
        TextEdge => "textedge",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_declared_token() {
        for format in OutputFormat::ALL {
            assert_eq!(format.as_str().parse::<OutputFormat>().unwrap(), *format);
        }
        for plot in StreamPlotType::ALL {
            assert_eq!(plot.to_string().parse::<StreamPlotType>().unwrap(), *plot);
        }
    }

    #[test]
    fn rejects_token_outside_vocabulary() {
        let err = "joint".parse::<StreamPlotType>().unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidChoice {
                kind: "stream plot type",
                value: "joint".into(),
                expected: "text, grid, contour, textedge".into(),
            }
        );
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("CSV".parse::<OutputFormat>().is_err());
        assert!("H".parse::<CopyDirection>().is_err());
    }
}
