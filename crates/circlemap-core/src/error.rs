pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("input file is empty")]
    EmptyInput,

    #[error("input file declares no regions")]
    NoRegions,

    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: {field} is not a valid number: {value:?}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: area of a region must be positive, got {value}")]
    NonPositiveValue { line: usize, value: i64 },

    #[error("line {line}: regions {name} and {existing} share the same position")]
    DuplicatePosition {
        line: usize,
        name: String,
        existing: String,
    },

    #[error("line {line}: one side of the adjacency declaration is empty")]
    EmptyRelationSide { line: usize },

    #[error("line {line}: adjacency declaration contains more than one ':'")]
    MalformedRelation { line: usize },

    #[error("line {line}: region {name} does not exist")]
    UnknownRegion { line: usize, name: String },

    #[error("line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: circlemap_layout::Error,
    },
}

impl ParseError {
    /// `true` for problems with the content of the input, `false` when it could not be read.
    pub fn is_format_error(&self) -> bool {
        !matches!(self, ParseError::Io(_))
    }

    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Io(_) | ParseError::EmptyInput | ParseError::NoRegions => None,
            ParseError::MissingField { line, .. }
            | ParseError::InvalidNumber { line, .. }
            | ParseError::NonPositiveValue { line, .. }
            | ParseError::DuplicatePosition { line, .. }
            | ParseError::EmptyRelationSide { line }
            | ParseError::MalformedRelation { line }
            | ParseError::UnknownRegion { line, .. }
            | ParseError::Graph { line, .. } => Some(*line),
        }
    }

    /// Short lead-in for error reports, grouping errors the way users act on them.
    pub fn context(&self) -> &'static str {
        match self {
            ParseError::InvalidNumber { .. } | ParseError::NonPositiveValue { .. } => {
                "Could not read input file, invalid number format:"
            }
            ParseError::Io(_) => "Unexpected error while reading input file:",
            _ => "Could not read input file:",
        }
    }
}
