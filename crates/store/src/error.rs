use registry::plot::GeometryError;

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Sql(rusqlite::Error),
    /// A write was attempted without an authenticated actor.
    PolicyDenied,
    InvalidInput(&'static str),
    InvalidGeometry(GeometryError),
    NameTaken { name: String },
    UnknownPerson,
    UnknownPlot,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io: {err}"),
            Self::Sql(err) => write!(f, "sqlite: {err}"),
            Self::PolicyDenied => write!(f, "write requires an authenticated actor"),
            Self::InvalidInput(message) => write!(f, "invalid input: {message}"),
            Self::InvalidGeometry(err) => write!(f, "invalid geometry: {err}"),
            Self::NameTaken { name } => write!(f, "person name already taken: {name}"),
            Self::UnknownPerson => write!(f, "unknown person"),
            Self::UnknownPlot => write!(f, "unknown plot"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sql(value)
    }
}

impl From<GeometryError> for StoreError {
    fn from(value: GeometryError) -> Self {
        Self::InvalidGeometry(value)
    }
}
