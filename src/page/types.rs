use std::fmt;

/// Status of one component found on the status page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRecord {
    /// Component name (e.g. a data center location)
    pub name: String,

    /// Reported status text (e.g. "Degraded Performance")
    pub status: String,

    /// Label of the group the component belongs to
    pub group: String,
}

impl StatusRecord {
    pub fn new(
        name: impl Into<String>,
        status: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
            group: group.into(),
        }
    }
}

impl fmt::Display for StatusRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.group, self.status)
    }
}
