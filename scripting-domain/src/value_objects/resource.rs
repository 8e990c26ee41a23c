// Remote resource value object

/// Resource types served by the remote catalog API. The path segment is the
/// lowercase tag appended to the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Items,
}

impl ResourceKind {
    pub fn path_segment(&self) -> &'static str {
        match self {
            ResourceKind::Items => "items",
        }
    }
}
