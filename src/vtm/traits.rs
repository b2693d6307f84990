//! Common response shapes and traits for Traffic Manager resources

use serde::Deserialize;

/// Listing response: `{"children": [{"name": ...}, ...]}`
#[derive(Deserialize, Debug)]
pub struct ChildrenResponse {
    pub children: Vec<Child>,
}

/// One entry of a listing
#[derive(Deserialize, Debug, Clone)]
pub struct Child {
    pub name: String,
}

impl ChildrenResponse {
    /// Child names, in response order
    pub fn into_names(self) -> Vec<String> {
        self.children.into_iter().map(|c| c.name).collect()
    }
}

/// Detail response: `{"properties": {"basic": {...}, ...}}`
///
/// Only the `basic` group is decoded; other groups are ignored.
#[derive(Deserialize, Debug)]
pub struct DetailResponse<B> {
    pub properties: Properties<B>,
}

/// Property groups of a resource instance
#[derive(Deserialize, Debug)]
pub struct Properties<B> {
    pub basic: B,
}

impl<B> DetailResponse<B> {
    pub fn into_basic(self) -> B {
        self.properties.basic
    }
}

/// A resource instance projected into a fixed set of display columns
pub trait TableRow {
    /// Column headers, in display order
    fn headers() -> Vec<String>;

    /// Cell values, in the same order as `headers()`
    fn cells(&self) -> Vec<String>;
}

/// Single-column name listing row used for generic resources
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NameRow {
    pub name: String,
}
