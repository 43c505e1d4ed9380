use super::Members;

/// A string value. Strings are immutable: every method that looks like it "changes" a string
/// (e.g. `replace`) returns a fresh one rather than mutating `value` in place.
#[derive(Debug, Clone)]
pub struct StringObject {
    pub value: String,
    pub members: Members,
}

impl StringObject {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            members: Members::empty(),
        }
    }

    pub fn with_members(mut self, members: Members) -> Self {
        self.members = members;
        self
    }
}

/// Two strings are equal iff their values are — see [`super::Integer`]'s `PartialEq` for why
/// the `Members` table is excluded.
impl PartialEq for StringObject {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
