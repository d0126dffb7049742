/// A token that names a flag, borrowed from the token it was parsed from.
///
/// `--out=a.txt` parses to `name: "out=a.txt"` with an assignment of
/// `out` / `a.txt`; `-v` parses to `name: "v"` with no assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagToken<'a> {
    /// The token with every leading dash stripped
    pub name: &'a str,
    /// Inline `key=value` form, present only when the key is non-empty
    pub assignment: Option<Assignment<'a>>,
}

/// The `key=value` part of a flag such as `--key=value`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment<'a> {
    /// Text before the first `=`
    pub key: &'a str,
    /// Everything after the first `=`, possibly empty or containing more `=`
    pub value: &'a str,
}

impl<'a> FlagToken<'a> {
    /// True if the dash-stripped name is exactly `name`
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// Value of an inline `name=value` assignment whose key is `name`
    pub fn assigned(&self, name: &str) -> Option<&'a str> {
        self.assignment
            .filter(|assignment| assignment.key == name)
            .map(|assignment| assignment.value)
    }
}
