//! Cleaned list of team member names for one run.

use crate::error::{AllocationError, Result};

/// Non-empty, trimmed member names in input order.
///
/// Blank inputs (empty or whitespace-only) are dropped. Duplicate names
/// are kept as given.
///
/// # Examples
/// ```
/// use gallery_quota::roster::Roster;
/// let roster = Roster::from_inputs(["  Ana ", "", "Bia", "   "]).unwrap();
/// assert_eq!(roster.names(), ["Ana", "Bia"]);
/// assert!(Roster::from_inputs(["", " "]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Builds a roster from raw text inputs.
    ///
    /// # Errors
    /// [`AllocationError::EmptyRoster`] if every input is blank.
    pub fn from_inputs<I, S>(inputs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = inputs
            .into_iter()
            .filter_map(|raw| {
                let name = raw.as_ref().trim();
                (!name.is_empty()).then(|| name.to_owned())
            })
            .collect();
        if names.is_empty() {
            return Err(AllocationError::EmptyRoster);
        }
        Ok(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`; a roster holds at least one name.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_drops_blanks() {
        let roster = Roster::from_inputs(["Ana", "  ", "\tCaio\n", "", "Duda "]).unwrap();
        assert_eq!(roster.names(), ["Ana", "Caio", "Duda"]);
        assert_eq!(roster.len(), 3);
        assert!(!roster.is_empty());
    }

    #[test]
    fn test_keeps_input_order_and_duplicates() {
        let roster = Roster::from_inputs(vec!["Zé".to_string(), "Ana".into(), "Zé".into()]).unwrap();
        assert_eq!(roster.into_names(), vec!["Zé", "Ana", "Zé"]);
    }

    #[test]
    fn test_inner_whitespace_kept() {
        let roster = Roster::from_inputs([" Maria  Clara "]).unwrap();
        assert_eq!(roster.names(), ["Maria  Clara"]);
    }

    #[test]
    fn test_empty_inputs_rejected() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            Roster::from_inputs(empty),
            Err(AllocationError::EmptyRoster)
        ));
        assert!(matches!(
            Roster::from_inputs(["", "   ", "\t"]),
            Err(AllocationError::EmptyRoster)
        ));
    }
}
