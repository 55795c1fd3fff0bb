//! Parsing of a single `from,to,weight` record.

use crate::errors::EdgeListError;

/// One weighted connection read from an edge list.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeRecord {
    /// Name of the first endpoint.
    pub from: String,
    /// Name of the second endpoint.
    pub to: String,
    /// Finite edge weight.
    pub weight: f64,
}

impl EdgeRecord {
    /// Parses `text`, the contents of 1-based line `line`.
    ///
    /// Fields are trimmed. Returns `Ok(None)` for a blank line.
    ///
    /// # Examples
    /// ```
    /// use spanwood_providers_edgelist::EdgeRecord;
    ///
    /// let record = EdgeRecord::parse(1, " Lisbon , Porto , 313 ")?.expect("not blank");
    /// assert_eq!(record.from, "Lisbon");
    /// assert_eq!(record.to, "Porto");
    /// assert_eq!(record.weight, 313.0);
    /// assert!(EdgeRecord::parse(2, "   ")?.is_none());
    /// # Ok::<(), spanwood_providers_edgelist::EdgeListError>(())
    /// ```
    ///
    /// # Errors
    /// Returns [`EdgeListError::FieldCount`] unless the line holds exactly
    /// three fields, [`EdgeListError::EmptyNode`] for a blank endpoint, and
    /// [`EdgeListError::InvalidWeight`] or [`EdgeListError::NonFiniteWeight`]
    /// when the weight is not a finite number.
    pub fn parse(line: usize, text: &str) -> Result<Option<Self>, EdgeListError> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let fields: Vec<&str> = text.split(',').map(str::trim).collect();
        let [from, to, weight] = fields.as_slice() else {
            return Err(EdgeListError::FieldCount {
                line,
                found: fields.len(),
            });
        };
        if from.is_empty() || to.is_empty() {
            return Err(EdgeListError::EmptyNode { line });
        }

        let value: f64 = weight.parse().map_err(|source| EdgeListError::InvalidWeight {
            line,
            value: (*weight).to_owned(),
            source,
        })?;
        if !value.is_finite() {
            return Err(EdgeListError::NonFiniteWeight { line, value });
        }

        Ok(Some(Self {
            from: (*from).to_owned(),
            to: (*to).to_owned(),
            weight: value,
        }))
    }
}
