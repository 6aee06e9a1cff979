//! Parsing of the `--lines` argument into a validated line selection.
//!
//! This module provides [`LineSelector`], the user's choice of lines to query. Validation runs
//! before anything touches the network so typos fail fast.
//!
//! # Accepted Input
//! - **Omitted**: every line in [`DEFAULT_LINES`](crate::core::lines::DEFAULT_LINES)
//! - **Comma-separated letters**: `central`, `central,victoria`, `Jubilee,DLR`
//!
//! Anything with spaces, digits, hyphens or other punctuation is rejected.
//! Identifiers are lower-cased and kept in the order given, duplicates included.

use crate::core::{
    error::{Result, TubeStatsError},
    lines::default_line_codes,
};

/// Lines selected for a single invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineSelector {
    /// No selection given, query the default set
    All,
    /// Explicit, non-empty list of line identifiers
    Lines(Vec<String>),
}

impl LineSelector {
    /// Parse the raw `--lines` value
    ///
    /// # Examples
    /// ```
    /// use tubestats::core::selector::LineSelector;
    ///
    /// let selector = LineSelector::parse(Some("central,victoria"))?;
    /// assert_eq!(selector.query_segment(), "central,victoria");
    ///
    /// assert!(LineSelector::parse(Some("central, victoria")).is_err());
    /// assert_eq!(LineSelector::parse(None)?, LineSelector::All);
    /// # Ok::<(), tubestats::core::error::TubeStatsError>(())
    /// ```
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let Some(raw) = raw else {
            return Ok(Self::All);
        };

        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_alphabetic() || c == ',') {
            return Err(TubeStatsError::invalid_selector(raw));
        }

        // Repeated or trailing commas leave empty segments behind
        let ids: Vec<String> = raw
            .split(',')
            .filter(|segment| !segment.is_empty())
            .map(str::to_ascii_lowercase)
            .collect();

        if ids.is_empty() {
            return Err(TubeStatsError::invalid_selector(raw));
        }

        Ok(Self::Lines(ids))
    }

    /// Path segment substituted into the status endpoint
    pub fn query_segment(&self) -> String {
        match self {
            Self::All => default_line_codes(),
            Self::Lines(ids) => ids.join(","),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_none_selects_all() -> Result<()> {
        let selector = LineSelector::parse(None)?;
        assert_eq!(selector, LineSelector::All);
        assert_eq!(selector.query_segment().split(',').count(), 12);
        assert!(selector.query_segment().starts_with("bakerloo,central,"));
        Ok(())
    }

    #[test]
    fn test_parse_single_line() -> Result<()> {
        let selector = LineSelector::parse(Some("central"))?;
        assert_eq!(selector, LineSelector::Lines(vec!["central".to_string()]));
        Ok(())
    }

    #[test]
    fn test_parse_keeps_order_and_duplicates() -> Result<()> {
        let selector = LineSelector::parse(Some("victoria,central,victoria"))?;
        assert_eq!(selector.query_segment(), "victoria,central,victoria");
        Ok(())
    }

    #[test]
    fn test_parse_lowercases() -> Result<()> {
        let selector = LineSelector::parse(Some("Central,DLR"))?;
        assert_eq!(selector.query_segment(), "central,dlr");
        Ok(())
    }

    #[test]
    fn test_parse_drops_empty_segments() -> Result<()> {
        let selector = LineSelector::parse(Some("central,,victoria,"))?;
        assert_eq!(selector.query_segment(), "central,victoria");
        Ok(())
    }

    #[test]
    fn test_parse_only_commas_is_rejected() {
        assert!(matches!(
            LineSelector::parse(Some(",,")),
            Err(TubeStatsError::InvalidSelector { .. })
        ));
    }

    #[test]
    fn test_parse_empty_string_is_rejected() {
        assert!(matches!(
            LineSelector::parse(Some("")),
            Err(TubeStatsError::InvalidSelector { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_characters_outside_letters_and_commas() {
        for raw in [
            "central, victoria",
            " central",
            "central;victoria",
            "hammersmith-city",
            "line2",
            "central\n",
            "victória",
        ] {
            let result = LineSelector::parse(Some(raw));
            assert!(
                matches!(
                    result,
                    Err(TubeStatsError::InvalidSelector { ref input }) if input == raw
                ),
                "expected '{raw}' to be rejected"
            );
        }
    }

    #[test]
    fn test_parse_accepts_every_letter_and_comma_mix() -> Result<()> {
        for raw in ["a", "Z", "abc,def", "x,y,z", "ABCdef,ghi"] {
            let selector = LineSelector::parse(Some(raw))?;
            let expected: Vec<String> = raw.split(',').map(str::to_ascii_lowercase).collect();
            assert_eq!(selector, LineSelector::Lines(expected));
        }
        Ok(())
    }
}
