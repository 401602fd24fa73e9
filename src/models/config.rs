use crate::error::ArticleError;

/// Character budget governing article truncation.
///
/// Used only by the length balancer. Shrink-only: text under the overflow
/// threshold is returned unchanged, and nothing is ever padded.
#[derive(Debug, Clone, Copy)]
pub struct LengthBudget {
    /// Target article length in characters
    pub target_chars: usize,
    /// Overflow tolerance factor (truncate only above target * tolerance)
    pub tolerance: f64,
}

impl Default for LengthBudget {
    fn default() -> Self {
        Self {
            target_chars: 2_000,
            tolerance: 1.2,
        }
    }
}

impl LengthBudget {
    /// Longest length that passes through the balancer untouched.
    pub fn max_chars(&self) -> usize {
        (self.target_chars as f64 * self.tolerance) as usize
    }
}

/// Configuration for the whole transcript-to-article pipeline.
#[derive(Debug, Clone)]
pub struct ArticleConfig {
    /// Per-paragraph character threshold for the segmenter
    pub paragraph_chars: usize,
    /// Length budget for the balancer
    pub budget: LengthBudget,
    /// Maximum characters of the style sample embedded in a prompt
    pub style_excerpt_chars: usize,
    /// Maximum lines collected from the style source file
    pub style_line_cap: usize,
    /// Requested introduction length for the generative collaborator
    pub intro_chars: usize,
    /// Requested body length for the generative collaborator
    pub body_chars: usize,
    /// Requested conclusion length for the generative collaborator
    pub conclusion_chars: usize,
}

impl Default for ArticleConfig {
    fn default() -> Self {
        Self {
            paragraph_chars: 150,
            budget: LengthBudget::default(),
            style_excerpt_chars: 1_000,
            style_line_cap: 50,
            intro_chars: 200,
            body_chars: 2_000,
            conclusion_chars: 300,
        }
    }
}

impl ArticleConfig {
    /// Reject degenerate values before any text is processed.
    pub fn validate(&self) -> Result<(), ArticleError> {
        if self.paragraph_chars == 0 {
            return Err(ArticleError::InvalidConfig(
                "paragraph threshold must be positive".to_string(),
            ));
        }
        if self.budget.target_chars == 0 {
            return Err(ArticleError::InvalidConfig(
                "target length must be positive".to_string(),
            ));
        }
        if !self.budget.tolerance.is_finite() || self.budget.tolerance < 1.0 {
            return Err(ArticleError::InvalidConfig(format!(
                "tolerance must be a finite factor >= 1.0, got {}",
                self.budget.tolerance
            )));
        }
        if self.style_excerpt_chars == 0 || self.style_line_cap == 0 {
            return Err(ArticleError::InvalidConfig(
                "style excerpt and line caps must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Total length requested from the generative collaborator.
    pub fn prompt_total_chars(&self) -> usize {
        self.intro_chars + self.body_chars + self.conclusion_chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ArticleConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_paragraph_threshold_rejected() {
        let config = ArticleConfig {
            paragraph_chars: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ArticleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_shrinking_tolerance_rejected() {
        let config = ArticleConfig {
            budget: LengthBudget {
                target_chars: 2_000,
                tolerance: 0.5,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_max_chars() {
        let budget = LengthBudget::default();
        assert_eq!(budget.max_chars(), 2_400);
    }
}
