use super::config::{RulesConfig, ScoringConfig};

/// Validate scoring values at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let values = [
        ("straight", config.straight),
        ("three_pairs", config.three_pairs),
        ("single_one", config.single_one),
        ("single_five", config.single_five),
    ];
    for (name, value) in values {
        if value == 0 {
            errors.push(format!("scoring.{}: must be positive", name));
        } else if value % 50 != 0 {
            errors.push(format!(
                "scoring.{}: {} is not a multiple of 50",
                name, value
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate banking thresholds.
pub fn validate_rules(config: &RulesConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.win_target == 0 {
        errors.push("rules.win_target: must be positive".to_string());
    }
    if config.opening_minimum > config.win_target {
        errors.push(format!(
            "rules.opening_minimum: {} exceeds win_target {}",
            config.opening_minimum, config.win_target
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_defaults() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
        assert!(validate_rules(&RulesConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_value() {
        let config = ScoringConfig {
            single_five: 0,
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.single_five"));
    }

    #[test]
    fn test_not_multiple_of_fifty() {
        let config = ScoringConfig {
            straight: 1234,
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.straight"));
        assert!(errors[0].contains("1234"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = ScoringConfig {
            straight: 0,
            three_pairs: 75,
            single_one: 100,
            single_five: 0,
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_opening_minimum_above_target() {
        let config = RulesConfig {
            opening_minimum: 5000,
            win_target: 4000,
        };
        let errors = validate_rules(&config).unwrap_err();
        assert!(errors[0].contains("rules.opening_minimum"));
    }

    #[test]
    fn test_zero_win_target() {
        let config = RulesConfig {
            opening_minimum: 0,
            win_target: 0,
        };
        let errors = validate_rules(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("rules.win_target"));
    }
}
