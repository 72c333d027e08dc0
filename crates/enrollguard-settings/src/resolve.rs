use crate::model::EnrollConfigV1;
use anyhow::Context;
use enrollguard_domain::rules::{
    AcademicStandingRule, CreditLoadRule, PrerequisiteRule, DEFAULT_MAX_CREDIT_LOAD,
    DEFAULT_MIN_SCORE,
};
use enrollguard_domain::Rule;
use enrollguard_types::ids;

/// CLI-level overrides applied on top of the config file.
#[derive(Clone, Copy, Debug, Default)]
pub struct Overrides {
    pub max_credit_load: Option<u32>,
    pub min_score: Option<f64>,
}

/// Thresholds and rule set actually in effect, for reporting.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSummary {
    pub max_credit_load: u32,
    pub min_score: f64,
    pub enabled_rule_ids: Vec<String>,
}

pub struct ResolvedRules {
    /// Ordered rule list, ready to inject into a coordinator.
    pub rules: Vec<Box<dyn Rule>>,
    pub summary: ResolvedSummary,
}

impl std::fmt::Debug for ResolvedRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedRules")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.id()).collect::<Vec<_>>(),
            )
            .field("summary", &self.summary)
            .finish()
    }
}

/// Canonical order for the built-in rules. Config cannot reorder them, only
/// enable or disable; callers composing by hand choose their own order.
const BUILTIN_RULE_IDS: [&str; 3] = [
    ids::RULE_CREDIT_LOAD,
    ids::RULE_PREREQUISITES,
    ids::RULE_ACADEMIC_STANDING,
];

/// Build the effective rule list from config plus overrides.
///
/// Fails fast on unknown rule IDs and on invalid thresholds: a coordinator
/// is never constructed over a misconfigured rule.
pub fn resolve_rules(cfg: &EnrollConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedRules> {
    for rule_id in cfg.rules.keys() {
        if !BUILTIN_RULE_IDS.contains(&rule_id.as_str()) {
            anyhow::bail!("unknown rule id in config: {rule_id}");
        }
    }

    let max_credit_load = overrides
        .max_credit_load
        .or(cfg.max_credit_load)
        .unwrap_or(DEFAULT_MAX_CREDIT_LOAD);
    let min_score = overrides
        .min_score
        .or(cfg.min_score)
        .unwrap_or(DEFAULT_MIN_SCORE);

    let enabled = |rule_id: &str| {
        cfg.rules
            .get(rule_id)
            .and_then(|rc| rc.enabled)
            .unwrap_or(true)
    };

    let mut rules: Vec<Box<dyn Rule>> = Vec::new();
    let mut enabled_rule_ids = Vec::new();

    if enabled(ids::RULE_CREDIT_LOAD) {
        let rule = CreditLoadRule::new(max_credit_load)
            .with_context(|| format!("invalid max_credit_load {max_credit_load}"))?;
        rules.push(Box::new(rule));
        enabled_rule_ids.push(ids::RULE_CREDIT_LOAD.to_string());
    }

    if enabled(ids::RULE_PREREQUISITES) {
        rules.push(Box::new(PrerequisiteRule));
        enabled_rule_ids.push(ids::RULE_PREREQUISITES.to_string());
    }

    if enabled(ids::RULE_ACADEMIC_STANDING) {
        let rule = AcademicStandingRule::new(min_score)
            .with_context(|| format!("invalid min_score {min_score}"))?;
        rules.push(Box::new(rule));
        enabled_rule_ids.push(ids::RULE_ACADEMIC_STANDING.to_string());
    }

    Ok(ResolvedRules {
        rules,
        summary: ResolvedSummary {
            max_credit_load,
            min_score,
            enabled_rule_ids,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;

    #[test]
    fn defaults_enable_all_builtin_rules() {
        let resolved =
            resolve_rules(&EnrollConfigV1::default(), Overrides::default()).expect("resolve");
        assert_eq!(resolved.rules.len(), 3);
        assert_eq!(resolved.summary.max_credit_load, 24);
        assert_eq!(resolved.summary.min_score, 2.5);
    }

    #[test]
    fn config_thresholds_and_disabled_rules_apply() {
        let cfg = parse_config_toml(
            r#"
max_credit_load = 21
min_score = 3.0

[rules."eligibility.prerequisites"]
enabled = false
"#,
        )
        .expect("parse");

        let resolved = resolve_rules(&cfg, Overrides::default()).expect("resolve");
        assert_eq!(resolved.summary.max_credit_load, 21);
        assert_eq!(resolved.summary.min_score, 3.0);
        assert_eq!(
            resolved.summary.enabled_rule_ids,
            vec![
                ids::RULE_CREDIT_LOAD.to_string(),
                ids::RULE_ACADEMIC_STANDING.to_string()
            ]
        );
    }

    #[test]
    fn overrides_win_over_config() {
        let cfg = parse_config_toml("max_credit_load = 21").expect("parse");
        let resolved = resolve_rules(
            &cfg,
            Overrides {
                max_credit_load: Some(18),
                min_score: None,
            },
        )
        .expect("resolve");
        assert_eq!(resolved.summary.max_credit_load, 18);
    }

    #[test]
    fn unknown_rule_id_is_rejected() {
        let cfg = parse_config_toml("[rules.\"eligibility.nope\"]\nenabled = true").expect("parse");
        let err = resolve_rules(&cfg, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("unknown rule id"));
    }

    #[test]
    fn invalid_threshold_fails_at_resolve_time() {
        let err = resolve_rules(
            &EnrollConfigV1::default(),
            Overrides {
                max_credit_load: Some(0),
                min_score: None,
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid max_credit_load"));

        let err = resolve_rules(
            &EnrollConfigV1::default(),
            Overrides {
                max_credit_load: None,
                min_score: Some(-0.5),
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid min_score"));
    }

    #[test]
    fn empty_config_text_parses_to_defaults() {
        let cfg = parse_config_toml("").expect("parse");
        assert_eq!(cfg, EnrollConfigV1::default());
    }
}
