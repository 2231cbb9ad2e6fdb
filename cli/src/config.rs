use vacancy_scraper::{HhConfig, SuperJobConfig};

use crate::{Error, Result};

pub const SUPERJOB_APP_ID_VAR: &str = "SUPERJOB_SECURITY_CODE";
pub const HH_USER_AGENT_VAR: &str = "HH_USER_AGENT";

/// Settings read from the environment (and `.env`) at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub hh: HhConfig,
    superjob: Option<SuperJobConfig>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value: &String| !value.trim().is_empty());
        let hh = match non_empty(HH_USER_AGENT_VAR) {
            Some(user_agent) => HhConfig { user_agent },
            None => HhConfig::default(),
        };
        Self {
            hh,
            superjob: non_empty(SUPERJOB_APP_ID_VAR).map(SuperJobConfig::new),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_env_vars(vars: &[(&str, &str)]) -> Self {
        Self::from_lookup(|key| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        })
    }

    pub fn superjob(&self) -> Result<&SuperJobConfig> {
        self.superjob
            .as_ref()
            .ok_or(Error::MissingEnv(SUPERJOB_APP_ID_VAR))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_superjob_app_id() {
        let config = Config::from_env_vars(&[(SUPERJOB_APP_ID_VAR, "v3.r.secret")]);
        let superjob = config.superjob().expect("app id should be set");
        assert_eq!(superjob.app_id, "v3.r.secret");
        assert_eq!(config.hh.user_agent, HhConfig::default().user_agent);
    }

    #[test]
    fn test_missing_app_id() {
        for vars in [vec![], vec![(SUPERJOB_APP_ID_VAR, "  ")]] {
            let config = Config::from_env_vars(&vars);
            assert!(matches!(
                config.superjob(),
                Err(Error::MissingEnv(SUPERJOB_APP_ID_VAR))
            ));
        }
    }

    #[test]
    fn test_hh_user_agent() {
        let config = Config::from_env_vars(&[(HH_USER_AGENT_VAR, "salaries-bot/2.0 (dev@example.com)")]);
        assert_eq!(config.hh.user_agent, "salaries-bot/2.0 (dev@example.com)");
    }
}
