use log::debug;

const MOBILE_AGENTS: &[&str] = &[
    "android",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Decides whether the animation should run in its reduced mode.
pub trait DeviceProfile {
    fn is_low_end(&self) -> bool;
}

/// A profile with a fixed answer, for tests and for forcing a mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedProfile(pub bool);

impl DeviceProfile for FixedProfile {
    fn is_low_end(&self) -> bool {
        self.0
    }
}

/// Reads core count and user agent from `navigator`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavigatorProfile;

impl DeviceProfile for NavigatorProfile {
    fn is_low_end(&self) -> bool {
        let Some(navigator) = web_sys::window().map(|w| w.navigator()) else {
            return false;
        };
        let cores = navigator.hardware_concurrency();
        let cores = (cores > 0.0).then_some(cores as u32);
        let user_agent = navigator.user_agent().unwrap_or_default();
        let low_end = classify(cores, &user_agent);
        debug!("device profile: cores={:?} low_end={}", cores, low_end);
        low_end
    }
}

/// Two or fewer logical processors, or a mobile user agent.
pub fn classify(cores: Option<u32>, user_agent: &str) -> bool {
    matches!(cores, Some(n) if n <= 2) || is_mobile_agent(user_agent)
}

pub fn is_mobile_agent(user_agent: &str) -> bool {
    let agent = user_agent.to_ascii_lowercase();
    MOBILE_AGENTS.iter().any(|needle| agent.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/126.0 Safari/537.36";
    const PHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) Mobile/15E148";

    #[test]
    fn few_cores_is_low_end() {
        assert!(classify(Some(2), DESKTOP));
        assert!(classify(Some(1), DESKTOP));
        assert!(!classify(Some(8), DESKTOP));
    }

    #[test]
    fn mobile_agent_is_low_end_regardless_of_cores() {
        assert!(classify(Some(8), PHONE));
        assert!(classify(None, "Opera Mini/8.0"));
    }

    #[test]
    fn mobile_agents_match_case_insensitively() {
        assert!(is_mobile_agent("Mozilla/5.0 (Linux; ANDROID 14)"));
        assert!(is_mobile_agent(PHONE));
        assert!(!is_mobile_agent(DESKTOP));
    }

    #[test]
    fn unknown_core_count_falls_back_to_agent() {
        assert!(!classify(None, DESKTOP));
    }

    #[test]
    fn fixed_profile_answers_as_told() {
        assert!(FixedProfile(true).is_low_end());
        assert!(!FixedProfile::default().is_low_end());
    }
}
