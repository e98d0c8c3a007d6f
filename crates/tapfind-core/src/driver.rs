//! Driver identity: which platform and automation technology a session runs.

/// Well-known platform names, as session capabilities carry them.
pub const ANDROID: &str = "Android";
pub const IOS: &str = "iOS";
pub const WINDOWS: &str = "Windows";

/// Well-known automation names.
pub const SELENDROID: &str = "Selendroid";
pub const XCUITEST: &str = "XCUITest";
pub const UIAUTOMATOR2: &str = "UiAutomator2";

/// A native automation backend family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    Selendroid,
    Android,
    IosXcuit,
    Ios,
    Windows,
}

impl Backend {
    /// Fixed resolution priority order. Native locator resolution walks this
    /// list and takes the first backend that applies and yields fragments.
    pub const ORDER: [Backend; 5] = [
        Backend::Selendroid,
        Backend::Android,
        Backend::IosXcuit,
        Backend::Ios,
        Backend::Windows,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Backend::Selendroid => "selendroid",
            Backend::Android => "android",
            Backend::IosXcuit => "ios-xcuit",
            Backend::Ios => "ios",
            Backend::Windows => "windows",
        }
    }
}

/// Platform/automation identity of the running driver session.
///
/// Both names compare case-insensitively, matching how capability strings
/// arrive from different clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverContext {
    platform: String,
    automation: String,
}

impl DriverContext {
    pub fn new(platform: impl Into<String>, automation: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            automation: automation.into(),
        }
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn automation(&self) -> &str {
        &self.automation
    }

    pub fn is_selendroid_automation(&self) -> bool {
        self.automation.eq_ignore_ascii_case(SELENDROID)
    }

    pub fn is_android(&self) -> bool {
        self.platform.eq_ignore_ascii_case(ANDROID)
    }

    pub fn is_ios(&self) -> bool {
        self.platform.eq_ignore_ascii_case(IOS)
    }

    pub fn is_ios_xcuit(&self) -> bool {
        self.is_ios() && self.automation.eq_ignore_ascii_case(XCUITEST)
    }

    pub fn is_windows(&self) -> bool {
        self.platform.eq_ignore_ascii_case(WINDOWS)
    }

    /// Whether declarations of the given backend family apply to this session.
    pub fn supports(&self, backend: Backend) -> bool {
        match backend {
            Backend::Selendroid => self.is_selendroid_automation(),
            Backend::Android => self.is_android(),
            Backend::IosXcuit => self.is_ios_xcuit(),
            Backend::Ios => self.is_ios(),
            Backend::Windows => self.is_windows(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_ignore_case() {
        let driver = DriverContext::new("android", "uiautomator2");
        assert!(driver.is_android());
        assert!(!driver.is_ios());
        assert!(!driver.is_selendroid_automation());
    }

    #[test]
    fn test_xcuit_requires_both_platform_and_automation() {
        let xcuit = DriverContext::new(IOS, XCUITEST);
        assert!(xcuit.is_ios());
        assert!(xcuit.is_ios_xcuit());

        let legacy = DriverContext::new(IOS, "Instruments");
        assert!(legacy.is_ios());
        assert!(!legacy.is_ios_xcuit());

        let android = DriverContext::new(ANDROID, XCUITEST);
        assert!(!android.is_ios_xcuit());
    }

    #[test]
    fn test_supports_follows_predicates() {
        let driver = DriverContext::new(ANDROID, SELENDROID);
        assert!(driver.supports(Backend::Selendroid));
        assert!(driver.supports(Backend::Android));
        assert!(!driver.supports(Backend::Ios));
        assert!(!driver.supports(Backend::Windows));
    }
}
