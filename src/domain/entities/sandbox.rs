//! Capabilities granted to embedded content.

use bitflags::bitflags;

bitflags! {
    /// Capability set for the embedded browsing surface.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SandboxCapabilities: u8 {
        const SCRIPTS = 1 << 0;
        const SAME_ORIGIN = 1 << 1;
        const FORMS = 1 << 2;
        const POPUPS = 1 << 3;
        const TOP_NAVIGATION = 1 << 4;
        const PLUGINS = 1 << 5;
    }
}

impl SandboxCapabilities {
    /// The fixed set every viewer session runs with.
    pub const VIEWER: Self = Self::SCRIPTS
        .union(Self::SAME_ORIGIN)
        .union(Self::FORMS)
        .union(Self::POPUPS);

    /// Whether navigation may leave the origin of the loaded page.
    #[must_use]
    pub const fn allows_top_navigation(self) -> bool {
        self.contains(Self::TOP_NAVIGATION)
    }

    /// Renders the set as an HTML `sandbox` attribute value.
    #[must_use]
    pub fn to_attribute(self) -> String {
        let mut tokens = Vec::new();
        if self.contains(Self::FORMS) {
            tokens.push("allow-forms");
        }
        if self.contains(Self::SCRIPTS) {
            tokens.push("allow-scripts");
        }
        if self.contains(Self::SAME_ORIGIN) {
            tokens.push("allow-same-origin");
        }
        if self.contains(Self::POPUPS) {
            tokens.push("allow-popups");
        }
        if self.contains(Self::TOP_NAVIGATION) {
            tokens.push("allow-top-navigation");
        }
        if self.contains(Self::PLUGINS) {
            tokens.push("allow-plugins");
        }
        tokens.join(" ")
    }
}
