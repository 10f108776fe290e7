//! Command modules and their per-guild enablement state.

use std::fmt;

/// A named group of related commands, enabled or disabled independently per guild.
///
/// Modules are fixed at compile time; the set of commands in each is defined when commands
/// are registered with the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Module {
    General,
    Fun,
    Admin,
    Owner,
}

impl Module {
    /// Every module in display order.
    pub const ALL: [Module; 4] = [Module::General, Module::Fun, Module::Admin, Module::Owner];

    /// The module's identity as stored in module-enablement records.
    pub fn name(self) -> &'static str {
        match self {
            Module::General => "General",
            Module::Fun => "Fun",
            Module::Admin => "Admin",
            Module::Owner => "Owner",
        }
    }

    /// Whether guild administrators may disable this module.
    ///
    /// Admin and Owner stay available so a guild can always re-enable what it disabled.
    pub fn toggleable(self) -> bool {
        matches!(self, Module::General | Module::Fun)
    }

    /// Resolves a module from user input, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|module| module.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Enablement state of a single module within a guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleStatus {
    pub module: Module,
    pub disabled: bool,
}
