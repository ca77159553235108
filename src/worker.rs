//! # Workers
//!
//! The capability set every worker exposes, and the three roles a worker can have.
//! Each role fixes its work verb and skill list; only the name varies between workers.

use std::fmt::Display;

/// What callers can ask of any worker.
pub trait Worker: Send + Sync {
    fn name(&self) -> &str;

    /// The present-participle verb for the role, e.g. `"Developing"`.
    fn work(&self) -> &'static str;

    fn skills(&self) -> &'static [&'static str];
}

/// The roles a worker can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Developer,
    Tester,
    Analyst,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Developer, Role::Tester, Role::Analyst];

    pub fn title(self) -> &'static str {
        match self {
            Role::Developer => "Developer",
            Role::Tester => "Tester",
            Role::Analyst => "Analyst",
        }
    }

    pub fn work(self) -> &'static str {
        match self {
            Role::Developer => "Developing",
            Role::Tester => "Testing",
            Role::Analyst => "Analyzing",
        }
    }

    pub fn skills(self) -> &'static [&'static str] {
        match self {
            Role::Developer => &["Python", "JavaScript", "PHP"],
            Role::Tester => &["Selenium", "Junit", "Jmeter", "TestNG"],
            Role::Analyst => &["Data Analysis", "Requirement Analysis", "UML"],
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_have_fixed_verbs() {
        let verbs: Vec<_> = Role::ALL.iter().map(|r| r.work()).collect();
        assert_eq!(verbs, ["Developing", "Testing", "Analyzing"]);
    }

    #[test]
    fn test_tester_skills_in_order() {
        assert_eq!(
            Role::Tester.skills(),
            ["Selenium", "Junit", "Jmeter", "TestNG"]
        );
    }
}
