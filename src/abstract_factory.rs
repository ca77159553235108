//! # Team Factories
//!
//! A [`TeamFactory`] builds a matching set of named workers, one per role. Swapping the
//! factory swaps the whole team family without touching the code that assembles the team.

use crate::worker::{Role, Worker};
use tracing::debug;

/// A named worker filling one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    name: String,
    role: Role,
}

impl TeamMember {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

impl Worker for TeamMember {
    fn name(&self) -> &str {
        &self.name
    }

    fn work(&self) -> &'static str {
        self.role.work()
    }

    fn skills(&self) -> &'static [&'static str] {
        self.role.skills()
    }
}

/// Creates one worker per role, each carrying the given person name.
pub trait TeamFactory {
    fn create_developer(&self, name: &str) -> Box<dyn Worker>;
    fn create_tester(&self, name: &str) -> Box<dyn Worker>;
    fn create_analyst(&self, name: &str) -> Box<dyn Worker>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ItTeamFactory;

impl ItTeamFactory {
    fn member(role: Role, name: &str) -> Box<dyn Worker> {
        debug!(%role, name, "Team member created");
        Box::new(TeamMember::new(name, role))
    }
}

impl TeamFactory for ItTeamFactory {
    fn create_developer(&self, name: &str) -> Box<dyn Worker> {
        Self::member(Role::Developer, name)
    }

    fn create_tester(&self, name: &str) -> Box<dyn Worker> {
        Self::member(Role::Tester, name)
    }

    fn create_analyst(&self, name: &str) -> Box<dyn Worker> {
        Self::member(Role::Analyst, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_keeps_person_name() {
        let analyst = ItTeamFactory.create_analyst("Zain");

        assert_eq!(analyst.name(), "Zain");
        assert_eq!(analyst.work(), "Analyzing");
        assert_eq!(
            analyst.skills(),
            ["Data Analysis", "Requirement Analysis", "UML"]
        );
    }

    #[test]
    fn test_same_name_different_roles() {
        let dev = TeamMember::new("Sam", Role::Developer);
        let tester = TeamMember::new("Sam", Role::Tester);

        assert_ne!(dev, tester);
        assert_eq!(dev.name(), tester.name());
        assert_eq!(tester.role(), Role::Tester);
    }
}
