//! Static role gate
//!
//! Every feature area and operation is looked up in a fixed table keyed by
//! [`Role`]. There is no inheritance between roles: each row is spelled out.

use crate::role::Role;
use serde::Serialize;
use strum::{Display, EnumIter};

/// A feature area of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Feature {
    Dashboard,
    Shifts,
    Team,
    Reservations,
    ShiftReports,
    TimeEntries,
    ClothingDeposit,
    UserManagement,
}

/// What a user is trying to do within a feature area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    View,
    Create,
    Update,
    Delete,
}

/// Which records a permitted operation may touch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Only records belonging to the acting user
    Own,
    /// Every record
    All,
}

impl Scope {
    /// Whether a record owned by `owner_id` is reachable for `actor_id`
    pub fn covers(self, actor_id: i32, owner_id: i32) -> bool {
        match self {
            Self::All => true,
            Self::Own => actor_id == owner_id,
        }
    }
}

/// Result of a gate lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow(Scope),
    Deny,
}

impl Access {
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow(_))
    }

    pub fn scope(self) -> Option<Scope> {
        match self {
            Self::Allow(scope) => Some(scope),
            Self::Deny => None,
        }
    }
}

/// Looks up whether `role` may perform `operation` on `feature`
pub fn check(role: Role, feature: Feature, operation: Operation) -> Access {
    use Access::{Allow, Deny};
    use Feature::*;
    use Operation::*;
    use Scope::{All, Own};

    match (role, feature, operation) {
        // Everybody sees the dashboard, the schedule and who is on the team
        (_, Dashboard | Team, View) => Allow(All),
        (_, Dashboard | Team, _) => Deny,
        (_, Shifts, View) => Allow(All),

        (Role::Waiter, TimeEntries, View | Create | Delete) => Allow(Own),
        (Role::Waiter, _, _) => Deny,

        (Role::ShiftLead, Shifts | Reservations | ShiftReports | TimeEntries, _) => Allow(All),
        (Role::ShiftLead, ClothingDeposit | UserManagement, _) => Deny,

        (Role::Manager, _, _) => Allow(All),
    }
}

/// Shorthand for `check(..).is_allowed()`
pub fn permits(role: Role, feature: Feature, operation: Operation) -> bool {
    check(role, feature, operation).is_allowed()
}
