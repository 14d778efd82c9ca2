use crate::role::Role;

/// A default login created on first start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedAccount {
    pub username: &'static str,
    pub password: &'static str,
    pub role: Role,
    pub full_name: &'static str,
}

/// Default accounts. Their passwords are public and must be rotated after install.
pub const SEED_ACCOUNTS: [SeedAccount; 3] = [
    SeedAccount {
        username: "admin",
        password: "admin123",
        role: Role::Manager,
        full_name: "Betriebsleiter",
    },
    SeedAccount {
        username: "lead",
        password: "lead123",
        role: Role::ShiftLead,
        full_name: "Schichtleiter",
    },
    SeedAccount {
        username: "waiter",
        password: "waiter123",
        role: Role::Waiter,
        full_name: "Kellner",
    },
];

#[cfg(test)]
mod test {
    use super::SEED_ACCOUNTS;
    use crate::role::Role;
    use std::collections::HashSet;

    #[test]
    fn test_one_seed_account_per_role() {
        let roles: HashSet<Role> = SEED_ACCOUNTS.iter().map(|a| a.role).collect();
        assert_eq!(roles.len(), 3);
    }
}
