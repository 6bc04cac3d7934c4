use crate::errors::{RegisterError, RegisterResult};
use crate::ledger::{Account, AccountId, Ledger};

/// Account paths a split in `base` may legally transfer to: an empty entry
/// first, then every account, depth first through the account tree, that
/// shares a currency or security with `base`. Each path resolves through
/// `Ledger::account_by_name`.
pub fn transfer_candidates(ledger: &Ledger, base: AccountId) -> RegisterResult<Vec<String>> {
    let base = ledger
        .account(base)
        .ok_or(RegisterError::UnknownAccount(base))?;
    let mut names = vec![String::new()];
    collect(ledger, None, base, &mut names);
    Ok(names)
}

fn collect(ledger: &Ledger, parent: Option<AccountId>, base: &Account, names: &mut Vec<String>) {
    for account in ledger.child_accounts(parent) {
        if compatible(account, base) {
            names.extend(ledger.account_path(account.id));
        }
        collect(ledger, Some(account.id), base, names);
    }
}

fn compatible(account: &Account, base: &Account) -> bool {
    account.trades_in(&base.currency)
        || base
            .security
            .as_deref()
            .is_some_and(|security| account.trades_in(security))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::AccountKind;

    #[test]
    fn lists_compatible_accounts_depth_first() {
        let mut ledger = Ledger::new();
        let assets = ledger.create_account("Assets", AccountKind::Asset, "USD");
        let checking = ledger
            .add_child_account(assets, Account::new("Checking", AccountKind::Bank, "USD"))
            .unwrap();
        ledger
            .add_child_account(assets, Account::new("Euro Cash", AccountKind::Cash, "EUR"))
            .unwrap();
        ledger
            .add_child_account(
                assets,
                Account::new("ACME", AccountKind::Stock, "ACME").with_security("USD"),
            )
            .unwrap();
        ledger.create_account("Food", AccountKind::Expense, "USD");

        let names = transfer_candidates(&ledger, checking).unwrap();
        assert_eq!(names, vec!["", "Assets", "Assets:Checking", "Assets:ACME", "Food"]);
    }

    #[test]
    fn security_of_base_widens_candidates() {
        let mut ledger = Ledger::new();
        let fund = ledger.add_account(
            Account::new("Fund", AccountKind::Mutual, "FND").with_security("EUR"),
        );
        ledger.create_account("Euro Cash", AccountKind::Cash, "EUR");
        ledger.create_account("Dollars", AccountKind::Cash, "USD");

        let names = transfer_candidates(&ledger, fund).unwrap();
        assert_eq!(names, vec!["", "Fund", "Euro Cash"]);
    }

    #[test]
    fn unknown_base_is_an_error() {
        let ledger = Ledger::new();
        assert!(matches!(
            transfer_candidates(&ledger, AccountId::new()),
            Err(RegisterError::UnknownAccount(_))
        ));
    }
}
